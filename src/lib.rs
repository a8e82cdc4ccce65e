//! Blockspin - reversible block-reversal text obfuscation
//!
//! A deterministic, exactly invertible permutation over a string's
//! codepoints: the input is partitioned into fixed-size blocks (3
//! codepoints by default) and the block order is reversed. The output is
//! human-unreadable but carries no secrecy guarantee; this is
//! obfuscation, not encryption.
//!
//! ## Transform Pipeline
//!
//! Each operation runs the input through the following stages:
//!
//! ```text
//! Input → Validate → Partition → Reverse → Concat → Output
//! ```
//!
//! - **Validate**: reject bytes that are not well-formed UTF-8
//! - **Partition**: carve the codepoint sequence into blocks of 3;
//!   encode partitions from the start and decode from the end, and that
//!   asymmetry is what makes the pair invert exactly when the length is
//!   not a multiple of the block size
//! - **Reverse**: flip the block order
//! - **Concat**: join the blocks back into a string
//!
//! The text operations apply the same transform word by word across
//! ASCII-space-delimited text. Codepoints are the atomic unit
//! throughout: multi-byte characters, combining marks, and emoji are
//! never split.
//!
//! ## Example
//!
//! ```
//! use blockspin::{decode, encode, encode_text};
//!
//! let obfuscated = encode("thespine").unwrap();
//! assert_eq!(obfuscated, "nespithe");
//! assert_eq!(decode(&obfuscated).unwrap(), "thespine");
//!
//! assert_eq!(encode_text("meh noob").unwrap(), "meh bnoo");
//! ```

pub mod codec;
pub mod error;
pub mod params;
pub mod pipeline;

pub use codec::SpinCodec;
pub use error::{BlockspinError, Result};
pub use params::{SpinParams, WordSplit, DEFAULT_BLOCK_SIZE};

/// Obfuscate text with the default block size
/// Identity for inputs of at most one block; fails only on malformed UTF-8
pub fn encode(input: impl AsRef<[u8]>) -> Result<String> {
    SpinCodec::default().encode(input)
}

/// Invert [`encode`], recovering the original text
pub fn decode(input: impl AsRef<[u8]>) -> Result<String> {
    SpinCodec::default().decode(input)
}

/// Obfuscate space-delimited text word by word with the default parameters
pub fn encode_text(input: impl AsRef<[u8]>) -> Result<String> {
    SpinCodec::default().encode_text(input)
}

/// Invert [`encode_text`] word by word with the default parameters
pub fn decode_text(input: impl AsRef<[u8]>) -> Result<String> {
    SpinCodec::default().decode_text(input)
}
