use crate::error::{BlockspinError, Result};
use crate::params::SpinParams;
use crate::pipeline::{join_words, spin, split_words, unspin};

/// Codec applying the block-reversal transform with a fixed set of parameters
///
/// Stateless and `Copy`; a single codec can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinCodec {
    params: SpinParams,
}

impl SpinCodec {
    /// Create a codec from explicit parameters
    pub fn new(params: SpinParams) -> Self {
        Self { params }
    }

    /// Create a codec with the given block size and default word handling
    pub fn with_block_size(block_size: usize) -> Result<Self> {
        Ok(Self::new(SpinParams::new(block_size)?))
    }

    /// Parameters this codec was built with
    pub fn params(&self) -> &SpinParams {
        &self.params
    }

    /// Obfuscate text by reversing its block order
    /// Inputs of at most one block (and the empty string) pass through unchanged
    pub fn encode(&self, input: impl AsRef<[u8]>) -> Result<String> {
        let text = well_formed(input.as_ref())?;
        let cps: Vec<char> = text.chars().collect();
        Ok(spin(&cps, self.params.block_size))
    }

    /// Invert `encode`, recovering the original text
    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<String> {
        let text = well_formed(input.as_ref())?;
        let cps: Vec<char> = text.chars().collect();
        Ok(unspin(&cps, self.params.block_size))
    }

    /// Apply `encode` word by word across space-delimited text
    /// Word handling follows the codec's `WordSplit` policy
    pub fn encode_text(&self, input: impl AsRef<[u8]>) -> Result<String> {
        self.transform_text(input.as_ref(), spin)
    }

    /// Apply `decode` word by word across space-delimited text
    pub fn decode_text(&self, input: impl AsRef<[u8]>) -> Result<String> {
        self.transform_text(input.as_ref(), unspin)
    }

    fn transform_text(
        &self,
        input: &[u8],
        transform: fn(&[char], usize) -> String,
    ) -> Result<String> {
        let text = well_formed(input)?;
        if text.is_empty() {
            return Ok(String::new());
        }
        let words = split_words(text, self.params.word_split);
        let transformed = words.into_iter().map(|word| {
            let cps: Vec<char> = word.chars().collect();
            transform(&cps, self.params.block_size)
        });
        Ok(join_words(transformed))
    }
}

/// Check that input bytes are well-formed UTF-8 and view them as text
/// Runs once at the entry of every public operation; the pipeline below it is total
fn well_formed(input: &[u8]) -> Result<&str> {
    std::str::from_utf8(input)
        .map_err(|e| BlockspinError::InvalidEncoding(e.valid_up_to()))
}
