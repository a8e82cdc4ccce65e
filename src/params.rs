use crate::error::{BlockspinError, Result};
use serde::{Deserialize, Serialize};

/// Default number of codepoints per block
pub const DEFAULT_BLOCK_SIZE: usize = 3;

/// Largest accepted block size
pub const MAX_BLOCK_SIZE: usize = 65536;

/// Policy for empty words produced by consecutive separators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WordSplit {
    /// Runs of spaces act as a single delimiter; empty words are skipped
    #[default]
    Collapse,
    /// Empty words pass through, reproducing doubled separators exactly
    Preserve,
}

impl std::str::FromStr for WordSplit {
    type Err = BlockspinError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "collapse" => Ok(Self::Collapse),
            "preserve" => Ok(Self::Preserve),
            _ => Err(BlockspinError::UnsupportedPolicy(format!(
                "word split: {}",
                s
            ))),
        }
    }
}

/// Transform parameters
/// The defaults (block size 3, collapse) are what the top-level operations use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinParams {
    /// Number of codepoints per block
    pub block_size: usize,
    /// Empty-word policy for the text transform
    pub word_split: WordSplit,
}

impl Default for SpinParams {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            word_split: WordSplit::default(),
        }
    }
}

impl SpinParams {
    /// Create parameters with an explicit block size
    pub fn new(block_size: usize) -> Result<Self> {
        if block_size == 0 || block_size > MAX_BLOCK_SIZE {
            return Err(BlockspinError::InvalidBlockSize(block_size));
        }
        Ok(Self {
            block_size,
            ..Default::default()
        })
    }

    /// Set the empty-word policy
    pub fn with_word_split(mut self, word_split: WordSplit) -> Self {
        self.word_split = word_split;
        self
    }

    /// Serialize parameters to JSON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Deserialize parameters from JSON bytes
    /// Re-checks the block size bound so deserialized parameters are as trustworthy as constructed ones
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let params: Self = serde_json::from_slice(data)?;
        if params.block_size == 0 || params.block_size > MAX_BLOCK_SIZE {
            return Err(BlockspinError::InvalidBlockSize(params.block_size));
        }
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SpinParams::default();
        assert_eq!(params.block_size, 3);
        assert_eq!(params.word_split, WordSplit::Collapse);
    }

    #[test]
    fn test_params_creation() {
        let params = SpinParams::new(5).unwrap();
        assert_eq!(params.block_size, 5);
        assert_eq!(params.word_split, WordSplit::Collapse);
    }

    #[test]
    fn test_invalid_block_size() {
        assert!(SpinParams::new(0).is_err());
        assert!(SpinParams::new(MAX_BLOCK_SIZE + 1).is_err());
        assert!(SpinParams::new(1).is_ok());
        assert!(SpinParams::new(MAX_BLOCK_SIZE).is_ok());
    }

    #[test]
    fn test_serialization() {
        let params = SpinParams::new(7)
            .unwrap()
            .with_word_split(WordSplit::Preserve);
        let bytes = params.to_bytes().unwrap();
        let restored = SpinParams::from_bytes(&bytes).unwrap();

        assert_eq!(params, restored);
    }

    #[test]
    fn test_deserialization_rejects_zero_block_size() {
        let err = SpinParams::from_bytes(br#"{"block_size":0,"word_split":"collapse"}"#);
        assert!(matches!(err, Err(BlockspinError::InvalidBlockSize(0))));
    }

    #[test]
    fn test_word_split_from_str() {
        assert_eq!("collapse".parse::<WordSplit>().unwrap(), WordSplit::Collapse);
        assert_eq!("Preserve".parse::<WordSplit>().unwrap(), WordSplit::Preserve);
        assert!("trim".parse::<WordSplit>().is_err());
    }
}
