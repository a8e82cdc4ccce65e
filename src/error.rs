use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlockspinError {
    #[error("Invalid encoding: input is not well-formed UTF-8 (first invalid byte at offset {0})")]
    InvalidEncoding(usize),

    #[error("Invalid block size: {0}. Must be between 1 and 65536")]
    InvalidBlockSize(usize),

    #[error("Unsupported word split policy: {0}")]
    UnsupportedPolicy(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BlockspinError>;
