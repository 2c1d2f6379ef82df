use thiserror::Error;

#[derive(Error, Debug)]
pub enum BytecastError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("Entropy source unavailable: {0}")]
    EntropySource(String),

    #[error("Invalid charset: {0}")]
    InvalidCharset(String),

    #[error("Invalid codepoint: {0}")]
    InvalidCodepoint(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Integrity check failed: expected digest {expected}, got {actual}")]
    IntegrityMismatch { expected: String, actual: String },
}

impl BytecastError {
    /// True for malformed hex or base64 input
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::HexDecode(_) | Self::Base64Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, BytecastError>;
