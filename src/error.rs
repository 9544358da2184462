use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },
    #[error("screen dimensions must be positive, got {width}x{height}")]
    InvalidScreenSize { width: u32, height: u32 },
    #[error("invalid gesture configuration: {0}")]
    InvalidConfig(&'static str),
}
