use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("Unsupported PNG color type: {0:?}")]
    UnsupportedColor(png::ColorType),

    #[error("Frame too large for GIF: {width}x{height} (max 65535x65535)")]
    TooLarge { width: u32, height: u32 },

    #[error("Quantization error: {0}")]
    Quantize(#[from] neuquant::QuantizeError),
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("No frames to encode")]
    NoFrames,

    #[error("Frame {index} ({path}): {source}")]
    Frame {
        index: usize,
        path: String,
        #[source]
        source: FrameError,
    },

    #[error("Invalid background color: {0}")]
    Background(#[from] neuquant::ParseColorError),

    #[error("GIF encode error: {0}")]
    Gif(#[from] gif::EncodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}
