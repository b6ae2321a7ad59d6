//! Errors raised while setting up a render.
//!
//! Tracing itself never fails; these cover configuration only.

use thiserror::Error;

/// Errors that can occur while configuring a renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image must be at least 2x2 pixels, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Samples per pixel must be at least 1")]
    ZeroSamples,

    #[error("Max depth {max_depth} exceeds the limit of {limit}")]
    DepthTooLarge { max_depth: u32, limit: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
