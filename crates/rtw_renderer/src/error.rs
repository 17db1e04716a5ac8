//! Errors surfaced by the renderer.
//!
//! Misses, depth exhaustion and absorption are ordinary radiance results,
//! not errors. Only configuration problems and output failures end up here.

use thiserror::Error;

/// Errors that can occur while rendering an image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),
}

pub type RenderResult<T> = Result<T, RenderError>;
