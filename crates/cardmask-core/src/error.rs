//! Error types for Cardmask Core

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid field pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
