//! Cardmask payment field masking
//!
//! This crate masks the numeric values of sensitive payment fields in
//! delimited text:
//! - Card number, card expiry and card CVV detection by field name
//! - Structural validation (Luhn for card numbers) before masking
//! - Caller-supplied field patterns masked without validation

pub mod error;
pub mod masker;
pub mod pattern;
pub mod record;
pub mod validate;

pub use error::{Error, Result};
pub use masker::{Masker, MaskerConfig, mask};
pub use pattern::{FieldKind, FieldPattern, PatternSet};
pub use record::Delimiter;
