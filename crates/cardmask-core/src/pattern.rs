//! Field-detection patterns
//!
//! A record is attributed to at most one field: patterns are tried in a
//! fixed order (the three built-ins, then caller extras) and the first
//! match wins, even when a record could match several.

use crate::error::Result;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// "card", any underscores, any number of "data" tokens, "number"
const CARD_NUMBER_PATTERN: &str = r"card_*(?:data)*number";

/// "exp" followed by a non-alphabetic character, or the word "expiry"
const EXPIRY_PATTERN: &str = r"exp[^a-z]|expiry";

const CVV_PATTERN: &str = r"cvv";

/// Kind of sensitive field a pattern detects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Card number, gated by the Luhn validator
    CardNumber,

    /// Card expiry date, gated by the MMYY validator
    Expiry,

    /// Card CVV code, gated by the three-digit validator
    Cvv,

    /// Caller-supplied field, masked without validation
    Custom,
}

/// A compiled, case-insensitive field-detection pattern tagged with the
/// kind of field it detects.
///
/// The kind is attached at construction so validator dispatch never depends
/// on where the pattern sits in the list.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    kind: FieldKind,
    regex: Arc<Regex>,
}

impl FieldPattern {
    fn builtin(kind: FieldKind, pattern: &str) -> Self {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .expect("built-in pattern is valid");

        Self {
            kind,
            regex: Arc::new(regex),
        }
    }

    /// Compile a caller-supplied pattern. The only fallible construction
    /// path: the pattern text may not be a valid regex.
    pub fn custom(pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;

        Ok(Self {
            kind: FieldKind::Custom,
            regex: Arc::new(regex),
        })
    }

    /// The kind of field this pattern detects
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Whether this pattern matches anywhere in `record`
    pub fn is_match(&self, record: &str) -> bool {
        self.regex.is_match(record)
    }
}

/// The ordered pattern list: card number, expiry, CVV, then caller extras
/// in caller order.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<FieldPattern>,
}

impl PatternSet {
    /// Build the full list, compiling `extra_patterns` case-insensitively.
    pub fn new<S: AsRef<str>>(extra_patterns: &[S]) -> Result<Self> {
        let mut patterns = vec![
            FieldPattern::builtin(FieldKind::CardNumber, CARD_NUMBER_PATTERN),
            FieldPattern::builtin(FieldKind::Expiry, EXPIRY_PATTERN),
            FieldPattern::builtin(FieldKind::Cvv, CVV_PATTERN),
        ];

        for pattern in extra_patterns {
            patterns.push(FieldPattern::custom(pattern.as_ref())?);
        }

        Ok(Self { patterns })
    }

    /// The first pattern in list order that matches `record`, if any.
    pub fn first_match(&self, record: &str) -> Option<&FieldPattern> {
        self.patterns.iter().find(|p| p.is_match(record))
    }

    /// Number of patterns, built-ins included
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
