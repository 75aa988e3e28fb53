//! Masking engine
//!
//! Orchestrates splitting, field matching, value extraction and validation.
//! Per record, the first matching pattern wins and the first digit run is
//! the candidate value. Built-in fields mask only when their validator
//! accepts the candidate; caller-supplied fields always mask. Every edge
//! case (no match, no digits, failed validation) leaves the record as-is.

use crate::error::Result;
use crate::pattern::{FieldKind, PatternSet};
use crate::record;
use crate::validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, trace};

/// Configuration for a [`Masker`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaskerConfig {
    /// Additional case-insensitive field-name patterns whose first numeric
    /// value is masked without validation, tried after the built-ins in
    /// this order
    #[serde(default)]
    pub extra_patterns: Vec<String>,
}

/// Reusable masking engine with precompiled patterns.
///
/// Holds no mutable state; a single instance can serve concurrent calls.
pub struct Masker {
    patterns: PatternSet,
    digit_run: Arc<Regex>,
}

impl Masker {
    /// Create a new masker with the given configuration
    pub fn new(config: MaskerConfig) -> Result<Self> {
        let patterns = PatternSet::new(&config.extra_patterns)?;
        let digit_run = Arc::new(Regex::new(r"[0-9]+").expect("digit pattern is valid"));

        Ok(Self {
            patterns,
            digit_run,
        })
    }

    /// Mask qualifying numeric values in `input`, preserving its delimiter
    /// structure.
    pub fn mask(&self, input: &str) -> String {
        let (records, delimiter) = record::split(input);
        debug!(
            "masking {} record(s) split on {:?}",
            records.len(),
            delimiter
        );

        let masked: Vec<Cow<'_, str>> = records
            .iter()
            .map(|r| match self.mask_record(r) {
                Some(rewritten) => Cow::Owned(rewritten),
                None => Cow::Borrowed(*r),
            })
            .collect();

        record::join(&masked, delimiter)
    }

    /// Rewrite one record, or `None` to pass it through untouched.
    fn mask_record(&self, record: &str) -> Option<String> {
        let pattern = self.patterns.first_match(record)?;

        let Some(run) = self.digit_run.find(record) else {
            trace!("field matched but record has no numeric value");
            return None;
        };
        let candidate = run.as_str();

        let valid = match pattern.kind() {
            FieldKind::CardNumber => validate::is_valid_card_number(candidate),
            FieldKind::Expiry => validate::is_valid_expiry(candidate),
            FieldKind::Cvv => validate::is_valid_cvv(candidate),
            FieldKind::Custom => true,
        };
        if !valid {
            trace!(
                "candidate failed {:?} validation, leaving record unchanged",
                pattern.kind()
            );
            return None;
        }

        debug!("masking {} digit(s) for {:?} field", candidate.len(), pattern.kind());

        // Replaces every textual occurrence of the candidate digit string,
        // including occurrences embedded in longer digit runs.
        Some(record.replace(candidate, &"*".repeat(candidate.len())))
    }
}

/// One-shot mask: compile `extra_patterns`, mask `input`, discard the engine.
pub fn mask<S: AsRef<str>>(input: &str, extra_patterns: &[S]) -> Result<String> {
    let config = MaskerConfig {
        extra_patterns: extra_patterns.iter().map(|p| p.as_ref().to_string()).collect(),
    };

    Ok(Masker::new(config)?.mask(input))
}
