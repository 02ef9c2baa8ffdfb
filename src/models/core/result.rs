//! Uniform classification outcome
//!
//! Every classifier in the engine returns the same small value shape so the
//! consuming form and dashboard layers have a single rendering contract.

use crate::models::core::types::Severity;
use serde::{Deserialize, Serialize};

/// Outcome of a single classification call
///
/// `score` carries the numeric quantity the label was derived from: the
/// approximate SD distance for growth indicators, the BMI value, the ADL
/// point sum, the checked fall-risk factor count, and so on. The result has
/// no identity beyond the call that produced it; the record-keeping layer
/// may persist it alongside a visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Numeric score underlying the label
    pub score: f64,
    /// Human-readable status label, as rendered on the form
    pub label: String,
    /// Severity tier for traffic-light rendering
    pub severity: Severity,
}

impl ClassificationResult {
    /// Create a new classification outcome
    #[must_use]
    pub fn new(score: f64, label: impl Into<String>, severity: Severity) -> Self {
        Self {
            score,
            label: label.into(),
            severity,
        }
    }

    /// Whether this outcome needs follow-up or referral
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        self.severity != Severity::Good
    }
}
