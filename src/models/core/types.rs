//! Common domain type definitions
//!
//! This module contains common enum types used across domain models and
//! classifiers to ensure consistency and facilitate code reuse.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of a patient, as recorded on the intake form (L/P)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (laki-laki)
    Male,
    /// Female (perempuan)
    Female,
}

impl Gender {
    /// Parse an intake-form gender code
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "l" | "laki-laki" | "m" | "male" | "1" => Some(Self::Male),
            "p" | "perempuan" | "f" | "female" | "2" => Some(Self::Female),
            _ => None,
        }
    }

    /// The single-letter form code (L/P)
    #[must_use]
    pub const fn as_code(self) -> &'static str {
        match self {
            Self::Male => "L",
            Self::Female => "P",
        }
    }
}

/// Category of patient handled by the health post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientType {
    /// Infant, under 12 months
    Infant,
    /// Toddler (balita), 12 through 59 months
    Toddler,
    /// Pregnant woman enrolled in antenatal care
    Pregnant,
    /// Adolescent or adult
    Adult,
    /// Elderly patient (lansia)
    Elderly,
}

impl PatientType {
    /// Parse an intake-form patient-type code
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "bayi" | "infant" => Some(Self::Infant),
            "balita" | "toddler" => Some(Self::Toddler),
            "ibu_hamil" | "ibu hamil" | "pregnant" => Some(Self::Pregnant),
            "remaja" | "dewasa" | "adult" => Some(Self::Adult),
            "lansia" | "elderly" => Some(Self::Elderly),
            _ => None,
        }
    }

    /// Whether this patient type is screened with the child growth charts
    #[must_use]
    pub const fn is_child(self) -> bool {
        matches!(self, Self::Infant | Self::Toddler)
    }
}

/// Severity tier attached to every classification outcome
///
/// Ordered from least to most severe so that the worst outcome of a visit
/// can be taken with `max`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Within the normal band
    Good,
    /// Needs follow-up at the next visit
    Warning,
    /// Needs referral or immediate attention
    Danger,
}

impl Severity {
    /// Get a descriptive name for this severity tier
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
