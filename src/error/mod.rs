//! Error handling for the screening engine.

use chrono::NaiveDate;

/// Specialized error type for screening and classification operations
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    /// A date input is inconsistent: birth date or gestational anchor in the
    /// future, or a measurement taken before birth
    #[error("invalid date range: {reason} ({earlier} is after {later})")]
    InvalidDateRange {
        /// What the two dates mean in the offending call
        reason: String,
        /// The date expected to come first
        earlier: NaiveDate,
        /// The date expected to come second
        later: NaiveDate,
    },

    /// The lookup index falls outside the tabulated reference domain.
    /// Classification fails closed rather than extrapolate.
    #[error("{value} is outside the tabulated {indicator} reference domain")]
    OutOfRange {
        /// Indicator whose reference series was consulted
        indicator: String,
        /// The offending lookup index (age in months or height in cm)
        value: f64,
    },

    /// A required companion measurement is missing. The caller chooses the
    /// placeholder; the engine never invents one.
    #[error("indeterminate classification: {0} not measured")]
    Indeterminate(&'static str),

    /// Gravida/para/abortus arithmetic is inconsistent
    #[error(
        "invalid obstetric history: gravida {gravida} must be at least para {para} + abortus {abortus} + 1"
    )]
    InvalidObstetricHistory {
        /// Pregnancy count
        gravida: u32,
        /// Live-birth count
        para: u32,
        /// Miscarriage count
        abortus: u32,
    },

    /// A measurement violates its own invariants (negative value, half of a
    /// blood-pressure pair)
    #[error("invalid measurement: {0}")]
    InvalidMeasurement(String),

    /// The reference dataset is malformed
    #[error("reference dataset error: {0}")]
    Dataset(String),
}

/// Result type for screening operations
pub type Result<T> = std::result::Result<T, ScreeningError>;
