//! Patient context model
//!
//! The minimal patient facts every classifier needs: birth date, gender and
//! the patient category the health post registered the person under. A
//! value type, re-derivable from the intake record.

use crate::error::{Result, ScreeningError};
use crate::models::core::types::{Gender, PatientType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Patient facts supplied alongside each measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientContext {
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Gender as recorded on the intake form
    pub gender: Gender,
    /// Patient category, which selects the applicable classifiers
    pub patient_type: PatientType,
}

impl PatientContext {
    /// Create a new patient context
    #[must_use]
    pub const fn new(birth_date: NaiveDate, gender: Gender, patient_type: PatientType) -> Self {
        Self {
            birth_date,
            gender,
            patient_type,
        }
    }

    /// Check the context against a reference date.
    ///
    /// The birth date must not lie after `as_of`; a measurement dated before
    /// birth (or a birth date in the future) is rejected before any
    /// classification runs.
    pub fn validate(&self, as_of: NaiveDate) -> Result<()> {
        if self.birth_date > as_of {
            return Err(ScreeningError::InvalidDateRange {
                reason: "birth date must not lie after the reference date".to_string(),
                earlier: self.birth_date,
                later: as_of,
            });
        }
        Ok(())
    }

    /// Whether this patient is screened with the child growth charts
    #[must_use]
    pub const fn is_child(&self) -> bool {
        self.patient_type.is_child()
    }
}
