//! Obstetric calculations
//!
//! Gestational age and due date from the last-menstrual-period date
//! (HPHT), LILA screening for chronic energy deficiency, pregnancy
//! weight-gain adequacy, and the gravida/para/abortus consistency check.

use crate::error::{Result, ScreeningError};
use crate::models::core::result::ClassificationResult;
use crate::models::core::types::Severity;
use crate::models::screening::GestationSummary;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Gestation length convention: 40 weeks of plain day arithmetic
const GESTATION_DAYS: u64 = 280;

/// LILA threshold below which a pregnancy is screened as at risk of
/// chronic energy deficiency (KEK), in centimeters
pub const LILA_KEK_THRESHOLD_CM: f64 = 23.5;

/// Recommended total pregnancy weight gain, inclusive band in kilograms
pub const WEIGHT_GAIN_BAND_KG: (f64, f64) = (8.0, 16.0);

/// Gravida/para/abortus counts from the antenatal intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstetricHistory {
    /// Number of pregnancies, including the current one
    pub gravida: u32,
    /// Number of live births
    pub para: u32,
    /// Number of miscarriages
    pub abortus: u32,
}

/// Completed gestational weeks at the reference date.
///
/// An anchor date in the future is rejected; the result is never negative.
pub fn gestational_age_weeks(hpht: NaiveDate, as_of: NaiveDate) -> Result<u32> {
    if hpht > as_of {
        return Err(ScreeningError::InvalidDateRange {
            reason: "gestational anchor date (HPHT) must not lie after the reference date"
                .to_string(),
            earlier: hpht,
            later: as_of,
        });
    }
    let days = (as_of - hpht).num_days();
    Ok((days / 7) as u32)
}

/// Estimated due date (HPL): the anchor plus 280 days
#[must_use]
pub fn estimated_due_date(hpht: NaiveDate) -> NaiveDate {
    hpht + Days::new(GESTATION_DAYS)
}

/// Trimester for a completed gestational week count.
///
/// Boundary weeks belong to the earlier trimester: week 12 is still the
/// first, week 27 still the second.
#[must_use]
pub const fn trimester(weeks: u32) -> u8 {
    if weeks <= 12 {
        1
    } else if weeks <= 27 {
        2
    } else {
        3
    }
}

/// Derive weeks, trimester and due date from the anchor in one call, the
/// way the antenatal form renders them
pub fn gestation_summary(hpht: NaiveDate, as_of: NaiveDate) -> Result<GestationSummary> {
    let weeks = gestational_age_weeks(hpht, as_of)?;
    Ok(GestationSummary {
        weeks,
        trimester: trimester(weeks),
        estimated_due_date: estimated_due_date(hpht),
    })
}

/// Classify mid-upper-arm circumference (LILA).
///
/// A single threshold with no gradation: at or above 23.5 cm is normal,
/// below it flags risk of chronic energy deficiency.
#[must_use]
pub fn classify_arm_circumference(lila_cm: f64) -> ClassificationResult {
    if lila_cm >= LILA_KEK_THRESHOLD_CM {
        ClassificationResult::new(lila_cm, "Normal", Severity::Good)
    } else {
        ClassificationResult::new(lila_cm, "Risiko KEK", Severity::Warning)
    }
}

/// Classify pregnancy weight-gain adequacy.
///
/// Gain is current weight minus pre-pregnancy weight; 8 through 16 kg
/// inclusive is adequate, anything outside the band flags a warning in
/// either direction. The pre-pregnancy weight usually comes from an
/// earlier record and may be missing, which yields `Indeterminate`.
pub fn classify_pregnancy_weight_gain(
    pre_pregnancy_kg: Option<f64>,
    current_kg: Option<f64>,
) -> Result<ClassificationResult> {
    let pre = pre_pregnancy_kg.ok_or(ScreeningError::Indeterminate("berat badan sebelum hamil"))?;
    let current = current_kg.ok_or(ScreeningError::Indeterminate("berat badan"))?;
    let gain = current - pre;

    let (lo, hi) = WEIGHT_GAIN_BAND_KG;
    let result = if gain < lo {
        ClassificationResult::new(gain, "Kenaikan Kurang", Severity::Warning)
    } else if gain > hi {
        ClassificationResult::new(gain, "Kenaikan Berlebih", Severity::Warning)
    } else {
        ClassificationResult::new(gain, "Normal", Severity::Good)
    };
    Ok(result)
}

/// Check gravida/para/abortus arithmetic.
///
/// The current pregnancy counts toward gravida, so gravida must be at
/// least para + abortus + 1.
pub fn validate_obstetric_history(history: ObstetricHistory) -> Result<()> {
    let ObstetricHistory {
        gravida,
        para,
        abortus,
    } = history;
    if gravida < para + abortus + 1 {
        return Err(ScreeningError::InvalidObstetricHistory {
            gravida,
            para,
            abortus,
        });
    }
    Ok(())
}
