//! Adult metrics classification
//!
//! Body-mass-index (IMT) with the Asian cutoffs used in Indonesian
//! guidance, gender-dependent waist-circumference metabolic risk, and
//! blood-pressure staging.

use crate::error::{Result, ScreeningError};
use crate::models::core::result::ClassificationResult;
use crate::models::core::types::{Gender, Severity};

/// Waist-circumference risk threshold for men, in centimeters
pub const WAIST_RISK_THRESHOLD_MALE_CM: f64 = 90.0;
/// Waist-circumference risk threshold for women, in centimeters
pub const WAIST_RISK_THRESHOLD_FEMALE_CM: f64 = 80.0;

/// Body-mass-index category (Asian cutoffs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BmiCategory {
    /// IMT below 18.5
    Underweight,
    /// IMT 18.5 through 22.9
    Normal,
    /// IMT 23.0 through 24.9
    Overweight,
    /// IMT 25.0 and above
    Obese,
}

impl BmiCategory {
    /// Bucket an IMT value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 23.0 {
            Self::Normal
        } else if bmi < 25.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// The label rendered on the form
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Kurus",
            Self::Normal => "Normal",
            Self::Overweight => "Gemuk",
            Self::Obese => "Obesitas",
        }
    }

    /// Severity tier of this category
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Underweight | Self::Overweight => Severity::Warning,
            Self::Normal => Severity::Good,
            Self::Obese => Severity::Danger,
        }
    }
}

/// Blood-pressure stage.
///
/// Staged from the higher of the two independent readings: either value
/// alone can escalate the stage, so the comparisons are joined with `or`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BloodPressureStage {
    /// Below 120/80
    Normal,
    /// 120-139 systolic or 80-89 diastolic
    Prehypertension,
    /// 140 systolic or 90 diastolic and above
    Stage1,
    /// 160 systolic or 100 diastolic and above
    Stage2,
}

impl BloodPressureStage {
    /// Stage a blood-pressure pair
    #[must_use]
    pub fn from_reading(systolic_mmhg: f64, diastolic_mmhg: f64) -> Self {
        if systolic_mmhg >= 160.0 || diastolic_mmhg >= 100.0 {
            Self::Stage2
        } else if systolic_mmhg >= 140.0 || diastolic_mmhg >= 90.0 {
            Self::Stage1
        } else if systolic_mmhg >= 120.0 || diastolic_mmhg >= 80.0 {
            Self::Prehypertension
        } else {
            Self::Normal
        }
    }

    /// The label rendered on the form
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Prehypertension => "Prehipertensi",
            Self::Stage1 => "Hipertensi Derajat 1",
            Self::Stage2 => "Hipertensi Derajat 2",
        }
    }

    /// Severity tier of this stage
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Normal => Severity::Good,
            Self::Prehypertension => Severity::Warning,
            Self::Stage1 | Self::Stage2 => Severity::Danger,
        }
    }
}

/// Body mass index from weight and height.
///
/// Height must be positive; a zero height is a recording error, not an
/// incomplete form.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    if height_cm <= 0.0 {
        return Err(ScreeningError::InvalidMeasurement(format!(
            "height must be positive to compute IMT, got {height_cm}"
        )));
    }
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Classify body-mass-index (IMT).
///
/// Both measurements are required; a missing one yields `Indeterminate`.
/// The score carries the computed IMT value.
pub fn classify_bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Result<ClassificationResult> {
    let weight_kg = weight_kg.ok_or(ScreeningError::Indeterminate("berat badan"))?;
    let height_cm = height_cm.ok_or(ScreeningError::Indeterminate("tinggi badan"))?;
    let value = bmi(weight_kg, height_cm)?;
    let category = BmiCategory::from_bmi(value);
    Ok(ClassificationResult::new(
        value,
        category.label(),
        category.severity(),
    ))
}

/// Classify waist-circumference metabolic risk.
///
/// The threshold is gender-dependent: 90 cm for men, 80 cm for women.
#[must_use]
pub fn classify_waist_circumference(waist_cm: f64, gender: Gender) -> ClassificationResult {
    let threshold = match gender {
        Gender::Male => WAIST_RISK_THRESHOLD_MALE_CM,
        Gender::Female => WAIST_RISK_THRESHOLD_FEMALE_CM,
    };
    if waist_cm >= threshold {
        ClassificationResult::new(waist_cm, "Berisiko", Severity::Warning)
    } else {
        ClassificationResult::new(waist_cm, "Normal", Severity::Good)
    }
}

/// Classify a blood-pressure reading.
///
/// The pair must be recorded together; half a pair is a measurement error
/// while a fully absent pair is `Indeterminate`. The score carries the
/// systolic reading.
pub fn classify_blood_pressure(
    systolic_mmhg: Option<f64>,
    diastolic_mmhg: Option<f64>,
) -> Result<ClassificationResult> {
    let (systolic, diastolic) = match (systolic_mmhg, diastolic_mmhg) {
        (Some(s), Some(d)) => (s, d),
        (None, None) => return Err(ScreeningError::Indeterminate("tekanan darah")),
        _ => {
            return Err(ScreeningError::InvalidMeasurement(
                "systolic and diastolic pressure must be recorded together".to_string(),
            ));
        }
    };

    let stage = BloodPressureStage::from_reading(systolic, diastolic);
    Ok(ClassificationResult::new(
        systolic,
        stage.label(),
        stage.severity(),
    ))
}
