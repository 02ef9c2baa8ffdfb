//! Child growth classification
//!
//! Classifies a child's weight and height measurements against the growth
//! reference bands: weight-for-age (BB/U), height-for-age (TB/U),
//! weight-for-height (BB/TB) and head-circumference-for-age.

pub mod status;

use crate::error::{Result, ScreeningError};
use crate::models::core::result::ClassificationResult;
use crate::models::core::types::{Gender, Severity};
use crate::reference::{GrowthIndicator, GrowthReferencePoint, GrowthReferenceTable};
use status::{
    HeadCircumferenceStatus, HeightForAgeStatus, WeightForAgeStatus, WeightForHeightStatus,
};

/// Scaled SD distance of a measurement from a reference point.
///
/// The bands are asymmetric, so the divisor depends on which side of the
/// median the measurement falls: the distance to the +1 SD curve above, the
/// distance to the -1 SD curve below. Scaled so 1.0 is roughly one SD.
#[must_use]
pub fn distance_sd(value: f64, point: &GrowthReferencePoint) -> f64 {
    if value >= point.median {
        (value - point.median) / point.sd1_up
    } else {
        (value - point.median) / point.sd1_down
    }
}

/// Classify weight-for-age (BB/U)
pub fn classify_weight_for_age(
    table: &GrowthReferenceTable,
    weight_kg: f64,
    age_months: f64,
    gender: Gender,
) -> Result<ClassificationResult> {
    let point = table.lookup(GrowthIndicator::WeightForAge, gender, age_months)?;
    let d = distance_sd(weight_kg, &point);
    let status = WeightForAgeStatus::from_distance(d);
    Ok(status::to_result(d, status.label(), status.severity()))
}

/// Classify height-for-age (TB/U or PB/U)
pub fn classify_height_for_age(
    table: &GrowthReferenceTable,
    height_cm: f64,
    age_months: f64,
    gender: Gender,
) -> Result<ClassificationResult> {
    let point = table.lookup(GrowthIndicator::HeightForAge, gender, age_months)?;
    let d = distance_sd(height_cm, &point);
    let status = HeightForAgeStatus::from_distance(d);
    Ok(status::to_result(d, status.label(), status.severity()))
}

/// Classify weight-for-height (BB/TB).
///
/// Indexed by height rather than age. Either measurement may be missing on
/// the form; classification is then `Indeterminate` and the caller decides
/// how to render the gap.
pub fn classify_weight_for_height(
    table: &GrowthReferenceTable,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    gender: Gender,
) -> Result<ClassificationResult> {
    let weight_kg = weight_kg.ok_or(ScreeningError::Indeterminate("berat badan"))?;
    let height_cm = height_cm.ok_or(ScreeningError::Indeterminate("tinggi badan"))?;
    let point = table.lookup(GrowthIndicator::WeightForHeight, gender, height_cm)?;
    let d = distance_sd(weight_kg, &point);
    let status = WeightForHeightStatus::from_distance(d);
    Ok(status::to_result(d, status.label(), status.severity()))
}

/// Classify head-circumference-for-age
pub fn classify_head_circumference(
    table: &GrowthReferenceTable,
    head_circumference_cm: f64,
    age_months: f64,
    gender: Gender,
) -> Result<ClassificationResult> {
    let point = table.lookup(GrowthIndicator::HeadCircumferenceForAge, gender, age_months)?;
    let d = distance_sd(head_circumference_cm, &point);
    let status = HeadCircumferenceStatus::from_distance(d);
    Ok(status::to_result(d, status.label(), status.severity()))
}

/// Growth outcomes for one child visit
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthScreening {
    /// Weight-for-age outcome
    pub weight_for_age: Option<ClassificationResult>,
    /// Height-for-age outcome
    pub height_for_age: Option<ClassificationResult>,
    /// Weight-for-height outcome
    pub weight_for_height: Option<ClassificationResult>,
    /// Head-circumference outcome
    pub head_circumference: Option<ClassificationResult>,
    /// Worst of the three nutrition indicators
    pub nutrition_overall: Option<ClassificationResult>,
    /// Stunting flag, distinct from the overall status; `None` when height
    /// was not measured
    pub stunted: Option<bool>,
}

/// Evaluate every growth indicator a child visit's measurements allow.
///
/// Missing measurements leave the affected indicators `None`; an age or
/// height outside the reference domain is an error (fail closed). The
/// overall nutrition status is the worst of weight-for-age,
/// height-for-age and weight-for-height, while stunting is also reported
/// as its own flag so a stunted child is never hidden behind a normal
/// weight indicator.
pub fn screen_growth(
    table: &GrowthReferenceTable,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    head_circumference_cm: Option<f64>,
    age_months: f64,
    gender: Gender,
) -> Result<GrowthScreening> {
    let weight_for_age = match weight_kg {
        Some(weight) => Some(classify_weight_for_age(table, weight, age_months, gender)?),
        None => None,
    };

    let (height_for_age, stunted) = match height_cm {
        Some(height) => {
            let result = classify_height_for_age(table, height, age_months, gender)?;
            let stunted = result.severity != Severity::Good;
            (Some(result), Some(stunted))
        }
        None => (None, None),
    };

    let weight_for_height = match classify_weight_for_height(table, weight_kg, height_cm, gender) {
        Ok(result) => Some(result),
        Err(ScreeningError::Indeterminate(_)) => None,
        Err(e) => return Err(e),
    };

    let head_circumference = match head_circumference_cm {
        Some(hc) => Some(classify_head_circumference(table, hc, age_months, gender)?),
        None => None,
    };

    // max_by_key keeps the last maximum, so weight-for-age wins severity ties
    let nutrition_overall = [&height_for_age, &weight_for_height, &weight_for_age]
        .into_iter()
        .filter_map(|r| r.as_ref())
        .max_by_key(|r| r.severity)
        .cloned();

    Ok(GrowthScreening {
        weight_for_age,
        height_for_age,
        weight_for_height,
        head_circumference,
        nutrition_overall,
        stunted,
    })
}
