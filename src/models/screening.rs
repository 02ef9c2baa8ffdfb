//! Screening outcome models
//!
//! The per-visit screening summary produced by the engine and stored by the
//! record-keeping layer alongside the visit. Fields that could not be
//! evaluated (missing companion measurement, not applicable to the patient
//! type) are `None`; the form layer renders those as "data tidak lengkap"
//! rather than the engine inventing a value.

use crate::models::core::result::ClassificationResult;
use crate::models::core::types::Severity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gestational facts derived from the last-menstrual-period date (HPHT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestationSummary {
    /// Completed gestational weeks at the visit date
    pub weeks: u32,
    /// Trimester (1-3)
    pub trimester: u8,
    /// Estimated due date (HPL), 280 days after the anchor
    pub estimated_due_date: NaiveDate,
}

/// Classification outcomes for one visit, folded across every indicator
/// that applied to the patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitScreening {
    /// Patient age in whole months at the visit date
    pub age_months: u32,
    /// Weight-for-age (BB/U) outcome
    pub weight_for_age: Option<ClassificationResult>,
    /// Height-for-age (TB/U or PB/U) outcome
    pub height_for_age: Option<ClassificationResult>,
    /// Weight-for-height (BB/TB) outcome
    pub weight_for_height: Option<ClassificationResult>,
    /// Head-circumference-for-age outcome
    pub head_circumference: Option<ClassificationResult>,
    /// Overall nutrition status: the worst of the growth outcomes
    pub nutrition_overall: Option<ClassificationResult>,
    /// Stunting flag, reported distinctly even when weight indicators are
    /// normal; `None` when height was not measured
    pub stunted: Option<bool>,
    /// Body-mass-index (IMT) outcome
    pub body_mass_index: Option<ClassificationResult>,
    /// Waist-circumference metabolic risk outcome
    pub waist_circumference: Option<ClassificationResult>,
    /// Blood-pressure stage outcome
    pub blood_pressure: Option<ClassificationResult>,
    /// Gestational age, trimester and due date
    pub gestation: Option<GestationSummary>,
    /// Mid-upper-arm circumference (LILA) outcome
    pub arm_circumference: Option<ClassificationResult>,
    /// Pregnancy weight-gain adequacy outcome
    pub pregnancy_weight_gain: Option<ClassificationResult>,
    /// Activities-of-daily-living dependency outcome
    pub adl: Option<ClassificationResult>,
    /// Fall-risk outcome
    pub fall_risk: Option<ClassificationResult>,
    /// Worst severity across all evaluated outcomes
    pub overall_severity: Severity,
}

impl VisitScreening {
    /// Create an empty screening for a patient of the given age
    #[must_use]
    pub const fn empty(age_months: u32) -> Self {
        Self {
            age_months,
            weight_for_age: None,
            height_for_age: None,
            weight_for_height: None,
            head_circumference: None,
            nutrition_overall: None,
            stunted: None,
            body_mass_index: None,
            waist_circumference: None,
            blood_pressure: None,
            gestation: None,
            arm_circumference: None,
            pregnancy_weight_gain: None,
            adl: None,
            fall_risk: None,
            overall_severity: Severity::Good,
        }
    }

    /// Iterate over the outcomes that were actually evaluated
    pub fn results(&self) -> impl Iterator<Item = &ClassificationResult> {
        [
            &self.weight_for_age,
            &self.height_for_age,
            &self.weight_for_height,
            &self.head_circumference,
            &self.body_mass_index,
            &self.waist_circumference,
            &self.blood_pressure,
            &self.arm_circumference,
            &self.pregnancy_weight_gain,
            &self.adl,
            &self.fall_risk,
        ]
        .into_iter()
        .filter_map(Option::as_ref)
    }

    /// The worst evaluated outcome, if any indicator applied
    #[must_use]
    pub fn worst(&self) -> Option<&ClassificationResult> {
        self.results().max_by_key(|r| r.severity)
    }

    /// Whether any evaluated outcome needs follow-up or referral
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        self.overall_severity != Severity::Good
    }

    /// Recompute the overall severity from the evaluated outcomes
    #[must_use]
    pub fn fold_severity(&self) -> Severity {
        self.results()
            .map(|r| r.severity)
            .max()
            .unwrap_or(Severity::Good)
    }
}
