//! Functional assessment scoring for elderly patients
//!
//! ADL (activities of daily living) independence scoring over five
//! domains, and fall-risk scoring over a fixed factor checklist.

use crate::models::core::result::ClassificationResult;
use crate::models::core::types::Severity;
use serde::{Deserialize, Serialize};

/// Independence level recorded per ADL domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdlLevel {
    /// Fully independent
    Mandiri,
    /// Needs partial assistance
    BantuanSebagian,
    /// Fully dependent
    BantuanPenuh,
}

impl AdlLevel {
    /// Points contributed to the ADL score
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Mandiri => 2,
            Self::BantuanSebagian => 1,
            Self::BantuanPenuh => 0,
        }
    }
}

/// The five ADL domains assessed at an elderly visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdlAssessment {
    /// Eating
    pub eating: AdlLevel,
    /// Dressing
    pub dressing: AdlLevel,
    /// Bathing
    pub bathing: AdlLevel,
    /// Toileting
    pub toileting: AdlLevel,
    /// Moving around the home
    pub mobility: AdlLevel,
}

impl AdlAssessment {
    /// Assessment with the same level in every domain
    #[must_use]
    pub const fn uniform(level: AdlLevel) -> Self {
        Self {
            eating: level,
            dressing: level,
            bathing: level,
            toileting: level,
            mobility: level,
        }
    }

    /// Point sum across the five domains, 0 through 10
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.eating.points()
            + self.dressing.points()
            + self.bathing.points()
            + self.toileting.points()
            + self.mobility.points()
    }
}

/// Dependency tier derived from the ADL score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdlDependency {
    /// Score 9-10
    Independent,
    /// Score 5-8
    LightDependency,
    /// Score 0-4
    HeavyDependency,
}

impl AdlDependency {
    /// Tier for a point sum
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= 9 {
            Self::Independent
        } else if score >= 5 {
            Self::LightDependency
        } else {
            Self::HeavyDependency
        }
    }

    /// The label rendered on the form
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Independent => "Mandiri",
            Self::LightDependency => "Ketergantungan Ringan",
            Self::HeavyDependency => "Ketergantungan Berat",
        }
    }

    /// Severity tier of this dependency level
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Independent => Severity::Good,
            Self::LightDependency => Severity::Warning,
            Self::HeavyDependency => Severity::Danger,
        }
    }
}

/// Score an ADL assessment; the score field carries the point sum
#[must_use]
pub fn score_adl(assessment: &AdlAssessment) -> ClassificationResult {
    let score = assessment.score();
    let dependency = AdlDependency::from_score(score);
    ClassificationResult::new(f64::from(score), dependency.label(), dependency.severity())
}

/// Fixed checklist of fall-risk factors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallRiskChecklist {
    /// Has fallen before
    pub history_of_falling: bool,
    /// Balance problems
    pub balance_impairment: bool,
    /// Uses a cane, walker or other aid
    pub uses_walking_aid: bool,
    /// Dizziness when standing up
    pub dizziness_on_standing: bool,
    /// Impaired vision
    pub vision_impairment: bool,
}

impl FallRiskChecklist {
    /// Number of checked risk factors
    #[must_use]
    pub const fn checked_count(&self) -> u8 {
        self.history_of_falling as u8
            + self.balance_impairment as u8
            + self.uses_walking_aid as u8
            + self.dizziness_on_standing as u8
            + self.vision_impairment as u8
    }
}

/// Fall-risk tier derived from the checked factor count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallRisk {
    /// No factors checked
    Low,
    /// One or two factors checked
    Moderate,
    /// Three or more factors checked
    High,
}

impl FallRisk {
    /// Tier for a checked factor count
    #[must_use]
    pub const fn from_count(count: u8) -> Self {
        if count == 0 {
            Self::Low
        } else if count <= 2 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// The label rendered on the form
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Risiko Rendah",
            Self::Moderate => "Risiko Sedang",
            Self::High => "Risiko Tinggi",
        }
    }

    /// Severity tier of this risk level
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Low => Severity::Good,
            Self::Moderate => Severity::Warning,
            Self::High => Severity::Danger,
        }
    }
}

/// Score a fall-risk checklist; the score field carries the checked count
#[must_use]
pub fn score_fall_risk(checklist: &FallRiskChecklist) -> ClassificationResult {
    let count = checklist.checked_count();
    let risk = FallRisk::from_count(count);
    ClassificationResult::new(f64::from(count), risk.label(), risk.severity())
}
