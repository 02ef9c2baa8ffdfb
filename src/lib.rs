//! A Rust library for Posyandu (community health post) screening: pure,
//! clock-injectable classification of raw measurements into clinical
//! status labels against growth and risk reference bands.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod reference;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::ScreeningConfig;
pub use error::{Result, ScreeningError};
pub use models::core::{
    ClassificationResult, Gender, Measurement, PatientContext, PatientType, Severity,
};
pub use models::screening::{GestationSummary, VisitScreening};
pub use models::visit::{Visit, VisitCollection};

// Reference data
pub use reference::{GrowthIndicator, GrowthReferencePoint, GrowthReferenceTable};

// Age resolution
pub use algorithm::age::{age_in_days, age_in_months, age_in_years, format_age};

// Classifiers
pub use algorithm::adult::{
    BloodPressureStage, BmiCategory, bmi, classify_blood_pressure, classify_bmi,
    classify_waist_circumference,
};
pub use algorithm::functional::{
    AdlAssessment, AdlLevel, FallRiskChecklist, score_adl, score_fall_risk,
};
pub use algorithm::growth::{
    classify_head_circumference, classify_height_for_age, classify_weight_for_age,
    classify_weight_for_height, screen_growth,
};
pub use algorithm::obstetric::{
    ObstetricHistory, classify_arm_circumference, classify_pregnancy_weight_gain,
    estimated_due_date, gestation_summary, gestational_age_weeks, trimester,
    validate_obstetric_history,
};

// Visit screening
pub use algorithm::screening::{
    ScreeningRecap, VisitInput, recap_screenings, screen_visit, screen_visits,
};
