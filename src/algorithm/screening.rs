//! Visit-level screening
//!
//! Routes one visit's measurements to the classifiers that apply to the
//! patient's category and folds the outcomes into a `VisitScreening`.
//! Indicators that cannot be evaluated for lack of data are left out of
//! the summary rather than guessed; hard input errors propagate.

use crate::algorithm::adult::{classify_blood_pressure, classify_bmi, classify_waist_circumference};
use crate::algorithm::age::age_in_months;
use crate::algorithm::functional::{
    AdlAssessment, FallRiskChecklist, score_adl, score_fall_risk,
};
use crate::algorithm::growth::screen_growth;
use crate::algorithm::obstetric::{
    ObstetricHistory, classify_arm_circumference, classify_pregnancy_weight_gain,
    gestation_summary, validate_obstetric_history,
};
use crate::config::ScreeningConfig;
use crate::error::{Result, ScreeningError};
use crate::models::core::measurement::Measurement;
use crate::models::core::patient::PatientContext;
use crate::models::core::result::ClassificationResult;
use crate::models::core::types::PatientType;
use crate::models::screening::VisitScreening;
use crate::reference::GrowthReferenceTable;
use crate::utils::logging::{log_incomplete_data, log_screening_complete};
use itertools::Itertools;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Everything the engine needs to screen one visit.
///
/// The functional-assessment answers and the pre-pregnancy weight come
/// from other records than the measurement form, so they ride alongside.
#[derive(Debug, Clone, Copy)]
pub struct VisitInput<'a> {
    /// Patient facts
    pub patient: &'a PatientContext,
    /// Measurements taken at the visit
    pub measurement: &'a Measurement,
    /// ADL answers, for elderly visits
    pub adl: Option<&'a AdlAssessment>,
    /// Fall-risk checklist, for elderly visits
    pub fall_risk: Option<&'a FallRiskChecklist>,
    /// Pre-pregnancy weight from the antenatal intake record
    pub pre_pregnancy_weight_kg: Option<f64>,
    /// Gravida/para/abortus counts from the antenatal intake record
    pub obstetric_history: Option<ObstetricHistory>,
}

impl<'a> VisitInput<'a> {
    /// Create an input with just the measurement form
    #[must_use]
    pub const fn new(patient: &'a PatientContext, measurement: &'a Measurement) -> Self {
        Self {
            patient,
            measurement,
            adl: None,
            fall_risk: None,
            pre_pregnancy_weight_kg: None,
            obstetric_history: None,
        }
    }

    /// Attach ADL answers
    #[must_use]
    pub const fn with_adl(mut self, adl: &'a AdlAssessment) -> Self {
        self.adl = Some(adl);
        self
    }

    /// Attach a fall-risk checklist
    #[must_use]
    pub const fn with_fall_risk(mut self, fall_risk: &'a FallRiskChecklist) -> Self {
        self.fall_risk = Some(fall_risk);
        self
    }

    /// Attach the pre-pregnancy weight
    #[must_use]
    pub const fn with_pre_pregnancy_weight(mut self, weight_kg: f64) -> Self {
        self.pre_pregnancy_weight_kg = Some(weight_kg);
        self
    }

    /// Attach gravida/para/abortus counts
    #[must_use]
    pub const fn with_obstetric_history(mut self, history: ObstetricHistory) -> Self {
        self.obstetric_history = Some(history);
        self
    }
}

/// Map an `Indeterminate` outcome to an absent field, keeping every other
/// error fatal
fn optional(
    result: Result<ClassificationResult>,
    config: &ScreeningConfig,
) -> Result<Option<ClassificationResult>> {
    match result {
        Ok(outcome) => Ok(Some(outcome)),
        Err(ScreeningError::Indeterminate(field)) => {
            if config.log_incomplete {
                log_incomplete_data(field);
            }
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Screen one visit.
///
/// Validates the dates and measurement invariants first, then evaluates
/// the classifiers selected by the patient's category. The overall
/// severity is the worst tier across the evaluated indicators.
pub fn screen_visit(
    table: &GrowthReferenceTable,
    input: &VisitInput<'_>,
    config: &ScreeningConfig,
) -> Result<VisitScreening> {
    let measurement = input.measurement;
    let as_of = measurement.measurement_date;

    input.patient.validate(as_of)?;
    measurement.validate()?;

    let age_months = age_in_months(input.patient.birth_date, as_of)?;
    let mut screening = VisitScreening::empty(age_months);

    match input.patient.patient_type {
        PatientType::Infant | PatientType::Toddler => {
            let growth = screen_growth(
                table,
                measurement.weight_kg,
                measurement.height_cm,
                measurement.head_circumference_cm,
                f64::from(age_months),
                input.patient.gender,
            )?;
            screening.weight_for_age = growth.weight_for_age;
            screening.height_for_age = growth.height_for_age;
            screening.weight_for_height = growth.weight_for_height;
            screening.head_circumference = growth.head_circumference;
            screening.nutrition_overall = growth.nutrition_overall;
            screening.stunted = growth.stunted;
        }
        PatientType::Pregnant => {
            if config.enforce_gpa {
                if let Some(history) = input.obstetric_history {
                    validate_obstetric_history(history)?;
                }
            }

            screening.gestation = match measurement.gestational_anchor_date {
                Some(hpht) => Some(gestation_summary(hpht, as_of)?),
                None => {
                    if config.log_incomplete {
                        log_incomplete_data("HPHT");
                    }
                    None
                }
            };
            screening.arm_circumference = measurement
                .arm_circumference_cm
                .map(classify_arm_circumference);
            screening.pregnancy_weight_gain = optional(
                classify_pregnancy_weight_gain(
                    input.pre_pregnancy_weight_kg,
                    measurement.weight_kg,
                ),
                config,
            )?;
            screening.blood_pressure = optional(
                classify_blood_pressure(measurement.systolic_mmhg, measurement.diastolic_mmhg),
                config,
            )?;
        }
        PatientType::Adult | PatientType::Elderly => {
            screening.body_mass_index = optional(
                classify_bmi(measurement.weight_kg, measurement.height_cm),
                config,
            )?;
            screening.waist_circumference = measurement
                .waist_circumference_cm
                .map(|waist| classify_waist_circumference(waist, input.patient.gender));
            screening.blood_pressure = optional(
                classify_blood_pressure(measurement.systolic_mmhg, measurement.diastolic_mmhg),
                config,
            )?;

            if input.patient.patient_type == PatientType::Elderly {
                screening.adl = input.adl.map(score_adl);
                screening.fall_risk = input.fall_risk.map(score_fall_risk);
            }
        }
    }

    screening.overall_severity = screening.fold_severity();
    log::debug!(
        "screened visit at {} months: overall {}",
        age_months,
        screening.overall_severity
    );

    Ok(screening)
}

/// Screen a batch of visits in parallel, preserving input order.
///
/// Classifiers are pure and the reference table is shared immutably, so
/// the visits can be evaluated independently.
pub fn screen_visits(
    table: &GrowthReferenceTable,
    inputs: &[VisitInput<'_>],
    config: &ScreeningConfig,
) -> Vec<Result<VisitScreening>> {
    let results: Vec<_> = inputs
        .par_iter()
        .map(|input| screen_visit(table, input, config))
        .collect();

    let flagged = results
        .iter()
        .filter(|r| r.as_ref().is_ok_and(VisitScreening::is_flagged))
        .count();
    log_screening_complete(results.len(), flagged, None);

    results
}

/// Label tallies for the reporting dashboard
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScreeningRecap {
    /// Number of screenings summarized
    pub visits: usize,
    /// Screenings with at least one flagged indicator
    pub flagged: usize,
    /// Visit counts per overall severity tier
    pub by_severity: FxHashMap<String, usize>,
    /// Visit counts per overall nutrition label
    pub nutrition_status: FxHashMap<String, usize>,
    /// Visit counts per blood-pressure label
    pub blood_pressure: FxHashMap<String, usize>,
    /// Children flagged as stunted
    pub stunted: usize,
    /// Pregnancies flagged for chronic energy deficiency risk
    pub kek_risk: usize,
}

/// Tally screening outcomes for the reporting dashboard
#[must_use]
pub fn recap_screenings(screenings: &[VisitScreening]) -> ScreeningRecap {
    let by_severity = screenings
        .iter()
        .counts_by(|s| s.overall_severity.description().to_string())
        .into_iter()
        .collect();

    let nutrition_status = screenings
        .iter()
        .filter_map(|s| s.nutrition_overall.as_ref())
        .counts_by(|r| r.label.clone())
        .into_iter()
        .collect();

    let blood_pressure = screenings
        .iter()
        .filter_map(|s| s.blood_pressure.as_ref())
        .counts_by(|r| r.label.clone())
        .into_iter()
        .collect();

    ScreeningRecap {
        visits: screenings.len(),
        flagged: screenings.iter().filter(|s| s.is_flagged()).count(),
        by_severity,
        nutrition_status,
        blood_pressure,
        stunted: screenings.iter().filter(|s| s.stunted == Some(true)).count(),
        kek_risk: screenings
            .iter()
            .filter_map(|s| s.arm_circumference.as_ref())
            .filter(|r| r.is_flagged())
            .count(),
    }
}
