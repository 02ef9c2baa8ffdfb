//! Visit record model
//!
//! A logged visit couples a patient context with the measurements taken
//! that day and, once the engine has run, the screening summary. This is
//! the shape the record-keeping layer programs against; the engine itself
//! never stores visits.

use crate::models::collections::ModelCollection;
use crate::models::core::measurement::Measurement;
use crate::models::core::patient::PatientContext;
use crate::models::core::traits::EntityModel;
use crate::models::core::types::Severity;
use crate::models::screening::VisitScreening;
use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single logged visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    /// Unique visit identifier
    pub visit_id: String,
    /// Identifier of the patient record this visit belongs to
    pub patient_id: String,
    /// Patient facts at the time of the visit
    pub patient: PatientContext,
    /// Measurements taken at the visit
    pub measurement: Measurement,
    /// Screening summary, filled in after the engine has run
    pub screening: Option<VisitScreening>,
}

impl Visit {
    /// Create a new visit without a screening summary
    #[must_use]
    pub const fn new(
        visit_id: String,
        patient_id: String,
        patient: PatientContext,
        measurement: Measurement,
    ) -> Self {
        Self {
            visit_id,
            patient_id,
            patient,
            measurement,
            screening: None,
        }
    }

    /// Attach a screening summary
    #[must_use]
    pub fn with_screening(mut self, screening: VisitScreening) -> Self {
        self.screening = Some(screening);
        self
    }

    /// Date the visit's measurements were taken
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.measurement.measurement_date
    }

    /// Whether the screening flagged any indicator
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        self.screening.as_ref().is_some_and(VisitScreening::is_flagged)
    }
}

impl EntityModel for Visit {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.visit_id
    }

    fn key(&self) -> String {
        self.visit_id.clone()
    }
}

/// A collection of visits that can be efficiently queried
#[derive(Debug, Default)]
pub struct VisitCollection {
    /// Visits indexed by visit id
    visits: FxHashMap<String, Arc<Visit>>,
}

impl VisitCollection {
    /// Create a new empty `VisitCollection`
    #[must_use]
    pub fn new() -> Self {
        Self {
            visits: FxHashMap::default(),
        }
    }

    /// Get visits belonging to a patient
    #[must_use]
    pub fn visits_for_patient(&self, patient_id: &str) -> Vec<Arc<Visit>> {
        self.filter(|visit| visit.patient_id == patient_id)
    }

    /// Get visits whose screening reached at least the given severity
    #[must_use]
    pub fn visits_with_severity(&self, min_severity: Severity) -> Vec<Arc<Visit>> {
        self.filter(|visit| {
            visit
                .screening
                .as_ref()
                .is_some_and(|s| s.overall_severity >= min_severity)
        })
    }

    /// Get visits flagged by any indicator
    #[must_use]
    pub fn flagged_visits(&self) -> Vec<Arc<Visit>> {
        self.filter(Visit::is_flagged)
    }

    /// Get visits of children flagged as stunted
    #[must_use]
    pub fn stunted_visits(&self) -> Vec<Arc<Visit>> {
        self.filter(|visit| {
            visit
                .screening
                .as_ref()
                .is_some_and(|s| s.stunted == Some(true))
        })
    }

    /// Count visits that still lack a screening summary
    #[must_use]
    pub fn unscreened_count(&self) -> usize {
        self.filter(|visit| visit.screening.is_none()).len()
    }
}

impl ModelCollection<Visit> for VisitCollection {
    fn add(&mut self, visit: Visit) {
        let id = visit.visit_id.clone();
        self.visits.insert(id, Arc::new(visit));
    }

    fn get(&self, id: &String) -> Option<Arc<Visit>> {
        self.visits.get(id).cloned()
    }

    fn all(&self) -> Vec<Arc<Visit>> {
        self.visits.values().cloned().collect()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Arc<Visit>>
    where
        F: Fn(&Visit) -> bool,
    {
        self.visits
            .values()
            .filter(|visit| predicate(visit))
            .cloned()
            .collect()
    }

    fn count(&self) -> usize {
        self.visits.len()
    }
}
