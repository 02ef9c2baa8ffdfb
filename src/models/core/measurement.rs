//! Measurement model
//!
//! One visit's worth of raw measurements. All fields are optional because
//! forms differ per patient type; validation enforces the invariants that
//! hold regardless of which fields were filled in.

use crate::error::{Result, ScreeningError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw measurements taken at a single visit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Date the measurements were taken
    pub measurement_date: NaiveDate,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Body height or recumbent length in centimeters
    pub height_cm: Option<f64>,
    /// Head circumference in centimeters
    pub head_circumference_cm: Option<f64>,
    /// Mid-upper-arm circumference (LILA) in centimeters
    pub arm_circumference_cm: Option<f64>,
    /// Waist circumference in centimeters
    pub waist_circumference_cm: Option<f64>,
    /// Systolic blood pressure in mmHg
    pub systolic_mmhg: Option<f64>,
    /// Diastolic blood pressure in mmHg
    pub diastolic_mmhg: Option<f64>,
    /// Pulse in beats per minute
    pub pulse_bpm: Option<f64>,
    /// Body temperature in degrees Celsius
    pub temperature_c: Option<f64>,
    /// First day of the last menstrual period (HPHT), for antenatal visits
    pub gestational_anchor_date: Option<NaiveDate>,
}

impl Measurement {
    /// Create an empty measurement for a given date
    #[must_use]
    pub const fn new(measurement_date: NaiveDate) -> Self {
        Self {
            measurement_date,
            weight_kg: None,
            height_cm: None,
            head_circumference_cm: None,
            arm_circumference_cm: None,
            waist_circumference_cm: None,
            systolic_mmhg: None,
            diastolic_mmhg: None,
            pulse_bpm: None,
            temperature_c: None,
            gestational_anchor_date: None,
        }
    }

    /// Set body weight
    #[must_use]
    pub const fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Set body height or length
    #[must_use]
    pub const fn with_height(mut self, height_cm: f64) -> Self {
        self.height_cm = Some(height_cm);
        self
    }

    /// Set head circumference
    #[must_use]
    pub const fn with_head_circumference(mut self, head_circumference_cm: f64) -> Self {
        self.head_circumference_cm = Some(head_circumference_cm);
        self
    }

    /// Set mid-upper-arm circumference (LILA)
    #[must_use]
    pub const fn with_arm_circumference(mut self, arm_circumference_cm: f64) -> Self {
        self.arm_circumference_cm = Some(arm_circumference_cm);
        self
    }

    /// Set waist circumference
    #[must_use]
    pub const fn with_waist_circumference(mut self, waist_circumference_cm: f64) -> Self {
        self.waist_circumference_cm = Some(waist_circumference_cm);
        self
    }

    /// Set the blood-pressure pair
    #[must_use]
    pub const fn with_blood_pressure(mut self, systolic_mmhg: f64, diastolic_mmhg: f64) -> Self {
        self.systolic_mmhg = Some(systolic_mmhg);
        self.diastolic_mmhg = Some(diastolic_mmhg);
        self
    }

    /// Set pulse
    #[must_use]
    pub const fn with_pulse(mut self, pulse_bpm: f64) -> Self {
        self.pulse_bpm = Some(pulse_bpm);
        self
    }

    /// Set body temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature_c: f64) -> Self {
        self.temperature_c = Some(temperature_c);
        self
    }

    /// Set the gestational anchor date (HPHT)
    #[must_use]
    pub const fn with_gestational_anchor(mut self, hpht: NaiveDate) -> Self {
        self.gestational_anchor_date = Some(hpht);
        self
    }

    /// Whether a full blood-pressure pair was recorded
    #[must_use]
    pub const fn has_blood_pressure(&self) -> bool {
        self.systolic_mmhg.is_some() && self.diastolic_mmhg.is_some()
    }

    /// Check the measurement invariants.
    ///
    /// All recorded numeric values must be non-negative, and the
    /// blood-pressure pair must be recorded together or not at all.
    pub fn validate(&self) -> Result<()> {
        let numeric_fields = [
            ("weight", self.weight_kg),
            ("height", self.height_cm),
            ("head circumference", self.head_circumference_cm),
            ("arm circumference", self.arm_circumference_cm),
            ("waist circumference", self.waist_circumference_cm),
            ("systolic pressure", self.systolic_mmhg),
            ("diastolic pressure", self.diastolic_mmhg),
            ("pulse", self.pulse_bpm),
            ("temperature", self.temperature_c),
        ];

        for (name, value) in numeric_fields {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(ScreeningError::InvalidMeasurement(format!(
                        "{name} must be a non-negative number, got {v}"
                    )));
                }
            }
        }

        if self.systolic_mmhg.is_some() != self.diastolic_mmhg.is_some() {
            return Err(ScreeningError::InvalidMeasurement(
                "systolic and diastolic pressure must be recorded together".to_string(),
            ));
        }

        Ok(())
    }
}
