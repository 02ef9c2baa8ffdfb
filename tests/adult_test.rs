#[cfg(test)]
mod tests {
    use posyandu_screening::error::ScreeningError;
    use posyandu_screening::{
        BloodPressureStage, BmiCategory, Gender, Severity, bmi, classify_blood_pressure,
        classify_bmi, classify_waist_circumference,
    };

    #[test]
    fn test_bmi_value() {
        // 50 kg at 1.60 m is 19.53
        let value = bmi(50.0, 160.0).unwrap();
        assert!((value - 19.53).abs() < 0.01);
    }

    #[test]
    fn test_bmi_zero_height_is_a_measurement_error() {
        assert!(matches!(
            bmi(50.0, 0.0),
            Err(ScreeningError::InvalidMeasurement(_))
        ));
    }

    #[test]
    fn test_bmi_asian_cutoffs() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(22.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(23.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_category_is_monotonic_in_weight() {
        // At a fixed height, more weight never lowers the category rank
        let mut previous = BmiCategory::Underweight;
        let mut weight = 40.0;
        while weight <= 90.0 {
            let value = bmi(weight, 165.0).unwrap();
            let category = BmiCategory::from_bmi(value);
            assert!(category >= previous);
            previous = category;
            weight += 0.5;
        }
    }

    #[test]
    fn test_classify_bmi_labels() {
        let result = classify_bmi(Some(50.0), Some(160.0)).unwrap();
        assert_eq!(result.label, "Normal");
        assert_eq!(result.severity, Severity::Good);

        let result = classify_bmi(Some(66.0), Some(160.0)).unwrap();
        assert_eq!(result.label, "Obesitas");
        assert_eq!(result.severity, Severity::Danger);

        assert!(matches!(
            classify_bmi(None, Some(160.0)),
            Err(ScreeningError::Indeterminate(_))
        ));
    }

    #[test]
    fn test_waist_threshold_is_gender_dependent() {
        let result = classify_waist_circumference(89.9, Gender::Male);
        assert_eq!(result.label, "Normal");

        let result = classify_waist_circumference(90.0, Gender::Male);
        assert_eq!(result.label, "Berisiko");
        assert_eq!(result.severity, Severity::Warning);

        // The female threshold is 10 cm lower
        let result = classify_waist_circumference(85.0, Gender::Female);
        assert_eq!(result.label, "Berisiko");

        let result = classify_waist_circumference(79.9, Gender::Female);
        assert_eq!(result.label, "Normal");
    }

    #[test]
    fn test_blood_pressure_staging() {
        let cases = [
            (119.0, 79.0, BloodPressureStage::Normal),
            (121.0, 79.0, BloodPressureStage::Prehypertension),
            (139.0, 84.0, BloodPressureStage::Prehypertension),
            (140.0, 84.0, BloodPressureStage::Stage1),
            // The diastolic reading alone escalates the stage
            (135.0, 91.0, BloodPressureStage::Stage1),
            (161.0, 70.0, BloodPressureStage::Stage2),
            (150.0, 102.0, BloodPressureStage::Stage2),
        ];

        for (systolic, diastolic, expected) in cases {
            assert_eq!(
                BloodPressureStage::from_reading(systolic, diastolic),
                expected,
                "({systolic}, {diastolic})"
            );
        }
    }

    #[test]
    fn test_classify_blood_pressure_labels() {
        let result = classify_blood_pressure(Some(118.0), Some(76.0)).unwrap();
        assert_eq!(result.label, "Normal");
        assert_eq!(result.severity, Severity::Good);

        let result = classify_blood_pressure(Some(128.0), Some(82.0)).unwrap();
        assert_eq!(result.label, "Prehipertensi");
        assert_eq!(result.severity, Severity::Warning);

        let result = classify_blood_pressure(Some(144.0), Some(92.0)).unwrap();
        assert_eq!(result.label, "Hipertensi Derajat 1");
        assert_eq!(result.severity, Severity::Danger);

        let result = classify_blood_pressure(Some(168.0), Some(104.0)).unwrap();
        assert_eq!(result.label, "Hipertensi Derajat 2");
        assert_eq!(result.severity, Severity::Danger);
    }

    #[test]
    fn test_blood_pressure_pair_invariant() {
        // A fully absent pair is incomplete data
        assert!(matches!(
            classify_blood_pressure(None, None),
            Err(ScreeningError::Indeterminate(_))
        ));

        // Half a pair is a recording error, not incomplete data
        assert!(matches!(
            classify_blood_pressure(Some(120.0), None),
            Err(ScreeningError::InvalidMeasurement(_))
        ));
        assert!(matches!(
            classify_blood_pressure(None, Some(80.0)),
            Err(ScreeningError::InvalidMeasurement(_))
        ));
    }
}
