#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use posyandu_screening::error::ScreeningError;
    use posyandu_screening::{
        ObstetricHistory, Severity, classify_arm_circumference, classify_pregnancy_weight_gain,
        estimated_due_date, gestation_summary, gestational_age_weeks, trimester,
        validate_obstetric_history,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_due_date_is_plain_280_day_arithmetic() {
        assert_eq!(
            estimated_due_date(date(2024, 1, 1)),
            date(2024, 10, 7)
        );
    }

    #[test]
    fn test_gestational_weeks_from_anchor() {
        // 56 days later is exactly 8 completed weeks
        let weeks = gestational_age_weeks(date(2024, 1, 1), date(2024, 2, 26)).unwrap();
        assert_eq!(weeks, 8);

        // Days are floored to completed weeks, never rounded up
        let weeks = gestational_age_weeks(date(2024, 1, 1), date(2024, 2, 25)).unwrap();
        assert_eq!(weeks, 7);

        // Same-day anchor is week zero
        let weeks = gestational_age_weeks(date(2024, 1, 1), date(2024, 1, 1)).unwrap();
        assert_eq!(weeks, 0);
    }

    #[test]
    fn test_anchor_in_the_future_is_rejected() {
        let result = gestational_age_weeks(date(2024, 3, 1), date(2024, 2, 26));
        assert!(matches!(
            result,
            Err(ScreeningError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_trimester_boundaries_go_to_the_earlier_tier() {
        assert_eq!(trimester(0), 1);
        assert_eq!(trimester(12), 1);
        assert_eq!(trimester(13), 2);
        assert_eq!(trimester(27), 2);
        assert_eq!(trimester(28), 3);
        assert_eq!(trimester(40), 3);
    }

    #[test]
    fn test_gestation_summary() {
        let summary = gestation_summary(date(2024, 1, 1), date(2024, 2, 26)).unwrap();
        assert_eq!(summary.weeks, 8);
        assert_eq!(summary.trimester, 1);
        assert_eq!(summary.estimated_due_date, date(2024, 10, 7));
    }

    #[test]
    fn test_lila_threshold_is_inclusive_on_the_normal_side() {
        let result = classify_arm_circumference(23.4);
        assert_eq!(result.label, "Risiko KEK");
        assert_eq!(result.severity, Severity::Warning);

        let result = classify_arm_circumference(23.5);
        assert_eq!(result.label, "Normal");
        assert_eq!(result.severity, Severity::Good);
    }

    #[test]
    fn test_weight_gain_band_is_inclusive() {
        for gain_ok in [8.0, 12.0, 16.0] {
            let result =
                classify_pregnancy_weight_gain(Some(50.0), Some(50.0 + gain_ok)).unwrap();
            assert_eq!(result.label, "Normal", "gain {gain_ok}");
            assert_eq!(result.severity, Severity::Good);
        }

        let low = classify_pregnancy_weight_gain(Some(50.0), Some(57.9)).unwrap();
        assert_eq!(low.label, "Kenaikan Kurang");
        assert_eq!(low.severity, Severity::Warning);

        let high = classify_pregnancy_weight_gain(Some(50.0), Some(66.5)).unwrap();
        assert_eq!(high.label, "Kenaikan Berlebih");
        assert_eq!(high.severity, Severity::Warning);
    }

    #[test]
    fn test_weight_gain_without_the_baseline_is_indeterminate() {
        assert!(matches!(
            classify_pregnancy_weight_gain(None, Some(60.0)),
            Err(ScreeningError::Indeterminate(_))
        ));
        assert!(matches!(
            classify_pregnancy_weight_gain(Some(50.0), None),
            Err(ScreeningError::Indeterminate(_))
        ));
    }

    #[test]
    fn test_obstetric_history_consistency() {
        // The current pregnancy counts toward gravida
        let first_pregnancy = ObstetricHistory {
            gravida: 1,
            para: 0,
            abortus: 0,
        };
        assert!(validate_obstetric_history(first_pregnancy).is_ok());

        let consistent = ObstetricHistory {
            gravida: 4,
            para: 2,
            abortus: 1,
        };
        assert!(validate_obstetric_history(consistent).is_ok());

        let inconsistent = ObstetricHistory {
            gravida: 2,
            para: 2,
            abortus: 0,
        };
        assert!(matches!(
            validate_obstetric_history(inconsistent),
            Err(ScreeningError::InvalidObstetricHistory {
                gravida: 2,
                para: 2,
                abortus: 0
            })
        ));
    }
}
