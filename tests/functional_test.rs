#[cfg(test)]
mod tests {
    use posyandu_screening::{
        AdlAssessment, AdlLevel, FallRiskChecklist, Severity, score_adl, score_fall_risk,
    };

    #[test]
    fn test_adl_fully_independent() {
        let assessment = AdlAssessment::uniform(AdlLevel::Mandiri);
        assert_eq!(assessment.score(), 10);

        let result = score_adl(&assessment);
        assert_eq!(result.score, 10.0);
        assert_eq!(result.label, "Mandiri");
        assert_eq!(result.severity, Severity::Good);
    }

    #[test]
    fn test_adl_fully_dependent() {
        let assessment = AdlAssessment::uniform(AdlLevel::BantuanPenuh);
        assert_eq!(assessment.score(), 0);

        let result = score_adl(&assessment);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, "Ketergantungan Berat");
        assert_eq!(result.severity, Severity::Danger);
    }

    #[test]
    fn test_adl_mixed_levels_fall_in_the_light_tier() {
        // Three independent domains and two with partial assistance: score 8
        let assessment = AdlAssessment {
            eating: AdlLevel::Mandiri,
            dressing: AdlLevel::Mandiri,
            bathing: AdlLevel::BantuanSebagian,
            toileting: AdlLevel::Mandiri,
            mobility: AdlLevel::BantuanSebagian,
        };
        assert_eq!(assessment.score(), 8);

        let result = score_adl(&assessment);
        assert_eq!(result.label, "Ketergantungan Ringan");
        assert_eq!(result.severity, Severity::Warning);
    }

    #[test]
    fn test_adl_tier_boundaries() {
        // Score 9 is still independent
        let assessment = AdlAssessment {
            eating: AdlLevel::BantuanSebagian,
            ..AdlAssessment::uniform(AdlLevel::Mandiri)
        };
        assert_eq!(assessment.score(), 9);
        assert_eq!(score_adl(&assessment).label, "Mandiri");

        // Score 4 tips into heavy dependency
        let assessment = AdlAssessment {
            eating: AdlLevel::Mandiri,
            dressing: AdlLevel::Mandiri,
            bathing: AdlLevel::BantuanPenuh,
            toileting: AdlLevel::BantuanPenuh,
            mobility: AdlLevel::BantuanPenuh,
        };
        assert_eq!(assessment.score(), 4);
        assert_eq!(score_adl(&assessment).label, "Ketergantungan Berat");
    }

    #[test]
    fn test_fall_risk_no_factors() {
        let checklist = FallRiskChecklist::default();
        assert_eq!(checklist.checked_count(), 0);

        let result = score_fall_risk(&checklist);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, "Risiko Rendah");
        assert_eq!(result.severity, Severity::Good);
    }

    #[test]
    fn test_fall_risk_two_factors_is_moderate() {
        let checklist = FallRiskChecklist {
            history_of_falling: true,
            dizziness_on_standing: true,
            ..FallRiskChecklist::default()
        };
        assert_eq!(checklist.checked_count(), 2);

        let result = score_fall_risk(&checklist);
        assert_eq!(result.label, "Risiko Sedang");
        assert_eq!(result.severity, Severity::Warning);
    }

    #[test]
    fn test_fall_risk_three_factors_is_high() {
        let checklist = FallRiskChecklist {
            history_of_falling: true,
            balance_impairment: true,
            uses_walking_aid: true,
            ..FallRiskChecklist::default()
        };
        assert_eq!(checklist.checked_count(), 3);

        let result = score_fall_risk(&checklist);
        assert_eq!(result.label, "Risiko Tinggi");
        assert_eq!(result.severity, Severity::Danger);
    }

    #[test]
    fn test_single_factor_is_already_moderate() {
        let checklist = FallRiskChecklist {
            vision_impairment: true,
            ..FallRiskChecklist::default()
        };
        assert_eq!(score_fall_risk(&checklist).label, "Risiko Sedang");
    }
}
