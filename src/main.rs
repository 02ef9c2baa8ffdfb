use anyhow::Context;
use chrono::NaiveDate;
use log::{info, warn};
use posyandu_screening::models::collections::ModelCollection;
use posyandu_screening::{
    AdlAssessment, AdlLevel, FallRiskChecklist, Gender, GrowthReferenceTable, Measurement,
    PatientContext, PatientType, ScreeningConfig, Visit, VisitCollection, VisitInput,
    recap_screenings, screen_visit,
};
use std::time::Instant;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date")
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let table = GrowthReferenceTable::builtin();
    let config = ScreeningConfig::default();
    info!("growth reference dataset: {}", table.version());

    let visit_date = date(2025, 6, 14);

    // Example 1: toddler growth screening
    let toddler = PatientContext::new(date(2024, 3, 2), Gender::Male, PatientType::Toddler);
    let toddler_measurement = Measurement::new(visit_date)
        .with_weight(9.1)
        .with_height(76.0)
        .with_head_circumference(46.0);

    // Example 2: antenatal screening
    let mother = PatientContext::new(date(1998, 11, 23), Gender::Female, PatientType::Pregnant);
    let mother_measurement = Measurement::new(visit_date)
        .with_weight(58.5)
        .with_arm_circumference(22.8)
        .with_blood_pressure(124.0, 82.0)
        .with_gestational_anchor(date(2025, 1, 20));

    // Example 3: elderly screening with functional assessment
    let elder = PatientContext::new(date(1952, 7, 1), Gender::Female, PatientType::Elderly);
    let elder_measurement = Measurement::new(visit_date)
        .with_weight(61.0)
        .with_height(151.0)
        .with_waist_circumference(84.0)
        .with_blood_pressure(152.0, 88.0);
    let elder_adl = AdlAssessment {
        eating: AdlLevel::Mandiri,
        dressing: AdlLevel::Mandiri,
        bathing: AdlLevel::BantuanSebagian,
        toileting: AdlLevel::Mandiri,
        mobility: AdlLevel::BantuanSebagian,
    };
    let elder_falls = FallRiskChecklist {
        history_of_falling: true,
        uses_walking_aid: true,
        ..FallRiskChecklist::default()
    };

    let inputs = [
        (
            "V-0001",
            "P-0001",
            toddler,
            toddler_measurement,
            VisitInput::new(&toddler, &toddler_measurement),
        ),
        (
            "V-0002",
            "P-0002",
            mother,
            mother_measurement,
            VisitInput::new(&mother, &mother_measurement).with_pre_pregnancy_weight(51.0),
        ),
        (
            "V-0003",
            "P-0003",
            elder,
            elder_measurement,
            VisitInput::new(&elder, &elder_measurement)
                .with_adl(&elder_adl)
                .with_fall_risk(&elder_falls),
        ),
    ];

    let start = Instant::now();
    let mut collection = VisitCollection::new();
    let mut screenings = Vec::new();

    for (visit_id, patient_id, patient, measurement, input) in &inputs {
        match screen_visit(table, input, &config) {
            Ok(screening) => {
                info!(
                    "{visit_id}: overall {} ({} indicators evaluated)",
                    screening.overall_severity,
                    screening.results().count()
                );
                if let Some(worst) = screening.worst() {
                    info!("{visit_id}: worst indicator {}", worst.label);
                }
                screenings.push(screening.clone());
                collection.add(
                    Visit::new(
                        (*visit_id).to_string(),
                        (*patient_id).to_string(),
                        *patient,
                        *measurement,
                    )
                    .with_screening(screening),
                );
            }
            Err(e) => warn!("{visit_id}: screening failed: {e}"),
        }
    }

    info!(
        "screened {} visits in {:?}, {} flagged",
        collection.count(),
        start.elapsed(),
        collection.flagged_visits().len()
    );

    // Recap payload the dashboard layer would consume
    let recap = recap_screenings(&screenings);
    let payload =
        serde_json::to_string_pretty(&recap).context("serializing screening recap")?;
    info!("recap:\n{payload}");

    Ok(())
}
