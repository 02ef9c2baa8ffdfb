//! Bundled reference dataset
//!
//! Parses the versioned JSON artifact into a `GrowthReferenceTable`. Rows
//! store the published z-score curve values (-3 SD through +3 SD); the band
//! distances the classifiers consume are derived here at load time.

use crate::error::{Result, ScreeningError};
use crate::models::core::types::Gender;
use crate::reference::{GrowthIndicator, GrowthReferencePoint, GrowthReferenceTable, ReferenceRow};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::sync::LazyLock;

const BUILTIN_DATASET: &str = include_str!("growth_reference.json");

static BUILTIN: LazyLock<GrowthReferenceTable> = LazyLock::new(|| {
    let table = parse_dataset(BUILTIN_DATASET).expect("bundled growth reference dataset is valid");
    log::info!(
        "loaded growth reference dataset {} ({} series)",
        table.version(),
        table.series_count()
    );
    table
});

/// The dataset bundled with the crate, parsed once per process
pub(crate) fn builtin() -> &'static GrowthReferenceTable {
    &BUILTIN
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    version: String,
    series: Vec<RawSeries>,
}

#[derive(Debug, Deserialize)]
struct RawSeries {
    indicator: GrowthIndicator,
    gender: Gender,
    rows: Vec<RawRow>,
}

/// One tabulated row of a published z-score curve
#[derive(Debug, Deserialize)]
struct RawRow {
    index: f64,
    sd3neg: f64,
    sd2neg: f64,
    sd1neg: f64,
    median: f64,
    sd1pos: f64,
    sd2pos: f64,
    sd3pos: f64,
}

impl RawRow {
    /// The curve values must increase strictly from -3 SD to +3 SD
    fn validate(&self, series: &RawSeries) -> Result<()> {
        let curve = [
            self.sd3neg,
            self.sd2neg,
            self.sd1neg,
            self.median,
            self.sd1pos,
            self.sd2pos,
            self.sd3pos,
        ];
        let ordered = curve.windows(2).all(|pair| pair[0] < pair[1]);
        if !ordered || curve.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(ScreeningError::Dataset(format!(
                "non-monotonic z-score curve at {} {} index {}",
                series.indicator,
                series.gender.as_code(),
                self.index
            )));
        }
        Ok(())
    }

    fn to_reference_row(&self) -> ReferenceRow {
        ReferenceRow {
            index: self.index,
            point: GrowthReferencePoint {
                median: self.median,
                sd1_up: self.sd1pos - self.median,
                sd2_up: self.sd2pos - self.median,
                sd1_down: self.median - self.sd1neg,
                sd2_down: self.median - self.sd2neg,
            },
        }
    }
}

/// Parse and validate a dataset artifact
pub(crate) fn parse_dataset(text: &str) -> Result<GrowthReferenceTable> {
    let raw: RawDataset =
        serde_json::from_str(text).map_err(|e| ScreeningError::Dataset(e.to_string()))?;

    if raw.series.is_empty() {
        return Err(ScreeningError::Dataset("dataset has no series".to_string()));
    }

    let mut series: FxHashMap<(GrowthIndicator, Gender), Vec<ReferenceRow>> = FxHashMap::default();

    for raw_series in &raw.series {
        if raw_series.rows.is_empty() {
            return Err(ScreeningError::Dataset(format!(
                "series {} {} has no rows",
                raw_series.indicator,
                raw_series.gender.as_code()
            )));
        }

        let mut rows = Vec::with_capacity(raw_series.rows.len());
        for raw_row in &raw_series.rows {
            raw_row.validate(raw_series)?;
            rows.push(raw_row.to_reference_row());
        }

        rows.sort_by(|a, b| a.index.total_cmp(&b.index));
        let indexes_distinct = rows.windows(2).all(|pair| pair[0].index < pair[1].index);
        if !indexes_distinct {
            return Err(ScreeningError::Dataset(format!(
                "series {} {} has duplicate index rows",
                raw_series.indicator,
                raw_series.gender.as_code()
            )));
        }

        let replaced = series.insert((raw_series.indicator, raw_series.gender), rows);
        if replaced.is_some() {
            return Err(ScreeningError::Dataset(format!(
                "series {} {} appears twice",
                raw_series.indicator,
                raw_series.gender.as_code()
            )));
        }
    }

    Ok(GrowthReferenceTable::from_parts(raw.version, series))
}
