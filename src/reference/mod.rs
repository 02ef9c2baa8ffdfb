//! Growth reference table
//!
//! WHO-style reference bands for the child growth indicators, consolidated
//! into one versioned, immutable artifact that is loaded once at process
//! start and shared by reference across all callers. Classifiers take the
//! table as an explicit argument so tests can inject fixture tables.
//!
//! The published curves are skewed, so each row stores distinct upward and
//! downward band distances from the median; collapsing them into one
//! symmetric SD would systematically mis-classify children near the tails.

mod dataset;

use crate::error::{Result, ScreeningError};
use crate::models::core::types::Gender;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Growth indicator identifying a reference series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthIndicator {
    /// Weight-for-age (BB/U), indexed by age in months
    WeightForAge,
    /// Height/length-for-age (TB/U or PB/U), indexed by age in months
    HeightForAge,
    /// Weight-for-height (BB/TB), indexed by height in centimeters
    WeightForHeight,
    /// Head-circumference-for-age, indexed by age in months
    HeadCircumferenceForAge,
}

impl GrowthIndicator {
    /// The snake_case name used in the dataset artifact and in error text
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightForAge => "weight_for_age",
            Self::HeightForAge => "height_for_age",
            Self::WeightForHeight => "weight_for_height",
            Self::HeadCircumferenceForAge => "head_circumference_for_age",
        }
    }
}

impl fmt::Display for GrowthIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One reference point: the median and the asymmetric band distances
///
/// `sd1_up` is the distance from the median to the +1 SD curve, `sd1_down`
/// the distance down to the -1 SD curve, and likewise for the 2 SD bands.
/// All distances are positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthReferencePoint {
    /// Median of the reference distribution
    pub median: f64,
    /// Distance from the median up to +1 SD
    pub sd1_up: f64,
    /// Distance from the median up to +2 SD
    pub sd2_up: f64,
    /// Distance from the median down to -1 SD
    pub sd1_down: f64,
    /// Distance from the median down to -2 SD
    pub sd2_down: f64,
}

/// A tabulated row: the lookup index plus its reference point
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReferenceRow {
    /// Age in months or height in centimeters, depending on the indicator
    pub(crate) index: f64,
    /// Reference point at this index
    pub(crate) point: GrowthReferencePoint,
}

/// Reference table holding every series of the loaded dataset
///
/// Never mutated after loading; safe to share across threads.
#[derive(Debug, Clone)]
pub struct GrowthReferenceTable {
    version: String,
    series: FxHashMap<(GrowthIndicator, Gender), Vec<ReferenceRow>>,
}

impl GrowthReferenceTable {
    pub(crate) fn from_parts(
        version: String,
        series: FxHashMap<(GrowthIndicator, Gender), Vec<ReferenceRow>>,
    ) -> Self {
        Self { version, series }
    }

    /// Parse a table from a dataset artifact in the bundled JSON schema
    pub fn from_json(text: &str) -> Result<Self> {
        dataset::parse_dataset(text)
    }

    /// The dataset bundled with the crate, parsed once per process
    #[must_use]
    pub fn builtin() -> &'static Self {
        dataset::builtin()
    }

    /// Version tag of the loaded dataset
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Number of series in the loaded dataset
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// The tabulated index range for a series, if the series exists
    #[must_use]
    pub fn domain(&self, indicator: GrowthIndicator, gender: Gender) -> Option<(f64, f64)> {
        let rows = self.series.get(&(indicator, gender))?;
        match (rows.first(), rows.last()) {
            (Some(first), Some(last)) => Some((first.index, last.index)),
            _ => None,
        }
    }

    /// Look up the reference point for an index, interpolating between
    /// tabulated rows.
    ///
    /// The median and all four band distances are interpolated linearly and
    /// independently by index fraction. An index at an exact tabulated row
    /// returns that row's values unchanged. Indexes outside the tabulated
    /// range fail closed with `OutOfRange` rather than extrapolate.
    pub fn lookup(
        &self,
        indicator: GrowthIndicator,
        gender: Gender,
        index: f64,
    ) -> Result<GrowthReferencePoint> {
        let out_of_range = || ScreeningError::OutOfRange {
            indicator: indicator.as_str().to_string(),
            value: index,
        };

        let rows = self.series.get(&(indicator, gender)).ok_or_else(out_of_range)?;

        // Exact rows short-circuit so tabulated values pass through unchanged
        if let Some(row) = rows.iter().find(|row| row.index == index) {
            return Ok(row.point);
        }

        for window in rows.windows(2) {
            let (lo, hi) = (&window[0], &window[1]);
            if index > lo.index && index < hi.index {
                let t = (index - lo.index) / (hi.index - lo.index);
                return Ok(interpolate(&lo.point, &hi.point, t));
            }
        }

        Err(out_of_range())
    }
}

fn interpolate(lo: &GrowthReferencePoint, hi: &GrowthReferencePoint, t: f64) -> GrowthReferencePoint {
    let lerp = |a: f64, b: f64| a + (b - a) * t;
    GrowthReferencePoint {
        median: lerp(lo.median, hi.median),
        sd1_up: lerp(lo.sd1_up, hi.sd1_up),
        sd2_up: lerp(lo.sd2_up, hi.sd2_up),
        sd1_down: lerp(lo.sd1_down, hi.sd1_down),
        sd2_down: lerp(lo.sd2_down, hi.sd2_down),
    }
}
