//! Age resolution
//!
//! Derives age in days, months and years from a birth date, for children
//! and adults alike. The reference date is always an explicit argument so
//! callers (and tests) control the clock.

use crate::error::{Result, ScreeningError};
use chrono::{Datelike, NaiveDate};

fn check_order(birth_date: NaiveDate, as_of: NaiveDate) -> Result<()> {
    if birth_date > as_of {
        return Err(ScreeningError::InvalidDateRange {
            reason: "birth date must not lie after the reference date".to_string(),
            earlier: birth_date,
            later: as_of,
        });
    }
    Ok(())
}

/// Age in whole days at the reference date
pub fn age_in_days(birth_date: NaiveDate, as_of: NaiveDate) -> Result<i64> {
    check_order(birth_date, as_of)?;
    Ok((as_of - birth_date).num_days())
}

/// Age in whole calendar months at the reference date.
///
/// The difference is truncated down, never rounded: a child one day short
/// of the next month boundary is still the previous month, consistent with
/// growth-chart charting practice.
pub fn age_in_months(birth_date: NaiveDate, as_of: NaiveDate) -> Result<u32> {
    check_order(birth_date, as_of)?;

    let mut months = (as_of.year() - birth_date.year()) * 12 + as_of.month() as i32
        - birth_date.month() as i32;
    if as_of.day() < birth_date.day() {
        months -= 1;
    }

    Ok(months.max(0) as u32)
}

/// Age in whole years at the reference date
pub fn age_in_years(birth_date: NaiveDate, as_of: NaiveDate) -> Result<u32> {
    Ok(age_in_months(birth_date, as_of)? / 12)
}

/// Format an age the way it is spoken at the health post: months only under
/// 24 months, years plus remaining months from 24 months on.
pub fn format_age(birth_date: NaiveDate, as_of: NaiveDate) -> Result<String> {
    let months = age_in_months(birth_date, as_of)?;
    if months < 24 {
        Ok(format!("{months} bulan"))
    } else {
        Ok(format!("{} tahun {} bulan", months / 12, months % 12))
    }
}
