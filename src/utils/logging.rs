//! Logging utilities
//!
//! This module provides standardized logging functions for screening
//! operations.

use std::time::Duration;

/// Log an indicator skipped because a measurement is missing
pub fn log_incomplete_data(field: &str) {
    log::debug!("data tidak lengkap: {field} not measured, indicator skipped");
}

/// Log a completed screening pass with consistent format
///
/// # Arguments
/// * `visits` - Number of visits screened
/// * `flagged` - Number of visits with a flagged indicator
/// * `elapsed` - Optional elapsed time
pub fn log_screening_complete(visits: usize, flagged: usize, elapsed: Option<Duration>) {
    if let Some(duration) = elapsed {
        log::info!("screened {visits} visits ({flagged} flagged) in {duration:?}");
    } else {
        log::info!("screened {visits} visits ({flagged} flagged)");
    }
}
