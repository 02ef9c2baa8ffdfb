//! Utility functions for the screening engine

pub mod logging;

// Re-export commonly used functions for convenience
pub use logging::{log_incomplete_data, log_screening_complete};
