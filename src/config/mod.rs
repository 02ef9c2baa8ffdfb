//! Configuration for visit screening.

/// Configuration for the visit screening pass
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    /// Whether to enforce the gravida >= para + abortus + 1 consistency
    /// check on antenatal visits. Off until the rule is confirmed with the
    /// program owners; the check itself is available either way.
    pub enforce_gpa: bool,
    /// Log indicators skipped for incomplete data
    pub log_incomplete: bool,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            enforce_gpa: false,
            log_incomplete: true,
        }
    }
}
