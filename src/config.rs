//! Registry configuration.
//!
//! Configuration is supplied in code by whoever builds the registry; nothing is read from files or the environment.

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Resolve every registered dialect when the registry is built instead of on first use
    pub eager_resolution: bool,
    /// Log a warning when a `remove` step names a word the dialect does not inherit
    pub report_absent_removals: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            eager_resolution: false,
            report_absent_removals: true,
        }
    }
}

impl RegistryConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve all dialects at build time
    pub fn with_eager_resolution(mut self, eager: bool) -> Self {
        self.eager_resolution = eager;
        self
    }

    /// Toggle warnings for removals of absent words
    pub fn with_report_absent_removals(mut self, report: bool) -> Self {
        self.report_absent_removals = report;
        self
    }
}
