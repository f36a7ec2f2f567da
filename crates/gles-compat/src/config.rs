//! Shim configuration.

/// Runtime options for namespace initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimConfig {
    /// Emit a stderr diagnostic for every symbol that degrades to a
    /// stub. Suppression only silences the stream; missing symbols are
    /// still recorded in the injection report.
    pub show_warnings: bool,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            show_warnings: true,
        }
    }
}

impl ShimConfig {
    pub fn quiet() -> Self {
        Self {
            show_warnings: false,
        }
    }
}
