/// Default absolute tolerance for the emission normalisation check.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Settings applied while building a [`HiddenMarkovModel`](crate::HiddenMarkovModel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConfig {
    /// Whether the supplied tables already hold natural-log probabilities.
    /// When `false` every entry is passed through `ln` on entry.
    pub log_space: bool,
    /// Absolute tolerance allowed between an emission row's total probability and 1.
    pub tolerance: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            log_space: false,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl ModelConfig {
    /// Marks the input tables as already being in log space.
    pub fn log_space(mut self, log_space: bool) -> Self {
        self.log_space = log_space;
        self
    }

    /// Overrides the normalisation tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}
