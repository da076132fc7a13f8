use rand::Rng;

use crate::emission::Emission;

/// An emission row given as an explicit table of log probabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct Categorical {
    log_probabilities: Vec<f64>,
}

impl Categorical {
    /// Builds a row from plain probabilities, taking the log of each entry.
    pub fn from_probabilities(probabilities: &[f64]) -> Self {
        Self {
            log_probabilities: probabilities.iter().map(|p| p.ln()).collect(),
        }
    }

    /// Builds a row from values that are already natural-log probabilities.
    pub fn from_log_probabilities(log_probabilities: Vec<f64>) -> Self {
        Self { log_probabilities }
    }

    /// Every symbol equally likely.
    pub fn uniform(symbol_count: usize) -> Self {
        let p = -(symbol_count as f64).ln();
        Self {
            log_probabilities: vec![p; symbol_count],
        }
    }

    /// A row with random, strictly positive weights normalised to one.
    pub fn random<R: Rng + ?Sized>(symbol_count: usize, rng: &mut R) -> Self {
        let weights: Vec<f64> = (0..symbol_count)
            .map(|_| rng.gen_range(f64::EPSILON..1.0))
            .collect();
        let total: f64 = weights.iter().sum();
        Self {
            log_probabilities: weights.iter().map(|w| (w / total).ln()).collect(),
        }
    }

    /// The stored log-probability table.
    pub fn as_log_probabilities(&self) -> &[f64] {
        &self.log_probabilities
    }
}

impl Emission for Categorical {
    fn symbol_count(&self) -> usize {
        self.log_probabilities.len()
    }

    fn log_probability(&self, symbol: usize) -> f64 {
        self.log_probabilities
            .get(symbol)
            .copied()
            .unwrap_or(f64::NEG_INFINITY)
    }

    fn log_probabilities(&self) -> Vec<f64> {
        self.log_probabilities.clone()
    }
}
