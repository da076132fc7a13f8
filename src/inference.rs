//! Inference algorithms over a [`HiddenMarkovModel`].
//!
//! Every operation is a pure function of a shared model reference and a
//! borrowed observation sequence. Inputs are validated in full before any
//! dynamic-programming table is allocated. The model also exposes each
//! operation as a method for convenience.

pub mod evaluate;
pub mod forward_backward;
pub mod generate;
pub mod posterior;
pub mod predict;
pub mod viterbi;

pub use evaluate::{evaluate, evaluate_path};
pub use forward_backward::{log_backward, log_forward, LogForward};
pub use generate::{generate, Sample};
pub use posterior::{posterior, posterior_path, Posterior};
pub use predict::{predict, predict_next, Prediction};
pub use viterbi::{decode, ViterbiPath};

use rand::Rng;

use crate::emission::Emission;
use crate::error::Result;
use crate::model::HiddenMarkovModel;

impl<E: Emission> HiddenMarkovModel<E> {
    /// See [`decode`].
    pub fn decode(&self, observations: &[usize]) -> Result<ViterbiPath> {
        decode(self, observations)
    }

    /// See [`posterior`].
    pub fn posterior(&self, observations: &[usize]) -> Result<Posterior> {
        posterior(self, observations)
    }

    /// See [`evaluate`].
    pub fn evaluate(&self, observations: &[usize]) -> Result<f64> {
        evaluate(self, observations)
    }

    /// See [`evaluate_path`].
    pub fn evaluate_path(&self, observations: &[usize], path: &[usize]) -> Result<f64> {
        evaluate_path(self, observations, path)
    }

    /// See [`predict`].
    pub fn predict(&self, observations: &[usize], horizon: usize) -> Result<Prediction> {
        predict(self, observations, horizon)
    }

    /// See [`generate`].
    pub fn generate<R: Rng + ?Sized>(&self, sample_count: usize, rng: &mut R) -> Sample {
        generate(self, sample_count, rng)
    }
}
