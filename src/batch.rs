//! Data-parallel inference over many independent sequences.
//!
//! The model is read-only during inference, so one shared reference is
//! handed to every `rayon` worker. Each sequence gets its own buffers.
//! On failure one of the failing sequences' errors is returned; which one is
//! unspecified.

use rayon::prelude::*;

use crate::emission::Emission;
use crate::error::Result;
use crate::inference::{decode, evaluate, ViterbiPath};
use crate::model::HiddenMarkovModel;

/// Viterbi-decodes every sequence, preserving input order.
pub fn decode_all<E, S>(model: &HiddenMarkovModel<E>, sequences: &[S]) -> Result<Vec<ViterbiPath>>
where
    E: Emission + Sync,
    S: AsRef<[usize]> + Sync,
{
    sequences
        .par_iter()
        .map(|sequence| decode(model, sequence.as_ref()))
        .collect()
}

/// Log-likelihood of every sequence, preserving input order.
pub fn evaluate_all<E, S>(model: &HiddenMarkovModel<E>, sequences: &[S]) -> Result<Vec<f64>>
where
    E: Emission + Sync,
    S: AsRef<[usize]> + Sync,
{
    sequences
        .par_iter()
        .map(|sequence| evaluate(model, sequence.as_ref()))
        .collect()
}

/// Total log-likelihood of a set of independent sequences.
pub fn log_likelihood_sum<E, S>(model: &HiddenMarkovModel<E>, sequences: &[S]) -> Result<f64>
where
    E: Emission + Sync,
    S: AsRef<[usize]> + Sync,
{
    let total: f64 = evaluate_all(model, sequences)?.into_iter().sum();
    log::debug!("{} sequences, total log-likelihood {}", sequences.len(), total);
    Ok(total)
}
