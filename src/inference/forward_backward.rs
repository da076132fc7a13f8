//! Log-space forward and backward recursions.
//!
//! - `alpha[[t, i]] = ln P(o_0, ..., o_t, state_t = i)`
//! - `beta[[t, i]] = ln P(o_{t+1}, ..., o_{T-1} | state_t = i)`
//!
//! Neither matrix is rescaled per time step; log space keeps the raw values
//! representable for long sequences, and `log_sum_exp(alpha[T-1])` is the
//! sequence log-likelihood. These are exposed for learning code that iterates
//! against the model.

use ndarray::Array2;

use crate::emission::Emission;
use crate::error::Result;
use crate::logspace::log_sum_exp_iter;
use crate::model::HiddenMarkovModel;
use crate::validation;

/// Output of the forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LogForward {
    /// `T×S` matrix of log forward probabilities.
    pub alpha: Array2<f64>,
    /// Log-likelihood of the whole sequence; `-inf` when it is empty.
    pub log_likelihood: f64,
}

/// Runs the forward pass over `observations`.
///
/// # Errors
///
/// `InvalidObservation` for the first symbol outside the model's alphabet.
pub fn log_forward<E: Emission>(
    model: &HiddenMarkovModel<E>,
    observations: &[usize],
) -> Result<LogForward> {
    validation::check_observations(observations, model.symbol_count())?;
    Ok(forward(model, observations))
}

/// Runs the backward pass over `observations`, returning the `T×S` matrix.
///
/// # Errors
///
/// `InvalidObservation` for the first symbol outside the model's alphabet.
pub fn log_backward<E: Emission>(
    model: &HiddenMarkovModel<E>,
    observations: &[usize],
) -> Result<Array2<f64>> {
    validation::check_observations(observations, model.symbol_count())?;
    Ok(backward(model, observations))
}

/// Forward pass over an already validated sequence.
pub(crate) fn forward<E: Emission>(
    model: &HiddenMarkovModel<E>,
    observations: &[usize],
) -> LogForward {
    let n = model.state_count();
    let t_len = observations.len();
    let mut alpha = Array2::from_elem((t_len, n), f64::NEG_INFINITY);
    if t_len == 0 {
        return LogForward {
            alpha,
            log_likelihood: f64::NEG_INFINITY,
        };
    }

    // α_0(i) = ln π_i + ln b_i(o_0)
    for i in 0..n {
        alpha[[0, i]] = model.log_initial()[i] + model.log_emission(i, observations[0]);
    }

    // α_t(i) = ln Σ_j exp(α_{t-1}(j) + ln a_ji) + ln b_i(o_t)
    for t in 1..t_len {
        let symbol = observations[t];
        for i in 0..n {
            let incoming =
                log_sum_exp_iter((0..n).map(|j| alpha[[t - 1, j]] + model.log_transition(j, i)));
            alpha[[t, i]] = incoming + model.log_emission(i, symbol);
        }
    }

    let log_likelihood = log_sum_exp_iter(alpha.row(t_len - 1).iter().copied());
    LogForward {
        alpha,
        log_likelihood,
    }
}

/// Backward pass over an already validated sequence.
pub(crate) fn backward<E: Emission>(
    model: &HiddenMarkovModel<E>,
    observations: &[usize],
) -> Array2<f64> {
    let n = model.state_count();
    let t_len = observations.len();
    // β_{T-1}(i) = ln 1
    let mut beta = Array2::zeros((t_len, n));

    // β_t(i) = ln Σ_j exp(ln a_ij + ln b_j(o_{t+1}) + β_{t+1}(j))
    for t in (0..t_len.saturating_sub(1)).rev() {
        let next_symbol = observations[t + 1];
        for i in 0..n {
            beta[[t, i]] = log_sum_exp_iter((0..n).map(|j| {
                model.log_transition(i, j) + model.log_emission(j, next_symbol) + beta[[t + 1, j]]
            }));
        }
    }
    beta
}
