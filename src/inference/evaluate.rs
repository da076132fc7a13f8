use crate::emission::Emission;
use crate::error::{Error, Result};
use crate::inference::forward_backward::forward;
use crate::model::HiddenMarkovModel;
use crate::validation;

/// Log-likelihood that `model` generated `observations`, summed over every
/// possible state path with the forward pass.
///
/// An empty sequence evaluates to `-inf` rather than an error.
///
/// # Errors
///
/// `InvalidObservation` naming the first symbol out of range.
pub fn evaluate<E: Emission>(model: &HiddenMarkovModel<E>, observations: &[usize]) -> Result<f64> {
    validation::check_observations(observations, model.symbol_count())?;
    let log_likelihood = forward(model, observations).log_likelihood;
    log::debug!(
        "evaluated {} observations, log-likelihood {}",
        observations.len(),
        log_likelihood
    );
    Ok(log_likelihood)
}

/// Joint log-likelihood `ln P(observations, path)` of one specific state path.
///
/// An empty pair evaluates to `-inf`, the same value [`evaluate`] gives an
/// empty sequence.
///
/// # Errors
///
/// `LengthMismatch` when the lengths differ, then `InvalidObservation` or
/// `InvalidStatePath` naming the first out-of-range entry. Observations are
/// checked before the path.
pub fn evaluate_path<E: Emission>(
    model: &HiddenMarkovModel<E>,
    observations: &[usize],
    path: &[usize],
) -> Result<f64> {
    if observations.len() != path.len() {
        return Err(Error::LengthMismatch {
            observations: observations.len(),
            path: path.len(),
        });
    }
    validation::check_observations(observations, model.symbol_count())?;
    validation::check_path(path, model.state_count())?;

    if path.is_empty() {
        return Ok(f64::NEG_INFINITY);
    }

    let mut log_likelihood =
        model.log_initial()[path[0]] + model.log_emission(path[0], observations[0]);
    for t in 1..path.len() {
        log_likelihood += model.log_transition(path[t - 1], path[t])
            + model.log_emission(path[t], observations[t]);
    }
    Ok(log_likelihood)
}
