use ndarray::Array2;

use crate::emission::Emission;
use crate::error::{Error, Result};
use crate::inference::forward_backward::{backward, forward};
use crate::logspace::argmax;
use crate::model::HiddenMarkovModel;
use crate::validation;

/// Per-timestep state probabilities given the whole observation sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Posterior {
    /// `T×S` matrix; `probabilities[[t, i]] = P(state_t = i | observations)`.
    /// Every row sums to one.
    pub probabilities: Array2<f64>,
    /// Log-likelihood of the observation sequence.
    pub log_likelihood: f64,
}

impl Posterior {
    /// The most probable state at each time step, ties to the lowest index.
    ///
    /// Each entry is chosen independently, so consecutive states may be
    /// joined by a transition the model forbids. Use
    /// [`decode`](crate::inference::decode) for the single best feasible path.
    pub fn path(&self) -> Vec<usize> {
        self.probabilities
            .rows()
            .into_iter()
            .map(|row| argmax(row.iter().copied()).0)
            .collect()
    }
}

/// Computes `P(state_t = i | observations)` from the forward and backward
/// passes: `exp(alpha[[t, i]] + beta[[t, i]] - log_likelihood)`.
///
/// # Errors
///
/// `EmptySequence`, `InvalidObservation` for an out-of-range symbol, and
/// `ZeroProbability` when the model cannot produce the sequence at all.
pub fn posterior<E: Emission>(
    model: &HiddenMarkovModel<E>,
    observations: &[usize],
) -> Result<Posterior> {
    validation::check_nonempty_observations(observations, model.symbol_count())?;

    let fwd = forward(model, observations);
    if fwd.log_likelihood == f64::NEG_INFINITY {
        return Err(Error::ZeroProbability);
    }
    let beta = backward(model, observations);

    let log_likelihood = fwd.log_likelihood;
    let mut probabilities = fwd.alpha + &beta;
    probabilities.mapv_inplace(|l| (l - log_likelihood).exp());

    log::debug!(
        "posterior decoded {} observations, log-likelihood {}",
        observations.len(),
        log_likelihood
    );
    Ok(Posterior {
        probabilities,
        log_likelihood,
    })
}

/// Posterior probabilities together with their pointwise most likely path.
pub fn posterior_path<E: Emission>(
    model: &HiddenMarkovModel<E>,
    observations: &[usize],
) -> Result<(Vec<usize>, Posterior)> {
    let posterior = posterior(model, observations)?;
    Ok((posterior.path(), posterior))
}
