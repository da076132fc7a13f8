use ndarray::Array2;

use crate::emission::Emission;
use crate::error::Result;
use crate::logspace::argmax;
use crate::model::HiddenMarkovModel;
use crate::validation;

/// The most likely state sequence together with its joint log-likelihood.
#[derive(Debug, Clone, PartialEq)]
pub struct ViterbiPath {
    /// One state index per observation.
    pub path: Vec<usize>,
    /// `ln P(observations, path)` for the returned path.
    pub log_likelihood: f64,
}

/// Runs the Viterbi algorithm for a given HMM and a sequence of observations.
///
/// Returns the single state sequence with the highest joint probability of
/// producing `observations`. When several predecessors or final states score
/// equally, the lowest state index wins.
///
/// # Arguments
///
/// - `model`: the Hidden Markov Model
/// - `observations`: slice of symbols, each below `model.symbol_count()`
///
/// # Errors
///
/// `EmptySequence` for an empty slice, `InvalidObservation` naming the first
/// symbol out of range. Both are detected before the recursion starts.
pub fn decode<E: Emission>(
    model: &HiddenMarkovModel<E>,
    observations: &[usize],
) -> Result<ViterbiPath> {
    validation::check_nonempty_observations(observations, model.symbol_count())?;

    let t = observations.len();
    let n = model.state_count();

    // delta[[t, s]]: highest log-probability of any path that ends in state s at time t
    // psi[[t, s]]: which state at time t-1 led to the best path ending in s at time t
    let mut delta = Array2::from_elem((t, n), f64::NEG_INFINITY);
    let mut psi = Array2::<usize>::zeros((t, n));

    // Initialization step (time 0)
    for s in 0..n {
        delta[[0, s]] = model.log_initial()[s] + model.log_emission(s, observations[0]);
    }

    // Recursion
    for time in 1..t {
        let obs = observations[time];
        for s in 0..n {
            // argmax_{s'} [ delta[time-1][s'] + ln a(s' -> s) ]
            let (best_prev, best_val) = argmax(
                (0..n).map(|s_prev| delta[[time - 1, s_prev]] + model.log_transition(s_prev, s)),
            );
            delta[[time, s]] = best_val + model.log_emission(s, obs);
            psi[[time, s]] = best_prev;
        }
    }

    // Termination: find best final state
    let (best_final_state, log_likelihood) = argmax(delta.row(t - 1).iter().copied());

    // Path backtracking
    let mut path = vec![0_usize; t];
    path[t - 1] = best_final_state;
    for time in (1..t).rev() {
        path[time - 1] = psi[[time, path[time]]];
    }

    log::debug!(
        "viterbi decoded {} observations, log-likelihood {}",
        t,
        log_likelihood
    );
    Ok(ViterbiPath {
        path,
        log_likelihood,
    })
}
