//! Parameter checks at construction and index checks at call time.
//!
//! Every inference entry point validates its whole input here before any
//! recursion runs, so an out-of-range symbol or state is reported with its
//! position instead of surfacing as an indexing panic half-way through a
//! dynamic-programming table.

use ndarray::{Array1, Array2};

use crate::emission::Emission;
use crate::error::{Error, Result};

/// Checks that every emission row is a distribution over one shared alphabet.
///
/// Returns the alphabet size on success.
pub fn check_emission_rows<E: Emission>(emissions: &[E], tolerance: f64) -> Result<usize> {
    let symbol_count = match emissions.first() {
        Some(row) => row.symbol_count(),
        None => return Err(Error::dimension("emission rows", 1, 0)),
    };
    if symbol_count == 0 {
        return Err(Error::dimension("symbols per emission row", 1, 0));
    }

    for (state, row) in emissions.iter().enumerate() {
        if row.symbol_count() != symbol_count {
            return Err(Error::dimension(
                "symbols per emission row",
                symbol_count,
                row.symbol_count(),
            ));
        }
        let sum: f64 = (0..symbol_count)
            .map(|symbol| row.log_probability(symbol).exp())
            .sum();
        // written so that a NaN sum is rejected too
        if !((sum - 1.0).abs() <= tolerance) {
            return Err(Error::InvalidParameters { state, sum });
        }
    }
    Ok(symbol_count)
}

/// Logs a warning for each transition row, and for the initial vector, whose
/// probabilities do not sum to one. These tables are not rejected.
pub fn flag_unnormalised(log_transitions: &Array2<f64>, log_initial: &Array1<f64>, tolerance: f64) {
    for (state, row) in log_transitions.rows().into_iter().enumerate() {
        let sum: f64 = row.iter().map(|l| l.exp()).sum();
        if !((sum - 1.0).abs() <= tolerance) {
            log::warn!("transition row for state {} sums to {}", state, sum);
        }
    }
    let sum: f64 = log_initial.iter().map(|l| l.exp()).sum();
    if !((sum - 1.0).abs() <= tolerance) {
        log::warn!("initial state distribution sums to {}", sum);
    }
}

/// Rejects the first observation outside `[0, symbol_count)`.
pub fn check_observations(observations: &[usize], symbol_count: usize) -> Result<()> {
    match observations
        .iter()
        .enumerate()
        .find(|(_, &value)| value >= symbol_count)
    {
        Some((index, &value)) => Err(Error::InvalidObservation {
            index,
            value,
            symbol_count,
        }),
        None => Ok(()),
    }
}

/// Rejects the first state outside `[0, state_count)`.
pub fn check_path(path: &[usize], state_count: usize) -> Result<()> {
    match path
        .iter()
        .enumerate()
        .find(|(_, &value)| value >= state_count)
    {
        Some((index, &value)) => Err(Error::InvalidStatePath {
            index,
            value,
            state_count,
        }),
        None => Ok(()),
    }
}

/// Like [`check_observations`], but also refuses an empty sequence.
pub fn check_nonempty_observations(observations: &[usize], symbol_count: usize) -> Result<()> {
    if observations.is_empty() {
        return Err(Error::EmptySequence);
    }
    check_observations(observations, symbol_count)
}
