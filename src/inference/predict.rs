//! Greedy multi-step forecasting of future symbols.
//!
//! The forward recursion is carried past the end of the observed sequence.
//! At each future step every candidate symbol is scored by marginalising over
//! the predecessor and current states, the scores are normalised into a log
//! distribution over symbols, and the best symbol is appended to the
//! continuation. The recursion then advances as if that symbol had been
//! observed, so later steps forecast the most likely continuation rather than
//! the unconditional marginal.

use crate::emission::Emission;
use crate::error::Result;
use crate::inference::forward_backward::forward;
use crate::logspace::{argmax, log_sum_exp, log_sum_exp_iter};
use crate::model::HiddenMarkovModel;
use crate::validation;

/// A forecast of the next `horizon` symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// The chosen symbol at each future step.
    pub symbols: Vec<usize>,
    /// `log_likelihoods[h][s]`: normalised log probability of symbol `s` at
    /// future step `h`, given the observations and the earlier predictions.
    pub log_likelihoods: Vec<Vec<f64>>,
    /// Log probability of the last predicted symbol. With a horizon of zero
    /// this is the log-likelihood of the observations themselves.
    pub log_likelihood: f64,
}

/// Forecasts the `horizon` most likely symbols to follow `observations`.
///
/// An empty `observations` slice forecasts from the initial distribution:
/// the first predicted symbol is emitted by the starting state.
///
/// # Errors
///
/// `InvalidObservation` naming the first symbol out of range.
pub fn predict<E: Emission>(
    model: &HiddenMarkovModel<E>,
    observations: &[usize],
    horizon: usize,
) -> Result<Prediction> {
    validation::check_observations(observations, model.symbol_count())?;

    let n = model.state_count();
    let k = model.symbol_count();

    let observed = forward(model, observations);
    let mut log_likelihood = observed.log_likelihood;
    // None until the first future step when nothing has been observed yet
    let mut fwd: Option<Vec<f64>> = match observations.len() {
        0 => None,
        t => Some(observed.alpha.row(t - 1).to_vec()),
    };

    let mut symbols = Vec::with_capacity(horizon);
    let mut log_likelihoods = Vec::with_capacity(horizon);

    for step in 0..horizon {
        // ln P(state at the new step = i, everything so far)
        let prior: Vec<f64> = match &fwd {
            Some(fwd) => (0..n)
                .map(|i| log_sum_exp_iter((0..n).map(|j| fwd[j] + model.log_transition(j, i))))
                .collect(),
            None => model.log_initial().to_vec(),
        };

        let mut weights: Vec<f64> = (0..k)
            .map(|s| log_sum_exp_iter((0..n).map(|i| prior[i] + model.log_emission(i, s))))
            .collect();

        let total = log_sum_exp(&weights);
        // an impossible prefix leaves every weight at -inf; skip to avoid NaN
        if total > f64::NEG_INFINITY {
            for w in weights.iter_mut() {
                *w -= total;
            }
        }

        let (symbol, best) = argmax(weights.iter().copied());
        log::trace!(
            "prediction step {}: symbol {} with log-likelihood {}",
            step,
            symbol,
            best
        );

        fwd = Some(
            (0..n)
                .map(|i| prior[i] + model.log_emission(i, symbol))
                .collect(),
        );
        symbols.push(symbol);
        log_likelihoods.push(weights);
        log_likelihood = best;
    }

    log::debug!(
        "predicted {} symbols after {} observations",
        horizon,
        observations.len()
    );
    Ok(Prediction {
        symbols,
        log_likelihoods,
        log_likelihood,
    })
}

/// The single most likely next symbol.
pub fn predict_next<E: Emission>(
    model: &HiddenMarkovModel<E>,
    observations: &[usize],
) -> Result<usize> {
    let prediction = predict(model, observations, 1)?;
    Ok(prediction.symbols[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::inference::evaluate;
    use approx::assert_relative_eq;

    fn weather() -> HiddenMarkovModel {
        HiddenMarkovModel::new(
            vec![vec![0.7, 0.3], vec![0.4, 0.6]],
            vec![vec![0.1, 0.4, 0.5], vec![0.6, 0.3, 0.1]],
            vec![0.6, 0.4],
        )
        .unwrap()
    }

    #[test]
    fn test_one_step_matches_likelihood_ratio() {
        let hmm = weather();
        let obs = [0, 1, 2];
        let prediction = predict(&hmm, &obs, 1).unwrap();
        let base = evaluate(&hmm, &obs).unwrap();
        for s in 0..3 {
            let extended = [0, 1, 2, s];
            let expected = evaluate(&hmm, &extended).unwrap() - base;
            assert_relative_eq!(prediction.log_likelihoods[0][s], expected, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_each_step_is_a_distribution() {
        let prediction = predict(&weather(), &[2, 2, 1], 5).unwrap();
        assert_eq!(prediction.symbols.len(), 5);
        assert_eq!(prediction.log_likelihoods.len(), 5);
        for step in &prediction.log_likelihoods {
            let total: f64 = step.iter().map(|l| l.exp()).sum();
            assert_relative_eq!(total, 1.0, epsilon = 1e-10);
        }
        let last = &prediction.log_likelihoods[4];
        assert_eq!(prediction.log_likelihood, last[prediction.symbols[4]]);
    }

    #[test]
    fn test_later_steps_condition_on_earlier_predictions() {
        let hmm = weather();
        let prediction = predict(&hmm, &[0, 1, 2], 2).unwrap();
        let first = prediction.symbols[0];
        let with_first = [0, 1, 2, first];
        let base = evaluate(&hmm, &with_first).unwrap();
        for s in 0..3 {
            let extended = [0, 1, 2, first, s];
            let expected = evaluate(&hmm, &extended).unwrap() - base;
            assert_relative_eq!(prediction.log_likelihoods[1][s], expected, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_sticky_chain_repeats_last_regime() {
        let hmm = HiddenMarkovModel::new(
            vec![vec![0.95, 0.05], vec![0.05, 0.95]],
            vec![vec![0.9, 0.1], vec![0.1, 0.9]],
            vec![0.5, 0.5],
        )
        .unwrap();
        assert_eq!(predict(&hmm, &[1, 1, 1, 1], 3).unwrap().symbols, vec![1, 1, 1]);
        assert_eq!(predict_next(&hmm, &[0, 0, 0]).unwrap(), 0);
    }

    #[test]
    fn test_empty_observations_start_from_initial_distribution() {
        let hmm = weather();
        let prediction = predict(&hmm, &[], 1).unwrap();
        for s in 0..3 {
            assert_relative_eq!(
                prediction.log_likelihoods[0][s],
                evaluate(&hmm, &[s]).unwrap(),
                epsilon = 1e-12
            );
        }
        // P(1) = 0.6 * 0.4 + 0.4 * 0.3 = 0.36 beats 0.30 and 0.34
        assert_eq!(prediction.symbols, vec![1]);
    }

    #[test]
    fn test_zero_horizon_returns_sequence_likelihood() {
        let prediction = predict(&weather(), &[0, 1, 2], 0).unwrap();
        assert!(prediction.symbols.is_empty());
        assert_relative_eq!(prediction.log_likelihood, -3.3928721329161653, epsilon = 1e-12);
    }

    #[test]
    fn test_impossible_prefix_does_not_produce_nan() {
        let hmm = HiddenMarkovModel::new(
            vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            vec![vec![1.0, 0.0], vec![1.0, 0.0]],
            vec![0.5, 0.5],
        )
        .unwrap();
        let prediction = predict(&hmm, &[1], 2).unwrap();
        assert!(prediction
            .log_likelihoods
            .iter()
            .flatten()
            .all(|l| *l == f64::NEG_INFINITY));
        assert_eq!(prediction.symbols, vec![0, 0]);
    }

    #[test]
    fn test_rejects_bad_symbol() {
        assert!(matches!(
            predict(&weather(), &[0, 3], 2).unwrap_err(),
            Error::InvalidObservation { index: 1, value: 3, .. }
        ));
    }
}
