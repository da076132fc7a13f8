use rand::Rng;

use crate::emission::Emission;
use crate::model::HiddenMarkovModel;
use crate::sampling::sample_log_weights;

/// A synthetic trajectory drawn from the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub observations: Vec<usize>,
    /// Hidden state that emitted each observation.
    pub states: Vec<usize>,
    /// Joint log-likelihood of `observations` and `states`; `-inf` when empty.
    pub log_likelihood: f64,
}

/// Draws `sample_count` observations by running the chain forward.
///
/// The starting state comes from the initial distribution, each state emits
/// one symbol from its emission row, and the next state is drawn from the
/// current state's transition row. Passing a seeded generator makes the
/// output reproducible.
pub fn generate<E, R>(model: &HiddenMarkovModel<E>, sample_count: usize, rng: &mut R) -> Sample
where
    E: Emission,
    R: Rng + ?Sized,
{
    let mut observations = Vec::with_capacity(sample_count);
    let mut states = Vec::with_capacity(sample_count);
    if sample_count == 0 {
        return Sample {
            observations,
            states,
            log_likelihood: f64::NEG_INFINITY,
        };
    }

    let emission_tables: Vec<Vec<f64>> = model
        .emissions()
        .iter()
        .map(|row| row.log_probabilities())
        .collect();
    let transition_rows: Vec<Vec<f64>> = model
        .log_transitions()
        .rows()
        .into_iter()
        .map(|row| row.to_vec())
        .collect();

    let initial = model.log_initial().to_vec();
    let mut state = sample_log_weights(&initial, rng);
    let mut log_likelihood = initial[state];
    for t in 0..sample_count {
        if t > 0 {
            let next = sample_log_weights(&transition_rows[state], rng);
            log_likelihood += model.log_transition(state, next);
            state = next;
        }
        let symbol = sample_log_weights(&emission_tables[state], rng);
        log_likelihood += emission_tables[state][symbol];

        states.push(state);
        observations.push(symbol);
    }

    log::debug!(
        "generated {} samples, log-likelihood {}",
        sample_count,
        log_likelihood
    );
    Sample {
        observations,
        states,
        log_likelihood,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;
    use crate::emission::Binomial;
    use crate::inference::evaluate_path;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn weather() -> HiddenMarkovModel {
        HiddenMarkovModel::new(
            vec![vec![0.7, 0.3], vec![0.4, 0.6]],
            vec![vec![0.1, 0.4, 0.5], vec![0.6, 0.3, 0.1]],
            vec![0.6, 0.4],
        )
        .unwrap()
    }

    #[test]
    fn test_likelihood_matches_joint_evaluation() {
        let hmm = weather();
        let mut rng = StdRng::seed_from_u64(11);
        for n in [1, 2, 10, 100] {
            let sample = generate(&hmm, n, &mut rng);
            assert_eq!(sample.observations.len(), n);
            assert_eq!(sample.states.len(), n);
            let joint = evaluate_path(&hmm, &sample.observations, &sample.states).unwrap();
            assert_relative_eq!(sample.log_likelihood, joint, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let hmm = weather();
        let a = generate(&hmm, 50, &mut ChaCha20Rng::seed_from_u64(5));
        let b = generate(&hmm, 50, &mut ChaCha20Rng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_deterministic_chain() {
        // always starts in 0, alternates, state 0 emits 0 and state 1 emits 1
        let hmm = HiddenMarkovModel::new(
            vec![vec![0.0, 1.0], vec![1.0, 0.0]],
            vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            vec![1.0, 0.0],
        )
        .unwrap();
        let sample = generate(&hmm, 5, &mut StdRng::seed_from_u64(0));
        assert_eq!(sample.states, vec![0, 1, 0, 1, 0]);
        assert_eq!(sample.observations, vec![0, 1, 0, 1, 0]);
        assert_eq!(sample.log_likelihood, 0.0);
    }

    #[test]
    fn test_tiny_initial_weights_never_start_in_impossible_state() {
        let half = 0.5_f64.ln();
        let hmm = HiddenMarkovModel::from_log(
            vec![vec![half, half], vec![half, half]],
            vec![vec![0.0], vec![0.0]],
            vec![f64::NEG_INFINITY, -800.0],
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..20 {
            let sample = generate(&hmm, 3, &mut rng);
            assert_eq!(sample.states[0], 1);
            assert!(sample.log_likelihood.is_finite());
            let joint = evaluate_path(&hmm, &sample.observations, &sample.states).unwrap();
            assert_relative_eq!(sample.log_likelihood, joint, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_samples() {
        let sample = generate(&weather(), 0, &mut StdRng::seed_from_u64(0));
        assert!(sample.observations.is_empty());
        assert_eq!(sample.log_likelihood, f64::NEG_INFINITY);
    }

    #[test]
    fn test_parametric_emissions() {
        let hmm = HiddenMarkovModel::from_emissions(
            vec![vec![0.8, 0.2], vec![0.3, 0.7]],
            vec![Binomial::new(5, 0.1), Binomial::new(5, 0.8)],
            vec![0.5, 0.5],
            &ModelConfig::default(),
        )
        .unwrap();
        let sample = generate(&hmm, 30, &mut StdRng::seed_from_u64(9));
        assert!(sample.observations.iter().all(|&o| o <= 5));
        let joint = evaluate_path(&hmm, &sample.observations, &sample.states).unwrap();
        assert_relative_eq!(sample.log_likelihood, joint, epsilon = 1e-9);
    }
}
