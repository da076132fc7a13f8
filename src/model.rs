//! The Hidden Markov Model parameter container.

use ndarray::{Array1, Array2};

use crate::config::ModelConfig;
use crate::emission::{Categorical, Emission};
use crate::error::{Error, Result};
use crate::validation;

/// Represents a Hidden Markov Model with discrete observations, storing:
/// - `log_transitions[[i, j]]`: log probability of moving from state `i` to state `j`
/// - `emissions[i]`: the distribution of symbols emitted while in state `i`
/// - `log_initial[i]`: log probability of starting in state `i`
///
/// plus the cached number of states and symbols.
///
/// All tables are kept in log space; `-inf` entries mean probability zero.
/// The model is immutable once built, so a shared reference can be used from
/// any number of threads at once.
///
/// # Constraints
/// - Every emission row must sum to 1 within the configured tolerance. This
///   is enforced at construction.
/// - Transition rows and the initial vector are expected to sum to 1 as well,
///   but are only reported through a `log` warning when they do not.
#[derive(Debug, Clone, PartialEq)]
pub struct HiddenMarkovModel<E = Categorical> {
    state_count: usize,
    symbol_count: usize,
    log_transitions: Array2<f64>,
    emissions: Vec<E>,
    log_initial: Array1<f64>,
}

impl HiddenMarkovModel<Categorical> {
    /// Creates a model from probability tables.
    ///
    /// # Arguments
    ///
    /// * `transitions` - `S×S` matrix, `transitions[i][j]` = P(state j | previous state i)
    /// * `emissions` - `S×K` matrix, `emissions[i][k]` = P(symbol k | state i)
    /// * `initial` - length-`S` vector of starting probabilities
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the shapes disagree, `InvalidParameters` naming
    /// the state whose emission row does not sum to 1.
    pub fn new(
        transitions: Vec<Vec<f64>>,
        emissions: Vec<Vec<f64>>,
        initial: Vec<f64>,
    ) -> Result<Self> {
        Self::with_config(transitions, emissions, initial, &ModelConfig::default())
    }

    /// Creates a model from tables that already hold natural-log probabilities.
    pub fn from_log(
        log_transitions: Vec<Vec<f64>>,
        log_emissions: Vec<Vec<f64>>,
        log_initial: Vec<f64>,
    ) -> Result<Self> {
        Self::with_config(
            log_transitions,
            log_emissions,
            log_initial,
            &ModelConfig::default().log_space(true),
        )
    }

    /// Creates a model with explicit construction settings.
    pub fn with_config(
        transitions: Vec<Vec<f64>>,
        emissions: Vec<Vec<f64>>,
        initial: Vec<f64>,
        config: &ModelConfig,
    ) -> Result<Self> {
        let rows = emissions
            .into_iter()
            .map(|row| {
                if config.log_space {
                    Categorical::from_log_probabilities(row)
                } else {
                    Categorical::from_probabilities(&row)
                }
            })
            .collect();
        Self::from_emissions(transitions, rows, initial, config)
    }
}

impl<E: Emission> HiddenMarkovModel<E> {
    /// Creates a model whose states emit through arbitrary [`Emission`] rows.
    ///
    /// `config.log_space` applies to `transitions` and `initial` only; emission
    /// rows always answer in log space.
    pub fn from_emissions(
        transitions: Vec<Vec<f64>>,
        emissions: Vec<E>,
        initial: Vec<f64>,
        config: &ModelConfig,
    ) -> Result<Self> {
        let state_count = transitions.len();
        if state_count == 0 {
            return Err(Error::dimension("number of states", 1, 0));
        }
        for row in &transitions {
            if row.len() != state_count {
                return Err(Error::dimension("transition row length", state_count, row.len()));
            }
        }
        if initial.len() != state_count {
            return Err(Error::dimension(
                "initial distribution length",
                state_count,
                initial.len(),
            ));
        }
        if emissions.len() != state_count {
            return Err(Error::dimension("emission rows", state_count, emissions.len()));
        }

        let symbol_count = validation::check_emission_rows(&emissions, config.tolerance)?;

        let to_log = |p: f64| if config.log_space { p } else { p.ln() };
        let log_transitions =
            Array2::from_shape_fn((state_count, state_count), |(i, j)| to_log(transitions[i][j]));
        let log_initial = initial.iter().map(|&p| to_log(p)).collect::<Array1<f64>>();

        validation::flag_unnormalised(&log_transitions, &log_initial, config.tolerance);
        log::debug!(
            "built HMM with {} states and {} symbols",
            state_count,
            symbol_count
        );

        Ok(Self {
            state_count,
            symbol_count,
            log_transitions,
            emissions,
            log_initial,
        })
    }

    /// Returns a new model with the same chain but different emission rows.
    ///
    /// # Errors
    ///
    /// Same emission checks as [`HiddenMarkovModel::from_emissions`], using
    /// `config.tolerance`.
    pub fn with_emissions<F: Emission>(
        &self,
        emissions: Vec<F>,
        config: &ModelConfig,
    ) -> Result<HiddenMarkovModel<F>> {
        if emissions.len() != self.state_count {
            return Err(Error::dimension(
                "emission rows",
                self.state_count,
                emissions.len(),
            ));
        }
        let symbol_count = validation::check_emission_rows(&emissions, config.tolerance)?;
        Ok(HiddenMarkovModel {
            state_count: self.state_count,
            symbol_count,
            log_transitions: self.log_transitions.clone(),
            emissions,
            log_initial: self.log_initial.clone(),
        })
    }

    /// Tabulates every emission row into an equivalent categorical model.
    pub fn to_categorical(&self) -> HiddenMarkovModel<Categorical> {
        HiddenMarkovModel {
            state_count: self.state_count,
            symbol_count: self.symbol_count,
            log_transitions: self.log_transitions.clone(),
            emissions: self
                .emissions
                .iter()
                .map(|row| Categorical::from_log_probabilities(row.log_probabilities()))
                .collect(),
            log_initial: self.log_initial.clone(),
        }
    }

    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    /// The `S×S` transition table in log space.
    pub fn log_transitions(&self) -> &Array2<f64> {
        &self.log_transitions
    }

    /// Log probabilities of the starting state.
    pub fn log_initial(&self) -> &Array1<f64> {
        &self.log_initial
    }

    pub fn emissions(&self) -> &[E] {
        &self.emissions
    }

    /// The `S×K` emission table in log space, tabulated from each row.
    pub fn log_emissions(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.state_count, self.symbol_count), |(i, k)| {
            self.emissions[i].log_probability(k)
        })
    }

    /// Log probability of `state` emitting `symbol`.
    ///
    /// # Panics
    ///
    /// Panics if `state >= self.state_count()`.
    #[inline]
    pub fn log_emission(&self, state: usize, symbol: usize) -> f64 {
        self.emissions[state].log_probability(symbol)
    }

    #[inline]
    pub(crate) fn log_transition(&self, from: usize, to: usize) -> f64 {
        self.log_transitions[[from, to]]
    }
}
