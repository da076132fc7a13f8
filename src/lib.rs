//! Log-space inference for Hidden Markov Models with discrete observations.
//!
//! Given a model of hidden state transitions and per-state symbol emissions,
//! this crate answers the classic questions about an observed sequence:
//!
//! - the single most likely state path ([`decode`], the Viterbi algorithm)
//! - the probability of each state at each step ([`posterior`])
//! - how likely the model is to produce the sequence ([`evaluate`], [`evaluate_path`])
//! - the most likely continuation of the sequence ([`predict`])
//!
//! and draws synthetic sequences from the model ([`generate`]).
//!
//! All parameters are stored as natural logarithms and every sum of
//! probabilities is taken with log-sum-exp, so long sequences do not
//! underflow and zero-probability events stay at `-inf`.
//!
//! # Examples
//!
//! ```
//! use hiddenmarkov::HiddenMarkovModel;
//!
//! let hmm = HiddenMarkovModel::new(
//!     vec![vec![0.7, 0.3], vec![0.4, 0.6]],
//!     vec![vec![0.1, 0.4, 0.5], vec![0.6, 0.3, 0.1]],
//!     vec![0.6, 0.4],
//! )
//! .unwrap();
//!
//! let decoded = hmm.decode(&[0, 1, 2]).unwrap();
//! assert_eq!(decoded.path, vec![1, 0, 0]);
//! assert!((hmm.evaluate(&[0, 1, 2]).unwrap() - -3.3928721329161653).abs() < 1e-12);
//! ```

pub mod batch;
pub mod config;
pub mod emission;
pub mod error;
pub mod inference;
pub mod logspace;
pub mod model;
pub mod sampling;
pub mod validation;

pub use config::ModelConfig;
pub use emission::{Binomial, Categorical, Emission};
pub use error::{Error, Result};
pub use inference::{
    decode, evaluate, evaluate_path, generate, log_backward, log_forward, posterior,
    posterior_path, predict, predict_next, LogForward, Posterior, Prediction, Sample, ViterbiPath,
};
pub use model::HiddenMarkovModel;
