//! Per-state emission distributions over a finite symbol alphabet.
//!
//! The inference routines only ever ask an emission row for the log
//! probability of a symbol, so any family that can answer that question can
//! drive the same Viterbi, forward/backward and prediction code:
//!
//! - [`Categorical`] stores an explicit log-probability table.
//! - [`Binomial`] computes the probability of `k` successes out of a fixed
//!   number of trials.

pub mod binomial;
pub mod categorical;

pub use binomial::Binomial;
pub use categorical::Categorical;

/// A discrete distribution over the symbols `0..symbol_count()`.
pub trait Emission {
    /// Size of the alphabet this distribution is defined over.
    fn symbol_count(&self) -> usize;

    /// Natural log of the probability of emitting `symbol`.
    ///
    /// Symbols outside the alphabet have probability zero (`-inf`).
    fn log_probability(&self, symbol: usize) -> f64;

    /// Tabulates the log probability of every symbol in the alphabet.
    fn log_probabilities(&self) -> Vec<f64> {
        (0..self.symbol_count())
            .map(|symbol| self.log_probability(symbol))
            .collect()
    }
}

impl<E: Emission + ?Sized> Emission for Box<E> {
    fn symbol_count(&self) -> usize {
        (**self).symbol_count()
    }

    fn log_probability(&self, symbol: usize) -> f64 {
        (**self).log_probability(symbol)
    }
}

impl<E: Emission + ?Sized> Emission for &E {
    fn symbol_count(&self) -> usize {
        (**self).symbol_count()
    }

    fn log_probability(&self, symbol: usize) -> f64 {
        (**self).log_probability(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_objects_delegate() {
        let rows: Vec<Box<dyn Emission>> = vec![
            Box::new(Categorical::from_probabilities(&[0.25, 0.75])),
            Box::new(Binomial::new(1, 0.75)),
        ];
        for row in &rows {
            assert_eq!(row.symbol_count(), 2);
            assert!((row.log_probability(1) - 0.75_f64.ln()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_default_tabulation() {
        let b = Binomial::new(2, 0.5);
        let table = b.log_probabilities();
        assert_eq!(table.len(), 3);
        assert!((table[1] - 0.5_f64.ln()).abs() < 1e-12);
    }
}
