use crate::emission::Emission;

/// Number of successes in a fixed number of independent trials.
///
/// The alphabet is `0..=trials`. A success probability outside `[0, 1]`
/// yields `NaN` log probabilities, which model construction rejects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    trials: usize,
    success: f64,
}

impl Binomial {
    pub fn new(trials: usize, success: f64) -> Self {
        Self { trials, success }
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn success(&self) -> f64 {
        self.success
    }
}

/// ln C(n, k) as a sum of logs, exact enough for the normalisation check.
fn ln_choose(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);
    (1..=k)
        .map(|i| ((n - k + i) as f64 / i as f64).ln())
        .sum()
}

impl Emission for Binomial {
    fn symbol_count(&self) -> usize {
        self.trials + 1
    }

    fn log_probability(&self, symbol: usize) -> f64 {
        if symbol > self.trials {
            return f64::NEG_INFINITY;
        }
        let n = self.trials;
        let p = self.success;
        if p == 0.0 {
            return if symbol == 0 { 0.0 } else { f64::NEG_INFINITY };
        }
        if p == 1.0 {
            return if symbol == n { 0.0 } else { f64::NEG_INFINITY };
        }
        ln_choose(n, symbol) + symbol as f64 * p.ln() + (n - symbol) as f64 * (-p).ln_1p()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pmf_values() {
        let b = Binomial::new(4, 0.5);
        assert_eq!(b.trials(), 4);
        assert_eq!(b.success(), 0.5);
        assert_eq!(b.symbol_count(), 5);
        assert_relative_eq!(b.log_probability(0).exp(), 1.0 / 16.0, epsilon = 1e-12);
        assert_relative_eq!(b.log_probability(2).exp(), 6.0 / 16.0, epsilon = 1e-12);
        assert_eq!(b.log_probability(5), f64::NEG_INFINITY);
    }

    #[test]
    fn test_normalised() {
        for &(n, p) in &[(1, 0.3), (10, 0.42), (40, 0.9)] {
            let b = Binomial::new(n, p);
            let total: f64 = (0..=n).map(|k| b.log_probability(k).exp()).sum();
            assert_relative_eq!(total, 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_degenerate_success() {
        let never = Binomial::new(3, 0.0);
        assert_eq!(never.log_probability(0), 0.0);
        assert_eq!(never.log_probability(1), f64::NEG_INFINITY);
        let always = Binomial::new(3, 1.0);
        assert_eq!(always.log_probability(3), 0.0);
        assert_eq!(always.log_probability(2), f64::NEG_INFINITY);
    }

    #[test]
    fn test_invalid_success_is_nan() {
        assert!(Binomial::new(2, 1.5).log_probability(1).is_nan());
    }
}
