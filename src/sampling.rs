use rand::Rng;

/// Draws an index from the categorical distribution whose weights are given
/// as natural logs, by inverting the cumulative distribution.
///
/// Weights do not need to sum to one; they are shifted by their maximum
/// before exponentiating, so very small or very large log weights still
/// sample proportionally. Entries of `-inf` are never chosen unless every
/// weight is `-inf`, in which case index 0 is returned.
pub fn sample_log_weights<R: Rng + ?Sized>(log_weights: &[f64], rng: &mut R) -> usize {
    let max = log_weights
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        return 0;
    }

    // the largest entry maps to 1, so the total is at least 1
    let total: f64 = log_weights.iter().map(|w| (w - max).exp()).sum();
    let target = rng.gen::<f64>() * total;

    let mut cumulative = 0.0;
    let mut last_possible = 0;
    for (i, w) in log_weights.iter().enumerate() {
        let p = (w - max).exp();
        if p > 0.0 {
            cumulative += p;
            last_possible = i;
            if target < cumulative {
                return i;
            }
        }
    }
    // rounding can leave the target a hair above the final cumulative sum
    last_possible
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_never_draws_impossible_entries() {
        let mut rng = StdRng::seed_from_u64(42);
        let weights = [f64::NEG_INFINITY, 0.0, f64::NEG_INFINITY];
        for _ in 0..100 {
            assert_eq!(sample_log_weights(&weights, &mut rng), 1);
        }
    }

    #[test]
    fn test_frequencies_follow_weights() {
        let mut rng = ChaCha20Rng::seed_from_u64(2024);
        let weights = [0.2_f64.ln(), 0.5_f64.ln(), 0.3_f64.ln()];
        let mut counts = [0usize; 3];
        let draws = 20_000;
        for _ in 0..draws {
            counts[sample_log_weights(&weights, &mut rng)] += 1;
        }
        for (count, p) in counts.iter().zip([0.2, 0.5, 0.3]) {
            let freq = *count as f64 / draws as f64;
            assert!((freq - p).abs() < 0.02, "frequency {} vs {}", freq, p);
        }
    }

    #[test]
    fn test_unnormalised_weights() {
        let mut rng = StdRng::seed_from_u64(1);
        // weights 2 and 2: both halves reachable
        let weights = [2.0_f64.ln(), 2.0_f64.ln()];
        let mut seen = [false; 2];
        for _ in 0..200 {
            seen[sample_log_weights(&weights, &mut rng)] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn test_tiny_weights_do_not_underflow() {
        let mut rng = StdRng::seed_from_u64(4);
        let weights = [f64::NEG_INFINITY, -800.0];
        for _ in 0..50 {
            assert_eq!(sample_log_weights(&weights, &mut rng), 1);
        }
    }

    #[test]
    fn test_huge_weights_do_not_overflow() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let weights = [800.0, 800.0];
        let mut counts = [0usize; 2];
        for _ in 0..2_000 {
            counts[sample_log_weights(&weights, &mut rng)] += 1;
        }
        assert!(counts[0] > 800 && counts[1] > 800, "counts {:?}", counts);
    }

    #[test]
    fn test_all_impossible_returns_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(sample_log_weights(&[f64::NEG_INFINITY; 4], &mut rng), 0);
    }
}
