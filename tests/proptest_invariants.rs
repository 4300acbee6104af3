//! Property-based tests for ranking, volatility and generator invariants.

use proptest::prelude::*;
use secflow::stats::{population_std, simple_returns, volatility};
use secflow::{Direction, GeneratorConfig, RandomWalk, Security, generate, top_n};

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Ascending), Just(Direction::Descending)]
}

/// Up to six distinct securities with small integer values (ties likely).
fn entries_strategy() -> impl Strategy<Value = Vec<(Security, u32)>> {
    (
        Just(Security::ALL.to_vec()).prop_shuffle(),
        prop::collection::vec(0u32..4, 6),
        0usize..=6,
    )
        .prop_map(|(secs, values, len)| secs.into_iter().zip(values).take(len).collect())
}

fn prices_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0f64..1_000.0, 2..64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // ========================================================================
    // RANKING
    // ========================================================================

    /// Top list equals a stable sort truncated to n.
    #[test]
    fn top_n_matches_stable_sort(
        entries in entries_strategy(),
        direction in direction_strategy(),
        n in 0usize..8,
    ) {
        let mut expected = entries.clone();
        match direction {
            Direction::Ascending => expected.sort_by_key(|e| e.1),
            Direction::Descending => expected.sort_by_key(|e| std::cmp::Reverse(e.1)),
        }
        expected.truncate(n);

        let top = top_n(&entries, direction, n);
        prop_assert_eq!(top.len(), n.min(entries.len()));
        for (i, (r, (sec, val))) in top.iter().zip(&expected).enumerate() {
            prop_assert_eq!(r.rank, i + 1);
            prop_assert_eq!(r.security, *sec);
            prop_assert_eq!(r.value, *val);
        }
    }

    // ========================================================================
    // VOLATILITY
    // ========================================================================

    /// Positive prices always give a finite, non-negative volatility.
    #[test]
    fn volatility_finite_non_negative(prices in prices_strategy()) {
        let vol = volatility(&prices).unwrap();
        prop_assert!(vol.is_finite());
        prop_assert!(vol >= 0.0);
    }

    /// n prices give n - 1 returns.
    #[test]
    fn return_count(prices in prices_strategy()) {
        prop_assert_eq!(simple_returns(&prices).unwrap().len(), prices.len() - 1);
    }

    /// Scaling every price by a constant leaves volatility unchanged.
    #[test]
    fn volatility_scale_invariant(prices in prices_strategy(), k in 0.5f64..20.0) {
        let scaled: Vec<f64> = prices.iter().map(|p| p * k).collect();
        let a = volatility(&prices).unwrap();
        let b = volatility(&scaled).unwrap();
        prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0));
    }

    /// Population std never exceeds the largest absolute deviation.
    #[test]
    fn population_std_bounded(values in prop::collection::vec(-10.0f64..10.0, 1..50)) {
        let std = population_std(&values).unwrap();
        let max = values.iter().cloned().fold(f64::MIN, f64::max);
        let min = values.iter().cloned().fold(f64::MAX, f64::min);
        prop_assert!(std <= (max - min) + 1e-12);
    }

    // ========================================================================
    // GENERATOR
    // ========================================================================

    /// Same seed, same table.
    #[test]
    fn generator_deterministic(seed in any::<u64>()) {
        let config = GeneratorConfig { seed, ..GeneratorConfig::default() };
        prop_assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
    }

    /// Zero scale keeps every price at the base level.
    #[test]
    fn zero_scale_walk_is_flat(seed in any::<u64>(), base in 1.0f64..1_000.0) {
        let config = GeneratorConfig {
            seed,
            walks: vec![RandomWalk { security: Security::Meta, base, scale: 0.0 }],
            gaps: vec![],
            ..GeneratorConfig::default()
        };
        let table = generate(&config).unwrap();
        let prices = table.series(Security::Meta).unwrap().valid_prices();
        prop_assert!(prices.iter().all(|p| *p == base));
    }
}
