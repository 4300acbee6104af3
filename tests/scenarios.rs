//! End-to-end scenarios over the default universe.

use chrono::NaiveDate;
use secflow::{
    Direction, Error, GeneratorConfig, OrderFlow, Security, StatsError, SummaryOptions, generate,
    scan, summarize, top_n,
};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
}

// ============================================================================
// Rankings
// ============================================================================

#[test]
fn most_ordered_excludes_nflx() {
    let top = top_n(&OrderFlow::sample().order_counts(), Direction::Descending, 5);
    assert_eq!(format!("{} orders", top[0]), "1. AAPL: 2000 orders");
    assert!(top.iter().all(|r| r.security != Security::Nflx));
}

#[test]
fn lowest_fill_ratio_starts_with_nflx() {
    let top = top_n(&OrderFlow::sample().fill_ratios(), Direction::Ascending, 5);
    assert_eq!(format!("{:.2}", top[0]), "1. NFLX: 0.50");
}

#[test]
fn top_list_length_is_min_of_n_and_universe() {
    let flow = OrderFlow::sample();
    for n in [0, 1, 5, 6, 10] {
        let top = top_n(&flow.order_counts(), Direction::Descending, n);
        assert_eq!(top.len(), n.min(6));
    }
}

// ============================================================================
// Gap scan
// ============================================================================

#[test]
fn injected_gap_reported_once() {
    let table = generate(&GeneratorConfig::default()).unwrap();
    let report = scan(&table);

    assert_eq!(report.gaps.len(), 1);
    assert_eq!(report.gaps[0].security, Security::Tsla);
    assert_eq!(report.gaps[0].dates, vec![date(15)]);
    assert!(report.invalid.iter().all(|f| f.security != Security::Tsla));
}

#[test]
fn gap_removes_exactly_one_price() {
    let table = generate(&GeneratorConfig::default()).unwrap();
    let tsla = table.series(Security::Tsla).unwrap();
    let meta = table.series(Security::Meta).unwrap();
    assert_eq!(tsla.valid_prices().len(), table.len() - 1);
    assert_eq!(meta.valid_prices().len(), table.len());
}

#[test]
fn gap_return_spans_neighbours() {
    let table = generate(&GeneratorConfig::default()).unwrap();
    let tsla = table.series(Security::Tsla).unwrap();
    let valid = tsla.valid_prices();
    let returns = secflow::stats::simple_returns(&valid).unwrap();
    assert_eq!(returns.len(), valid.len() - 1);

    let before = table.get(date(14), Security::Tsla).unwrap().unwrap();
    let after = table.get(date(16), Security::Tsla).unwrap().unwrap();
    let joined = (after - before) / before;
    assert!(returns.iter().any(|r| (r - joined).abs() < 1e-15));
}

// ============================================================================
// Volatility
// ============================================================================

#[test]
fn default_volatilities_finite_and_non_negative() {
    let table = generate(&GeneratorConfig::default()).unwrap();
    let summary = summarize(&table, &OrderFlow::sample(), SummaryOptions::default()).unwrap();
    for (security, vol) in &summary.volatilities {
        assert!(vol.is_finite() && *vol >= 0.0, "{security}: {vol}");
    }
}

#[test]
fn fully_gapped_security_fails_explicitly() {
    let mut config = GeneratorConfig::default();
    config.end = date(2);
    config.gaps = vec![secflow::Gap {
        date: date(2),
        security: Security::Googl,
    }];
    let table = generate(&config).unwrap();
    let err = summarize(&table, &OrderFlow::sample(), SummaryOptions::default()).unwrap_err();
    assert_eq!(
        err,
        Error::Volatility {
            security: Security::Googl,
            source: StatsError::InsufficientData { valid: 1 },
        }
    );
}

#[test]
fn non_positive_denominator_fails_explicitly() {
    let mut table = generate(&GeneratorConfig::default()).unwrap();
    table.set(date(3), Security::Amzn, Some(0.0)).unwrap();

    let err = summarize(&table, &OrderFlow::sample(), SummaryOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Volatility {
            security: Security::Amzn,
            source: StatsError::NonPositivePrice { index: 2, .. },
        }
    ));

    let report = scan(&table);
    assert_eq!(report.invalid.len(), 1);
    assert_eq!(report.invalid[0].dates, vec![date(3)]);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn rerun_reproduces_report() {
    let run = || {
        let table = generate(&GeneratorConfig::default()).unwrap();
        summarize(&table, &OrderFlow::sample(), SummaryOptions::default())
            .unwrap()
            .to_string()
    };
    assert_eq!(run(), run());
}
