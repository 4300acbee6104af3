//! Seeded random-walk price generator.
//!
//! Each path is `base + cumsum(scale * z)` with `z` drawn from a standard
//! normal. Paths are drawn one security at a time, in the order given, from a
//! single RNG seeded before the first draw, so a fixed seed and walk list
//! reproduce the table bit for bit.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::calendar;
use crate::error::{Error, Result};
use crate::security::Security;
use crate::table::PriceTable;

/// Random-walk parameters for one security.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomWalk {
    pub security: Security,
    /// Starting level the cumulative increments are added to.
    pub base: f64,
    /// Standard deviation of each daily increment.
    pub scale: f64,
}

/// A deliberately absent cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gap {
    pub date: NaiveDate,
    pub security: Security,
}

/// Everything the generator needs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    pub seed: u64,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub walks: Vec<RandomWalk>,
    pub gaps: Vec<Gap>,
}

impl Default for GeneratorConfig {
    /// Six walks over April 2025 with a single TSLA gap on the 15th.
    fn default() -> Self {
        let walk = |security, base, scale| RandomWalk {
            security,
            base,
            scale,
        };
        Self {
            seed: 42,
            start: ymd(2025, 4, 1),
            end: ymd(2025, 4, 24),
            walks: vec![
                walk(Security::Meta, 300.0, 2.0),
                walk(Security::Amzn, 175.0, 1.5),
                walk(Security::Aapl, 220.0, 1.2),
                walk(Security::Nflx, 650.0, 3.0),
                walk(Security::Googl, 150.0, 1.0),
                walk(Security::Tsla, 250.0, 2.5),
            ],
            gaps: vec![Gap {
                date: ymd(2025, 4, 15),
                security: Security::Tsla,
            }],
        }
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    // Constant literal dates; from_ymd_opt only fails on impossible dates.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

impl GeneratorConfig {
    /// Check walk parameters before any draw.
    pub fn validate(&self) -> Result<()> {
        let mut seen = Vec::with_capacity(self.walks.len());
        for w in &self.walks {
            if seen.contains(&w.security) {
                return Err(Error::DuplicateSecurity(w.security));
            }
            seen.push(w.security);
            if !w.base.is_finite() || w.base <= 0.0 {
                return Err(Error::InvalidBasePrice {
                    security: w.security,
                    base: w.base,
                });
            }
            if !w.scale.is_finite() || w.scale < 0.0 {
                return Err(Error::InvalidScale {
                    security: w.security,
                    scale: w.scale,
                });
            }
        }
        Ok(())
    }
}

/// Cumulative random walk of `len` steps starting from `base`.
pub fn random_walk<R: Rng>(rng: &mut R, base: f64, scale: f64, len: usize) -> Vec<f64> {
    let mut level = base;
    (0..len)
        .map(|_| {
            let z: f64 = rng.sample(StandardNormal);
            level += z * scale;
            level
        })
        .collect()
}

/// Build the price table described by `config`.
pub fn generate(config: &GeneratorConfig) -> Result<PriceTable> {
    config.validate()?;
    let dates = calendar::business_days(config.start, config.end)?;
    let n_days = dates.len();

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut table = PriceTable::new(dates);
    for w in &config.walks {
        let path = random_walk(&mut rng, w.base, w.scale, n_days);
        table.insert(w.security, path)?;
    }

    for gap in &config.gaps {
        table.set_absent(gap.date, gap.security)?;
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shape() {
        let table = generate(&GeneratorConfig::default()).unwrap();
        assert_eq!(table.len(), 18);
        assert_eq!(table.width(), 6);
        let order: Vec<_> = table.securities().collect();
        assert_eq!(order, Security::ALL.to_vec());
    }

    #[test]
    fn default_gap_injected() {
        let table = generate(&GeneratorConfig::default()).unwrap();
        assert_eq!(table.get(ymd(2025, 4, 15), Security::Tsla), Some(None));
        let missing: usize = table.iter().map(|s| s.missing_dates().len()).sum();
        assert_eq!(missing, 1);
    }

    #[test]
    fn same_seed_same_table() {
        let config = GeneratorConfig::default();
        assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
    }

    #[test]
    fn different_seed_different_table() {
        let a = generate(&GeneratorConfig::default()).unwrap();
        let b = generate(&GeneratorConfig {
            seed: 7,
            ..GeneratorConfig::default()
        })
        .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn zero_scale_is_flat() {
        let mut rng = StdRng::seed_from_u64(1);
        let path = random_walk(&mut rng, 150.0, 0.0, 5);
        assert_eq!(path, vec![150.0; 5]);
    }

    #[test]
    fn walk_increments_accumulate() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        let path = random_walk(&mut a, 100.0, 2.0, 4);
        let mut level = 100.0;
        for p in path {
            let z: f64 = b.sample(StandardNormal);
            level += 2.0 * z;
            assert!((p - level).abs() < 1e-12);
        }
    }

    #[test]
    fn gap_on_weekend_rejected() {
        let config = GeneratorConfig {
            gaps: vec![Gap {
                date: ymd(2025, 4, 12),
                security: Security::Meta,
            }],
            ..GeneratorConfig::default()
        };
        assert_eq!(
            generate(&config),
            Err(Error::DateOutsideCalendar(ymd(2025, 4, 12)))
        );
    }

    #[test]
    fn gap_for_unconfigured_security_rejected() {
        let mut config = GeneratorConfig::default();
        config.walks.retain(|w| w.security != Security::Tsla);
        assert_eq!(generate(&config), Err(Error::UnknownSecurity(Security::Tsla)));
    }

    #[test]
    fn invalid_parameters_rejected() {
        let mut config = GeneratorConfig::default();
        config.walks[0].scale = -1.0;
        assert!(matches!(generate(&config), Err(Error::InvalidScale { .. })));

        let mut config = GeneratorConfig::default();
        config.walks[1].base = f64::NAN;
        assert!(matches!(generate(&config), Err(Error::InvalidBasePrice { .. })));

        let mut config = GeneratorConfig::default();
        config.walks.push(config.walks[0]);
        assert_eq!(generate(&config), Err(Error::DuplicateSecurity(Security::Meta)));
    }
}
