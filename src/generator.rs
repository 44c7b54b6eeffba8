//! Synthetic price series generation
//!
//! Each series is a linear ramp from `low` to `high` across `steps`
//! observations. Every observation gets uniform noise on the sell price and a
//! uniform, strictly positive spread below it for the buy price.
//!
//! # Example
//!
//! ```rust
//! use market_fixtures::generator::{generate_pair_series, SeriesSpec};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let records = generate_pair_series(&SeriesSpec::chaos_to_divine(), &mut rng);
//!
//! assert_eq!(records.len(), 144);
//! assert!(records.iter().all(|r| r.buy_price < r.sell_price));
//! ```

use crate::constants::*;
use crate::currency::{Currency, CurrencyPair};
use crate::types::{ExchangeRecord, Price, Timestamp};
use chrono::{Duration, TimeZone, Utc};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Parameters for one generated currency pair series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub pair: CurrencyPair,
    /// Timestamp of the first observation
    pub start: Timestamp,
    pub interval: Duration,
    pub steps: usize,
    /// Ramp start (first observation, before noise)
    pub low: Price,
    /// Ramp end (last observation, before noise)
    pub high: Price,
    /// Sell noise is drawn from `[-noise, noise]`
    pub noise: Price,
    /// Buy price sits this far below sell; both bounds positive
    pub spread: (Price, Price),
}

impl SeriesSpec {
    /// Chaos Orb → Divine Orb, 70 to 160 chaos per divine
    pub fn chaos_to_divine() -> Self {
        Self {
            pair: CurrencyPair::new(Currency::ChaosOrb, Currency::DivineOrb),
            start: fixture_start(),
            interval: Duration::minutes(INTERVAL_MINUTES),
            steps: STEPS,
            low: CHAOS_DIVINE_LOW,
            high: CHAOS_DIVINE_HIGH,
            noise: CHAOS_DIVINE_NOISE,
            spread: CHAOS_DIVINE_SPREAD,
        }
    }

    /// Divine Orb → Mirror of Kalandra, 200 to 1000 divines per mirror
    pub fn divine_to_mirror() -> Self {
        Self {
            pair: CurrencyPair::new(Currency::DivineOrb, Currency::MirrorOfKalandra),
            start: fixture_start(),
            interval: Duration::minutes(INTERVAL_MINUTES),
            steps: STEPS,
            low: DIVINE_MIRROR_LOW,
            high: DIVINE_MIRROR_HIGH,
            noise: DIVINE_MIRROR_NOISE,
            spread: DIVINE_MIRROR_SPREAD,
        }
    }

    /// Timestamp of observation `index`
    pub fn timestamp(&self, index: usize) -> Timestamp {
        self.start + self.interval * index as i32
    }

    /// Ramp value at `index`, before noise
    ///
    /// A single-step series stays at `low`.
    pub fn base_price(&self, index: usize) -> Price {
        if self.steps < 2 {
            return self.low;
        }
        let fraction = index as f64 / (self.steps - 1) as f64;
        self.low + (self.high - self.low) * fraction
    }

    /// Smallest and largest sell price the series can produce
    pub fn sell_bounds(&self) -> (Price, Price) {
        (self.low - self.noise, self.high + self.noise)
    }
}

/// Timestamp of the first observation of every fixture series
pub fn fixture_start() -> Timestamp {
    Utc.with_ymd_and_hms(START_YEAR, START_MONTH, START_DAY, START_HOUR, 0, 0)
        .single()
        .expect("fixture start constants form a valid UTC timestamp")
}

/// The fixed series, in the order they are written
pub fn fixture_specs() -> [SeriesSpec; 2] {
    [SeriesSpec::chaos_to_divine(), SeriesSpec::divine_to_mirror()]
}

/// Round a price to [`PRICE_DECIMALS`] places
pub fn round_price(value: Price) -> Price {
    let factor = 10f64.powi(PRICE_DECIMALS);
    (value * factor).round() / factor
}

/// Generate one series of records in index order
pub fn generate_pair_series<R: Rng + ?Sized>(spec: &SeriesSpec, rng: &mut R) -> Vec<ExchangeRecord> {
    let noise = Uniform::new_inclusive(-spec.noise, spec.noise);
    let spread = Uniform::new_inclusive(spec.spread.0, spec.spread.1);

    let records: Vec<ExchangeRecord> = (0..spec.steps)
        .map(|i| {
            let sell = round_price(spec.base_price(i) + noise.sample(rng));
            let buy = round_price(sell - spread.sample(rng));
            ExchangeRecord::new(spec.pair, spec.timestamp(i), sell, buy)
        })
        .collect();

    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        log::debug!(
            "Generated {} records for {}: sell {:.2} -> {:.2}",
            records.len(),
            spec.pair,
            first.sell_price,
            last.sell_price
        );
    }

    records
}

/// Generate every fixed series and concatenate them
///
/// Chaos Orb → Divine Orb records come first, then Divine Orb → Mirror of
/// Kalandra.
pub fn generate_fixture<R: Rng + ?Sized>(rng: &mut R) -> Vec<ExchangeRecord> {
    fixture_specs()
        .iter()
        .flat_map(|spec| generate_pair_series(spec, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn flat_spec() -> SeriesSpec {
        SeriesSpec {
            noise: 0.0,
            spread: (1.0, 1.0),
            ..SeriesSpec::chaos_to_divine()
        }
    }

    #[test]
    fn test_fixture_start() {
        let start = fixture_start();
        assert_eq!(
            start,
            Utc.with_ymd_and_hms(2025, 10, 22, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_base_price_ramp() {
        let spec = SeriesSpec::divine_to_mirror();

        assert_eq!(spec.base_price(0), 200.0);
        assert_relative_eq!(spec.base_price(143), 1000.0, epsilon = 1e-9);
        // 800 / 143 per step
        assert_relative_eq!(spec.base_price(1), 200.0 + 800.0 / 143.0, epsilon = 1e-9);
    }

    #[test]
    fn test_base_price_single_step() {
        let spec = SeriesSpec {
            steps: 1,
            ..SeriesSpec::chaos_to_divine()
        };
        assert_eq!(spec.base_price(0), 70.0);
    }

    #[test]
    fn test_timestamps() {
        let spec = SeriesSpec::chaos_to_divine();

        assert_eq!(spec.timestamp(0), fixture_start());
        assert_eq!(spec.timestamp(6) - spec.timestamp(0), Duration::hours(1));
        assert_eq!(
            spec.timestamp(143),
            fixture_start() + Duration::minutes(1430)
        );
    }

    #[test]
    fn test_round_price() {
        assert_eq!(round_price(71.234), 71.23);
        assert_eq!(round_price(71.236), 71.24);
        assert_eq!(round_price(-0.004), 0.0);
        assert_eq!(round_price(160.0), 160.0);
    }

    #[test]
    fn test_noiseless_series_follows_ramp() {
        let spec = flat_spec();
        let mut rng = StdRng::seed_from_u64(1);
        let records = generate_pair_series(&spec, &mut rng);

        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.sell_price, round_price(spec.base_price(i)));
            assert_relative_eq!(record.spread(), 1.0, epsilon = 0.011);
        }
    }

    #[test]
    fn test_series_labels_and_order() {
        let spec = SeriesSpec::divine_to_mirror();
        let mut rng = StdRng::seed_from_u64(2);
        let records = generate_pair_series(&spec, &mut rng);

        assert_eq!(records.len(), STEPS);
        assert!(records.iter().all(|r| r.pair() == spec.pair));
        assert!(records.windows(2).all(|w| w[1].time - w[0].time == spec.interval));
    }

    #[test]
    fn test_series_within_bounds() {
        let spec = SeriesSpec::chaos_to_divine();
        let mut rng = StdRng::seed_from_u64(3);
        let (min, max) = spec.sell_bounds();

        for record in generate_pair_series(&spec, &mut rng) {
            assert!(record.sell_price >= min && record.sell_price <= max);
            assert!(record.buy_price < record.sell_price);
            assert!(record.spread() >= spec.spread.0 - 0.01);
            assert!(record.spread() <= spec.spread.1 + 0.01);
        }
    }

    #[test]
    fn test_fixture_concatenation_order() {
        let mut rng = StdRng::seed_from_u64(4);
        let records = generate_fixture(&mut rng);

        assert_eq!(records.len(), 2 * STEPS);
        assert!(records[..STEPS]
            .iter()
            .all(|r| r.from_currency == Currency::ChaosOrb && r.to_currency == Currency::DivineOrb));
        assert!(records[STEPS..].iter().all(|r| {
            r.from_currency == Currency::DivineOrb && r.to_currency == Currency::MirrorOfKalandra
        }));
        assert_eq!(records[STEPS].time, fixture_start());
    }

    #[test]
    fn test_same_seed_same_fixture() {
        let a = generate_fixture(&mut StdRng::seed_from_u64(99));
        let b = generate_fixture(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
