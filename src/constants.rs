//! Generator constants
//!
//! Fixed parameters for the two generated price series. There is no runtime
//! configuration; change these and rebuild.

/// Calendar date and time of the first observation (UTC)
pub const START_YEAR: i32 = 2025;
pub const START_MONTH: u32 = 10;
pub const START_DAY: u32 = 22;
pub const START_HOUR: u32 = 0;

/// Minutes between observations
pub const INTERVAL_MINUTES: i64 = 10;

/// Observations per pair (24 hours at 10-minute resolution)
pub const STEPS: usize = 144;

/// Output file, relative to the working directory
pub const OUTPUT_PATH: &str = "market_data.json";

/// Chaos Orb → Divine Orb: chaos per divine
pub const CHAOS_DIVINE_LOW: f64 = 70.0;
pub const CHAOS_DIVINE_HIGH: f64 = 160.0;
pub const CHAOS_DIVINE_NOISE: f64 = 2.0;
pub const CHAOS_DIVINE_SPREAD: (f64, f64) = (1.0, 4.0);

/// Divine Orb → Mirror of Kalandra: divines per mirror
pub const DIVINE_MIRROR_LOW: f64 = 200.0;
pub const DIVINE_MIRROR_HIGH: f64 = 1000.0;
pub const DIVINE_MIRROR_NOISE: f64 = 20.0;
pub const DIVINE_MIRROR_SPREAD: (f64, f64) = (5.0, 20.0);

/// Decimal places kept on every price
pub const PRICE_DECIMALS: i32 = 2;
