//! # Market Fixtures
//!
//! Synthetic exchange-rate history between in-game currencies, written as
//! JSON fixture data.
//!
//! Two series are generated, each 24 hours at 10-minute resolution: Chaos Orb
//! → Divine Orb and Divine Orb → Mirror of Kalandra. Sell prices ramp upward
//! with uniform noise and buy prices sit a random positive spread below.
//!
//! ## Example
//!
//! ```rust,no_run
//! use market_fixtures::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = generate_fixture(&mut rand::thread_rng());
//!     write_fixture(OUTPUT_PATH, &records)?;
//!     Ok(())
//! }
//! ```

pub mod constants;
pub mod currency;
pub mod error;
pub mod fixture;
pub mod generator;
pub mod types;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::constants::OUTPUT_PATH;
    pub use crate::currency::{Currency, CurrencyPair};
    pub use crate::error::{FixtureError, Result};
    pub use crate::fixture::{load_fixture, pairs, series_for_pair, write_fixture};
    pub use crate::generator::{generate_fixture, generate_pair_series, SeriesSpec};
    pub use crate::types::*;
}
