//! generate-market-data - write the synthetic exchange-rate fixture
//!
//! Takes no arguments. Writes `market_data.json` in the working directory,
//! replacing any previous run.
//!
//! ## Example Usage
//!
//! ```bash
//! generate-market-data
//! RUST_LOG=debug generate-market-data
//! ```

use anyhow::Context;
use colored::Colorize;
use market_fixtures::constants::OUTPUT_PATH;
use market_fixtures::fixture::write_fixture;
use market_fixtures::generator::generate_fixture;
use std::process;

fn main() {
    env_logger::init();

    match run() {
        Ok(count) => println!(
            "{} Market data ({} records) successfully saved to '{}'",
            "✓".green().bold(),
            count,
            OUTPUT_PATH
        ),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

fn run() -> anyhow::Result<usize> {
    let records = generate_fixture(&mut rand::thread_rng());
    write_fixture(OUTPUT_PATH, &records)
        .with_context(|| format!("failed to write {}", OUTPUT_PATH))?;
    Ok(records.len())
}
