//! Fixture file I/O and lookups
//!
//! Writes generated records as an indented JSON array and reads them back for
//! consumers that chart one currency pair at a time.

use crate::currency::CurrencyPair;
use crate::error::Result;
use crate::types::ExchangeRecord;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write records to `path`, replacing any existing file
///
/// The file handle is dropped on every return path, including errors.
pub fn write_fixture<P: AsRef<Path>>(path: P, records: &[ExchangeRecord]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;

    log::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Read a fixture file written by [`write_fixture`]
pub fn load_fixture<P: AsRef<Path>>(path: P) -> Result<Vec<ExchangeRecord>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let records: Vec<ExchangeRecord> = serde_json::from_reader(reader)?;

    log::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Unique currency pairs in first-seen order
pub fn pairs(records: &[ExchangeRecord]) -> Vec<CurrencyPair> {
    let mut seen = Vec::new();
    for record in records {
        let pair = record.pair();
        if !seen.contains(&pair) {
            seen.push(pair);
        }
    }
    seen
}

/// Records of one pair, sorted by time ascending
pub fn series_for_pair(records: &[ExchangeRecord], pair: CurrencyPair) -> Vec<ExchangeRecord> {
    let mut series: Vec<ExchangeRecord> = records
        .iter()
        .filter(|r| r.pair() == pair)
        .cloned()
        .collect();
    series.sort_by_key(|r| r.time);
    series
}
