use crate::model::{InputRecord, ResultRecord};
use crate::stats::Accumulator;
use anyhow::{Context, Result, bail};
use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

const REQUIRED_COLUMNS: [&str; 2] = ["State", "Value"];

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AggregateError {
    #[error("no records with a value for state {state:?}")]
    EmptyGroup { state: String },
}

/// Read every record of a CSV dataset.
pub fn load_records<P: AsRef<Path>>(file: P) -> Result<Vec<InputRecord>> {
    let file = file.as_ref();
    let file = File::open(file).with_context(|| format!("failed to open {file:?}"))?;
    read_records(BufReader::new(file))
}

/// Read every record of CSV data with a header row.
///
/// Rows shorter than the header are accepted; a missing `Value` cell counts as absent.
pub fn read_records<R: Read>(rdr: R) -> Result<Vec<InputRecord>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);

    let headers = reader.headers().context("failed to read header row")?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            bail!("header row must contain a {column:?} column");
        }
    }

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: InputRecord = result.context("failed to deserialize record")?;
        records.push(record);
    }
    Ok(records)
}

/// Keep only the records that have a value.
pub fn drop_missing(records: Vec<InputRecord>) -> Vec<InputRecord> {
    records
        .into_iter()
        .filter(|record| record.value.is_some())
        .collect()
}

/// Compute the mean value of each state, in the order of `states`.
///
/// # Errors
/// Returns [`AggregateError::EmptyGroup`] for the first state without records.
pub fn aggregate(records: &[InputRecord], states: &[&str]) -> Result<Vec<ResultRecord>> {
    let mut results = Vec::with_capacity(states.len());
    for &state in states {
        let mut acc = Accumulator::new();
        for record in records.iter().filter(|record| record.state == state) {
            if let Some(value) = record.value {
                acc.add(value);
            }
        }

        let mean = acc.mean().ok_or_else(|| AggregateError::EmptyGroup {
            state: state.to_string(),
        })?;
        log::debug!("{state}: {} records, mean {mean}", acc.n_vals());

        results.push(ResultRecord {
            state: state.to_string(),
            value: mean,
        });
    }
    Ok(results)
}

/// Count the records of states not present in `states`.
pub fn count_unlisted(records: &[InputRecord], states: &[&str]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        if !states.contains(&record.state.as_str()) {
            *counts.entry(record.state.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Write the results as CSV, replacing any existing file.
pub fn save_results<P: AsRef<Path>>(results: &[ResultRecord], file: P) -> Result<()> {
    let file = file.as_ref();
    let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
    write_results(results, BufWriter::new(file))
}

/// Write the results as CSV with a `State,Value` header row.
pub fn write_results<W: Write>(results: &[ResultRecord], wtr: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(wtr);

    for result in results {
        writer
            .serialize(result)
            .context("failed to serialize result")?;
    }

    writer.flush().context("failed to flush writer stream")?;

    Ok(())
}
