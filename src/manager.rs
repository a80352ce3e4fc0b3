use crate::analysis::{aggregate, count_unlisted, drop_missing, load_records, save_results};
use crate::config::Config;
use crate::model::STATES;
use anyhow::{Context, Result};

pub struct Manager {
    cfg: Config,
}

impl Manager {
    pub fn new(cfg: Config) -> Result<Self> {
        cfg.validate().context("failed to validate cfg")?;
        log::info!("{cfg:#?}");

        Ok(Self { cfg })
    }

    /// Compute the per-state means and write them to the output file.
    ///
    /// Nothing is written unless every state has at least one record.
    pub fn run_aggregation(&self) -> Result<()> {
        let input = &self.cfg.input;
        let records = load_records(input).with_context(|| format!("failed to load {input:?}"))?;
        let n_loaded = records.len();
        log::info!("loaded {n_loaded} records from {input:?}");

        let records = drop_missing(records);
        log::info!("dropped {} records without a value", n_loaded - records.len());

        for (state, count) in count_unlisted(&records, &STATES) {
            log::warn!("ignoring {count} records of unlisted state {state:?}");
        }

        let results = aggregate(&records, &STATES).context("failed to aggregate records")?;

        let output = &self.cfg.output;
        save_results(&results, output).with_context(|| format!("failed to save {output:?}"))?;
        log::info!("wrote {} results to {output:?}", results.len());

        Ok(())
    }
}
