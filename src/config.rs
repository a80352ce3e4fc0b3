use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Input and output locations of the aggregation.
///
/// Defaults to the dataset and result files in the working directory.
/// See [`Config::from_file`] for loading overrides from TOML.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// CSV dataset with `State` and `Value` columns.
    pub input: PathBuf,
    /// CSV file receiving the per-state means.
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("mental-health-treatment.csv"),
            output: PathBuf::from("treatment-by-state.csv"),
        }
    }
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// Keys left out of the file keep their default value.
    /// Paths are checked by [`Config::validate`] once overrides are applied.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let config: Config = toml::from_str(&contents).context("failed to deserialize config")?;

        Ok(config)
    }

    /// Replace the paths given on the command line.
    pub fn with_overrides(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_path(&self.input).context("invalid input path")?;
        check_path(&self.output).context("invalid output path")?;

        if self.input == self.output {
            bail!("input and output must differ, but both are {:?}", self.input);
        }

        Ok(())
    }
}

fn check_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        bail!("path must not be empty");
    }
    if path.file_name().is_none() {
        bail!("path must name a file, but is {path:?}");
    }
    Ok(())
}
