pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_range, Validate,
};

pub const DEFAULT_INPUT: &str = "bassmaster_all_tournaments.csv";
pub const DEFAULT_RESULTS_DIR: &str = "tournament_results";
pub const DEFAULT_COMBINED_FILE: &str = "bassmaster_all_detailed_results.csv";
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Resolved settings for one run: defaults, then the TOML file, then command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    pub input_path: String,
    pub output_root: String,
    pub results_dir: String,
    pub combined_file: String,
    pub timeout_seconds: u64,
    pub delay_ms: u64,
    pub verbose: bool,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT.to_string(),
            output_root: ".".to_string(),
            results_dir: DEFAULT_RESULTS_DIR.to_string(),
            combined_file: DEFAULT_COMBINED_FILE.to_string(),
            timeout_seconds: crate::core::fetch::DEFAULT_TIMEOUT_SECONDS,
            delay_ms: DEFAULT_DELAY_MS,
            verbose: false,
        }
    }
}

impl ConfigProvider for ScraperConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_root(&self) -> &str {
        &self.output_root
    }

    fn results_dir(&self) -> &str {
        &self.results_dir
    }

    fn combined_file(&self) -> &str {
        &self.combined_file
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}

impl Validate for ScraperConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        validate_path("output_root", &self.output_root)?;
        validate_non_empty_string("results_dir", &self.results_dir)?;
        validate_path("combined_file", &self.combined_file)?;
        validate_file_extension("combined_file", &self.combined_file, &["csv"])?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        validate_range("delay_ms", self.delay_ms, 0, 60_000)?;
        Ok(())
    }
}
