pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig, ScraperConfig};

pub use crate::core::{
    extract::{HeaderTableLocator, ResultsExtractor},
    fetch::HttpFetcher,
    input::read_tournaments,
    scrape::ScrapeEngine,
    writer::ResultWriter,
};
pub use crate::domain::model::{
    FailureReason, ResultRecord, RunSummary, TournamentDescriptor, TournamentOutcome,
};
pub use crate::utils::error::{Result, ScrapeError};
