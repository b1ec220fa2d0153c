#[cfg(feature = "cli")]
use crate::config::ScraperConfig;
use crate::core::Storage;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Command line flags. Anything left unset falls back to the TOML file, then to defaults.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "bass-results")]
#[command(about = "Scrape per-angler results for every tournament in a list")]
pub struct CliArgs {
    /// Tournament list (CSV with Tournament, Year, Date, Site, State, Tournament_URL)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Directory every output path is relative to
    #[arg(long)]
    pub output_root: Option<String>,

    /// Directory for the per-tournament files
    #[arg(long)]
    pub results_dir: Option<String>,

    /// File name of the combined results file
    #[arg(long)]
    pub combined_file: Option<String>,

    #[arg(long, help = "HTTP timeout per request")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Pause after each fetched tournament")]
    pub delay_ms: Option<u64>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliArgs {
    /// 只覆蓋使用者在命令列上明確指定的欄位
    pub fn apply(&self, config: &mut ScraperConfig) {
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(root) = &self.output_root {
            config.output_root = root.clone();
        }
        if let Some(dir) = &self.results_dir {
            config.results_dir = dir.clone();
        }
        if let Some(file) = &self.combined_file {
            config.combined_file = file.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        if let Some(delay) = self.delay_ms {
            config.delay_ms = delay;
        }
        config.verbose |= self.verbose;
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
