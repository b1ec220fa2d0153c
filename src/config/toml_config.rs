use crate::config::ScraperConfig;
use crate::utils::error::{Result, ScrapeError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub fetch: Option<FetchConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchConfig {
    pub timeout_seconds: Option<u64>,
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub root: Option<String>,
    pub results_dir: Option<String>,
    pub combined_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScrapeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScrapeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RESULTS_ROOT})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScrapeError::ConfigError {
            message: format!("env var pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn apply(&self, config: &mut ScraperConfig) {
        if let Some(path) = self.input.as_ref().and_then(|i| i.path.clone()) {
            config.input_path = path;
        }

        if let Some(fetch) = &self.fetch {
            if let Some(timeout) = fetch.timeout_seconds {
                config.timeout_seconds = timeout;
            }
            if let Some(delay) = fetch.delay_ms {
                config.delay_ms = delay;
            }
        }

        if let Some(output) = &self.output {
            if let Some(root) = &output.root {
                config.output_root = root.clone();
            }
            if let Some(dir) = &output.results_dir {
                config.results_dir = dir.clone();
            }
            if let Some(file) = &output.combined_file {
                config.combined_file = file.clone();
            }
        }

        if let Some(verbose) = self.logging.as_ref().and_then(|l| l.verbose) {
            config.verbose = verbose;
        }
    }
}
