use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Extraction error: {message}")]
    ExtractionError { message: String },

    #[error("Invalid CSS selector '{selector}': {message}")]
    SelectorError { selector: String, message: String },
}

impl ScrapeError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ScrapeError::InputNotFound { path } => {
                format!("Error: {} not found!", path)
            }
            ScrapeError::ApiError(e) if e.is_timeout() => {
                "The request timed out before the site responded".to_string()
            }
            ScrapeError::ApiError(_) | ScrapeError::HttpStatus { .. } => {
                format!("Could not fetch the page: {}", self)
            }
            ScrapeError::CsvError(_) => format!("Could not read or write CSV data: {}", self),
            ScrapeError::IoError(_) => format!("File system error: {}", self),
            ScrapeError::ConfigError { .. } | ScrapeError::InvalidConfigValueError { .. } => {
                format!("Invalid configuration: {}", self)
            }
            ScrapeError::ExtractionError { .. } | ScrapeError::SelectorError { .. } => {
                format!("Could not extract results: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScrapeError::InputNotFound { .. } => {
                "Generate the tournament list first or pass --input <path>"
            }
            ScrapeError::ApiError(_) => "Check the network connection or raise --timeout-seconds",
            ScrapeError::HttpStatus { .. } => "Verify the tournament URL is still published",
            ScrapeError::CsvError(_) => {
                "Make sure the input has the columns Tournament, Year, Date, Site, State, Tournament_URL"
            }
            ScrapeError::IoError(_) => "Check that the output directory is writable",
            ScrapeError::ConfigError { .. } | ScrapeError::InvalidConfigValueError { .. } => {
                "Fix the highlighted option in the command line or TOML file"
            }
            ScrapeError::ExtractionError { .. } | ScrapeError::SelectorError { .. } => {
                "The page layout may have changed; inspect the results table markup"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
