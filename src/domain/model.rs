use serde::{Deserialize, Serialize};

/// 輸入清單中的一列賽事
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TournamentDescriptor {
    #[serde(rename = "Tournament")]
    pub name: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Date", default)]
    pub date: String,
    #[serde(rename = "Site", default)]
    pub site: String,
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "Tournament_URL", default)]
    pub url: Option<String>,
}

impl TournamentDescriptor {
    /// Detail page URL, if the input row carries a non-blank one.
    pub fn url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// One angler's placement row. Values are kept as the page shows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    pub tournament: String,
    pub year: String,
    pub date: String,
    pub site: String,
    pub state: String,
    pub place: String,
    pub angler: String,
    pub angler_id: Option<String>,
    pub fish: String,
    pub weight_oz: String,
    pub big_bag: String,
    pub big_bass: String,
    pub leader_bonus: String,
    pub fantasy_points: String,
}

impl ResultRecord {
    /// CSV header, in serialization order.
    pub const FIELDS: [&'static str; 14] = [
        "tournament",
        "year",
        "date",
        "site",
        "state",
        "place",
        "angler",
        "angler_id",
        "fish",
        "weight_oz",
        "big_bag",
        "big_bass",
        "leader_bonus",
        "fantasy_points",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    MissingUrl,
    Fetch(String),
    NoResultsTable,
    NoRows,
    Write(String),
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::MissingUrl => write!(f, "no URL"),
            FailureReason::Fetch(reason) => write!(f, "fetch failed: {}", reason),
            FailureReason::NoResultsTable => write!(f, "no results table found"),
            FailureReason::NoRows => write!(f, "results table had no usable rows"),
            FailureReason::Write(reason) => write!(f, "write failed: {}", reason),
        }
    }
}

/// Terminal state of a single tournament within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TournamentOutcome {
    Success { rows: usize, file: String },
    Failed(FailureReason),
}

impl TournamentOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TournamentOutcome::Success { .. })
    }

    /// 沒有 URL 的賽事直接略過（仍計為失敗）
    pub fn is_skipped(&self) -> bool {
        matches!(self, TournamentOutcome::Failed(FailureReason::MissingUrl))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub successful: usize,
    pub failed: usize,
    pub total_rows: usize,
    pub individual_files: Vec<String>,
    pub combined_file: Option<String>,
    pub outcomes: Vec<(String, TournamentOutcome)>,
}

impl RunSummary {
    pub fn record(&mut self, tournament: &str, outcome: TournamentOutcome) {
        match &outcome {
            TournamentOutcome::Success { rows, file } => {
                self.successful += 1;
                self.total_rows += rows;
                self.individual_files.push(file.clone());
            }
            TournamentOutcome::Failed(_) => self.failed += 1,
        }
        self.outcomes.push((tournament.to_string(), outcome));
    }
}
