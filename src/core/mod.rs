pub mod extract;
pub mod fetch;
pub mod input;
pub mod scrape;
pub mod writer;

pub use crate::domain::model::{
    FailureReason, ResultRecord, RunSummary, TournamentDescriptor, TournamentOutcome,
};
pub use crate::domain::ports::{ConfigProvider, PageFetcher, Storage, TableLocator};
pub use crate::utils::error::Result;
