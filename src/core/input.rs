use crate::core::TournamentDescriptor;
use crate::utils::error::{Result, ScrapeError};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 讀取賽事清單；檔案不存在時在任何網路請求之前就中止
pub fn read_tournaments<P: AsRef<Path>>(path: P) -> Result<Vec<TournamentDescriptor>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ScrapeError::InputNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path)?;
    let tournaments = parse_tournaments(file)?;
    tracing::debug!("Loaded {} tournaments from {}", tournaments.len(), path.display());
    Ok(tournaments)
}

pub fn parse_tournaments<R: Read>(reader: R) -> Result<Vec<TournamentDescriptor>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut tournaments = Vec::new();
    for row in reader.deserialize() {
        tournaments.push(row?);
    }
    Ok(tournaments)
}
