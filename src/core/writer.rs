use crate::core::{ResultRecord, Storage};
use crate::utils::error::{Result, ScrapeError};
use regex::Regex;
use std::sync::OnceLock;

fn non_slug_chars() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^\w\s-]").expect("static slug pattern"))
}

/// Filesystem-safe tournament name: punctuation removed, spaces become `_`.
pub fn slugify(name: &str) -> String {
    non_slug_chars()
        .replace_all(name, "")
        .trim()
        .replace(' ', "_")
}

pub fn tournament_file_name(year: &str, name: &str) -> String {
    format!("{}_{}.csv", year, slugify(name))
}

pub fn records_to_csv(records: &[ResultRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    writer.into_inner().map_err(|e| ScrapeError::IoError(e.into_error()))
}

pub struct ResultWriter<S: Storage> {
    storage: S,
    results_dir: String,
    combined_file: String,
}

impl<S: Storage> ResultWriter<S> {
    pub fn new(storage: S, results_dir: impl Into<String>, combined_file: impl Into<String>) -> Self {
        Self {
            storage,
            results_dir: results_dir.into(),
            combined_file: combined_file.into(),
        }
    }

    /// 寫入單一賽事的結果檔，回傳相對於輸出根目錄的路徑
    pub async fn write_tournament(
        &self,
        year: &str,
        name: &str,
        records: &[ResultRecord],
    ) -> Result<String> {
        let path = format!("{}/{}", self.results_dir, tournament_file_name(year, name));
        let data = records_to_csv(records)?;

        tracing::debug!("Writing {} rows ({} bytes) to {}", records.len(), data.len(), path);
        self.storage.write_file(&path, &data).await?;
        Ok(path)
    }

    pub async fn write_combined(&self, records: &[ResultRecord]) -> Result<String> {
        let data = records_to_csv(records)?;

        tracing::debug!("Writing {} rows to {}", records.len(), self.combined_file);
        self.storage.write_file(&self.combined_file, &data).await?;
        Ok(self.combined_file.clone())
    }

    pub fn results_dir(&self) -> &str {
        &self.results_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(place: &str, angler_id: Option<&str>) -> ResultRecord {
        ResultRecord {
            tournament: "Sabine River".to_string(),
            year: "2023".to_string(),
            date: "May 4-7".to_string(),
            site: "Sabine River".to_string(),
            state: "TX".to_string(),
            place: place.to_string(),
            angler: "Jane, \"JD\" Doe".to_string(),
            angler_id: angler_id.map(str::to_string),
            fish: "15".to_string(),
            weight_oz: "700".to_string(),
            big_bag: "0".to_string(),
            big_bass: "0".to_string(),
            leader_bonus: "0".to_string(),
            fantasy_points: "80".to_string(),
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Elite Series presented by X!"), "Elite_Series_presented_by_X");
        assert_eq!(slugify("  St. Johns River  "), "St_Johns_River");
        assert_eq!(slugify("Lake Fork-Toyota Series"), "Lake_Fork-Toyota_Series");
    }

    #[test]
    fn test_tournament_file_name() {
        assert_eq!(
            tournament_file_name("2023", "Elite Series presented by X!"),
            "2023_Elite_Series_presented_by_X.csv"
        );
    }

    #[test]
    fn test_csv_header_and_empty_angler_id() {
        let data = records_to_csv(&[record("1", Some("42")), record("2", None)]).unwrap();
        let text = String::from_utf8(data).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], ResultRecord::FIELDS.join(","));
        assert_eq!(
            lines[1],
            "Sabine River,2023,May 4-7,Sabine River,TX,1,\"Jane, \"\"JD\"\" Doe\",42,15,700,0,0,0,80"
        );
        assert_eq!(
            lines[2],
            "Sabine River,2023,May 4-7,Sabine River,TX,2,\"Jane, \"\"JD\"\" Doe\",,15,700,0,0,0,80"
        );
    }
}
