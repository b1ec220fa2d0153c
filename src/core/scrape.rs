use crate::config::cli::LocalStorage;
use crate::core::extract::{Extraction, HeaderTableLocator, ResultsExtractor};
use crate::core::fetch::HttpFetcher;
use crate::core::writer::ResultWriter;
use crate::core::{
    ConfigProvider, FailureReason, PageFetcher, ResultRecord, RunSummary, Storage, TableLocator,
    TournamentDescriptor, TournamentOutcome,
};
use crate::utils::error::Result;
use std::time::Duration;

/// Sequential fetch → extract → write loop over a tournament list.
pub struct ScrapeEngine<F: PageFetcher, S: Storage, L: TableLocator> {
    fetcher: F,
    extractor: ResultsExtractor<L>,
    writer: ResultWriter<S>,
    delay: Duration,
}

impl<F: PageFetcher, S: Storage, L: TableLocator> ScrapeEngine<F, S, L> {
    pub fn new(
        fetcher: F,
        extractor: ResultsExtractor<L>,
        writer: ResultWriter<S>,
        delay: Duration,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            writer,
            delay,
        }
    }

    pub async fn run(&self, tournaments: &[TournamentDescriptor]) -> RunSummary {
        tracing::info!("Found {} tournaments to scrape", tournaments.len());

        let mut summary = RunSummary::default();
        let mut all_results: Vec<ResultRecord> = Vec::new();
        let total = tournaments.len();

        for (i, tournament) in tournaments.iter().enumerate() {
            tracing::info!("[{}/{}] {}", i + 1, total, tournament.name);

            let outcome = self.process(tournament, &mut all_results).await;
            match &outcome {
                TournamentOutcome::Success { rows, file } => {
                    tracing::debug!("{} rows saved to {}", rows, file);
                }
                TournamentOutcome::Failed(FailureReason::MissingUrl) => {
                    tracing::warn!("    ⚠ No URL, skipping");
                }
                TournamentOutcome::Failed(reason) => {
                    tracing::warn!("    ⚠ {}", reason);
                }
            }

            let skipped = outcome.is_skipped();
            summary.record(&tournament.name, outcome);

            // 每次請求之後固定等待，限制請求頻率
            if !skipped && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        if all_results.is_empty() {
            tracing::warn!("⚠ No results scraped!");
            return summary;
        }

        match self.writer.write_combined(&all_results).await {
            Ok(path) => summary.combined_file = Some(path),
            Err(e) => tracing::error!("❌ Failed to write combined file: {}", e),
        }

        summary
    }

    async fn process(
        &self,
        tournament: &TournamentDescriptor,
        all_results: &mut Vec<ResultRecord>,
    ) -> TournamentOutcome {
        let Some(url) = tournament.url() else {
            return TournamentOutcome::Failed(FailureReason::MissingUrl);
        };

        let html = match self.fetcher.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("    ⚠ Error: {}", e);
                return TournamentOutcome::Failed(FailureReason::Fetch(e.to_string()));
            }
        };

        let records = match self.extractor.extract(&html, tournament) {
            Extraction::NoTable => {
                return TournamentOutcome::Failed(FailureReason::NoResultsTable);
            }
            Extraction::Rows(records) if records.is_empty() => {
                return TournamentOutcome::Failed(FailureReason::NoRows);
            }
            Extraction::Rows(records) => records,
        };

        match self
            .writer
            .write_tournament(&tournament.year, &tournament.name, &records)
            .await
        {
            Ok(file) => {
                let rows = records.len();
                all_results.extend(records);
                TournamentOutcome::Success { rows, file }
            }
            Err(e) => TournamentOutcome::Failed(FailureReason::Write(e.to_string())),
        }
    }

    pub fn results_dir(&self) -> &str {
        self.writer.results_dir()
    }
}

impl ScrapeEngine<HttpFetcher, LocalStorage, HeaderTableLocator> {
    /// 依設定組出 HTTP 抓取、本地輸出的標準引擎
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let fetcher = HttpFetcher::new(Duration::from_secs(config.timeout_seconds()))?;
        let extractor = ResultsExtractor::new(HeaderTableLocator::new()?)?;
        let writer = ResultWriter::new(
            LocalStorage::new(config.output_root()),
            config.results_dir(),
            config.combined_file(),
        );

        Ok(Self::new(
            fetcher,
            extractor,
            writer,
            Duration::from_millis(config.delay_ms()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ScrapeError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn get_file(&self, path: &str) -> Option<String> {
            let files = self.files.lock().await;
            files
                .get(path)
                .map(|data| String::from_utf8_lossy(data).to_string())
        }

        async fn file_count(&self) -> usize {
            self.files.lock().await.len()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    /// Serves canned pages keyed by URL; unknown URLs fail like a 404.
    #[derive(Default)]
    struct MockFetcher {
        pages: HashMap<String, String>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl MockFetcher {
        fn with_page(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), html.to_string());
            self
        }
    }

    #[async_trait]
    impl PageFetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.calls.lock().await.push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| ScrapeError::HttpStatus {
                    status: 404,
                    url: url.to_string(),
                })
        }
    }

    fn results_page(rows: usize) -> String {
        let mut html = String::from(
            "<table><tr><th>Place</th><th>Angler</th><th>Fish</th><th>Weight (oz)</th>\
             <th>Big Bag</th><th>Big Bass</th><th>Leader Bonus</th><th>Fantasy Points</th></tr>",
        );
        for i in 1..=rows {
            html.push_str(&format!(
                "<tr><td>{i}</td><td><a href=\"/angler?playerId={i}00\">Angler {i}</a></td>\
                 <td>15</td><td>800</td><td>0</td><td>0</td><td>0</td><td>{}</td></tr>",
                100 - i
            ));
        }
        html.push_str("</table>");
        html
    }

    fn tournament(name: &str, url: Option<&str>) -> TournamentDescriptor {
        TournamentDescriptor {
            name: name.to_string(),
            year: "2024".to_string(),
            date: "Jun 1".to_string(),
            site: "Lake".to_string(),
            state: "TN".to_string(),
            url: url.map(str::to_string),
        }
    }

    fn engine_with_delay(
        fetcher: MockFetcher,
        storage: MockStorage,
        delay: Duration,
    ) -> ScrapeEngine<MockFetcher, MockStorage, HeaderTableLocator> {
        ScrapeEngine::new(
            fetcher,
            ResultsExtractor::new(HeaderTableLocator::new().unwrap()).unwrap(),
            ResultWriter::new(storage, "tournament_results", "all.csv"),
            delay,
        )
    }

    fn engine(
        fetcher: MockFetcher,
        storage: MockStorage,
    ) -> ScrapeEngine<MockFetcher, MockStorage, HeaderTableLocator> {
        engine_with_delay(fetcher, storage, Duration::ZERO)
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_follows_every_fetched_entry_but_not_missing_urls() {
        let fetcher = MockFetcher::default().with_page("http://t/ok", &results_page(1));
        let engine = engine_with_delay(fetcher, MockStorage::default(), Duration::from_millis(500));

        let start = tokio::time::Instant::now();
        let summary = engine
            .run(&[
                tournament("Down", Some("http://t/down")),
                tournament("Ok", Some("http://t/ok")),
                tournament("No Link", None),
            ])
            .await;

        assert_eq!(summary.successful, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_after_empty_results() {
        let fetcher = MockFetcher::default().with_page("http://t/empty", &results_page(0));
        let engine = engine_with_delay(fetcher, MockStorage::default(), Duration::from_millis(500));

        let start = tokio::time::Instant::now();
        let summary = engine
            .run(&[tournament("Empty", Some("http://t/empty"))])
            .await;

        assert_eq!(summary.outcomes[0].1, TournamentOutcome::Failed(FailureReason::NoRows));
        assert_eq!(start.elapsed(), Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_one_success_one_missing_url() {
        let storage = MockStorage::default();
        let fetcher = MockFetcher::default().with_page("http://t/1", &results_page(3));
        let engine = engine(fetcher, storage.clone());

        let summary = engine
            .run(&[
                tournament("Lake Fork Open!", Some("http://t/1")),
                tournament("No Link", None),
            ])
            .await;

        assert_eq!(summary.successful, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total_rows, 3);
        assert_eq!(
            summary.individual_files,
            vec!["tournament_results/2024_Lake_Fork_Open.csv"]
        );
        assert_eq!(summary.combined_file.as_deref(), Some("all.csv"));
        assert_eq!(storage.file_count().await, 2);

        let individual = storage
            .get_file("tournament_results/2024_Lake_Fork_Open.csv")
            .await
            .unwrap();
        assert_eq!(individual.lines().count(), 4);
        let combined = storage.get_file("all.csv").await.unwrap();
        assert_eq!(combined, individual);
    }

    #[tokio::test]
    async fn test_missing_table_does_not_stop_the_run() {
        let storage = MockStorage::default();
        let fetcher = MockFetcher::default()
            .with_page("http://t/1", "<table><tr><th>Rank</th></tr></table>")
            .with_page("http://t/2", &results_page(2));
        let calls = fetcher.calls.clone();
        let engine = engine(fetcher, storage.clone());

        let summary = engine
            .run(&[
                tournament("First", Some("http://t/1")),
                tournament("Second", Some("http://t/2")),
            ])
            .await;

        assert_eq!(
            summary.outcomes[0].1,
            TournamentOutcome::Failed(FailureReason::NoResultsTable)
        );
        assert!(summary.outcomes[1].1.is_success());
        assert!(storage.get_file("tournament_results/2024_First.csv").await.is_none());
        assert!(storage.get_file("tournament_results/2024_Second.csv").await.is_some());
        assert_eq!(*calls.lock().await, vec!["http://t/1", "http://t/2"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_and_empty_table() {
        let storage = MockStorage::default();
        let fetcher = MockFetcher::default().with_page("http://t/empty", &results_page(0));
        let engine = engine(fetcher, storage.clone());

        let summary = engine
            .run(&[
                tournament("Down", Some("http://t/down")),
                tournament("Empty", Some("http://t/empty")),
            ])
            .await;

        assert_eq!(summary.successful, 0);
        assert_eq!(summary.failed, 2);
        assert!(matches!(
            summary.outcomes[0].1,
            TournamentOutcome::Failed(FailureReason::Fetch(_))
        ));
        assert_eq!(
            summary.outcomes[1].1,
            TournamentOutcome::Failed(FailureReason::NoRows)
        );
        assert_eq!(summary.combined_file, None);
        assert_eq!(storage.file_count().await, 0);
    }
}
