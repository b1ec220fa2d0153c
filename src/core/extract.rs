use crate::core::{ResultRecord, TableLocator, TournamentDescriptor};
use crate::utils::error::{Result, ScrapeError};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Place, Angler, Fish, Weight (oz), Big Bag, Big Bass, Leader Bonus, Fantasy Points
pub const MIN_CELLS: usize = 8;

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::SelectorError {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Text of an element with every text node trimmed and concatenated.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect::<String>()
}

/// The first `<table>` whose `<th>` cells mention both "place" and "angler".
pub struct HeaderTableLocator {
    table: Selector,
    header: Selector,
}

impl HeaderTableLocator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: selector("table")?,
            header: selector("th")?,
        })
    }

    fn is_results_header(&self, table: ElementRef<'_>) -> bool {
        let headers: Vec<String> = table
            .select(&self.header)
            .map(|th| element_text(th).to_lowercase())
            .collect();

        headers.iter().any(|h| h.contains("place")) && headers.iter().any(|h| h.contains("angler"))
    }
}

impl TableLocator for HeaderTableLocator {
    fn locate<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        document
            .select(&self.table)
            .find(|table| self.is_results_header(*table))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    NoTable,
    Rows(Vec<ResultRecord>),
}

pub struct ResultsExtractor<L: TableLocator> {
    locator: L,
    row: Selector,
    cell: Selector,
    link: Selector,
    player_id: Regex,
}

impl<L: TableLocator> ResultsExtractor<L> {
    pub fn new(locator: L) -> Result<Self> {
        let player_id = Regex::new(r"playerId=(\d+)").map_err(|e| ScrapeError::ExtractionError {
            message: format!("player id pattern: {}", e),
        })?;

        Ok(Self {
            locator,
            row: selector("tr")?,
            cell: selector("td")?,
            link: selector("a")?,
            player_id,
        })
    }

    pub fn extract(&self, html: &str, tournament: &TournamentDescriptor) -> Extraction {
        let document = Html::parse_document(html);

        let Some(table) = self.locator.locate(&document) else {
            return Extraction::NoTable;
        };
        tracing::info!("    ✓ Found results table");

        let mut records = Vec::new();
        // 第一列是表頭
        for (index, row) in table.select(&self.row).skip(1).enumerate() {
            let cells: Vec<ElementRef<'_>> = row.select(&self.cell).collect();
            if cells.len() < MIN_CELLS {
                tracing::debug!("Skipping row {} with {} cells", index + 1, cells.len());
                continue;
            }

            match self.map_row(&cells, tournament) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!("    ⚠ Error parsing row {}: {}", index + 1, e),
            }
        }

        tracing::info!("    ✓ Extracted {} anglers", records.len());
        Extraction::Rows(records)
    }

    fn map_row(
        &self,
        cells: &[ElementRef<'_>],
        tournament: &TournamentDescriptor,
    ) -> Result<ResultRecord> {
        let text = |index: usize| -> Result<String> {
            cells
                .get(index)
                .map(|cell| element_text(*cell))
                .ok_or_else(|| ScrapeError::ExtractionError {
                    message: format!("missing cell {}", index),
                })
        };

        let angler_cell = cells.get(1).ok_or_else(|| ScrapeError::ExtractionError {
            message: "missing angler cell".to_string(),
        })?;
        let angler_link = angler_cell.select(&self.link).next();

        let angler = match angler_link {
            Some(link) => element_text(link),
            None => element_text(*angler_cell),
        };
        let angler_id = angler_link
            .and_then(|link| link.value().attr("href"))
            .and_then(|href| self.player_id.captures(href))
            .map(|caps| caps[1].to_string());

        Ok(ResultRecord {
            tournament: tournament.name.clone(),
            year: tournament.year.clone(),
            date: tournament.date.clone(),
            site: tournament.site.clone(),
            state: tournament.state.clone(),
            place: text(0)?,
            angler,
            angler_id,
            fish: text(2)?,
            weight_oz: text(3)?,
            big_bag: text(4)?,
            big_bass: text(5)?,
            leader_bonus: text(6)?,
            fantasy_points: text(7)?,
        })
    }
}
