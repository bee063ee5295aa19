use scraper::{Html, Selector};

use crate::error::{FirmsError, Result};
use crate::models::{CityRow, CityTable};
use crate::utils::constants::{DEFAULT_CITIES_URL, DEFAULT_CITY_COUNT, WIKIPEDIA_BASE_URL};
use crate::utils::coordinates::coord_to_decimal;
use crate::utils::progress::ProgressReporter;

/// Scrapes the ranked city table and enriches each row with decimal
/// coordinates pulled from its linked detail page.
///
/// Detail pages are fetched one row at a time, in table order. Any network
/// failure, missing table, or missing coordinate span ends the scrape with
/// an error; there is no retry and no partial result.
pub struct CityScraper {
    url: String,
    base_url: String,
    count: usize,
}

impl CityScraper {
    pub fn new() -> Self {
        Self {
            url: DEFAULT_CITIES_URL.to_string(),
            base_url: WIKIPEDIA_BASE_URL.to_string(),
            count: DEFAULT_CITY_COUNT,
        }
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Fetch the ranking page and the linked detail page of each row.
    pub async fn scrape(&self, progress: Option<&ProgressReporter>) -> Result<CityTable> {
        tracing::debug!(url = %self.url, count = self.count, "fetching city ranking page");
        let body = fetch_text(&self.url).await?;
        let (headers, raw_rows) = parse_ranking_page(&body, self.count)?;

        let mut rows = Vec::with_capacity(raw_rows.len());
        for (i, (cells, link)) in raw_rows.into_iter().enumerate() {
            let (latitude, longitude) = match &link {
                Some(href) => {
                    let detail_url = format!("{}{}", self.base_url, href);
                    tracing::debug!(url = %detail_url, "fetching detail page");
                    let detail_body = fetch_text(&detail_url).await?;
                    let (lat, lon) = extract_coordinates(&detail_body)?;
                    (Some(lat), Some(lon))
                }
                // No anchor: skip the detail fetch and leave the row
                // explicitly without coordinates.
                None => {
                    tracing::warn!(row = i + 1, "row has no link, skipping detail fetch");
                    (None, None)
                }
            };

            rows.push(CityRow {
                row_number: i + 1,
                cells,
                link,
                latitude,
                longitude,
            });

            if let Some(p) = progress {
                p.increment(1);
            }
        }

        Ok(CityTable::new(headers, rows))
    }
}

impl Default for CityScraper {
    fn default() -> Self {
        Self::new()
    }
}

async fn fetch_text(url: &str) -> Result<String> {
    Ok(reqwest::get(url)
        .await?
        .error_for_status()?
        .text()
        .await?)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| FirmsError::Selector(format!("'{}': {}", css, e)))
}

fn element_text(element: scraper::ElementRef<'_>) -> String {
    element.text().collect::<Vec<_>>().join("").trim().to_string()
}

/// Extract the header row and the first `count` data rows from the ranked
/// table. Each data row yields its cell text and the first anchor's target,
/// if any.
pub fn parse_ranking_page(
    html: &str,
    count: usize,
) -> Result<(Vec<String>, Vec<(Vec<String>, Option<String>)>)> {
    let document = Html::parse_document(html);

    let table_sel = selector("table.wikitable.sortable")?;
    let table = document
        .select(&table_sel)
        .next()
        .ok_or_else(|| FirmsError::MissingElement("table.wikitable.sortable".to_string()))?;

    let row_sel = selector("tr")?;
    let header_sel = selector("th")?;
    let cell_sel = selector("td")?;
    let anchor_sel = selector("a")?;

    let mut row_iter = table.select(&row_sel);

    let header_row = row_iter
        .next()
        .ok_or_else(|| FirmsError::MissingElement("table header row".to_string()))?;
    let headers: Vec<String> = header_row.select(&header_sel).map(element_text).collect();

    let rows = row_iter
        .take(count)
        .map(|row| {
            let cells: Vec<String> = row.select(&cell_sel).map(element_text).collect();
            let link = row
                .select(&anchor_sel)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(str::to_string);
            (cells, link)
        })
        .collect();

    Ok((headers, rows))
}

/// Pull the labeled latitude and longitude spans from a detail page and
/// convert each to decimal degrees.
pub fn extract_coordinates(html: &str) -> Result<(f64, f64)> {
    let document = Html::parse_document(html);

    let mut values = [0.0; 2];
    for (i, class) in ["latitude", "longitude"].iter().enumerate() {
        let sel = selector(&format!("span.{}", class))?;
        let span = document
            .select(&sel)
            .next()
            .ok_or_else(|| FirmsError::MissingElement(format!("span.{}", class)))?;
        values[i] = coord_to_decimal(&element_text(span));
    }

    Ok((values[0], values[1]))
}
