use std::collections::BTreeMap;
use std::io::Read;

use crate::error::{FirmsError, Result};
use crate::models::Detection;
use crate::utils::constants::{
    FEED_CONFIDENCE_COLUMN, FEED_DATE_COLUMN, FEED_LATITUDE_COLUMN, FEED_LONGITUDE_COLUMN,
    FEED_TIME_COLUMN,
};

/// Downloads the active-fire CSV feed and parses it into detection records.
///
/// The download blocks the flow it runs on; there is no retry and no
/// caching. Rows are parsed in feed order.
pub struct FeedReader {
    url: String,
    max_records: Option<usize>,
}

impl FeedReader {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            max_records: None,
        }
    }

    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = Some(max);
        self
    }

    /// Fetch the feed and parse every row.
    pub async fn fetch(&self) -> Result<Vec<Detection>> {
        tracing::debug!(url = %self.url, "downloading detection feed");
        let body = reqwest::get(&self.url)
            .await?
            .error_for_status()?
            .text()
            .await?;
        tracing::debug!(bytes = body.len(), "feed downloaded");

        self.parse(body.as_bytes())
    }

    /// Parse detection rows from CSV bytes.
    ///
    /// Latitude and longitude are required and must parse as floats; the
    /// acquisition date/time and confidence columns default to empty when
    /// absent. All other columns pass through untouched.
    pub fn parse<R: Read>(&self, reader: R) -> Result<Vec<Detection>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut detections = Vec::new();

        for record_result in csv_reader.records() {
            if let Some(max) = self.max_records {
                if detections.len() >= max {
                    break;
                }
            }

            let record = record_result?;
            detections.push(Self::parse_record(&headers, &record)?);
        }

        tracing::info!(count = detections.len(), "parsed detection rows");
        Ok(detections)
    }

    fn parse_record(headers: &csv::StringRecord, record: &csv::StringRecord) -> Result<Detection> {
        let mut latitude = None;
        let mut longitude = None;
        let mut acq_date = String::new();
        let mut acq_time = String::new();
        let mut confidence = String::new();
        let mut extras = BTreeMap::new();

        for (header, field) in headers.iter().zip(record.iter()) {
            match header {
                FEED_LATITUDE_COLUMN => latitude = Some(Self::parse_float(header, field)?),
                FEED_LONGITUDE_COLUMN => longitude = Some(Self::parse_float(header, field)?),
                FEED_DATE_COLUMN => acq_date = field.to_string(),
                FEED_TIME_COLUMN => acq_time = field.to_string(),
                FEED_CONFIDENCE_COLUMN => confidence = field.to_string(),
                _ => {
                    extras.insert(header.to_string(), field.to_string());
                }
            }
        }

        let latitude = latitude.ok_or_else(|| {
            FirmsError::MissingData(format!("feed has no '{}' column", FEED_LATITUDE_COLUMN))
        })?;
        let longitude = longitude.ok_or_else(|| {
            FirmsError::MissingData(format!("feed has no '{}' column", FEED_LONGITUDE_COLUMN))
        })?;

        Ok(Detection::new(
            latitude, longitude, acq_date, acq_time, confidence, extras,
        ))
    }

    fn parse_float(header: &str, field: &str) -> Result<f64> {
        field.parse::<f64>().map_err(|_| {
            FirmsError::InvalidFormat(format!("invalid {} value: '{}'", header, field))
        })
    }
}
