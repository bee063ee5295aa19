use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use validator::Validate;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::models::Detection;
use crate::readers::FeedReader;
use crate::scrapers::CityScraper;
use crate::utils::filename::generate_default_geojson_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::GeoJsonWriter;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Fetch {
            url,
            output_file,
            max_records,
            validate_only,
        } => {
            println!("Fetching active-fire detections...");
            println!("Feed URL: {}", url);

            let progress = ProgressReporter::new_spinner("Downloading feed...", false);

            let mut reader = FeedReader::new(&url);
            if let Some(max) = max_records {
                reader = reader.with_max_records(max);
            }
            let detections = reader.fetch().await?;

            progress.finish_with_message(&format!("Fetched {} detections", detections.len()));

            let out_of_range = count_out_of_range(&detections);
            if out_of_range > 0 {
                println!(
                    "⚠️  {} detections have coordinates outside valid bounds",
                    out_of_range
                );
            }

            if validate_only {
                println!("Validation complete - no output file written");
                return Ok(());
            }

            let output_file =
                output_file.unwrap_or_else(|| generate_default_geojson_filename("fires"));

            let writer = GeoJsonWriter::new();
            let features = writer.detection_features(&detections);
            let collection = writer.collection(features);
            let summary = writer.write(collection, &output_file)?;

            println!("\n{}", summary.summary());
            println!("Fetch complete!");
        }

        Commands::Cities { count, url, output_file } => {
            println!("Scraping top {} cities...", count);
            println!("Ranking page: {}", url);

            let progress = ProgressReporter::new(count as u64, "Fetching detail pages...", false);

            let scraper = CityScraper::new().with_url(&url).with_count(count);
            let table = scraper.scrape(Some(&progress)).await?;

            progress.finish_with_message(&format!("Scraped {} rows", table.rows.len()));

            let with_coords = table.rows.iter().filter(|r| r.geo_point().is_some()).count();
            println!(
                "{} of {} rows carry coordinates",
                with_coords,
                table.rows.len()
            );

            let output_file =
                output_file.unwrap_or_else(|| generate_default_geojson_filename("cities"));

            let writer = GeoJsonWriter::new();
            let features = writer.city_features(&table);
            let collection = writer.collection(features);
            let summary = writer.write(collection, &output_file)?;

            println!("\n{}", summary.summary());
            println!("Scrape complete!");
        }

        Commands::Map {
            feed_url,
            cities,
            city_count,
            max_records,
            output_file,
        } => {
            println!("Rendering fire map...");
            println!("Feed URL: {}", feed_url);

            let progress = ProgressReporter::new_spinner("Downloading feed...", false);

            let mut reader = FeedReader::new(&feed_url);
            if let Some(max) = max_records {
                reader = reader.with_max_records(max);
            }
            let detections = reader.fetch().await?;

            progress.finish_with_message(&format!("Fetched {} detections", detections.len()));

            let writer = GeoJsonWriter::new();
            let mut features = writer.detection_features(&detections);

            if cities {
                println!("Scraping top {} cities for markers...", city_count);
                let city_progress =
                    ProgressReporter::new(city_count as u64, "Fetching detail pages...", false);

                let scraper = CityScraper::new().with_count(city_count);
                let table = scraper.scrape(Some(&city_progress)).await?;

                city_progress.finish_with_message(&format!("Scraped {} rows", table.rows.len()));
                features.extend(writer.city_features(&table));
            }

            let output_file =
                output_file.unwrap_or_else(|| generate_default_geojson_filename("map"));

            let collection = writer.collection(features);
            let summary = writer.write(collection, &output_file)?;

            println!("\n{}", summary.summary());
            println!("Map complete!");
        }
    }

    Ok(())
}

fn count_out_of_range(detections: &[Detection]) -> usize {
    detections.iter().filter(|d| d.validate().is_err()).count()
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_max_level(level).init();
        }
    }

    Ok(())
}
