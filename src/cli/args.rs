use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::{DEFAULT_CITIES_URL, DEFAULT_CITY_COUNT, DEFAULT_FEED_URL};

#[derive(Parser)]
#[command(name = "firms-mapper")]
#[command(about = "NASA FIRMS active-fire feed fetcher and GeoJSON map renderer")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the active-fire feed and render detections as GeoJSON
    Fetch {
        #[arg(short, long, default_value = DEFAULT_FEED_URL, help = "CSV feed URL")]
        url: String,

        #[arg(
            short,
            long,
            help = "Output GeoJSON file path [default: output/firms-fires-{YYMMDD}.geojson]"
        )]
        output_file: Option<PathBuf>,

        #[arg(long, help = "Maximum number of detections to parse")]
        max_records: Option<usize>,

        #[arg(long, default_value = "false")]
        validate_only: bool,
    },

    /// Scrape the ranked city table and render city markers as GeoJSON
    Cities {
        #[arg(short, long, default_value_t = DEFAULT_CITY_COUNT, help = "Number of rows to scrape")]
        count: usize,

        #[arg(short, long, default_value = DEFAULT_CITIES_URL, help = "Ranking page URL")]
        url: String,

        #[arg(
            short,
            long,
            help = "Output GeoJSON file path [default: output/firms-cities-{YYMMDD}.geojson]"
        )]
        output_file: Option<PathBuf>,
    },

    /// Render detections and city markers in one GeoJSON collection
    Map {
        #[arg(long, default_value = DEFAULT_FEED_URL, help = "CSV feed URL")]
        feed_url: String,

        #[arg(long, default_value = "false", help = "Include scraped city markers")]
        cities: bool,

        #[arg(long, default_value_t = DEFAULT_CITY_COUNT, help = "Number of city rows to scrape")]
        city_count: usize,

        #[arg(long, help = "Maximum number of detections to parse")]
        max_records: Option<usize>,

        #[arg(
            short,
            long,
            help = "Output GeoJSON file path [default: output/firms-map-{YYMMDD}.geojson]"
        )]
        output_file: Option<PathBuf>,
    },
}
