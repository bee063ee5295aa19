pub mod city_scraper;

pub use city_scraper::CityScraper;
