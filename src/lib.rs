pub mod cli;
pub mod error;
pub mod models;
pub mod readers;
pub mod scrapers;
pub mod utils;
pub mod writers;

pub use error::{FirmsError, Result};
