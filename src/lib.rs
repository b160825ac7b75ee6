//! Downloads the CelesTrak space-weather CSV (or any single HTTP(S)
//! resource) and stores the response body verbatim in a local file.

pub mod config;
pub mod digest;
pub mod download;
pub mod error;
pub mod writer;

use std::path::PathBuf;

use chrono::{DateTime, Local};
use reqwest::StatusCode;

pub use config::FetchConfig;
pub use error::{FetchError, Result};

/// What a completed run fetched and wrote.
#[derive(Debug, Clone)]
pub struct FetchReport {
    pub url: String,
    pub output_path: PathBuf,
    pub status: StatusCode,
    pub bytes_written: usize,
    pub sha256: String,
    pub fetched_at: DateTime<Local>,
}

/// Fetches `config.url` and writes the body to `config.output_path`.
///
/// The destination is only opened once the whole body has been received, so
/// a network failure leaves any previous file untouched.
pub fn run(config: &FetchConfig) -> Result<FetchReport> {
    config.validate()?;

    let fetched = download::fetch(config)?;
    let fetched_at = Local::now();

    writer::write_artifact(&config.output_path, &fetched.body)?;
    let sha256 = digest::sha256_hex(&fetched.body);

    log::info!(
        "Wrote {} bytes to {:?} (sha256 {})",
        fetched.body.len(),
        config.output_path,
        sha256
    );

    Ok(FetchReport {
        url: config.url.clone(),
        output_path: config.output_path.clone(),
        status: fetched.status,
        bytes_written: fetched.body.len(),
        sha256,
        fetched_at,
    })
}
