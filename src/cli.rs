use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use spaceweather_fetch::config::{DEFAULT_OUTPUT, DEFAULT_URL};
use spaceweather_fetch::FetchConfig;

/// Download the CelesTrak space-weather CSV.
#[derive(Debug, Parser)]
#[command(name = "sw-fetch", version)]
#[command(about = "Download the space-weather CSV to a local file", long_about = None)]
pub struct Cli {
    /// URL to download.
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Destination file, overwritten if it exists.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Fail instead of saving the body when the status is not 2xx.
    #[arg(long)]
    pub fail_on_http_error: bool,

    /// Request timeout in seconds (none by default).
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Also write the log to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Debug-level logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            url: self.url.clone(),
            output_path: self.output.clone(),
            fail_on_http_error: self.fail_on_http_error,
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}
