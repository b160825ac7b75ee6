use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;

use crate::error::{FetchError, Result};

pub const DEFAULT_URL: &str = "https://celestrak.org/SpaceData/SW-Last5Years.csv";
pub const DEFAULT_OUTPUT: &str = "SW-Last5Years.csv";

/// Where to fetch from, where to write to, and the two opt-in behaviours.
///
/// The default reproduces the plain download: CelesTrak URL, file in the
/// current directory, body written whatever the status, no timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub url: String,
    pub output_path: PathBuf,
    pub fail_on_http_error: bool,
    pub timeout: Option<Duration>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            fail_on_http_error: false,
            timeout: None,
        }
    }
}

impl FetchConfig {
    pub fn new(url: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.url).map_err(|e| FetchError::InvalidUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl {
                url: self.url.clone(),
                reason: format!("unsupported scheme {:?}", parsed.scheme()),
            });
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(FetchError::EmptyOutputPath);
        }

        Ok(())
    }
}
