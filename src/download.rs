use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::config::FetchConfig;
use crate::error::{FetchError, Result};

/// Response of a single GET: status plus the whole body.
#[derive(Debug)]
pub struct Fetched {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

fn build_client(config: &FetchConfig) -> Result<Client> {
    // The blocking client defaults to a 30s timeout; only apply one when asked.
    Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(FetchError::Client)
}

pub fn fetch(config: &FetchConfig) -> Result<Fetched> {
    log::info!("Fetching {}", config.url);

    let client = build_client(config)?;
    let response = client
        .get(&config.url)
        .send()
        .map_err(|source| FetchError::Request {
            url: config.url.clone(),
            source,
        })?;

    let status = response.status();
    log::debug!("{} answered {}", config.url, status);

    if !status.is_success() {
        if config.fail_on_http_error {
            return Err(FetchError::Status {
                url: config.url.clone(),
                status,
            });
        }
        log::warn!("Non-success status {} from {}, keeping body anyway", status, config.url);
    }

    let body = response.bytes().map_err(|source| FetchError::Body {
        url: config.url.clone(),
        source,
    })?;

    log::info!("Received {} bytes", body.len());
    Ok(Fetched {
        status,
        body: body.to_vec(),
    })
}
