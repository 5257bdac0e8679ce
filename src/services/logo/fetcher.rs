use std::io::Read;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;

use super::{ImageFetchError, LogoSource};

/// Downloads logo images over HTTP.
///
/// Single attempt per URL with a bounded timeout and a response size cap.
pub struct HttpLogoFetcher {
    client: Client,
    max_response_bytes: usize,
}

impl HttpLogoFetcher {
    pub fn new(timeout: Duration, max_response_bytes: usize) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build logo fetch HTTP client")?;

        Ok(Self {
            client,
            max_response_bytes,
        })
    }
}

impl LogoSource for HttpLogoFetcher {
    fn fetch_logo(&self, url: &str) -> Result<Vec<u8>, ImageFetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| ImageFetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageFetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if let Some(content_length) = response.content_length() {
            if content_length as usize > self.max_response_bytes {
                return Err(ImageFetchError::TooLarge {
                    url: url.to_string(),
                    size: content_length as usize,
                    limit: self.max_response_bytes,
                });
            }
        }

        // Chunked responses carry no length, so never read past the cap
        let mut bytes = Vec::new();
        response
            .take(self.max_response_bytes as u64 + 1)
            .read_to_end(&mut bytes)
            .map_err(|source| ImageFetchError::Body {
                url: url.to_string(),
                source,
            })?;

        if bytes.len() > self.max_response_bytes {
            return Err(ImageFetchError::TooLarge {
                url: url.to_string(),
                size: bytes.len(),
                limit: self.max_response_bytes,
            });
        }

        log::debug!("Fetched {} bytes of logo data from {}", bytes.len(), url);
        Ok(bytes)
    }
}
