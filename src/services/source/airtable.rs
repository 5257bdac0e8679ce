use std::collections::HashSet;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;

use super::RecordStore;
use crate::models::event::RawEventRow;
use crate::services::config::SourceConfig;

const PAGE_SIZE: usize = 100;
const MAX_PAGES: usize = 500;

#[derive(Debug, Deserialize)]
struct ListPage {
    #[serde(default)]
    records: Vec<RawEventRow>,
    #[serde(default)]
    offset: Option<String>,
}

/// Airtable-style REST table, paged with an `offset` cursor
pub struct AirtableStore {
    client: Client,
    base_url: String,
    base_id: String,
    table: String,
    view: Option<String>,
    api_key: String,
}

impl AirtableStore {
    pub fn new(config: &SourceConfig, api_key: impl Into<String>) -> Result<Self> {
        if config.base_id.trim().is_empty() {
            return Err(anyhow!("source.base_id must be configured"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .context("Failed to build record store HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            base_id: config.base_id.clone(),
            table: config.table.clone(),
            view: config.view.clone(),
            api_key: api_key.into(),
        })
    }

    fn page_url(&self, offset: Option<&str>) -> String {
        let mut url = format!(
            "{}/{}/{}?pageSize={}",
            self.base_url,
            urlencoding::encode(&self.base_id),
            urlencoding::encode(&self.table),
            PAGE_SIZE
        );
        if let Some(view) = &self.view {
            url.push_str("&view=");
            url.push_str(&urlencoding::encode(view));
        }
        if let Some(offset) = offset {
            url.push_str("&offset=");
            url.push_str(&urlencoding::encode(offset));
        }
        url
    }

    fn fetch_page(&self, offset: Option<&str>) -> Result<ListPage> {
        let response = self
            .client
            .get(self.page_url(offset))
            .bearer_auth(&self.api_key)
            .send()
            .context("Network error while listing records")?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!("Record listing failed with HTTP status {}", status));
        }

        let body = response
            .text()
            .context("Failed to read record listing response")?;
        parse_page(&body)
    }
}

impl RecordStore for AirtableStore {
    fn list_rows(&self) -> Result<Vec<RawEventRow>> {
        let mut rows = Vec::new();
        let mut offset: Option<String> = None;
        let mut seen_cursors = HashSet::new();

        for page_number in 1..=MAX_PAGES {
            let page = self
                .fetch_page(offset.as_deref())
                .with_context(|| format!("Failed to fetch record page {}", page_number))?;

            log::debug!(
                "Record page {} returned {} rows",
                page_number,
                page.records.len()
            );
            rows.extend(page.records);

            match page.offset {
                None => return Ok(rows),
                Some(next) => {
                    if !seen_cursors.insert(next.clone()) {
                        return Err(anyhow!(
                            "Record listing repeated page cursor '{}' after page {}",
                            next,
                            page_number
                        ));
                    }
                    offset = Some(next);
                }
            }
        }

        Err(anyhow!("Record listing exceeded {} pages", MAX_PAGES))
    }
}

fn parse_page(body: &str) -> Result<ListPage> {
    serde_json::from_str(body).context("Record listing response is not valid JSON")
}
