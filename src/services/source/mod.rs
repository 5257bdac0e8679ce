// Event source
// Lists raw rows from the tabular store and normalizes them into Events

pub mod airtable;
pub mod file;

pub use airtable::AirtableStore;
pub use file::JsonFileStore;

use anyhow::{Context, Result};

use crate::models::event::{Event, EventStatus, RawEventRow};
use crate::utils::date::format_date;

/// A tabular store that can list every event row
#[cfg_attr(test, mockall::automock)]
pub trait RecordStore {
    fn list_rows(&self) -> Result<Vec<RawEventRow>>;
}

pub struct EventSourceAdapter<S> {
    store: S,
    default_photo: String,
}

impl<S: RecordStore> EventSourceAdapter<S> {
    pub fn new(store: S, default_photo: impl Into<String>) -> Self {
        Self {
            store,
            default_photo: default_photo.into(),
        }
    }

    /// List and normalize every row. A store failure is fatal.
    pub fn list_events(&self) -> Result<Vec<Event>> {
        let rows = self
            .store
            .list_rows()
            .context("Failed to list event rows")?;

        log::info!("Loaded {} event rows", rows.len());
        Ok(rows.into_iter().map(|row| self.to_event(row)).collect())
    }

    pub fn to_event(&self, row: RawEventRow) -> Event {
        let fields = row.fields;
        let photos = parse_photos(&row.id, fields.photos.as_deref(), &self.default_photo);

        Event {
            id: row.id,
            name: fields.name.unwrap_or_default(),
            status: EventStatus::from(fields.status.unwrap_or_default()),
            description: fields.description,
            location: fields.location,
            start_date: format_date(fields.start_date.as_deref()),
            end_date: format_date(fields.end_date.as_deref()),
            logo: fields.logo,
            photos,
            photocreds: fields.photo_creds,
            website: fields.website,
            github_link: fields.github_link,
        }
    }
}

/// Parse the JSON-encoded photo list, falling back to `[default_photo]`.
///
/// Absent, blank, malformed, non-list and empty-list values all fall back;
/// malformed JSON is logged and swallowed.
pub fn parse_photos(record_id: &str, raw: Option<&str>, default_photo: &str) -> Vec<String> {
    let fallback = || vec![default_photo.to_string()];

    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return fallback();
    };

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(photos) if !photos.is_empty() => photos,
        Ok(_) => fallback(),
        Err(err) => {
            log::warn!("Invalid Photos field on record {}: {}", record_id, err);
            fallback()
        }
    }
}
