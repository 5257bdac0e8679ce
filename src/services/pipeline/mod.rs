//! End-to-end event listing.
//!
//! Events are listed once from the store, classified, and every colorizable
//! event goes through logo acquisition, palette extraction, the pastel
//! transform and the override table, one event at a time. A failure for one
//! event only drops that event from the colorized list; a store failure
//! aborts the whole run.

use anyhow::Result;
use serde::Serialize;
use thiserror::Error;

use crate::models::event::{Event, EventWithColors};
use crate::services::classification::{classify, filter_recent};
use crate::services::config::AppConfig;
use crate::services::logo::{fetch_logo_pixels, ImageError, LogoSource};
use crate::services::overrides::OverrideTable;
use crate::services::palette::{extract_palette, to_pastel, PaletteError, PaletteOptions};
use crate::services::source::{EventSourceAdapter, RecordStore};

/// Why an event was left out of the colorized list
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error(transparent)]
    Image(#[from] ImageError),
    #[error("palette extraction failed: {0}")]
    Palette(#[from] PaletteError),
    #[error("logo has no usable colors")]
    NoColors,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListings {
    pub upcoming: Vec<Event>,
    pub colorized: Vec<EventWithColors>,
    pub recent: Vec<EventWithColors>,
}

pub struct EventPipeline<S, L> {
    source: EventSourceAdapter<S>,
    logos: L,
    overrides: OverrideTable,
    palette: PaletteOptions,
    default_logo_url: String,
}

impl<S: RecordStore, L: LogoSource> EventPipeline<S, L> {
    pub fn new(
        source: EventSourceAdapter<S>,
        logos: L,
        overrides: OverrideTable,
        palette: PaletteOptions,
        default_logo_url: impl Into<String>,
    ) -> Self {
        Self {
            source,
            logos,
            overrides,
            palette,
            default_logo_url: default_logo_url.into(),
        }
    }

    pub fn from_config(store: S, logos: L, config: &AppConfig) -> Self {
        Self::new(
            EventSourceAdapter::new(store, config.events.default_photo.clone()),
            logos,
            config.override_table(),
            config.palette.to_options(),
            config.images.default_logo_url.clone(),
        )
    }

    /// Derive tag and background colors for one event
    pub fn colorize_event(&self, event: &Event) -> Result<EventWithColors, SkipReason> {
        let image = fetch_logo_pixels(&self.logos, event.logo.as_deref(), &self.default_logo_url)?;
        let colors = extract_palette(&image.pixels, image.width, image.height, &self.palette)?;
        let primary = colors.first().ok_or(SkipReason::NoColors)?;

        let colored = EventWithColors {
            event: event.clone(),
            tag_color: primary.hex.clone(),
            logo_preview_background_color: to_pastel(primary).hex,
        };
        Ok(self.overrides.apply(colored))
    }

    /// Colorize each event in order, dropping the ones that fail
    pub fn colorize_all(&self, events: &[Event]) -> Vec<EventWithColors> {
        events
            .iter()
            .filter_map(|event| match self.colorize_event(event) {
                Ok(colored) => Some(colored),
                Err(reason) => {
                    log::warn!("Skipping colors for event '{}': {}", event.name, reason);
                    None
                }
            })
            .collect()
    }

    pub fn list_upcoming_events(&self) -> Result<Vec<Event>> {
        Ok(classify(self.source.list_events()?).upcoming)
    }

    pub fn list_colorized_events(&self) -> Result<Vec<EventWithColors>> {
        let classified = classify(self.source.list_events()?);
        Ok(self.colorize_all(&classified.colorizable))
    }

    pub fn list_recent_events(&self) -> Result<Vec<EventWithColors>> {
        Ok(filter_recent(&self.list_colorized_events()?))
    }

    /// All three listings from a single store read
    pub fn run(&self) -> Result<EventListings> {
        let classified = classify(self.source.list_events()?);
        let colorized = self.colorize_all(&classified.colorizable);
        let recent = filter_recent(&colorized);

        log::info!(
            "Listed {} upcoming, {} of {} colorized, {} recent",
            classified.upcoming.len(),
            colorized.len(),
            classified.colorizable.len(),
            recent.len()
        );

        Ok(EventListings {
            upcoming: classified.upcoming,
            colorized,
            recent,
        })
    }
}
