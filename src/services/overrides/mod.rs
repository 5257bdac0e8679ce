//! Manual background-color overrides keyed by event name.
//!
//! Some logos produce poor automatic backgrounds. The table below is
//! maintenance data: names in the force-white set always get `#FFFFFF`,
//! otherwise a name in the color map gets its fixed hex. The force-white
//! set is always consulted first. `tag_color` is never touched.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::event::EventWithColors;

pub const WHITE: &str = "#FFFFFF";

pub const DEFAULT_FORCE_WHITE: &[&str] = &[
    "Horizon",
    "Halo",
    "Alpine",
    "Harvest",
    "LoneStar",
    "Think Like a Programmer",
];

pub const DEFAULT_COLOR_OVERRIDES: &[(&str, &str)] = &[
    ("Luna", "#c8a2e0"),
    ("Spark", "#eadfff"),
    ("Ascend", "#2B028B"),
    ("Blossom", "#FFD3E0"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideTable {
    force_white: BTreeSet<String>,
    colors: BTreeMap<String, String>,
}

impl Default for OverrideTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_FORCE_WHITE.iter().map(|name| name.to_string()),
            DEFAULT_COLOR_OVERRIDES
                .iter()
                .map(|(name, hex)| (name.to_string(), hex.to_string())),
        )
    }
}

impl OverrideTable {
    pub fn new(
        force_white: impl IntoIterator<Item = String>,
        colors: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            force_white: force_white.into_iter().collect(),
            colors: colors.into_iter().collect(),
        }
    }

    /// A table that never overrides anything
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn is_forced_white(&self, name: &str) -> bool {
        self.force_white.contains(name)
    }

    pub fn color_for(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// Background override for `name`, if any
    pub fn background_for(&self, name: &str) -> Option<&str> {
        if self.is_forced_white(name) {
            return Some(WHITE);
        }
        self.color_for(name)
    }

    pub fn apply(&self, mut event: EventWithColors) -> EventWithColors {
        if let Some(hex) = self.background_for(&event.event.name) {
            log::debug!(
                "Overriding background for '{}': {} -> {}",
                event.event.name,
                event.logo_preview_background_color,
                hex
            );
            event.logo_preview_background_color = hex.to_string();
        }
        event
    }
}
