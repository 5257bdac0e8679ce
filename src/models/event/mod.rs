// Event module
// Event records as listed by the tabular source and as handed to the rendering layer

use serde::{Deserialize, Serialize};

/// Lifecycle status of an event.
///
/// Statuses other than the three known ones are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventStatus {
    Upcoming,
    Active,
    Complete,
    Other(String),
}

impl EventStatus {
    pub fn as_str(&self) -> &str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Active => "Active",
            EventStatus::Complete => "Complete",
            EventStatus::Other(value) => value,
        }
    }
}

impl From<&str> for EventStatus {
    fn from(value: &str) -> Self {
        match value {
            "Upcoming" => EventStatus::Upcoming,
            "Active" => EventStatus::Active,
            "Complete" => EventStatus::Complete,
            other => EventStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for EventStatus {
    fn from(value: String) -> Self {
        EventStatus::from(value.as_str())
    }
}

impl From<EventStatus> for String {
    fn from(status: EventStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical event record built from one source row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub status: EventStatus,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub logo: Option<String>,
    /// Never empty; the adapter substitutes a default photo.
    pub photos: Vec<String>,
    pub photocreds: Option<String>,
    pub website: Option<String>,
    pub github_link: Option<String>,
}

impl Event {
    /// Create an event with the required fields and a single photo
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        status: EventStatus,
        photo: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            description: None,
            location: None,
            start_date: String::new(),
            end_date: String::new(),
            logo: None,
            photos: vec![photo.into()],
            photocreds: None,
            website: None,
            github_link: None,
        }
    }

    /// Set the logo URL
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }
}

/// An event plus the colors derived from its logo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWithColors {
    #[serde(flatten)]
    pub event: Event,
    /// Hex of the most intense extracted color.
    pub tag_color: String,
    /// Pastel variant of the most intense color, unless overridden by name.
    pub logo_preview_background_color: String,
}

/// One record as returned by the tabular store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEventRow {
    pub id: String,
    #[serde(default)]
    pub fields: RawEventFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEventFields {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    #[serde(rename = "Start Date", default)]
    pub start_date: Option<String>,
    #[serde(rename = "End Date", default)]
    pub end_date: Option<String>,
    #[serde(rename = "Logo", default)]
    pub logo: Option<String>,
    /// JSON-encoded array of photo URLs
    #[serde(rename = "Photos", default)]
    pub photos: Option<String>,
    #[serde(rename = "Photo Creds", default)]
    pub photo_creds: Option<String>,
    #[serde(rename = "Website", default)]
    pub website: Option<String>,
    #[serde(rename = "GitHub Link", default)]
    pub github_link: Option<String>,
}
