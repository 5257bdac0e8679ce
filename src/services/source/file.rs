use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::RecordStore;
use crate::models::event::RawEventRow;

/// Rows exported to a local JSON file, for offline runs
pub struct JsonFileStore {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RowFile {
    Bare(Vec<RawEventRow>),
    Page { records: Vec<RawEventRow> },
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordStore for JsonFileStore {
    fn list_rows(&self) -> Result<Vec<RawEventRow>> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read rows from {:?}", self.path))?;
        let rows: RowFile = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid row JSON in {:?}", self.path))?;

        Ok(match rows {
            RowFile::Bare(rows) => rows,
            RowFile::Page { records } => records,
        })
    }
}
