mod error;
mod loaders;

pub use error::*;
pub use loaders::*;

use engine::{LoadedDataset, RecordStore};
use log::info;
use std::fs;
use std::path::PathBuf;

const STATIC_SEASON_JSON: &str = include_str!("../data/season.json");

#[derive(Debug, Clone)]
enum DataSource {
    Embedded,
    File(PathBuf),
    Inline(String),
}

/// Loads a season document into engine records.
#[derive(Debug, Clone)]
pub struct DatabaseLoader {
    source: DataSource,
}

impl DatabaseLoader {
    /// The season shipped with the binary.
    pub fn embedded() -> Self {
        DatabaseLoader {
            source: DataSource::Embedded,
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        DatabaseLoader {
            source: DataSource::File(path.into()),
        }
    }

    pub fn from_json(json: impl Into<String>) -> Self {
        DatabaseLoader {
            source: DataSource::Inline(json.into()),
        }
    }

    fn parse(json: &str) -> DatabaseResult<LoadedDataset> {
        let season: SeasonEntity = serde_json::from_str(json)?;

        let loaded = season.into_dataset();

        if loaded.dataset.teams.is_empty() {
            return Err(DatabaseError::Empty);
        }

        Ok(loaded)
    }
}

impl RecordStore for DatabaseLoader {
    type Error = DatabaseError;

    fn load(&self) -> Result<LoadedDataset, Self::Error> {
        match &self.source {
            DataSource::Embedded => Self::parse(STATIC_SEASON_JSON),
            DataSource::File(path) => {
                info!("loading season from {}", path.display());
                let content = fs::read_to_string(path)?;
                Self::parse(&content)
            }
            DataSource::Inline(json) => Self::parse(json),
        }
    }
}
