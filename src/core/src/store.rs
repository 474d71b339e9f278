use crate::error::SkippedRecord;
use crate::league::{LeagueSettings, StandingRecord};
use crate::schedule::MatchRecord;
use crate::team::TeamRecord;
use serde::Serialize;
use std::convert::Infallible;

/// Everything the engine works on for one season snapshot.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dataset {
    pub settings: LeagueSettings,
    pub teams: Vec<TeamRecord>,
    pub standings: Vec<StandingRecord>,
    pub matches: Vec<MatchRecord>,
}

impl Dataset {
    pub fn team(&self, team_id: &str) -> Option<&TeamRecord> {
        self.teams.iter().find(|team| team.id == team_id)
    }

    pub fn standing(&self, team_id: &str) -> Option<&StandingRecord> {
        self.standings.iter().find(|standing| standing.team_id == team_id)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    /// Records dropped while decoding.
    pub skipped: Vec<SkippedRecord>,
}

/// Source of season data. The engine only ever sees what `load` returns.
pub trait RecordStore {
    type Error: std::error::Error;

    fn load(&self) -> Result<LoadedDataset, Self::Error>;
}

/// Store over a dataset that is already in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    dataset: Dataset,
}

impl MemoryStore {
    pub fn new(dataset: Dataset) -> Self {
        MemoryStore { dataset }
    }
}

impl RecordStore for MemoryStore {
    type Error = Infallible;

    fn load(&self) -> Result<LoadedDataset, Self::Error> {
        Ok(LoadedDataset {
            dataset: self.dataset.clone(),
            skipped: Vec::new(),
        })
    }
}
