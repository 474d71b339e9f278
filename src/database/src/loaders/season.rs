use crate::loaders::{MatchEntity, StandingEntity, TeamEntity};
use engine::{
    Dataset, LeagueSettings, LoadedDataset, MalformedReason, SkippedRecord, validate_standings,
};
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonEntity {
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub settings: LeagueSettings,
    #[serde(default)]
    pub teams: Vec<TeamEntity>,
    #[serde(default)]
    pub standings: Vec<StandingEntity>,
    #[serde(default)]
    pub matches: Vec<MatchEntity>,
}

impl SeasonEntity {
    /// Converts decoded documents into engine records. Anything malformed is
    /// reported in `skipped` instead of failing the whole season.
    pub fn into_dataset(self) -> LoadedDataset {
        let mut skipped = Vec::new();

        let mut team_ids = HashSet::new();
        let mut teams = Vec::with_capacity(self.teams.len());

        for (idx, entity) in self.teams.into_iter().enumerate() {
            match entity.into_record(idx) {
                Ok(team) if !team_ids.insert(team.id.clone()) => {
                    skipped.push(SkippedRecord::new(team.id, MalformedReason::DuplicateId));
                }
                Ok(team) => teams.push(team),
                Err(skip) => skipped.push(skip),
            }
        }

        let mut standing_ids = HashSet::new();
        let mut standings = Vec::with_capacity(self.standings.len());

        for (idx, entity) in self.standings.into_iter().enumerate() {
            match entity.into_record(idx) {
                Ok(standing) if !team_ids.contains(&standing.team_id) => {
                    skipped.push(SkippedRecord::new(standing.team_id, MalformedReason::UnknownTeam));
                }
                Ok(standing) if !standing_ids.insert(standing.team_id.clone()) => {
                    skipped.push(SkippedRecord::new(standing.team_id, MalformedReason::DuplicateId));
                }
                Ok(standing) => standings.push(standing),
                Err(skip) => skipped.push(skip),
            }
        }

        for (team_id, violations) in validate_standings(&standings) {
            warn!("standing for {} is inconsistent: {:?}", team_id, violations);
        }

        let mut match_ids = HashSet::new();
        let mut matches = Vec::with_capacity(self.matches.len());

        for (idx, entity) in self.matches.into_iter().enumerate() {
            match entity.into_record(idx) {
                Ok(item)
                    if !team_ids.contains(&item.home_team_id)
                        || !team_ids.contains(&item.away_team_id) =>
                {
                    skipped.push(SkippedRecord::new(item.id, MalformedReason::UnknownTeam));
                }
                Ok(item) if !match_ids.insert(item.id.clone()) => {
                    skipped.push(SkippedRecord::new(item.id, MalformedReason::DuplicateId));
                }
                Ok(item) => matches.push(item),
                Err(skip) => skipped.push(skip),
            }
        }

        for skip in &skipped {
            warn!("skipped record {}: {}", skip.id, skip.reason);
        }

        debug!(
            "season {}: {} teams, {} standings, {} matches",
            self.season.as_deref().unwrap_or("-"),
            teams.len(),
            standings.len(),
            matches.len()
        );

        LoadedDataset {
            dataset: Dataset {
                settings: self.settings,
                teams,
                standings,
                matches,
            },
            skipped,
        }
    }
}
