use engine::{MalformedReason, SkippedRecord, StandingRecord};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingEntity {
    pub team_id: Option<String>,
    #[serde(default)]
    pub played: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_against: u32,
    #[serde(default)]
    pub points: u32,
}

impl StandingEntity {
    pub fn into_record(self, idx: usize) -> Result<StandingRecord, SkippedRecord> {
        let team_id = match self.team_id.filter(|id| !id.trim().is_empty()) {
            Some(team_id) => team_id,
            None => {
                return Err(SkippedRecord::new(
                    format!("standing#{}", idx),
                    MalformedReason::MissingTeamId,
                ));
            }
        };

        Ok(StandingRecord {
            team_id,
            played: self.played,
            wins: self.wins,
            draws: self.draws,
            losses: self.losses,
            goals_for: self.goals_for,
            goals_against: self.goals_against,
            points: self.points,
        })
    }
}
