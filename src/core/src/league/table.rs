use crate::error::{MalformedReason, SkippedRecord};
use crate::league::{TableZone, ZoneSettings};
use crate::schedule::MatchRecord;
use crate::team::TeamRecord;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRecord {
    pub team_id: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl StandingRecord {
    pub fn new(team_id: &str) -> Self {
        StandingRecord {
            team_id: String::from(team_id),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    /// Builds a consistent record: `played` and `points` are derived.
    pub fn from_totals(
        team_id: &str,
        wins: u32,
        draws: u32,
        losses: u32,
        goals_for: u32,
        goals_against: u32,
    ) -> Self {
        StandingRecord {
            team_id: String::from(team_id),
            played: wins.saturating_add(draws).saturating_add(losses),
            wins,
            draws,
            losses,
            goals_for,
            goals_against,
            points: wins
                .saturating_mul(POINTS_FOR_WIN)
                .saturating_add(draws.saturating_mul(POINTS_FOR_DRAW)),
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    /// Widened so corrupted counters cannot overflow the check itself.
    pub fn expected_points(&self) -> u64 {
        self.wins as u64 * POINTS_FOR_WIN as u64 + self.draws as u64 * POINTS_FOR_DRAW as u64
    }

    pub fn expected_played(&self) -> u64 {
        self.wins as u64 + self.draws as u64 + self.losses as u64
    }

    fn add_result(&mut self, scored: u32, conceded: u32) {
        self.played = self.played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.wins = self.wins.saturating_add(1);
                self.points = self.points.saturating_add(POINTS_FOR_WIN);
            }
            Ordering::Equal => {
                self.draws = self.draws.saturating_add(1);
                self.points = self.points.saturating_add(POINTS_FOR_DRAW);
            }
            Ordering::Less => {
                self.losses = self.losses.saturating_add(1);
            }
        }
    }
}

/// Points, then goal difference, then goals scored. Anything still level
/// keeps its input order.
pub fn compare_standings(a: &StandingRecord, b: &StandingRecord) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

pub fn rank(records: &[StandingRecord]) -> Vec<StandingRecord> {
    let mut ranked = records.to_vec();

    // slice::sort_by is stable
    ranked.sort_by(compare_standings);

    ranked
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub position: usize,
    pub zone: TableZone,
    pub standing: StandingRecord,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LeagueTable {
    pub rows: Vec<TableRow>,
    pub skipped: Vec<SkippedRecord>,
}

impl LeagueTable {
    pub fn new(records: &[StandingRecord], zones: &ZoneSettings) -> Self {
        let mut skipped = Vec::new();
        let mut seen = HashSet::new();

        let valid: Vec<StandingRecord> = records
            .iter()
            .enumerate()
            .filter_map(|(idx, record)| {
                if record.team_id.trim().is_empty() {
                    skipped.push(SkippedRecord::new(
                        format!("standing#{}", idx),
                        MalformedReason::MissingTeamId,
                    ));
                    return None;
                }

                if !seen.insert(record.team_id.as_str()) {
                    skipped.push(SkippedRecord::new(
                        record.team_id.clone(),
                        MalformedReason::DuplicateId,
                    ));
                    return None;
                }

                Some(record.clone())
            })
            .collect();

        if !skipped.is_empty() {
            warn!("league table: {} standing records skipped", skipped.len());
        }

        let rows = rank(&valid)
            .into_iter()
            .enumerate()
            .map(|(idx, standing)| TableRow {
                position: idx + 1,
                zone: zones.zone_for(idx + 1),
                standing,
            })
            .collect();

        LeagueTable { rows, skipped }
    }

    /// Rebuilds the whole table from completed matches. Every team gets a row,
    /// including teams that have not played yet.
    pub fn from_results(
        teams: &[TeamRecord],
        matches: &[MatchRecord],
        zones: &ZoneSettings,
    ) -> Self {
        let mut standings: Vec<StandingRecord> =
            teams.iter().map(|team| StandingRecord::new(&team.id)).collect();

        let index: HashMap<&str, usize> = teams
            .iter()
            .enumerate()
            .map(|(idx, team)| (team.id.as_str(), idx))
            .collect();

        let mut skipped = Vec::new();

        for item in matches.iter().filter(|m| m.is_completed()) {
            let score = match item.score {
                Some(score) => score,
                None => {
                    skipped.push(SkippedRecord::new(item.id.clone(), MalformedReason::MissingScore));
                    continue;
                }
            };

            let (home, away) = match (
                index.get(item.home_team_id.as_str()),
                index.get(item.away_team_id.as_str()),
            ) {
                (Some(home), Some(away)) => (*home, *away),
                _ => {
                    skipped.push(SkippedRecord::new(item.id.clone(), MalformedReason::UnknownTeam));
                    continue;
                }
            };

            standings[home].add_result(score.home, score.away);
            standings[away].add_result(score.away, score.home);
        }

        debug!(
            "league table rebuilt from {} matches for {} teams",
            matches.len(),
            teams.len()
        );

        let mut table = LeagueTable::new(&standings, zones);
        table.skipped.extend(skipped);
        table
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn position_of(&self, team_id: &str) -> Option<usize> {
        self.rows
            .iter()
            .find(|row| row.standing.team_id == team_id)
            .map(|row| row.position)
    }

    pub fn standing(&self, team_id: &str) -> Option<&StandingRecord> {
        self.rows
            .iter()
            .map(|row| &row.standing)
            .find(|standing| standing.team_id == team_id)
    }

    pub fn zone(&self, zone: TableZone) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(move |row| row.zone == zone)
    }
}
