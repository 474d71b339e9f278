use crate::schedule::{MatchRecord, MatchStatus, compare_kickoff};
use chrono::{Duration, NaiveDateTime};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Home,
    Away,
}

#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub team: Option<String>,
    /// Only meaningful together with `team`.
    pub role: Option<TeamRole>,
}

impl MatchFilter {
    pub fn team(mut self, team_id: &str) -> Self {
        self.team = Some(String::from(team_id));
        self
    }

    pub fn role(mut self, role: TeamRole) -> Self {
        self.role = Some(role);
        self
    }

    fn matches(&self, item: &MatchRecord) -> bool {
        let Some(team) = self.team.as_deref() else {
            return true;
        };

        match self.role {
            Some(TeamRole::Home) => item.home_team_id == team,
            Some(TeamRole::Away) => item.away_team_id == team,
            None => item.involves(team),
        }
    }
}

/// Matches passing the filter, in input order.
pub fn filter_matches<'m>(matches: &'m [MatchRecord], filter: &MatchFilter) -> Vec<&'m MatchRecord> {
    matches.iter().filter(|item| filter.matches(item)).collect()
}

/// Scheduled matches kicking off within `days` days of `now`, soonest first.
/// A window reaching past the last representable date runs to the end of time.
pub fn upcoming_matches(matches: &[MatchRecord], now: NaiveDateTime, days: i64) -> Vec<&MatchRecord> {
    if days < 0 {
        return Vec::new();
    }

    let until = Duration::try_days(days)
        .and_then(|window| now.checked_add_signed(window))
        .unwrap_or(NaiveDateTime::MAX);

    matches
        .iter()
        .filter(|item| item.status == MatchStatus::Scheduled)
        .filter(|item| item.date.is_some_and(|date| date >= now && date <= until))
        .sorted_by(|a, b| compare_kickoff(a.date, b.date))
        .collect()
}
