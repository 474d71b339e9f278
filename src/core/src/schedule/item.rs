use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Completed,
    Postponed,
}

impl MatchStatus {
    /// Whether a score is meaningful for this status.
    pub fn has_score(self) -> bool {
        matches!(self, MatchStatus::Live | MatchStatus::Completed)
    }
}

/// Match-day tag. A double jornada packs two rounds' worth of fixtures into
/// one window but is still browsed under its own number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "number", rename_all = "lowercase")]
pub enum Jornada {
    Regular(u32),
    Double(u32),
}

impl Jornada {
    pub fn number(self) -> u32 {
        match self {
            Jornada::Regular(n) | Jornada::Double(n) => n,
        }
    }

    pub fn is_double(self) -> bool {
        matches!(self, Jornada::Double(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub home: u32,
    pub away: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: String,

    pub home_team_id: String,
    pub away_team_id: String,

    /// `None` when the source date was missing or could not be parsed.
    pub date: Option<NaiveDateTime>,
    pub jornada: Jornada,
    pub status: MatchStatus,
    pub score: Option<MatchScore>,

    pub stadium: Option<String>,
    pub referee: Option<String>,
    pub attendance: Option<u32>,
}

impl MatchRecord {
    pub fn new(
        id: &str,
        home_team_id: &str,
        away_team_id: &str,
        jornada: u32,
        date: Option<NaiveDateTime>,
    ) -> Self {
        MatchRecord {
            id: String::from(id),
            home_team_id: String::from(home_team_id),
            away_team_id: String::from(away_team_id),
            date,
            jornada: Jornada::Regular(jornada),
            status: MatchStatus::Scheduled,
            score: None,
            stadium: None,
            referee: None,
            attendance: None,
        }
    }

    pub fn completed(mut self, home: u32, away: u32) -> Self {
        self.status = MatchStatus::Completed;
        self.score = Some(MatchScore { home, away });
        self
    }

    pub fn live(mut self, home: u32, away: u32) -> Self {
        self.status = MatchStatus::Live;
        self.score = Some(MatchScore { home, away });
        self
    }

    pub fn postponed(mut self) -> Self {
        self.status = MatchStatus::Postponed;
        self.score = None;
        self
    }

    pub fn double(mut self) -> Self {
        self.jornada = Jornada::Double(self.jornada.number());
        self
    }

    pub fn day(&self) -> Option<NaiveDate> {
        self.date.map(|date| date.date())
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// `(scored, conceded)` from the point of view of `team_id`.
    pub fn goals_for(&self, team_id: &str) -> Option<(u32, u32)> {
        let score = self.score?;

        if self.home_team_id == team_id {
            Some((score.home, score.away))
        } else if self.away_team_id == team_id {
            Some((score.away, score.home))
        } else {
            None
        }
    }
}

/// Ascending kickoff order; undated matches sort after every dated one.
pub fn compare_kickoff(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goals_for_perspective() {
        let item = MatchRecord::new("m1", "tigres", "america", 1, None).completed(3, 1);

        assert_eq!(item.goals_for("tigres"), Some((3, 1)));
        assert_eq!(item.goals_for("america"), Some((1, 3)));
        assert_eq!(item.goals_for("pumas"), None);
    }

    #[test]
    fn test_postponed_drops_score() {
        let item = MatchRecord::new("m1", "tigres", "america", 1, None)
            .live(1, 0)
            .postponed();

        assert_eq!(item.status, MatchStatus::Postponed);
        assert!(item.score.is_none());
        assert!(!item.status.has_score());
    }

    #[test]
    fn test_double_jornada_keeps_number() {
        let item = MatchRecord::new("m1", "tigres", "america", 9, None).double();

        assert!(item.jornada.is_double());
        assert_eq!(item.jornada.number(), 9);
    }

    #[test]
    fn test_undated_sorts_last() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(19, 0, 0);

        assert_eq!(compare_kickoff(date, None), Ordering::Less);
        assert_eq!(compare_kickoff(None, date), Ordering::Greater);
        assert_eq!(compare_kickoff(None, None), Ordering::Equal);
    }
}
