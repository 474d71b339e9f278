use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use engine::{Jornada, MalformedReason, MatchRecord, MatchScore, MatchStatus, SkippedRecord};
use log::warn;
use serde::Deserialize;

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntity {
    pub id: Option<String>,
    pub home_team_id: Option<String>,
    pub away_team_id: Option<String>,
    pub date: Option<String>,
    /// Kickoff time when `date` only carries the day.
    pub time: Option<String>,
    pub jornada: Option<u32>,
    #[serde(default)]
    pub double_jornada: bool,
    pub status: Option<MatchStatus>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub stadium: Option<String>,
    pub referee: Option<String>,
    pub attendance: Option<u32>,
}

impl MatchEntity {
    pub fn into_record(self, idx: usize) -> Result<MatchRecord, SkippedRecord> {
        let id = match self.id.filter(|id| !id.trim().is_empty()) {
            Some(id) => id,
            None => return Err(SkippedRecord::new(format!("match#{}", idx), MalformedReason::MissingId)),
        };

        let (home_team_id, away_team_id) = match (self.home_team_id, self.away_team_id) {
            (Some(home), Some(away)) if !home.is_empty() && !away.is_empty() => (home, away),
            _ => return Err(SkippedRecord::new(id, MalformedReason::MissingTeamId)),
        };

        if home_team_id == away_team_id {
            return Err(SkippedRecord::new(id, MalformedReason::SameTeam));
        }

        let jornada = match self.jornada {
            Some(number) if self.double_jornada => Jornada::Double(number),
            Some(number) => Jornada::Regular(number),
            None => return Err(SkippedRecord::new(id, MalformedReason::MissingJornada)),
        };

        let date = match self.date.as_deref() {
            Some(raw) => {
                let parsed = parse_kickoff(raw, self.time.as_deref());
                if parsed.is_none() {
                    warn!("match {}: unparseable date '{}'", id, raw);
                }
                parsed
            }
            None => None,
        };

        let status = self.status.unwrap_or(MatchStatus::Scheduled);

        let score = match (self.home_score, self.away_score) {
            (Some(home), Some(away)) if status.has_score() => Some(MatchScore { home, away }),
            _ => None,
        };

        Ok(MatchRecord {
            id,
            home_team_id,
            away_team_id,
            date,
            jornada,
            status,
            score,
            stadium: self.stadium,
            referee: self.referee,
            attendance: self.attendance,
        })
    }
}

/// Accepts ISO-like date-times, RFC 3339 with an offset (kept as local wall
/// time), or a bare day with an optional `HH:MM` kickoff.
pub fn parse_kickoff(date: &str, time: Option<&str>) -> Option<NaiveDateTime> {
    let date = date.trim();

    if let Some(parsed) = DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(date, format).ok())
    {
        return Some(parsed);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.naive_local());
    }

    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;

    let kickoff = match time.map(str::trim) {
        Some(time) if !time.is_empty() => NaiveTime::parse_from_str(time, "%H:%M").ok()?,
        _ => NaiveTime::from_hms_opt(0, 0, 0)?,
    };

    Some(day.and_time(kickoff))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(json: &str) -> MatchEntity {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_kickoff_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 13).unwrap().and_hms_opt(19, 5, 0);

        assert_eq!(parse_kickoff("2024-01-13T19:05:00", None), expected);
        assert_eq!(parse_kickoff("2024-01-13 19:05", None), expected);
        assert_eq!(parse_kickoff("2024-01-13T19:05:00-06:00", None), expected);
        assert_eq!(parse_kickoff("2024-01-13", Some("19:05")), expected);
        assert_eq!(
            parse_kickoff("2024-01-13", None),
            NaiveDate::from_ymd_opt(2024, 1, 13).unwrap().and_hms_opt(0, 0, 0)
        );
    }

    #[test]
    fn test_parse_kickoff_rejects_garbage() {
        assert_eq!(parse_kickoff("por definir", None), None);
        assert_eq!(parse_kickoff("2024-02-30", None), None);
        assert_eq!(parse_kickoff("2024-01-13", Some("tarde")), None);
    }

    #[test]
    fn test_unparseable_date_keeps_match() {
        let record = entity(
            r#"{ "id": "m1", "homeTeamId": "tigres", "awayTeamId": "america", "date": "TBD", "jornada": 4 }"#,
        )
        .into_record(0)
        .unwrap();

        assert!(record.date.is_none());
        assert_eq!(record.jornada, Jornada::Regular(4));
        assert_eq!(record.status, MatchStatus::Scheduled);
    }

    #[test]
    fn test_score_only_kept_for_played_matches() {
        let completed = entity(
            r#"{ "id": "m1", "homeTeamId": "tigres", "awayTeamId": "america", "jornada": 1,
                 "status": "completed", "homeScore": 2, "awayScore": 1 }"#,
        )
        .into_record(0)
        .unwrap();
        assert_eq!(completed.score, Some(MatchScore { home: 2, away: 1 }));

        let scheduled = entity(
            r#"{ "id": "m2", "homeTeamId": "tigres", "awayTeamId": "america", "jornada": 1,
                 "homeScore": 2, "awayScore": 1 }"#,
        )
        .into_record(0)
        .unwrap();
        assert_eq!(scheduled.score, None);
    }

    #[test]
    fn test_malformed_matches_are_rejected() {
        let missing_id = entity(r#"{ "homeTeamId": "a", "awayTeamId": "b", "jornada": 1 }"#).into_record(7);
        assert_eq!(missing_id.unwrap_err(), SkippedRecord::new("match#7", MalformedReason::MissingId));

        let same_team = entity(r#"{ "id": "x", "homeTeamId": "a", "awayTeamId": "a", "jornada": 1 }"#).into_record(0);
        assert_eq!(same_team.unwrap_err().reason, MalformedReason::SameTeam);

        let no_away = entity(r#"{ "id": "y", "homeTeamId": "a", "jornada": 1 }"#).into_record(0);
        assert_eq!(no_away.unwrap_err().reason, MalformedReason::MissingTeamId);

        let no_jornada = entity(r#"{ "id": "z", "homeTeamId": "a", "awayTeamId": "b" }"#).into_record(0);
        assert_eq!(no_jornada.unwrap_err().reason, MalformedReason::MissingJornada);
    }

    #[test]
    fn test_double_jornada_flag() {
        let record = entity(
            r#"{ "id": "m9", "homeTeamId": "a", "awayTeamId": "b", "jornada": 9, "doubleJornada": true }"#,
        )
        .into_record(0)
        .unwrap();

        assert_eq!(record.jornada, Jornada::Double(9));
    }
}
