use crate::league::LeagueSettings;
use crate::schedule::{MatchRecord, compare_kickoff};
use chrono::NaiveDate;
use itertools::Itertools;
use log::debug;
use serde::Serialize;

/// All fixtures tagged with jornada `number`, in kickoff order. A number outside
/// the configured season yields nothing.
pub fn by_jornada<'m>(
    matches: &'m [MatchRecord],
    number: u32,
    settings: &LeagueSettings,
) -> Vec<&'m MatchRecord> {
    if !settings.contains_jornada(number) {
        debug!(
            "jornada {} is outside the season (1..={})",
            number, settings.season_length
        );
        return Vec::new();
    }

    matches
        .iter()
        .filter(|m| m.jornada.number() == number)
        .sorted_by(|a, b| compare_kickoff(a.date, b.date))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct JornadaDay<'m> {
    /// `None` collects fixtures without a usable date.
    pub date: Option<NaiveDate>,
    pub matches: Vec<&'m MatchRecord>,
}

/// The jornada's fixtures grouped per calendar day, earliest day first.
pub fn jornada_days<'m>(
    matches: &'m [MatchRecord],
    number: u32,
    settings: &LeagueSettings,
) -> Vec<JornadaDay<'m>> {
    let fixtures = by_jornada(matches, number, settings);

    fixtures
        .into_iter()
        .chunk_by(|m| m.day())
        .into_iter()
        .map(|(date, group)| JornadaDay {
            date,
            matches: group.collect(),
        })
        .collect()
}

/// First and last dated day of a jornada.
pub fn jornada_window(matches: &[MatchRecord], number: u32) -> Option<(NaiveDate, NaiveDate)> {
    matches
        .iter()
        .filter(|m| m.jornada.number() == number)
        .filter_map(|m| m.day())
        .minmax()
        .into_option()
}

/// The jornada being played on `today`. Between jornadas this is the last one
/// already finished, and before the season starts it is the first.
pub fn current_jornada(matches: &[MatchRecord], today: NaiveDate, settings: &LeagueSettings) -> u32 {
    let mut current = None;

    for number in 1..=settings.season_length {
        let Some((start, end)) = jornada_window(matches, number) else {
            continue;
        };

        if today >= start && today <= end {
            return number;
        }

        if today > end {
            current = Some(number);
        }
    }

    current.unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn kickoff(month: u32, day: u32, hour: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2024, month, day).and_then(|d| d.and_hms_opt(hour, 0, 0))
    }

    fn season() -> Vec<MatchRecord> {
        // jornada n is played on the weekend starting January 6 + 7 * (n - 1)
        let start = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();

        (1..=17u32)
            .flat_map(|n| {
                let saturday = start + chrono::Duration::days(7 * (n as i64 - 1));
                let sunday = saturday + chrono::Duration::days(1);

                vec![
                    MatchRecord::new(&format!("j{}-late", n), "tigres", "america", n, sunday.and_hms_opt(20, 0, 0)),
                    MatchRecord::new(&format!("j{}-early", n), "pumas", "leon", n, saturday.and_hms_opt(17, 0, 0)),
                    MatchRecord::new(&format!("j{}-mid", n), "toluca", "atlas", n, saturday.and_hms_opt(21, 5, 0)),
                ]
            })
            .collect()
    }

    #[test]
    fn test_by_jornada_sorted_by_kickoff() {
        let matches = season();
        let settings = LeagueSettings::default();

        let jornada: Vec<&str> = by_jornada(&matches, 3, &settings)
            .iter()
            .map(|m| m.id.as_str())
            .collect();

        assert_eq!(jornada, vec!["j3-early", "j3-mid", "j3-late"]);
    }

    #[test]
    fn test_by_jornada_out_of_range_is_empty() {
        let matches = season();
        let settings = LeagueSettings::default();

        assert!(by_jornada(&matches, 0, &settings).is_empty());
        assert!(by_jornada(&matches, 18, &settings).is_empty());
        assert_eq!(by_jornada(&matches, 17, &settings).len(), 3);
    }

    #[test]
    fn test_by_jornada_keeps_undated_and_double_matches() {
        let matches = vec![
            MatchRecord::new("undated", "tigres", "america", 5, None),
            MatchRecord::new("double", "pumas", "leon", 5, kickoff(2, 7, 19)).double(),
            MatchRecord::new("regular", "toluca", "atlas", 5, kickoff(2, 3, 19)),
        ];

        let ids: Vec<&str> = by_jornada(&matches, 5, &LeagueSettings::default())
            .iter()
            .map(|m| m.id.as_str())
            .collect();

        assert_eq!(ids, vec!["regular", "double", "undated"]);
    }

    #[test]
    fn test_jornada_days_groups_by_date() {
        let matches = season();

        let days = jornada_days(&matches, 1, &LeagueSettings::default());

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 1, 6));
        assert_eq!(days[0].matches.len(), 2);
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2024, 1, 7));
        assert_eq!(days[1].matches.len(), 1);
    }

    #[test]
    fn test_current_jornada() {
        let matches = season();
        let settings = LeagueSettings::default();

        let before_season = NaiveDate::from_ymd_opt(2023, 12, 20).unwrap();
        assert_eq!(current_jornada(&matches, before_season, &settings), 1);

        let second_sunday = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
        assert_eq!(current_jornada(&matches, second_sunday, &settings), 2);

        let midweek = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        assert_eq!(current_jornada(&matches, midweek, &settings), 2);

        let after_season = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        assert_eq!(current_jornada(&matches, after_season, &settings), 17);
    }

    #[test]
    fn test_jornada_window() {
        let matches = season();

        assert_eq!(
            jornada_window(&matches, 1),
            Some((
                NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
            ))
        );
        assert_eq!(jornada_window(&matches, 40), None);
    }
}
