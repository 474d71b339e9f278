use crate::schedule::{MatchRecord, compare_kickoff};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl FormResult {
    fn from_goals(scored: u32, conceded: u32) -> Self {
        match scored.cmp(&conceded) {
            Ordering::Greater => FormResult::Win,
            Ordering::Equal => FormResult::Draw,
            Ordering::Less => FormResult::Loss,
        }
    }

    pub fn letter(self) -> char {
        match self {
            FormResult::Win => 'W',
            FormResult::Draw => 'D',
            FormResult::Loss => 'L',
        }
    }
}

/// Last `count` completed results of a team that kicked off before `now`, newest first.
pub fn team_form(
    matches: &[MatchRecord],
    team_id: &str,
    now: NaiveDateTime,
    count: usize,
) -> Vec<FormResult> {
    let mut played: Vec<&MatchRecord> = matches
        .iter()
        .filter(|m| m.is_completed() && m.involves(team_id))
        .filter(|m| m.date.is_some_and(|date| date < now))
        .collect();

    played.sort_by(|a, b| compare_kickoff(b.date, a.date));

    played
        .into_iter()
        .filter_map(|m| m.goals_for(team_id))
        .take(count)
        .map(|(scored, conceded)| FormResult::from_goals(scored, conceded))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadToHead {
    pub played: u32,
    pub left_wins: u32,
    pub right_wins: u32,
    pub draws: u32,
    pub left_goals: u32,
    pub right_goals: u32,
}

/// Completed meetings between `left` and `right`, regardless of venue.
pub fn head_to_head(matches: &[MatchRecord], left: &str, right: &str) -> HeadToHead {
    let mut record = HeadToHead::default();

    if left == right {
        return record;
    }

    for item in matches
        .iter()
        .filter(|m| m.is_completed() && m.involves(left) && m.involves(right))
    {
        let (scored, conceded) = match item.goals_for(left) {
            Some(goals) => goals,
            None => continue,
        };

        record.played += 1;
        record.left_goals += scored;
        record.right_goals += conceded;

        match FormResult::from_goals(scored, conceded) {
            FormResult::Win => record.left_wins += 1,
            FormResult::Draw => record.draws += 1,
            FormResult::Loss => record.right_wins += 1,
        }
    }

    record
}
