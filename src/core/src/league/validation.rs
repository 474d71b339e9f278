use crate::league::StandingRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StandingViolation {
    /// `played != wins + draws + losses`
    PlayedMismatch { played: u32, expected: u64 },
    /// `points != wins * 3 + draws`
    PointsMismatch { points: u32, expected: u64 },
}

pub fn validate_standing(record: &StandingRecord) -> Vec<StandingViolation> {
    let mut violations = Vec::new();

    let expected_played = record.expected_played();
    if record.played as u64 != expected_played {
        violations.push(StandingViolation::PlayedMismatch {
            played: record.played,
            expected: expected_played,
        });
    }

    let expected_points = record.expected_points();
    if record.points as u64 != expected_points {
        violations.push(StandingViolation::PointsMismatch {
            points: record.points,
            expected: expected_points,
        });
    }

    violations
}

/// Only the records with at least one violation are returned.
pub fn validate_standings(records: &[StandingRecord]) -> Vec<(String, Vec<StandingViolation>)> {
    records
        .iter()
        .filter_map(|record| {
            let violations = validate_standing(record);
            if violations.is_empty() {
                None
            } else {
                Some((record.team_id.clone(), violations))
            }
        })
        .collect()
}
