use crate::error::{EngineError, EngineResult};
use crate::league::StandingRecord;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Points,
    Played,
    Wins,
    Draws,
    Losses,
    GoalsFor,
    GoalsAgainst,
    GoalDifference,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::Points,
        Metric::Played,
        Metric::Wins,
        Metric::Draws,
        Metric::Losses,
        Metric::GoalsFor,
        Metric::GoalsAgainst,
        Metric::GoalDifference,
    ];

    pub fn lower_is_better(self) -> bool {
        matches!(self, Metric::Losses | Metric::GoalsAgainst)
    }

    pub fn value(self, standing: &StandingRecord) -> i64 {
        match self {
            Metric::Points => standing.points as i64,
            Metric::Played => standing.played as i64,
            Metric::Wins => standing.wins as i64,
            Metric::Draws => standing.draws as i64,
            Metric::Losses => standing.losses as i64,
            Metric::GoalsFor => standing.goals_for as i64,
            Metric::GoalsAgainst => standing.goals_against as i64,
            Metric::GoalDifference => standing.goal_difference(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
    Even,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Even => Side::Even,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricComparison {
    pub metric: Metric,
    pub left: i64,
    pub right: i64,
    pub better: Side,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub left_team_id: String,
    pub right_team_id: String,
    pub metrics: Vec<MetricComparison>,
}

impl ComparisonResult {
    pub fn metric(&self, metric: Metric) -> Option<&MetricComparison> {
        self.metrics.iter().find(|m| m.metric == metric)
    }

    pub fn wins_for(&self, side: Side) -> usize {
        self.metrics.iter().filter(|m| m.better == side).count()
    }
}

pub fn compare(left: &StandingRecord, right: &StandingRecord) -> EngineResult<ComparisonResult> {
    if left.team_id == right.team_id {
        return Err(EngineError::InvalidComparison {
            team_id: left.team_id.clone(),
        });
    }

    let metrics = Metric::ALL
        .iter()
        .map(|&metric| {
            let (l, r) = (metric.value(left), metric.value(right));

            let ordering = if metric.lower_is_better() {
                r.cmp(&l)
            } else {
                l.cmp(&r)
            };

            let better = match ordering {
                Ordering::Greater => Side::Left,
                Ordering::Less => Side::Right,
                Ordering::Equal => Side::Even,
            };

            MetricComparison {
                metric,
                left: l,
                right: r,
                better,
            }
        })
        .collect();

    Ok(ComparisonResult {
        left_team_id: left.team_id.clone(),
        right_team_id: right.team_id.clone(),
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_directions() {
        let tigres = StandingRecord::from_totals("tigres", 6, 2, 1, 18, 7);
        let america = StandingRecord::from_totals("america", 5, 3, 3, 15, 9);

        let result = compare(&tigres, &america).unwrap();

        assert_eq!(result.metrics.len(), Metric::ALL.len());
        assert_eq!(result.metric(Metric::Points).unwrap().better, Side::Left);
        assert_eq!(result.metric(Metric::Wins).unwrap().better, Side::Left);
        assert_eq!(result.metric(Metric::Draws).unwrap().better, Side::Right);
        assert_eq!(result.metric(Metric::Losses).unwrap().better, Side::Left);
        assert_eq!(result.metric(Metric::GoalsAgainst).unwrap().better, Side::Left);
        assert_eq!(result.metric(Metric::GoalDifference).unwrap().left, 11);
        assert_eq!(result.metric(Metric::Played).unwrap().better, Side::Right);
    }

    #[test]
    fn test_compare_is_symmetric() {
        let a = StandingRecord::from_totals("leon", 4, 4, 2, 12, 12);
        let b = StandingRecord::from_totals("toluca", 4, 2, 4, 15, 10);

        let ab = compare(&a, &b).unwrap();
        let ba = compare(&b, &a).unwrap();

        for (x, y) in ab.metrics.iter().zip(ba.metrics.iter()) {
            assert_eq!(x.metric, y.metric);
            assert_eq!(x.better, y.better.opposite());
        }

        assert_eq!(ab.metric(Metric::Wins).unwrap().better, Side::Even);
        assert_eq!(ab.wins_for(Side::Left), ba.wins_for(Side::Right));
    }

    #[test]
    fn test_compare_same_team_is_rejected() {
        let a = StandingRecord::from_totals("pachuca", 1, 0, 0, 2, 0);
        let b = StandingRecord::from_totals("pachuca", 0, 1, 0, 1, 1);

        assert_eq!(
            compare(&a, &b),
            Err(EngineError::InvalidComparison {
                team_id: String::from("pachuca")
            })
        );
    }
}
