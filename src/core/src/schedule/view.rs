use crate::league::LeagueSettings;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Browsing cursors of the presentation layer. The engine never keeps these;
/// callers move them and pass the values into each query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub jornada: u32,
    pub year: i32,
    pub month: u32,
    pub selected_team: Option<String>,
}

impl ViewState {
    pub fn new(jornada: u32, today: NaiveDate) -> Self {
        ViewState {
            jornada,
            year: today.year(),
            month: today.month(),
            selected_team: None,
        }
    }

    pub fn next_jornada(&self, settings: &LeagueSettings) -> Self {
        ViewState {
            jornada: (self.jornada + 1).clamp(1, settings.season_length.max(1)),
            ..self.clone()
        }
    }

    pub fn previous_jornada(&self, settings: &LeagueSettings) -> Self {
        ViewState {
            jornada: self.jornada.saturating_sub(1).clamp(1, settings.season_length.max(1)),
            ..self.clone()
        }
    }

    /// Stays put when the year cannot move any further.
    pub fn next_month(&self) -> Self {
        let (year, month) = if self.month >= 12 {
            match self.year.checked_add(1) {
                Some(year) => (year, 1),
                None => return self.clone(),
            }
        } else {
            (self.year, self.month + 1)
        };

        ViewState {
            year,
            month,
            ..self.clone()
        }
    }

    pub fn previous_month(&self) -> Self {
        let (year, month) = if self.month <= 1 {
            match self.year.checked_sub(1) {
                Some(year) => (year, 12),
                None => return self.clone(),
            }
        } else {
            (self.year, self.month - 1)
        };

        ViewState {
            year,
            month,
            ..self.clone()
        }
    }

    pub fn select_team(&self, team_id: Option<&str>) -> Self {
        ViewState {
            selected_team: team_id.map(String::from),
            ..self.clone()
        }
    }
}
