use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Both sides of a comparison denote the same team.
    InvalidComparison { team_id: String },
    InvalidMonth { year: i32, month: u32 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidComparison { team_id } => {
                write!(f, "cannot compare team '{}' with itself", team_id)
            }
            EngineError::InvalidMonth { year, month } => {
                write!(f, "invalid calendar month {}-{:02}", year, month)
            }
        }
    }
}

impl std::error::Error for EngineError {}

pub type EngineResult<T> = Result<T, EngineError>;

/// Why a record was left out of a derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedReason {
    MissingId,
    MissingTeamId,
    MissingDate,
    UnknownTeam,
    SameTeam,
    MissingJornada,
    MissingScore,
    DuplicateId,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MalformedReason::MissingId => "missing id",
            MalformedReason::MissingTeamId => "missing team id",
            MalformedReason::MissingDate => "missing or unparseable date",
            MalformedReason::UnknownTeam => "references an unknown team",
            MalformedReason::SameTeam => "home and away team are the same",
            MalformedReason::MissingJornada => "missing jornada",
            MalformedReason::MissingScore => "completed without a score",
            MalformedReason::DuplicateId => "duplicate id",
        };

        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SkippedRecord {
    pub id: String,
    pub reason: MalformedReason,
}

impl SkippedRecord {
    pub fn new(id: impl Into<String>, reason: MalformedReason) -> Self {
        SkippedRecord {
            id: id.into(),
            reason,
        }
    }
}
