use serde::{Deserialize, Serialize};

pub const DEFAULT_SEASON_LENGTH: u32 = 17;
pub const DEFAULT_PROMOTION_SLOTS: usize = 6;
pub const DEFAULT_PLAY_IN_SLOTS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeagueSettings {
    /// Number of regular jornadas in a season.
    pub season_length: u32,
    pub zones: ZoneSettings,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        LeagueSettings {
            season_length: DEFAULT_SEASON_LENGTH,
            zones: ZoneSettings::default(),
        }
    }
}

impl LeagueSettings {
    pub fn contains_jornada(&self, jornada: u32) -> bool {
        jornada >= 1 && jornada <= self.season_length
    }
}

/// Table positions 1..=promotion_slots go straight to the liguilla, the next
/// play_in_slots go to the play-in, everyone else is out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoneSettings {
    pub promotion_slots: usize,
    pub play_in_slots: usize,
}

impl Default for ZoneSettings {
    fn default() -> Self {
        ZoneSettings {
            promotion_slots: DEFAULT_PROMOTION_SLOTS,
            play_in_slots: DEFAULT_PLAY_IN_SLOTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableZone {
    Promotion,
    PlayIn,
    Eliminated,
}

impl ZoneSettings {
    /// `position` is 1-based.
    pub fn zone_for(&self, position: usize) -> TableZone {
        if position >= 1 && position <= self.promotion_slots {
            TableZone::Promotion
        } else if position > self.promotion_slots
            && position <= self.promotion_slots + self.play_in_slots
        {
            TableZone::PlayIn
        } else {
            TableZone::Eliminated
        }
    }
}
