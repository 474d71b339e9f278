use engine::{MalformedReason, SkippedRecord, TeamRecord};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntity {
    pub id: Option<String>,
    pub name: Option<String>,
    pub region: Option<String>,
    pub short_name: Option<String>,
    pub nickname: Option<String>,
    pub city: Option<String>,
}

impl TeamEntity {
    pub fn into_record(self, idx: usize) -> Result<TeamRecord, SkippedRecord> {
        let id = match self.id.filter(|id| !id.trim().is_empty()) {
            Some(id) => id,
            None => return Err(SkippedRecord::new(format!("team#{}", idx), MalformedReason::MissingId)),
        };

        Ok(TeamRecord {
            name: self.name.unwrap_or_else(|| id.clone()),
            region: self.region.unwrap_or_default(),
            short_name: self.short_name,
            nickname: self.nickname,
            city: self.city,
            id,
        })
    }
}
