use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: String,
    pub name: String,
    pub region: String,

    pub short_name: Option<String>,
    pub nickname: Option<String>,
    pub city: Option<String>,
}

impl TeamRecord {
    pub fn new(id: &str, name: &str, region: &str) -> Self {
        TeamRecord {
            id: String::from(id),
            name: String::from(name),
            region: String::from(region),
            short_name: None,
            nickname: None,
            city: None,
        }
    }

    pub fn with_nickname(mut self, nickname: &str) -> Self {
        self.nickname = Some(String::from(nickname));
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(String::from(city));
        self
    }

    pub fn display_name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.name)
    }
}
