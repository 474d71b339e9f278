use crate::team::TeamRecord;

#[derive(Debug, Clone, Default)]
pub struct TeamFilter {
    pub query: Option<String>,
    pub region: Option<String>,
}

impl TeamFilter {
    pub fn query(mut self, query: &str) -> Self {
        self.query = Some(String::from(query));
        self
    }

    pub fn region(mut self, region: &str) -> Self {
        self.region = Some(String::from(region));
        self
    }

    fn matches(&self, team: &TeamRecord) -> bool {
        self.matches_region(team) && self.matches_query(team)
    }

    fn matches_region(&self, team: &TeamRecord) -> bool {
        match self.region.as_deref() {
            Some(region) if !region.is_empty() => team.region == region,
            _ => true,
        }
    }

    fn matches_query(&self, team: &TeamRecord) -> bool {
        let query = match self.query.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => query.to_lowercase(),
            _ => return true,
        };

        [Some(&team.name), team.nickname.as_ref(), team.city.as_ref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Teams passing every filter that is set, in input order.
pub fn filter_teams<'t>(teams: &'t [TeamRecord], filter: &TeamFilter) -> Vec<&'t TeamRecord> {
    teams.iter().filter(|team| filter.matches(team)).collect()
}

/// Looks a team up by id first, then by case-insensitive name.
pub fn resolve_team<'t>(teams: &'t [TeamRecord], key: &str) -> Option<&'t TeamRecord> {
    teams.iter().find(|team| team.id == key).or_else(|| {
        let key = key.to_lowercase();
        teams.iter().find(|team| team.name.to_lowercase() == key)
    })
}
