//! Search Results

use serde::{Deserialize, Serialize};

use crate::routes::Page;

/// Grouped search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResults {
    pub competitions: Vec<super::CompetitionSummary>,
    pub skaters: Vec<SearchHit>,
    pub officials: Vec<SearchHit>,
    pub clubs: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub detail: Option<String>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.competitions.is_empty() && self.skaters.is_empty() && self.officials.is_empty() && self.clubs.is_empty()
    }

    pub fn total(&self) -> usize {
        self.competitions.len() + self.skaters.len() + self.officials.len() + self.clubs.len()
    }

    /// Destination of the first hit, for jump-on-enter
    pub fn first_page(&self) -> Option<Page> {
        if let Some(c) = self.competitions.first() {
            return Some(Page::Competition { year: c.year, ijs_id: c.ijs_id.clone() });
        }
        if let Some(s) = self.skaters.first() {
            return Some(Page::Skater { id: s.id });
        }
        if let Some(o) = self.officials.first() {
            return Some(Page::Official { id: o.id });
        }
        self.clubs.first().map(|c| Page::Club { id: c.id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_prefers_competitions_then_skaters() {
        let mut results: SearchResults =
            serde_json::from_str(r#"{"skaters": [{"id": 9, "name": "Kim"}], "clubs": [{"id": 1, "name": "SC"}]}"#).unwrap();
        assert_eq!(results.total(), 2);
        assert_eq!(results.first_page(), Some(Page::Skater { id: 9 }));
        results.skaters.clear();
        assert_eq!(results.first_page(), Some(Page::Club { id: 1 }));
        results.clubs.clear();
        assert!(results.is_empty());
        assert_eq!(results.first_page(), None);
    }
}
