//! Site Routes
//!
//! The router table as data: every page the app can show, with the path
//! it lives at. Links and favorites are built from `Page::path`, and the
//! nav bar classifies the current location with `Page::parse`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Competition { year: i32, ijs_id: String },
    Event { year: i32, ijs_id: String, event_id: String },
    Skater { id: u64 },
    Official { id: u64 },
    Club { id: u64 },
    UserProfile { username: String },
    MyProfile,
    Search { query: Option<String> },
    Favorites,
    Tossies,
    Feedback,
    Login,
    NotFound,
}

/// Top-level nav sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Competitions,
    People,
    Search,
    Favorites,
    Tossies,
    Account,
    Other,
}

impl Page {
    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Competition { year, ijs_id } => format!("/competitions/{year}/{}", encode(ijs_id)),
            Page::Event { year, ijs_id, event_id } => {
                format!("/competitions/{year}/{}/events/{}", encode(ijs_id), encode(event_id))
            }
            Page::Skater { id } => format!("/skaters/{id}"),
            Page::Official { id } => format!("/officials/{id}"),
            Page::Club { id } => format!("/clubs/{id}"),
            Page::UserProfile { username } => format!("/users/{}", encode(username)),
            Page::MyProfile => "/profile".to_string(),
            Page::Search { query: Some(q) } if !q.trim().is_empty() => format!("/search?q={}", encode(q.trim())),
            Page::Search { .. } => "/search".to_string(),
            Page::Favorites => "/favorites".to_string(),
            Page::Tossies => "/tossies".to_string(),
            Page::Feedback => "/feedback".to_string(),
            Page::Login => "/login".to_string(),
            Page::NotFound => "/404".to_string(),
        }
    }

    /// Classify a location (`pathname` plus optional `?query`)
    pub fn parse(location: &str) -> Page {
        let (path, query) = match location.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (location, None),
        };
        let segments: Vec<String> = path.split('/').filter(|s| !s.is_empty()).map(decode).collect();
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

        match segments.as_slice() {
            [] => Page::Home,
            ["competitions", year, ijs_id] => match year.parse() {
                Ok(year) => Page::Competition { year, ijs_id: ijs_id.to_string() },
                Err(_) => Page::NotFound,
            },
            ["competitions", year, ijs_id, "events", event_id] => match year.parse() {
                Ok(year) => Page::Event { year, ijs_id: ijs_id.to_string(), event_id: event_id.to_string() },
                Err(_) => Page::NotFound,
            },
            ["skaters", id] => id.parse().map(|id| Page::Skater { id }).unwrap_or(Page::NotFound),
            ["officials", id] => id.parse().map(|id| Page::Official { id }).unwrap_or(Page::NotFound),
            ["clubs", id] => id.parse().map(|id| Page::Club { id }).unwrap_or(Page::NotFound),
            ["users", username] => Page::UserProfile { username: username.to_string() },
            ["profile"] => Page::MyProfile,
            ["search"] => Page::Search { query: query.and_then(search_query) },
            ["favorites"] => Page::Favorites,
            ["tossies"] => Page::Tossies,
            ["feedback"] => Page::Feedback,
            ["login"] => Page::Login,
            _ => Page::NotFound,
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Page::Home | Page::Competition { .. } | Page::Event { .. } => Section::Competitions,
            Page::Skater { .. } | Page::Official { .. } | Page::Club { .. } | Page::UserProfile { .. } => Section::People,
            Page::Search { .. } => Section::Search,
            Page::Favorites => Section::Favorites,
            Page::Tossies => Section::Tossies,
            Page::MyProfile | Page::Login => Section::Account,
            Page::Feedback | Page::NotFound => Section::Other,
        }
    }

    /// Pages that only make sense signed in
    pub fn requires_login(&self) -> bool {
        matches!(self, Page::MyProfile | Page::Tossies)
    }
}

fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

fn search_query(query: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == "q")
        .map(|(_, v)| decode(&v.replace('+', " ")))
        .filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        let pages = vec![
            Page::Home,
            Page::Competition { year: 2024, ijs_id: "35".into() },
            Page::Event { year: 2019, ijs_id: "nqs-2".into(), event_id: "14".into() },
            Page::Skater { id: 812 },
            Page::Official { id: 3 },
            Page::Club { id: 77 },
            Page::UserProfile { username: "ice queen".into() },
            Page::MyProfile,
            Page::Search { query: Some("mao asada".into()) },
            Page::Search { query: None },
            Page::Favorites,
            Page::Tossies,
            Page::Feedback,
            Page::Login,
        ];
        for page in pages {
            assert_eq!(Page::parse(&page.path()), page, "path {}", page.path());
        }
    }

    #[test]
    fn test_parse_rejects_bad_ids() {
        assert_eq!(Page::parse("/skaters/abc"), Page::NotFound);
        assert_eq!(Page::parse("/competitions/twenty/1"), Page::NotFound);
        assert_eq!(Page::parse("/nowhere"), Page::NotFound);
    }

    #[test]
    fn test_parse_tolerates_trailing_slash_and_plus() {
        assert_eq!(Page::parse("/favorites/"), Page::Favorites);
        assert_eq!(Page::parse("/search?q=alysa+liu&page=2"), Page::Search { query: Some("alysa liu".into()) });
        assert_eq!(Page::parse("/search?q="), Page::Search { query: None });
    }

    #[test]
    fn test_sections() {
        assert_eq!(Page::parse("/competitions/2024/35/events/2").section(), Section::Competitions);
        assert_eq!(Page::parse("/clubs/4").section(), Section::People);
        assert!(Page::MyProfile.requires_login());
        assert!(!Page::Favorites.requires_login());
    }
}
