//! Competition Models

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Row in the competition listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionSummary {
    pub year: i32,
    pub ijs_id: String,
    pub name: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Full competition with its events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub year: i32,
    pub ijs_id: String,
    pub name: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    /// Abbreviation or IANA name as published by the organizer
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub results_url: Option<String>,
    #[serde(default)]
    pub events: Vec<EventSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub event_id: String,
    pub name: String,
    #[serde(default)]
    pub discipline: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub segments: Vec<SegmentSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSummary {
    pub name: String,
    /// Local wall-clock start in the competition timezone
    #[serde(default)]
    pub start_time: Option<NaiveDateTime>,
}

/// Final standings of one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResults {
    pub event_id: String,
    pub name: String,
    #[serde(default)]
    pub competition_name: Option<String>,
    #[serde(default)]
    pub is_six_o: bool,
    #[serde(default)]
    pub results: Vec<ResultRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    #[serde(default)]
    pub placement: Option<u32>,
    #[serde(default)]
    pub skater_id: Option<u64>,
    pub skater_name: String,
    #[serde(default)]
    pub club: Option<String>,
    #[serde(default)]
    pub club_id: Option<u64>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub majority: Option<String>,
    #[serde(default)]
    pub withdrawn: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competition_decodes_sparse_json() {
        let json = r#"{
            "year": 2024,
            "ijsId": "35",
            "name": "Sectional Singles Final",
            "startDate": "2024-11-07",
            "timezone": "EST",
            "somethingNew": true,
            "events": [{"eventId": "7", "name": "Senior Women", "segments": [
                {"name": "Short Program", "startTime": "2024-11-07T14:30:00"}
            ]}]
        }"#;
        let competition: Competition = serde_json::from_str(json).unwrap();
        assert_eq!(competition.ijs_id, "35");
        assert_eq!(competition.start_date, NaiveDate::from_ymd_opt(2024, 11, 7));
        assert!(competition.end_date.is_none());
        assert_eq!(competition.events[0].segments[0].name, "Short Program");
        assert!(competition.events[0].segments[0].start_time.is_some());
    }

    #[test]
    fn test_result_row_defaults() {
        let row: ResultRow = serde_json::from_str(r#"{"skaterName": "Jane Doe"}"#).unwrap();
        assert_eq!(row.placement, None);
        assert!(!row.withdrawn);
    }
}
