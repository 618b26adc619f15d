//! Skater Models
//!
//! A skater profile carries its full result history; each history entry
//! may embed the judges' detail sheet for that segment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkaterProfile {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub club: Option<String>,
    #[serde(default)]
    pub club_id: Option<u64>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub history: Vec<SkaterHistoryEntry>,
}

/// One competition result row of a skater
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SkaterHistoryEntry {
    pub year: i32,
    pub ijs_id: String,
    pub competition_name: String,
    pub event_id: Option<String>,
    pub event_name: String,
    /// Segment name ("Short Program", "Free Skate"); absent for final standings
    pub segment: Option<String>,
    pub date: Option<NaiveDate>,
    pub placement: Option<u32>,
    /// Event total (IJS) as published
    pub score: Option<f64>,
    /// Segment score (IJS); zero or absent when not segmented
    pub segment_score: Option<f64>,
    /// 6.0 majority notation, e.g. "4/1"
    pub majority: Option<String>,
    pub is_six_o: bool,
    pub judge_details: Option<JudgeDetails>,
}

/// Judges' detail sheet for one skate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct JudgeDetails {
    pub total_element_score: Option<f64>,
    pub total_component_score: Option<f64>,
    pub elements: Vec<ElementScore>,
    pub components: Vec<ProgramComponent>,
    pub deductions: Vec<Deduction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementScore {
    pub code: String,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub base_value: f64,
    /// Panel GOE (already trimmed-mean of the judges)
    #[serde(default)]
    pub goe: f64,
    #[serde(default)]
    pub judge_marks: Vec<i32>,
    /// Panel score (base value + GOE)
    #[serde(default)]
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramComponent {
    pub name: String,
    #[serde(default)]
    pub factor: f64,
    #[serde(default)]
    pub judge_marks: Vec<f64>,
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deduction {
    pub name: String,
    pub points: f64,
}

impl JudgeDetails {
    pub fn total_deductions(&self) -> f64 {
        self.deductions.iter().map(|d| d.points.abs()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_entry_decodes_with_details() {
        let json = r#"{
            "year": 2023, "ijsId": "12", "competitionName": "Autumn Classic",
            "eventName": "Senior Men", "segment": "Free Skate",
            "segmentScore": 170.25, "score": 255.1,
            "judgeDetails": {
                "elements": [{"code": "4T", "baseValue": 9.5, "goe": 2.71, "total": 12.21}],
                "components": [{"name": "Composition", "factor": 3.33, "score": 9.1}],
                "deductions": [{"name": "Falls", "points": -1.0}]
            }
        }"#;
        let entry: SkaterHistoryEntry = serde_json::from_str(json).unwrap();
        assert!(!entry.is_six_o);
        let details = entry.judge_details.unwrap();
        assert_eq!(details.elements[0].code, "4T");
        assert_eq!(details.total_deductions(), 1.0);
    }

    #[test]
    fn test_profile_without_history() {
        let profile: SkaterProfile = serde_json::from_str(r#"{"id": 4, "name": "A B"}"#).unwrap();
        assert!(profile.history.is_empty());
    }
}
