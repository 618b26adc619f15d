//! Derived Skater Statistics
//!
//! Scans a skater's history (already scored server-side) for personal
//! bests, the highest-scoring element and the best mean GOE.

use std::collections::HashSet;

use crate::models::{ElementScore, SkaterHistoryEntry};
use crate::scoring::{effective_score, ScoringSystem};

/// Which part of an event a history row describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SegmentKind {
    Total,
    Short,
    Rhythm,
    Free,
    Other,
}

impl SegmentKind {
    /// Classify a segment name; rows without a segment are final standings
    pub fn classify(segment: Option<&str>) -> Self {
        let Some(name) = segment.map(str::to_lowercase) else {
            return SegmentKind::Total;
        };
        if name.trim().is_empty() || name.contains("total") || name.contains("final standing") {
            SegmentKind::Total
        } else if name.contains("short") {
            SegmentKind::Short
        } else if name.contains("rhythm") || name.contains("original dance") {
            SegmentKind::Rhythm
        } else if name.contains("free") || name.contains("long") {
            SegmentKind::Free
        } else {
            SegmentKind::Other
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SegmentKind::Total => "Total",
            SegmentKind::Short => "Short Program",
            SegmentKind::Rhythm => "Rhythm Dance",
            SegmentKind::Free => "Free Skate",
            SegmentKind::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalBest {
    pub kind: SegmentKind,
    pub system: ScoringSystem,
    /// Points (IJS) or majority place (6.0)
    pub value: f64,
    pub entry: SkaterHistoryEntry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopElement {
    pub element: ElementScore,
    pub entry: SkaterHistoryEntry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeanGoe {
    pub mean_goe: f64,
    pub element_count: usize,
    pub entry: SkaterHistoryEntry,
}

/// Best result per (segment kind, scoring system), ordered by segment kind
pub fn personal_bests(history: &[SkaterHistoryEntry]) -> Vec<PersonalBest> {
    let mut bests: Vec<PersonalBest> = Vec::new();

    for entry in history {
        let Some(value) = effective_score(entry) else {
            continue;
        };
        let kind = SegmentKind::classify(entry.segment.as_deref());
        let system = ScoringSystem::of(entry);

        match bests.iter_mut().find(|b| b.kind == kind && b.system == system) {
            Some(best) if system.is_better(value, best.value) => {
                best.value = value;
                best.entry = entry.clone();
            }
            Some(_) => {}
            None => bests.push(PersonalBest { kind, system, value, entry: entry.clone() }),
        }
    }

    bests.sort_by_key(|b| (b.kind, b.system == ScoringSystem::SixOh));
    bests
}

/// Personal best for one segment kind; IJS results win over 6.0 results
pub fn personal_best(history: &[SkaterHistoryEntry], kind: SegmentKind) -> Option<PersonalBest> {
    personal_bests(history).into_iter().find(|b| b.kind == kind)
}

/// Highest panel-scored element across every judge sheet
pub fn top_element(history: &[SkaterHistoryEntry]) -> Option<TopElement> {
    let mut top: Option<(&ElementScore, &SkaterHistoryEntry)> = None;
    for entry in history {
        let Some(details) = &entry.judge_details else {
            continue;
        };
        for element in &details.elements {
            if top.map_or(true, |(best, _)| element.total > best.total) {
                top = Some((element, entry));
            }
        }
    }
    top.map(|(element, entry)| TopElement { element: element.clone(), entry: entry.clone() })
}

/// Skate with the highest average element GOE
pub fn highest_mean_goe(history: &[SkaterHistoryEntry]) -> Option<MeanGoe> {
    let mut best: Option<MeanGoe> = None;
    for entry in history {
        let Some(details) = &entry.judge_details else {
            continue;
        };
        if details.elements.is_empty() {
            continue;
        }
        let count = details.elements.len();
        let mean = details.elements.iter().map(|e| e.goe).sum::<f64>() / count as f64;
        if best.as_ref().map_or(true, |b| mean > b.mean_goe) {
            best = Some(MeanGoe { mean_goe: mean, element_count: count, entry: entry.clone() });
        }
    }
    best
}

/// Everything the skater page shows in its stats panel
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkaterStats {
    pub personal_bests: Vec<PersonalBest>,
    pub top_element: Option<TopElement>,
    pub highest_mean_goe: Option<MeanGoe>,
    pub competitions: usize,
    pub podiums: usize,
    pub wins: usize,
}

impl SkaterStats {
    pub fn from_history(history: &[SkaterHistoryEntry]) -> Self {
        let competitions: HashSet<(i32, &str)> = history.iter().map(|e| (e.year, e.ijs_id.as_str())).collect();
        let finals = history
            .iter()
            .filter(|e| SegmentKind::classify(e.segment.as_deref()) == SegmentKind::Total);
        let (podiums, wins) = finals.fold((0, 0), |(podiums, wins), e| match e.placement {
            Some(1) => (podiums + 1, wins + 1),
            Some(2..=3) => (podiums + 1, wins),
            _ => (podiums, wins),
        });

        Self {
            personal_bests: personal_bests(history),
            top_element: top_element(history),
            highest_mean_goe: highest_mean_goe(history),
            competitions: competitions.len(),
            podiums,
            wins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JudgeDetails;

    fn element(code: &str, goe: f64, total: f64) -> ElementScore {
        ElementScore {
            code: code.to_string(),
            info: None,
            base_value: total - goe,
            goe,
            judge_marks: vec![],
            total,
        }
    }

    fn ijs_entry(ijs_id: &str, segment: Option<&str>, segment_score: f64, elements: Vec<ElementScore>) -> SkaterHistoryEntry {
        SkaterHistoryEntry {
            year: 2024,
            ijs_id: ijs_id.to_string(),
            competition_name: format!("Comp {ijs_id}"),
            segment: segment.map(str::to_string),
            segment_score: Some(segment_score),
            judge_details: Some(JudgeDetails { elements, ..Default::default() }),
            ..Default::default()
        }
    }

    fn six_o_final(ijs_id: &str, majority: &str, placement: u32) -> SkaterHistoryEntry {
        SkaterHistoryEntry {
            year: 1998,
            ijs_id: ijs_id.to_string(),
            is_six_o: true,
            majority: Some(majority.to_string()),
            placement: Some(placement),
            ..Default::default()
        }
    }

    #[test]
    fn test_classify_segments() {
        assert_eq!(SegmentKind::classify(None), SegmentKind::Total);
        assert_eq!(SegmentKind::classify(Some("Short Program")), SegmentKind::Short);
        assert_eq!(SegmentKind::classify(Some("Free Skating")), SegmentKind::Free);
        assert_eq!(SegmentKind::classify(Some("Long Program")), SegmentKind::Free);
        assert_eq!(SegmentKind::classify(Some("Rhythm Dance")), SegmentKind::Rhythm);
        assert_eq!(SegmentKind::classify(Some("Pattern Dance")), SegmentKind::Other);
    }

    #[test]
    fn test_personal_bests_per_segment_and_system() {
        let history = vec![
            ijs_entry("1", Some("Short Program"), 61.2, vec![]),
            ijs_entry("2", Some("Short Program"), 66.9, vec![]),
            ijs_entry("2", Some("Free Skate"), 120.4, vec![]),
            six_o_final("9", "5/3", 3),
            six_o_final("10", "4/1", 1),
        ];
        let bests = personal_bests(&history);
        assert_eq!(bests.len(), 3);
        assert_eq!(bests[0].kind, SegmentKind::Total);
        assert_eq!(bests[0].system, ScoringSystem::SixOh);
        assert_eq!(bests[0].value, 1.0);
        assert_eq!(bests[0].entry.ijs_id, "10");
        assert_eq!(bests[1].kind, SegmentKind::Short);
        assert_eq!(bests[1].value, 66.9);
        assert_eq!(bests[2].kind, SegmentKind::Free);
    }

    #[test]
    fn test_personal_best_prefers_ijs() {
        let mut total = ijs_entry("3", None, 0.0, vec![]);
        total.score = Some(190.0);
        let history = vec![six_o_final("9", "4/1", 1), total];
        let best = personal_best(&history, SegmentKind::Total).unwrap();
        assert_eq!(best.system, ScoringSystem::Ijs);
        assert_eq!(best.value, 190.0);

        let only_six_o = vec![six_o_final("9", "4/1", 1)];
        assert_eq!(personal_best(&only_six_o, SegmentKind::Total).unwrap().system, ScoringSystem::SixOh);
        assert!(personal_best(&only_six_o, SegmentKind::Free).is_none());
    }

    #[test]
    fn test_top_element_and_mean_goe() {
        let history = vec![
            ijs_entry("1", Some("Free Skate"), 150.0, vec![element("3A", 1.5, 9.5), element("4S", -2.0, 7.7)]),
            ijs_entry("2", Some("Free Skate"), 155.0, vec![element("3Lz", 1.2, 7.1), element("CCoSp4", 1.1, 4.6)]),
            ijs_entry("3", Some("Short Program"), 70.0, vec![]),
        ];
        let top = top_element(&history).unwrap();
        assert_eq!(top.element.code, "3A");
        assert_eq!(top.entry.ijs_id, "1");

        let goe = highest_mean_goe(&history).unwrap();
        assert_eq!(goe.entry.ijs_id, "2");
        assert!((goe.mean_goe - 1.15).abs() < 1e-9);
        assert_eq!(goe.element_count, 2);
    }

    #[test]
    fn test_empty_history() {
        let stats = SkaterStats::from_history(&[]);
        assert_eq!(stats, SkaterStats::default());
    }

    #[test]
    fn test_stats_counts() {
        let history = vec![
            six_o_final("9", "4/1", 1),
            six_o_final("10", "5/3", 3),
            six_o_final("11", "3/5", 5),
            ijs_entry("11", Some("Short Program"), 50.0, vec![]),
        ];
        let stats = SkaterStats::from_history(&history);
        assert_eq!(stats.competitions, 4);
        assert_eq!(stats.podiums, 2);
        assert_eq!(stats.wins, 1);
    }
}
