//! Scoring Systems
//!
//! Results come from two judging systems with opposite orderings:
//! IJS publishes points (higher wins), 6.0 publishes majority places
//! (lower wins). Everything comparing results goes through here.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::SkaterHistoryEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringSystem {
    Ijs,
    SixOh,
}

impl ScoringSystem {
    pub fn of(entry: &SkaterHistoryEntry) -> Self {
        if entry.is_six_o {
            ScoringSystem::SixOh
        } else {
            ScoringSystem::Ijs
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoringSystem::Ijs => "IJS",
            ScoringSystem::SixOh => "6.0",
        }
    }

    /// Whether `a` beats `b` under this system
    pub fn is_better(&self, a: f64, b: f64) -> bool {
        match self {
            ScoringSystem::Ijs => a > b,
            ScoringSystem::SixOh => a < b,
        }
    }

    /// Ordering with the better value first
    pub fn rank(&self, a: f64, b: f64) -> Ordering {
        let natural = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            ScoringSystem::Ijs => natural.reverse(),
            ScoringSystem::SixOh => natural,
        }
    }
}

/// Place from 6.0 majority notation: "4/1" → 1, "2" → 2
pub fn parse_majority(majority: &str) -> Option<u32> {
    let place = match majority.split_once('/') {
        Some((_, place)) => place,
        None => majority,
    };
    place.trim().parse().ok()
}

/// The value results are compared by, or `None` when the row carries no score.
///
/// 6.0 rows use the majority place. IJS rows prefer the segment score and
/// fall back to the event score when the segment score is missing or zero.
pub fn effective_score(entry: &SkaterHistoryEntry) -> Option<f64> {
    match ScoringSystem::of(entry) {
        ScoringSystem::SixOh => entry.majority.as_deref().and_then(parse_majority).map(f64::from),
        ScoringSystem::Ijs => match entry.segment_score {
            Some(segment) if segment > 0.0 => Some(segment),
            _ => entry.score,
        },
    }
}

/// Whether entry `a` beats entry `b`; entries from different systems never compare
pub fn is_better(a: &SkaterHistoryEntry, b: &SkaterHistoryEntry) -> bool {
    let system = ScoringSystem::of(a);
    if system != ScoringSystem::of(b) {
        return false;
    }
    match (effective_score(a), effective_score(b)) {
        (Some(x), Some(y)) => system.is_better(x, y),
        (Some(_), None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six_o(majority: &str) -> SkaterHistoryEntry {
        SkaterHistoryEntry {
            is_six_o: true,
            majority: Some(majority.to_string()),
            ..Default::default()
        }
    }

    fn ijs(score: Option<f64>, segment: Option<f64>) -> SkaterHistoryEntry {
        SkaterHistoryEntry { score, segment_score: segment, ..Default::default() }
    }

    #[test]
    fn test_parse_majority() {
        assert_eq!(parse_majority("4/1"), Some(1));
        assert_eq!(parse_majority("5/3"), Some(3));
        assert_eq!(parse_majority(" 2 "), Some(2));
        assert_eq!(parse_majority("x/y"), None);
        assert_eq!(parse_majority(""), None);
    }

    #[test]
    fn test_effective_score_six_o_uses_majority_place() {
        assert_eq!(effective_score(&six_o("4/1")), Some(1.0));
    }

    #[test]
    fn test_effective_score_ijs_prefers_segment_score() {
        assert_eq!(effective_score(&ijs(Some(200.0), Some(72.5))), Some(72.5));
        assert_eq!(effective_score(&ijs(Some(200.0), Some(0.0))), Some(200.0));
        assert_eq!(effective_score(&ijs(Some(200.0), None)), Some(200.0));
        assert_eq!(effective_score(&ijs(None, None)), None);
    }

    #[test]
    fn test_is_better_respects_direction() {
        assert!(is_better(&six_o("5/1"), &six_o("3/2")));
        assert!(!is_better(&six_o("3/2"), &six_o("5/1")));
        assert!(is_better(&ijs(None, Some(80.0)), &ijs(None, Some(70.0))));
        assert!(!is_better(&ijs(None, Some(80.0)), &six_o("5/1")));
    }

    #[test]
    fn test_rank_puts_better_first() {
        let mut ijs_scores = vec![60.0, 80.0, 70.0];
        ijs_scores.sort_by(|a, b| ScoringSystem::Ijs.rank(*a, *b));
        assert_eq!(ijs_scores, vec![80.0, 70.0, 60.0]);

        let mut places = vec![3.0, 1.0, 2.0];
        places.sort_by(|a, b| ScoringSystem::SixOh.rank(*a, *b));
        assert_eq!(places, vec![1.0, 2.0, 3.0]);
    }
}
