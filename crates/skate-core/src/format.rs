//! Display Formatting

use chrono::{Datelike, NaiveDate};

use crate::models::SkaterHistoryEntry;
use crate::scoring::{effective_score, ScoringSystem};

/// Points with two decimals, "–" when absent
pub fn format_score(score: Option<f64>) -> String {
    score.map(|s| format!("{s:.2}")).unwrap_or_else(|| "–".to_string())
}

/// Signed GOE / deduction value
pub fn format_signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.2}")
    } else {
        format!("{value:.2}")
    }
}

pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// "Nov 7 – 10, 2024", "Dec 30, 2023 – Jan 2, 2024", single days collapse
pub fn format_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (start, end) {
        (None, None) => String::new(),
        (Some(day), None) | (None, Some(day)) => day.format("%b %-d, %Y").to_string(),
        (Some(start), Some(end)) if end <= start => start.format("%b %-d, %Y").to_string(),
        (Some(start), Some(end)) if start.year() != end.year() => {
            format!("{} – {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
        }
        (Some(start), Some(end)) if start.month() != end.month() => {
            format!("{} – {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
        }
        (Some(start), Some(end)) => format!("{} – {}", start.format("%b %-d"), end.format("%-d, %Y")),
    }
}

/// Result cell for a history row: points for IJS, majority for 6.0
pub fn format_result(entry: &SkaterHistoryEntry) -> String {
    match ScoringSystem::of(entry) {
        ScoringSystem::SixOh => entry.majority.clone().unwrap_or_else(|| "–".to_string()),
        ScoringSystem::Ijs => format_score(effective_score(entry)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, day)
    }

    #[test]
    fn test_scores() {
        assert_eq!(format_score(Some(72.456)), "72.46");
        assert_eq!(format_score(None), "–");
        assert_eq!(format_signed(1.5), "+1.50");
        assert_eq!(format_signed(-0.42), "-0.42");
        assert_eq!(format_signed(0.0), "0.00");
    }

    #[test]
    fn test_ordinals() {
        let got: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 102, 111].iter().map(|n| ordinal(*n)).collect();
        assert_eq!(got, ["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "102nd", "111th"]);
    }

    #[test]
    fn test_date_ranges() {
        assert_eq!(format_date_range(d(2024, 11, 7), d(2024, 11, 10)), "Nov 7 – 10, 2024");
        assert_eq!(format_date_range(d(2024, 10, 30), d(2024, 11, 2)), "Oct 30 – Nov 2, 2024");
        assert_eq!(format_date_range(d(2023, 12, 30), d(2024, 1, 2)), "Dec 30, 2023 – Jan 2, 2024");
        assert_eq!(format_date_range(d(2024, 11, 7), d(2024, 11, 7)), "Nov 7, 2024");
        assert_eq!(format_date_range(d(2024, 11, 7), None), "Nov 7, 2024");
        assert_eq!(format_date_range(None, None), "");
    }

    #[test]
    fn test_result_cell() {
        let six_o = SkaterHistoryEntry { is_six_o: true, majority: Some("4/1".into()), ..Default::default() };
        assert_eq!(format_result(&six_o), "4/1");
        let ijs = SkaterHistoryEntry { score: Some(180.0), ..Default::default() };
        assert_eq!(format_result(&ijs), "180.00");
    }
}
