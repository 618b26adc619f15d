//! Timezone Abbreviations
//!
//! Organizers publish times as "EST" or "CET"; calendar services want IANA
//! zone names.

/// (abbreviation, IANA zone)
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("EST", "America/New_York"),
    ("EDT", "America/New_York"),
    ("ET", "America/New_York"),
    ("CST", "America/Chicago"),
    ("CDT", "America/Chicago"),
    ("CT", "America/Chicago"),
    ("MST", "America/Denver"),
    ("MDT", "America/Denver"),
    ("MT", "America/Denver"),
    ("PST", "America/Los_Angeles"),
    ("PDT", "America/Los_Angeles"),
    ("PT", "America/Los_Angeles"),
    ("AKST", "America/Anchorage"),
    ("AKDT", "America/Anchorage"),
    ("HST", "Pacific/Honolulu"),
    ("AST", "America/Halifax"),
    ("ADT", "America/Halifax"),
    ("NST", "America/St_Johns"),
    ("NDT", "America/St_Johns"),
    ("UTC", "UTC"),
    ("GMT", "Europe/London"),
    ("BST", "Europe/London"),
    ("WET", "Europe/Lisbon"),
    ("WEST", "Europe/Lisbon"),
    ("CET", "Europe/Paris"),
    ("CEST", "Europe/Paris"),
    ("EET", "Europe/Helsinki"),
    ("EEST", "Europe/Helsinki"),
    ("MSK", "Europe/Moscow"),
    ("JST", "Asia/Tokyo"),
    ("KST", "Asia/Seoul"),
    ("AEST", "Australia/Sydney"),
    ("AEDT", "Australia/Sydney"),
    ("NZST", "Pacific/Auckland"),
    ("NZDT", "Pacific/Auckland"),
];

/// Map a zone abbreviation to its IANA name; anything unknown (including
/// values that already are IANA names) is returned unchanged.
pub fn convert_to_iana_timezone(zone: &str) -> String {
    let key = zone.trim();
    ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(key))
        .map(|(_, iana)| iana.to_string())
        .unwrap_or_else(|| zone.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_abbreviations() {
        assert_eq!(convert_to_iana_timezone("EST"), "America/New_York");
        assert_eq!(convert_to_iana_timezone(" pdt "), "America/Los_Angeles");
        assert_eq!(convert_to_iana_timezone("CEST"), "Europe/Paris");
    }

    #[test]
    fn test_unknown_passes_through() {
        assert_eq!(convert_to_iana_timezone("Asia/Shanghai"), "Asia/Shanghai");
        assert_eq!(convert_to_iana_timezone("XYZ"), "XYZ");
        assert_eq!(convert_to_iana_timezone(""), "");
    }
}
