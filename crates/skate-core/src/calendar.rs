//! Calendar Links
//!
//! "Add to calendar" for competitions (all-day, multi-day) and scheduled
//! segments (timed, in the competition's zone): Google and Outlook
//! template links plus a downloadable iCalendar document.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{Competition, EventSummary, SegmentSummary};
use crate::timezones::convert_to_iana_timezone;

/// RFC 3986 unreserved characters stay readable
const QUERY: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

const ICS_LINE_LIMIT: usize = 75;

#[derive(Debug, Clone, PartialEq)]
pub enum CalendarTime {
    /// Whole day; as an end bound the day is inclusive
    AllDay(NaiveDate),
    /// Wall-clock time in an IANA zone (floating when `None`)
    Local { at: NaiveDateTime, timezone: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: CalendarTime,
    pub end: CalendarTime,
}

impl CalendarEvent {
    /// All-day event spanning the competition dates; `None` without a start date
    pub fn for_competition(competition: &Competition, page_url: Option<&str>) -> Option<Self> {
        let start = competition.start_date?;
        let end = competition.end_date.filter(|end| *end >= start).unwrap_or(start);
        Some(Self {
            title: competition.name.clone(),
            description: page_url.map(|url| format!("Results: {url}")),
            location: competition_location(competition),
            start: CalendarTime::AllDay(start),
            end: CalendarTime::AllDay(end),
        })
    }

    /// Timed event for one scheduled segment
    pub fn for_segment(
        competition: &Competition,
        event: &EventSummary,
        segment: &SegmentSummary,
        length: Duration,
    ) -> Option<Self> {
        let at = segment.start_time?;
        let timezone = competition.timezone.as_deref().map(convert_to_iana_timezone);
        Some(Self {
            title: format!("{}: {} ({})", event.name, segment.name, competition.name),
            description: None,
            location: competition_location(competition),
            start: CalendarTime::Local { at, timezone: timezone.clone() },
            end: CalendarTime::Local { at: at + length, timezone },
        })
    }

    fn timezone(&self) -> Option<&str> {
        match &self.start {
            CalendarTime::Local { timezone, .. } => timezone.as_deref(),
            CalendarTime::AllDay(_) => None,
        }
    }
}

fn competition_location(competition: &Competition) -> Option<String> {
    match (&competition.venue, &competition.location) {
        (Some(venue), Some(location)) => Some(format!("{venue}, {location}")),
        (Some(one), None) | (None, Some(one)) => Some(one.clone()),
        (None, None) => None,
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY).to_string()
}

/// Compact form used by Google and iCalendar; all-day ends become exclusive
fn compact(time: &CalendarTime, is_end: bool) -> String {
    match time {
        CalendarTime::AllDay(date) => {
            let date = if is_end { *date + Duration::days(1) } else { *date };
            date.format("%Y%m%d").to_string()
        }
        CalendarTime::Local { at, .. } => at.format("%Y%m%dT%H%M%S").to_string(),
    }
}

pub fn google_calendar_url(event: &CalendarEvent) -> String {
    let mut url = format!(
        "https://calendar.google.com/calendar/render?action=TEMPLATE&text={}&dates={}/{}",
        encode(&event.title),
        compact(&event.start, false),
        compact(&event.end, true)
    );
    if let Some(details) = &event.description {
        url.push_str(&format!("&details={}", encode(details)));
    }
    if let Some(location) = &event.location {
        url.push_str(&format!("&location={}", encode(location)));
    }
    if let Some(tz) = event.timezone() {
        url.push_str(&format!("&ctz={}", encode(tz)));
    }
    url
}

pub fn outlook_calendar_url(event: &CalendarEvent) -> String {
    let (start, end, all_day) = match (&event.start, &event.end) {
        (CalendarTime::AllDay(start), CalendarTime::AllDay(end)) => (
            start.format("%Y-%m-%d").to_string(),
            (*end + Duration::days(1)).format("%Y-%m-%d").to_string(),
            true,
        ),
        _ => (iso_local(&event.start), iso_local(&event.end), false),
    };
    let mut url = format!(
        "https://outlook.live.com/calendar/0/deeplink/compose?path=%2Fcalendar%2Faction%2Fcompose&rru=addevent&subject={}&startdt={}&enddt={}",
        encode(&event.title),
        encode(&start),
        encode(&end)
    );
    if all_day {
        url.push_str("&allday=true");
    }
    if let Some(body) = &event.description {
        url.push_str(&format!("&body={}", encode(body)));
    }
    if let Some(location) = &event.location {
        url.push_str(&format!("&location={}", encode(location)));
    }
    url
}

fn iso_local(time: &CalendarTime) -> String {
    match time {
        CalendarTime::AllDay(date) => date.format("%Y-%m-%d").to_string(),
        CalendarTime::Local { at, .. } => at.format("%Y-%m-%dT%H:%M:%S").to_string(),
    }
}

/// RFC 5545 document with a single VEVENT
pub fn ics_document(event: &CalendarEvent, uid: &str, now: DateTime<Utc>) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//skate-ui//results browser//EN".to_string(),
        "CALSCALE:GREGORIAN".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{uid}"),
        format!("DTSTAMP:{}", now.format("%Y%m%dT%H%M%SZ")),
        ics_time("DTSTART", &event.start, false),
        ics_time("DTEND", &event.end, true),
        format!("SUMMARY:{}", ics_escape(&event.title)),
    ];
    if let Some(description) = &event.description {
        lines.push(format!("DESCRIPTION:{}", ics_escape(description)));
    }
    if let Some(location) = &event.location {
        lines.push(format!("LOCATION:{}", ics_escape(location)));
    }
    lines.push("END:VEVENT".to_string());
    lines.push("END:VCALENDAR".to_string());

    lines.iter().map(|line| fold_line(line)).collect::<Vec<_>>().join("\r\n") + "\r\n"
}

/// `data:` URL suitable for an `<a download>` link
pub fn ics_data_url(event: &CalendarEvent, uid: &str, now: DateTime<Utc>) -> String {
    format!(
        "data:text/calendar;charset=utf-8,{}",
        utf8_percent_encode(&ics_document(event, uid, now), NON_ALPHANUMERIC)
    )
}

fn ics_time(name: &str, time: &CalendarTime, is_end: bool) -> String {
    match time {
        CalendarTime::AllDay(_) => format!("{name};VALUE=DATE:{}", compact(time, is_end)),
        CalendarTime::Local { timezone: Some(tz), .. } => format!("{name};TZID={tz}:{}", compact(time, is_end)),
        CalendarTime::Local { timezone: None, .. } => format!("{name}:{}", compact(time, is_end)),
    }
}

fn ics_escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace("\r\n", "\\n")
        .replace('\n', "\\n")
}

/// Fold content lines longer than 75 octets, never splitting a UTF-8 sequence
fn fold_line(line: &str) -> String {
    if line.len() <= ICS_LINE_LIMIT {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + line.len() / ICS_LINE_LIMIT * 3);
    let mut current = 0;
    for ch in line.chars() {
        // continuation lines start with a space, which counts toward the limit
        if current + ch.len_utf8() > ICS_LINE_LIMIT {
            out.push_str("\r\n ");
            current = 1;
        }
        out.push(ch);
        current += ch.len_utf8();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn competition() -> Competition {
        serde_json::from_value(serde_json::json!({
            "year": 2024,
            "ijsId": "35",
            "name": "Eastern Sectional Singles Final",
            "startDate": "2024-11-07",
            "endDate": "2024-11-10",
            "venue": "Ice Vault",
            "location": "Wayne, NJ",
            "timezone": "EST",
            "events": [{"eventId": "7", "name": "Senior Women", "segments": [
                {"name": "Short Program", "startTime": "2024-11-08T14:30:00"}
            ]}]
        }))
        .unwrap()
    }

    #[test]
    fn test_competition_event_google_link() {
        let event = CalendarEvent::for_competition(&competition(), None).unwrap();
        let url = google_calendar_url(&event);
        assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE"));
        assert!(url.contains("text=Eastern%20Sectional%20Singles%20Final"));
        assert!(url.contains("dates=20241107/20241111"));
        assert!(url.contains("location=Ice%20Vault%2C%20Wayne%2C%20NJ"));
        assert!(!url.contains("ctz="));
    }

    #[test]
    fn test_segment_event_uses_iana_zone() {
        let comp = competition();
        let ev = &comp.events[0];
        let event = CalendarEvent::for_segment(&comp, ev, &ev.segments[0], Duration::hours(2)).unwrap();
        let url = google_calendar_url(&event);
        assert!(url.contains("dates=20241108T143000/20241108T163000"));
        assert!(url.contains("ctz=America%2FNew_York"));

        let outlook = outlook_calendar_url(&event);
        assert!(outlook.contains("startdt=2024-11-08T14%3A30%3A00"));
        assert!(!outlook.contains("allday"));
    }

    #[test]
    fn test_outlook_all_day_end_is_exclusive() {
        let event = CalendarEvent::for_competition(&competition(), None).unwrap();
        let url = outlook_calendar_url(&event);
        assert!(url.contains("startdt=2024-11-07&enddt=2024-11-11&allday=true"));
    }

    #[test]
    fn test_missing_start_date() {
        let mut comp = competition();
        comp.start_date = None;
        assert!(CalendarEvent::for_competition(&comp, None).is_none());
    }

    #[test]
    fn test_end_before_start_collapses_to_single_day() {
        let mut comp = competition();
        comp.end_date = NaiveDate::from_ymd_opt(2024, 11, 1);
        let event = CalendarEvent::for_competition(&comp, None).unwrap();
        assert_eq!(event.end, CalendarTime::AllDay(NaiveDate::from_ymd_opt(2024, 11, 7).unwrap()));
    }

    #[test]
    fn test_ics_document() {
        let event = CalendarEvent::for_competition(&competition(), Some("https://skate.example/competitions/2024/35")).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 10, 1, 9, 0, 0).unwrap();
        let ics = ics_document(&event, "2024-35@skate", now);
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert!(ics.contains("DTSTAMP:20241001T090000Z\r\n"));
        assert!(ics.contains("DTSTART;VALUE=DATE:20241107\r\n"));
        assert!(ics.contains("DTEND;VALUE=DATE:20241111\r\n"));
        assert!(ics.contains("LOCATION:Ice Vault\\, Wayne\\, NJ\r\n"));
        assert!(ics.split("\r\n").all(|line| line.len() <= ICS_LINE_LIMIT));

        let data_url = ics_data_url(&event, "2024-35@skate", now);
        assert!(data_url.starts_with("data:text/calendar;charset=utf-8,BEGIN%3AVCALENDAR"));
    }

    #[test]
    fn test_fold_line_respects_char_boundaries() {
        let long = format!("SUMMARY:{}", "é".repeat(60));
        let folded = fold_line(&long);
        for part in folded.split("\r\n") {
            assert!(part.len() <= ICS_LINE_LIMIT);
        }
        assert_eq!(folded.replace("\r\n ", ""), long);
    }
}
