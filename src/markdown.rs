//! Bio Markdown
//!
//! Renders profile bios with pulldown-cmark plus:
//! - Color syntax: %r%red%r%. Both markers must sit in the same run of
//!   plain text; emphasis, code or inline HTML between them leaves the
//!   markers literal.
//! - Raw HTML shown as text, never injected
//! - Links and images limited to http(s) and mailto targets

use pulldown_cmark::{html::push_html, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd};

/// Color codes and their hex values
const COLORS: &[(&str, &str)] = &[
    ("r", "#e74c3c"), // red
    ("g", "#27ae60"), // green
    ("b", "#3498db"), // blue
    ("y", "#f1c40f"), // yellow
    ("o", "#e67e22"), // orange
    ("p", "#9b59b6"), // purple
];

/// Render a bio to HTML that is safe to set as `inner_html`
pub fn render_bio(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH);
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    // depth of a dropped link or image whose children are kept as plain text
    let mut unwrapped: Vec<bool> = Vec::new();

    for event in parser {
        match event {
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),

            Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                if link_type == LinkType::Email || is_safe_url(&dest_url) {
                    events.push(Event::Start(Tag::Link { link_type, dest_url, title, id }));
                    unwrapped.push(false);
                } else {
                    unwrapped.push(true);
                }
            }
            Event::End(TagEnd::Link) => {
                if unwrapped.pop() == Some(false) {
                    events.push(Event::End(TagEnd::Link));
                }
            }

            Event::Start(Tag::Image { dest_url, .. }) => {
                if dest_url.starts_with("https://") {
                    let html = format!(
                        r#"<img src="{}" class="bio-image" loading="lazy" alt="" />"#,
                        escape_html(&dest_url)
                    );
                    events.push(Event::Html(CowStr::from(html)));
                }
                // alt text is dropped either way
                unwrapped.push(true);
                events.push(Event::Html(CowStr::from("<!--alt-->")));
            }
            Event::End(TagEnd::Image) => {
                unwrapped.pop();
                events.push(Event::Html(CowStr::from("<!--/alt-->")));
            }

            Event::Text(text) if contains_color(&text) => events.extend(process_colors(&text)),

            other => events.push(other),
        }
    }

    strip_alt_text(events)
}

/// Remove everything between the alt markers emitted for images
fn strip_alt_text(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out = Vec::with_capacity(events.len());
    let mut inside = 0usize;
    for event in events {
        match &event {
            Event::Html(h) if h.as_ref() == "<!--alt-->" => inside += 1,
            Event::Html(h) if h.as_ref() == "<!--/alt-->" => inside = inside.saturating_sub(1),
            _ if inside > 0 => {}
            _ => out.push(event),
        }
    }
    out
}

fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://") || lower.starts_with("mailto:")
}

fn contains_color(text: &str) -> bool {
    COLORS.iter().any(|(code, _)| text.contains(&format!("%{code}%")))
}

/// Split text on color markers; unmatched markers stay literal
fn process_colors(text: &str) -> Vec<Event<'static>> {
    let mut events = Vec::new();
    let mut remaining = text.to_string();

    while !remaining.is_empty() {
        let earliest = COLORS
            .iter()
            .filter_map(|(code, color)| {
                let pattern = format!("%{code}%");
                remaining.find(&pattern).map(|pos| (pos, pattern, *color))
            })
            .min_by_key(|(pos, _, _)| *pos);

        let Some((pos, pattern, color)) = earliest else {
            events.push(Event::Text(CowStr::from(remaining)));
            break;
        };

        if pos > 0 {
            events.push(Event::Text(CowStr::from(remaining[..pos].to_string())));
        }
        remaining = remaining[pos + pattern.len()..].to_string();
        match remaining.find(&pattern) {
            Some(end) => {
                events.push(Event::Html(CowStr::from(format!("<span style=\"color: {color}\">"))));
                if end > 0 {
                    events.push(Event::Text(CowStr::from(remaining[..end].to_string())));
                }
                events.push(Event::Html(CowStr::from("</span>")));
                remaining = remaining[end + pattern.len()..].to_string();
            }
            None => events.push(Event::Text(CowStr::from(pattern))),
        }
    }
    events
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        assert_eq!(render_bio("**Novice** skater"), "<p><strong>Novice</strong> skater</p>\n");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_bio("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_unsafe_links_are_unwrapped() {
        let html = render_bio("[click](javascript:alert(1)) and [rink](https://rink.example.org)");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("click"));
        assert!(html.contains(r#"<a href="https://rink.example.org">rink</a>"#));
    }

    #[test]
    fn test_images_drop_alt_text() {
        let html = render_bio("![me on ice](https://cdn.example.org/me.jpg)");
        assert!(html.contains(r#"<img src="https://cdn.example.org/me.jpg""#));
        assert!(!html.contains("me on ice"));
        assert!(!html.contains("<!--"));

        let html = render_bio("![x](http://insecure.example.org/x.png)");
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_colors() {
        let html = render_bio("Go %b%Team Blue%b%!");
        assert_eq!(html, "<p>Go <span style=\"color: #3498db\">Team Blue</span>!</p>\n");
        assert_eq!(render_bio("50%r% off"), "<p>50%r% off</p>\n");
    }

    #[test]
    fn test_colors_do_not_span_formatting() {
        let html = render_bio("%b%Team *Blue*%b%");
        assert!(!html.contains("<span"));
        assert!(html.contains("%b%Team <em>Blue</em>%b%"));
    }
}
