//! Profile Customization Checks
//!
//! Mirrors the form constraints of the profile editor so invalid input is
//! caught before it reaches the API.

use thiserror::Error;

use crate::models::{MapPin, ProfileCustomization, SocialLinks};

pub const MAX_BIO_CHARS: usize = 500;
pub const MAX_MAP_PINS: usize = 20;
pub const MAX_PIN_LABEL_CHARS: usize = 60;
const MAX_HANDLE_CHARS: usize = 30;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileFieldError {
    #[error("{field} must be a hex color like #1e90ff")]
    InvalidColor { field: &'static str },

    #[error("bio is {len} characters; the limit is {}", MAX_BIO_CHARS)]
    BioTooLong { len: usize },

    #[error("{network} handle may only contain letters, digits, dots and underscores (max {})", MAX_HANDLE_CHARS)]
    InvalidHandle { network: &'static str },

    #[error("website must be an https:// link")]
    InsecureWebsite,

    #[error("at most {} map pins are allowed", MAX_MAP_PINS)]
    TooManyPins,

    #[error("map pin {index} needs a label of 1 to {} characters", MAX_PIN_LABEL_CHARS)]
    InvalidPinLabel { index: usize },

    #[error("map pin {index} has coordinates outside the globe")]
    InvalidPinCoordinates { index: usize },
}

/// Every problem in the customization, in form order
pub fn validate_customization(custom: &ProfileCustomization) -> Vec<ProfileFieldError> {
    let mut errors = Vec::new();

    for (field, value) in [("primary color", &custom.primary_color), ("accent color", &custom.accent_color)] {
        if value.as_deref().is_some_and(|c| !is_hex_color(c)) {
            errors.push(ProfileFieldError::InvalidColor { field });
        }
    }

    if let Some(bio) = &custom.bio {
        let len = bio.chars().count();
        if len > MAX_BIO_CHARS {
            errors.push(ProfileFieldError::BioTooLong { len });
        }
    }

    validate_social(&custom.social_links, &mut errors);
    validate_pins(&custom.map_pins, &mut errors);
    errors
}

pub fn is_hex_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

fn is_valid_handle(handle: &str) -> bool {
    let handle = handle.strip_prefix('@').unwrap_or(handle);
    (1..=MAX_HANDLE_CHARS).contains(&handle.len())
        && handle.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
}

fn validate_social(links: &SocialLinks, errors: &mut Vec<ProfileFieldError>) {
    let handles = [
        ("Instagram", &links.instagram),
        ("X", &links.twitter),
        ("TikTok", &links.tiktok),
        ("YouTube", &links.youtube),
    ];
    for (network, handle) in handles {
        if handle.as_deref().is_some_and(|h| !is_valid_handle(h)) {
            errors.push(ProfileFieldError::InvalidHandle { network });
        }
    }
    if links.website.as_deref().is_some_and(|w| !w.starts_with("https://") || w.len() <= "https://".len()) {
        errors.push(ProfileFieldError::InsecureWebsite);
    }
}

fn validate_pins(pins: &[MapPin], errors: &mut Vec<ProfileFieldError>) {
    if pins.len() > MAX_MAP_PINS {
        errors.push(ProfileFieldError::TooManyPins);
    }
    for (index, pin) in pins.iter().enumerate() {
        let label_len = pin.label.trim().chars().count();
        if label_len == 0 || label_len > MAX_PIN_LABEL_CHARS {
            errors.push(ProfileFieldError::InvalidPinLabel { index: index + 1 });
        }
        if !(-90.0..=90.0).contains(&pin.latitude) || !(-180.0..=180.0).contains(&pin.longitude) {
            errors.push(ProfileFieldError::InvalidPinCoordinates { index: index + 1 });
        }
    }
}

impl ProfileCustomization {
    /// Trimmed copy with blanks cleared and handle `@` prefixes removed
    pub fn normalized(&self) -> Self {
        fn clean(value: &Option<String>) -> Option<String> {
            value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
        }
        // exactly one leading `@`; anything else is left for validation to reject
        fn handle(value: &Option<String>) -> Option<String> {
            clean(value).map(|h| match h.strip_prefix('@') {
                Some(rest) if !rest.starts_with('@') => rest.to_string(),
                _ => h.clone(),
            })
        }

        Self {
            primary_color: clean(&self.primary_color).map(|c| c.to_ascii_lowercase()),
            accent_color: clean(&self.accent_color).map(|c| c.to_ascii_lowercase()),
            avatar_url: clean(&self.avatar_url),
            banner_url: clean(&self.banner_url),
            bio: clean(&self.bio),
            social_links: SocialLinks {
                instagram: handle(&self.social_links.instagram),
                twitter: handle(&self.social_links.twitter),
                tiktok: handle(&self.social_links.tiktok),
                youtube: handle(&self.social_links.youtube),
                website: clean(&self.social_links.website),
            },
            map_pins: self
                .map_pins
                .iter()
                .map(|pin| MapPin { label: pin.label.trim().to_string(), ..pin.clone() })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(label: &str, latitude: f64, longitude: f64) -> MapPin {
        MapPin { label: label.to_string(), latitude, longitude }
    }

    #[test]
    fn test_empty_customization_is_valid() {
        assert!(validate_customization(&ProfileCustomization::default()).is_empty());
    }

    #[test]
    fn test_hex_colors() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#1E90ff"));
        assert!(!is_hex_color("1e90ff"));
        assert!(!is_hex_color("#12345"));
        assert!(!is_hex_color("#ggg"));
    }

    #[test]
    fn test_collects_every_error() {
        let custom = ProfileCustomization {
            primary_color: Some("blue".into()),
            bio: Some("x".repeat(MAX_BIO_CHARS + 1)),
            social_links: SocialLinks {
                instagram: Some("@ok_handle".into()),
                tiktok: Some("bad handle!".into()),
                website: Some("http://example.org".into()),
                ..Default::default()
            },
            map_pins: vec![pin("Home rink", 40.7, -74.0), pin("  ", 10.0, 10.0), pin("Moon", 95.0, 0.0)],
            ..Default::default()
        };
        let errors = validate_customization(&custom);
        assert_eq!(
            errors,
            vec![
                ProfileFieldError::InvalidColor { field: "primary color" },
                ProfileFieldError::BioTooLong { len: MAX_BIO_CHARS + 1 },
                ProfileFieldError::InvalidHandle { network: "TikTok" },
                ProfileFieldError::InsecureWebsite,
                ProfileFieldError::InvalidPinLabel { index: 2 },
                ProfileFieldError::InvalidPinCoordinates { index: 3 },
            ]
        );
    }

    #[test]
    fn test_normalized_strips_only_one_at_sign() {
        let custom = ProfileCustomization {
            social_links: SocialLinks {
                instagram: Some("@@x".into()),
                twitter: Some(" @skater.one ".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let normalized = custom.normalized();
        assert_eq!(normalized.social_links.instagram.as_deref(), Some("@@x"));
        assert_eq!(normalized.social_links.twitter.as_deref(), Some("skater.one"));
        assert_eq!(
            validate_customization(&normalized),
            vec![ProfileFieldError::InvalidHandle { network: "Instagram" }]
        );
    }

    #[test]
    fn test_too_many_pins() {
        let custom = ProfileCustomization {
            map_pins: (0..=MAX_MAP_PINS).map(|i| pin(&format!("Rink {i}"), 0.0, 0.0)).collect(),
            ..Default::default()
        };
        assert_eq!(validate_customization(&custom), vec![ProfileFieldError::TooManyPins]);
    }

    #[test]
    fn test_normalized_clears_blanks() {
        let custom = ProfileCustomization {
            primary_color: Some(" #ABCDEF ".into()),
            bio: Some("   ".into()),
            social_links: SocialLinks { instagram: Some(" @skater ".into()), ..Default::default() },
            ..Default::default()
        };
        let normalized = custom.normalized();
        assert_eq!(normalized.primary_color.as_deref(), Some("#abcdef"));
        assert!(normalized.bio.is_none());
        assert_eq!(normalized.social_links.instagram.as_deref(), Some("skater"));
    }
}
