//! User, Auth and Profile Models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

/// Google Identity Services credential posted for token exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleCredential {
    pub credential: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Public profile page payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user: User,
    #[serde(default)]
    pub customization: ProfileCustomization,
    #[serde(default)]
    pub tossies_received: u32,
    #[serde(default)]
    pub favorite_skater_id: Option<u64>,
}

/// Display preferences; every field is optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileCustomization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub social_links: SocialLinks,
    pub map_pins: Vec<MapPin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl SocialLinks {
    /// (label, href) pairs for the filled-in links
    pub fn hrefs(&self) -> Vec<(&'static str, String)> {
        let mut links = Vec::new();
        if let Some(h) = &self.instagram {
            links.push(("Instagram", format!("https://instagram.com/{}", h.trim_start_matches('@'))));
        }
        if let Some(h) = &self.twitter {
            links.push(("X", format!("https://x.com/{}", h.trim_start_matches('@'))));
        }
        if let Some(h) = &self.tiktok {
            links.push(("TikTok", format!("https://www.tiktok.com/@{}", h.trim_start_matches('@'))));
        }
        if let Some(h) = &self.youtube {
            links.push(("YouTube", format!("https://www.youtube.com/@{}", h.trim_start_matches('@'))));
        }
        if let Some(url) = &self.website {
            links.push(("Website", url.clone()));
        }
        links
    }
}

/// A pinned place (home rink, favorite venue)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPin {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl MapPin {
    pub fn osm_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={lat:.5}&mlon={lon:.5}#map=14/{lat:.5}/{lon:.5}",
            lat = self.latitude,
            lon = self.longitude
        )
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub page: String,
    pub user_agent: String,
    /// Recent client log lines for diagnosis
    pub logs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customization_round_trip_omits_empty_fields() {
        let custom = ProfileCustomization {
            primary_color: Some("#1e90ff".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&custom).unwrap();
        assert_eq!(json["primaryColor"], "#1e90ff");
        assert!(json.get("bio").is_none());
        let back: ProfileCustomization = serde_json::from_value(json).unwrap();
        assert_eq!(back, custom);
    }

    #[test]
    fn test_social_hrefs_strip_at() {
        let links = SocialLinks {
            instagram: Some("@skater".into()),
            website: Some("https://example.org".into()),
            ..Default::default()
        };
        let hrefs = links.hrefs();
        assert_eq!(hrefs[0], ("Instagram", "https://instagram.com/skater".to_string()));
        assert_eq!(hrefs[1].0, "Website");
    }

    #[test]
    fn test_user_label_falls_back_to_username() {
        let user = User { id: 1, username: "axel".into(), display_name: None, avatar_url: None };
        assert_eq!(user.label(), "axel");
    }
}
