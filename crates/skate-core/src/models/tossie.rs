//! Tossie Receipt Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tossies::TossieType;

/// A received gift; `tossie_type` stays empty until the recipient opens it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TossieReceipt {
    pub id: u64,
    #[serde(default)]
    pub sender_username: Option<String>,
    #[serde(default)]
    pub sender_display_name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tossie_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub opened_at: Option<DateTime<Utc>>,
}

impl TossieReceipt {
    pub fn is_opened(&self) -> bool {
        self.tossie_type.is_some()
    }

    /// Catalog entry for the stored slug; unknown slugs from newer clients read as `None`
    pub fn tossie_kind(&self) -> Option<TossieType> {
        self.tossie_type.as_deref().and_then(TossieType::from_slug)
    }

    pub fn sender_label(&self) -> &str {
        self.sender_display_name
            .as_deref()
            .or(self.sender_username.as_deref())
            .unwrap_or("Anonymous")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTossieRequest {
    pub recipient_username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenTossieRequest {
    pub tossie_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unopened_receipt() {
        let receipt: TossieReceipt =
            serde_json::from_str(r#"{"id": 3, "senderUsername": "rinkrat", "createdAt": "2024-02-01T10:00:00Z"}"#).unwrap();
        assert!(!receipt.is_opened());
        assert!(receipt.tossie_kind().is_none());
        assert_eq!(receipt.sender_label(), "rinkrat");
    }

    #[test]
    fn test_opened_receipt_maps_to_catalog() {
        let receipt: TossieReceipt = serde_json::from_str(r#"{"id": 3, "tossieType": "ice_crown"}"#).unwrap();
        assert!(receipt.is_opened());
        assert_eq!(receipt.tossie_kind(), Some(TossieType::IceCrown));
        assert_eq!(receipt.sender_label(), "Anonymous");
    }

    #[test]
    fn test_open_request_wire_name() {
        let body = serde_json::to_value(OpenTossieRequest { tossie_type: "rose".into() }).unwrap();
        assert_eq!(body["tossieType"], "rose");
    }
}
