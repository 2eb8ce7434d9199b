//! Webhook resource

use serde::{Deserialize, Serialize};

/// A webhook subscription
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    /// Unique webhook identifier, assigned by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Administration the webhook is registered in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration_id: Option<String>,

    /// Endpoint the API delivers events to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Event names the webhook fires on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enabled_events: Vec<String>,

    /// Shared secret echoed in each delivery so receivers can verify origin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// HTTP status of the most recent delivery
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_http_status: Option<String>,
}
