use serde::{Deserialize, Serialize};

use crate::ContentType;

/// Body of `POST {base}/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Live site URL being registered
    pub domain: String,

    /// Administrative contact address of the site
    pub admin_email: String,

    /// Hex secret the remote API uses to sign recipient checks
    pub site_secret: String,
}

/// Body of `POST {base}/mail`.
///
/// Optional fields are omitted from the JSON entirely when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailPayload {
    pub site_token: String,
    pub site_url: String,

    /// Comma-separated recipient list
    pub to: String,
    pub subject: String,
    pub message: String,
    pub content_type: ContentType,

    /// Display name of the site, used as the sender name
    pub from_name: String,

    /// Address from the caller's From header; the remote API turns it into a reply-to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_from: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_from_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,

    /// Comma-separated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,

    /// Comma-separated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcc: Option<String>,
}

/// Body of `POST {base}/site/update-domain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDomainRequest {
    pub site_token: String,
    pub new_domain: String,
}
