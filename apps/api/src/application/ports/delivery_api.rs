use async_trait::async_trait;
use nanopost_types::{ApiReply, MailPayload, RegisterRequest, UpdateDomainRequest};

use crate::app_error::AppResult;

// ============================================================================
// Delivery API Port
// ============================================================================

/// Remote delivery API.
///
/// Implementations return `AppError::Transport` when no reply was received
/// (DNS, connect, TLS, timeout). Any HTTP reply, error statuses included, is
/// returned as an `ApiReply` for the caller to interpret.
#[async_trait]
pub trait DeliveryApi: Send + Sync {
    /// Base URL of the remote API, without trailing slash.
    fn api_base(&self) -> &str;

    /// Default mail-submission URL, `{base}/mail`.
    fn default_mail_url(&self) -> String;

    async fn register(&self, request: &RegisterRequest) -> AppResult<ApiReply>;

    /// Submit one message to `mail_url`, the stored submission URL.
    async fn submit_mail(&self, mail_url: &str, payload: &MailPayload) -> AppResult<ApiReply>;

    async fn update_domain(&self, request: &UpdateDomainRequest) -> AppResult<ApiReply>;
}
