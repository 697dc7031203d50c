//! Outgoing mail: the interception chain and the relay that terminates it.

use std::sync::Arc;

use async_trait::async_trait;
use nanopost_types::{ApiReply, MailPayload};
use tracing::{debug, error, instrument};

use crate::app_error::{AppError, AppResult};
use crate::application::{
    helpers::mail_headers::parse_headers,
    ports::delivery_api::DeliveryApi,
    use_cases::settings::{SiteIdentity, SiteSettings},
    validators::is_valid_email,
};
use crate::domain::entities::{outgoing_mail::OutgoingMail, setting_key::SettingKey};

const DEFAULT_SUBJECT: &str = "(no subject)";
const TEST_SUBJECT: &str = "nanoPost Test";
const TEST_MESSAGE: &str = "This is a test email from nanoPost.";

/// One link of the outgoing-mail chain.
#[async_trait]
pub trait MailInterceptor: Send + Sync {
    /// `Some(sent)` decides the outcome and stops the chain; `None` passes
    /// the message on.
    async fn intercept(&self, mail: &OutgoingMail) -> Option<bool>;
}

/// The handler at the end of the chain. Always decides.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn deliver(&self, mail: &OutgoingMail) -> bool;
}

/// Ordered interceptors in front of one terminal transport.
pub struct MailPipeline {
    interceptors: Vec<Arc<dyn MailInterceptor>>,
    terminal: Arc<dyn MailTransport>,
}

impl MailPipeline {
    pub fn new(terminal: Arc<dyn MailTransport>) -> Self {
        Self {
            interceptors: Vec::new(),
            terminal,
        }
    }

    pub fn with_interceptor(mut self, interceptor: Arc<dyn MailInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// First interceptor to return a decision wins, in registration order.
    pub async fn send(&self, mail: &OutgoingMail) -> bool {
        for interceptor in &self.interceptors {
            if let Some(sent) = interceptor.intercept(mail).await {
                return sent;
            }
        }
        self.terminal.deliver(mail).await
    }
}

/// Relays outgoing mail to the remote delivery API.
///
/// Fails closed: a message the API does not acknowledge is reported as not
/// sent, with no fallback transport.
pub struct MailRelay {
    settings: SiteSettings,
    api: Arc<dyn DeliveryApi>,
    site: SiteIdentity,
}

impl MailRelay {
    pub fn new(settings: SiteSettings, api: Arc<dyn DeliveryApi>, site: SiteIdentity) -> Self {
        Self { settings, api, site }
    }

    #[instrument(skip_all, fields(to = %mail.recipients()))]
    pub async fn relay(&self, mail: &OutgoingMail) -> bool {
        debug!(subject = ?mail.subject, "Outgoing mail intercepted");

        let site_token = match self.settings.site_token().await {
            Ok(Some(token)) => token,
            Ok(None) => {
                error!("No site token configured, cannot send");
                return false;
            }
            Err(e) => {
                error!(error = %e, "Failed to read site token");
                return false;
            }
        };

        let reply = match self.submit(mail, site_token).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "Mail API request failed");
                return false;
            }
        };

        debug!(status = reply.status, body = %reply.raw_body, "Mail API response");

        if reply.is_accepted() {
            debug!(
                email_log_id = %reply.non_empty_str("email_log_id").unwrap_or_else(|| "n/a".into()),
                "Mail accepted"
            );
            return true;
        }

        error!(status = reply.status, body = %reply.raw_body, "Mail API rejected message");
        false
    }

    async fn submit(&self, mail: &OutgoingMail, site_token: String) -> AppResult<ApiReply> {
        let payload = build_payload(mail, site_token, &self.site);
        let mail_url = match self.settings.get(SettingKey::ApiUrl).await? {
            Some(url) => url,
            None => self.api.default_mail_url(),
        };

        debug!(url = %mail_url, content_type = %payload.content_type, "Sending to mail API");

        self.api.submit_mail(&mail_url, &payload).await
    }
}

#[async_trait]
impl MailTransport for MailRelay {
    async fn deliver(&self, mail: &OutgoingMail) -> bool {
        self.relay(mail).await
    }
}

/// Mail payload for one message, from its request and parsed headers.
pub fn build_payload(mail: &OutgoingMail, site_token: String, site: &SiteIdentity) -> MailPayload {
    let headers = parse_headers(mail.headers.as_ref());

    let (original_from, original_from_name) = if headers.from.is_empty() {
        (None, None)
    } else {
        let name = (!headers.from_name.is_empty()).then_some(headers.from_name);
        (Some(headers.from), name)
    };

    MailPayload {
        site_token,
        site_url: site.site_url.clone(),
        to: mail.recipients(),
        subject: mail
            .subject
            .clone()
            .unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
        message: mail.message.clone().unwrap_or_default(),
        content_type: headers.content_type,
        from_name: site.site_name.clone(),
        original_from,
        original_from_name,
        reply_to: (!headers.reply_to.is_empty()).then_some(headers.reply_to),
        cc: (!headers.cc.is_empty()).then(|| headers.cc.join(",")),
        bcc: (!headers.bcc.is_empty()).then(|| headers.bcc.join(",")),
    }
}

pub struct MailUseCases {
    pipeline: Arc<MailPipeline>,
}

impl MailUseCases {
    pub fn new(pipeline: Arc<MailPipeline>) -> Self {
        Self { pipeline }
    }

    pub async fn send(&self, mail: &OutgoingMail) -> bool {
        self.pipeline.send(mail).await
    }

    #[instrument(skip(self))]
    pub async fn send_test_email(&self, to: &str) -> AppResult<()> {
        let to = to.trim();
        if !is_valid_email(to) {
            return Err(AppError::InvalidInput("Invalid email address".into()));
        }

        let mail = OutgoingMail::new(to, TEST_SUBJECT, TEST_MESSAGE);
        if self.pipeline.send(&mail).await {
            Ok(())
        } else {
            Err(AppError::Remote("Test email was not accepted".into()))
        }
    }
}
