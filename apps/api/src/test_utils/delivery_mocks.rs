//! In-memory mock of the remote delivery API.

use async_trait::async_trait;
use nanopost_types::{ApiReply, MailPayload, RegisterRequest, UpdateDomainRequest};
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::delivery_api::DeliveryApi,
};

const TEST_API_BASE: &str = "https://api.nanopost.test/api";

/// Canned outcome of one remote call.
#[derive(Debug, Clone)]
enum CannedReply {
    Reply { status: u16, body: String },
    TransportError(String),
}

impl CannedReply {
    fn ok_empty() -> Self {
        CannedReply::Reply {
            status: 200,
            body: "{}".to_string(),
        }
    }

    fn to_result(&self) -> AppResult<ApiReply> {
        match self {
            CannedReply::Reply { status, body } => Ok(ApiReply::new(*status, body.clone())),
            CannedReply::TransportError(msg) => Err(AppError::Transport(msg.clone())),
        }
    }
}

/// Records every request and answers with a configured reply.
///
/// Unconfigured calls answer 200 with an empty JSON object.
pub struct InMemoryDeliveryApi {
    register_reply: CannedReply,
    mail_reply: CannedReply,
    update_domain_reply: CannedReply,
    registrations: Mutex<Vec<RegisterRequest>>,
    mails: Mutex<Vec<(String, MailPayload)>>,
    domain_updates: Mutex<Vec<UpdateDomainRequest>>,
}

impl InMemoryDeliveryApi {
    pub fn new() -> Self {
        Self {
            register_reply: CannedReply::ok_empty(),
            mail_reply: CannedReply::ok_empty(),
            update_domain_reply: CannedReply::ok_empty(),
            registrations: Mutex::new(Vec::new()),
            mails: Mutex::new(Vec::new()),
            domain_updates: Mutex::new(Vec::new()),
        }
    }

    pub fn with_register_reply(mut self, status: u16, body: &str) -> Self {
        self.register_reply = CannedReply::Reply {
            status,
            body: body.to_string(),
        };
        self
    }

    pub fn with_register_transport_error(mut self, message: &str) -> Self {
        self.register_reply = CannedReply::TransportError(message.to_string());
        self
    }

    pub fn with_mail_reply(mut self, status: u16, body: &str) -> Self {
        self.mail_reply = CannedReply::Reply {
            status,
            body: body.to_string(),
        };
        self
    }

    pub fn with_mail_transport_error(mut self, message: &str) -> Self {
        self.mail_reply = CannedReply::TransportError(message.to_string());
        self
    }

    pub fn with_update_domain_reply(mut self, status: u16, body: &str) -> Self {
        self.update_domain_reply = CannedReply::Reply {
            status,
            body: body.to_string(),
        };
        self
    }

    pub fn with_update_domain_transport_error(mut self, message: &str) -> Self {
        self.update_domain_reply = CannedReply::TransportError(message.to_string());
        self
    }

    pub fn registrations(&self) -> Vec<RegisterRequest> {
        self.registrations.lock().unwrap().clone()
    }

    /// Submitted mail as (submission URL, payload) pairs.
    pub fn mails(&self) -> Vec<(String, MailPayload)> {
        self.mails.lock().unwrap().clone()
    }

    pub fn domain_updates(&self) -> Vec<UpdateDomainRequest> {
        self.domain_updates.lock().unwrap().clone()
    }
}

impl Default for InMemoryDeliveryApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeliveryApi for InMemoryDeliveryApi {
    fn api_base(&self) -> &str {
        TEST_API_BASE
    }

    fn default_mail_url(&self) -> String {
        format!("{TEST_API_BASE}/mail")
    }

    async fn register(&self, request: &RegisterRequest) -> AppResult<ApiReply> {
        self.registrations.lock().unwrap().push(request.clone());
        self.register_reply.to_result()
    }

    async fn submit_mail(&self, mail_url: &str, payload: &MailPayload) -> AppResult<ApiReply> {
        self.mails
            .lock()
            .unwrap()
            .push((mail_url.to_string(), payload.clone()));
        self.mail_reply.to_result()
    }

    async fn update_domain(&self, request: &UpdateDomainRequest) -> AppResult<ApiReply> {
        self.domain_updates.lock().unwrap().push(request.clone());
        self.update_domain_reply.to_result()
    }
}
