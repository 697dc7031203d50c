use async_trait::async_trait;
use nanopost_sdk::{
    ApiReply, Endpoint, MailPayload, NanopostClient, NanopostConfig, NanopostError,
    RegisterRequest, UpdateDomainRequest, endpoint_url,
};

use crate::{
    app_error::{AppError, AppResult},
    application::ports::delivery_api::DeliveryApi,
    infra::{error::InfraError, http_client::try_build_client},
};

/// `DeliveryApi` backed by the nanoPost SDK client.
pub struct NanopostDeliveryApi {
    client: NanopostClient,
}

impl NanopostDeliveryApi {
    pub fn new(api_base: &str) -> Result<Self, InfraError> {
        let http_client =
            try_build_client().map_err(|e| InfraError::DeliveryClient(e.to_string()))?;
        let client = NanopostClient::with_http_client(NanopostConfig::new(api_base), http_client)
            .map_err(|e| InfraError::DeliveryClient(e.to_string()))?;
        Ok(Self { client })
    }
}

fn transport_error(err: NanopostError) -> AppError {
    tracing::warn!(error = %err, "nanoPost API unreachable");
    match err {
        NanopostError::Network(e) => AppError::Transport(e.to_string()),
        NanopostError::Config(msg) => AppError::Internal(msg),
    }
}

#[async_trait]
impl DeliveryApi for NanopostDeliveryApi {
    fn api_base(&self) -> &str {
        self.client.api_base()
    }

    fn default_mail_url(&self) -> String {
        endpoint_url(self.client.api_base(), Endpoint::Mail)
    }

    async fn register(&self, request: &RegisterRequest) -> AppResult<ApiReply> {
        self.client.register(request).await.map_err(transport_error)
    }

    async fn submit_mail(&self, mail_url: &str, payload: &MailPayload) -> AppResult<ApiReply> {
        self.client
            .submit_mail(mail_url, payload)
            .await
            .map_err(transport_error)
    }

    async fn update_domain(&self, request: &UpdateDomainRequest) -> AppResult<ApiReply> {
        self.client
            .update_domain(request)
            .await
            .map_err(transport_error)
    }
}
