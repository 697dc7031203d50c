use std::sync::Arc;

use nanopost_types::UpdateDomainRequest;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::app_error::{AppError, AppResult};
use crate::application::{
    helpers::domain_parsing::derive_from_address,
    ports::delivery_api::DeliveryApi,
    use_cases::settings::{SiteIdentity, SiteSettings},
};
use crate::domain::entities::setting_key::SettingKey;

pub const NOTICE_DISMISS_SECS: i64 = 7 * 24 * 60 * 60;

/// Registered domain no longer matches the live site URL.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DomainDrift {
    pub registered_domain: String,
    pub current_domain: String,
}

#[derive(Clone)]
pub struct DomainUseCases {
    settings: SiteSettings,
    api: Arc<dyn DeliveryApi>,
    site: SiteIdentity,
    sending_domain: String,
}

impl DomainUseCases {
    pub fn new(
        settings: SiteSettings,
        api: Arc<dyn DeliveryApi>,
        site: SiteIdentity,
        sending_domain: String,
    ) -> Self {
        Self {
            settings,
            api,
            site,
            sending_domain,
        }
    }

    /// Tell the remote API that the site now lives at the current URL.
    ///
    /// Only an HTTP 200 reply without an `error` field counts as success and
    /// updates the stored registered domain.
    #[instrument(skip(self))]
    pub async fn update_domain(&self) -> AppResult<Value> {
        let site_token = self
            .settings
            .site_token()
            .await?
            .ok_or(AppError::NotRegistered)?;

        let request = UpdateDomainRequest {
            site_token,
            new_domain: self.site.site_url.clone(),
        };

        debug!(new_domain = %request.new_domain, "Updating registered domain");

        let reply = self.api.update_domain(&request).await?;

        debug!(status = reply.status, body = %reply.raw_body, "Domain update response");

        if reply.status != 200 || reply.has_error() {
            return Err(AppError::Remote(reply.error_message()));
        }

        self.settings
            .set(SettingKey::RegisteredDomain, &self.site.site_url)
            .await?;
        if let Some(from_address) = derive_from_address(&self.site.site_url, &self.sending_domain)
        {
            self.settings
                .set(SettingKey::FromAddress, &from_address)
                .await?;
        }

        info!(domain = %self.site.site_url, "Registered domain updated");

        Ok(reply.body.unwrap_or(Value::Null))
    }

    /// The drift to show to the operator at `now`, if any.
    ///
    /// Nothing is reported for unregistered sites, when no domain was ever
    /// registered, or while a dismissal is still running.
    #[instrument(skip(self))]
    pub async fn domain_notice(&self, now: i64) -> AppResult<Option<DomainDrift>> {
        if self.settings.site_token().await?.is_none() {
            return Ok(None);
        }

        let Some(registered_domain) = self.settings.get(SettingKey::RegisteredDomain).await? else {
            return Ok(None);
        };
        if registered_domain == self.site.site_url {
            return Ok(None);
        }

        if self.settings.notice_dismissed_until().await? > now {
            return Ok(None);
        }

        Ok(Some(DomainDrift {
            registered_domain,
            current_domain: self.site.site_url.clone(),
        }))
    }

    /// Hide the drift notice for seven days. Returns the new deadline.
    #[instrument(skip(self))]
    pub async fn dismiss_domain_notice(&self, now: i64) -> AppResult<i64> {
        let until = now + NOTICE_DISMISS_SECS;
        self.settings
            .set(SettingKey::DomainNoticeDismissed, &until.to_string())
            .await?;
        Ok(until)
    }
}
