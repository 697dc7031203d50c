use std::sync::Arc;

use nanopost_types::RegisterRequest;
use rand::RngCore;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::app_error::{AppError, AppResult};
use crate::application::{
    helpers::{domain_parsing::derive_from_address, redact::secret_preview},
    ports::delivery_api::DeliveryApi,
    use_cases::settings::{SiteIdentity, SiteSettings},
};
use crate::domain::entities::setting_key::SettingKey;

const SECRET_BYTES: usize = 32;

/// 32 random bytes, hex-encoded.
pub fn generate_site_secret() -> String {
    let mut bytes = [0u8; SECRET_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Successful registration as reported by the remote API.
///
/// `data` is the reply body with the site token removed.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub site_id: Option<String>,
    #[serde(skip)]
    pub site_token: String,
    pub data: Value,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RegistrationStatus {
    pub registered: bool,
    pub site_id: Option<String>,
    pub registered_domain: Option<String>,
    pub current_domain: String,
    pub from_address: Option<String>,
}

#[derive(Clone)]
pub struct RegistrationUseCases {
    settings: SiteSettings,
    api: Arc<dyn DeliveryApi>,
    site: SiteIdentity,
    sending_domain: String,
}

impl RegistrationUseCases {
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

    /// First-start bookkeeping: make sure a site secret exists and flag the
    /// site for registration when it has no token yet.
    #[instrument(skip(self))]
    pub async fn activate(&self) -> AppResult<()> {
        if self.settings.site_secret().await?.is_none() {
            let secret = generate_site_secret();
            self.settings.set(SettingKey::SiteSecret, &secret).await?;
            debug!(secret = %secret_preview(&secret), "Generated site secret");
        }

        if self.settings.site_token().await?.is_none() {
            self.settings
                .set_flag(SettingKey::NeedsRegistration, true)
                .await?;
        }

        Ok(())
    }

    /// Runs one registration attempt if `activate` asked for it.
    ///
    /// The flag is cleared before the attempt, so a failed attempt is not
    /// repeated on the next start. Returns whether an attempt was made.
    #[instrument(skip(self))]
    pub async fn auto_register(&self) -> AppResult<bool> {
        if !self.settings.flag(SettingKey::NeedsRegistration).await? {
            return Ok(false);
        }

        self.settings.delete(SettingKey::NeedsRegistration).await?;

        match self.register(false).await {
            Ok(registration) => {
                info!(site_id = ?registration.site_id, "Auto-registration succeeded");
            }
            Err(e) => {
                warn!(error = %e, "Auto-registration failed");
            }
        }

        Ok(true)
    }

    /// Register (or re-register) this site with the remote API.
    ///
    /// Stored credentials are only written after the remote API hands out a
    /// token; every failure leaves them as they were.
    #[instrument(skip(self))]
    pub async fn register(&self, regenerate_secret: bool) -> AppResult<Registration> {
        let site_secret = match self.settings.site_secret().await? {
            Some(secret) if !regenerate_secret => secret,
            _ => {
                let secret = generate_site_secret();
                self.settings.set(SettingKey::SiteSecret, &secret).await?;
                debug!(secret = %secret_preview(&secret), "Generated new site secret");
                secret
            }
        };

        let request = RegisterRequest {
            domain: self.site.site_url.clone(),
            admin_email: self.site.admin_email.clone(),
            site_secret,
        };

        debug!(api_base = %self.api.api_base(), domain = %request.domain, "Registering site");

        let reply = self.api.register(&request).await?;

        debug!(status = reply.status, "Registration response");

        let Some(site_token) = reply.non_empty_str("site_token") else {
            return Err(AppError::Remote(reply.error_message()));
        };
        let site_id = reply.non_empty_str("site_id");

        self.settings.set(SettingKey::SiteToken, &site_token).await?;
        self.settings
            .set(SettingKey::SiteId, site_id.as_deref().unwrap_or_default())
            .await?;
        self.settings
            .set(SettingKey::ApiUrl, &self.api.default_mail_url())
            .await?;
        self.settings
            .set(SettingKey::RegisteredDomain, &self.site.site_url)
            .await?;

        if let Some(from_address) = derive_from_address(&self.site.site_url, &self.sending_domain)
        {
            self.settings
                .set(SettingKey::FromAddress, &from_address)
                .await?;
        }

        debug!(
            site_id = ?site_id,
            site_token = %secret_preview(&site_token),
            "Stored new site credentials"
        );

        let mut data = reply.body.unwrap_or(Value::Null);
        if let Some(fields) = data.as_object_mut() {
            fields.remove("site_token");
        }

        Ok(Registration {
            site_id,
            site_token,
            data,
        })
    }

    #[instrument(skip(self))]
    pub async fn status(&self) -> AppResult<RegistrationStatus> {
        Ok(RegistrationStatus {
            registered: self.settings.site_token().await?.is_some(),
            site_id: self.settings.get(SettingKey::SiteId).await?,
            registered_domain: self.settings.get(SettingKey::RegisteredDomain).await?,
            current_domain: self.site.site_url.clone(),
            from_address: self.settings.get(SettingKey::FromAddress).await?,
        })
    }
}
