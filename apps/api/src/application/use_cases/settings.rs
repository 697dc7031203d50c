use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::app_error::AppResult;
use crate::application::ports::log_verbosity::LogVerbosity;
use crate::domain::entities::setting_key::SettingKey;

#[async_trait]
pub trait SettingsRepo: Send + Sync {
    async fn get(&self, key: SettingKey) -> AppResult<Option<String>>;
    async fn set(&self, key: SettingKey, value: &str) -> AppResult<()>;
    async fn delete(&self, key: SettingKey) -> AppResult<()>;
}

/// The local site as seen by the remote API. Fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    pub site_url: String,
    pub site_name: String,
    pub admin_email: String,
}

/// Typed access to the persisted settings.
///
/// Empty stored values read as absent.
#[derive(Clone)]
pub struct SiteSettings {
    repo: Arc<dyn SettingsRepo>,
}

impl SiteSettings {
    pub fn new(repo: Arc<dyn SettingsRepo>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, key: SettingKey) -> AppResult<Option<String>> {
        let value = self.repo.get(key).await?;
        Ok(value.filter(|v| !v.is_empty()))
    }

    pub async fn set(&self, key: SettingKey, value: &str) -> AppResult<()> {
        self.repo.set(key, value).await
    }

    pub async fn delete(&self, key: SettingKey) -> AppResult<()> {
        self.repo.delete(key).await
    }

    pub async fn flag(&self, key: SettingKey) -> AppResult<bool> {
        Ok(self.get(key).await?.is_some_and(|v| v != "0"))
    }

    pub async fn set_flag(&self, key: SettingKey, enabled: bool) -> AppResult<()> {
        self.set(key, if enabled { "1" } else { "0" }).await
    }

    pub async fn site_token(&self) -> AppResult<Option<String>> {
        self.get(SettingKey::SiteToken).await
    }

    pub async fn site_secret(&self) -> AppResult<Option<String>> {
        self.get(SettingKey::SiteSecret).await
    }

    pub async fn debug_mode(&self) -> AppResult<bool> {
        self.flag(SettingKey::DebugMode).await
    }

    /// Unix seconds until which the domain notice stays hidden, 0 when unset.
    pub async fn notice_dismissed_until(&self) -> AppResult<i64> {
        let value = self.get(SettingKey::DomainNoticeDismissed).await?;
        Ok(value.and_then(|v| v.trim().parse().ok()).unwrap_or(0))
    }
}

/// Debug-mode setting and the log verbosity it drives.
pub struct SettingsUseCases {
    settings: SiteSettings,
    verbosity: Arc<dyn LogVerbosity>,
}

impl SettingsUseCases {
    pub fn new(settings: SiteSettings, verbosity: Arc<dyn LogVerbosity>) -> Self {
        Self {
            settings,
            verbosity,
        }
    }

    pub async fn debug_mode(&self) -> AppResult<bool> {
        self.settings.debug_mode().await
    }

    /// Apply the stored debug mode to the running subscriber.
    pub async fn apply_debug_mode(&self) -> AppResult<bool> {
        let enabled = self.settings.debug_mode().await?;
        self.verbosity.set_debug(enabled);
        Ok(enabled)
    }

    #[instrument(skip(self))]
    pub async fn set_debug_mode(&self, enabled: bool) -> AppResult<()> {
        self.settings
            .set_flag(SettingKey::DebugMode, enabled)
            .await?;
        self.verbosity.set_debug(enabled);
        info!(enabled, "Debug mode updated");
        Ok(())
    }
}
