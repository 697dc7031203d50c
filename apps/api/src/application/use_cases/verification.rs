use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use nanopost_types::{DomainChallenge, RecipientVerdict, check_recipient_request};
use tracing::{debug, instrument};

use crate::app_error::{AppError, AppResult};
use crate::application::{
    use_cases::settings::{SiteIdentity, SiteSettings},
    validators::is_valid_email,
};

/// Local account lookup used to decide whether an address may receive mail.
#[async_trait]
pub trait LocalAccountDirectory: Send + Sync {
    async fn email_exists(&self, email: &str) -> AppResult<bool>;
}

/// Raw query parameters of a recipient check.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipientCheck<'a> {
    pub email: Option<&'a str>,
    pub timestamp: Option<&'a str>,
    pub signature: Option<&'a str>,
}

#[derive(Clone)]
pub struct VerificationUseCases {
    settings: SiteSettings,
    accounts: Arc<dyn LocalAccountDirectory>,
    site: SiteIdentity,
}

impl VerificationUseCases {
    pub fn new(
        settings: SiteSettings,
        accounts: Arc<dyn LocalAccountDirectory>,
        site: SiteIdentity,
    ) -> Self {
        Self {
            settings,
            accounts,
            site,
        }
    }

    /// Echo the remote API's challenge together with the live site URL.
    ///
    /// An empty challenge and the literal "0" both count as missing.
    pub fn verify_domain(&self, challenge: Option<&str>) -> AppResult<DomainChallenge> {
        match challenge {
            Some(challenge) if !challenge.is_empty() && challenge != "0" => Ok(DomainChallenge {
                challenge: challenge.to_string(),
                site_url: self.site.site_url.clone(),
            }),
            _ => Err(AppError::InvalidInput("Challenge required".into())),
        }
    }

    pub async fn verify_recipient(&self, check: RecipientCheck<'_>) -> AppResult<RecipientVerdict> {
        self.verify_recipient_at(check, Utc::now().timestamp()).await
    }

    /// Signed recipient check, evaluated at unix time `now`.
    ///
    /// Every authorization failure is reported as the same `Forbidden`; an
    /// invalid address behind a valid signature is a normal verdict.
    #[instrument(skip(self, check), fields(email = ?check.email))]
    pub async fn verify_recipient_at(
        &self,
        check: RecipientCheck<'_>,
        now: i64,
    ) -> AppResult<RecipientVerdict> {
        let email = check.email.unwrap_or_default();
        let secret = self.settings.site_secret().await?;

        if let Err(reason) = check_recipient_request(
            secret.as_deref(),
            email,
            check.timestamp,
            check.signature,
            now,
        ) {
            debug!(%reason, "Recipient check rejected");
            return Err(AppError::Forbidden);
        }

        if email.is_empty() || !is_valid_email(email) {
            debug!("Invalid email format");
            return Ok(RecipientVerdict::denied("Invalid email"));
        }

        if self.accounts.email_exists(email).await? {
            debug!("Recipient is a local account, allowed");
            return Ok(RecipientVerdict::allowed("WordPress user"));
        }

        if email == self.site.admin_email {
            debug!("Recipient is the admin email, allowed");
            return Ok(RecipientVerdict::allowed("Admin email"));
        }

        debug!("Recipient is not a local account, denied");
        Ok(RecipientVerdict::denied("Not a WordPress user"))
    }
}
