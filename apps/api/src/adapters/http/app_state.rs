use std::sync::Arc;

use crate::{
    infra::config::AppConfig,
    use_cases::{
        domain::DomainUseCases, mail_relay::MailUseCases, registration::RegistrationUseCases,
        settings::SettingsUseCases, verification::VerificationUseCases,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub registration_use_cases: Arc<RegistrationUseCases>,
    pub domain_use_cases: Arc<DomainUseCases>,
    pub mail_use_cases: Arc<MailUseCases>,
    pub verification_use_cases: Arc<VerificationUseCases>,
    pub settings_use_cases: Arc<SettingsUseCases>,
}
