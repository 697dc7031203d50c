use crate::{
    adapters::http::app_state::AppState,
    application::ports::{delivery_api::DeliveryApi, log_verbosity::LogVerbosity},
    infra::{
        config::AppConfig,
        error::InfraError,
        log_level::{ReloadableVerbosity, build_filter},
        nanopost_delivery::NanopostDeliveryApi,
        postgres_persistence,
    },
    use_cases::{
        domain::DomainUseCases,
        mail_relay::{MailPipeline, MailRelay, MailUseCases},
        registration::RegistrationUseCases,
        settings::{SettingsRepo, SettingsUseCases, SiteSettings},
        verification::{LocalAccountDirectory, VerificationUseCases},
    },
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

pub async fn init_app_state(
    config: AppConfig,
    verbosity: Arc<dyn LogVerbosity>,
) -> anyhow::Result<AppState> {
    let postgres_arc = Arc::new(postgres_persistence(&config.database_url).await?);
    let delivery_api: Arc<dyn DeliveryApi> = Arc::new(NanopostDeliveryApi::new(&config.api_base)?);

    let settings_repo_arc = postgres_arc.clone() as Arc<dyn SettingsRepo>;
    let accounts_arc = postgres_arc.clone() as Arc<dyn LocalAccountDirectory>;

    Ok(build_app_state(
        config,
        settings_repo_arc,
        delivery_api,
        accounts_arc,
        verbosity,
    ))
}

/// Wire use cases from already-built ports.
pub fn build_app_state(
    config: AppConfig,
    settings_repo: Arc<dyn SettingsRepo>,
    delivery_api: Arc<dyn DeliveryApi>,
    accounts: Arc<dyn LocalAccountDirectory>,
    verbosity: Arc<dyn LogVerbosity>,
) -> AppState {
    let settings = SiteSettings::new(settings_repo);
    let site = config.site_identity();

    let registration_use_cases = RegistrationUseCases::new(
        settings.clone(),
        delivery_api.clone(),
        site.clone(),
        config.sending_domain.clone(),
    );

    let domain_use_cases = DomainUseCases::new(
        settings.clone(),
        delivery_api.clone(),
        site.clone(),
        config.sending_domain.clone(),
    );

    let relay = Arc::new(MailRelay::new(settings.clone(), delivery_api, site.clone()));
    let mail_use_cases = MailUseCases::new(Arc::new(MailPipeline::new(relay)));

    let verification_use_cases = VerificationUseCases::new(settings.clone(), accounts, site);

    let settings_use_cases = SettingsUseCases::new(settings, verbosity);

    AppState {
        config: Arc::new(config),
        registration_use_cases: Arc::new(registration_use_cases),
        domain_use_cases: Arc::new(domain_use_cases),
        mail_use_cases: Arc::new(mail_use_cases),
        verification_use_cases: Arc::new(verification_use_cases),
        settings_use_cases: Arc::new(settings_use_cases),
    }
}

/// Install the global subscriber. The returned handle switches debug
/// logging on and off at runtime.
pub fn init_tracing(log_file: Option<&str>) -> Result<ReloadableVerbosity, InfraError> {
    let (filter, handle) = reload::Layer::new(build_filter(false));

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don’t show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs)
    let json_layer = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| InfraError::LogFile {
                path: path.to_string(),
                source,
            })?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(true)
                    .with_span_list(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(ReloadableVerbosity::new(handle))
}
