//! Test app state builder for HTTP-level testing.
//!
//! `TestAppStateBuilder` wires the real use cases over in-memory ports.
//! Ports that are not overridden start empty.

use std::net::SocketAddr;
use std::sync::Arc;

use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    application::{
        ports::{delivery_api::DeliveryApi, log_verbosity::LogVerbosity},
        use_cases::{settings::SettingsRepo, verification::LocalAccountDirectory},
    },
    domain::entities::setting_key::SettingKey,
    infra::{
        config::{AppConfig, DEFAULT_SENDING_DOMAIN},
        setup::build_app_state,
    },
    test_utils::{
        InMemoryDeliveryApi, InMemoryLocalAccounts, InMemorySettingsRepo, RecordingVerbosity,
        TEST_SITE_URL, test_site_identity,
    },
};

pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

fn test_config() -> AppConfig {
    let site = test_site_identity();
    AppConfig {
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        database_url: "postgres://unused".to_string(),
        site_url: TEST_SITE_URL.to_string(),
        site_name: site.site_name,
        admin_email: site.admin_email,
        admin_token: SecretString::new(TEST_ADMIN_TOKEN.into()),
        api_base: "https://api.nanopost.test/api".to_string(),
        sending_domain: DEFAULT_SENDING_DOMAIN.to_string(),
        log_file: None,
    }
}

/// Builder for creating test AppState instances.
pub struct TestAppStateBuilder {
    settings_repo: Arc<dyn SettingsRepo>,
    delivery_api: Arc<dyn DeliveryApi>,
    accounts: Arc<dyn LocalAccountDirectory>,
    verbosity: Arc<dyn LogVerbosity>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            settings_repo: Arc::new(InMemorySettingsRepo::new()),
            delivery_api: Arc::new(InMemoryDeliveryApi::new()),
            accounts: Arc::new(InMemoryLocalAccounts::new()),
            verbosity: Arc::new(RecordingVerbosity::new()),
        }
    }

    /// Seed a fresh settings store with the given values.
    pub fn with_settings(mut self, values: &[(SettingKey, &str)]) -> Self {
        self.settings_repo = Arc::new(InMemorySettingsRepo::with_values(values));
        self
    }

    /// Use a caller-owned settings store (to assert on it afterwards).
    pub fn with_settings_repo(mut self, repo: Arc<dyn SettingsRepo>) -> Self {
        self.settings_repo = repo;
        self
    }

    pub fn with_delivery_api(mut self, api: Arc<dyn DeliveryApi>) -> Self {
        self.delivery_api = api;
        self
    }

    pub fn with_local_accounts(mut self, emails: &[&str]) -> Self {
        self.accounts = Arc::new(InMemoryLocalAccounts::with_emails(emails));
        self
    }

    pub fn with_verbosity(mut self, verbosity: Arc<dyn LogVerbosity>) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Build the AppState with all configured mocks.
    pub fn build(self) -> AppState {
        build_app_state(
            test_config(),
            self.settings_repo,
            self.delivery_api,
            self.accounts,
            self.verbosity,
        )
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
