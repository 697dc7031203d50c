use std::net::SocketAddr;

use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;

use crate::use_cases::settings::SiteIdentity;

pub const DEFAULT_API_BASE: &str = "https://api-master-ja5zao.laravel.cloud/api";
pub const DEFAULT_SENDING_DOMAIN: &str = "nanopo.st";

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    /// Public URL of the site whose mail is relayed, e.g. "https://example.com".
    pub site_url: String,
    /// Display name used as the sender name of relayed mail.
    pub site_name: String,
    pub admin_email: String,
    /// Bearer token for the admin routes.
    pub admin_token: SecretString,
    /// Base URL of the remote delivery API.
    pub api_base: String,
    /// Domain of the per-site sending address (`{slug}@{sending_domain}`).
    pub sending_domain: String,
    /// Optional path of the JSON log file.
    pub log_file: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let database_url: String = get_env("DATABASE_URL");
        let site_url: String = get_env("SITE_URL");
        let site_name: String = get_env_default("SITE_NAME", "WordPress".to_string());
        let admin_email: String = get_env("ADMIN_EMAIL");
        let admin_token = SecretString::new(get_env::<String>("ADMIN_TOKEN").into());
        let api_base: String = get_env_default("NANOPOST_API_BASE", DEFAULT_API_BASE.to_string());
        let sending_domain: String =
            get_env_default("NANOPOST_SENDING_DOMAIN", DEFAULT_SENDING_DOMAIN.to_string());
        let log_file: Option<String> = std::env::var("LOG_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Self {
            bind_addr,
            database_url,
            site_url: site_url.trim().to_string(),
            site_name,
            admin_email: admin_email.trim().to_string(),
            admin_token,
            api_base: api_base.trim_end_matches('/').to_string(),
            sending_domain,
            log_file,
        }
    }

    pub fn site_identity(&self) -> SiteIdentity {
        SiteIdentity {
            site_url: self.site_url.clone(),
            site_name: self.site_name.clone(),
            admin_email: self.admin_email.clone(),
        }
    }
}
