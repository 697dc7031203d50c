//! Remote API routes.

/// Endpoints exposed by the remote API under its base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Register,
    Mail,
    UpdateDomain,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Register => "/register",
            Endpoint::Mail => "/mail",
            Endpoint::UpdateDomain => "/site/update-domain",
        }
    }
}

/// Joins a base URL and an endpoint without doubling the slash.
pub fn endpoint_url(base: &str, endpoint: Endpoint) -> String {
    format!("{}{}", base.trim_end_matches('/'), endpoint.path())
}
