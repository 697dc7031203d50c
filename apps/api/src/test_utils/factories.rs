//! Test data factories for creating valid test fixtures.
//!
//! Use the closure parameter to override specific fields as needed.

use crate::{
    application::use_cases::settings::SiteIdentity,
    domain::entities::outgoing_mail::OutgoingMail,
};

pub const TEST_SITE_URL: &str = "https://example.com";

pub fn test_site_identity() -> SiteIdentity {
    SiteIdentity {
        site_url: TEST_SITE_URL.to_string(),
        site_name: "Example Site".to_string(),
        admin_email: "admin@example.com".to_string(),
    }
}

/// Create a test message with sensible defaults.
pub fn create_test_mail(overrides: impl FnOnce(&mut OutgoingMail)) -> OutgoingMail {
    let mut mail = OutgoingMail::new("user@example.com", "Hello", "Hi");
    overrides(&mut mail);
    mail
}
