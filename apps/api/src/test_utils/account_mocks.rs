use async_trait::async_trait;
use std::collections::HashSet;

use crate::{app_error::AppResult, application::use_cases::verification::LocalAccountDirectory};

/// In-memory LocalAccountDirectory. Lookups ignore case.
#[derive(Default)]
pub struct InMemoryLocalAccounts {
    emails: HashSet<String>,
}

impl InMemoryLocalAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_emails(emails: &[&str]) -> Self {
        Self {
            emails: emails.iter().map(|e| e.to_lowercase()).collect(),
        }
    }
}

#[async_trait]
impl LocalAccountDirectory for InMemoryLocalAccounts {
    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        Ok(self.emails.contains(&email.to_lowercase()))
    }
}
