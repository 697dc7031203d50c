//! In-memory mocks for the settings store and log verbosity switch.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::{
    app_error::AppResult,
    application::{ports::log_verbosity::LogVerbosity, use_cases::settings::SettingsRepo},
    domain::entities::setting_key::SettingKey,
};

/// In-memory implementation of SettingsRepo for testing.
#[derive(Default)]
pub struct InMemorySettingsRepo {
    pub values: Mutex<HashMap<SettingKey, String>>,
}

impl InMemorySettingsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with stored values.
    pub fn with_values(values: &[(SettingKey, &str)]) -> Self {
        let map = values
            .iter()
            .map(|(key, value)| (*key, value.to_string()))
            .collect();
        Self {
            values: Mutex::new(map),
        }
    }

    /// Raw stored value (for test assertions).
    pub fn value(&self, key: SettingKey) -> Option<String> {
        self.values.lock().unwrap().get(&key).cloned()
    }
}

#[async_trait]
impl SettingsRepo for InMemorySettingsRepo {
    async fn get(&self, key: SettingKey) -> AppResult<Option<String>> {
        Ok(self.value(key))
    }

    async fn set(&self, key: SettingKey, value: &str) -> AppResult<()> {
        self.values.lock().unwrap().insert(key, value.to_string());
        Ok(())
    }

    async fn delete(&self, key: SettingKey) -> AppResult<()> {
        self.values.lock().unwrap().remove(&key);
        Ok(())
    }
}

/// Records every verbosity switch.
#[derive(Default)]
pub struct RecordingVerbosity {
    calls: Mutex<Vec<bool>>,
}

impl RecordingVerbosity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<bool> {
        self.calls.lock().unwrap().clone()
    }
}

impl LogVerbosity for RecordingVerbosity {
    fn set_debug(&self, enabled: bool) {
        self.calls.lock().unwrap().push(enabled);
    }
}
