use async_trait::async_trait;
use sqlx::Row;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    domain::entities::setting_key::SettingKey,
    use_cases::settings::SettingsRepo,
};

#[async_trait]
impl SettingsRepo for PostgresPersistence {
    async fn get(&self, key: SettingKey) -> AppResult<Option<String>> {
        let row = sqlx::query("SELECT value FROM nanopost_options WHERE name = $1")
            .bind(key.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(row.map(|r| r.get("value")))
    }

    async fn set(&self, key: SettingKey, value: &str) -> AppResult<()> {
        sqlx::query(
            r#"
                INSERT INTO nanopost_options (name, value)
                VALUES ($1, $2)
                ON CONFLICT (name)
                DO UPDATE SET value = EXCLUDED.value, updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(key.as_str())
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(())
    }

    async fn delete(&self, key: SettingKey) -> AppResult<()> {
        sqlx::query("DELETE FROM nanopost_options WHERE name = $1")
            .bind(key.as_str())
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}
