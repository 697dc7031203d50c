use async_trait::async_trait;
use sqlx::Row;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    use_cases::verification::LocalAccountDirectory,
};

#[async_trait]
impl LocalAccountDirectory for PostgresPersistence {
    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM local_accounts WHERE lower(email) = lower($1)) AS found",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(row.get("found"))
    }
}
