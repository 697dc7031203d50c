use crate::{adapters::persistence::PostgresPersistence, infra::db::init_db};

pub mod activation;
pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod http_client;
pub mod log_level;
pub mod nanopost_delivery;
pub mod setup;

pub use error::InfraError;

pub async fn postgres_persistence(database_url: &str) -> Result<PostgresPersistence, InfraError> {
    let pool = init_db(database_url).await?;
    let persistence = PostgresPersistence::new(pool);
    Ok(persistence)
}
