use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use nanopost_relay::infra::{
    activation::run_startup_activation,
    app::create_app,
    config::AppConfig,
    setup::{init_app_state, init_tracing},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env();
    let verbosity = init_tracing(config.log_file.as_deref())?;

    let app_state = init_app_state(config, Arc::new(verbosity)).await?;

    run_startup_activation(&app_state).await;

    let bind_addr = app_state.config.bind_addr;
    let app = create_app(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Relay listening at {}", &listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
