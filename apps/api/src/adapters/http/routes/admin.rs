use axum::{
    Json, Router,
    extract::State,
    middleware,
    routing::{get, post, put},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    adapters::http::{app_state::AppState, middleware::admin_token_auth},
    app_error::AppResult,
    domain::entities::outgoing_mail::OutgoingMail,
    use_cases::{
        domain::DomainDrift,
        registration::{Registration, RegistrationStatus},
    },
};

pub fn router(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/status", get(get_status))
        .route("/register", post(register))
        .route("/update-domain", post(update_domain))
        .route("/dismiss-domain-notice", post(dismiss_domain_notice))
        .route("/settings", put(update_settings))
        .route("/test-email", post(send_test_email))
        .route("/mail", post(submit_mail))
        .route_layer(middleware::from_fn_with_state(app_state, admin_token_auth))
}

#[derive(Serialize)]
struct StatusResponse {
    #[serde(flatten)]
    registration: RegistrationStatus,
    domain_notice: Option<DomainDrift>,
    debug_mode: bool,
}

async fn get_status(State(app_state): State<AppState>) -> AppResult<Json<StatusResponse>> {
    let registration = app_state.registration_use_cases.status().await?;
    let domain_notice = app_state
        .domain_use_cases
        .domain_notice(Utc::now().timestamp())
        .await?;
    let debug_mode = app_state.settings_use_cases.debug_mode().await?;

    Ok(Json(StatusResponse {
        registration,
        domain_notice,
        debug_mode,
    }))
}

fn default_regenerate() -> bool {
    true
}

#[derive(Deserialize)]
struct RegisterPayload {
    #[serde(default = "default_regenerate")]
    regenerate_secret: bool,
}

/// Re-registration from the operator. A new site secret is generated
/// unless the payload opts out.
async fn register(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> AppResult<Json<Registration>> {
    let registration = app_state
        .registration_use_cases
        .register(payload.regenerate_secret)
        .await?;
    Ok(Json(registration))
}

#[derive(Serialize)]
struct UpdateDomainResponse {
    registered_domain: String,
    data: Value,
}

async fn update_domain(
    State(app_state): State<AppState>,
) -> AppResult<Json<UpdateDomainResponse>> {
    let data = app_state.domain_use_cases.update_domain().await?;
    Ok(Json(UpdateDomainResponse {
        registered_domain: app_state.config.site_url.clone(),
        data,
    }))
}

#[derive(Serialize)]
struct DismissResponse {
    dismissed_until: i64,
}

async fn dismiss_domain_notice(
    State(app_state): State<AppState>,
) -> AppResult<Json<DismissResponse>> {
    let dismissed_until = app_state
        .domain_use_cases
        .dismiss_domain_notice(Utc::now().timestamp())
        .await?;
    Ok(Json(DismissResponse { dismissed_until }))
}

#[derive(Deserialize, Serialize)]
struct SettingsPayload {
    debug_mode: bool,
}

async fn update_settings(
    State(app_state): State<AppState>,
    Json(payload): Json<SettingsPayload>,
) -> AppResult<Json<SettingsPayload>> {
    app_state
        .settings_use_cases
        .set_debug_mode(payload.debug_mode)
        .await?;
    Ok(Json(payload))
}

#[derive(Deserialize)]
struct TestEmailPayload {
    to: String,
}

#[derive(Serialize)]
struct SentResponse {
    sent: bool,
}

async fn send_test_email(
    State(app_state): State<AppState>,
    Json(payload): Json<TestEmailPayload>,
) -> AppResult<Json<SentResponse>> {
    app_state
        .mail_use_cases
        .send_test_email(&payload.to)
        .await?;
    Ok(Json(SentResponse { sent: true }))
}

/// Mail submitted by the host site. Always answers 200; `sent` carries
/// the relay's decision.
async fn submit_mail(
    State(app_state): State<AppState>,
    Json(mail): Json<OutgoingMail>,
) -> Json<SentResponse> {
    let sent = app_state.mail_use_cases.send(&mail).await;
    Json(SentResponse { sent })
}
