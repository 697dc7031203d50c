use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use secrecy::ExposeSecret;

use crate::{
    adapters::http::app_state::AppState, app_error::AppError,
    application::validators::constant_time_eq,
};

/// Guards the admin routes with the `ADMIN_TOKEN` bearer token.
pub async fn admin_token_auth(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .unwrap_or_default();

    let expected = app_state.config.admin_token.expose_secret();
    if presented.is_empty() || !constant_time_eq(presented, expected) {
        tracing::debug!(path = %request.uri().path(), "Rejected admin request");
        return Err(AppError::InvalidCredentials);
    }

    Ok(next.run(request).await)
}
