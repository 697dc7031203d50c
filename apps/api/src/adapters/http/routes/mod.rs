pub mod admin;
pub mod verify;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router(app_state: AppState) -> Router<AppState> {
    Router::new()
        .merge(verify::router())
        .nest("/admin", admin::router(app_state))
}
