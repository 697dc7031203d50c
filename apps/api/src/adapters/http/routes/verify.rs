use axum::{
    Json, Router,
    extract::{Query, State},
    http::{
        HeaderValue,
        header::{CACHE_CONTROL, PRAGMA},
    },
    routing::get,
};
use nanopost_types::{DomainChallenge, RecipientVerdict};
use serde::Deserialize;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{
    adapters::http::app_state::AppState, app_error::AppResult,
    use_cases::verification::RecipientCheck,
};

const NO_STORE: &str = "no-store, no-cache, must-revalidate, max-age=0";

/// Public callbacks used by the remote API. Responses are never cacheable,
/// error responses included.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/verify", get(verify_domain))
        .route("/verify-recipient", get(verify_recipient))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(NO_STORE),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
}

#[derive(Deserialize)]
struct VerifyDomainParams {
    challenge: Option<String>,
}

async fn verify_domain(
    State(app_state): State<AppState>,
    Query(params): Query<VerifyDomainParams>,
) -> AppResult<Json<DomainChallenge>> {
    let reply = app_state
        .verification_use_cases
        .verify_domain(params.challenge.as_deref())?;
    Ok(Json(reply))
}

#[derive(Deserialize)]
struct VerifyRecipientParams {
    email: Option<String>,
    timestamp: Option<String>,
    signature: Option<String>,
}

async fn verify_recipient(
    State(app_state): State<AppState>,
    Query(params): Query<VerifyRecipientParams>,
) -> AppResult<Json<RecipientVerdict>> {
    let check = RecipientCheck {
        email: params.email.as_deref(),
        timestamp: params.timestamp.as_deref(),
        signature: params.signature.as_deref(),
    };
    let verdict = app_state
        .verification_use_cases
        .verify_recipient(check)
        .await?;
    Ok(Json(verdict))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::Utc;
    use nanopost_types::sign_recipient_check;

    use crate::domain::entities::setting_key::SettingKey;
    use crate::test_utils::TestAppStateBuilder;

    const SECRET: &str = "9c4e1a7b3d5f0e2c8a6b4d1f7e3c5a9b0d2f4e6a8c1b3d5f7e9a0c2b4d6f8e1a";

    fn build_test_server(builder: TestAppStateBuilder) -> TestServer {
        let app_state = builder.build();
        TestServer::new(router().with_state(app_state)).unwrap()
    }

    fn with_secret() -> TestAppStateBuilder {
        TestAppStateBuilder::new()
            .with_settings(&[(SettingKey::SiteSecret, SECRET)])
            .with_local_accounts(&["member@example.com"])
    }

    fn assert_no_cache(response: &axum_test::TestResponse) {
        assert_eq!(
            response.header("cache-control"),
            "no-store, no-cache, must-revalidate, max-age=0"
        );
        assert_eq!(response.header("pragma"), "no-cache");
    }

    // =========================================================================
    // GET /verify
    // =========================================================================

    #[tokio::test]
    async fn verify_echoes_challenge() {
        let server = build_test_server(TestAppStateBuilder::new());

        let response = server.get("/verify").add_query_param("challenge", "nonce-123").await;

        response.assert_status(StatusCode::OK);
        assert_no_cache(&response);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["challenge"], "nonce-123");
        assert_eq!(body["site_url"], "https://example.com");
    }

    #[tokio::test]
    async fn verify_without_challenge_returns_400() {
        let server = build_test_server(TestAppStateBuilder::new());

        for response in [
            server.get("/verify").await,
            server.get("/verify?challenge=").await,
            server.get("/verify?challenge=0").await,
        ] {
            response.assert_status(StatusCode::BAD_REQUEST);
            assert_no_cache(&response);
            let body = response.json::<serde_json::Value>();
            assert_eq!(body["code"], "INVALID_INPUT");
            assert_eq!(body["message"], "Challenge required");
        }
    }

    // =========================================================================
    // GET /verify-recipient
    // =========================================================================

    #[tokio::test]
    async fn verify_recipient_with_valid_signature() {
        let server = build_test_server(with_secret());
        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign_recipient_check(SECRET, "member@example.com", &timestamp);

        let response = server
            .get("/verify-recipient")
            .add_query_param("email", "member@example.com")
            .add_query_param("timestamp", &timestamp)
            .add_query_param("signature", &signature)
            .await;

        response.assert_status(StatusCode::OK);
        assert_no_cache(&response);
        response.assert_json(&serde_json::json!({
            "allowed": true,
            "reason": "WordPress user"
        }));
    }

    #[tokio::test]
    async fn verify_recipient_invalid_email_is_not_forbidden() {
        let server = build_test_server(with_secret());
        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign_recipient_check(SECRET, "nope", &timestamp);

        let response = server
            .get("/verify-recipient")
            .add_query_param("email", "nope")
            .add_query_param("timestamp", &timestamp)
            .add_query_param("signature", &signature)
            .await;

        response.assert_status(StatusCode::OK);
        response.assert_json(&serde_json::json!({
            "allowed": false,
            "reason": "Invalid email"
        }));
    }

    #[tokio::test]
    async fn verify_recipient_failures_are_uniform_403() {
        let server = build_test_server(with_secret());
        let now = Utc::now().timestamp();
        let timestamp = now.to_string();
        let stale = (now - 301).to_string();
        let good = sign_recipient_check(SECRET, "member@example.com", &timestamp);
        let stale_sig = sign_recipient_check(SECRET, "member@example.com", &stale);
        let wrong = sign_recipient_check("another-secret", "member@example.com", &timestamp);

        let requests = [
            server.get("/verify-recipient?email=member@example.com").await,
            server
                .get("/verify-recipient")
                .add_query_param("email", "member@example.com")
                .add_query_param("signature", &good)
                .await,
            server
                .get("/verify-recipient")
                .add_query_param("email", "member@example.com")
                .add_query_param("timestamp", &stale)
                .add_query_param("signature", &stale_sig)
                .await,
            server
                .get("/verify-recipient")
                .add_query_param("email", "member@example.com")
                .add_query_param("timestamp", &timestamp)
                .add_query_param("signature", &wrong)
                .await,
            server
                .get("/verify-recipient")
                .add_query_param("email", "other@example.com")
                .add_query_param("timestamp", &timestamp)
                .add_query_param("signature", &good)
                .await,
        ];

        for response in requests {
            response.assert_status(StatusCode::FORBIDDEN);
            assert_no_cache(&response);
            response.assert_json(&serde_json::json!({ "code": "FORBIDDEN" }));
        }
    }

    #[tokio::test]
    async fn verify_recipient_without_stored_secret_returns_403() {
        let server = build_test_server(TestAppStateBuilder::new());
        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign_recipient_check(SECRET, "member@example.com", &timestamp);

        let response = server
            .get("/verify-recipient")
            .add_query_param("email", "member@example.com")
            .add_query_param("timestamp", &timestamp)
            .add_query_param("signature", &signature)
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
    }
}
