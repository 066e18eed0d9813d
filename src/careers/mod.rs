//! Careers openings service backed by the ADP Workforce Now staffing API.
//!
//! The implementation is organized into:
//!
//! - `config`: Environment configuration and client credentials
//! - `error`: Error types and their HTTP responses
//! - `http`: mTLS client with request tracing
//! - `adp`: Token exchange and paginated requisition fetch
//! - `openings`: Department grouping and expiry filtering
//! - `cache`: Time-windowed cache for the raw requisitions
//! - `handler`: Axum route handlers
//!
//! The main entry point is [`router`], built from an [`AppState`].

pub mod adp;
pub mod cache;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod openings;

#[cfg(test)]
pub mod test_support;

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::careers::{
    adp::{AdpClient, model::Requisition},
    cache::RevalidatingCache,
    config::Config,
    error::CareersError,
};

/// Shared state injected into handlers. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub adp: AdpClient,
    pub requisitions: Arc<RevalidatingCache<Arc<Vec<Requisition>>>>,
}

impl AppState {
    /// Builds the mTLS client and an empty cache from configuration.
    pub fn from_config(config: &Config) -> Result<Self, CareersError> {
        Ok(Self::new(
            AdpClient::from_config(config)?,
            RevalidatingCache::new(config.revalidate_after),
        ))
    }

    pub fn new(adp: AdpClient, requisitions: RevalidatingCache<Arc<Vec<Requisition>>>) -> Self {
        Self {
            adp,
            requisitions: Arc::new(requisitions),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health))
        .route("/api/openings", get(handler::get_openings))
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::careers::test_support::{adp_client, mock_token, requisition_json};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LISTING: &str = "/staffing/v1/job-requisitions";

    fn server_for(upstream: &MockServer, window: Duration) -> TestServer {
        let state = AppState::new(adp_client(upstream), RevalidatingCache::new(window));
        TestServer::new(router(state)).unwrap()
    }

    #[tokio::test]
    async fn openings_are_grouped_by_department() {
        let upstream = MockServer::start().await;
        mock_token(&upstream).await;
        Mock::given(method("GET"))
            .and(path(LISTING))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jobRequisitions": [
                    requisition_json("Backend Engineer", "Engineering", Some("2999-01-01")),
                    requisition_json("Company Wide", "All", None),
                    requisition_json("Recruiter", "People", None),
                    requisition_json("Retired Role", "Engineering", Some("2000-01-01")),
                    requisition_json("SRE", "Engineering", None),
                ],
                "meta": { "totalNumber": 5 }
            })))
            .expect(1)
            .mount(&upstream)
            .await;

        let response = server_for(&upstream, Duration::from_secs(600))
            .get("/api/openings")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let body = body.as_object().unwrap();
        assert_eq!(body.len(), 2);
        let engineering: Vec<_> = body["Engineering"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["jobTitle"].as_str().unwrap())
            .collect();
        assert_eq!(engineering, vec!["Backend Engineer", "SRE"]);
        assert_eq!(body["People"][0]["jobTitle"], "Recruiter");
        assert!(body.get("All").is_none());
    }

    #[tokio::test]
    async fn token_rejection_surfaces_status_without_upstream_body() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/oauth/v2/token"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad client secret"))
            .mount(&upstream)
            .await;

        let response = server_for(&upstream, Duration::from_secs(600))
            .get("/api/openings")
            .expect_failure()
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        response.assert_json(&json!({ "error": "Failed to retrieve access token" }));
    }

    #[tokio::test]
    async fn listing_failure_surfaces_upstream_status() {
        let upstream = MockServer::start().await;
        mock_token(&upstream).await;
        Mock::given(method("GET"))
            .and(path(LISTING))
            .respond_with(ResponseTemplate::new(403))
            .mount(&upstream)
            .await;

        let response = server_for(&upstream, Duration::from_secs(600))
            .get("/api/openings")
            .expect_failure()
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
        response.assert_json(&json!({ "error": "Failed to fetch job requisitions" }));
    }

    #[tokio::test]
    async fn second_request_in_window_is_served_from_cache() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/oauth/v2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "tok" })))
            .expect(1)
            .mount(&upstream)
            .await;
        Mock::given(method("GET"))
            .and(path(LISTING))
            .and(query_param("$skip", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jobRequisitions": [requisition_json("Analyst", "Finance", None)],
                "meta": { "totalNumber": 1 }
            })))
            .expect(1)
            .mount(&upstream)
            .await;

        let server = server_for(&upstream, Duration::from_secs(600));
        let first: Value = server.get("/api/openings").await.json();
        let second: Value = server.get("/api/openings").await.json();

        assert_eq!(first, second);
        assert_eq!(first["Finance"][0]["jobTitle"], "Analyst");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let upstream = MockServer::start().await;
        let response = server_for(&upstream, Duration::from_secs(1)).get("/health").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "ok");
    }
}
