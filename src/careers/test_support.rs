//! Shared fixtures for upstream-facing tests.

use oauth2::{ClientId, ClientSecret};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::careers::{adp::AdpClient, config::Credential, http::with_tracing};

pub fn credential() -> Credential {
    Credential {
        client_id: ClientId::new("client-id".to_string()),
        client_secret: ClientSecret::new("client-secret".to_string()),
        client_cert_pem: String::new(),
        client_key_pem: String::new(),
    }
}

/// Client pointed at the mock server over plain HTTP, without a TLS identity.
pub fn adp_client(server: &MockServer) -> AdpClient {
    AdpClient::new(with_tracing(reqwest::Client::new()), &server.uri(), credential())
}

/// Mounts a token endpoint that always issues the bearer token `tok`.
pub async fn mock_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/oauth/v2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "tok" })))
        .mount(server)
        .await;
}

/// A complete upstream requisition record.
pub fn requisition_json(title: &str, department: &str, expire_date: Option<&str>) -> Value {
    json!({
        "postingInstructions": [{
            "expireDate": expire_date,
            "nameCode": { "codeValue": title }
        }],
        "organizationalUnits": [{ "nameCode": { "shortName": department } }],
        "requisitionLocations": [{
            "address": {
                "cityName": "Austin",
                "countryCode": "US",
                "countrySubdivisionLevel1": { "codeValue": "TX" }
            }
        }],
        "workerTypeCode": { "shortName": "Full Time" },
        "links": [
            { "title": "Apply Internally", "href": "https://intranet.example/apply" },
            { "title": "HL External Career Center", "href": format!("https://careers.example/{title}") }
        ]
    })
}
