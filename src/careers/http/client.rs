//! mTLS HTTP client shared by the token exchange and the requisition fetch.
//!
//! This module provides:
//! - A reqwest client presenting the configured client certificate
//! - Tracing middleware so every upstream call gets its own span
//!
//! Server certificate validation is left at reqwest's defaults for both
//! endpoints.

use std::time::Duration;

use http::Extensions;
use reqwest::{Identity, Request, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Result as MiddlewareResult};
use reqwest_tracing::{
    ReqwestOtelSpanBackend, TracingMiddleware, default_on_request_end, reqwest_otel_span,
};
use tracing::Span;

use crate::careers::{config::Credential, error::CareersError};

// Spans deliberately skip bodies and headers: both carry credentials.
// Used only through TracingMiddleware<UpstreamTracing>, which the compiler
// does not count as construction.
#[allow(dead_code)]
struct UpstreamTracing;

impl ReqwestOtelSpanBackend for UpstreamTracing {
    fn on_request_start(req: &Request, _extension: &mut Extensions) -> Span {
        reqwest_otel_span!(name = "adp-api-request", req)
    }

    fn on_request_end(
        span: &Span,
        outcome: &MiddlewareResult<Response>,
        _extension: &mut Extensions,
    ) {
        default_on_request_end(span, outcome);
    }
}

/// Builds the mTLS client from the certificate and key in `credential`.
///
/// # Errors
/// Returns `CareersError::InvalidConfig` when the PEM material cannot be
/// parsed into a TLS identity or the client cannot be constructed.
pub fn build_mtls_client(
    credential: &Credential,
    timeout: Option<Duration>,
) -> Result<ClientWithMiddleware, CareersError> {
    let mut pem = credential.client_cert_pem.clone().into_bytes();
    pem.push(b'\n');
    pem.extend_from_slice(credential.client_key_pem.as_bytes());

    let identity = Identity::from_pem(&pem)
        .map_err(|e| CareersError::InvalidConfig(format!("invalid client certificate or key: {e}")))?;

    let mut builder = reqwest::Client::builder().use_rustls_tls().identity(identity);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    let client = builder
        .build()
        .map_err(|e| CareersError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

    Ok(with_tracing(client))
}

/// Wraps a plain reqwest client with the upstream tracing middleware.
pub fn with_tracing(client: reqwest::Client) -> ClientWithMiddleware {
    ClientBuilder::new(client)
        .with(TracingMiddleware::<UpstreamTracing>::new())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oauth2::{ClientId, ClientSecret};

    #[test]
    fn garbage_pem_is_rejected_as_invalid_config() {
        let credential = Credential {
            client_id: ClientId::new("id".to_string()),
            client_secret: ClientSecret::new("secret".to_string()),
            client_cert_pem: "not a certificate".to_string(),
            client_key_pem: "not a key".to_string(),
        };

        let result = build_mtls_client(&credential, None);
        assert!(matches!(result, Err(CareersError::InvalidConfig(_))));
    }
}
