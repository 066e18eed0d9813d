//! HTTP transport layer for the ADP staffing API.
//!
//! This module owns the mutual-TLS client construction and request tracing.
//! The token exchange and the paginated fetch both go through the client
//! built here.

mod client;

pub use client::{build_mtls_client, with_tracing};

// Re-export the client type used across the upstream modules
pub use reqwest_middleware::ClientWithMiddleware;
