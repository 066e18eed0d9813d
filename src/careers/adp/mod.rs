//! Client for the ADP Workforce Now staffing API.
//!
//! - `token`: client-credentials exchange for a bearer token
//! - `requisitions`: paginated listing of open job requisitions
//! - `model`: wire types for the listing response
//!
//! Both calls share one mTLS client and a single [`Credential`].

pub mod model;
mod requisitions;
mod token;

use crate::careers::{
    config::{Config, Credential},
    error::CareersError,
    http::{ClientWithMiddleware, build_mtls_client},
};

#[derive(Clone)]
pub struct AdpClient {
    http: ClientWithMiddleware,
    base_url: String,
    credential: Credential,
}

impl AdpClient {
    /// Creates a client presenting the configured certificate on every call.
    pub fn from_config(config: &Config) -> Result<Self, CareersError> {
        let http = build_mtls_client(&config.credential, config.request_timeout)?;
        Ok(Self::new(http, &config.base_url, config.credential.clone()))
    }

    pub fn new(http: ClientWithMiddleware, base_url: &str, credential: Credential) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
        }
    }
}
