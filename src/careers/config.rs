//! Environment-based configuration for the ADP upstream and the HTTP server.
//!
//! | Variable                   | Default        | Description                       |
//! |----------------------------|----------------|-----------------------------------|
//! | `ADP_BASE_URL`             | required       | Upstream API base URL             |
//! | `ADP_CLIENT_ID`            | required       | OAuth2 client identifier          |
//! | `ADP_CLIENT_SECRET`        | required       | OAuth2 client secret              |
//! | `ADP_CLIENT_CERT`          | required       | PEM client certificate for mTLS   |
//! | `ADP_CLIENT_KEY`           | required       | PEM private key for mTLS          |
//! | `OPENINGS_REVALIDATE_SECS` | `600`          | Cache revalidation window         |
//! | `ADP_REQUEST_TIMEOUT_SECS` | unset          | Per-request upstream timeout      |
//! | `BIND_ADDRESS`             | `0.0.0.0:8080` | HTTP listen address               |

use std::{env, fmt, time::Duration};

use oauth2::{ClientId, ClientSecret};

use crate::careers::error::CareersError;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_REVALIDATE_SECS: u64 = 600;

/// Client credentials and the mTLS key pair. Immutable once loaded.
#[derive(Clone)]
pub struct Credential {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub client_cert_pem: String,
    pub client_key_pem: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret)
            .field("client_key_pem", &"[redacted]")
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub credential: Credential,
    pub revalidate_after: Duration,
    pub request_timeout: Option<Duration>,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, CareersError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CareersError> {
        let require = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| CareersError::MissingConfig(format!("{key} must be set")))
        };

        let base_url = require("ADP_BASE_URL")?.trim_end_matches('/').to_string();

        let credential = Credential {
            client_id: ClientId::new(require("ADP_CLIENT_ID")?),
            client_secret: ClientSecret::new(require("ADP_CLIENT_SECRET")?),
            client_cert_pem: normalize_pem(&require("ADP_CLIENT_CERT")?),
            client_key_pem: normalize_pem(&require("ADP_CLIENT_KEY")?),
        };

        let revalidate_secs = parse_secs(&lookup, "OPENINGS_REVALIDATE_SECS")?
            .unwrap_or(DEFAULT_REVALIDATE_SECS);
        let request_timeout = parse_secs(&lookup, "ADP_REQUEST_TIMEOUT_SECS")?
            .map(Duration::from_secs);

        Ok(Self {
            base_url,
            credential,
            revalidate_after: Duration::from_secs(revalidate_secs),
            request_timeout,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

fn parse_secs(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<u64>, CareersError> {
    lookup(key)
        .map(|raw| {
            raw.trim().parse::<u64>().map_err(|e| {
                CareersError::InvalidConfig(format!("{key} must be a number of seconds: {e}"))
            })
        })
        .transpose()
}

// Single-line env values often carry PEM blocks with escaped newlines.
fn normalize_pem(raw: &str) -> String {
    raw.replace("\\n", "\n").trim().to_string()
}
