//! Client-credentials token exchange against `/auth/oauth/v2/token`.

use oauth2::AccessToken;
use serde::Deserialize;
use tracing::{debug, warn};

use super::AdpClient;
use crate::careers::error::CareersError;

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl AdpClient {
    /// Exchanges the client id and secret for a bearer token.
    ///
    /// One attempt, no retry. Any transport failure, non-2xx status or
    /// malformed body maps to `CareersError::Authentication`, keeping the
    /// upstream status when there was one.
    pub async fn acquire_token(&self) -> Result<AccessToken, CareersError> {
        let url = format!("{}/auth/oauth/v2/token", self.base_url);

        let response = self
            .http
            .post(&url)
            .basic_auth(
                self.credential.client_id.as_str(),
                Some(self.credential.client_secret.secret()),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "token request failed");
                CareersError::Authentication { status: None }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, %body, "token endpoint rejected client credentials");
            return Err(CareersError::Authentication { status: Some(status) });
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "token response was not valid JSON");
            CareersError::Authentication { status: None }
        })?;

        if token.access_token.trim().is_empty() {
            warn!("token endpoint returned an empty access token");
            return Err(CareersError::Authentication { status: None });
        }

        debug!("obtained ADP access token");
        Ok(AccessToken::new(token.access_token))
    }
}
