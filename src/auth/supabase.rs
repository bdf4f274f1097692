use serde::{Deserialize, Serialize};

use super::AuthError;

/// Thin client for the Supabase Auth endpoints the dashboard needs.
#[derive(Clone)]
pub struct SupabaseAuth {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Tokens returned by a successful password grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
    pub token_type: Option<String>,
}

impl SupabaseAuth {
    pub fn new(supabase_url: &str, anon_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: format!("{}/auth/v1", supabase_url.trim_end_matches('/')),
            anon_key: anon_key.to_string(),
        }
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let response = self
            .client
            .post(format!("{}/token?grant_type=password", self.base_url))
            .header("apikey", &self.anon_key)
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::Upstream(format!("Failed to reach auth server: {e}")))?;

        let status = response.status();
        if status.is_client_error() {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(AuthError::Upstream(format!("Sign-in failed: HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| AuthError::Upstream(format!("Failed to parse session: {e}")))
    }

    pub async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(format!("{}/logout", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::Upstream(format!("Failed to reach auth server: {e}")))?;

        let status = response.status();
        if status.is_success() || status == reqwest::StatusCode::UNAUTHORIZED {
            // An already revoked token counts as signed out.
            Ok(())
        } else {
            Err(AuthError::Upstream(format!("Sign-out failed: HTTP {status}")))
        }
    }
}
