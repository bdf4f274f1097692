use serde::Serialize;
use uuid::Uuid;

use super::AuthError;
use super::jwks::JwksCache;
use super::jwt::{self, Claims};

/// How bearer tokens are checked.
#[derive(Clone)]
pub enum TokenVerifier {
    Jwks(JwksCache),
    SharedSecret(String),
}

impl TokenVerifier {
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        match self {
            TokenVerifier::Jwks(cache) => cache.validate_token(token).await,
            TokenVerifier::SharedSecret(secret) => jwt::validate_hs256(token, secret),
        }
    }
}

/// Emails allowed into the dashboard, compared case-insensitively.
#[derive(Debug, Clone)]
pub struct AdminAllowlist(Vec<String>);

impl AdminAllowlist {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            emails
                .into_iter()
                .map(|e| e.as_ref().trim().to_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        )
    }

    pub fn permits(&self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        self.0.iter().any(|allowed| *allowed == email)
    }
}

/// The operator behind a verified token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminIdentity {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Option<String>,
}

#[derive(Clone)]
pub struct Authenticator {
    verifier: TokenVerifier,
    allowlist: AdminAllowlist,
}

impl Authenticator {
    pub fn new(verifier: TokenVerifier, allowlist: AdminAllowlist) -> Self {
        Self { verifier, allowlist }
    }

    /// Verify the token and require an allowlisted email.
    pub async fn authenticate(&self, token: &str) -> Result<AdminIdentity, AuthError> {
        let claims = self.verifier.verify(token).await?;
        let id = claims.user_id()?;
        let email = claims
            .user_email()
            .ok_or_else(|| AuthError::InvalidToken("No email in token claims".to_string()))?;

        if !self.allowlist.permits(&email) {
            tracing::warn!(%email, "Rejected non-admin account");
            return Err(AuthError::NotAdmin);
        }

        Ok(AdminIdentity {
            id,
            name: claims.display_name(),
            avatar_url: claims.avatar_url(),
            role: claims.role.clone(),
            email,
        })
    }
}
