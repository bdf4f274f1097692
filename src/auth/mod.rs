pub mod authorization;
pub mod jwks;
pub mod jwt;
pub mod middleware;
pub mod supabase;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingToken,
    #[error("Authorization header must be: Bearer <token>")]
    MalformedHeader,
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Account is not allowed to manage this site")]
    NotAdmin,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Auth server error: {0}")]
    Upstream(String),
    #[error("{0}")]
    Misconfigured(&'static str),
}
