use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("Invalid SUPABASE_URL format. Expected: https://PROJECT.supabase.co")]
    InvalidSupabaseUrl,
    #[error("PORT must be a number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    /// Legacy HS256 signing secret; when set, tokens are checked against it
    /// instead of the project JWKS.
    pub supabase_jwt_secret: Option<String>,
    pub admin_emails: Vec<String>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let supabase_url = required("SUPABASE_URL")?.trim_end_matches('/').to_string();
        project_ref(&supabase_url)?;

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            supabase_anon_key: required("SUPABASE_ANON_KEY")?,
            supabase_jwt_secret: env::var("SUPABASE_JWT_SECRET").ok().filter(|s| !s.is_empty()),
            admin_emails: parse_emails(&required("ADMIN_EMAILS")?),
            supabase_url,
            port,
        })
    }

    pub fn project_ref(&self) -> Result<&str, ConfigError> {
        project_ref(&self.supabase_url)
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

/// Extract `PROJECT` from `https://PROJECT.supabase.co`.
pub fn project_ref(supabase_url: &str) -> Result<&str, ConfigError> {
    supabase_url
        .strip_prefix("https://")
        .and_then(|s| s.strip_suffix(".supabase.co"))
        .filter(|s| !s.is_empty() && !s.contains('/'))
        .ok_or(ConfigError::InvalidSupabaseUrl)
}

/// Comma separated, case-insensitive.
pub fn parse_emails(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}
