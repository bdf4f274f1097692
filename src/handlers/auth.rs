use actix_web::{HttpResponse, web};

use crate::auth::AuthError;
use crate::auth::authorization::Authenticator;
use crate::auth::middleware::{AdminUser, BearerToken};
use crate::auth::supabase::{Credentials, SupabaseAuth};
use crate::error::{ApiError, require_text};

/// POST /api/auth/login: password sign-in; only allowlisted accounts get a session.
pub async fn login(
    supabase: web::Data<SupabaseAuth>,
    authenticator: web::Data<Authenticator>,
    body: web::Json<Credentials>,
) -> Result<HttpResponse, ApiError> {
    let credentials = body.into_inner();
    require_text("email", &credentials.email)?;
    require_text("password", &credentials.password)?;

    let session = supabase.sign_in(&credentials).await?;

    match authenticator.authenticate(&session.access_token).await {
        Ok(user) => {
            tracing::info!(email = %user.email, "Admin signed in");
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "session": session,
                "user": user,
            })))
        }
        Err(e) => {
            if matches!(e, AuthError::NotAdmin) {
                if let Err(revoke) = supabase.sign_out(&session.access_token).await {
                    tracing::warn!(error = %revoke, "Failed to revoke non-admin session");
                }
            }
            Err(e.into())
        }
    }
}

/// POST /api/auth/logout: revoke the caller's session.
pub async fn logout(
    supabase: web::Data<SupabaseAuth>,
    token: BearerToken,
) -> Result<HttpResponse, ApiError> {
    supabase.sign_out(&token.0).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Signed out",
    })))
}

/// GET /api/auth/me: the signed-in operator.
pub async fn me(user: AdminUser) -> HttpResponse {
    HttpResponse::Ok().json(user.0)
}
