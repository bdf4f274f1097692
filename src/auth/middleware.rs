use actix_web::FromRequest;
use actix_web::{HttpRequest, dev::Payload, web};
use std::future::Future;
use std::pin::Pin;

use super::AuthError;
use super::authorization::{AdminIdentity, Authenticator};
use crate::error::ApiError;

/// Extractor guarding every admin route.
pub struct AdminUser(pub AdminIdentity);

/// Raw bearer token of the request, for routes that forward it upstream.
pub struct BearerToken(pub String);

fn bearer_token(req: &HttpRequest) -> Result<String, AuthError> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    header
        .strip_prefix("Bearer ")
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MalformedHeader)
}

impl FromRequest for BearerToken {
    type Error = ApiError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        std::future::ready(bearer_token(req).map(BearerToken).map_err(ApiError::from))
    }
}

impl FromRequest for AdminUser {
    type Error = ApiError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = bearer_token(&req)?;

            let authenticator = req
                .app_data::<web::Data<Authenticator>>()
                .ok_or(AuthError::Misconfigured("Authenticator not configured"))?;

            let identity = authenticator.authenticate(&token).await?;
            Ok(AdminUser(identity))
        })
    }
}
