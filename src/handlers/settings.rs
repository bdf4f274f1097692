use actix_web::{HttpResponse, Responder, web};

use crate::models::settings;
use crate::store::{ContentStore, PgStore};

/// GET /api/settings: every setting as a key → value map.
pub async fn get_settings(store: web::Data<PgStore>) -> impl Responder {
    HttpResponse::Ok().json(settings::to_map(store.settings().await))
}

/// GET /api/settings/{key}: empty value when the key is not set.
pub async fn get_setting(store: web::Data<PgStore>, path: web::Path<String>) -> impl Responder {
    let key = path.into_inner();
    let value = store.setting(&key).await;
    HttpResponse::Ok().json(serde_json::json!({
        "key": key,
        "value": value,
    }))
}
