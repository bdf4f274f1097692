use actix_web::{HttpResponse, Responder, web};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::experience::TimelineEntry;
use crate::store::{ContentStore, PgStore};

/// GET /api/experience: the timeline, latest start first, with display labels.
pub async fn get_experience(store: web::Data<PgStore>) -> impl Responder {
    let timeline: Vec<TimelineEntry> = store
        .experience()
        .await
        .into_iter()
        .map(TimelineEntry::from)
        .collect();
    HttpResponse::Ok().json(timeline)
}

/// GET /api/experience/{id}: one timeline entry with its labels.
pub async fn get_experience_entry(
    store: web::Data<PgStore>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let entry = store
        .experience_entry(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Experience {id} not found")))?;
    Ok(HttpResponse::Ok().json(TimelineEntry::from(entry)))
}
