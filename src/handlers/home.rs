use actix_web::{HttpResponse, Responder, web};

use crate::models::experience::TimelineEntry;
use crate::models::portfolio::PublicPortfolioItem;
use crate::store::{ContentStore, PgStore};

/// GET /api/home: featured projects and the experience timeline together.
pub async fn get_home(store: web::Data<PgStore>) -> impl Responder {
    let (featured, experience) =
        futures_util::join!(store.featured_portfolio_items(), store.experience());

    HttpResponse::Ok().json(serde_json::json!({
        "featured": featured.into_iter().map(PublicPortfolioItem::from).collect::<Vec<_>>(),
        "experience": experience.into_iter().map(TimelineEntry::from).collect::<Vec<_>>(),
    }))
}

/// GET /health
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
