use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog;
use crate::error::ApiError;
use crate::models::portfolio::PublicPortfolioItem;
use crate::store::{ContentStore, PgStore};

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

fn public(items: Vec<crate::models::PortfolioItem>) -> Vec<PublicPortfolioItem> {
    items.into_iter().map(PublicPortfolioItem::from).collect()
}

/// GET /api/portfolio: published items, optionally filtered by category and search term.
pub async fn get_portfolio(
    store: web::Data<PgStore>,
    query: web::Query<PortfolioQuery>,
) -> impl Responder {
    let items = catalog::published(store.portfolio_items().await);
    let items = catalog::filter_by_category(
        items,
        query.category.as_deref().unwrap_or(catalog::ALL),
    );
    let items = catalog::search(items, query.search.as_deref().unwrap_or_default());

    HttpResponse::Ok().json(public(items))
}

/// GET /api/portfolio/categories: `All` plus the categories of published items.
pub async fn get_categories(store: web::Data<PgStore>) -> impl Responder {
    let items = catalog::published(store.portfolio_items().await);
    HttpResponse::Ok().json(catalog::categories(&items))
}

/// GET /api/portfolio/featured: homepage selection.
pub async fn get_featured(store: web::Data<PgStore>) -> impl Responder {
    HttpResponse::Ok().json(public(store.featured_portfolio_items().await))
}

/// GET /api/portfolio/{id}: a single published item.
pub async fn get_portfolio_item(
    store: web::Data<PgStore>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    match store.portfolio_item(id).await {
        Some(item) if item.is_published() => {
            Ok(HttpResponse::Ok().json(PublicPortfolioItem::from(item)))
        }
        _ => Err(ApiError::NotFound(format!("Portfolio item {id} not found"))),
    }
}
