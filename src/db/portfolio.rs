use sea_orm::*;
use uuid::Uuid;

use super::{non_empty, touched};
use crate::models::normalize_labels;
use crate::models::portfolio::{self, NewPortfolioItem, PortfolioItemPatch, Status};

/// Homepage cap for featured projects.
pub const FEATURED_LIMIT: u64 = 6;

/// Insert a new portfolio item.
pub async fn insert_portfolio_item(
    db: &DatabaseConnection,
    input: NewPortfolioItem,
) -> Result<portfolio::Model, DbErr> {
    let now = chrono::Utc::now();
    let new_item = portfolio::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title.trim().to_string()),
        description: Set(input.description),
        category: Set(input.category),
        tags: Set(normalize_labels(input.tags)),
        image_url: Set(input.image_url),
        project_url: Set(input.project_url.and_then(non_empty)),
        github_url: Set(input.github_url.and_then(non_empty)),
        status: Set(input.status),
        featured: Set(input.featured),
        created_at: Set(now),
        updated_at: Set(now),
    };

    new_item.insert(db).await
}

/// Fetch all portfolio items, newest first.
pub async fn get_all_portfolio_items(
    db: &DatabaseConnection,
) -> Result<Vec<portfolio::Model>, DbErr> {
    portfolio::Entity::find()
        .order_by_desc(portfolio::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch the published + featured items shown on the homepage.
pub async fn get_featured_portfolio_items(
    db: &DatabaseConnection,
) -> Result<Vec<portfolio::Model>, DbErr> {
    portfolio::Entity::find()
        .filter(portfolio::Column::Featured.eq(true))
        .filter(portfolio::Column::Status.eq(Status::Published))
        .order_by_desc(portfolio::Column::CreatedAt)
        .limit(FEATURED_LIMIT)
        .all(db)
        .await
}

/// Fetch a single portfolio item by ID.
pub async fn get_portfolio_item_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<portfolio::Model>, DbErr> {
    portfolio::Entity::find_by_id(id).one(db).await
}

/// Update an existing portfolio item.
pub async fn update_portfolio_item(
    db: &DatabaseConnection,
    id: Uuid,
    input: PortfolioItemPatch,
) -> Result<portfolio::Model, DbErr> {
    let item = portfolio::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Portfolio item not found".to_string()))?;

    let updated_at = touched(item.updated_at);
    let mut active: portfolio::ActiveModel = item.into();

    if let Some(title) = input.title {
        active.title = Set(title.trim().to_string());
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(category) = input.category {
        active.category = Set(category);
    }
    if let Some(tags) = input.tags {
        active.tags = Set(normalize_labels(tags));
    }
    if let Some(image_url) = input.image_url {
        active.image_url = Set(image_url);
    }
    if let Some(project_url) = input.project_url {
        active.project_url = Set(non_empty(project_url));
    }
    if let Some(github_url) = input.github_url {
        active.github_url = Set(non_empty(github_url));
    }
    if let Some(status) = input.status {
        active.status = Set(status);
    }
    if let Some(featured) = input.featured {
        active.featured = Set(featured);
    }
    active.updated_at = Set(updated_at);

    active.update(db).await
}

/// Delete a portfolio item by ID.
pub async fn delete_portfolio_item(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<DeleteResult, DbErr> {
    portfolio::Entity::delete_by_id(id).exec(db).await
}
