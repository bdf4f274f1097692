use sea_orm::*;
use uuid::Uuid;

use super::{non_empty, touched};
use crate::models::experience::{self, ExperiencePatch, NewExperience};
use crate::models::normalize_labels;

/// Insert a new experience entry.
pub async fn insert_experience(
    db: &DatabaseConnection,
    input: NewExperience,
) -> Result<experience::Model, DbErr> {
    let now = chrono::Utc::now();
    let new_entry = experience::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title.trim().to_string()),
        company: Set(input.company.trim().to_string()),
        location: Set(input.location.and_then(non_empty)),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        is_current: Set(input.is_current),
        description: Set(input.description),
        skills: Set(normalize_labels(input.skills)),
        kind: Set(input.kind),
        created_at: Set(now),
        updated_at: Set(now),
    };

    new_entry.insert(db).await
}

/// Fetch the whole timeline, most recent start first.
pub async fn get_all_experience(db: &DatabaseConnection) -> Result<Vec<experience::Model>, DbErr> {
    experience::Entity::find()
        .order_by_desc(experience::Column::StartDate)
        .all(db)
        .await
}

pub async fn get_experience_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<experience::Model>, DbErr> {
    experience::Entity::find_by_id(id).one(db).await
}

/// Update an existing experience entry.
pub async fn update_experience(
    db: &DatabaseConnection,
    id: Uuid,
    input: ExperiencePatch,
) -> Result<experience::Model, DbErr> {
    let entry = experience::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Experience not found".to_string()))?;

    let updated_at = touched(entry.updated_at);
    let mut active: experience::ActiveModel = entry.into();

    if let Some(title) = input.title {
        active.title = Set(title.trim().to_string());
    }
    if let Some(company) = input.company {
        active.company = Set(company.trim().to_string());
    }
    if let Some(location) = input.location {
        active.location = Set(non_empty(location));
    }
    if let Some(start_date) = input.start_date {
        active.start_date = Set(start_date);
    }
    if let Some(end_date) = input.end_date {
        active.end_date = Set(end_date);
    }
    if let Some(is_current) = input.is_current {
        active.is_current = Set(is_current);
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(skills) = input.skills {
        active.skills = Set(normalize_labels(skills));
    }
    if let Some(kind) = input.kind {
        active.kind = Set(kind);
    }
    active.updated_at = Set(updated_at);

    active.update(db).await
}

/// Delete an experience entry by ID.
pub async fn delete_experience(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    experience::Entity::delete_by_id(id).exec(db).await
}
