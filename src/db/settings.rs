use sea_orm::sea_query::OnConflict;
use sea_orm::*;

use crate::models::settings;

/// Fetch every site setting.
pub async fn get_all_settings(db: &DatabaseConnection) -> Result<Vec<settings::Model>, DbErr> {
    settings::Entity::find()
        .order_by_asc(settings::Column::Key)
        .all(db)
        .await
}

pub async fn get_setting(
    db: &DatabaseConnection,
    key: &str,
) -> Result<Option<settings::Model>, DbErr> {
    settings::Entity::find_by_id(key.to_owned()).one(db).await
}

/// Insert or overwrite the value stored under `key`.
pub async fn upsert_setting(
    db: &DatabaseConnection,
    key: &str,
    value: &str,
) -> Result<settings::Model, DbErr> {
    let now = chrono::Utc::now();
    let row = settings::ActiveModel {
        key: Set(key.to_owned()),
        value: Set(value.to_owned()),
        created_at: Set(now),
        updated_at: Set(now),
    };

    settings::Entity::insert(row)
        .on_conflict(
            OnConflict::column(settings::Column::Key)
                .update_columns([settings::Column::Value, settings::Column::UpdatedAt])
                .to_owned(),
        )
        .exec_with_returning(db)
        .await
}
