//! The seam between callers and persistence.
//!
//! Reads never fail from the caller's point of view: a database error is
//! logged and the read yields an empty result. Writes log and hand the error
//! back so the caller can surface it.

use sea_orm::{DatabaseConnection, DbErr};
use thiserror::Error;
use uuid::Uuid;

use crate::db::{experience as experience_db, portfolio as portfolio_db, settings as settings_db};
use crate::models::experience::{ExperiencePatch, NewExperience};
use crate::models::portfolio::{NewPortfolioItem, PortfolioItemPatch};
use crate::models::{Experience, PortfolioItem, SiteSetting};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(what) => StoreError::NotFound(what),
            other => StoreError::Db(other),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait ContentStore {
    async fn portfolio_items(&self) -> Vec<PortfolioItem>;
    async fn featured_portfolio_items(&self) -> Vec<PortfolioItem>;
    async fn portfolio_item(&self, id: Uuid) -> Option<PortfolioItem>;
    async fn create_portfolio_item(
        &self,
        input: NewPortfolioItem,
    ) -> Result<PortfolioItem, StoreError>;
    async fn update_portfolio_item(
        &self,
        id: Uuid,
        patch: PortfolioItemPatch,
    ) -> Result<PortfolioItem, StoreError>;
    async fn delete_portfolio_item(&self, id: Uuid) -> Result<(), StoreError>;

    async fn experience(&self) -> Vec<Experience>;
    async fn experience_entry(&self, id: Uuid) -> Option<Experience>;
    async fn create_experience(&self, input: NewExperience) -> Result<Experience, StoreError>;
    async fn update_experience(
        &self,
        id: Uuid,
        patch: ExperiencePatch,
    ) -> Result<Experience, StoreError>;
    async fn delete_experience(&self, id: Uuid) -> Result<(), StoreError>;

    async fn settings(&self) -> Vec<SiteSetting>;
    /// Value stored under `key`, empty when missing.
    async fn setting(&self, key: &str) -> String;
    async fn update_setting(&self, key: &str, value: &str) -> Result<SiteSetting, StoreError>;
}

/// Postgres-backed store.
#[derive(Clone)]
pub struct PgStore {
    db: DatabaseConnection,
}

impl PgStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn degrade<T: Default>(what: &str, result: Result<T, DbErr>) -> T {
    result.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Error fetching {what}");
        T::default()
    })
}

fn propagate<T>(what: &str, result: Result<T, DbErr>) -> Result<T, StoreError> {
    result.map_err(|e| {
        tracing::error!(error = %e, "Error {what}");
        StoreError::from(e)
    })
}

fn expect_deleted(what: &str, id: Uuid, rows_affected: u64) -> Result<(), StoreError> {
    if rows_affected == 0 {
        tracing::warn!(%id, "Nothing deleted for {what}");
        return Err(StoreError::NotFound(format!("{what} {id}")));
    }
    Ok(())
}

impl ContentStore for PgStore {
    async fn portfolio_items(&self) -> Vec<PortfolioItem> {
        degrade(
            "portfolio items",
            portfolio_db::get_all_portfolio_items(&self.db).await,
        )
    }

    async fn featured_portfolio_items(&self) -> Vec<PortfolioItem> {
        degrade(
            "featured portfolio items",
            portfolio_db::get_featured_portfolio_items(&self.db).await,
        )
    }

    async fn portfolio_item(&self, id: Uuid) -> Option<PortfolioItem> {
        degrade(
            "portfolio item",
            portfolio_db::get_portfolio_item_by_id(&self.db, id).await,
        )
    }

    async fn create_portfolio_item(
        &self,
        input: NewPortfolioItem,
    ) -> Result<PortfolioItem, StoreError> {
        propagate(
            "creating portfolio item",
            portfolio_db::insert_portfolio_item(&self.db, input).await,
        )
    }

    async fn update_portfolio_item(
        &self,
        id: Uuid,
        patch: PortfolioItemPatch,
    ) -> Result<PortfolioItem, StoreError> {
        propagate(
            "updating portfolio item",
            portfolio_db::update_portfolio_item(&self.db, id, patch).await,
        )
    }

    async fn delete_portfolio_item(&self, id: Uuid) -> Result<(), StoreError> {
        let result = propagate(
            "deleting portfolio item",
            portfolio_db::delete_portfolio_item(&self.db, id).await,
        )?;
        expect_deleted("Portfolio item", id, result.rows_affected)
    }

    async fn experience(&self) -> Vec<Experience> {
        degrade("experience", experience_db::get_all_experience(&self.db).await)
    }

    async fn experience_entry(&self, id: Uuid) -> Option<Experience> {
        degrade(
            "experience entry",
            experience_db::get_experience_by_id(&self.db, id).await,
        )
    }

    async fn create_experience(&self, input: NewExperience) -> Result<Experience, StoreError> {
        propagate(
            "creating experience",
            experience_db::insert_experience(&self.db, input).await,
        )
    }

    async fn update_experience(
        &self,
        id: Uuid,
        patch: ExperiencePatch,
    ) -> Result<Experience, StoreError> {
        propagate(
            "updating experience",
            experience_db::update_experience(&self.db, id, patch).await,
        )
    }

    async fn delete_experience(&self, id: Uuid) -> Result<(), StoreError> {
        let result = propagate(
            "deleting experience",
            experience_db::delete_experience(&self.db, id).await,
        )?;
        expect_deleted("Experience", id, result.rows_affected)
    }

    async fn settings(&self) -> Vec<SiteSetting> {
        degrade("settings", settings_db::get_all_settings(&self.db).await)
    }

    async fn setting(&self, key: &str) -> String {
        degrade("setting", settings_db::get_setting(&self.db, key).await)
            .map(|s| s.value)
            .unwrap_or_default()
    }

    async fn update_setting(&self, key: &str, value: &str) -> Result<SiteSetting, StoreError> {
        propagate(
            "updating setting",
            settings_db::upsert_setting(&self.db, key, value).await,
        )
    }
}
