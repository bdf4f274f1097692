//! In-memory view backing the admin dashboard.
//!
//! Loaded once in bulk, then patched locally after each successful write
//! instead of re-fetching. There is no revision tracking, so the view can
//! drift from the database when something else writes to it.

use futures_util::future::join_all;
use serde::Serialize;
use uuid::Uuid;

use crate::models::experience::{ExperiencePatch, NewExperience};
use crate::models::portfolio::{NewPortfolioItem, PortfolioItemPatch, Status};
use crate::models::settings::{self, SettingsForm, SettingsMap};
use crate::models::{Experience, PortfolioItem};
use crate::store::{ContentStore, PgStore, StoreError};

/// The process-wide dashboard shared by admin routes.
pub type SharedDashboard = tokio::sync::Mutex<DashboardState<PgStore>>;

pub const SETTINGS_SAVED: &str = "Settings saved successfully!";
pub const SETTINGS_SAVE_FAILED: &str = "Error saving settings. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    pub total_projects: usize,
    pub published: usize,
    pub drafts: usize,
    /// Not tracked by the schema; always zero.
    pub views: u64,
}

impl PortfolioStats {
    pub fn from_items(items: &[PortfolioItem]) -> Self {
        Self {
            total_projects: items.len(),
            published: items.iter().filter(|i| i.status == Status::Published).count(),
            drafts: items.iter().filter(|i| i.status == Status::Draft).count(),
            views: 0,
        }
    }
}

/// Failed settings save. Displays the one message shown to the operator.
#[derive(Debug, thiserror::Error)]
#[error("{}", SETTINGS_SAVE_FAILED)]
pub struct SettingsSaveError {
    pub failed_keys: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub portfolio_items: Vec<PortfolioItem>,
    pub experience_items: Vec<Experience>,
    pub settings: SettingsForm,
    pub stats: PortfolioStats,
}

pub struct DashboardState<S> {
    store: S,
    portfolio_items: Vec<PortfolioItem>,
    experience_items: Vec<Experience>,
    settings: SettingsMap,
    is_loading: bool,
}

impl<S: ContentStore> DashboardState<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            portfolio_items: Vec::new(),
            experience_items: Vec::new(),
            settings: SettingsMap::new(),
            is_loading: false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Set only while `load` runs. `load` holds `&mut self`, so callers going
    /// through [`SharedDashboard`] wait on the lock and always read `false`.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn portfolio_items(&self) -> &[PortfolioItem] {
        &self.portfolio_items
    }

    pub fn experience_items(&self) -> &[Experience] {
        &self.experience_items
    }

    pub fn settings(&self) -> &SettingsMap {
        &self.settings
    }

    /// Replace every cache with a fresh read; the three reads run together.
    pub async fn load(&mut self) {
        self.is_loading = true;
        let (portfolio, experience, settings) = futures_util::join!(
            self.store.portfolio_items(),
            self.store.experience(),
            self.store.settings(),
        );
        self.portfolio_items = portfolio;
        self.experience_items = experience;
        self.settings = settings::to_map(settings);
        self.is_loading = false;

        tracing::info!(
            portfolio = self.portfolio_items.len(),
            experience = self.experience_items.len(),
            settings = self.settings.len(),
            "Dashboard data loaded"
        );
    }

    pub fn stats(&self) -> PortfolioStats {
        PortfolioStats::from_items(&self.portfolio_items)
    }

    pub fn settings_form(&self) -> SettingsForm {
        SettingsForm::from_map(&self.settings)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            portfolio_items: self.portfolio_items.clone(),
            experience_items: self.experience_items.clone(),
            settings: self.settings_form(),
            stats: self.stats(),
        }
    }

    pub async fn create_portfolio_item(
        &mut self,
        input: NewPortfolioItem,
    ) -> Result<PortfolioItem, StoreError> {
        let item = self.store.create_portfolio_item(input).await?;
        self.portfolio_items.push(item.clone());
        Ok(item)
    }

    pub async fn update_portfolio_item(
        &mut self,
        id: Uuid,
        patch: PortfolioItemPatch,
    ) -> Result<PortfolioItem, StoreError> {
        let item = self.store.update_portfolio_item(id, patch).await?;
        replace_or_push(&mut self.portfolio_items, item.clone(), |i| i.id);
        Ok(item)
    }

    pub async fn delete_portfolio_item(&mut self, id: Uuid) -> Result<(), StoreError> {
        self.store.delete_portfolio_item(id).await?;
        self.portfolio_items.retain(|i| i.id != id);
        Ok(())
    }

    pub async fn create_experience(
        &mut self,
        input: NewExperience,
    ) -> Result<Experience, StoreError> {
        let entry = self.store.create_experience(input).await?;
        self.experience_items.push(entry.clone());
        Ok(entry)
    }

    pub async fn update_experience(
        &mut self,
        id: Uuid,
        patch: ExperiencePatch,
    ) -> Result<Experience, StoreError> {
        let entry = self.store.update_experience(id, patch).await?;
        replace_or_push(&mut self.experience_items, entry.clone(), |e| e.id);
        Ok(entry)
    }

    pub async fn delete_experience(&mut self, id: Uuid) -> Result<(), StoreError> {
        self.store.delete_experience(id).await?;
        self.experience_items.retain(|e| e.id != id);
        Ok(())
    }

    pub async fn update_setting(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let saved = self.store.update_setting(key, value).await?;
        self.settings.insert(saved.key, saved.value);
        Ok(())
    }

    /// Write every known key at once, empty values included.
    ///
    /// All writes are attempted even when one fails. Keys that were written
    /// are patched into the local map either way.
    pub async fn save_settings(
        &mut self,
        form: &SettingsForm,
    ) -> Result<&'static str, SettingsSaveError> {
        let entries = form.entries();
        let results = join_all(
            entries
                .iter()
                .map(|(key, value)| self.store.update_setting(key, value)),
        )
        .await;

        let mut failed_keys = Vec::new();
        for ((key, _), result) in entries.iter().zip(results) {
            match result {
                Ok(saved) => {
                    self.settings.insert(saved.key, saved.value);
                }
                Err(e) => {
                    tracing::error!(key, error = %e, "Error saving setting");
                    failed_keys.push(*key);
                }
            }
        }

        if failed_keys.is_empty() {
            Ok(SETTINGS_SAVED)
        } else {
            Err(SettingsSaveError { failed_keys })
        }
    }
}

fn replace_or_push<T, F>(items: &mut Vec<T>, updated: T, id_of: F)
where
    F: Fn(&T) -> Uuid,
{
    let id = id_of(&updated);
    match items.iter_mut().find(|existing| id_of(existing) == id) {
        Some(slot) => *slot = updated,
        None => items.push(updated),
    }
}
