use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// SeaORM entity for the `site_settings` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    #[sea_orm(column_type = "Text")]
    pub value: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const LOGO_URL: &str = "logo_url";
pub const TWITTER_URL: &str = "twitter_url";
pub const LINKEDIN_URL: &str = "linkedin_url";
pub const INSTAGRAM_URL: &str = "instagram_url";
pub const BEHANCE_URL: &str = "behance_url";
pub const DRIBBBLE_URL: &str = "dribbble_url";
pub const GITHUB_URL: &str = "github_url";

/// Every key the dashboard settings tab reads and writes.
pub const KNOWN_KEYS: [&str; 7] = [
    LOGO_URL,
    TWITTER_URL,
    LINKEDIN_URL,
    INSTAGRAM_URL,
    BEHANCE_URL,
    DRIBBBLE_URL,
    GITHUB_URL,
];

pub type SettingsMap = HashMap<String, String>;

/// Collapse rows into a key → value map; later rows win on duplicate keys.
pub fn to_map(settings: Vec<Model>) -> SettingsMap {
    settings.into_iter().map(|s| (s.key, s.value)).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub behance: String,
    #[serde(default)]
    pub dribbble: String,
    #[serde(default)]
    pub github: String,
}

/// Branding and social links as edited on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub social_media: SocialLinks,
}

impl SettingsForm {
    pub fn from_map(map: &SettingsMap) -> Self {
        let get = |key: &str| map.get(key).cloned().unwrap_or_default();
        Self {
            logo: get(LOGO_URL),
            social_media: SocialLinks {
                twitter: get(TWITTER_URL),
                linkedin: get(LINKEDIN_URL),
                instagram: get(INSTAGRAM_URL),
                behance: get(BEHANCE_URL),
                dribbble: get(DRIBBBLE_URL),
                github: get(GITHUB_URL),
            },
        }
    }

    /// All known keys paired with their value, empty values included.
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        let s = &self.social_media;
        [
            (LOGO_URL, self.logo.as_str()),
            (TWITTER_URL, s.twitter.as_str()),
            (LINKEDIN_URL, s.linkedin.as_str()),
            (INSTAGRAM_URL, s.instagram.as_str()),
            (BEHANCE_URL, s.behance.as_str()),
            (DRIBBBLE_URL, s.dribbble.as_str()),
            (GITHUB_URL, s.github.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSetting {
    pub value: String,
}
