use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `portfolio_items` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub image_url: String,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub status: Status,
    pub featured: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

/// The fixed set of project categories offered by the dashboard form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Category {
    #[sea_orm(string_value = "Graphic Design")]
    #[serde(rename = "Graphic Design")]
    GraphicDesign,
    #[sea_orm(string_value = "Video Editing")]
    #[serde(rename = "Video Editing")]
    VideoEditing,
    #[sea_orm(string_value = "Motion Graphics")]
    #[serde(rename = "Motion Graphics")]
    MotionGraphics,
    #[sea_orm(string_value = "Branding")]
    Branding,
}

impl Category {
    /// Display label, identical to the stored value.
    pub fn label(&self) -> &'static str {
        match self {
            Category::GraphicDesign => "Graphic Design",
            Category::VideoEditing => "Video Editing",
            Category::MotionGraphics => "Motion Graphics",
            Category::Branding => "Branding",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "published")]
    Published,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_published(&self) -> bool {
        self.status == Status::Published
    }

    /// Homepage promotion requires both flags.
    pub fn is_featured_public(&self) -> bool {
        self.featured && self.is_published()
    }

    pub fn media_kind(&self) -> MediaKind {
        if self.image_url.ends_with(".mp4") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct NewPortfolioItem {
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image_url: String,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    #[serde(default = "default_status")]
    pub status: Status,
    #[serde(default)]
    pub featured: bool,
}

fn default_status() -> Status {
    Status::Draft
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub tags: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub status: Option<Status>,
    pub featured: Option<bool>,
}

/// Public projection of a portfolio item.
#[derive(Debug, Clone, Serialize)]
pub struct PublicPortfolioItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub image_url: String,
    pub media_type: MediaKind,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTimeUtc,
}

impl From<Model> for PublicPortfolioItem {
    fn from(m: Model) -> Self {
        let media_type = m.media_kind();
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            category: m.category,
            tags: m.tags,
            image_url: m.image_url,
            media_type,
            project_url: m.project_url,
            github_url: m.github_url,
            featured: m.featured,
            created_at: m.created_at,
        }
    }
}
