use sea_orm::entity::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, de};

/// SeaORM entity for the `experience` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experience")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub is_current: bool,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub skills: Vec<String>,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub kind: ExperienceType,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum ExperienceType {
    #[sea_orm(string_value = "work")]
    Work,
    #[sea_orm(string_value = "freelance")]
    Freelance,
    #[sea_orm(string_value = "education")]
    Education,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const PRESENT: &str = "Present";

const MONTH_YEAR: &str = "%b %Y";

impl Model {
    /// End date as displayed: a current entry has none, whatever is stored.
    pub fn effective_end_date(&self) -> Option<Date> {
        if self.is_current { None } else { self.end_date }
    }

    pub fn start_label(&self) -> String {
        self.start_date.format(MONTH_YEAR).to_string()
    }

    pub fn end_label(&self) -> String {
        match self.effective_end_date() {
            Some(end) => end.format(MONTH_YEAR).to_string(),
            None => PRESENT.to_string(),
        }
    }
}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: Date,
    #[serde(default, deserialize_with = "blank_date")]
    pub end_date: Option<Date>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "type")]
    pub kind: ExperienceType,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperiencePatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<Date>,
    /// Absent leaves the stored date alone; `null` or `""` clears it.
    #[serde(default, deserialize_with = "patched_date")]
    pub end_date: Option<Option<Date>>,
    pub is_current: Option<bool>,
    pub description: Option<String>,
    pub skills: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub kind: Option<ExperienceType>,
}

/// `YYYY-MM-DD`, with `null` and `""` both read as no date.
fn blank_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Date>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map(Some).map_err(de::Error::custom)
        }
        _ => Ok(None),
    }
}

fn patched_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Option<Date>>, D::Error> {
    blank_date(deserializer).map(Some)
}

/// Timeline entry with its display labels resolved.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    #[serde(flatten)]
    pub experience: Model,
    pub start_label: String,
    pub end_label: String,
}

impl From<Model> for TimelineEntry {
    fn from(experience: Model) -> Self {
        Self {
            start_label: experience.start_label(),
            end_label: experience.end_label(),
            experience,
        }
    }
}
