#![allow(dead_code)]

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use folio_backend::models::experience::{self, ExperienceType};
use folio_backend::models::portfolio::{self, Category, Status};

pub fn portfolio_item(title: &str, category: Category, status: Status, featured: bool) -> portfolio::Model {
    portfolio_item_at(title, category, status, featured, 0)
}

/// `age_days` moves `created_at` into the past.
pub fn portfolio_item_at(
    title: &str,
    category: Category,
    status: Status,
    featured: bool,
    age_days: i64,
) -> portfolio::Model {
    let created = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap() - Duration::days(age_days);
    portfolio::Model {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{title} description"),
        category,
        tags: vec!["After Effects".to_string(), "Logo".to_string()],
        image_url: "https://res.cloudinary.com/demo/image.png".to_string(),
        project_url: None,
        github_url: None,
        status,
        featured,
        created_at: created,
        updated_at: created,
    }
}

pub fn experience_entry(title: &str, start: NaiveDate, end: Option<NaiveDate>, is_current: bool) -> experience::Model {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    experience::Model {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company: "Creative Agency".to_string(),
        location: Some("Addis Ababa".to_string()),
        start_date: start,
        end_date: end,
        is_current,
        description: "Motion design and editing".to_string(),
        skills: vec!["Premiere Pro".to_string()],
        kind: ExperienceType::Work,
        created_at: now,
        updated_at: now,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
