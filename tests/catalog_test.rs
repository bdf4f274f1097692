//! Public listing rules and display helpers. Pure functions, no database.
mod common;

use std::collections::HashMap;

use common::{date, experience_entry, portfolio_item};
use folio_backend::catalog;
use folio_backend::models::normalize_labels;
use folio_backend::models::portfolio::{Category, MediaKind, Status};
use folio_backend::models::settings::{KNOWN_KEYS, SettingsForm};

fn sample() -> Vec<folio_backend::models::PortfolioItem> {
    vec![
        portfolio_item("Logo pack", Category::Branding, Status::Published, true),
        portfolio_item("Reel", Category::VideoEditing, Status::Published, false),
        portfolio_item("Poster", Category::GraphicDesign, Status::Draft, false),
        portfolio_item("Intro", Category::MotionGraphics, Status::Published, true),
        portfolio_item("Brand book", Category::Branding, Status::Draft, true),
    ]
}

#[test]
fn test_published_drops_drafts() {
    let items = catalog::published(sample());
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i.status == Status::Published));
}

#[test]
fn test_all_filter_returns_full_published_set() {
    let published = catalog::published(sample());
    let filtered = catalog::filter_by_category(published.clone(), catalog::ALL);
    assert_eq!(filtered, published);
}

#[test]
fn test_category_filter_is_exact_and_case_sensitive() {
    let published = catalog::published(sample());

    let branding = catalog::filter_by_category(published.clone(), "Branding");
    assert_eq!(branding.len(), 1);
    assert_eq!(branding[0].title, "Logo pack");

    assert!(catalog::filter_by_category(published.clone(), "branding").is_empty());
    assert!(catalog::filter_by_category(published.clone(), "Brand").is_empty());
    assert!(catalog::filter_by_category(published, "all").is_empty());
}

#[test]
fn test_search_matches_title_description_and_tags() {
    let items = sample();
    assert_eq!(catalog::search(items.clone(), "REEL").len(), 1);
    assert_eq!(catalog::search(items.clone(), "poster description").len(), 1);
    // every sample item carries the "Logo" tag
    assert_eq!(catalog::search(items.clone(), "logo").len(), items.len());
    assert_eq!(catalog::search(items.clone(), "   ").len(), items.len());
    assert!(catalog::search(items, "photography").is_empty());
}

#[test]
fn test_categories_start_with_all_in_first_seen_order() {
    let published = catalog::published(sample());
    assert_eq!(
        catalog::categories(&published),
        vec!["All", "Branding", "Video Editing", "Motion Graphics"]
    );
    assert_eq!(catalog::categories(&[]), vec!["All"]);
}

#[test]
fn test_featured_public_requires_both_flags() {
    let items = sample();
    let featured: Vec<_> = items.iter().filter(|i| i.is_featured_public()).collect();
    assert_eq!(featured.len(), 2);
    assert!(featured.iter().all(|i| i.title != "Brand book"));
}

#[test]
fn test_media_kind_from_image_url() {
    let mut item = portfolio_item("Reel", Category::VideoEditing, Status::Published, false);
    assert_eq!(item.media_kind(), MediaKind::Image);
    item.image_url = "https://cdn.example.com/reel.mp4".to_string();
    assert_eq!(item.media_kind(), MediaKind::Video);
}

#[test]
fn test_current_experience_always_ends_present() {
    let entry = experience_entry("Designer", date(2023, 1, 10), Some(date(2024, 6, 1)), true);
    assert_eq!(entry.end_label(), "Present");
    assert_eq!(entry.effective_end_date(), None);
    assert_eq!(entry.start_label(), "Jan 2023");
}

#[test]
fn test_past_experience_shows_month_year() {
    let entry = experience_entry("Editor", date(2021, 2, 1), Some(date(2022, 11, 30)), false);
    assert_eq!(entry.end_label(), "Nov 2022");

    let open_ended = experience_entry("Editor", date(2021, 2, 1), None, false);
    assert_eq!(open_ended.end_label(), "Present");
}

#[test]
fn test_normalize_labels_trims_and_dedupes() {
    let labels = vec![
        " Photoshop ".to_string(),
        "".to_string(),
        "Figma".to_string(),
        "Photoshop".to_string(),
        "  ".to_string(),
    ];
    assert_eq!(normalize_labels(labels), vec!["Photoshop", "Figma"]);
}

#[test]
fn test_settings_form_defaults_missing_keys_to_empty() {
    let mut map = HashMap::new();
    map.insert("logo_url".to_string(), "https://cdn.example.com/logo.svg".to_string());
    map.insert("github_url".to_string(), "https://github.com/me".to_string());
    map.insert("unrelated".to_string(), "ignored".to_string());

    let form = SettingsForm::from_map(&map);
    assert_eq!(form.logo, "https://cdn.example.com/logo.svg");
    assert_eq!(form.social_media.github, "https://github.com/me");
    assert_eq!(form.social_media.twitter, "");

    let keys: Vec<&str> = form.entries().iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, KNOWN_KEYS.to_vec());
}
