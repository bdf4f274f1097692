//! Admin routes end to end: bearer guard, the shared dashboard and a mock
//! Postgres behind it.
mod common;

use actix_web::{App, test, web};
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
use tokio::sync::Mutex;
use uuid::Uuid;

use common::portfolio_item;
use folio_backend::auth::authorization::{AdminAllowlist, Authenticator, TokenVerifier};
use folio_backend::auth::jwt::Claims;
use folio_backend::dashboard::{DashboardState, SETTINGS_SAVE_FAILED, SharedDashboard};
use folio_backend::handlers;
use folio_backend::models::SiteSetting;
use folio_backend::models::portfolio::{Category, Status};
use folio_backend::models::settings::KNOWN_KEYS;
use folio_backend::store::PgStore;

const TEST_SECRET: &str = "test-secret-at-least-256-bits-long-for-hs256-xxxxxxx";
const ADMIN_EMAIL: &str = "owner@example.com";

fn admin_token() -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        exp: (now + 3600) as usize,
        iat: Some(now as usize),
        iss: None,
        email: Some(ADMIN_EMAIL.to_string()),
        role: Some("authenticated".to_string()),
        user_metadata: None,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to encode test JWT")
}

fn setting_row(key: &str, value: &str) -> SiteSetting {
    let now = Utc::now();
    SiteSetting {
        key: key.to_string(),
        value: value.to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Initialise the full route table with the admin guard and a dashboard over `db`.
macro_rules! admin_app {
    ($db:expr) => {{
        let dashboard: SharedDashboard = Mutex::new(DashboardState::new(PgStore::new($db)));
        test::init_service(
            App::new()
                .app_data(web::Data::new(Authenticator::new(
                    TokenVerifier::SharedSecret(TEST_SECRET.to_string()),
                    AdminAllowlist::new([ADMIN_EMAIL]),
                )))
                .app_data(web::Data::new(dashboard))
                .service(web::scope("/api").configure(handlers::init_routes)),
        )
        .await
    }};
}

fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", admin_token()))
}

#[actix_web::test]
async fn test_admin_routes_require_token() {
    let app = admin_app!(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

    let req = test::TestRequest::get().uri("/api/admin/dashboard").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_settings_save_reports_generic_failure() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([
            vec![setting_row(KNOWN_KEYS[0], "https://cdn.example.com/logo.svg")],
            vec![setting_row(KNOWN_KEYS[1], "https://twitter.com/me")],
        ])
        .append_query_errors([DbErr::Custom("connection reset".into())])
        .append_query_results(
            KNOWN_KEYS[3..]
                .iter()
                .map(|key| vec![setting_row(key, "")])
                .collect::<Vec<_>>(),
        )
        .into_connection();
    let app = admin_app!(db);

    let req = test::TestRequest::put()
        .uri("/api/admin/settings")
        .insert_header(bearer())
        .set_json(serde_json::json!({
            "logo": "https://cdn.example.com/logo.svg",
            "social_media": { "twitter": "https://twitter.com/me" },
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "error": SETTINGS_SAVE_FAILED }));
}

#[actix_web::test]
async fn test_create_then_delete_portfolio_item_updates_dashboard() {
    let created = portfolio_item("Poster", Category::GraphicDesign, Status::Draft, false);
    let id = created.id;
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![created]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let app = admin_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/admin/portfolio")
        .insert_header(bearer())
        .set_json(serde_json::json!({
            "title": "Poster",
            "description": "Concert poster",
            "category": "Graphic Design",
            "image_url": "https://cdn.example.com/poster.png",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .insert_header(bearer())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["portfolio_items"][0]["id"], id.to_string());
    assert_eq!(body["stats"]["totalProjects"], 1);
    assert_eq!(body["stats"]["drafts"], 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/portfolio/{id}"))
        .insert_header(bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .insert_header(bearer())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["portfolio_items"], serde_json::json!([]));
    assert_eq!(body["stats"]["totalProjects"], 0);
}

#[actix_web::test]
async fn test_blank_title_is_rejected_before_any_write() {
    let app = admin_app!(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

    let req = test::TestRequest::post()
        .uri("/api/admin/portfolio")
        .insert_header(bearer())
        .set_json(serde_json::json!({
            "title": "  ",
            "description": "",
            "category": "Branding",
            "image_url": "https://cdn.example.com/x.png",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "title is required");
}

#[actix_web::test]
async fn test_put_single_setting_patches_dashboard() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![setting_row("github_url", "https://github.com/me")]])
        .into_connection();
    let app = admin_app!(db);

    let req = test::TestRequest::put()
        .uri("/api/admin/settings/github_url")
        .insert_header(bearer())
        .set_json(serde_json::json!({ "value": "https://github.com/me" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["key"], "github_url");

    let req = test::TestRequest::get()
        .uri("/api/admin/settings")
        .insert_header(bearer())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["social_media"]["github"], "https://github.com/me");
}
