use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::middleware::AdminUser;
use crate::dashboard::SharedDashboard;
use crate::error::{ApiError, require_text};
use crate::models::experience::{ExperiencePatch, NewExperience};
use crate::models::portfolio::{NewPortfolioItem, PortfolioItemPatch};
use crate::models::settings::{SettingsForm, UpdateSetting};

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub refresh: bool,
}

/// GET /api/admin/dashboard: cached lists, settings form and stats.
pub async fn get_dashboard(
    _user: AdminUser,
    dashboard: web::Data<SharedDashboard>,
    query: web::Query<DashboardQuery>,
) -> HttpResponse {
    let mut dashboard = dashboard.lock().await;
    if query.refresh {
        dashboard.load().await;
    }
    HttpResponse::Ok().json(dashboard.snapshot())
}

// ── Portfolio ──

/// POST /api/admin/portfolio: create a project.
pub async fn create_portfolio_item(
    _user: AdminUser,
    dashboard: web::Data<SharedDashboard>,
    body: web::Json<NewPortfolioItem>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    require_text("title", &input.title)?;

    let item = dashboard.lock().await.create_portfolio_item(input).await?;
    Ok(HttpResponse::Created().json(item))
}

/// PUT /api/admin/portfolio/{id}: partial update of a project.
pub async fn update_portfolio_item(
    _user: AdminUser,
    dashboard: web::Data<SharedDashboard>,
    path: web::Path<Uuid>,
    body: web::Json<PortfolioItemPatch>,
) -> Result<HttpResponse, ApiError> {
    let patch = body.into_inner();
    if let Some(title) = &patch.title {
        require_text("title", title)?;
    }

    let item = dashboard
        .lock()
        .await
        .update_portfolio_item(path.into_inner(), patch)
        .await?;
    Ok(HttpResponse::Ok().json(item))
}

/// DELETE /api/admin/portfolio/{id}
pub async fn delete_portfolio_item(
    _user: AdminUser,
    dashboard: web::Data<SharedDashboard>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    dashboard.lock().await.delete_portfolio_item(id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Portfolio item {id} deleted"),
    })))
}

// ── Experience ──

/// POST /api/admin/experience: add a timeline entry.
pub async fn create_experience(
    _user: AdminUser,
    dashboard: web::Data<SharedDashboard>,
    body: web::Json<NewExperience>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    require_text("title", &input.title)?;
    require_text("company", &input.company)?;

    let entry = dashboard.lock().await.create_experience(input).await?;
    Ok(HttpResponse::Created().json(entry))
}

/// PUT /api/admin/experience/{id}
pub async fn update_experience(
    _user: AdminUser,
    dashboard: web::Data<SharedDashboard>,
    path: web::Path<Uuid>,
    body: web::Json<ExperiencePatch>,
) -> Result<HttpResponse, ApiError> {
    let patch = body.into_inner();
    if let Some(title) = &patch.title {
        require_text("title", title)?;
    }
    if let Some(company) = &patch.company {
        require_text("company", company)?;
    }

    let entry = dashboard
        .lock()
        .await
        .update_experience(path.into_inner(), patch)
        .await?;
    Ok(HttpResponse::Ok().json(entry))
}

/// DELETE /api/admin/experience/{id}
pub async fn delete_experience(
    _user: AdminUser,
    dashboard: web::Data<SharedDashboard>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    dashboard.lock().await.delete_experience(id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Experience {id} deleted"),
    })))
}

// ── Settings ──

/// GET /api/admin/settings: branding and social links as the form shows them.
pub async fn get_settings(_user: AdminUser, dashboard: web::Data<SharedDashboard>) -> HttpResponse {
    HttpResponse::Ok().json(dashboard.lock().await.settings_form())
}

/// PUT /api/admin/settings: write every known key.
pub async fn save_settings(
    _user: AdminUser,
    dashboard: web::Data<SharedDashboard>,
    body: web::Json<SettingsForm>,
) -> Result<HttpResponse, ApiError> {
    let form = body.into_inner();
    let message = dashboard.lock().await.save_settings(&form).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": message,
        "settings": form,
    })))
}

/// PUT /api/admin/settings/{key}: set any key, known or not.
pub async fn put_setting(
    _user: AdminUser,
    dashboard: web::Data<SharedDashboard>,
    path: web::Path<String>,
    body: web::Json<UpdateSetting>,
) -> Result<HttpResponse, ApiError> {
    let key = path.into_inner();
    require_text("key", &key)?;

    let value = body.into_inner().value;
    dashboard.lock().await.update_setting(&key, &value).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "key": key,
        "value": value,
    })))
}
