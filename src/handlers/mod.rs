pub mod admin;
pub mod auth;
pub mod experience;
pub mod home;
pub mod portfolio;
pub mod settings;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Public routes (read-only, published content) ──
    cfg.route("/home", web::get().to(home::get_home));
    cfg.service(
        web::scope("/portfolio")
            .route("", web::get().to(portfolio::get_portfolio))
            .route("/categories", web::get().to(portfolio::get_categories))
            .route("/featured", web::get().to(portfolio::get_featured))
            .route("/{id}", web::get().to(portfolio::get_portfolio_item)),
    );
    cfg.service(
        web::scope("/experience")
            .route("", web::get().to(experience::get_experience))
            .route("/{id}", web::get().to(experience::get_experience_entry)),
    );
    cfg.service(
        web::scope("/settings")
            .route("", web::get().to(settings::get_settings))
            .route("/{key}", web::get().to(settings::get_setting)),
    );

    // ── Auth routes ──
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(auth::login))
            .route("/logout", web::post().to(auth::logout))
            .route("/me", web::get().to(auth::me)),
    );

    // ── Admin routes (protected by the AdminUser extractor) ──
    cfg.service(
        web::scope("/admin")
            .route("/dashboard", web::get().to(admin::get_dashboard))
            .route("/portfolio", web::post().to(admin::create_portfolio_item))
            .route("/portfolio/{id}", web::put().to(admin::update_portfolio_item))
            .route("/portfolio/{id}", web::delete().to(admin::delete_portfolio_item))
            .route("/experience", web::post().to(admin::create_experience))
            .route("/experience/{id}", web::put().to(admin::update_experience))
            .route("/experience/{id}", web::delete().to(admin::delete_experience))
            .route("/settings", web::get().to(admin::get_settings))
            .route("/settings", web::put().to(admin::save_settings))
            .route("/settings/{key}", web::put().to(admin::put_setting)),
    );
}
