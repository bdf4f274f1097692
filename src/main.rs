use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use folio_backend::auth::authorization::{AdminAllowlist, Authenticator, TokenVerifier};
use folio_backend::auth::jwks::JwksCache;
use folio_backend::auth::supabase::SupabaseAuth;
use folio_backend::config::AppConfig;
use folio_backend::create_pool;
use folio_backend::dashboard::DashboardState;
use folio_backend::handlers;
use folio_backend::store::PgStore;
use migration::{Migrator, MigratorTrait};
use std::io;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {e}");
        io::Error::other(e)
    })?;

    let db = create_pool(&config.database_url).await.map_err(|e| {
        tracing::error!("Failed to connect to database: {e}");
        io::Error::other(e)
    })?;
    Migrator::up(&db, None).await.map_err(io::Error::other)?;
    tracing::info!("Connected to database");

    let store = PgStore::new(db);

    let verifier = match &config.supabase_jwt_secret {
        Some(secret) => TokenVerifier::SharedSecret(secret.clone()),
        None => {
            let project_ref = config.project_ref().map_err(io::Error::other)?;
            TokenVerifier::Jwks(JwksCache::new(project_ref, &config.supabase_anon_key))
        }
    };
    let authenticator = web::Data::new(Authenticator::new(
        verifier,
        AdminAllowlist::new(&config.admin_emails),
    ));
    let supabase = web::Data::new(SupabaseAuth::new(
        &config.supabase_url,
        &config.supabase_anon_key,
    ));

    let mut dashboard = DashboardState::new(store.clone());
    dashboard.load().await;
    let dashboard = web::Data::new(Mutex::new(dashboard));
    let store = web::Data::new(store);

    let bind_addr = config.bind_addr();
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(store.clone())
            .app_data(dashboard.clone())
            .app_data(authenticator.clone())
            .app_data(supabase.clone())
            .route("/health", web::get().to(handlers::home::health))
            .service(web::scope("/api").configure(handlers::init_routes))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
