mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use database::UserRepository;
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::Config::from_env().map_err(|e| {
        log::error!("❌ Invalid configuration: {:#}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{:#}", e))
    })?;

    log::info!("🚀 Starting Mobile Login Service...");
    log::info!(
        "📊 Database: {}@{}:{}/{}",
        config.db_user,
        config.db_host,
        config.db_port,
        config.db_name
    );

    let db = database::Postgres::connect(&config);

    match db.ping().await {
        Ok(()) => log::info!("✅ PostgreSQL reachable"),
        Err(e) => log::warn!("⚠️  PostgreSQL not reachable yet, /login will fail until it is: {}", e),
    }

    let repo: Arc<dyn UserRepository> = Arc::new(db.clone());
    let repo_data = web::Data::from(repo);

    let bind_address = config.bind_address();
    log::info!("🌐 Server starting on {}", bind_address);
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", bind_address);

    let openapi = api::swagger::ApiDoc::openapi();

    // Stops on SIGINT/SIGTERM once in-flight requests finish
    let result = HttpServer::new(move || {
        App::new()
            .app_data(repo_data.clone())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            .configure(api::configure)
    })
    .bind(&bind_address)?
    .run()
    .await;

    log::info!("🛑 Server stopped, closing database pool");
    db.close().await;

    result
}
