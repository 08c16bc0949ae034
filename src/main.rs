use actix_web::{middleware::Logger, web, App, HttpServer};
use social_server::config::{EnvConfig, CONFIG};
use social_server::db::postgres_service::PostgresService;
use social_server::routes::configure_routes;
use social_server::utils::webutils::cors;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = CONFIG.get_or_init(EnvConfig::from_env);
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .map_err(std::io::Error::other)?,
    );

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(cors(&config.cors_origins))
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
