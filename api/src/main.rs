//! House Hunter API server entrypoint.
//!
//! Wires configuration, the MySQL pool, repositories, and domain services,
//! then serves the HTTP surface until shutdown.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use hh_api::app::{create_app, AppState};
use hh_core::services::token::TokenService;
use hh_infra::database::DatabasePool;
use hh_infra::{MySqlBookingRepository, MySqlHouseRepository, MySqlUserRepository};
use hh_shared::config::{AuthConfig, DatabaseConfig, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting House Hunter API server");

    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let auth_config = AuthConfig::from_env();

    if auth_config.is_using_default_secret() {
        log::warn!("ACCESS_TOKEN_SECRET is not set; using the default development secret");
    }

    let pool = DatabasePool::new(&database_config)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("Database setup failed: {}", e)))?;
    pool.run_migrations()
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("Schema bootstrap failed: {}", e)))?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let house_repository = Arc::new(MySqlHouseRepository::new(pool.get_pool().clone()));
    let booking_repository = Arc::new(MySqlBookingRepository::new(pool.get_pool().clone()));
    let token_service = Arc::new(TokenService::new(&auth_config));

    let app_state = web::Data::new(AppState::new(
        user_repository,
        house_repository,
        booking_repository,
        token_service,
    ));

    let bind_address = server_config.bind_address();
    info!("Server listening on {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }
    server.bind(&bind_address)?.run().await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}
