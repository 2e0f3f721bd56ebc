use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::{bail, Context};

use tb_api::{create_app, telemetry, AppState};
use tb_core::services::auth::{AuthService, AuthServiceConfig};
use tb_core::services::review::ReviewService;
use tb_core::services::token::{TokenService, TokenServiceConfig};
use tb_infra::{
    ConfiguredMailer, DatabasePool, MySqlReviewRepository, MySqlTourRepository, MySqlUserRepository,
};
use tb_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_tracing(&config.logging)?;

    tracing::info!(environment = %config.environment, "Starting Tourbook API server");

    if config.auth.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            bail!("JWT_SECRET must be set in production");
        }
        tracing::warn!("JWT_SECRET not set, using the development default");
    }

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the database")?;
    let pool = database.get_pool().clone();

    let users = Arc::new(MySqlUserRepository::new(pool.clone()));
    let tours = Arc::new(MySqlTourRepository::new(pool.clone()));
    let reviews = Arc::new(MySqlReviewRepository::new(pool));
    let mailer = Arc::new(ConfiguredMailer::from_config(&config.mail)?);

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
    let auth_service = Arc::new(AuthService::new(
        users,
        mailer,
        token_service,
        AuthServiceConfig::from(&config.auth.password),
    ));
    let review_service = Arc::new(ReviewService::new(reviews, tours, config.rating.clone()));

    let state = web::Data::new(AppState::new(auth_service, review_service, &config));

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    database.close().await;
    tracing::info!("Server stopped");
    Ok(())
}
