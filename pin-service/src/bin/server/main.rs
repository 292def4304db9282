use std::sync::Arc;

use auth::Authenticator;
use pin_service::config::Config;
use pin_service::domain::pin::service::PinService;
use pin_service::domain::user::service::CredentialService;
use pin_service::inbound::http::router::create_router;
use pin_service::outbound::repositories::PostgresPinRepository;
use pin_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pin_service=debug,auth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "pin-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        access_token_ttl_minutes = config.auth.access_token_ttl_minutes,
        refresh_token_ttl_days = config.auth.refresh_token_ttl_days,
        hash_iterations = config.auth.hash_iterations,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(&config.auth.to_settings()?)?);
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let pin_repository = Arc::new(PostgresPinRepository::new(pg_pool));

    let credential_service = Arc::new(CredentialService::new(
        user_repository,
        Arc::clone(&authenticator),
    ));
    let pin_service = Arc::new(PinService::new(pin_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(credential_service, pin_service, authenticator);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
