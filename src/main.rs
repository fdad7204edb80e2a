mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, query::registry::domain_registry,
    service::auth::TokenAuthenticator, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let registry = domain_registry();
    tracing::info!("Registered {} listable entities", registry.entities().count());

    if !config.token.security {
        tracing::warn!("Token security is disabled; every request is served anonymously");
    }

    let state = AppState::new(
        db,
        registry,
        TokenAuthenticator::new(config.token),
        config.query,
    );
    let app = server::router::router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
