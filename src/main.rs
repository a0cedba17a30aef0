use anyhow::Context;
use quake_catalog_api::{common::state::AppState, config::Config, routes};
use sea_orm::{Database, DatabaseConnection};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env().context("Invalid configuration")?;
    let db: DatabaseConnection = Database::connect(&config.db_uri)
        .await
        .context("Could not connect to the database")?;

    if let Err(e) = db.ping().await {
        error!(error = %e, "Database ping failed at startup");
    } else {
        info!(deployment = %config.deployment, "Connected to the database");
    }

    let addr: std::net::SocketAddr = config
        .bind_addr
        .parse()
        .with_context(|| format!("BIND_ADDR '{}' is not a socket address", config.bind_addr))?;
    info!(%addr, "Listening");

    let router = routes::build_router(&AppState::new(db, config));
    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Could not bind {addr}"))?,
        router.into_make_service(),
    )
    .await?;

    Ok(())
}
