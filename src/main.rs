use anyhow::Result;
use content_hub::application::{
    ports::{security::TokenManager, storage::FileUploader, time::Clock},
    services::{ApplicationServices, ServiceDependencies},
};
use content_hub::config::AppConfig;
use content_hub::infrastructure::{
    database,
    repositories::{
        PostgresCategoryRepository, PostgresContentRepository, PostgresExchangeRateRepository,
        PostgresTagRepository,
    },
    security::token::BiscuitTokenManager,
    storage::LocalFileUploader,
    time::SystemClock,
};
use content_hub::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    tokio::fs::create_dir_all(config.upload_dir()).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let uploader: Arc<dyn FileUploader> = Arc::new(LocalFileUploader::new(
        config.upload_dir().clone(),
        config.public_base_url(),
        pool.clone(),
        Arc::clone(&clock),
    ));

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        content_repos: PostgresContentRepository::repositories(pool.clone()),
        tag_repo: Arc::new(PostgresTagRepository::new(pool.clone())),
        category_repo: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        exchange_rate_repo: Arc::new(PostgresExchangeRateRepository::new(pool)),
        uploader,
        token_manager,
        clock,
    }));

    let app = build_router(
        HttpState { services },
        RouterOptions {
            allowed_origins: config.allowed_origins().to_vec(),
            upload_dir: Some(config.upload_dir().clone()),
            max_upload_bytes: config.max_upload_bytes(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
