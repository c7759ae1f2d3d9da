use actix_cors::Cors;
use actix_web::middleware::{Condition, Logger};
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use sqlgen_api::config::{ApiConfig, LoggingConfig};
use sqlgen_api::handlers::configure_routes;
use sqlgen_api::state::AppState;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "sqlgen-api", version, about = "Natural-language-to-SQL playground backend")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ApiConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let _log_guard = init_logging(&config.logging);

    info!(
        bind_addr = %config.bind_addr(),
        default_server = %config.ollama.default_url,
        "Starting sqlgen-api"
    );

    let bind_addr = config.bind_addr();
    let allowed_origins = config.cors.allowed_origins.clone();
    let state = web::Data::new(AppState::from_config(config)?);

    HttpServer::new(move || {
        let cors = allowed_origins.iter().fold(
            Cors::default().allow_any_method().allow_any_header(),
            |cors, origin| cors.allowed_origin(origin),
        );

        App::new()
            .app_data(state.clone())
            .wrap(Condition::new(!allowed_origins.is_empty(), cors))
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind(&bind_addr)
    .with_context(|| format!("Failed to bind {}", bind_addr))?
    .run()
    .await?;

    Ok(())
}

/// Console logging always; a plain-text file as well when configured
fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer());

    match &config.file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("sqlgen-api.log"));

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            registry
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    }
}
