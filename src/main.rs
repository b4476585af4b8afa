//! OnTheDeal Gateway
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────────┐
//! │  Config  │───▶│  PgPool  │───▶│   Gateway    │
//! │  (YAML)  │    │ (sqlx)   │    │ pages / fees │
//! └──────────┘    └──────────┘    └──────────────┘
//! ```
//!
//! Flags: `--env <name>`, `--port <u16>`, `--init-schema [path]`

use std::sync::Arc;

use anyhow::Context;

use onthedeal_gateway::config::AppConfig;
use onthedeal_gateway::db::Database;
use onthedeal_gateway::db::schema::{DEFAULT_SCHEMA_PATH, apply_schema_file};
use onthedeal_gateway::gateway::{run_server, state::AppState};
use onthedeal_gateway::store::PgStore;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

/// `--init-schema` with an optional path that is not another flag
fn get_init_schema() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    let pos = args.iter().position(|a| a == "--init-schema")?;
    match args.get(pos + 1) {
        Some(path) if !path.starts_with("--") => Some(path.clone()),
        _ => Some(DEFAULT_SCHEMA_PATH.to_string()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = onthedeal_gateway::logging::init_logging(&app_config);

    tracing::info!("Starting OnTheDeal Gateway in {} mode", env);

    let postgres_url = app_config
        .postgres_url
        .as_deref()
        .context("postgres_url is not configured (set it in the config file or DATABASE_URL)")?;
    let db = Database::connect(postgres_url, &app_config.database)
        .await
        .context("Failed to connect to PostgreSQL")?;

    if let Some(path) = get_init_schema() {
        apply_schema_file(db.pool(), &path).await?;
    }

    let store = Arc::new(PgStore::from_database(&db));
    let state = AppState::from_store(store);

    let addr = app_config.bind_addr(get_port_override());
    run_server(&addr, state).await
}
