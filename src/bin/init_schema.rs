//! Apply the database schema and exit
//!
//! Usage:
//!   cargo run --bin init_schema
//!
//! Or with a custom script / environment:
//!   cargo run --bin init_schema -- --env prod --file sql/schema.sql
//!
//! The connection URL comes from `config/<env>.yaml` or `DATABASE_URL`.

use anyhow::Context;

use onthedeal_gateway::config::AppConfig;
use onthedeal_gateway::db::Database;
use onthedeal_gateway::db::schema::{DEFAULT_SCHEMA_PATH, apply_schema_file};

fn arg_value(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = arg_value("--env").unwrap_or_else(|| "dev".to_string());
    let path = arg_value("--file").unwrap_or_else(|| DEFAULT_SCHEMA_PATH.to_string());

    let app_config = AppConfig::load(&env)?;
    let _log_guard = onthedeal_gateway::logging::init_logging(&app_config);

    let postgres_url = app_config
        .postgres_url
        .as_deref()
        .context("postgres_url is not configured (set it in the config file or DATABASE_URL)")?;
    let db = Database::connect(postgres_url, &app_config.database)
        .await
        .context("Failed to connect to PostgreSQL")?;

    apply_schema_file(db.pool(), &path).await?;
    eprintln!("✅ Schema applied from: {}", path);
    Ok(())
}
