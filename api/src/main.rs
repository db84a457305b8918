use axum::http::header::InvalidHeaderValue;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info};

mod api;
mod config;
mod db;

/// Development backend serving the `foods` resource.
#[derive(Parser)]
struct Opt {
    /// Configuration file
    #[arg(long, default_value = "foods.toml")]
    config: PathBuf,

    /// Address to listen on, overrides the configuration file
    #[arg(long)]
    listen: Option<SocketAddr>,

    /// JSON file with foods to insert into an empty database, overrides the configuration file
    #[arg(long)]
    seed: Option<PathBuf>,
}

/// Possible API errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Food {0} not found")]
    NotFound(models::FoodId),
    #[error("Could not read configuration: {0}")]
    ConfigurationError(#[from] toml::de::Error),
    #[error("Reading .env failed: {0}")]
    DotenvError(#[from] dotenv::Error),
    #[error("Invalid header: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Database problem: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// API result type.
pub type Result<T> = std::result::Result<T, AppError>;

async fn try_main() -> Result<()> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(err) if err.not_found() => {}
        Err(err) => return Err(err.into()),
    }

    let opts = Opt::parse();
    let config = config::Config::new(&opts.config)?;

    let listen = opts.listen.unwrap_or(config.listen);
    let seed = opts.seed.or(config.seed);

    let db = db::Database::new(std::env::var("DATABASE_URL").ok()).await?;

    if let Some(path) = seed {
        info!("Seeding from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        db.seed(serde_json::from_str(&content)?).await?;
    }

    let state = api::State::new(db);
    api::run(state, listen, &config.origin).await
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = try_main().await {
        error!("{}", err);
        std::process::exit(1);
    }
}
