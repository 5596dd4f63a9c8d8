pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

use clap::Parser;
use tracing::{error, info};

use crate::application::CatalogExporter;
use crate::domain::error::Result;
use crate::infrastructure::config::ExportConfig;
use crate::interfaces::cli::Cli;

pub fn run() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();

    // Optional .env with CATALOG_EXPORT_* overrides
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    info!("Starting catalog-export v{}", env!("CARGO_PKG_VERSION"));

    let config = ExportConfig::load(cli.config.as_deref())
        .map(|config| cli.apply(config))
        .map_err(|e| {
            error!("Failed to load config: {}", e);
            e
        })?;

    info!(
        "Input: {} -> Output: {}",
        config.input_path.display(),
        config.output_path.display()
    );

    CatalogExporter::new(config).export().map_err(|e| {
        error!("Export failed: {}", e);
        e
    })?;

    Ok(())
}
