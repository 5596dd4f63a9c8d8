use std::path::PathBuf;

use clap::Parser;

use crate::infrastructure::config::ExportConfig;

/// Command-line arguments for catalog-export
#[derive(Parser, Debug)]
#[command(name = "catalog-export")]
#[command(about = "Normalize a catalog spreadsheet into a flat CSV export")]
#[command(version)]
pub struct Cli {
    /// TOML config file (defaults to ./catalog_export.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Source workbook or CSV file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Destination CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Worksheet name (first sheet when omitted)
    #[arg(short, long)]
    pub sheet: Option<String>,
}

impl Cli {
    /// Command-line values take precedence over file and environment config
    pub fn apply(&self, mut config: ExportConfig) -> ExportConfig {
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(sheet) = &self.sheet {
            config = config.with_sheet(sheet.clone());
        }
        config
    }
}
