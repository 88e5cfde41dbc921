use std::fs::File;
use std::path::PathBuf;

use atlas::core::config::{self, CliOverrides};
use atlas::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "atlas", about = "Browse the countries of the world in your terminal")]
struct Args {
    /// Base URL of the countries API
    #[arg(long)]
    base_url: Option<String>,

    /// Load the catalog from a local JSON file instead of the network
    #[arg(long)]
    file: Option<PathBuf>,

    /// Jump back to page 1 whenever the search term or sort order changes
    #[arg(long)]
    reset_page: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to atlas.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("atlas.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Using default config: {}", e);
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            catalog_file: args.file,
            reset_page: args.reset_page,
        },
    );

    log::info!("Atlas starting up with config: {:?}", resolved);

    let source = tui::build_source(&resolved).map_err(std::io::Error::other)?;
    tui::run(resolved, source)
}
