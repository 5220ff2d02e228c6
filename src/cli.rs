use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;
use songcast::config::{Config, ConfigBuilder};
use songcast::errors::Result;
use songcast::{SongCatalogService, server};

#[derive(Parser)]
#[command(name = "songcast")]
#[command(version, about = "Serve melodies to embedded radio clients", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind [env: SONGCAST_HOST, default: 0.0.0.0]
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on [env: SONGCAST_PORT, default: 5000]
        #[arg(short, long)]
        port: Option<u16>,
        /// JSON catalog file instead of the built-in songs [env: SONGCAST_CATALOG]
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Print the station listing and exit
    Stations {
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            catalog,
        } => {
            info!("Building config ...");
            let config = ConfigBuilder::new()
                .host(host)
                .port(port)
                .catalog_path(catalog)
                .build()?;
            server::serve(config).await
        }
        Commands::Stations { catalog } => {
            let config = ConfigBuilder::new().catalog_path(catalog).build()?;
            print_stations(&config)
        }
    }
}

fn print_stations(config: &Config) -> Result<()> {
    let service = SongCatalogService::new(config.catalog.load()?);
    let listing = serde_json::to_string_pretty(&service.list_stations())?;
    println!("{listing}");
    Ok(())
}
