//! Magic Color CLI binary.
//!
//! - Generate coloring pages from a prompt
//! - Color existing pages
//! - Browse and export the gallery

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, Session, export_page, list_pages, run_coloring, run_generation, show_page};

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = magic_color::MagicColorConfig::load()?;
    let session = Session::open(&config)?;

    match cli.command {
        Commands::Generate { prompt, color } => {
            run_generation(session, &config, &prompt.join(" "), color).await?;
        }

        Commands::Color { id } => {
            run_coloring(session, &config, &id).await?;
        }

        Commands::List { format } => {
            list_pages(&session, format)?;
        }

        Commands::Show { id } => {
            show_page(&session, &id)?;
        }

        Commands::Export { id, colored, out } => {
            export_page(&session, &config, &id, colored, &out).await?;
        }
    }

    Ok(())
}
