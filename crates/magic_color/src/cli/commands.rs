//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Magic Color - turn a few words into a coloring page
#[derive(Parser, Debug)]
#[command(name = "magic-color")]
#[command(about = "Turn a few words into a printable coloring page, then color it in", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new coloring page
    Generate {
        /// What to draw, e.g. "A cute dinosaur"
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,

        /// Also color the new page
        #[arg(long)]
        color: bool,
    },

    /// Color an existing page
    Color {
        /// ID of the page
        id: String,
    },

    /// List the gallery, newest first
    List {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show one page
    Show {
        /// ID of the page
        id: String,
    },

    /// Write a page image to disk
    Export {
        /// ID of the page
        id: String,

        /// Export the colored version instead of the printable line art
        #[arg(long)]
        colored: bool,

        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
