mod commands;
mod font;
mod icon;
mod types;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "type-icons")]
#[command(about = "CLI tool to generate the colored type icon set as PNG files")]
#[command(version = "1.0.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one icon per type into the output directory
    Generate {
        /// Directory the PNG files are written to
        #[arg(short, long, default_value = "assets/images", env = "TYPE_ICONS_DIR")]
        output: PathBuf,
        /// Icon side length in pixels
        #[arg(short, long, default_value_t = 48)]
        size: u32,
    },
    /// List the built-in types and their colors
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { output, size } => {
            commands::generate::execute(&output, size)?;
        }
        Commands::List => {
            commands::list::execute()?;
        }
    }

    Ok(())
}
