use std::path::Path;

use anyhow::Result;
use colored::*;

use crate::icon;
use crate::types;

pub fn execute(output: &Path, size: u32) -> Result<()> {
    println!("{}", "Starting icon generation...".blue());
    println!("Target output directory: {}", output.display());

    let mut generated = Vec::new();
    let mut failed = Vec::new();

    for label in types::labels() {
        println!("Generating icon for {} type...", label);
        match icon::render(label, output, size) {
            Ok(path) => {
                println!(
                    "{}",
                    format!("Successfully saved icon to {}", path.display()).green()
                );
                generated.push(path);
            }
            Err(e) => {
                println!("{}", format!("Error generating icon for {}: {:#}", label, e).red());
                failed.push(label);
            }
        }
    }

    println!();
    println!("{}", "Icon generation complete!".green());
    if let Some(path) = generated.first() {
        if let Some(dir) = path.parent() {
            println!("PNG icons saved to: {}", dir.display());
        }
    }
    println!("Generated {} icons", generated.len());

    if !failed.is_empty() {
        anyhow::bail!(
            "{} of {} icons failed to render: {}",
            failed.len(),
            failed.len() + generated.len(),
            failed.join(", ")
        );
    }

    Ok(())
}
