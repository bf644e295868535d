use anyhow::Result;
use colored::*;

use crate::types;

pub fn execute() -> Result<()> {
    for (label, [r, g, b]) in types::TYPE_COLORS {
        println!(
            "{} {:10} {}",
            "●".truecolor(*r, *g, *b),
            label,
            format!("#{:02x}{:02x}{:02x}", r, g, b).bright_blue()
        );
    }
    println!("{}", format!("{} types", types::TYPE_COLORS.len()).green());
    Ok(())
}
