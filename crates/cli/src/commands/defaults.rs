use anyhow::{Context, Result};

use crate::utils::run_type;

pub fn defaults_command() -> Result<()> {
    let defaults = run_type().default_properties();
    let output =
        serde_json::to_string_pretty(&defaults).context("Failed to serialize default properties")?;
    println!("{}", output);
    Ok(())
}
