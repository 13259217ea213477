//! Subcommand implementations.

pub mod check;
pub mod compile;

use crate::manifest;
use anyhow::Result;
use fnschema_core::ProviderRegistry;

pub fn cmd_providers() -> Result<()> {
    for name in ProviderRegistry::new().names() {
        println!("{name}");
    }
    Ok(())
}

pub fn cmd_schema() -> Result<()> {
    println!("{}", manifest::schema_json_pretty()?);
    Ok(())
}
