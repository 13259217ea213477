//! `fnschema check`: compile every function and report the failures.

use crate::manifest::Manifest;
use anyhow::Result;
use colored::Colorize;
use fnschema_core::TypeRegistry;
use std::path::Path;

pub fn execute(path: &Path) -> Result<()> {
    let manifest = Manifest::load(path)?;
    let types = TypeRegistry::new();

    let mut failed = 0;
    for entry in &manifest.functions {
        match entry.compile(&types, &manifest.options) {
            Ok(_) => println!("{} {}", "OK".green(), entry.name),
            Err(e) => {
                failed += 1;
                println!("{} {}: {:#}", "ERR".red(), entry.name, e);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!(
            "{failed} of {} functions failed to compile",
            manifest.functions.len()
        );
    }
    Ok(())
}
