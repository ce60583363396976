use std::path::Path;

use anyhow::{Context, Result};
use calstore_core::export::export_ics;
use calstore_core::{EventStore, Storage};
use owo_colors::OwoColorize;

pub async fn run<S: Storage>(store: &EventStore<S>, output: Option<&Path>) -> Result<()> {
    let events = store.list().await;
    let ics = export_ics(&events);

    match output {
        Some(path) => {
            std::fs::write(path, ics)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{}",
                format!("  Exported calendar to {}", path.display()).green()
            );
        }
        None => print!("{}", ics),
    }

    Ok(())
}
