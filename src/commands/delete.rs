use anyhow::{Context, Result};
use calstore_core::{EventStore, Outcome, Storage};
use owo_colors::OwoColorize;

pub fn run<S: Storage>(store: &mut EventStore<S>, id: &str) -> Result<()> {
    let name = store.get(id).map(|e| e.name.clone());

    match store.delete(id).context("Failed to save events")? {
        Outcome::Applied => {
            println!("{}", format!("  Deleted: {}", name.unwrap_or_default()).red());
            Ok(())
        }
        Outcome::NotFound => anyhow::bail!("Event not found: {}", id),
    }
}
