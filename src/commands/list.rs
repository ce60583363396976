use anyhow::Result;
use calstore_core::{EventStore, Storage};

use crate::render::Render;

pub async fn run<S: Storage>(store: &EventStore<S>, search: Option<&str>) -> Result<()> {
    let events = store.list().await;
    let query = search.unwrap_or("");

    let matching: Vec<_> = events.iter().filter(|e| e.matches(query)).collect();

    if matching.is_empty() {
        println!("No events to display");
        return Ok(());
    }

    for (i, event) in matching.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", event.render());
    }

    Ok(())
}
