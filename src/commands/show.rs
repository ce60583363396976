use anyhow::Result;
use calstore_core::{EventStore, Storage};

use crate::render::render_detail;

pub fn run<S: Storage>(store: &EventStore<S>, id: &str) -> Result<()> {
    let event = store
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("Event not found: {}", id))?;

    println!("{}", render_detail(event));
    Ok(())
}
