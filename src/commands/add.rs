use anyhow::{Context, Result};
use calstore_core::{Category, EventDraft, EventStore, Storage};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use super::parse_date;

pub fn run<S: Storage>(
    store: &mut EventStore<S>,
    name: Option<String>,
    description: Option<String>,
    category: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let interactive = name.is_none() || category.is_none() || date.is_none();

    // --- Name ---
    let name = match name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("  Event name")
            .interact_text()?,
    };

    // --- Description ---
    let description = match description {
        Some(d) => d,
        None if interactive => Input::<String>::new()
            .with_prompt("  Description (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
        None => String::new(),
    };

    // --- Category ---
    let category = match category {
        Some(c) => c.parse::<Category>()?,
        None => prompt_category()?,
    };

    // --- Date ---
    let date = match date {
        Some(d) => parse_date(&d)?,
        None => prompt_date()?,
    };

    let event = store
        .add(EventDraft {
            name,
            description,
            category,
            date,
        })
        .context("Failed to save events")?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {} ({})", event.name, event.id).green());

    Ok(())
}

fn prompt_category() -> Result<Category> {
    let items: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    let selection = Select::new()
        .with_prompt("  Category")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Category::ALL[selection])
}

/// Prompt for a date, asking again until it parses.
fn prompt_date() -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Date (YYYY-MM-DD)")
            .interact_text()?;
        match parse_date(&input) {
            Ok(date) => return Ok(date),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}
