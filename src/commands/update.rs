use anyhow::{Context, Result};
use calstore_core::{Category, EventPatch, EventStore, Outcome, Storage};
use owo_colors::OwoColorize;

use super::parse_date;

pub fn run<S: Storage>(
    store: &mut EventStore<S>,
    id: &str,
    name: Option<String>,
    description: Option<String>,
    category: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let patch = build_patch(name, description, category, date)?;

    if patch.is_empty() {
        anyhow::bail!("Nothing to update. Pass --name, --description, --category or --date");
    }

    match store.update(id, &patch).context("Failed to save events")? {
        Outcome::Applied => {
            let name = store.get(id).map(|e| e.name.as_str()).unwrap_or_default();
            println!("{}", format!("  Updated: {}", name).yellow());
            Ok(())
        }
        Outcome::NotFound => anyhow::bail!("Event not found: {}", id),
    }
}

fn build_patch(
    name: Option<String>,
    description: Option<String>,
    category: Option<String>,
    date: Option<String>,
) -> Result<EventPatch> {
    Ok(EventPatch {
        name,
        description,
        category: category.map(|c| c.parse::<Category>()).transpose()?,
        date: date.map(|d| parse_date(&d)).transpose()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use calstore_core::{EventDraft, MemoryStorage};

    fn store_with_standup() -> (EventStore<MemoryStorage>, String) {
        let mut store = EventStore::new(MemoryStorage::new(), "events");
        store.initialize();
        let event = store
            .add(EventDraft {
                name: "Standup".to_string(),
                description: "Daily sync".to_string(),
                category: Category::Work,
                date: "2024-06-01".to_string(),
            })
            .unwrap();
        (store, event.id)
    }

    #[test]
    fn test_build_patch_validates_input() {
        let patch = build_patch(None, None, Some("personal".into()), Some("2024-7-4".into())).unwrap();
        assert_eq!(patch.category, Some(Category::Personal));
        assert_eq!(patch.date.as_deref(), Some("2024-07-04"));
        assert!(patch.name.is_none());

        assert!(build_patch(None, None, Some("Holiday".into()), None).is_err());
        assert!(build_patch(None, None, None, Some("soon".into())).is_err());
    }

    #[test]
    fn test_update_changes_requested_field() {
        let (mut store, id) = store_with_standup();

        run(&mut store, &id, None, None, Some("Personal".into()), None).unwrap();

        let event = store.get(&id).unwrap();
        assert_eq!(event.category, Category::Personal);
        assert_eq!(event.name, "Standup");
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let (mut store, _) = store_with_standup();
        let err = run(&mut store, "nope", Some("x".into()), None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "Event not found: nope");
    }

    #[test]
    fn test_empty_update_is_rejected() {
        let (mut store, id) = store_with_standup();
        assert!(run(&mut store, &id, None, None, None, None).is_err());
    }
}
