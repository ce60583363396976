//! Event types.
//!
//! An `Event` is the only entity calstore knows about. Callers create events
//! from an `EventDraft` (no id yet) and modify them with an `EventPatch`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::CalStoreError;

/// A calendar event as stored in the durable snapshot.
///
/// Field order matches the snapshot layout: id, name, description, category, date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Assigned by the store, never changes
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Calendar date, normally YYYY-MM-DD (not validated by the store)
    pub date: String,
}

impl Event {
    pub fn from_draft(id: String, draft: EventDraft) -> Self {
        Event {
            id,
            name: draft.name,
            description: draft.description,
            category: draft.category,
            date: draft.date,
        }
    }

    /// Case-insensitive substring search over name and description.
    /// A blank query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }

    /// The date as a `NaiveDate`, if it is well-formed YYYY-MM-DD.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// User-entered event data that has not been stored yet (no id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub date: String,
}

/// Partial update for an existing event. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.date.is_none()
    }

    /// Merge this patch over `event`. The id is never touched.
    pub fn apply_to(&self, event: &mut Event) {
        if let Some(ref name) = self.name {
            event.name = name.clone();
        }
        if let Some(ref description) = self.description {
            event.description = description.clone();
        }
        if let Some(category) = self.category {
            event.category = category;
        }
        if let Some(ref date) = self.date {
            event.date = date.clone();
        }
    }
}

/// The closed set of event categories.
///
/// Serialized as its label. Deserializing accepts any casing, like `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Work,
    Personal,
    Birthdays,
    Anniversary,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Work,
        Category::Personal,
        Category::Birthdays,
        Category::Anniversary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Birthdays => "Birthdays",
            Category::Anniversary => "Anniversary",
        }
    }

    /// Display colour used when rendering events of this category
    pub fn color(&self) -> &'static str {
        match self {
            Category::Work => "#007bff",
            Category::Personal => "#28a745",
            Category::Birthdays => "#ffc107",
            Category::Anniversary => "#dc3545",
        }
    }

    /// `color()` as an (r, g, b) triple, for terminals.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Category::Work => (0x00, 0x7b, 0xff),
            Category::Personal => (0x28, 0xa7, 0x45),
            Category::Birthdays => (0xff, 0xc1, 0x07),
            Category::Anniversary => (0xdc, 0x35, 0x45),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CalStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CalStoreError::InvalidCategory(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_event() -> Event {
        Event {
            id: "1717200000000".to_string(),
            name: "Standup".to_string(),
            description: "Daily sync with the team".to_string(),
            category: Category::Work,
            date: "2024-06-01".to_string(),
        }
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("work".parse::<Category>().unwrap(), Category::Work);
        assert_eq!(" Birthdays ".parse::<Category>().unwrap(), Category::Birthdays);
        assert_eq!("ANNIVERSARY".parse::<Category>().unwrap(), Category::Anniversary);
    }

    #[test]
    fn test_category_parse_rejects_unknown_labels() {
        let err = "Holiday".parse::<Category>().unwrap_err();
        assert!(matches!(err, CalStoreError::InvalidCategory(ref s) if s == "Holiday"));
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_event_serializes_with_snapshot_field_names() {
        let json = serde_json::to_string(&make_test_event()).unwrap();
        assert_eq!(
            json,
            r#"{"id":"1717200000000","name":"Standup","description":"Daily sync with the team","category":"Work","date":"2024-06-01"}"#
        );
    }

    #[test]
    fn test_unknown_category_fails_to_deserialize() {
        let json = r#"{"id":"1","name":"x","description":"","category":"Holiday","date":"2024-06-01"}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }

    #[test]
    fn test_category_deserializes_any_casing() {
        let categories: Vec<Category> = serde_json::from_str(r#"["work","PERSONAL","Birthdays"]"#).unwrap();
        assert_eq!(categories, [Category::Work, Category::Personal, Category::Birthdays]);
        assert_eq!(serde_json::to_string(&Category::Work).unwrap(), r#""Work""#);
    }

    #[test]
    fn test_patch_overrides_only_given_fields() {
        let mut event = make_test_event();
        let patch = EventPatch {
            category: Some(Category::Personal),
            ..Default::default()
        };

        patch.apply_to(&mut event);

        assert_eq!(event.category, Category::Personal);
        assert_eq!(event.id, "1717200000000");
        assert_eq!(event.name, "Standup");
        assert_eq!(event.description, "Daily sync with the team");
        assert_eq!(event.date, "2024-06-01");
    }

    #[test]
    fn test_patch_deserializes_from_partial_json() {
        let patch: EventPatch = serde_json::from_str(r#"{"name":"Retro"}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some("Retro"));
        assert!(patch.category.is_none());
        assert!(!patch.is_empty());
        assert!(EventPatch::default().is_empty());
    }

    #[test]
    fn test_matches_name_or_description() {
        let event = make_test_event();
        assert!(event.matches("stand"));
        assert!(event.matches("TEAM"));
        assert!(!event.matches("birthday"));
    }

    #[test]
    fn test_blank_query_matches_everything() {
        let event = make_test_event();
        assert!(event.matches(""));
        assert!(event.matches("   "));
    }

    #[test]
    fn test_parsed_date() {
        let mut event = make_test_event();
        assert_eq!(event.parsed_date(), NaiveDate::from_ymd_opt(2024, 6, 1));

        event.date = "June 1st".to_string();
        assert_eq!(event.parsed_date(), None);
    }

    #[test]
    fn test_category_colors_agree() {
        for category in Category::ALL {
            let (r, g, b) = category.rgb();
            assert_eq!(category.color(), format!("#{:02x}{:02x}{:02x}", r, g, b));
        }
    }
}
