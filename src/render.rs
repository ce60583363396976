//! Terminal rendering for calstore types.

use calstore_core::{Category, Event};
use owo_colors::OwoColorize;

/// Descriptions longer than this are cut short in list view
const PREVIEW_CHARS: usize = 100;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Category {
    fn render(&self) -> String {
        let (r, g, b) = self.rgb();
        self.as_str().truecolor(r, g, b).to_string()
    }
}

impl Render for Event {
    /// Card used by `list`: name, description preview, category and date.
    fn render(&self) -> String {
        let mut lines = vec![self.name.bold().to_string()];
        let preview = preview(&self.description);
        if !preview.is_empty() {
            lines.push(format!("  {}", preview));
        }
        lines.push(format!("  {}  {}", self.category.render(), self.date.dimmed()));
        lines.push(format!("  {}", self.id.dimmed()));
        lines.join("\n")
    }
}

/// Full view used by `show`.
pub fn render_detail(event: &Event) -> String {
    format!(
        "{}\n\n  Category:    {}\n  Date:        {}\n  Id:          {}\n\n{}",
        event.name.bold(),
        event.category.render(),
        event.date,
        event.id.dimmed(),
        event.description
    )
}

fn preview(description: &str) -> String {
    if description.chars().count() > PREVIEW_CHARS {
        let cut: String = description.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        description.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_description_is_untouched() {
        assert_eq!(preview("Daily sync"), "Daily sync");
        assert_eq!(preview(&"a".repeat(100)), "a".repeat(100));
    }

    #[test]
    fn test_long_description_is_truncated() {
        let long = "b".repeat(150);
        let shown = preview(&long);
        assert_eq!(shown, format!("{}...", "b".repeat(100)));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let long = "é".repeat(120);
        assert_eq!(preview(&long).chars().count(), 103);
    }
}
