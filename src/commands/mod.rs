pub mod add;
pub mod delete;
pub mod export;
pub mod list;
pub mod show;
pub mod update;

use anyhow::Result;
use chrono::NaiveDate;

/// Check that a date is YYYY-MM-DD and return it normalized.
pub fn parse_date(input: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", input))?;
    Ok(date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-06-01").unwrap(), "2024-06-01");
        assert_eq!(parse_date(" 2024-6-1 ").unwrap(), "2024-06-01");
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("tomorrow").is_err());
    }
}
