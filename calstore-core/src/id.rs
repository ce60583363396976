//! Event id generation.
//!
//! Ids are millisecond timestamps rendered as decimal strings. The generator
//! never hands out the same value twice, even when called several times
//! within one millisecond or when the clock steps backwards.

use chrono::Utc;

#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: i64,
    /// Suffix counter once a loaded id has used up the numeric range
    overflow: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator::default()
    }

    /// Make sure future ids sort after every numeric id in `ids`.
    pub fn seed<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        let max = ids
            .into_iter()
            .filter_map(|id| id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        self.last = self.last.max(max);
    }

    pub fn next_id(&mut self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_ms: i64) -> String {
        match self.last.checked_add(1) {
            Some(floor) => {
                let id = now_ms.max(floor);
                self.last = id;
                id.to_string()
            }
            None => {
                self.overflow += 1;
                format!("{now_ms}-{}", self.overflow)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_clock_when_ahead() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_at(1_717_200_000_000), "1717200000000");
        assert_eq!(ids.next_at(1_717_200_000_500), "1717200000500");
    }

    #[test]
    fn test_same_millisecond_still_unique() {
        let mut ids = IdGenerator::new();
        let a = ids.next_at(1000);
        let b = ids.next_at(1000);
        let c = ids.next_at(999);
        assert_eq!((a.as_str(), b.as_str(), c.as_str()), ("1000", "1001", "1002"));
    }

    #[test]
    fn test_seed_skips_past_existing_ids() {
        let mut ids = IdGenerator::new();
        ids.seed(["5000", "not-a-number", "4000"]);
        assert_eq!(ids.next_at(10), "5001");
    }

    #[test]
    fn test_seeded_with_max_id_falls_back_to_suffix() {
        let mut ids = IdGenerator::new();
        let max = i64::MAX.to_string();
        ids.seed([max.as_str()]);

        assert_eq!(ids.next_at(1000), "1000-1");
        assert_eq!(ids.next_at(1000), "1000-2");
    }

    #[test]
    fn test_rapid_calls_from_clock_are_unique() {
        let mut ids = IdGenerator::new();
        let generated: std::collections::HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 1000);
    }
}
