//! Expense identifiers
//!
//! Ids are integers derived from the wall clock in milliseconds. The clock
//! alone can repeat within one millisecond, so every generated id is also
//! forced strictly above the last id handed out in this process.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Unique identifier of an expense within the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Create a new id from the current timestamp
    ///
    /// Two calls in the same process never return the same value.
    pub fn generate() -> Self {
        Self::next_after_clock(Utc::now().timestamp_millis())
    }

    fn next_after_clock(now_millis: i64) -> Self {
        let mut last = LAST_ISSUED.load(Ordering::Relaxed);
        loop {
            let candidate = now_millis.max(last + 1);
            match LAST_ISSUED.compare_exchange_weak(
                last,
                candidate,
                Ordering::SeqCst,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Self(candidate),
                Err(observed) => last = observed,
            }
        }
    }

    /// Wrap an existing raw id (edit path, imports, tests)
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ExpenseId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_are_distinct() {
        let ids: HashSet<_> = (0..1000).map(|_| ExpenseId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_same_millisecond_does_not_collide() {
        let clock = Utc::now().timestamp_millis();
        let a = ExpenseId::next_after_clock(clock);
        let b = ExpenseId::next_after_clock(clock);
        assert!(b > a);
    }

    #[test]
    fn test_generated_ids_follow_clock() {
        let before = Utc::now().timestamp_millis();
        let id = ExpenseId::generate();
        assert!(id.as_i64() >= before);
    }

    #[test]
    fn test_id_serialization() {
        let id = ExpenseId::from_raw(1704412800000);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "1704412800000");

        let deserialized: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_parse() {
        assert_eq!("42".parse::<ExpenseId>().unwrap(), ExpenseId::from_raw(42));
        assert_eq!(" 7 ".parse::<ExpenseId>().unwrap(), ExpenseId::from_raw(7));
        assert!("abc".parse::<ExpenseId>().is_err());
    }
}
