//! Daily challenge seed supply and played-today guard
//!
//! The daily seed is the calendar date in the player's local timezone,
//! formatted `YYYY-MM-DD`. Everyone sharing a calendar day shares a seed,
//! and therefore (via the seeded generator) an answer. The guard stores
//! the last played date string so a host can offer the daily round at
//! most once per day.

use chrono::{Local, NaiveDate};

use crate::storage::{Store, StoreError};

/// Seed string for a given calendar date
pub fn seed_for(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Seed string for today, local timezone
pub fn today_seed() -> String {
    seed_for(Local::now().date_naive())
}

/// Whether the daily challenge was already played on `date`
pub fn has_played_on<S>(store: &S, date: NaiveDate) -> Result<bool, StoreError>
where
    S: Store<String>,
{
    Ok(store.load()?.as_deref() == Some(seed_for(date).as_str()))
}

/// Record that the daily challenge was played on `date`
pub fn mark_played_on<S>(store: &mut S, date: NaiveDate) -> Result<(), StoreError>
where
    S: Store<String>,
{
    store.save(&seed_for(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate_answer;
    use crate::storage::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_seed_format() {
        assert_eq!(seed_for(date(2026, 2, 21)), "2026-02-21");
        assert_eq!(seed_for(date(2026, 12, 1)), "2026-12-01");
    }

    #[test]
    fn test_seed_drives_shared_daily_answer() {
        let seed = seed_for(date(2026, 2, 21));
        let a = generate_answer(4, false, Some(&seed)).unwrap();
        let b = generate_answer(4, false, Some(&seed)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_played_guard() {
        let mut store = MemoryStore::new();
        let today = date(2026, 2, 21);

        assert!(!has_played_on(&store, today).unwrap());
        mark_played_on(&mut store, today).unwrap();
        assert!(has_played_on(&store, today).unwrap());

        // A new day clears the guard without touching storage
        assert!(!has_played_on(&store, date(2026, 2, 22)).unwrap());
    }
}
