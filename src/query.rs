//! Query Cache
//!
//! Explicit replacement for a global query registry: entries are keyed by a
//! static query key, carry the time they were last fetched, and track
//! whether a fetch for the key is currently in flight.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, TimeDelta, Utc};

/// Key of the todo list query
pub const TODOS_KEY: &str = "todos";

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    pub data: T,
    /// None once invalidated
    pub fetched_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub struct QueryCache<T> {
    entries: HashMap<&'static str, CacheEntry<T>>,
    in_flight: HashSet<&'static str>,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            in_flight: HashSet::new(),
        }
    }
}

impl<T> QueryCache<T> {
    pub fn data(&self, key: &str) -> Option<&T> {
        self.entries.get(key).map(|entry| &entry.data)
    }

    /// Store a fetch result, fresh as of `now`
    pub fn set_data(&mut self, key: &'static str, data: T, now: DateTime<Utc>) {
        self.entries.insert(key, CacheEntry { data, fetched_at: Some(now) });
    }

    /// Edit cached data in place without touching freshness
    pub fn update_data(&mut self, key: &'static str, f: impl FnOnce(&mut T))
    where
        T: Default,
    {
        let entry = self.entries.entry(key).or_insert_with(|| CacheEntry {
            data: T::default(),
            fetched_at: None,
        });
        f(&mut entry.data);
    }

    /// Mark stale; data is kept until the next fetch replaces it
    pub fn invalidate(&mut self, key: &str) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.fetched_at = None;
        }
    }

    pub fn is_fresh(&self, key: &str, now: DateTime<Utc>, stale_time: TimeDelta) -> bool {
        self.entries
            .get(key)
            .and_then(|entry| entry.fetched_at)
            .is_some_and(|at| now - at < stale_time)
    }

    pub fn is_fetching(&self, key: &str) -> bool {
        self.in_flight.contains(key)
    }

    /// A fetch is needed unless one is in flight or the data is still fresh
    pub fn should_fetch(&self, key: &str, now: DateTime<Utc>, stale_time: TimeDelta) -> bool {
        !self.is_fetching(key) && !self.is_fresh(key, now, stale_time)
    }

    /// Returns false when a fetch for `key` is already running
    pub fn begin_fetch(&mut self, key: &'static str) -> bool {
        self.in_flight.insert(key)
    }

    pub fn finish_fetch(&mut self, key: &str) {
        self.in_flight.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_fresh_inside_window() {
        let mut cache = QueryCache::default();
        cache.set_data(TODOS_KEY, vec![1, 2], at(0));

        assert!(cache.is_fresh(TODOS_KEY, at(4), TimeDelta::seconds(5)));
        assert!(!cache.is_fresh(TODOS_KEY, at(5), TimeDelta::seconds(5)));
        assert!(!cache.should_fetch(TODOS_KEY, at(1), TimeDelta::seconds(5)));
        assert!(cache.should_fetch(TODOS_KEY, at(6), TimeDelta::seconds(5)));
    }

    #[test]
    fn test_missing_entry_needs_fetch() {
        let cache: QueryCache<Vec<u32>> = QueryCache::default();
        assert!(cache.data(TODOS_KEY).is_none());
        assert!(cache.should_fetch(TODOS_KEY, at(0), TimeDelta::seconds(5)));
    }

    #[test]
    fn test_in_flight_dedup() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::default();
        assert!(cache.begin_fetch(TODOS_KEY));
        assert!(!cache.begin_fetch(TODOS_KEY));
        assert!(!cache.should_fetch(TODOS_KEY, at(0), TimeDelta::seconds(5)));

        cache.finish_fetch(TODOS_KEY);
        assert!(cache.begin_fetch(TODOS_KEY));
    }

    #[test]
    fn test_update_keeps_freshness() {
        let mut cache = QueryCache::default();
        cache.set_data(TODOS_KEY, vec![2, 3], at(0));
        cache.update_data(TODOS_KEY, |list| list.insert(0, 1));

        assert_eq!(cache.data(TODOS_KEY), Some(&vec![1, 2, 3]));
        assert!(cache.is_fresh(TODOS_KEY, at(4), TimeDelta::seconds(5)));
        assert!(!cache.is_fresh(TODOS_KEY, at(5), TimeDelta::seconds(5)));
    }

    #[test]
    fn test_update_creates_stale_entry() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::default();
        cache.update_data(TODOS_KEY, |list| list.push(7));

        assert_eq!(cache.data(TODOS_KEY), Some(&vec![7]));
        assert!(!cache.is_fresh(TODOS_KEY, at(0), TimeDelta::seconds(5)));
    }

    #[test]
    fn test_invalidate_keeps_data() {
        let mut cache = QueryCache::default();
        cache.set_data(TODOS_KEY, vec![1], at(0));
        cache.invalidate(TODOS_KEY);

        assert_eq!(cache.data(TODOS_KEY), Some(&vec![1]));
        assert!(cache.should_fetch(TODOS_KEY, at(1), TimeDelta::seconds(5)));
    }
}
