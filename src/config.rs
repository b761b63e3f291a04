//! App Configuration
//!
//! Fixed endpoint and cache constants.

use chrono::TimeDelta;

/// Public demo API (accepts writes but never persists them)
pub const JSONPLACEHOLDER_URL: &str = "https://jsonplaceholder.typicode.com";

/// Number of todos requested from the list endpoint
pub const PAGE_SIZE: usize = 5;

/// Seconds a fetched list stays fresh
pub const STALE_SECS: i64 = 5;

/// Owner of every todo created from this UI
pub const DEFAULT_USER_ID: u32 = 1;

/// How long a toast stays on screen
pub const TOAST_MILLIS: u32 = 3000;

/// What to do with the cached list after a successful create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheUpdate {
    /// Mark the list stale and fetch it again
    #[default]
    InvalidateAndRefetch,
    /// Prepend the echoed todo locally; for backends that drop writes
    PrependEcho,
}

#[derive(Debug, Clone)]
pub struct TodoConfig {
    pub base_url: String,
    pub page_size: usize,
    pub stale_time: TimeDelta,
    pub user_id: u32,
    pub cache_update: CacheUpdate,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            base_url: JSONPLACEHOLDER_URL.to_string(),
            page_size: PAGE_SIZE,
            stale_time: TimeDelta::seconds(STALE_SECS),
            user_id: DEFAULT_USER_ID,
            cache_update: CacheUpdate::default(),
        }
    }
}

impl TodoConfig {
    /// Preset for jsonplaceholder: a refetch would lose the new todo
    pub fn jsonplaceholder() -> Self {
        Self {
            cache_update: CacheUpdate::PrependEcho,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_refetches() {
        let config = TodoConfig::default();
        assert_eq!(config.cache_update, CacheUpdate::InvalidateAndRefetch);
        assert_eq!(config.page_size, 5);
        assert_eq!(config.stale_time, TimeDelta::seconds(5));
    }

    #[test]
    fn test_jsonplaceholder_prepends() {
        let config = TodoConfig::jsonplaceholder();
        assert_eq!(config.cache_update, CacheUpdate::PrependEcho);
        assert_eq!(config.base_url, JSONPLACEHOLDER_URL);
    }
}
