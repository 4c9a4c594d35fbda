//! In-memory monkey cache
//!
//! Provides a `MonkeyCache` that fetches the monkey list from its source the
//! first time it is asked for and serves every later request from memory.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::data::geo::distance_km;
use crate::data::{HttpMonkeySource, Monkey, MonkeySource};

/// Errors returned by cache lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonkeyError {
    /// No cached monkey has the requested name
    #[error("Monkey not found: {0}")]
    NotFound(String),
}

/// Fetch-once cache of the monkey list
///
/// The list is populated from the source on the first `get_monkeys` call that
/// finds it empty. Fetch failures are logged and leave the list empty; they
/// never reach the caller.
#[derive(Debug)]
pub struct MonkeyCache<S = HttpMonkeySource> {
    source: S,
    monkeys: Vec<Monkey>,
}

impl MonkeyCache<HttpMonkeySource> {
    /// Creates a cache backed by the default HTTP catalog
    pub fn new() -> Self {
        Self::with_source(HttpMonkeySource::new())
    }
}

impl Default for MonkeyCache<HttpMonkeySource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MonkeySource> MonkeyCache<S> {
    /// Creates an empty cache that fetches from `source`
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            monkeys: Vec::new(),
        }
    }

    /// Returns the monkey list, fetching it if nothing is cached yet
    ///
    /// # Behavior
    /// - A non-empty list is returned as-is without touching the source
    /// - Otherwise the source is asked once; its result replaces the list
    /// - On failure the list stays empty and an empty slice is returned
    pub async fn get_monkeys(&mut self) -> &[Monkey] {
        if !self.monkeys.is_empty() {
            return &self.monkeys;
        }

        debug!("fetching monkey list");
        match self.source.fetch_monkeys().await {
            Ok(monkeys) => {
                info!(count = monkeys.len(), "monkey list fetched");
                self.monkeys = monkeys;
            }
            Err(error) => {
                warn!(%error, "failed to fetch monkey list");
            }
        }

        &self.monkeys
    }

    /// Appends a monkey to the list and returns the updated list
    ///
    /// Works whether or not the list was ever fetched. Duplicates are kept.
    pub fn add_monkey(&mut self, monkey: Monkey) -> &[Monkey] {
        self.monkeys.push(monkey);
        &self.monkeys
    }

    /// Returns the first cached monkey with the given name
    pub fn find_monkey_by_name(&self, name: &str) -> Result<&Monkey, MonkeyError> {
        self.monkeys
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| MonkeyError::NotFound(name.to_string()))
    }

    /// Returns the cached monkey nearest to the given coordinates
    ///
    /// Only looks at what is already cached; returns `None` when empty.
    pub fn closest_to(&self, latitude: f64, longitude: f64) -> Option<&Monkey> {
        self.monkeys.iter().min_by(|a, b| {
            let da = distance_km(latitude, longitude, a.latitude, a.longitude);
            let db = distance_km(latitude, longitude, b.latitude, b.longitude);
            da.total_cmp(&db)
        })
    }

    /// Returns the cached list without fetching
    pub fn monkeys(&self) -> &[Monkey] {
        &self.monkeys
    }

    /// Returns the number of cached monkeys
    pub fn len(&self) -> usize {
        self.monkeys.len()
    }

    /// Returns true if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.monkeys.is_empty()
    }
}
