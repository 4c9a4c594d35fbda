//! Star ratings for monkeys
//!
//! Keeps a rating of 0 to 5 stars per monkey in memory and tells observers when
//! anything changes. Ratings are keyed by monkey name and disappear when the
//! process exits.

use std::collections::HashMap;

use tracing::debug;

use crate::data::Monkey;

/// Highest rating a monkey can have
pub const MAX_RATING: u8 = 5;

/// Handle returned by `RatingStore::subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut() + Send>;

/// In-memory rating map with change notification
///
/// Observers are called with no arguments after every `set_rating`; they are
/// expected to read back whatever they need with `get_rating`.
#[derive(Default)]
pub struct RatingStore {
    ratings: HashMap<String, u8>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl std::fmt::Debug for RatingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RatingStore")
            .field("ratings", &self.ratings)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Clamps an arbitrary integer into the valid rating range
pub fn clamp_rating(value: i32) -> u8 {
    value.clamp(0, MAX_RATING as i32) as u8
}

impl RatingStore {
    /// Creates an empty store with no observers
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rating for a monkey, or 0 if it was never rated
    pub fn get_rating(&self, monkey: &Monkey) -> u8 {
        self.ratings.get(&monkey.name).copied().unwrap_or(0)
    }

    /// Stores a rating for a monkey and notifies observers
    ///
    /// The value is clamped to `0..=MAX_RATING`. An existing rating for the
    /// same name is overwritten.
    pub fn set_rating(&mut self, monkey: &Monkey, value: i32) {
        let rating = clamp_rating(value);
        self.ratings.insert(monkey.name.clone(), rating);
        debug!(monkey = %monkey.name, rating, "rating changed");

        for (_, observer) in self.observers.iter_mut() {
            observer();
        }
    }

    /// Registers a callback fired after every rating change
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut() + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a previously registered callback
    ///
    /// Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Iterates over every stored `(name, rating)` pair in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.ratings.iter().map(|(name, rating)| (name.as_str(), *rating))
    }

    /// Returns the number of monkeys with a stored rating
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Returns true if no rating has been stored
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}
