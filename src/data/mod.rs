//! Core data models for MonkeyFinder
//!
//! This module contains the monkey record returned by the remote catalog and
//! the sources that know how to fetch it.

pub mod geo;
pub mod source;

pub use source::{FetchError, HttpMonkeySource, MonkeySource, MONKEYS_URL};

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A monkey species as published by the remote catalog
///
/// The catalog capitalizes its field names (`Name`, `Image`, ...). Both that
/// spelling and the lowercase one are accepted when parsing; lowercase is
/// written when serializing.
///
/// Equality and hashing only look at `name`, which is the identity key used
/// by the cache lookup and the rating store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Monkey {
    /// Common name of the species, unique within a session
    #[serde(alias = "Name")]
    pub name: String,
    /// Where the species lives
    #[serde(alias = "Location")]
    pub location: String,
    /// Free-form description
    #[serde(alias = "Details")]
    pub details: String,
    /// URL of a picture of the species
    #[serde(alias = "Image")]
    pub image: String,
    /// Estimated population
    #[serde(alias = "Population")]
    pub population: u64,
    /// Latitude coordinate
    #[serde(alias = "Latitude")]
    pub latitude: f64,
    /// Longitude coordinate
    #[serde(alias = "Longitude")]
    pub longitude: f64,
}

impl Monkey {
    /// Creates a monkey with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl PartialEq for Monkey {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Monkey {}

impl Hash for Monkey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
