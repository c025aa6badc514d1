//! The accumulated relationship set
//!
//! An insertion-ordered map from `(source, target)` to predicate label. It is owned by
//! a single conversion and grows person by person.

use indexmap::IndexMap;
use indexmap::map::Entry;
use rustc_hash::FxBuildHasher;

use crate::models::relationship::RelationshipRecord;

type PairMap = IndexMap<(String, String), String, FxBuildHasher>;

/// Directed relationship pairs with their labels, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipSet {
    pairs: PairMap,
}

impl RelationshipSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Whether the directed pair `(source, target)` is recorded
    #[must_use]
    pub fn contains(&self, source: &str, target: &str) -> bool {
        self.pairs
            .contains_key(&(source.to_owned(), target.to_owned()))
    }

    /// Label recorded for `(source, target)`
    #[must_use]
    pub fn label(&self, source: &str, target: &str) -> Option<&str> {
        self.pairs
            .get(&(source.to_owned(), target.to_owned()))
            .map(String::as_str)
    }

    /// Record a pair, replacing the label of an existing pair in place
    ///
    /// Returns the previous label if the pair was already present.
    pub fn insert(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Option<String> {
        self.pairs.insert((source.into(), target.into()), label.into())
    }

    /// Merge another set into this one
    ///
    /// Entries of `other` overwrite labels on collision; colliding pairs keep their
    /// original position. Returns the number of collisions.
    pub fn merge(&mut self, other: Self) -> usize {
        let mut collisions = 0;
        for (key, label) in other.pairs {
            match self.pairs.entry(key) {
                Entry::Occupied(mut entry) => {
                    entry.insert(label);
                    collisions += 1;
                }
                Entry::Vacant(entry) => {
                    entry.insert(label);
                }
            }
        }
        collisions
    }

    /// Iterate `(source, target, label)` in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.pairs
            .iter()
            .map(|((source, target), label)| (source.as_str(), target.as_str(), label.as_str()))
    }

    /// Flatten into relationship records in discovery order
    #[must_use]
    pub fn into_records(self) -> Vec<RelationshipRecord> {
        self.pairs
            .into_iter()
            .map(|((source, target), label)| RelationshipRecord { source, target, label })
            .collect()
    }
}
