//! Per-person relationship resolution
//!
//! Each person's declarations are first staged in a set of their own and then merged
//! into the accumulated set. Inverse suppression for directed declarations looks only
//! at the accumulated set, so pairs staged by the same person never suppress each
//! other.

use itertools::Itertools;
use log::debug;

use crate::algorithm::relations::predicate::predicate_label;
use crate::algorithm::relations::set::RelationshipSet;
use crate::models::person::PersonRecord;
use crate::models::relationship::{RelationshipDeclaration, RelationshipShape};

/// Counters describing what the resolver did with a batch of declarations
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResolveStats {
    /// Declarations examined
    pub declarations: usize,
    /// Declarations without a type name
    pub unnamed: usize,
    /// Placeholder declarations, dropped by design of the source data
    pub placeholders: usize,
    /// Declarations with neither a mutual list nor an active/passive pair
    pub unrecognized: usize,
    /// Pairs staged for the accumulated set
    pub staged: usize,
    /// Directed pairs skipped because their inverse was already accumulated
    pub suppressed_inverses: usize,
}

impl ResolveStats {
    /// Add another set of counters to this one
    pub fn absorb(&mut self, other: Self) {
        self.declarations += other.declarations;
        self.unnamed += other.unnamed;
        self.placeholders += other.placeholders;
        self.unrecognized += other.unrecognized;
        self.staged += other.staged;
        self.suppressed_inverses += other.suppressed_inverses;
    }

    /// Declarations that contributed nothing
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.unnamed + self.placeholders + self.unrecognized
    }
}

/// Resolve one person's relationship declarations into the accumulated set
///
/// A person without declarations leaves the set untouched.
pub fn resolve(person: &PersonRecord<'_, '_>, accumulated: &mut RelationshipSet) -> ResolveStats {
    let declarations = person.relationship_declarations();
    if declarations.is_empty() {
        return ResolveStats::default();
    }

    let stats = resolve_declarations(&declarations, accumulated);
    if stats.skipped() > 0 {
        debug!(
            "Person {}: skipped {} of {} relationship declarations",
            person.xml_id(),
            stats.skipped(),
            stats.declarations
        );
    }
    stats
}

/// Resolve a batch of declarations (one person's worth) into the accumulated set
pub fn resolve_declarations(
    declarations: &[RelationshipDeclaration],
    accumulated: &mut RelationshipSet,
) -> ResolveStats {
    let mut stats = ResolveStats {
        declarations: declarations.len(),
        ..ResolveStats::default()
    };
    let mut staging = RelationshipSet::new();

    for declaration in declarations {
        let Some(name) = declaration.name.as_deref() else {
            stats.unnamed += 1;
            continue;
        };
        let Some(label) = predicate_label(name) else {
            stats.placeholders += 1;
            continue;
        };

        match declaration.shape() {
            RelationshipShape::Mutual(participants) => {
                // Repeated ids keep their first position so each pair appears once
                for (a, b) in participants.iter().unique().tuple_combinations() {
                    staging.insert(a.as_str(), b.as_str(), label.as_str());
                    stats.staged += 1;
                }
            }
            RelationshipShape::Directed { active, passive } => {
                for (source, target) in passive.iter().cartesian_product(active.iter()) {
                    if accumulated.contains(target, source) {
                        stats.suppressed_inverses += 1;
                        continue;
                    }
                    staging.insert(source.as_str(), target.as_str(), label.as_str());
                    stats.staged += 1;
                }
            }
            RelationshipShape::Unrecognized => {
                debug!("Ignoring relationship '{name}' without mutual or active/passive participants");
                stats.unrecognized += 1;
            }
        }
    }

    accumulated.merge(staging);
    stats
}
