//! Relationship resolution
//!
//! Relationship declarations use three encodings:
//!
//! 1. `mutual` lists, where every participant relates to every other
//! 2. `active`/`passive` lists, where every passive participant (source) relates to
//!    every active participant (target)
//! 3. multi-valued lists in either of the above
//!
//! The resolver folds them, person by person, into a [`RelationshipSet`] of directed
//! pairs. Inverse pairs of directed declarations are suppressed when the inverse was
//! already accumulated from an earlier person.

pub mod predicate;
pub mod resolver;
pub mod set;

// Re-export key types
pub use predicate::{predicate_label, title_case};
pub use resolver::{ResolveStats, resolve, resolve_declarations};
pub use set::RelationshipSet;
