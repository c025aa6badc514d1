//! Data models for person records, agent rows and relationships.

pub mod agent;
pub mod person;
pub mod relationship;

pub use agent::AgentRow;
pub use person::{PersonRecord, TEI_NS, XML_NS};
pub use relationship::{RelationshipDeclaration, RelationshipRecord, RelationshipShape};
