//! A Rust library for converting TEI personographies into the agent and
//! relationship CSV tables imported by Heurist.

pub mod algorithm;
pub mod config;
pub mod convert;
pub mod error;
pub mod models;
pub mod reader;
pub mod schema;
pub mod utils;
pub mod writer;

// Re-export the most common types for easier use
pub use config::{ConverterConfig, OutputPaths};
pub use convert::{ConversionSummary, MemorySink, PersonographyConverter};
pub use error::{ConvertError, Result};
pub use models::{AgentRow, PersonRecord, RelationshipDeclaration, RelationshipRecord};

// Relationship resolution
pub use algorithm::relations::{RelationshipSet, ResolveStats, resolve, resolve_declarations};
