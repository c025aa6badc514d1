//! Mapping of person records onto the agents table.
//!
//! This module holds the declarative field table and the value normalizers it uses
//! for dates and research notes.

pub mod date;
pub mod field_mapping;
pub mod notes;

pub use date::{format_date, normalize_date};
pub use field_mapping::{AGENT_FIELD_MAPPINGS, FieldMapping, agent_headers, extract_agent_row};
pub use notes::{aggregate_notes, format_note};
