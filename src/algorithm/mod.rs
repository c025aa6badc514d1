//! Algorithm implementations for the personography conversion
//!
//! This module contains the relationship resolution that turns the relationship
//! declarations scattered across person records into one deduplicated set.

pub mod relations;
