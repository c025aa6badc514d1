//! Utility functions shared by the converter and its binary

pub mod logging;
