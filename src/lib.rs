//! transcheck: find translation keys that a locale is missing relative to a
//! reference locale.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod diff;
pub mod errors;
pub mod json_utils;
pub mod report;
