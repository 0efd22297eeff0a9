//! CLI command implementations

pub mod coverage;
pub mod doctor;
pub mod examples;
pub mod json_output;
pub mod list;
pub mod syllabify;
pub mod synthesize;

mod reporting;
