//! Pathology lab reports: a fixed catalog of test panels, a session that
//! collects patient details and entered results, a reference-range check
//! per result, and a printable HTML report.

pub mod catalog;
pub mod input;
pub mod model;
pub mod output;
pub mod report;
pub mod tracing;
