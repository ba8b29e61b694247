//! Workload source: records, text-file codec, and random generation.
//!
//! The scheduling core consumes an already-materialized ordered sequence of
//! `WorkloadEntry` records; everything in this module is a replaceable
//! collaborator in front of it. Tests can bypass it entirely by building
//! entries from literal tuples.
//!
//! # Text Encoding
//!
//! One record per line, whitespace-separated:
//!
//! ```text
//! name burst_time priority
//! ```

mod entry;
mod file;
mod generator;

pub use entry::WorkloadEntry;
pub use file::{read_workload, write_workload};
pub use generator::WorkloadGenerator;
