//! Workload record and its line codec.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::WorkloadError;

/// One workload record: what to run, for how long, at what priority.
///
/// The input contract for the scheduling core. Entries are immutable; the
/// scheduler works on `Process` instances constructed from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadEntry {
    /// Process name. Not required to be unique.
    pub name: String,
    /// Total CPU time required. Positive by contract.
    pub burst_time: u64,
    /// Scheduling priority (higher = more important).
    pub priority: i32,
}

impl WorkloadEntry {
    /// Creates a new workload record.
    pub fn new(name: impl Into<String>, burst_time: u64, priority: i32) -> Self {
        Self {
            name: name.into(),
            burst_time,
            priority,
        }
    }

    /// Parses a `name burst_time priority` line.
    ///
    /// `line` is the 1-based line number attached to parse failures.
    pub fn parse_line(text: &str, line: usize) -> Result<Self, WorkloadError> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(WorkloadError::Malformed {
                line,
                reason: format!("expected 3 fields, got {}", fields.len()),
            });
        }

        let burst_time = fields[1].parse::<u64>().map_err(|_| WorkloadError::Malformed {
            line,
            reason: format!("burst time '{}' is not a non-negative integer", fields[1]),
        })?;
        let priority = fields[2].parse::<i32>().map_err(|_| WorkloadError::Malformed {
            line,
            reason: format!("priority '{}' is not an integer", fields[2]),
        })?;

        Ok(Self::new(fields[0], burst_time, priority))
    }

    /// Sorts entries into the canonical hand-off order: ascending burst
    /// time, ties broken by descending priority.
    pub fn sort_for_dispatch(entries: &mut [WorkloadEntry]) {
        entries.sort_by_key(|e| (e.burst_time, std::cmp::Reverse(e.priority)));
    }
}

impl fmt::Display for WorkloadEntry {
    /// Renders the record in its line encoding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.burst_time, self.priority)
    }
}

impl From<(&str, u64, i32)> for WorkloadEntry {
    /// Literal-tuple construction, for deterministic test workloads.
    fn from((name, burst_time, priority): (&str, u64, i32)) -> Self {
        Self::new(name, burst_time, priority)
    }
}
