//! Process model.
//!
//! A process is one workload entry plus the timing state the scheduler
//! fills in while it runs: time spent waiting, time of completion, and (for
//! preemptive policies) how much CPU time is still owed.
//!
//! # Time Representation
//! All times are abstract simulation units relative to schedule start (t=0).
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

use crate::workload::WorkloadEntry;

/// A process to be scheduled, with mutable timing state.
///
/// Created fresh per scheduler from a workload record, mutated only by that
/// scheduler's `run`, and read-only thereafter for metrics and reporting.
/// Processes are never shared between schedulers.
///
/// # Invariants (after `run` completes)
/// - `remaining_time <= burst_time`, reaching 0 exactly at completion
/// - `turnaround_time >= burst_time`
/// - `waiting_time` only ever grew while the process was unfinished
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process name. Not required to be unique.
    pub name: String,
    /// Total CPU time required. Positive; enforced at `Scheduler::add`.
    pub burst_time: u64,
    /// CPU time still owed. Starts at `burst_time`; decremented only by
    /// preemptive policies.
    pub remaining_time: u64,
    /// Scheduling priority (higher = scheduled earlier under the priority
    /// policy). Unvalidated.
    pub priority: i32,
    /// Accumulated time spent ready but not executing.
    pub waiting_time: u64,
    /// Simulation time at which the process finished. Set exactly once,
    /// when `remaining_time` reaches 0.
    pub turnaround_time: u64,
}

impl Process {
    /// Creates a new process with zeroed timing state.
    pub fn new(name: impl Into<String>, burst_time: u64, priority: i32) -> Self {
        Self {
            name: name.into(),
            burst_time,
            remaining_time: burst_time,
            priority,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// Creates a fresh process from a workload record.
    pub fn from_entry(entry: &WorkloadEntry) -> Self {
        Self::new(entry.name.clone(), entry.burst_time, entry.priority)
    }

    /// Whether the process has received all of its CPU time.
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Normalized slowdown: `turnaround_time / burst_time`.
    ///
    /// Meaningful only after the owning scheduler's `run` has completed.
    pub fn penalty(&self) -> f64 {
        self.turnaround_time as f64 / self.burst_time as f64
    }
}
