//! Scheduling policies and the scheduler contract.
//!
//! Provides the closed set of scheduling disciplines and the single-use
//! `Scheduler` that executes one of them over its owned process list.
//!
//! # Policies
//!
//! | Policy | Preemptive | Dispatch order |
//! |--------|-----------|----------------|
//! | FCFS | no | insertion order |
//! | SJF | no | ascending burst time |
//! | PRIORITY | no | descending priority |
//! | RR | yes | FIFO queue, fixed quantum |
//! | SRTF | yes | least remaining time, per tick |
//!
//! All orderings break ties by insertion order.
//!
//! # Example
//!
//! ```
//! use sched_sim::{Policy, Process, Scheduler};
//!
//! let mut scheduler = Scheduler::new(Policy::Fifo)?;
//! scheduler.add(Process::new("A", 5, 1))?;
//! scheduler.add(Process::new("B", 3, 2))?;
//! scheduler.run();
//!
//! assert_eq!(scheduler.total_time(), 10);
//! let metrics = scheduler.metrics()?;
//! assert!(metrics.avg_waiting_time > 0.0);
//! # Ok::<(), sched_sim::ScheduleError>(())
//! ```
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

mod metrics;
mod nonpreemptive;
mod report;
mod round_robin;
mod srtf;

pub use metrics::ScheduleMetrics;
pub use report::{ProcessReport, ScheduleReport};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::Process;
use crate::workload::WorkloadEntry;

use nonpreemptive::DispatchOrder;

/// Fixed overhead charged once between any two consecutive dispatches
/// (never before the first), in simulation time units.
pub const CONTEXT_SWITCH_TIME: u64 = 2;

/// A scheduling discipline.
///
/// The set is closed: dispatching matches exhaustively on this enum, so a
/// policy without an implementation cannot exist at runtime. Selected once,
/// at scheduler construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// First-come-first-served: run-to-completion in insertion order.
    Fifo,
    /// Shortest-job-first: run-to-completion, ascending burst time.
    Sjf,
    /// Priority: run-to-completion, descending priority value.
    Priority,
    /// Round-robin with a fixed positive quantum per dispatch.
    RoundRobin {
        /// Maximum CPU time one dispatch may consume.
        quantum: u64,
    },
    /// Shortest-remaining-time-first, one time unit per dispatch.
    Srtf,
}

impl Policy {
    /// Display name of the policy.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Priority => "PRIORITY",
            Policy::RoundRobin { .. } => "RR",
            Policy::Srtf => "SRTF",
        }
    }

    /// Whether the policy can interrupt a process before completion.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::RoundRobin { .. } | Policy::Srtf)
    }
}

/// A single-use scheduler: load processes, `run()` once, then read results.
///
/// Owns its process list exclusively; nothing else mutates the processes
/// while `run()` executes, and callers must not treat waiting or turnaround
/// fields as final until it returns.
#[derive(Debug, Clone)]
pub struct Scheduler {
    policy: Policy,
    processes: Vec<Process>,
    context_switch_time: u64,
    total_time: u64,
}

impl Scheduler {
    /// Creates an empty scheduler for the given policy.
    ///
    /// Fails with [`ScheduleError::InvalidQuantum`] for a round-robin
    /// quantum of zero.
    pub fn new(policy: Policy) -> Result<Self, ScheduleError> {
        if let Policy::RoundRobin { quantum: 0 } = policy {
            return Err(ScheduleError::InvalidQuantum);
        }
        Ok(Self {
            policy,
            processes: Vec::new(),
            context_switch_time: CONTEXT_SWITCH_TIME,
            total_time: 0,
        })
    }

    /// Appends a process to the owned list.
    ///
    /// Fails with [`ScheduleError::InvalidBurstTime`] for a zero burst
    /// time, which would corrupt the timing math.
    pub fn add(&mut self, process: Process) -> Result<(), ScheduleError> {
        if process.burst_time == 0 {
            return Err(ScheduleError::InvalidBurstTime { name: process.name });
        }
        self.processes.push(process);
        Ok(())
    }

    /// Builds fresh processes from workload records and loads them in order.
    pub fn load(&mut self, entries: &[WorkloadEntry]) -> Result<(), ScheduleError> {
        for entry in entries {
            self.add(Process::from_entry(entry))?;
        }
        Ok(())
    }

    /// Executes the policy over the loaded processes.
    ///
    /// By the time this returns, every process has its waiting and
    /// turnaround time set and `total_time` holds the final clock value.
    /// An empty process list is a valid, trivial run with `total_time = 0`.
    pub fn run(&mut self) {
        debug!(
            "running {} over {} processes",
            self.policy.name(),
            self.processes.len()
        );

        self.total_time = match self.policy {
            Policy::Fifo => nonpreemptive::run(
                &mut self.processes,
                DispatchOrder::Insertion,
                self.context_switch_time,
            ),
            Policy::Sjf => nonpreemptive::run(
                &mut self.processes,
                DispatchOrder::ShortestBurst,
                self.context_switch_time,
            ),
            Policy::Priority => nonpreemptive::run(
                &mut self.processes,
                DispatchOrder::HighestPriority,
                self.context_switch_time,
            ),
            Policy::RoundRobin { quantum } => {
                round_robin::run(&mut self.processes, quantum, self.context_switch_time)
            }
            Policy::Srtf => srtf::run(&mut self.processes, self.context_switch_time),
        };

        debug!(
            "{} complete: total_time={}",
            self.policy.name(),
            self.total_time
        );
    }

    /// Aggregate metrics over the owned processes.
    ///
    /// Fails with [`ScheduleError::EmptyWorkload`] when none are loaded.
    pub fn metrics(&self) -> Result<ScheduleMetrics, ScheduleError> {
        ScheduleMetrics::calculate(&self.processes)
    }

    /// Builds the textual run summary. Pure read of final state.
    pub fn report(&self) -> Result<ScheduleReport, ScheduleError> {
        ScheduleReport::from_scheduler(self)
    }

    /// The policy this scheduler was constructed with.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// The owned processes, in insertion order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Per-switch overhead charged between consecutive dispatches.
    pub fn context_switch_time(&self) -> u64 {
        self.context_switch_time
    }

    /// Simulation clock at the end of the last dispatch. 0 before `run()`.
    pub fn total_time(&self) -> u64 {
        self.total_time
    }
}
