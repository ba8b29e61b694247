//! Single-processor CPU scheduling simulator.
//!
//! Models how five classical scheduling disciplines — FCFS, shortest-job-first,
//! priority, round-robin, and shortest-remaining-time-first — order and
//! interleave a fixed workload on one CPU, and computes per-process waiting
//! time, turnaround time, and a normalized penalty ratio.
//!
//! # Modules
//!
//! - **`models`**: the `Process` timing-state model
//! - **`scheduler`**: the sealed `Policy` set, the `Scheduler` contract,
//!   metrics and report types
//! - **`workload`**: the replaceable workload source — records, text-file
//!   codec, and random generation
//! - **`error`**: typed failures (`ScheduleError`, `WorkloadError`)
//!
//! # Architecture
//!
//! A workload source yields an ordered sequence of `(name, burst, priority)`
//! records. A caller builds fresh `Process` instances from them, loads them
//! into one single-use `Scheduler`, and calls `run()`. The scheduler mutates
//! each process's timing state according to its policy; metrics and the
//! textual report are pure reads of the final state.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod error;
pub mod models;
pub mod scheduler;
pub mod workload;

pub use error::{ScheduleError, WorkloadError};
pub use models::Process;
pub use scheduler::{Policy, ScheduleMetrics, ScheduleReport, Scheduler, CONTEXT_SWITCH_TIME};
pub use workload::{read_workload, write_workload, WorkloadEntry, WorkloadGenerator};
