//! Textual run summary.
//!
//! A report is a pure read of a scheduler's final state: per-process timing
//! rows, the aggregate metrics, and the total elapsed time. Building or
//! printing one mutates nothing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::Process;

use super::{ScheduleMetrics, Scheduler};

/// One process's line in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReport {
    /// Process name.
    pub name: String,
    /// Final accumulated waiting time.
    pub waiting_time: u64,
    /// Final completion time.
    pub turnaround_time: u64,
}

impl From<&Process> for ProcessReport {
    fn from(process: &Process) -> Self {
        Self {
            name: process.name.clone(),
            waiting_time: process.waiting_time,
            turnaround_time: process.turnaround_time,
        }
    }
}

/// Summary of one completed schedule run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Display name of the policy that ran.
    pub policy: String,
    /// Per-process rows, in the scheduler's insertion order.
    pub processes: Vec<ProcessReport>,
    /// Aggregate averages.
    pub metrics: ScheduleMetrics,
    /// Simulation clock at the end of the last dispatch.
    pub total_time: u64,
}

impl ScheduleReport {
    /// Builds a report from a scheduler that has finished `run()`.
    ///
    /// Fails with [`ScheduleError::EmptyWorkload`] when the scheduler has
    /// no processes, since the report embeds the averages.
    pub fn from_scheduler(scheduler: &Scheduler) -> Result<Self, ScheduleError> {
        let metrics = ScheduleMetrics::calculate(scheduler.processes())?;
        Ok(Self {
            policy: scheduler.policy().name().to_string(),
            processes: scheduler.processes().iter().map(ProcessReport::from).collect(),
            metrics,
            total_time: scheduler.total_time(),
        })
    }
}

impl fmt::Display for ScheduleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results for {}:", self.policy)?;
        for row in &self.processes {
            writeln!(
                f,
                "{}: waiting time = {}, turnaround time = {}",
                row.name, row.waiting_time, row.turnaround_time
            )?;
        }
        writeln!(
            f,
            "Average - waiting: {:.2}, turnaround: {:.2}, penalty: {:.2}",
            self.metrics.avg_waiting_time,
            self.metrics.avg_turnaround_time,
            self.metrics.avg_penalty
        )?;
        write!(f, "Total execution time: {}", self.total_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Policy;

    fn completed_fifo_scheduler() -> Scheduler {
        let mut scheduler = Scheduler::new(Policy::Fifo).unwrap();
        scheduler.add(Process::new("A", 5, 1)).unwrap();
        scheduler.add(Process::new("B", 3, 2)).unwrap();
        scheduler.run();
        scheduler
    }

    #[test]
    fn test_report_rows_follow_insertion_order() {
        let scheduler = completed_fifo_scheduler();
        let report = ScheduleReport::from_scheduler(&scheduler).unwrap();

        assert_eq!(report.policy, "FCFS");
        assert_eq!(report.processes.len(), 2);
        assert_eq!(report.processes[0].name, "A");
        assert_eq!(report.processes[0].waiting_time, 0);
        assert_eq!(report.processes[0].turnaround_time, 5);
        assert_eq!(report.processes[1].name, "B");
        assert_eq!(report.processes[1].waiting_time, 7);
        assert_eq!(report.processes[1].turnaround_time, 10);
        assert_eq!(report.total_time, 10);
    }

    #[test]
    fn test_display_layout() {
        let scheduler = completed_fifo_scheduler();
        let text = ScheduleReport::from_scheduler(&scheduler)
            .unwrap()
            .to_string();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Results for FCFS:");
        assert_eq!(lines[1], "A: waiting time = 0, turnaround time = 5");
        assert_eq!(lines[2], "B: waiting time = 7, turnaround time = 10");
        assert_eq!(
            lines[3],
            "Average - waiting: 3.50, turnaround: 7.50, penalty: 2.17"
        );
        assert_eq!(lines[4], "Total execution time: 10");
    }

    #[test]
    fn test_building_report_does_not_mutate() {
        let scheduler = completed_fifo_scheduler();
        let before = scheduler.processes().to_vec();
        let _ = ScheduleReport::from_scheduler(&scheduler).unwrap();
        assert_eq!(scheduler.processes(), &before[..]);
    }

    #[test]
    fn test_empty_scheduler_has_no_report() {
        let scheduler = Scheduler::new(Policy::Fifo).unwrap();
        assert_eq!(
            ScheduleReport::from_scheduler(&scheduler).unwrap_err(),
            ScheduleError::EmptyWorkload
        );
    }
}
