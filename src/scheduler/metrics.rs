//! Aggregate schedule metrics.
//!
//! Computed from a completed process list, after the owning scheduler's
//! `run` has returned.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean of `waiting_time` |
//! | Avg Turnaround | mean of `turnaround_time` |
//! | Avg Penalty | mean of `turnaround_time / burst_time` |

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::Process;

/// Aggregate timing metrics for one schedule run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Mean time spent ready but not executing.
    pub avg_waiting_time: f64,
    /// Mean completion time.
    pub avg_turnaround_time: f64,
    /// Mean normalized slowdown (turnaround over burst).
    pub avg_penalty: f64,
}

impl ScheduleMetrics {
    /// Computes metrics over a process list.
    ///
    /// Fails with [`ScheduleError::EmptyWorkload`] when `processes` is
    /// empty, rather than dividing by zero.
    pub fn calculate(processes: &[Process]) -> Result<Self, ScheduleError> {
        if processes.is_empty() {
            return Err(ScheduleError::EmptyWorkload);
        }

        let count = processes.len() as f64;
        let total_waiting: u64 = processes.iter().map(|p| p.waiting_time).sum();
        let total_turnaround: u64 = processes.iter().map(|p| p.turnaround_time).sum();
        let total_penalty: f64 = processes.iter().map(Process::penalty).sum();

        Ok(Self {
            avg_waiting_time: total_waiting as f64 / count,
            avg_turnaround_time: total_turnaround as f64 / count,
            avg_penalty: total_penalty / count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(name: &str, burst: u64, waiting: u64, turnaround: u64) -> Process {
        let mut p = Process::new(name, burst, 0);
        p.remaining_time = 0;
        p.waiting_time = waiting;
        p.turnaround_time = turnaround;
        p
    }

    #[test]
    fn test_calculate_averages() {
        // The FCFS outcome for bursts 5, 3, 8 with a 2-unit switch.
        let processes = vec![
            completed("A", 5, 0, 5),
            completed("B", 3, 7, 10),
            completed("C", 8, 12, 20),
        ];

        let metrics = ScheduleMetrics::calculate(&processes).unwrap();
        assert!((metrics.avg_waiting_time - 19.0 / 3.0).abs() < 1e-10);
        assert!((metrics.avg_turnaround_time - 35.0 / 3.0).abs() < 1e-10);
        // Penalties: 1.0, 10/3, 2.5
        assert!((metrics.avg_penalty - (1.0 + 10.0 / 3.0 + 2.5) / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_process_penalty_is_one_when_undelayed() {
        let processes = vec![completed("only", 4, 0, 4)];
        let metrics = ScheduleMetrics::calculate(&processes).unwrap();
        assert!((metrics.avg_penalty - 1.0).abs() < 1e-10);
        assert!((metrics.avg_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_workload_is_explicit_error() {
        assert_eq!(
            ScheduleMetrics::calculate(&[]).unwrap_err(),
            ScheduleError::EmptyWorkload
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let metrics = ScheduleMetrics {
            avg_waiting_time: 6.5,
            avg_turnaround_time: 11.0,
            avg_penalty: 2.25,
        };
        let json = serde_json::to_string(&metrics).unwrap();
        let back: ScheduleMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metrics);
    }
}
