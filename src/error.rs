//! Typed failures for the scheduling core and the workload source.
//!
//! The policy set itself is a closed enum (`scheduler::Policy`), so "policy
//! not implemented" is unrepresentable at runtime and has no error variant
//! here. All remaining failures are returned at the point of violation and
//! are never retried: a scheduler that fails validation at construction or
//! `add()` must not have `run()` called on it.

use thiserror::Error;

/// Errors raised by the scheduling contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// `metrics()` or `report()` called with no processes loaded.
    ///
    /// Explicit and catchable, rather than a silent division by zero.
    #[error("no processes loaded; metrics require a non-empty workload")]
    EmptyWorkload,

    /// Round-robin constructed with a zero quantum.
    #[error("round-robin quantum must be positive")]
    InvalidQuantum,

    /// `add()` called with a zero burst time, which would corrupt the
    /// timing math downstream.
    #[error("process '{name}' has zero burst time")]
    InvalidBurstTime {
        /// Name of the rejected process.
        name: String,
    },
}

/// Errors raised by the text-file workload source.
#[derive(Error, Debug)]
pub enum WorkloadError {
    /// Reading or writing the workload file failed.
    #[error("workload file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not parse as `name burst_time priority`.
    #[error("line {line}: malformed workload record: {reason}")]
    Malformed {
        /// 1-based line number in the workload file.
        line: usize,
        /// What was wrong with the record.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_error_messages() {
        assert_eq!(
            ScheduleError::EmptyWorkload.to_string(),
            "no processes loaded; metrics require a non-empty workload"
        );
        assert_eq!(
            ScheduleError::InvalidBurstTime {
                name: "idle".into()
            }
            .to_string(),
            "process 'idle' has zero burst time"
        );
    }

    #[test]
    fn test_workload_error_carries_line_number() {
        let err = WorkloadError::Malformed {
            line: 3,
            reason: "expected 3 fields, got 2".into(),
        };
        assert_eq!(
            err.to_string(),
            "line 3: malformed workload record: expected 3 fields, got 2"
        );
    }
}
