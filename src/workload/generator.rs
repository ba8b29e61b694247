//! Random synthetic workload generation.
//!
//! Produces workload records with uniformly drawn burst times and priorities.
//! The RNG is injected, so callers seed a `StdRng` for reproducible
//! workloads and tests never depend on entropy.

use std::ops::RangeInclusive;

use rand::Rng;

use super::WorkloadEntry;

/// Configurable generator for synthetic workloads.
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use sched_sim::WorkloadGenerator;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let entries = WorkloadGenerator::new(10)
///     .with_burst_range(1..=15)
///     .with_priority_range(1..=3)
///     .generate(&mut rng);
/// assert_eq!(entries.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    burst_range: RangeInclusive<u64>,
    priority_range: RangeInclusive<i32>,
    name_prefix: String,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` entries with default ranges
    /// (burst 1..=15, priority 1..=3).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            burst_range: 1..=15,
            priority_range: 1..=3,
            name_prefix: "process_".into(),
        }
    }

    /// Sets the burst-time range. The lower bound must stay positive to
    /// satisfy the scheduler's burst-time contract.
    pub fn with_burst_range(mut self, range: RangeInclusive<u64>) -> Self {
        self.burst_range = range;
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.priority_range = range;
        self
    }

    /// Sets the name prefix; entries are named `{prefix}{index}`.
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Draws `count` workload entries from `rng`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<WorkloadEntry> {
        (0..self.count)
            .map(|i| {
                WorkloadEntry::new(
                    format!("{}{i}", self.name_prefix),
                    rng.random_range(self.burst_range.clone()),
                    rng.random_range(self.priority_range.clone()),
                )
            })
            .collect()
    }
}
