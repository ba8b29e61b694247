//! Round-robin execution: preemptive, fixed quantum, FIFO ready queue.

use std::collections::VecDeque;

use crate::models::Process;

/// Runs the round-robin loop over all processes. Returns the final clock.
///
/// Each dispatch executes at most `quantum` units. Unfinished processes go
/// back to the tail of the queue. On every dispatch, every other unfinished
/// process is charged `exec + context_switch_time` of waiting time whether
/// or not it was next in the queue — an intentional accounting rule of this
/// simulator, not classical round-robin bookkeeping.
pub(crate) fn run(processes: &mut [Process], quantum: u64, context_switch_time: u64) -> u64 {
    let mut queue: VecDeque<usize> = (0..processes.len()).collect();
    let mut clock = 0;

    while let Some(current) = queue.pop_front() {
        if clock > 0 {
            clock += context_switch_time;
        }

        let exec = quantum.min(processes[current].remaining_time);
        clock += exec;
        processes[current].remaining_time -= exec;

        for (index, other) in processes.iter_mut().enumerate() {
            if index != current && other.remaining_time > 0 {
                other.waiting_time += exec + context_switch_time;
            }
        }

        if processes[current].remaining_time > 0 {
            queue.push_back(current);
        } else {
            processes[current].turnaround_time = clock;
        }
    }

    clock
}
