//! Shortest-remaining-time-first execution: preemptive, tick-granular.

use crate::models::Process;

/// Runs the SRTF tick loop over all processes. Returns the final clock.
///
/// Every tick dispatches the unfinished process with the least remaining
/// time (first occurrence wins on ties) for exactly one time unit, and every
/// other unfinished process is charged `1 + context_switch_time` of waiting
/// time. The full context-switch cost is paid on every tick after the first,
/// including ticks where the same process continues — a deliberate
/// simplification of switch accounting.
pub(crate) fn run(processes: &mut [Process], context_switch_time: u64) -> u64 {
    let mut clock = 0;

    while let Some(current) = shortest_remaining(processes) {
        if clock > 0 {
            clock += context_switch_time;
        }
        clock += 1;
        processes[current].remaining_time -= 1;

        for (index, other) in processes.iter_mut().enumerate() {
            if index != current && other.remaining_time > 0 {
                other.waiting_time += 1 + context_switch_time;
            }
        }

        if processes[current].remaining_time == 0 {
            processes[current].turnaround_time = clock;
        }
    }

    clock
}

/// Index of the unfinished process with minimum remaining time, or `None`
/// when all are complete. `min_by_key` keeps the first minimum, which gives
/// the stable tie-break.
fn shortest_remaining(processes: &[Process]) -> Option<usize> {
    processes
        .iter()
        .enumerate()
        .filter(|(_, p)| p.remaining_time > 0)
        .min_by_key(|(_, p)| p.remaining_time)
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_processes(specs: &[(&str, u64)]) -> Vec<Process> {
        specs
            .iter()
            .map(|&(name, burst)| Process::new(name, burst, 0))
            .collect()
    }

    #[test]
    fn test_shortest_remaining_picks_minimum() {
        let processes = make_processes(&[("A", 5), ("B", 3), ("C", 8)]);
        assert_eq!(shortest_remaining(&processes), Some(1));
    }

    #[test]
    fn test_shortest_remaining_tie_takes_first_occurrence() {
        let processes = make_processes(&[("A", 3), ("B", 3)]);
        assert_eq!(shortest_remaining(&processes), Some(0));
    }

    #[test]
    fn test_shortest_remaining_skips_completed() {
        let mut processes = make_processes(&[("A", 3), ("B", 5)]);
        processes[0].remaining_time = 0;
        assert_eq!(shortest_remaining(&processes), Some(1));

        processes[1].remaining_time = 0;
        assert_eq!(shortest_remaining(&processes), None);
    }

    #[test]
    fn test_single_process_pays_switch_each_tick_after_first() {
        let mut processes = make_processes(&[("only", 3)]);
        let total = run(&mut processes, 2);

        // Ticks end at 1, 4, 7.
        assert_eq!(processes[0].waiting_time, 0);
        assert_eq!(processes[0].turnaround_time, 7);
        assert_eq!(total, 7);
    }

    #[test]
    fn test_three_process_workload() {
        let mut processes = make_processes(&[("A", 5), ("B", 3), ("C", 8)]);
        let total = run(&mut processes, 2);

        // B (3 ticks), then A (5 ticks), then C (8 ticks); each tick after
        // the first costs 3 units and charges the two idle processes 3 each.
        assert_eq!(processes[1].waiting_time, 0);
        assert_eq!(processes[1].turnaround_time, 7);
        assert_eq!(processes[0].waiting_time, 9);
        assert_eq!(processes[0].turnaround_time, 22);
        assert_eq!(processes[2].waiting_time, 24);
        assert_eq!(processes[2].turnaround_time, 46);
        assert_eq!(total, 46);
    }

    #[test]
    fn test_all_processes_complete() {
        let mut processes = make_processes(&[("A", 2), ("B", 2), ("C", 1)]);
        let total = run(&mut processes, 2);

        for p in &processes {
            assert!(p.is_complete());
            assert!(p.turnaround_time >= p.burst_time);
        }
        assert_eq!(total, processes.iter().map(|p| p.turnaround_time).max().unwrap());
    }
}
