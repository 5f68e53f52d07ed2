//! Property tests for both scheduling algorithms.

use proptest::prelude::*;

use u_cpusim::models::{Process, ProcessState};
use u_cpusim::report::RecordingReporter;
use u_cpusim::scheduler::{Algorithm, RunSummary, Scheduler};

fn process_table() -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((1u32..=10, 1i32..=50), 0..8).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (required, priority))| {
                Process::new(i as u32 + 1, required).with_priority(priority)
            })
            .collect()
    })
}

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::priority()),
        (0u32..20).prop_map(Algorithm::round_robin),
    ]
}

fn simulate(algorithm: Algorithm, processes: &mut [Process]) -> (RunSummary, RecordingReporter) {
    let mut reporter = RecordingReporter::new();
    let summary = Scheduler::new(algorithm)
        .run(processes, &mut reporter)
        .expect("generated tables are valid");
    (summary, reporter)
}

proptest! {
    #[test]
    fn terminates_after_total_required_time(initial in process_table(), alg in algorithm()) {
        let mut processes = initial.clone();
        let (summary, reporter) = simulate(alg, &mut processes);

        let total: u64 = initial.iter().map(|p| u64::from(p.required_time)).sum();
        prop_assert_eq!(summary.total_slices, total);
        prop_assert_eq!(reporter.slices().count() as u64, total);
        prop_assert!(processes.iter().all(|p| p.is_finished() && p.required_time == 0));
    }

    #[test]
    fn cpu_time_equals_initial_required_time(initial in process_table(), alg in algorithm()) {
        let mut processes = initial.clone();
        simulate(alg, &mut processes);

        for (before, after) in initial.iter().zip(&processes) {
            prop_assert_eq!(after.id, before.id);
            prop_assert_eq!(after.cpu_time, before.required_time);
        }
    }

    #[test]
    fn at_most_one_running(initial in process_table(), alg in algorithm()) {
        let mut processes = initial;
        let (_, reporter) = simulate(alg, &mut processes);

        for snapshot in &reporter.snapshots {
            let running = snapshot.count_in_state(ProcessState::Running);
            match snapshot.running {
                Some(pid) => {
                    prop_assert_eq!(running, 1);
                    prop_assert_eq!(snapshot.process(pid).map(|p| p.state), Some(ProcessState::Running));
                }
                None => prop_assert_eq!(running, 0),
            }
        }
    }

    #[test]
    fn finished_processes_stay_finished(initial in process_table(), alg in algorithm()) {
        let mut processes = initial;
        let (_, reporter) = simulate(alg, &mut processes);

        let mut finished = std::collections::HashSet::new();
        for snapshot in &reporter.snapshots {
            for p in &snapshot.processes {
                if finished.contains(&p.id) {
                    prop_assert_eq!(p.state, ProcessState::Finished);
                }
                if p.is_finished() {
                    finished.insert(p.id);
                }
            }
        }
    }

    #[test]
    fn round_robin_slices_differ_by_at_most_one(initial in process_table(), quantum in 0u32..20) {
        let mut processes = initial;
        let (_, reporter) = simulate(Algorithm::round_robin(quantum), &mut processes);

        for snapshot in reporter.slices() {
            let unfinished: Vec<u32> = snapshot
                .processes
                .iter()
                .filter(|p| !p.is_finished())
                .map(|p| p.cpu_time)
                .collect();
            if let (Some(min), Some(max)) = (unfinished.iter().min(), unfinished.iter().max()) {
                prop_assert!(max - min <= 1);
            }
        }
    }

    #[test]
    fn priority_runs_are_reproducible(initial in process_table()) {
        let mut a = initial.clone();
        let mut b = initial;
        let (sa, _) = simulate(Algorithm::priority(), &mut a);
        let (sb, _) = simulate(Algorithm::priority(), &mut b);
        prop_assert_eq!(sa.selection_order, sb.selection_order);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn priority_selects_the_highest_unfinished(initial in process_table()) {
        let mut processes = initial;
        let (_, reporter) = simulate(Algorithm::priority(), &mut processes);

        for snapshot in reporter.slices() {
            let pid = snapshot.running.unwrap();
            let chosen = snapshot.process(pid).unwrap();
            // No unfinished process has a higher priority, and ties go to the earlier one
            for p in snapshot.processes.iter().filter(|p| !p.is_finished()) {
                prop_assert!(p.priority <= chosen.priority);
                if p.priority == chosen.priority {
                    prop_assert!(p.id >= chosen.id);
                }
            }
        }
    }
}

#[test]
fn scenario_priority_then_round_robin_share_total_work() {
    let table = || {
        vec![
            Process::new(1, 2).with_priority(10),
            Process::new(2, 1).with_priority(5),
        ]
    };

    let mut by_priority = table();
    let mut by_rotation = table();
    let (p, _) = simulate(Algorithm::priority(), &mut by_priority);
    let (r, _) = simulate(Algorithm::round_robin(3), &mut by_rotation);

    assert_eq!(p.selection_order, vec![1, 1, 2]);
    assert_eq!(r.selection_order, vec![1, 2, 1]);
    assert_eq!(p.total_slices, r.total_slices);
    for (a, b) in by_priority.iter().zip(&by_rotation) {
        assert_eq!(a.cpu_time, b.cpu_time);
    }
}
