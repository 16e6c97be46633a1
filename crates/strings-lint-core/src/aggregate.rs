//! Fan-out/fan-in helpers for the evaluation phase.
//!
//! Checks run on the rayon pool over buffers that are no longer being
//! written to. Results are merged without a shared lock: each worker builds
//! its own partial list and rayon concatenates them. No ordering is promised.

use crate::types::Violation;
use rayon::prelude::*;

/// Runs `check` over every item concurrently and collects the violations.
///
/// Each item is checked independently; `check` returns `None` when the item
/// is clean.
pub fn check_each<T, F>(items: &[T], check: F) -> Vec<Violation>
where
    T: Sync,
    F: Fn(&T) -> Option<Violation> + Sync + Send,
{
    items.par_iter().filter_map(check).collect()
}

/// Runs two violation producers concurrently and merges their output.
///
/// Returns once both have finished.
pub fn join_all<A, B>(first: A, second: B) -> Vec<Violation>
where
    A: FnOnce() -> Vec<Violation> + Send,
    B: FnOnce() -> Vec<Violation> + Send,
{
    let (mut left, right) = rayon::join(first, second);
    left.extend(right);
    left
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, Severity};
    use std::collections::HashSet;

    fn violation(line: usize) -> Violation {
        Violation::new(
            "test_rule",
            "TestRule",
            Severity::Warning,
            Location::new("a.strings", line, 1),
            format!("line {line}"),
        )
    }

    #[test]
    fn check_each_keeps_only_failures() {
        let lines: Vec<usize> = (1..=1000).collect();
        let found = check_each(&lines, |line| (line % 10 == 0).then(|| violation(*line)));
        assert_eq!(found.len(), 100);

        let unique: HashSet<usize> = found.iter().map(|v| v.location.line).collect();
        assert_eq!(unique.len(), 100);
        assert!(unique.iter().all(|line| line % 10 == 0));
    }

    #[test]
    fn check_each_on_empty_input() {
        let empty: Vec<usize> = Vec::new();
        assert!(check_each(&empty, |line| Some(violation(*line))).is_empty());
    }

    #[test]
    fn join_all_merges_both_sides() {
        let merged = join_all(|| vec![violation(1), violation(2)], || vec![violation(3)]);
        let lines: HashSet<usize> = merged.iter().map(|v| v.location.line).collect();
        assert_eq!(lines, HashSet::from([1, 2, 3]));
    }
}
