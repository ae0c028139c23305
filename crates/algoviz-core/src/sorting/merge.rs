use crate::step::{SortEvent, SortStep};
use crate::trace::Trace;

use super::SortRun;

/// Top-down merge sort over inclusive ranges.
///
/// A range is divided (`divide`) and both halves fully sorted before they are
/// merged. During a merge each head comparison is a `compare` between the
/// original slots of the two heads; ties take the left run, which keeps the
/// sort stable. Every written slot is a `mergeMove`.
pub fn merge_sort(input: &[i64]) -> Trace<SortStep> {
    let mut run = SortRun::new(input);
    if run.len() > 1 {
        let last = run.len() - 1;
        sort_range(&mut run, 0, last);
    }
    run.finish()
}

fn sort_range(run: &mut SortRun, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    run.emit(SortEvent::Divide { left, mid, right });
    sort_range(run, left, mid);
    sort_range(run, mid + 1, right);
    merge(run, left, mid, right);
}

fn merge(run: &mut SortRun, left: usize, mid: usize, right: usize) {
    run.emit(SortEvent::MergeStart { left, mid, right });

    let lhs = run.slice(left, mid);
    let rhs = run.slice(mid + 1, right);
    let (mut i, mut j, mut k) = (0, 0, left);

    while i < lhs.len() && j < rhs.len() {
        run.emit(SortEvent::Compare {
            left: left + i,
            right: mid + 1 + j,
            values: [lhs[i], rhs[j]],
        });
        let value = if lhs[i] <= rhs[j] {
            i += 1;
            lhs[i - 1]
        } else {
            j += 1;
            rhs[j - 1]
        };
        place(run, k, value);
        k += 1;
    }
    for &value in lhs[i..].iter().chain(rhs[j..].iter()) {
        place(run, k, value);
        k += 1;
    }

    run.emit(SortEvent::MergeComplete { left, right });
}

fn place(run: &mut SortRun, index: usize, value: i64) {
    run.write(index, value);
    run.emit(SortEvent::MergeMove { index, value });
}
