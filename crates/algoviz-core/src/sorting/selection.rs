use crate::step::{SortEvent, SortStep};
use crate::trace::Trace;

use super::SortRun;

/// Selection sort.
///
/// For each position `i`, `select(i)` marks the initial candidate, every scan
/// position `j` is compared against the candidate, and each new minimum is
/// selected. The minimum is swapped into `i` unless it already is there.
pub fn selection_sort(input: &[i64]) -> Trace<SortStep> {
    let mut run = SortRun::new(input);
    let n = run.len();

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        run.emit(SortEvent::Select { index: i });
        for j in i + 1..n {
            if run.greater(min, j) {
                min = j;
                run.emit(SortEvent::Select { index: j });
            }
        }
        run.swap(i, min);
    }

    run.finish()
}
