use crate::step::SortStep;
use crate::trace::Trace;

use super::SortRun;

/// Bubble sort with shrinking passes and early exit.
///
/// Pass `p` compares adjacent pairs `(j, j+1)` for `j < n-1-p`; a pass that
/// performs no swap ends the sort.
pub fn bubble_sort(input: &[i64]) -> Trace<SortStep> {
    let mut run = SortRun::new(input);
    let n = run.len();

    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if run.greater(j, j + 1) {
                run.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    run.finish()
}
