use crate::step::{SortEvent, SortStep};
use crate::trace::Trace;

use super::SortRun;

/// Quick sort with Lomuto partitioning around the last element.
///
/// Each partition emits `pivot`, then compares every element of the range
/// against the pivot slot; elements `<=` the pivot are swapped into the left
/// region. The pivot is finally swapped into its resting place, and the left
/// side is sorted before the right.
pub fn quick_sort(input: &[i64]) -> Trace<SortStep> {
    let mut run = SortRun::new(input);
    if run.len() > 1 {
        let last = run.len() - 1;
        sort_range(&mut run, 0, last);
    }
    run.finish()
}

fn sort_range(run: &mut SortRun, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let p = partition(run, low, high);
    if p > low {
        sort_range(run, low, p - 1);
    }
    sort_range(run, p + 1, high);
}

fn partition(run: &mut SortRun, low: usize, high: usize) -> usize {
    let pivot = run.at(high);
    run.emit(SortEvent::Pivot {
        index: high,
        value: pivot,
    });

    let mut boundary = low;
    for j in low..high {
        if !run.greater(j, high) {
            run.swap(boundary, j);
            boundary += 1;
        }
    }
    run.swap(boundary, high);
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::test_support::*;

    #[test]
    fn lomuto_partition_order() {
        let trace = quick_sort(&[3, 1, 2]);
        // Pivot 2: 3 > 2 stays, 1 <= 2 swaps into slot 0, pivot lands at 1.
        assert_eq!(
            kinds(&trace)[..5].to_vec(),
            vec!["pivot", "compare", "compare", "swap", "swap"]
        );
        assert_eq!(trace[0].event, SortEvent::Pivot { index: 2, value: 2 });
        assert_eq!(trace[3].array, vec![1, 3, 2]);
        assert_eq!(trace[4].array, vec![1, 2, 3]);
        assert_eq!(final_array(&trace), vec![1, 2, 3]);
    }

    #[test]
    fn sorted_input_is_quadratic_and_swap_free() {
        let trace = quick_sort(&[1, 2, 3, 4]);
        assert_eq!(trace.count("compare"), 6);
        assert_eq!(trace.count("swap"), 0);
        assert_eq!(trace.count("pivot"), 3);
        assert_sorted_tail(&trace, 4);
    }

    #[test]
    fn duplicates() {
        let trace = quick_sort(&[2, 2, 1, 2]);
        assert_eq!(final_array(&trace), vec![1, 2, 2, 2]);
    }
}
