use crate::step::{SortEvent, SortStep};
use crate::trace::Trace;

use super::SortRun;

/// Insertion sort.
///
/// For each `i`, the key `array[i]` is held aside. While the element left of
/// the gap is greater, it is compared against the key (`compare(j, gap)`, with
/// the key in `values[1]` since slot `gap` holds a shifted copy) and shifted
/// right (`shift(j, gap)`); the key is then dropped into the gap (`insert`).
pub fn insertion_sort(input: &[i64]) -> Trace<SortStep> {
    let mut run = SortRun::new(input);

    for i in 1..run.len() {
        let key = run.at(i);
        let mut gap = i;
        while gap > 0 {
            let j = gap - 1;
            let moved = run.at(j);
            run.emit(SortEvent::Compare {
                left: j,
                right: gap,
                values: [moved, key],
            });
            if moved <= key {
                break;
            }
            run.write(gap, moved);
            run.emit(SortEvent::Shift { from: j, to: gap });
            gap = j;
        }
        if gap != i {
            run.write(gap, key);
            run.emit(SortEvent::Insert {
                index: gap,
                value: key,
            });
        }
    }

    run.finish()
}
