use crate::step::{SortEvent, SortStep};
use crate::trace::Trace;

use super::SortRun;

/// Heap sort.
///
/// Builds a max-heap bottom-up by sifting down every internal node from the
/// last one to the root, records `buildHeap`, then repeatedly swaps the root
/// with the heap's last slot (`extractMax`) and sifts the new root down.
pub fn heap_sort(input: &[i64]) -> Trace<SortStep> {
    let mut run = SortRun::new(input);
    let n = run.len();

    for i in (0..n / 2).rev() {
        sift_down(&mut run, i, n);
    }
    if n > 0 {
        run.emit(SortEvent::BuildHeap);
    }

    for end in (1..n).rev() {
        run.write_swap_root(end);
        sift_down(&mut run, 0, end);
    }

    run.finish()
}

fn sift_down(run: &mut SortRun, mut root: usize, size: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;
        if left < size && run.greater(left, largest) {
            largest = left;
        }
        if right < size && run.greater(right, largest) {
            largest = right;
        }
        if largest == root {
            return;
        }
        run.swap(root, largest);
        root = largest;
    }
}

impl SortRun {
    /// Moves the heap maximum to `end` and records it as `extractMax`.
    fn write_swap_root(&mut self, end: usize) {
        let root = self.at(0);
        let tail = self.at(end);
        self.write(0, tail);
        self.write(end, root);
        self.emit(SortEvent::ExtractMax { index: end });
    }
}
