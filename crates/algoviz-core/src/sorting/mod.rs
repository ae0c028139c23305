//! Comparison-sort trace generators.
//!
//! Each generator copies its input into a working array, runs the reference
//! algorithm on it, and records a [`SortStep`] after every comparison and every
//! mutation. All of them finish with one `markSorted` per index followed by a
//! single `done` carrying the sorted array.
//!
//! The emission order is part of the contract (tests pin it):
//! - bubble: shrinking passes, early exit after a pass without swaps
//! - insertion: held key, compare/shift leftwards, then insert
//! - selection: scan for the minimum, swap it into place
//! - merge: top-down, divide before recursing, ties take the left run
//! - quick: Lomuto partition around the last element
//! - heap: bottom-up max-heap build, then repeated max extraction

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;

use crate::step::{SortEvent, SortStep};
use crate::trace::{Recorder, Trace};

/// Working array plus the recorder, shared by all sort generators.
pub(crate) struct SortRun {
    array: Vec<i64>,
    rec: Recorder<SortStep>,
}

impl SortRun {
    pub(crate) fn new(input: &[i64]) -> Self {
        SortRun {
            array: input.to_vec(),
            rec: Recorder::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.array.len()
    }

    pub(crate) fn at(&self, index: usize) -> i64 {
        self.array[index]
    }

    /// Records `event` with a copy of the current array.
    pub(crate) fn emit(&mut self, event: SortEvent) {
        self.rec.push(SortStep {
            event,
            array: self.array.clone(),
        });
    }

    /// Records a comparison and returns `array[left] > array[right]`.
    pub(crate) fn greater(&mut self, left: usize, right: usize) -> bool {
        let values = [self.array[left], self.array[right]];
        self.emit(SortEvent::Compare {
            left,
            right,
            values,
        });
        values[0] > values[1]
    }

    /// Swaps two slots and records it. Self-swaps change nothing and are skipped.
    pub(crate) fn swap(&mut self, left: usize, right: usize) {
        if left == right {
            return;
        }
        self.array.swap(left, right);
        self.emit(SortEvent::Swap { left, right });
    }

    /// Overwrites one slot without recording; the caller records the event.
    pub(crate) fn write(&mut self, index: usize, value: i64) {
        self.array[index] = value;
    }

    pub(crate) fn slice(&self, from: usize, to_inclusive: usize) -> Vec<i64> {
        self.array[from..=to_inclusive].to_vec()
    }

    /// Emits `markSorted` for every index, then `done`.
    pub(crate) fn finish(mut self) -> Trace<SortStep> {
        for index in 0..self.array.len() {
            self.emit(SortEvent::MarkSorted { index });
        }
        self.emit(SortEvent::Done);
        self.rec.finish()
    }
}
