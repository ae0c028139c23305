use crate::error::CoreError;
use crate::step::{SearchEvent, SearchRange, SearchStep};
use crate::trace::{Recorder, Trace};

/// Binary search over an ascending array.
///
/// Each round inspects `mid = low + (high - low) / 2` with `check`, then either
/// reports `found`, or narrows the window with `moveRight` (`low = mid + 1`)
/// or `moveLeft` (`high = mid - 1`). Every step carries the window as it stands
/// after the step.
///
/// Ascending order is the caller's responsibility (see [`check_ascending`]).
/// On unsorted input the trace is still well-formed and any `found` step still
/// points at an element equal to the target, but a present target may be missed.
pub fn binary_search(input: &[i64], target: i64) -> Trace<SearchStep> {
    let mut rec = Recorder::new();
    let step = |event, low: usize, high: isize| SearchStep {
        event,
        array: input.to_vec(),
        range: Some(SearchRange { low, high }),
    };

    let mut low = 0usize;
    let mut high = input.len() as isize - 1;
    let mut found = None;

    while (low as isize) <= high {
        let mid = low + (high as usize - low) / 2;
        let value = input[mid];
        rec.push(step(SearchEvent::Check { index: mid, value }, low, high));

        if value == target {
            rec.push(step(SearchEvent::Found { index: mid }, low, high));
            found = Some(mid);
            break;
        }
        if value < target {
            low = mid + 1;
            rec.push(step(SearchEvent::MoveRight { low, high }, low, high));
        } else {
            high = mid as isize - 1;
            rec.push(step(SearchEvent::MoveLeft { low, high }, low, high));
        }
    }
    rec.push(step(SearchEvent::Done { found }, low, high));

    rec.finish()
}

/// Verifies `input` is ascending, reporting the first out-of-order index.
pub fn check_ascending(input: &[i64]) -> Result<(), CoreError> {
    match input.windows(2).position(|w| w[0] > w[1]) {
        Some(i) => Err(CoreError::UnsortedInput { index: i + 1 }),
        None => Ok(()),
    }
}
