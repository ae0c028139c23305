use crate::step::{SearchEvent, SearchStep};
use crate::trace::{Recorder, Trace};

/// Linear search from the left.
///
/// Each index is inspected with `check`, then marked `found` (ending the scan)
/// or `notFound`.
pub fn linear_search(input: &[i64], target: i64) -> Trace<SearchStep> {
    let mut rec = Recorder::new();
    let step = |event| SearchStep {
        event,
        array: input.to_vec(),
        range: None,
    };

    let mut found = None;
    for (index, &value) in input.iter().enumerate() {
        rec.push(step(SearchEvent::Check { index, value }));
        if value == target {
            rec.push(step(SearchEvent::Found { index }));
            found = Some(index);
            break;
        }
        rec.push(step(SearchEvent::NotFound { index }));
    }
    rec.push(step(SearchEvent::Done { found }));

    rec.finish()
}
