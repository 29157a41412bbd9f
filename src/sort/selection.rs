use super::SortEvent;
use crate::trace::Trace;

/// Selection sort: scans for the running minimum of the unsorted suffix and
/// emits at most one swap per outer index. Each compare pairs the current
/// minimum with the scan position. Exactly `n * (n - 1) / 2` compare events.
pub fn trace(values: &[u32]) -> Trace<SortEvent> {
    let mut a = values.to_vec();
    let mut trace = Trace::new();
    let n = a.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            trace.push(SortEvent::Compare { i: min_idx, j });
            if a[j] < a[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            a.swap(i, min_idx);
            trace.push(SortEvent::Swap { i, j: min_idx });
        }
    }
    trace
}
