use super::SortEvent;
use crate::trace::Trace;

/// Heap sort: builds a max-heap with bottom-up sift-down, then repeatedly
/// swaps the root with the last unsorted element and restores the reduced
/// heap. Each swap is one event, preceded by the compare that chose it.
pub fn trace(values: &[u32]) -> Trace<SortEvent> {
    let mut a = values.to_vec();
    let mut trace = Trace::new();
    let n = a.len();
    for i in (0..n / 2).rev() {
        sift_down(&mut a, i, n, &mut trace);
    }
    for end in (1..n).rev() {
        trace.push(SortEvent::Compare { i: 0, j: end });
        a.swap(0, end);
        trace.push(SortEvent::Swap { i: 0, j: end });
        sift_down(&mut a, 0, end, &mut trace);
    }
    trace
}

/// Compares node `i` against both children and recurses into the subtree the
/// swap disturbed.
fn sift_down(a: &mut [u32], i: usize, size: usize, trace: &mut Trace<SortEvent>) {
    let mut largest = i;
    let l = 2 * i + 1;
    let r = 2 * i + 2;
    if l < size && a[l] > a[largest] {
        largest = l;
    }
    if r < size && a[r] > a[largest] {
        largest = r;
    }
    if largest != i {
        trace.push(SortEvent::Compare { i, j: largest });
        a.swap(i, largest);
        trace.push(SortEvent::Swap { i, j: largest });
        sift_down(a, largest, size, trace);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::assert_sorts;
    use super::*;

    #[test]
    fn sorts_and_replays_deterministically() {
        assert_sorts(trace);
    }

    #[test]
    fn swaps_come_in_compare_swap_pairs() {
        let trace = trace(&[5, 1, 4, 2, 3]);
        let events = trace.events();
        let mut idx = 0;
        while idx < events.len() {
            assert!(matches!(events[idx], SortEvent::Compare { .. }));
            assert!(matches!(events[idx + 1], SortEvent::Swap { .. }));
            idx += 2;
        }
    }

    #[test]
    fn single_element_produces_no_events() {
        assert!(trace(&[42]).is_empty());
        assert!(trace(&[]).is_empty());
    }
}
