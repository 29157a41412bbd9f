use super::SortEvent;
use crate::trace::Trace;

/// Insertion sort: walks each new element backward through the sorted prefix.
/// The terminating non-inversion check is silent; only swapping steps are
/// recorded.
pub fn trace(values: &[u32]) -> Trace<SortEvent> {
    let mut a = values.to_vec();
    let mut trace = Trace::new();
    for i in 1..a.len() {
        let mut j = i;
        while j > 0 && a[j - 1] > a[j] {
            trace.push(SortEvent::Compare { i: j - 1, j });
            a.swap(j - 1, j);
            trace.push(SortEvent::Swap { i: j - 1, j });
            j -= 1;
        }
    }
    trace
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
    fn sorted_input_produces_no_events() {
        assert!(trace(&[1, 2, 3, 4, 5]).is_empty());
    }

    #[test]
    fn every_compare_is_followed_by_its_swap() {
        let trace = trace(&[4, 3, 2, 1]);
        let events = trace.events();
        assert_eq!(events.len() % 2, 0);
        for pair in events.chunks(2) {
            let SortEvent::Compare { i, j } = pair[0] else {
                panic!("expected compare, got {:?}", pair[0]);
            };
            assert_eq!(pair[1], SortEvent::Swap { i, j });
        }
    }
}
