use super::SortEvent;
use crate::trace::Trace;

/// Bubble sort: after pass `i` the last `i` elements are in final position.
/// Emits exactly `n * (n - 1) / 2` compare events.
pub fn trace(values: &[u32]) -> Trace<SortEvent> {
    let mut a = values.to_vec();
    let mut trace = Trace::new();
    let n = a.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            trace.push(SortEvent::Compare { i: j, j: j + 1 });
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                trace.push(SortEvent::Swap { i: j, j: j + 1 });
            }
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
    fn compare_count_is_n_choose_2() {
        for n in [2usize, 5, 10, 17] {
            let values: Vec<u32> = (1..=n as u32).rev().collect();
            let compares = trace(&values)
                .iter()
                .filter(|e| matches!(e, SortEvent::Compare { .. }))
                .count();
            assert_eq!(compares, n * (n - 1) / 2);
        }
    }

    #[test]
    fn worked_example() {
        let trace = trace(&[3, 1, 2]);
        let expected = [
            SortEvent::Compare { i: 0, j: 1 },
            SortEvent::Swap { i: 0, j: 1 },
            SortEvent::Compare { i: 1, j: 2 },
            SortEvent::Swap { i: 1, j: 2 },
            SortEvent::Compare { i: 0, j: 1 },
        ];
        assert_eq!(trace.events(), expected);
    }
}
