use super::SortEvent;
use crate::trace::Trace;

/// Quick sort with the Lomuto partition scheme: pivot is the last element of
/// the range, a single left-to-right scan grows the `< pivot` partition, and
/// the final pivot swap is emitted unconditionally.
pub fn trace(values: &[u32]) -> Trace<SortEvent> {
    let mut a = values.to_vec();
    let mut trace = Trace::new();
    if a.len() > 1 {
        sort(&mut a, 0, values.len() - 1, &mut trace);
    }
    trace
}

fn sort(a: &mut [u32], lo: usize, hi: usize, trace: &mut Trace<SortEvent>) {
    if lo >= hi {
        return;
    }
    let p = partition(a, lo, hi, trace);
    if p > lo {
        sort(a, lo, p - 1, trace);
    }
    sort(a, p + 1, hi, trace);
}

fn partition(a: &mut [u32], lo: usize, hi: usize, trace: &mut Trace<SortEvent>) -> usize {
    let pivot = a[hi];
    let mut i = lo;
    for j in lo..hi {
        trace.push(SortEvent::Compare { i: j, j: hi });
        if a[j] < pivot {
            a.swap(i, j);
            trace.push(SortEvent::Swap { i, j });
            i += 1;
        }
    }
    a.swap(i, hi);
    trace.push(SortEvent::Swap { i, j: hi });
    i
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
    fn first_partition_compares_against_last_index() {
        let values = [3u32, 8, 2, 5, 1, 4, 7, 6];
        let trace = trace(&values);
        let first_scan: Vec<_> = trace
            .iter()
            .filter(|e| matches!(e, SortEvent::Compare { .. }))
            .take(values.len() - 1)
            .collect();
        assert!(first_scan
            .iter()
            .all(|e| matches!(e, SortEvent::Compare { j, .. } if *j == values.len() - 1)));
    }

    #[test]
    fn pivot_swap_emitted_even_when_in_place() {
        // Pivot already maximal: the scan swaps nothing, the final pivot swap
        // still lands in the trace.
        let trace = trace(&[1, 2, 3]);
        assert!(trace
            .iter()
            .any(|e| matches!(e, SortEvent::Swap { i, j } if i == j)));
    }
}
