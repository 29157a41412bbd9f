use super::SortEvent;
use crate::trace::Trace;

/// Top-down merge sort over inclusive ranges. The merge step copies the range
/// into an auxiliary buffer and writes back in sorted order; every write-back
/// is an `Overwrite` event, so replay applies assignments rather than swaps.
pub fn trace(values: &[u32]) -> Trace<SortEvent> {
    let mut a = values.to_vec();
    let mut aux = vec![0u32; a.len()];
    let mut trace = Trace::new();
    if a.len() > 1 {
        sort(&mut a, &mut aux, 0, values.len() - 1, &mut trace);
    }
    trace
}

fn sort(a: &mut [u32], aux: &mut [u32], lo: usize, hi: usize, trace: &mut Trace<SortEvent>) {
    if lo >= hi {
        return;
    }
    let mid = (lo + hi) / 2;
    sort(a, aux, lo, mid, trace);
    sort(a, aux, mid + 1, hi, trace);
    merge(a, aux, lo, mid, hi, trace);
}

fn merge(
    a: &mut [u32],
    aux: &mut [u32],
    lo: usize,
    mid: usize,
    hi: usize,
    trace: &mut Trace<SortEvent>,
) {
    aux[lo..=hi].copy_from_slice(&a[lo..=hi]);
    let mut i = lo;
    let mut j = mid + 1;
    for k in lo..=hi {
        let value = if i > mid {
            j += 1;
            aux[j - 1]
        } else if j > hi {
            i += 1;
            aux[i - 1]
        } else if aux[j] < aux[i] {
            j += 1;
            aux[j - 1]
        } else {
            i += 1;
            aux[i - 1]
        };
        a[k] = value;
        trace.push(SortEvent::Overwrite { index: k, value });
    }
}
