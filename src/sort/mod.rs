mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use bubble::trace as bubble_trace;
pub use heap::trace as heap_trace;
pub use insertion::trace as insertion_trace;
pub use merge::trace as merge_trace;
pub use quick::trace as quick_trace;
pub use selection::trace as selection_trace;

use serde::{Deserialize, Serialize};

use crate::trace::{Projection, Trace};

/// One recorded decision of a sort run. `Compare` only drives the highlight;
/// `Swap` and `Overwrite` are the state changes a replay applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortEvent {
    Compare { i: usize, j: usize },
    Swap { i: usize, j: usize },
    /// Assignment from merge sort's auxiliary buffer; the only producer that
    /// mutates by copy-back instead of pairwise swap.
    Overwrite { index: usize, value: u32 },
}

impl SortEvent {
    /// Indices to highlight while this event is the most recent one.
    pub fn operands(&self) -> Vec<usize> {
        match *self {
            SortEvent::Compare { i, j } | SortEvent::Swap { i, j } => vec![i, j],
            SortEvent::Overwrite { index, .. } => vec![index],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Heap => "Heap Sort",
        }
    }

    /// Runs the algorithm to completion against a snapshot of `values` and
    /// returns the full event trace.
    pub fn trace(&self, values: &[u32]) -> Trace<SortEvent> {
        match self {
            SortAlgorithm::Bubble => bubble::trace(values),
            SortAlgorithm::Insertion => insertion::trace(values),
            SortAlgorithm::Selection => selection::trace(values),
            SortAlgorithm::Merge => merge::trace(values),
            SortAlgorithm::Quick => quick::trace(values),
            SortAlgorithm::Heap => heap::trace(values),
        }
    }
}

/// Current bar values plus the operand indices of the most recent event.
#[derive(Debug, Clone, Default)]
pub struct SortProjection {
    values: Vec<u32>,
    active: Vec<usize>,
}

impl SortProjection {
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            active: Vec::new(),
        }
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn active(&self) -> &[usize] {
        &self.active
    }
}

impl Projection for SortProjection {
    type Event = SortEvent;

    fn apply(&mut self, event: &SortEvent) {
        match *event {
            SortEvent::Compare { .. } => {}
            SortEvent::Swap { i, j } => self.values.swap(i, j),
            SortEvent::Overwrite { index, value } => self.values[index] = value,
        }
        self.active = event.operands();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{SortEvent, SortProjection};
    use crate::trace::{Projection, Trace};

    /// Folds the whole trace over `values` and returns the final array.
    pub fn replay(values: &[u32], trace: &Trace<SortEvent>) -> Vec<u32> {
        let mut p = SortProjection::new(values.to_vec());
        for event in trace {
            p.apply(event);
        }
        p.values().to_vec()
    }

    pub fn assert_sorts(trace_fn: fn(&[u32]) -> Trace<SortEvent>) {
        let cases: [&[u32]; 6] = [
            &[],
            &[1],
            &[2, 1],
            &[3, 1, 2],
            &[5, 4, 3, 2, 1],
            &[7, 3, 9, 1, 8, 2, 6, 4, 10, 5],
        ];
        for values in cases {
            let trace = trace_fn(values);
            let replayed = replay(values, &trace);

            let mut expected = values.to_vec();
            expected.sort_unstable();
            assert_eq!(replayed, expected, "replay of {values:?}");

            // Same trace twice: replay determinism.
            assert_eq!(trace, trace_fn(values));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_applies_swaps_and_overwrites() {
        let mut p = SortProjection::new(vec![3, 1, 2]);
        p.apply(&SortEvent::Compare { i: 0, j: 1 });
        assert_eq!(p.values(), &[3, 1, 2]);
        assert_eq!(p.active(), &[0, 1]);

        p.apply(&SortEvent::Swap { i: 0, j: 1 });
        assert_eq!(p.values(), &[1, 3, 2]);

        p.apply(&SortEvent::Overwrite { index: 2, value: 9 });
        assert_eq!(p.values(), &[1, 3, 9]);
        assert_eq!(p.active(), &[2]);
    }

    #[test]
    fn event_contract() {
        let event = SortEvent::Swap { i: 1, j: 2 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"Swap":{"i":1,"j":2}}"#);

        let event: SortEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, SortEvent::Swap { i: 1, j: 2 });
    }
}
