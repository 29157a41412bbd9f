use serde::{Deserialize, Serialize};

/// An ordered, finite record of every state-changing decision one algorithm
/// run made. Produced in full before playback starts and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace<E> {
    events: Vec<E>,
}

impl<E> Default for Trace<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E> Trace<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: E) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&E> {
        self.events.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.events.iter()
    }

    pub fn events(&self) -> &[E] {
        &self.events
    }
}

impl<E> From<Vec<E>> for Trace<E> {
    fn from(events: Vec<E>) -> Self {
        Self { events }
    }
}

impl<'a, E> IntoIterator for &'a Trace<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// The mutable visual state obtained by folding a trace prefix over the
/// initial input snapshot. Applying every event of a trace in order must
/// reproduce the algorithm's final result exactly.
pub trait Projection {
    type Event;

    fn apply(&mut self, event: &Self::Event);
}
