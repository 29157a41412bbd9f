use std::collections::{HashMap, HashSet, VecDeque};

use super::{rebuild_path, Cell, GridSpec, SearchEvent, SearchOutcome};
use crate::trace::Trace;

/// Breadth-first search: FIFO frontier, visits cells in non-decreasing
/// distance order, shortest path in edge count on the unweighted grid.
/// Terminates the moment the goal is dequeued, not merely enqueued.
pub fn trace(grid: GridSpec, start: Cell, goal: Cell, walls: &HashSet<Cell>) -> SearchOutcome {
    let mut trace = Trace::new();
    let mut seen = HashSet::from([start]);
    let mut predecessors = HashMap::new();
    let mut queue = VecDeque::from([start]);

    while let Some(cell) = queue.pop_front() {
        trace.push(SearchEvent::Visit { cell });
        if cell == goal {
            break;
        }
        for next in grid.neighbors(cell) {
            if walls.contains(&next) || seen.contains(&next) {
                continue;
            }
            seen.insert(next);
            predecessors.insert(next, cell);
            queue.push_back(next);
        }
    }

    let path = rebuild_path(&predecessors, goal);
    SearchOutcome {
        trace,
        predecessors,
        path,
    }
}
