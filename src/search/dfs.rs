use std::collections::{HashMap, HashSet};

use super::{rebuild_path, Cell, GridSpec, SearchEvent, SearchOutcome};
use crate::trace::Trace;

/// Depth-first search: LIFO frontier, no shortest-path guarantee. Terminates
/// the moment the goal is popped.
pub fn trace(grid: GridSpec, start: Cell, goal: Cell, walls: &HashSet<Cell>) -> SearchOutcome {
    let mut trace = Trace::new();
    let mut seen = HashSet::from([start]);
    let mut predecessors = HashMap::new();
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
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
            stack.push(next);
        }
    }

    let path = rebuild_path(&predecessors, goal);
    SearchOutcome {
        trace,
        predecessors,
        path,
    }
}
