use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::{manhattan, rebuild_path, Cell, GridSpec, SearchEvent, SearchOutcome};
use crate::trace::Trace;

/// A*: Dijkstra with priority = accumulated cost + Manhattan distance to the
/// goal. The heuristic is admissible and consistent on the unit-cost grid, so
/// the first non-stale goal pop is optimal. Stale entries are discarded by
/// comparing the carried g-cost against the recorded best.
pub fn trace(grid: GridSpec, start: Cell, goal: Cell, walls: &HashSet<Cell>) -> SearchOutcome {
    let mut trace = Trace::new();
    let mut g_score = HashMap::from([(start, 0u32)]);
    let mut predecessors = HashMap::new();
    let mut heap = BinaryHeap::from([Reverse((manhattan(start, goal), 0u32, start))]);

    while let Some(Reverse((_, cost, cell))) = heap.pop() {
        if g_score.get(&cell) != Some(&cost) {
            continue;
        }
        trace.push(SearchEvent::Visit { cell });
        if cell == goal {
            break;
        }
        for next in grid.neighbors(cell) {
            if walls.contains(&next) {
                continue;
            }
            let next_cost = cost + 1;
            if next_cost < g_score.get(&next).copied().unwrap_or(u32::MAX) {
                g_score.insert(next, next_cost);
                predecessors.insert(next, cell);
                heap.push(Reverse((next_cost + manhattan(next, goal), next_cost, next)));
            }
        }
    }

    let path = rebuild_path(&predecessors, goal);
    SearchOutcome {
        trace,
        predecessors,
        path,
    }
}
