mod astar;
mod bfs;
mod dfs;
mod dijkstra;

pub use astar::trace as astar_trace;
pub use bfs::trace as bfs_trace;
pub use dfs::trace as dfs_trace;
pub use dijkstra::trace as dijkstra_trace;

use std::collections::{HashMap, HashSet};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::trace::{Projection, Trace};

/// Probability with which the random maze turns a cell into a wall.
pub const MAZE_WALL_PROBABILITY: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A fixed-size square 4-connected grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub size: usize,
}

impl GridSpec {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// In-bounds neighbors in the shared expansion order: down, up, right,
    /// left. Wall rejection is up to the caller.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        const OFFSETS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = cell.row as i64 + dr;
                let col = cell.col as i64 + dc;
                if row < 0 || col < 0 {
                    return None;
                }
                let next = Cell::new(row as usize, col as usize);
                self.contains(next).then_some(next)
            })
            .collect()
    }
}

/// Grid distance used as the A* heuristic; admissible and consistent on a
/// unit-cost 4-connected grid.
pub fn manhattan(a: Cell, b: Cell) -> u32 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as u32
}

/// Marks each non-start, non-goal cell as a wall independently with
/// [`MAZE_WALL_PROBABILITY`].
pub fn random_maze(grid: GridSpec, start: Cell, goal: Cell, rng: &mut impl Rng) -> HashSet<Cell> {
    let mut walls = HashSet::new();
    for row in 0..grid.size {
        for col in 0..grid.size {
            let cell = Cell::new(row, col);
            if cell != start && cell != goal && rng.random_bool(MAZE_WALL_PROBABILITY) {
                walls.insert(cell);
            }
        }
    }
    walls
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchEvent {
    Visit { cell: Cell },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 4] = [
        SearchAlgorithm::Bfs,
        SearchAlgorithm::Dfs,
        SearchAlgorithm::Dijkstra,
        SearchAlgorithm::AStar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SearchAlgorithm::Bfs => "BFS",
            SearchAlgorithm::Dfs => "DFS",
            SearchAlgorithm::Dijkstra => "Dijkstra",
            SearchAlgorithm::AStar => "A*",
        }
    }

    pub fn trace(
        &self,
        grid: GridSpec,
        start: Cell,
        goal: Cell,
        walls: &HashSet<Cell>,
    ) -> SearchOutcome {
        match self {
            SearchAlgorithm::Bfs => bfs::trace(grid, start, goal, walls),
            SearchAlgorithm::Dfs => dfs::trace(grid, start, goal, walls),
            SearchAlgorithm::Dijkstra => dijkstra::trace(grid, start, goal, walls),
            SearchAlgorithm::AStar => astar::trace(grid, start, goal, walls),
        }
    }
}

/// Result of one search producer invocation. `path` runs goal to start,
/// start excluded; empty when the goal is unreachable. Unreachable goals are
/// a normal outcome, not a failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub trace: Trace<SearchEvent>,
    pub predecessors: HashMap<Cell, Cell>,
    pub path: Vec<Cell>,
}

/// Walks the predecessor map from `goal` back toward the start. Predecessors
/// are recorded first-writer-wins at enqueue time, so the walk is acyclic.
pub fn rebuild_path(predecessors: &HashMap<Cell, Cell>, goal: Cell) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut current = goal;
    while let Some(&prev) = predecessors.get(&current) {
        path.push(current);
        current = prev;
    }
    path
}

/// Visited-set growth replayed from visit events, plus the most recently
/// visited cell for highlighting.
#[derive(Debug, Clone, Default)]
pub struct SearchProjection {
    visited: HashSet<Cell>,
    last: Option<Cell>,
}

impl SearchProjection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> &HashSet<Cell> {
        &self.visited
    }

    pub fn last_visited(&self) -> Option<Cell> {
        self.last
    }
}

impl Projection for SearchProjection {
    type Event = SearchEvent;

    fn apply(&mut self, event: &SearchEvent) {
        let SearchEvent::Visit { cell } = *event;
        self.visited.insert(cell);
        self.last = Some(cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_order_is_down_up_right_left() {
        let grid = GridSpec::new(3);
        assert_eq!(
            grid.neighbors(Cell::new(1, 1)),
            vec![
                Cell::new(2, 1),
                Cell::new(0, 1),
                Cell::new(1, 2),
                Cell::new(1, 0),
            ]
        );
    }

    #[test]
    fn corner_cells_lose_out_of_bounds_neighbors() {
        let grid = GridSpec::new(3);
        assert_eq!(
            grid.neighbors(Cell::new(0, 0)),
            vec![Cell::new(1, 0), Cell::new(0, 1)]
        );
        assert_eq!(
            grid.neighbors(Cell::new(2, 2)),
            vec![Cell::new(1, 2), Cell::new(2, 1)]
        );
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Cell::new(0, 0), Cell::new(4, 4)), 8);
        assert_eq!(manhattan(Cell::new(3, 1), Cell::new(1, 2)), 3);
    }

    #[test]
    fn maze_never_covers_start_or_goal() {
        let grid = GridSpec::new(8);
        let start = Cell::new(0, 0);
        let goal = Cell::new(7, 7);
        let mut rng = rand::rng();
        for _ in 0..10 {
            let walls = random_maze(grid, start, goal, &mut rng);
            assert!(!walls.contains(&start));
            assert!(!walls.contains(&goal));
            assert!(walls.iter().all(|c| grid.contains(*c)));
        }
    }

    #[test]
    fn rebuild_path_on_unreachable_goal_is_empty() {
        let predecessors = HashMap::new();
        assert!(rebuild_path(&predecessors, Cell::new(3, 3)).is_empty());
    }

    #[test]
    fn visit_event_contract() {
        let event = SearchEvent::Visit {
            cell: Cell::new(2, 5),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"Visit":{"cell":{"row":2,"col":5}}}"#);

        let event: SearchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(
            event,
            SearchEvent::Visit {
                cell: Cell::new(2, 5)
            }
        );
    }
}
