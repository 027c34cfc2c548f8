//! # maze_pathfinding
//!
//! Optimal shortest-path search on 4-connected occupancy grids, as used by
//! maze solvers: A* ordered by accumulated hops plus the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) to the
//! goal, which is admissible and consistent on a unit-cost 4-grid and so
//! guarantees a minimum-hop path. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
mod astar;
pub mod error;

use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::astar::astar;
use crate::error::SearchError;
use core::fmt;

fn manhattan_distance(a: &Point, b: &Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// [MazeGrid] maintains information about components using a [UnionFind]
/// structure in addition to the raw [bool] grid values in the [BoolGrid] that
/// determine whether a cell is blocked ([true]) or open ([false]). Components
/// make unreachable queries cheap, so a path search only runs when it can
/// succeed. Implements [Grid] by building on [BoolGrid].
#[derive(Clone, Debug)]
pub struct MazeGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for MazeGrid {
    fn default() -> MazeGrid {
        MazeGrid {
            grid: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl MazeGrid {
    /// Builds a grid from occupancy rows, where a nonzero value marks a
    /// blocked cell. Row index maps to `y`, column index to `x`. Components
    /// are generated before returning.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> MazeGrid {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut maze = MazeGrid::new(width, height, false);
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.as_ref().iter().enumerate() {
                maze.grid.set(x, y, value != 0);
            }
        }
        maze.generate_components();
        maze
    }

    /// The 4 orthogonal neighbours of a point in a fixed up, down, left,
    /// right order.
    fn orthogonal_neighbours(point: &Point) -> [Point; 4] {
        [
            Point::new(point.x, point.y - 1),
            Point::new(point.x, point.y + 1),
            Point::new(point.x - 1, point.y),
            Point::new(point.x + 1, point.y),
        ]
    }

    fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.grid.get(pos.x as usize, pos.y as usize)
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.grid.index_in_bounds(x as usize, y as usize)
    }

    fn ix(&self, point: &Point) -> usize {
        self.grid.get_ix(point.x as usize, point.y as usize)
    }

    /// The open orthogonal neighbours of a node, each with unit step cost.
    fn open_neighbours(&self, node: &Point) -> Vec<(Point, i32)> {
        Self::orthogonal_neighbours(node)
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .map(|p| (p, 1))
            .collect()
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.ix(point))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Out-of-bounds
    /// points belong to no component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            !self.components.equiv(self.ix(start), self.ix(goal))
        } else {
            true
        }
    }

    fn validate_endpoint(&self, point: &Point) -> Result<(), SearchError> {
        if !self.in_bounds(point.x, point.y) {
            return Err(SearchError::OutOfBounds {
                point: *point,
                width: self.width(),
                height: self.height(),
            });
        }
        if self.grid.get(point.x as usize, point.y as usize) {
            return Err(SearchError::Blocked { point: *point });
        }
        Ok(())
    }

    /// Computes a minimum-hop path from start to goal, both inclusive, using
    /// A* with the Manhattan distance as heuristic. `Ok(None)` means no
    /// sequence of open cells connects the endpoints; it is a normal outcome
    /// the caller branches on, not a failure. An out-of-bounds or blocked
    /// endpoint is rejected with a [SearchError] before any search runs.
    ///
    /// Hop-count ties between geometrically distinct paths are broken by
    /// neighbour order and frontier order, so repeated calls on the same grid
    /// return the same path.
    pub fn find_path(
        &self,
        start: Point,
        goal: Point,
    ) -> Result<Option<Vec<Point>>, SearchError> {
        self.validate_endpoint(&start)?;
        self.validate_endpoint(&goal)?;
        if start == goal {
            return Ok(Some(vec![start]));
        }
        if self.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(None);
        }
        info!("{} is reachable from {}, computing path", goal, start);
        let result = astar(
            &start,
            |node| self.open_neighbours(node),
            |point| manhattan_distance(point, &goal),
            |point| *point == goal,
        );
        Ok(result.map(|(path, _cost)| path))
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up orthogonal grid
    /// neighbours to the same components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                if self.grid.get(x, y) {
                    continue;
                }
                let parent_ix = self.grid.get_ix(x, y);
                let point = Point::new(x as i32, y as i32);
                // Unioning right and down neighbours covers every open
                // 4-adjacency exactly once.
                for neighbour in [
                    Point::new(point.x + 1, point.y),
                    Point::new(point.x, point.y + 1),
                ] {
                    if self.can_move_to(neighbour) {
                        self.components.union(parent_ix, self.ix(&neighbour));
                    }
                }
            }
        }
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.grid.height {
            let values = (0..self.grid.width)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

impl Grid<bool> for MazeGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        MazeGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        }
    }
    fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and
    /// flags the components as dirty if components are (potentially) broken
    /// apart into multiple.
    fn set(&mut self, x: usize, y: usize, blocked: bool) {
        if self.grid.get(x, y) != blocked {
            if blocked {
                self.components_dirty = true;
            } else {
                let point = Point::new(x as i32, y as i32);
                for neighbour in Self::orthogonal_neighbours(&point) {
                    if self.can_move_to(neighbour) {
                        self.components
                            .union(self.grid.get_ix(x, y), self.ix(&neighbour));
                    }
                }
            }
        }
        self.grid.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
