use crate::neighbors::{MooreNeighborhood, Neighborhood};
use crate::{Cost, Error, Grid, Point, Result};

use std::sync::Arc;

/// A finished Path across the Grid.
///
/// The Points are stored as `(row, col)` and run from the start to the goal.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    path: Arc<[Point]>,
    cost: Cost,
    step_cost: Cost,
    total_time: f64,
}

impl Path {
    /// Creates a Path from its parts.
    pub fn new(path: Vec<Point>, cost: Cost, step_cost: Cost, total_time: f64) -> Path {
        Path {
            path: path.into(),
            cost,
            step_cost,
            total_time,
        }
    }

    /// Follows the parent links from `goal` back to the first Node without a parent.
    ///
    /// Each step adds `step_cost / speed` to the total time, where `speed` belongs to the
    /// Tile the step leaves when walking backwards (the later Tile of the step).
    ///
    /// ## Errors
    /// - [`Error::OutOfBounds`] if `goal` or a parent is not on the Grid
    /// - [`Error::NoPathExists`] if `goal` was never reached by a search
    pub fn reconstruct(grid: &Grid, goal: Point) -> Result<Path> {
        let neighborhood = MooreNeighborhood::new(grid.rows(), grid.cols());
        Path::reconstruct_with(grid, &neighborhood, goal)
    }

    /// [`reconstruct`](Path::reconstruct) with a custom Neighborhood for the step costs.
    pub fn reconstruct_with<N: Neighborhood>(
        grid: &Grid,
        neighborhood: &N,
        goal: Point,
    ) -> Result<Path> {
        let out_of_bounds = |(row, col): Point| Error::OutOfBounds {
            row: row as isize,
            col: col as isize,
            rows: grid.rows(),
            cols: grid.cols(),
        };

        let goal_node = grid.get(goal).ok_or_else(|| out_of_bounds(goal))?;
        if goal_node.is_unvisited() {
            return Err(Error::NoPathExists { start: goal, goal });
        }
        let cost = goal_node.g_cost();

        let mut steps = vec![];
        let mut step_cost = 0;
        let mut total_time = 0.0;
        let mut current = goal_node;

        // parent links never form a cycle, so a chain longer than the Grid is corrupt
        for _ in 0..grid.rows() * grid.cols() {
            steps.push(current.pos());
            let Some(parent) = current.parent() else {
                steps.reverse();
                return Ok(Path::new(steps, cost, step_cost, total_time));
            };
            let step = neighborhood.step_cost(current.pos(), parent);
            let speed = grid.model().class_speed(current.terrain());
            step_cost += step;
            total_time += step as f64 / speed as f64;
            current = grid.get(parent).ok_or_else(|| out_of_bounds(parent))?;
        }

        Err(Error::NoPathExists {
            start: current.pos(),
            goal,
        })
    }

    /// The accumulated search cost of the goal: step costs plus terrain costs.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The sum of the plain step costs (10 per orthogonal, 14 per diagonal step).
    pub fn step_cost(&self) -> Cost {
        self.step_cost
    }

    /// The estimated time to walk the Path, in seconds.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// The number of Points, including start and goal
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path has no Points
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The first Point
    pub fn start(&self) -> Option<Point> {
        self.path.first().copied()
    }

    /// The last Point
    pub fn goal(&self) -> Option<Point> {
        self.path.last().copied()
    }

    /// All `(row, col)` Points from start to goal
    pub fn points(&self) -> &[Point] {
        &self.path
    }

    /// Returns an Iterator over the `(row, col)` Points of the Path
    pub fn iter(&self) -> std::slice::Iter<Point> {
        self.path.iter()
    }

    /// The Points as `(col, row)` pairs, i.e. `(x, y)` on the source image.
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.path.iter().map(|&(row, col)| (col, row))
    }
}

use std::ops::Index;

impl Index<usize> for Path {
    type Output = Point;
    fn index(&self, index: usize) -> &Point {
        &self.path[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.iter()
    }
}

impl PartialEq<Vec<Point>> for Path {
    fn eq(&self, rhs: &Vec<Point>) -> bool {
        self.path[..] == rhs[..]
    }
}

impl<'a> PartialEq<&'a [Point]> for Path {
    fn eq(&self, rhs: &&'a [Point]) -> bool {
        &self.path[..] == *rhs
    }
}

use std::fmt;
impl fmt::Display for Path {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "Path[Cost = {}, Time = {:.2}s]: ",
            self.cost, self.total_time
        )?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{:?}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {:?}", p)?;
            }
            Ok(())
        }
    }
}
