//! How a Path may move across the Grid.

use crate::{Cost, Point};
use std::fmt::Debug;

/// The cost of a step to one of the 4 orthogonal neighbors.
pub const ORTHOGONAL_STEP: Cost = 10;
/// The cost of a step to one of the 4 diagonal neighbors.
pub const DIAGONAL_STEP: Cost = 14;

/// Defines how a Path can move along the Grid.
///
/// It provides a function to query all neighboring Points of an existing Point, the cost of
/// a single step between neighbors and a Heuristic for how expensive it might be to reach
/// a goal from a Point.
///
/// The terrain of the Tiles is not part of this. Solid Tiles are filtered out by the search.
pub trait Neighborhood: Clone + Debug {
    /// Provides all Neighbors of a Point that lie on the Grid, in a fixed order.
    fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>>;
    /// The cost of stepping from `from` to its neighbor `to`, excluding any terrain cost.
    fn step_cost(&self, from: Point, to: Point) -> Cost;
    /// Gives a Heuristic for how expensive it is to reach `goal` from `point`.
    fn heuristic(&self, point: Point, goal: Point) -> Cost;
}

/// A Neighborhood for Agents moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
/// Orthogonal steps cost [`ORTHOGONAL_STEP`], diagonal ones [`DIAGONAL_STEP`] and the
/// heuristic is the matching octile distance.
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MooreNeighborhood {
    rows: usize,
    cols: usize,
}

impl MooreNeighborhood {
    /// Creates a new MooreNeighborhood.
    ///
    /// `rows` and `cols` are the size of the Grid to move on.
    pub fn new(rows: usize, cols: usize) -> MooreNeighborhood {
        MooreNeighborhood { rows, cols }
    }
}

impl Neighborhood for MooreNeighborhood {
    fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>> {
        let (rows, cols) = (self.rows, self.cols);

        // the row above, the row below, then left and right
        let iter = [
            (-1isize, -1isize),
            (-1, 0),
            (-1, 1),
            (1, -1),
            (1, 0),
            (1, 1),
            (0, -1),
            (0, 1),
        ]
        .iter()
        .map(move |(dr, dc)| (point.0 as isize + dr, point.1 as isize + dc))
        .filter(move |(r, c)| *r >= 0 && *c >= 0 && (*r as usize) < rows && (*c as usize) < cols)
        .map(|(r, c)| (r as usize, c as usize));

        Box::new(iter)
    }
    fn step_cost(&self, from: Point, to: Point) -> Cost {
        if from.0 == to.0 || from.1 == to.1 {
            ORTHOGONAL_STEP
        } else {
            DIAGONAL_STEP
        }
    }
    fn heuristic(&self, point: Point, goal: Point) -> Cost {
        let diff_0 = point.0.abs_diff(goal.0);
        let diff_1 = point.1.abs_diff(goal.1);
        let diagonal = diff_0.min(diff_1);
        let straight = diff_0.max(diff_1) - diagonal;
        DIAGONAL_STEP * diagonal + ORTHOGONAL_STEP * straight
    }
}

#[test]
fn test_moore_get_all_neighbors() {
    let neighborhood = MooreNeighborhood::new(5, 5);
    assert_eq!(
        neighborhood.get_all_neighbors((0, 2)).collect::<Vec<_>>(),
        vec![(1, 1), (1, 2), (1, 3), (0, 1), (0, 3)],
    );
    assert_eq!(neighborhood.get_all_neighbors((2, 2)).count(), 8);
    assert_eq!(
        neighborhood.get_all_neighbors((4, 4)).collect::<Vec<_>>(),
        vec![(3, 3), (3, 4), (4, 3)],
    );
}

#[test]
fn test_moore_step_cost() {
    let neighborhood = MooreNeighborhood::new(5, 5);
    assert_eq!(neighborhood.step_cost((1, 1), (1, 2)), 10);
    assert_eq!(neighborhood.step_cost((1, 1), (0, 1)), 10);
    assert_eq!(neighborhood.step_cost((1, 1), (2, 2)), 14);
}

#[test]
fn test_moore_heuristic() {
    let neighborhood = MooreNeighborhood::new(5, 5);
    assert_eq!(neighborhood.heuristic((3, 1), (0, 0)), 14 + 2 * 10);
    assert_eq!(neighborhood.heuristic((0, 0), (0, 4)), 40);
    assert_eq!(neighborhood.heuristic((4, 4), (4, 4)), 0);
}
