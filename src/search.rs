use crate::error::{Endpoint, EndpointFault};
use crate::neighbors::{MooreNeighborhood, Neighborhood};
use crate::node::UNREACHED;
use crate::{Cost, Error, Grid, Path, Point, PointSet, Result};

/// When the search decides that the goal has been found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GoalTest {
    /// Stop as soon as the goal is reached as the neighbor of an expanded Node.
    ///
    /// This is faster, but the returned Path is not guaranteed to be the cheapest one.
    #[default]
    OnDiscovery,
    /// Stop when the goal is the cheapest candidate, like a textbook A*.
    OnExpansion,
}

/// Options for a [`Search`].
///
/// Default options:
/// ```
/// # use terrain_pathfinding::{GoalTest, SearchConfig};
/// assert_eq!(
///     SearchConfig {
///         goal_test: GoalTest::OnDiscovery,
///         size_hint: 256,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// When the goal counts as found (defaults to [`GoalTest::OnDiscovery`])
    pub goal_test: GoalTest,
    /// The number of Nodes the open and closed sets reserve space for up front (defaults to `256`)
    pub size_hint: usize,
}

impl SearchConfig {
    /// Stops on the first discovery of the goal.
    pub const REFERENCE: SearchConfig = SearchConfig {
        goal_test: GoalTest::OnDiscovery,
        size_hint: 256,
    };
    /// Stops when the goal is expanded, which always yields the cheapest Path.
    pub const OPTIMAL: SearchConfig = SearchConfig {
        goal_test: GoalTest::OnExpansion,
        size_hint: 256,
    };
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::REFERENCE
    }
}

/// Searches the cheapest Path from `start` to `goal` with the default [`SearchConfig`].
///
/// ## Examples
/// ```
/// use terrain_pathfinding::{find_path, Grid};
///
/// // 0 = open land, 9 = out of bounds
/// let mut grid = Grid::build(&[
///     [0, 0, 9, 0, 0],
///     [0, 0, 0, 0, 0],
///     [0, 0, 0, 0, 0],
/// ]).unwrap();
///
/// let path = find_path(&mut grid, (0, 0), (0, 4)).unwrap();
///
/// assert_eq!(path, vec![(0, 0), (0, 1), (1, 2), (0, 3), (0, 4)]);
/// assert_eq!(path.step_cost(), 48);
/// ```
///
/// An unreachable goal is reported as [`Error::NoPathExists`]:
/// ```
/// # use terrain_pathfinding::{find_path, Grid};
/// let mut grid = Grid::build(&[
///     [0, 9, 0],
///     [0, 9, 0],
/// ]).unwrap();
///
/// let result = find_path(&mut grid, (0, 0), (1, 2));
/// assert!(result.unwrap_err().is_no_path());
/// ```
pub fn find_path(grid: &mut Grid, start: Point, goal: Point) -> Result<Path> {
    Search::new(grid, start, goal, SearchConfig::default())?.run()
}

/// A single A* search over a [`Grid`].
///
/// The search state lives in the Nodes of the Grid and in the open and closed sets of
/// this struct. The open set keeps its insertion order: of several candidates with the same
/// `f_cost`, the one discovered first is expanded first.
#[derive(Debug)]
pub struct Search<'a, N: Neighborhood = MooreNeighborhood> {
    grid: &'a mut Grid,
    neighborhood: N,
    config: SearchConfig,
    start: Point,
    goal: Point,
    open: Vec<Point>,
    in_open: PointSet,
    closed: PointSet,
    expansions: usize,
}

impl<'a> Search<'a, MooreNeighborhood> {
    /// Prepares a search on an 8-connected Grid.
    ///
    /// ## Errors
    /// [`Error::InvalidEndpoint`] if `start` or `goal` is off the Grid or impassable.
    /// The start is checked first.
    pub fn new(
        grid: &'a mut Grid,
        start: Point,
        goal: Point,
        config: SearchConfig,
    ) -> Result<Search<'a, MooreNeighborhood>> {
        let neighborhood = MooreNeighborhood::new(grid.rows(), grid.cols());
        Search::with_neighborhood(grid, neighborhood, start, goal, config)
    }
}

impl<'a, N: Neighborhood> Search<'a, N> {
    /// Prepares a search that moves according to `neighborhood`.
    pub fn with_neighborhood(
        grid: &'a mut Grid,
        neighborhood: N,
        start: Point,
        goal: Point,
        config: SearchConfig,
    ) -> Result<Search<'a, N>> {
        check_endpoint(grid, Endpoint::Source, start)?;
        check_endpoint(grid, Endpoint::Destination, goal)?;

        Ok(Search {
            grid,
            neighborhood,
            config,
            start,
            goal,
            open: Vec::with_capacity(config.size_hint),
            in_open: PointSet::with_capacity(config.size_hint),
            closed: PointSet::with_capacity(config.size_hint),
            expansions: 0,
        })
    }

    /// Runs the search to completion.
    ///
    /// All search state of the Grid is cleared first, so running the same search again
    /// gives the same result.
    ///
    /// ## Errors
    /// [`Error::NoPathExists`] if every reachable Node was expanded without finding the goal.
    pub fn run(&mut self) -> Result<Path> {
        self.initialize();
        log::debug!(
            "searching {:?} -> {:?} on a {}x{} grid",
            self.start,
            self.goal,
            self.grid.rows(),
            self.grid.cols()
        );

        if self.start == self.goal {
            return self.finish();
        }

        while let Some(index) = self.cheapest_open() {
            let current = self.open[index];
            if self.config.goal_test == GoalTest::OnExpansion && current == self.goal {
                return self.finish();
            }

            self.expansions += 1;
            log::trace!("expanding {:?} (f = {})", current, self.f_cost(current));

            if self.expand(current) {
                return self.finish();
            }

            self.open.remove(index);
            self.in_open.remove(&current);
            self.closed.insert(current);
        }

        log::debug!(
            "no path from {:?} to {:?} after {} expansions",
            self.start,
            self.goal,
            self.expansions
        );
        Err(Error::NoPathExists {
            start: self.start,
            goal: self.goal,
        })
    }

    /// The number of Nodes expanded by the last run
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// The Point where the search starts
    pub fn start(&self) -> Point {
        self.start
    }

    /// The Point the search looks for
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Read access to the Grid and the Node state left behind by the last run
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    fn initialize(&mut self) {
        self.grid.reset();
        self.open.clear();
        self.in_open.clear();
        self.closed.clear();
        self.expansions = 0;

        let h_cost = self.neighborhood.heuristic(self.start, self.goal);
        if let Some(start) = self.grid.get_mut(self.start) {
            start.assign(None, 0, h_cost);
        }
        if let Some(goal) = self.grid.get_mut(self.goal) {
            goal.h_cost = 0;
        }

        self.open.push(self.start);
        self.in_open.insert(self.start);
    }

    /// Index of the first open Node with the lowest `f_cost`.
    fn cheapest_open(&self) -> Option<usize> {
        self.open
            .iter()
            .enumerate()
            .min_by_key(|&(_, &pos)| self.f_cost(pos))
            .map(|(index, _)| index)
    }

    /// Discovers or improves the neighbors of `current`.
    ///
    /// Returns `true` if the goal was discovered and the search should stop.
    fn expand(&mut self, current: Point) -> bool {
        let current_cost = self.grid.get(current).map_or(UNREACHED, |n| n.g_cost());
        let model = *self.grid.model();

        for other in self.neighborhood.get_all_neighbors(current) {
            if self.closed.contains(&other) || !self.grid.is_passable(other) {
                continue;
            }
            let Some(node) = self.grid.get_mut(other) else {
                continue;
            };

            let g_cost = current_cost
                .saturating_add(self.neighborhood.step_cost(current, other))
                .saturating_add(model.class_cost(node.terrain()));
            let h_cost = self.neighborhood.heuristic(other, self.goal);

            if !self.in_open.contains(&other) {
                node.assign(Some(current), g_cost, h_cost);
                if self.config.goal_test == GoalTest::OnDiscovery && other == self.goal {
                    return true;
                }
                self.open.push(other);
                self.in_open.insert(other);
            } else if g_cost.saturating_add(h_cost) < node.f_cost() {
                node.assign(Some(current), g_cost, h_cost);
            }
        }
        false
    }

    fn f_cost(&self, pos: Point) -> Cost {
        self.grid.get(pos).map_or(UNREACHED, |n| n.f_cost())
    }

    fn finish(&self) -> Result<Path> {
        let path = Path::reconstruct_with(&*self.grid, &self.neighborhood, self.goal)?;
        log::debug!(
            "found path of {} points (cost {}, {:.2}s) after {} expansions",
            path.len(),
            path.cost(),
            path.total_time(),
            self.expansions
        );
        Ok(path)
    }
}

fn check_endpoint(grid: &Grid, endpoint: Endpoint, (row, col): Point) -> Result<()> {
    let fault = if grid.get((row, col)).is_none() {
        EndpointFault::OutOfBounds
    } else if !grid.is_passable((row, col)) {
        EndpointFault::Impassable
    } else {
        return Ok(());
    };
    Err(Error::InvalidEndpoint {
        endpoint,
        row,
        col,
        fault,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(rows: usize, cols: usize) -> Grid {
        Grid::build(&vec![vec![0u8; cols]; rows]).unwrap()
    }

    #[test]
    fn straight_line() {
        let mut grid = uniform(5, 5);
        let path = find_path(&mut grid, (0, 0), (0, 4)).unwrap();

        assert_eq!(path, vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
        assert_eq!(path.len(), 5);
        assert_eq!(path.step_cost(), 40);
        assert_eq!(path.cost(), 4 * (10 + 6));
        assert!((path.total_time() - 40.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn detour_around_out_of_bounds_tile() {
        let mut matrix = vec![vec![0u8; 5]; 5];
        matrix[0][2] = 9;
        let mut grid = Grid::build(&matrix).unwrap();

        let path = find_path(&mut grid, (0, 0), (0, 4)).unwrap();
        assert_eq!(path, vec![(0, 0), (0, 1), (1, 2), (0, 3), (0, 4)]);
        assert_eq!(path.step_cost(), 10 + 14 + 14 + 10);
        assert!((path.total_time() - 48.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn start_is_goal() {
        let mut grid = uniform(3, 3);
        let mut search = Search::new(&mut grid, (1, 1), (1, 1), Default::default()).unwrap();
        let path = search.run().unwrap();

        assert_eq!(path, vec![(1, 1)]);
        assert_eq!(path.total_time(), 0.0);
        assert_eq!(search.expansions(), 0);
    }

    #[test]
    fn impassable_endpoints() {
        let mut grid = Grid::build(&[[0, 5, 9]]).unwrap();

        let err = Search::new(&mut grid, (0, 1), (0, 0), Default::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEndpoint {
                endpoint: Endpoint::Source,
                fault: EndpointFault::Impassable,
                ..
            }
        ));

        let err = Search::new(&mut grid, (0, 0), (0, 2), Default::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEndpoint {
                endpoint: Endpoint::Destination,
                fault: EndpointFault::Impassable,
                ..
            }
        ));

        let err = Search::new(&mut grid, (0, 0), (3, 0), Default::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEndpoint {
                endpoint: Endpoint::Destination,
                fault: EndpointFault::OutOfBounds,
                row: 3,
                col: 0,
            }
        ));
    }

    #[test]
    fn source_is_reported_first() {
        let mut grid = Grid::build(&[[9, 9]]).unwrap();
        let err = find_path(&mut grid, (0, 0), (0, 1)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEndpoint {
                endpoint: Endpoint::Source,
                ..
            }
        ));
    }

    #[test]
    fn wall_separates_start_and_goal() {
        let matrix = vec![vec![0u8, 0, 9, 0, 0]; 5];
        let mut grid = Grid::build(&matrix).unwrap();
        let mut search = Search::new(&mut grid, (0, 0), (0, 4), Default::default()).unwrap();

        assert!(search.run().unwrap_err().is_no_path());
        // the whole left side was expanded
        assert_eq!(search.expansions(), 10);
    }

    #[test]
    fn vegetation_wall_separates_start_and_goal() {
        let matrix = vec![vec![0u8, 5, 0]; 3];
        let mut grid = Grid::build(&matrix).unwrap();
        assert!(find_path(&mut grid, (1, 0), (1, 2)).unwrap_err().is_no_path());
    }

    #[test]
    fn rerun_is_identical() {
        let matrix = vec![
            vec![0, 9, 0, 0, 0],
            vec![0, 9, 9, 9, 0],
            vec![0, 1, 0, 0, 0],
            vec![0, 1, 0, 5, 0],
            vec![0, 0, 0, 5, 0],
        ];
        let mut grid = Grid::build(&matrix).unwrap();
        let mut search = Search::new(&mut grid, (0, 0), (0, 4), Default::default()).unwrap();

        let first = search.run().unwrap();
        let expansions = search.expansions();
        let second = search.run().unwrap();

        assert_eq!(first, second);
        assert_eq!(expansions, search.expansions());
        assert_eq!(
            first,
            vec![(0, 0), (1, 0), (2, 1), (2, 2), (2, 3), (1, 4), (0, 4)]
        );
        assert_eq!(first.step_cost(), 68);
        assert!((first.total_time() - 7.75).abs() < 1e-9);
    }

    #[test]
    fn goal_test_changes_the_amount_of_work() {
        let mut grid = uniform(5, 5);

        let (reference, reference_expansions) = {
            let mut search =
                Search::new(&mut grid, (0, 0), (4, 4), SearchConfig::REFERENCE).unwrap();
            (search.run().unwrap(), search.expansions())
        };
        let (optimal, optimal_expansions) = {
            let mut search = Search::new(&mut grid, (0, 0), (4, 4), SearchConfig::OPTIMAL).unwrap();
            (search.run().unwrap(), search.expansions())
        };

        assert_eq!(reference, optimal);
        assert_eq!(optimal, vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
        assert_eq!(reference_expansions, 8);
        assert_eq!(optimal_expansions, 12);
    }

    #[test]
    fn start_node_state() {
        let mut grid = uniform(3, 3);
        let mut search = Search::new(&mut grid, (0, 0), (2, 2), Default::default()).unwrap();
        search.run().unwrap();

        let start = search.grid().get((0, 0)).unwrap();
        assert_eq!(start.parent(), None);
        assert_eq!(start.g_cost(), 0);
        assert_eq!(start.h_cost(), 28);
        assert_eq!(start.f_cost(), 28);

        let goal = search.grid().get((2, 2)).unwrap();
        assert_eq!(goal.h_cost(), 0);
        assert_eq!(goal.parent(), Some((1, 1)));
    }
}
