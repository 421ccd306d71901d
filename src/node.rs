use crate::{terrain::TerrainClass, Cost, Point};
use std::fmt;

/// The Cost of a Node that has not been reached yet.
pub const UNREACHED: Cost = Cost::MAX;

/// A single Tile of the [`Grid`](crate::Grid) together with its search state.
///
/// The position never changes. Everything else is reset at the start of every search
/// and only modified by the search itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pos: Point,
    terrain: TerrainClass,
    pub(crate) parent: Option<Point>,
    pub(crate) g_cost: Cost,
    pub(crate) h_cost: Cost,
    pub(crate) f_cost: Cost,
}

impl Node {
    /// Creates an unvisited Node at `pos`.
    pub fn new(pos: Point, terrain: TerrainClass) -> Node {
        Node {
            pos,
            terrain,
            parent: None,
            g_cost: UNREACHED,
            h_cost: UNREACHED,
            f_cost: UNREACHED,
        }
    }

    /// `(row, col)` of this Node
    pub fn pos(&self) -> Point {
        self.pos
    }
    /// The row of this Node
    pub fn row(&self) -> usize {
        self.pos.0
    }
    /// The column of this Node
    pub fn col(&self) -> usize {
        self.pos.1
    }
    /// The terrain class of this Tile
    pub fn terrain(&self) -> TerrainClass {
        self.terrain
    }
    /// The Node this one was reached from, if any
    pub fn parent(&self) -> Option<Point> {
        self.parent
    }
    /// Accumulated cost from the start of the last search
    pub fn g_cost(&self) -> Cost {
        self.g_cost
    }
    /// Estimated cost to the goal of the last search
    pub fn h_cost(&self) -> Cost {
        self.h_cost
    }
    /// `g_cost + h_cost`
    pub fn f_cost(&self) -> Cost {
        self.f_cost
    }

    /// `true` if no search has assigned a cost to this Node.
    pub fn is_unvisited(&self) -> bool {
        self.g_cost == UNREACHED && self.parent.is_none()
    }

    pub(crate) fn reset(&mut self) {
        self.parent = None;
        self.g_cost = UNREACHED;
        self.h_cost = UNREACHED;
        self.f_cost = UNREACHED;
    }

    pub(crate) fn assign(&mut self, parent: Option<Point>, g_cost: Cost, h_cost: Cost) {
        self.parent = parent;
        self.g_cost = g_cost;
        self.h_cost = h_cost;
        self.f_cost = g_cost.saturating_add(h_cost);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "( row: {}, col: {} ) -> {}",
            self.pos.0, self.pos.1, self.terrain
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_unvisited() {
        let node = Node::new((2, 3), TerrainClass::new(4).unwrap());
        assert!(node.is_unvisited());
        assert_eq!(node.f_cost(), UNREACHED);
        assert_eq!((node.row(), node.col()), (2, 3));
    }

    #[test]
    fn assign_and_reset() {
        let mut node = Node::new((0, 1), TerrainClass::new(0).unwrap());
        node.assign(Some((0, 0)), 16, 30);
        assert_eq!(node.f_cost(), 46);
        assert_eq!(node.parent(), Some((0, 0)));

        node.reset();
        assert!(node.is_unvisited());
    }

    #[test]
    fn display() {
        let node = Node::new((4, 2), TerrainClass::new(7).unwrap());
        assert_eq!(&format!("{}", node), "( row: 4, col: 2 ) -> 7");
    }
}
