#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find least-cost routes across terrain maps.
//!
//! ## Introduction
//! A terrain map is a rectangular Grid where every Tile carries a terrain class: open land,
//! forest, water, roads and so on. Each class has a cost for walking onto it and a speed at
//! which it can be crossed. Two classes (impassable vegetation and out of bounds) can never
//! be walked over.
//!
//! Paths move to any of the 8 surrounding Tiles. An orthogonal step costs 10 and a diagonal
//! one 14, plus the cost of the Tile that is entered. The search is an A* search guided by
//! the octile distance to the goal.
//!
//! By default, the search stops the moment the goal is first reached from an expanded Tile
//! ([`GoalTest::OnDiscovery`]). That is quick, but **the resulting Path may be slightly more
//! expensive than the actual best Path**. [`SearchConfig::OPTIMAL`] waits until the goal is
//! the cheapest candidate instead.
//!
//! ## Examples
//! Building the Grid and finding a Path:
//! ```
//! use terrain_pathfinding::{find_path, Grid};
//!
//! // 0 = open land, 7 = paved road, 6 = water, 9 = out of bounds
//! let terrain = [
//!     [0, 0, 9, 0, 0],
//!     [7, 7, 7, 7, 7],
//!     [6, 6, 6, 6, 6],
//! ];
//! let mut grid = Grid::build(&terrain).unwrap();
//!
//! let path = find_path(&mut grid, (0, 0), (0, 4)).unwrap();
//!
//! assert_eq!(path.start(), Some((0, 0)));
//! assert_eq!(path.goal(), Some((0, 4)));
//! assert!(path.iter().all(|&(row, col)| terrain[row][col] != 9));
//! println!("{}", path);
//! ```
//!
//! Points are `(row, col)`. [`Path::coordinates`] yields `(col, row)` pairs instead, which is
//! `(x, y)` on the image the terrain came from.
//!
//! ### Configuration
//! The cost tables live in a [`TerrainModel`] and the search options in a [`SearchConfig`]:
//! ```
//! use terrain_pathfinding::{Grid, Search, SearchConfig, TerrainModel};
//!
//! let mut grid = Grid::build_with_model(&[[0, 0, 0], [0, 0, 0]], TerrainModel::STANDARD).unwrap();
//!
//! let mut search = Search::new(&mut grid, (0, 0), (1, 2), SearchConfig::OPTIMAL).unwrap();
//! let path = search.run().unwrap();
//!
//! assert_eq!(path.step_cost(), 24);
//! assert!(search.expansions() <= 6);
//! ```
//!
//! ### Images
//! With the `imagery` feature, the [`imagery`] module reads a map image through a
//! [`Palette`] and draws Paths back onto it.

/// A shorthand for Points on the grid: `(row, col)`
pub type Point = (usize, usize);

/// The type used for movement costs, heuristics and speeds
pub type Cost = usize;

pub(crate) type PointSet = hashbrown::HashSet<Point>;

mod error;
pub use error::{Endpoint, EndpointFault, Error, Result};

pub mod terrain;
pub use terrain::{TerrainClass, TerrainModel};

pub mod palette;
pub use palette::Palette;

mod node;
pub use node::Node;

mod grid;
pub use grid::Grid;

pub mod neighbors;

mod path;
pub use path::Path;

mod search;
pub use search::{find_path, GoalTest, Search, SearchConfig};

#[cfg(feature = "imagery")]
pub mod imagery;

/// The most commonly used items
pub mod prelude {
    pub use crate::neighbors::{MooreNeighborhood, Neighborhood};
    pub use crate::{
        find_path, Grid, Path, Point, Search, SearchConfig, TerrainClass, TerrainModel,
    };
}
