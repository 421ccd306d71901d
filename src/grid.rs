use crate::node::Node;
use crate::terrain::{TerrainClass, TerrainModel};
use crate::{Error, Point, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A fixed-size, row-major collection of [`Node`]s.
///
/// Every `(row, col)` with `row < rows` and `col < cols` maps to exactly one Node.
/// Accesses outside of that range are rejected.
///
/// ```
/// # use terrain_pathfinding::Grid;
/// let grid = Grid::build(&[
///     [0, 0, 9],
///     [7, 7, 7],
/// ]).unwrap();
/// assert_eq!((grid.rows(), grid.cols()), (2, 3));
/// assert_eq!(grid.at(0, 2).unwrap().terrain().get(), 9);
/// assert!(grid.at(2, 0).is_err());
/// assert!(!grid.is_in_bounds(-1, 0));
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    nodes: Vec<Node>,
    model: TerrainModel,
}

impl Grid {
    /// Builds a Grid from a rectangular matrix of terrain classes using
    /// [`TerrainModel::STANDARD`].
    pub fn build<R: AsRef<[u8]> + Sync>(matrix: &[R]) -> Result<Grid> {
        Grid::build_with_model(matrix, TerrainModel::STANDARD)
    }

    /// Builds a Grid from a rectangular matrix of terrain classes.
    ///
    /// ## Errors
    /// - [`Error::EmptyOrRaggedMatrix`] if there are no cells or the rows have different lengths
    /// - [`Error::UnknownTerrainClass`] if a cell holds an invalid class
    pub fn build_with_model<R: AsRef<[u8]> + Sync>(
        matrix: &[R],
        model: TerrainModel,
    ) -> Result<Grid> {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, |row| row.as_ref().len());
        if cols == 0 {
            return Err(Error::EmptyOrRaggedMatrix {
                row: 0,
                expected: 0,
                found: 0,
            });
        }
        if let Some((row, found)) = matrix
            .iter()
            .map(|r| r.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(Error::EmptyOrRaggedMatrix {
                row,
                expected: cols,
                found,
            });
        }

        #[cfg(feature = "parallel")]
        let converted: Vec<Vec<Node>> = matrix
            .par_iter()
            .enumerate()
            .map(|(row, cells)| convert_row(row, cells.as_ref()))
            .collect::<Result<_>>()?;

        #[cfg(not(feature = "parallel"))]
        let converted: Vec<Vec<Node>> = matrix
            .iter()
            .enumerate()
            .map(|(row, cells)| convert_row(row, cells.as_ref()))
            .collect::<Result<_>>()?;

        log::debug!("built {}x{} grid", rows, cols);

        Ok(Grid {
            rows,
            cols,
            nodes: converted.into_iter().flatten().collect(),
            model,
        })
    }

    /// The number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }
    /// The number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }
    /// `(rows, cols)`
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
    /// The cost tables used by searches on this Grid
    pub fn model(&self) -> &TerrainModel {
        &self.model
    }

    /// `true` if `(row, col)` refers to a Node of this Grid.
    pub fn is_in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// The Node at `(row, col)`.
    pub fn at(&self, row: isize, col: isize) -> Result<&Node> {
        let index = self.checked_index(row, col)?;
        Ok(&self.nodes[index])
    }

    /// Mutable access to the Node at `(row, col)`.
    pub fn at_mut(&mut self, row: isize, col: isize) -> Result<&mut Node> {
        let index = self.checked_index(row, col)?;
        Ok(&mut self.nodes[index])
    }

    /// The Node at `pos`, if it is on the Grid.
    pub fn get(&self, pos: Point) -> Option<&Node> {
        self.index_of(pos).map(|index| &self.nodes[index])
    }

    pub(crate) fn get_mut(&mut self, pos: Point) -> Option<&mut Node> {
        self.index_of(pos).map(move |index| &mut self.nodes[index])
    }

    /// `true` if the Tile at `pos` is on the Grid and can be walked over.
    pub fn is_passable(&self, pos: Point) -> bool {
        self.get(pos)
            .map_or(false, |node| !self.model.class_impassable(node.terrain()))
    }

    /// Clears the search state of every Node.
    pub fn reset(&mut self) {
        #[cfg(feature = "parallel")]
        self.nodes.par_iter_mut().for_each(Node::reset);

        #[cfg(not(feature = "parallel"))]
        self.nodes.iter_mut().for_each(Node::reset);
    }

    /// Iterates over all Nodes in row-major order
    pub fn iter(&self) -> std::slice::Iter<Node> {
        self.nodes.iter()
    }

    fn index_of(&self, (row, col): Point) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    fn checked_index(&self, row: isize, col: isize) -> Result<usize> {
        if self.is_in_bounds(row, col) {
            Ok(row as usize * self.cols + col as usize)
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

fn convert_row(row: usize, cells: &[u8]) -> Result<Vec<Node>> {
    cells
        .iter()
        .enumerate()
        .map(|(col, &class)| Ok(Node::new((row, col), TerrainClass::new(class)?)))
        .collect()
}
