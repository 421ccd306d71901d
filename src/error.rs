//! The Error type shared by all fallible operations of this crate.

use crate::Point;
use std::fmt;

/// Which end of a requested Path was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The Point where the search would start
    Source,
    /// The Point the search would look for
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Source => write!(f, "source"),
            Endpoint::Destination => write!(f, "destination"),
        }
    }
}

/// Why an [`Endpoint`] was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EndpointFault {
    /// The Point lies outside of the Grid
    OutOfBounds,
    /// The Tile at the Point can never be walked over
    Impassable,
}

impl fmt::Display for EndpointFault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EndpointFault::OutOfBounds => write!(f, "out of bounds"),
            EndpointFault::Impassable => write!(f, "impassable"),
        }
    }
}

/// Everything that can go wrong while building a Grid or searching it.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A coordinate outside of the Grid was accessed.
    #[error("({row}, {col}) is outside of the {rows}x{cols} grid")]
    OutOfBounds {
        /// requested row
        row: isize,
        /// requested column
        col: isize,
        /// number of rows in the Grid
        rows: usize,
        /// number of columns in the Grid
        cols: usize,
    },

    /// The start or the goal of a search cannot be used.
    #[error("{endpoint} ({row}, {col}) is {fault}")]
    InvalidEndpoint {
        /// which end was rejected
        endpoint: Endpoint,
        /// row of the rejected Point
        row: usize,
        /// column of the rejected Point
        col: usize,
        /// the reason
        fault: EndpointFault,
    },

    /// The terrain matrix has no cells, or its rows differ in length.
    #[error("terrain matrix is empty or ragged: row {row} has {found} cells, expected {expected}")]
    EmptyOrRaggedMatrix {
        /// the first offending row
        row: usize,
        /// the length of the first row
        expected: usize,
        /// the length of the offending row
        found: usize,
    },

    /// A value that is not one of the known terrain classes.
    #[error("unknown terrain class {0}")]
    UnknownTerrainClass(u8),

    /// The search ran out of candidates before reaching the goal.
    #[error("no path exists from {start:?} to {goal:?}")]
    NoPathExists {
        /// where the search started
        start: Point,
        /// what the search was looking for
        goal: Point,
    },

    /// A cost or speed table entry is not strictly positive.
    #[error("terrain class {class} has a non-positive {table} entry")]
    InvalidTerrainModel {
        /// the class with the bad entry
        class: u8,
        /// `"cost"` or `"speed"`
        table: &'static str,
    },

    /// Decoding or encoding an image failed.
    #[cfg(feature = "imagery")]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    /// `true` if this is the regular "goal unreachable" outcome rather than a fault.
    pub fn is_no_path(&self) -> bool {
        matches!(self, Error::NoPathExists { .. })
    }
}

/// A [`Result`](std::result::Result) with this crate's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_endpoint_message_names_the_endpoint() {
        let err = Error::InvalidEndpoint {
            endpoint: Endpoint::Destination,
            row: 3,
            col: 4,
            fault: EndpointFault::Impassable,
        };
        assert_eq!(err.to_string(), "destination (3, 4) is impassable");
    }

    #[test]
    fn no_path_is_not_a_fault() {
        let err = Error::NoPathExists {
            start: (0, 0),
            goal: (1, 1),
        };
        assert!(err.is_no_path());
        assert!(!Error::UnknownTerrainClass(12).is_no_path());
    }
}
