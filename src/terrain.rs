use crate::{Cost, Error, Result};
use std::fmt;

/// The number of distinct terrain classes.
pub const CLASS_COUNT: usize = 10;

/// A validated terrain class in `0..CLASS_COUNT`.
///
/// ```
/// # use terrain_pathfinding::TerrainClass;
/// assert!(TerrainClass::new(7).is_ok());
/// assert!(TerrainClass::new(10).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TerrainClass(u8);

impl TerrainClass {
    /// The class used for Tiles that could not be classified. It is impassable.
    pub const FALLBACK: TerrainClass = TerrainClass(5);

    /// Validates `class`.
    pub fn new(class: u8) -> Result<TerrainClass> {
        if (class as usize) < CLASS_COUNT {
            Ok(TerrainClass(class))
        } else {
            Err(Error::UnknownTerrainClass(class))
        }
    }

    /// The raw class value
    pub fn get(self) -> u8 {
        self.0
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for TerrainClass {
    type Error = Error;
    fn try_from(class: u8) -> Result<TerrainClass> {
        TerrainClass::new(class)
    }
}

impl From<TerrainClass> for u8 {
    fn from(class: TerrainClass) -> u8 {
        class.0
    }
}

impl fmt::Display for TerrainClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Movement cost, traversal speed and passability of every terrain class.
///
/// Costs are distances (metres) and speeds are metres per second, so dividing a
/// distance by a speed gives seconds.
///
/// Default values:
/// ```
/// # use terrain_pathfinding::TerrainModel;
/// let model = TerrainModel::default();
/// assert_eq!(model, TerrainModel::STANDARD);
/// assert_eq!(model.movement_cost(9).unwrap(), 50);
/// assert_eq!(model.speed(7).unwrap(), 11);
/// assert!(model.is_impassable(5).unwrap());
/// assert!(!model.is_impassable(6).unwrap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerrainModel {
    costs: [Cost; CLASS_COUNT],
    speeds: [Cost; CLASS_COUNT],
    impassable: [bool; CLASS_COUNT],
}

impl TerrainModel {
    /// The tables for the Mendon orienteering maps.
    ///
    /// The cost entries of the impassable classes 5 and 9 are never used by a search.
    pub const STANDARD: TerrainModel = TerrainModel {
        costs: [6, 7, 8, 9, 10, 12, 11, 4, 5, 50],
        speeds: [9, 8, 7, 6, 5, 4, 4, 11, 10, 1],
        impassable: [
            false, false, false, false, false, true, false, false, false, true,
        ],
    };

    /// Creates a custom model. Every cost and speed has to be strictly positive.
    pub fn new(
        costs: [Cost; CLASS_COUNT],
        speeds: [Cost; CLASS_COUNT],
        impassable: [bool; CLASS_COUNT],
    ) -> Result<TerrainModel> {
        for class in 0..CLASS_COUNT {
            if costs[class] == 0 {
                return Err(Error::InvalidTerrainModel {
                    class: class as u8,
                    table: "cost",
                });
            }
            if speeds[class] == 0 {
                return Err(Error::InvalidTerrainModel {
                    class: class as u8,
                    table: "speed",
                });
            }
        }
        Ok(TerrainModel {
            costs,
            speeds,
            impassable,
        })
    }

    /// The cost of entering a Tile of `class`.
    pub fn movement_cost(&self, class: u8) -> Result<Cost> {
        Ok(self.class_cost(TerrainClass::new(class)?))
    }

    /// The speed at which a Tile of `class` is crossed.
    pub fn speed(&self, class: u8) -> Result<Cost> {
        Ok(self.class_speed(TerrainClass::new(class)?))
    }

    /// `true` if Tiles of `class` may never be part of a Path.
    pub fn is_impassable(&self, class: u8) -> Result<bool> {
        Ok(self.class_impassable(TerrainClass::new(class)?))
    }

    /// [`movement_cost`](TerrainModel::movement_cost) for an already validated class
    pub fn class_cost(&self, class: TerrainClass) -> Cost {
        self.costs[class.index()]
    }

    /// [`speed`](TerrainModel::speed) for an already validated class
    pub fn class_speed(&self, class: TerrainClass) -> Cost {
        self.speeds[class.index()]
    }

    /// [`is_impassable`](TerrainModel::is_impassable) for an already validated class
    pub fn class_impassable(&self, class: TerrainClass) -> bool {
        self.impassable[class.index()]
    }
}

impl Default for TerrainModel {
    fn default() -> TerrainModel {
        TerrainModel::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables() {
        let model = TerrainModel::STANDARD;
        let costs: Vec<Cost> = (0..10).map(|c| model.movement_cost(c).unwrap()).collect();
        let speeds: Vec<Cost> = (0..10).map(|c| model.speed(c).unwrap()).collect();
        assert_eq!(costs, vec![6, 7, 8, 9, 10, 12, 11, 4, 5, 50]);
        assert_eq!(speeds, vec![9, 8, 7, 6, 5, 4, 4, 11, 10, 1]);
    }

    #[test]
    fn only_five_and_nine_are_impassable() {
        let model = TerrainModel::STANDARD;
        let blocked: Vec<u8> = (0..10)
            .filter(|&c| model.is_impassable(c).unwrap())
            .collect();
        assert_eq!(blocked, vec![5, 9]);
    }

    #[test]
    fn unknown_class() {
        let model = TerrainModel::STANDARD;
        assert!(matches!(
            model.movement_cost(10),
            Err(Error::UnknownTerrainClass(10))
        ));
        assert!(matches!(
            model.speed(255),
            Err(Error::UnknownTerrainClass(255))
        ));
        assert!(TerrainClass::try_from(10u8).is_err());
    }

    #[test]
    fn fallback_is_impassable() {
        assert!(TerrainModel::STANDARD.class_impassable(TerrainClass::FALLBACK));
    }

    #[test]
    fn custom_model_rejects_zero_speed() {
        let mut speeds = [1; CLASS_COUNT];
        speeds[3] = 0;
        let err = TerrainModel::new([1; CLASS_COUNT], speeds, [false; CLASS_COUNT]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTerrainModel {
                class: 3,
                table: "speed"
            }
        ));
    }
}
