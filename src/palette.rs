//! Translating map colors into terrain classes.

use crate::terrain::{TerrainClass, CLASS_COUNT};

/// An RGB color
pub type Rgb = [u8; 3];

/// A lookup table from map colors to terrain classes.
///
/// Colors that are not part of the table are classified as the fallback class
/// instead of being rejected.
///
/// ```
/// # use terrain_pathfinding::{Palette, TerrainClass};
/// let palette = Palette::STANDARD;
/// assert_eq!(palette.classify([0, 0, 255]).get(), 6);
/// assert_eq!(palette.classify([1, 2, 3]), TerrainClass::FALLBACK);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; CLASS_COUNT],
    fallback: TerrainClass,
}

impl Palette {
    /// The colors of the Mendon orienteering maps, indexed by class.
    pub const STANDARD: Palette = Palette {
        colors: [
            [248, 148, 18],  // open land
            [255, 192, 0],   // rough meadow
            [255, 255, 255], // easy movement forest
            [2, 208, 60],    // slow run forest
            [2, 136, 40],    // walk forest
            [5, 73, 24],     // impassable vegetation
            [0, 0, 255],     // lake/swamp/marsh
            [71, 51, 3],     // paved road
            [0, 0, 0],       // footpath
            [205, 0, 101],   // out of bounds
        ],
        fallback: TerrainClass::FALLBACK,
    };

    /// Creates a Palette where `colors[class]` is the color of `class`.
    ///
    /// If a color appears more than once, the lowest class wins.
    pub fn new(colors: [Rgb; CLASS_COUNT], fallback: TerrainClass) -> Palette {
        Palette { colors, fallback }
    }

    /// The class of a pixel. Unknown colors map to the fallback class.
    pub fn classify(&self, rgb: Rgb) -> TerrainClass {
        self.colors
            .iter()
            .position(|&color| color == rgb)
            .and_then(|class| TerrainClass::new(class as u8).ok())
            .unwrap_or(self.fallback)
    }

    /// The color drawn for `class`
    pub fn color_of(&self, class: TerrainClass) -> Rgb {
        self.colors[class.get() as usize]
    }

    /// The class used for unknown colors
    pub fn fallback(&self) -> TerrainClass {
        self.fallback
    }

    /// Classifies a `width` x `height` picture, returning one row of raw classes per `y`.
    ///
    /// `get_pixel` is called with `(x, y)`, which is `(col, row)` on the Grid.
    pub fn classify_rows(
        &self,
        (width, height): (usize, usize),
        mut get_pixel: impl FnMut((usize, usize)) -> Rgb,
    ) -> Vec<Vec<u8>> {
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| self.classify(get_pixel((x, y))).get())
                    .collect()
            })
            .collect()
    }
}

impl Default for Palette {
    fn default() -> Palette {
        Palette::STANDARD
    }
}
