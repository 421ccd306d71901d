//! Reading terrain maps from images and drawing Paths back onto them.
//!
//! Only available with the `imagery` feature.

use crate::palette::{Palette, Rgb};
use crate::{Path, Result};

use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use std::path::Path as FsPath;

/// The color used to mark a Path.
pub const PATH_COLOR: Rgb = [255, 0, 0];

/// Loads the image at `file` and classifies every pixel with `palette`.
///
/// The result has one row per pixel row and can be passed to
/// [`Grid::build`](crate::Grid::build).
pub fn load_terrain(file: impl AsRef<FsPath>, palette: &Palette) -> Result<Vec<Vec<u8>>> {
    let image = image::open(file.as_ref())?;
    log::debug!(
        "loaded {:?} ({}x{})",
        file.as_ref(),
        image.width(),
        image.height()
    );
    Ok(terrain_from_image(&image, palette))
}

/// Classifies every pixel of `image` with `palette`. The alpha channel is ignored.
pub fn terrain_from_image(image: &DynamicImage, palette: &Palette) -> Vec<Vec<u8>> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    palette.classify_rows((width as usize, height as usize), |(x, y)| {
        rgb.get_pixel(x as u32, y as u32).0
    })
}

/// Returns a copy of `image` with every Point of `path` painted in `color`.
///
/// Points outside of the image are skipped.
pub fn overlay_path(image: &DynamicImage, path: &Path, color: Rgb) -> RgbaImage {
    let mut canvas = image.to_rgba8();
    let (width, height) = canvas.dimensions();
    let [r, g, b] = color;
    for (x, y) in path.coordinates() {
        if x < width as usize && y < height as usize {
            canvas.put_pixel(x as u32, y as u32, Rgba([r, g, b, 255]));
        }
    }
    canvas
}
