// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Moving between ordinary image files and `PixelGrid`s.
//!
//! Anything the `image` crate can decode is accepted; alpha is
//! dropped.  A path ending in `.bin` goes through the raster codec
//! instead.

use crate::binfile::{load_bin, save_bin};
use crate::errors::{CarveError, Result};
use crate::pixelgrid::PixelGrid;
use image::{DynamicImage, RgbImage};
use std::path::Path;

/// True when the path names a `.bin` raster.
pub fn is_bin<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("bin"))
        .unwrap_or(false)
}

/// Which way a conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToBin,
    FromBin,
}

/// Refuse a conversion whose file names point the wrong way: `ToBin`
/// needs a non-`.bin` source and a `.bin` target, `FromBin` the
/// reverse.
pub fn check_direction<P: AsRef<Path>, Q: AsRef<Path>>(
    direction: Direction,
    input: P,
    output: Q,
) -> Result<()> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let (want_in, want_out) = match direction {
        Direction::ToBin => (false, true),
        Direction::FromBin => (true, false),
    };
    if is_bin(input) != want_in {
        return Err(CarveError::Config(format!(
            "{} {} a .bin raster",
            input.display(),
            if want_in { "is not" } else { "is already" }
        )));
    }
    if is_bin(output) != want_out {
        return Err(CarveError::Config(format!(
            "{} {} end in .bin",
            output.display(),
            if want_out { "must" } else { "must not" }
        )));
    }
    Ok(())
}

/// Flatten a decoded image into an RGB grid.
pub fn grid_from_image(image: &DynamicImage) -> Result<PixelGrid> {
    let rgb = image.to_rgb();
    let (width, height) = rgb.dimensions();
    PixelGrid::from_raw(height as usize, width as usize, rgb.into_raw())
}

/// Turn a grid back into something the `image` crate can encode.
pub fn grid_to_image(grid: &PixelGrid) -> Result<RgbImage> {
    let (height, width) = grid.dimensions();
    if height > u32::max_value() as usize || width > u32::max_value() as usize {
        return Err(CarveError::TooLarge { height, width });
    }
    RgbImage::from_raw(width as u32, height as u32, grid.as_raw().to_vec())
        .ok_or(CarveError::TooLarge { height, width })
}

/// Load an image of any supported kind.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    let path = path.as_ref();
    if is_bin(path) {
        load_bin(path)
    } else {
        grid_from_image(&image::open(path)?)
    }
}

/// Save an image; the extension picks the format.
pub fn save_image<P: AsRef<Path>>(path: P, grid: &PixelGrid) -> Result<()> {
    let path = path.as_ref();
    if is_bin(path) {
        save_bin(path, grid)
    } else {
        grid_to_image(grid)?.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_ignores_case() {
        assert!(is_bin("a/b/img0.bin"));
        assert!(is_bin("IMG.BIN"));
        assert!(!is_bin("img.png"));
        assert!(!is_bin("bin"));
    }

    #[test]
    fn conversions_must_point_the_right_way() {
        assert!(check_direction(Direction::ToBin, "a.png", "b.bin").is_ok());
        assert!(check_direction(Direction::FromBin, "a.bin", "b.png").is_ok());
        assert!(check_direction(Direction::ToBin, "a.png", "b.png").is_err());
        assert!(check_direction(Direction::ToBin, "a.bin", "b.bin").is_err());
        assert!(check_direction(Direction::FromBin, "a.bin", "b.bin").is_err());
        match check_direction(Direction::FromBin, "a.png", "b.png") {
            Err(CarveError::Config(msg)) => assert!(msg.contains("is not a .bin")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn grids_and_images_agree_on_layout() {
        let mut grid = PixelGrid::new(2, 3);
        grid.set_pixel(1, 2, [9, 8, 7]).unwrap();
        let img = grid_to_image(&grid).unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(*img.get_pixel(2, 1), image::Rgb([9, 8, 7]));
        let back = grid_from_image(&DynamicImage::ImageRgb8(img)).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn png_files_load_as_grids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let grid = PixelGrid::filled(4, 2, [1, 128, 255]);
        save_image(&path, &grid).unwrap();
        assert_eq!(load_image(&path).unwrap(), grid);
    }
}
