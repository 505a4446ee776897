// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given an image, calculate the dual-gradient energy of every pixel.
//! The gradient at a pixel is the difference between its two
//! neighbours along an axis; at the borders the neighbours wrap
//! around to the opposite edge, so there is no special-cased edge
//! formula.  The energy is the Euclidean combination of the
//! channel-summed squared gradients along both axes:
//!
//! ```text
//!   e(y,x) = sqrt(|Δx|² + |Δy|²)
//! ```
//!
//! The result is stored as a grayscale `PixelGrid`, scaled down by ten
//! and squeezed into a byte.

use crate::errors::{CarveError, Result};
use crate::pixelgrid::{PixelGrid, CHANNELS};
use crate::pixelpairs::squared_gradient;
use log::debug;

/// The previous index along an axis of length `len`, wrapping from
/// the first index to the last.
#[inline]
pub fn wrap_prev(i: usize, len: usize) -> usize {
    (i + len - 1) % len
}

/// The next index along an axis of length `len`, wrapping from the
/// last index to the first.
#[inline]
pub fn wrap_next(i: usize, len: usize) -> usize {
    (i + 1) % len
}

/// Scale a raw energy into the byte stored in the map: divide by ten,
/// drop the fraction, then keep the low eight bits.  Values of 2560
/// and above wrap around rather than saturate.
#[inline]
pub fn quantize(energy: f64) -> u8 {
    (energy / 10.0) as u32 as u8
}

/// The unscaled dual-gradient energy of one pixel.  Out-of-range
/// coordinates are a programming error and panic.
pub fn pixel_energy(grid: &PixelGrid, row: usize, col: usize) -> f64 {
    let (height, width) = grid.dimensions();
    let ex = squared_gradient(
        &grid[(row, wrap_next(col, width))],
        &grid[(row, wrap_prev(col, width))],
    );
    let ey = squared_gradient(
        &grid[(wrap_next(row, height), col)],
        &grid[(wrap_prev(row, height), col)],
    );
    f64::from(ex + ey).sqrt()
}

/// The per-pixel energy of an image.  It shares the `PixelGrid`
/// representation so that it can be written out like any other image;
/// all three channels of a pixel carry the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnergyMap {
    grid: PixelGrid,
}

impl EnergyMap {
    /// Treat an existing grayscale grid as an energy map.  Only the
    /// first channel is ever read.
    pub fn from_grid(grid: PixelGrid) -> Self {
        EnergyMap { grid }
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// The stored (scaled) energy at `(row, col)`.
    pub fn energy(&self, row: usize, col: usize) -> u8 {
        self.grid[(row, col)][0]
    }

    /// The energy map as an image.
    pub fn as_grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }
}

// Fill a band of the output raster, starting at `first_row`.  The
// band must be a whole number of rows.
fn fill_band(grid: &PixelGrid, first_row: usize, band: &mut [u8]) {
    let width = grid.width();
    for (i, out) in band.chunks_mut(CHANNELS).enumerate() {
        let (row, col) = (first_row + i / width, i % width);
        let scaled = quantize(pixel_energy(grid, row, col));
        for c in out.iter_mut() {
            *c = scaled;
        }
    }
}

#[cfg(not(feature = "threaded"))]
fn fill_energy(grid: &PixelGrid, out: &mut [u8]) -> Result<()> {
    fill_band(grid, 0, out);
    Ok(())
}

// Rows are independent of one another, so carve the output into one
// band of rows per CPU and fill them concurrently.
#[cfg(feature = "threaded")]
fn fill_energy(grid: &PixelGrid, out: &mut [u8]) -> Result<()> {
    let (height, width) = grid.dimensions();
    let workers = num_cpus::get().max(1);
    let rows_per_band = ((height + workers - 1) / workers).max(1);
    let band_len = rows_per_band * width * CHANNELS;
    crossbeam::scope(|s| {
        for (band, chunk) in out.chunks_mut(band_len).enumerate() {
            s.spawn(move |_| fill_band(grid, band * rows_per_band, chunk));
        }
    })
    .map_err(|_| CarveError::WorkerPanicked)
}

/// Compute the energy of every pixel in an image.  Fails on a grid
/// with no rows or no columns.
pub fn compute_energy(grid: &PixelGrid) -> Result<EnergyMap> {
    let (height, width) = grid.dimensions();
    if grid.is_empty() {
        return Err(CarveError::EmptyGrid { height, width });
    }
    debug!("computing energy for {}x{} image", height, width);
    let mut target = PixelGrid::new(height, width);
    fill_energy(grid, target.as_raw_mut())?;
    Ok(EnergyMap::from_grid(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 3] = [255, 255, 255];

    fn energies(map: &EnergyMap) -> Vec<u8> {
        map.as_grid().as_raw().chunks(CHANNELS).map(|p| p[0]).collect()
    }

    #[test]
    fn wrap_helpers_are_circular() {
        assert_eq!(wrap_prev(0, 5), 4);
        assert_eq!(wrap_prev(3, 5), 2);
        assert_eq!(wrap_next(4, 5), 0);
        assert_eq!(wrap_next(1, 5), 2);
        assert_eq!(wrap_prev(0, 1), 0);
        assert_eq!(wrap_next(0, 1), 0);
    }

    #[test]
    fn quantize_truncates_then_wraps() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(9.99), 0);
        assert_eq!(quantize(441.67), 44);
        assert_eq!(quantize(2559.9), 255);
        assert_eq!(quantize(2560.0), 0);
        assert_eq!(quantize(2605.0), 4);
    }

    #[test]
    fn uniform_image_has_no_energy() {
        let grid = PixelGrid::filled(4, 5, [90, 17, 201]);
        let map = compute_energy(&grid).unwrap();
        assert_eq!(map.dimensions(), (4, 5));
        assert!(map.as_grid().as_raw().iter().all(|&e| e == 0));
    }

    #[test]
    fn single_row_wraps_horizontally() {
        let mut grid = PixelGrid::new(1, 3);
        grid.set_pixel(0, 1, [100, 0, 0]).unwrap();
        grid.set_pixel(0, 2, [200, 0, 0]).unwrap();
        let map = compute_energy(&grid).unwrap();
        assert_eq!(energies(&map), vec![10, 20, 10]);
    }

    #[test]
    fn bright_centre_lights_up_its_neighbours() {
        let mut grid = PixelGrid::new(3, 3);
        grid.set_pixel(1, 1, WHITE).unwrap();
        let map = compute_energy(&grid).unwrap();
        assert_eq!(energies(&map), vec![0, 44, 0, 44, 0, 44, 0, 44, 0]);
    }

    #[test]
    fn all_channels_carry_the_same_value() {
        let mut grid = PixelGrid::new(3, 3);
        grid.set_pixel(1, 1, [255, 0, 40]).unwrap();
        let map = compute_energy(&grid).unwrap();
        assert!(map
            .as_grid()
            .as_raw()
            .chunks(CHANNELS)
            .all(|p| p[0] == p[1] && p[1] == p[2]));
        assert_eq!(map.energy(0, 1), map.as_grid()[(0, 1)][2]);
    }

    #[test]
    fn single_column_has_no_horizontal_gradient() {
        let mut grid = PixelGrid::new(3, 1);
        grid.set_pixel(0, 0, [30, 0, 0]).unwrap();
        // Only the vertical term survives: neighbours of row 1 are rows
        // 0 and 2, so |Δy|² = 30² and the energy is 3.
        let map = compute_energy(&grid).unwrap();
        assert_eq!(energies(&map), vec![0, 3, 3]);
    }

    #[test]
    fn two_wide_images_cancel_horizontally() {
        let mut grid = PixelGrid::new(1, 2);
        grid.set_pixel(0, 0, WHITE).unwrap();
        let map = compute_energy(&grid).unwrap();
        assert_eq!(energies(&map), vec![0, 0]);
    }

    // Heights that don't divide evenly into one band per CPU leave a
    // short final band; it must come out the same as the rest.
    #[cfg(feature = "threaded")]
    #[test]
    fn threaded_bands_match_the_serial_formula() {
        for &(height, width) in &[(17, 5), (33, 2), (2, 40), (1, 7), (61, 3)] {
            let mut grid = PixelGrid::new(height, width);
            for row in 0..height {
                for col in 0..width {
                    let v = (row * 37 + col * 11) as u8;
                    grid.set_pixel(row, col, [v, v.wrapping_mul(3), 255 - v]).unwrap();
                }
            }
            let map = compute_energy(&grid).unwrap();
            for row in 0..height {
                for col in 0..width {
                    assert_eq!(
                        map.energy(row, col),
                        quantize(pixel_energy(&grid, row, col)),
                        "({}, {}) of {}x{}",
                        row,
                        col,
                        height,
                        width
                    );
                }
            }
        }
    }

    #[test]
    fn empty_grid_is_rejected() {
        match compute_energy(&PixelGrid::new(0, 4)) {
            Err(CarveError::EmptyGrid {
                height: 0,
                width: 4,
            }) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert!(compute_energy(&PixelGrid::new(3, 0)).is_err());
    }
}
