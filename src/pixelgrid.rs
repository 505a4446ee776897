// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The RGB raster every stage reads from and writes to.
//!
//! A `PixelGrid` is an owned, row-major buffer of interleaved RGB
//! bytes.  The index math lives here and nowhere else; callers get
//! bounds-checked `get_pixel`/`set_pixel`, plus `(row, col)` indexing
//! that yields the three channels of one pixel as a slice.

use crate::errors::{CarveError, Result};
use std::ops::{Index, IndexMut};

/// Bytes per pixel.
pub const CHANNELS: usize = 3;

/// An owned RGB image, `height` rows of `width` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    height: usize,
    width: usize,
    raster: Vec<u8>,
}

impl PixelGrid {
    /// Allocate a black grid.  Zero-sized grids are permitted here;
    /// the carving stages are the ones that refuse them.
    pub fn new(height: usize, width: usize) -> Self {
        PixelGrid {
            height,
            width,
            raster: vec![0; height * width * CHANNELS],
        }
    }

    /// Wrap an existing row-major RGB buffer.
    pub fn from_raw(height: usize, width: usize, raster: Vec<u8>) -> Result<Self> {
        let expected = height * width * CHANNELS;
        if raster.len() != expected {
            return Err(CarveError::RasterSize {
                expected,
                actual: raster.len(),
            });
        }
        Ok(PixelGrid {
            height,
            width,
            raster,
        })
    }

    /// A grid where every pixel is the same color.
    pub fn filled(height: usize, width: usize, rgb: [u8; 3]) -> Self {
        let raster = rgb
            .iter()
            .cycle()
            .take(height * width * CHANNELS)
            .cloned()
            .collect();
        PixelGrid {
            height,
            width,
            raster,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`, in that order.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        (row * self.width + col) * CHANNELS
    }

    fn check(&self, row: usize, col: usize, channel: usize) -> Result<()> {
        if row < self.height && col < self.width && channel < CHANNELS {
            Ok(())
        } else {
            Err(CarveError::PixelOutOfBounds {
                row,
                col,
                channel,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Read one channel of one pixel.
    pub fn get_pixel(&self, row: usize, col: usize, channel: usize) -> Result<u8> {
        self.check(row, col, channel)?;
        Ok(self.raster[self.offset(row, col) + channel])
    }

    /// Write all three channels of one pixel.
    pub fn set_pixel(&mut self, row: usize, col: usize, rgb: [u8; 3]) -> Result<()> {
        self.check(row, col, 0)?;
        let start = self.offset(row, col);
        self.raster[start..start + CHANNELS].copy_from_slice(&rgb);
        Ok(())
    }

    /// One row of interleaved RGB bytes.
    pub fn row(&self, row: usize) -> &[u8] {
        let start = self.offset(row, 0);
        &self.raster[start..start + self.width * CHANNELS]
    }

    /// One row of interleaved RGB bytes, mutably.
    pub fn row_mut(&mut self, row: usize) -> &mut [u8] {
        let start = self.offset(row, 0);
        let len = self.width * CHANNELS;
        &mut self.raster[start..start + len]
    }

    /// The raw raster, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.raster
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.raster
    }

    /// Surrender the raster.
    pub fn into_raw(self) -> Vec<u8> {
        self.raster
    }
}

impl Index<(usize, usize)> for PixelGrid {
    type Output = [u8];

    /// The channels of the pixel at `(row, col)`.  Panics out of
    /// bounds, like any slice index.
    fn index(&self, (row, col): (usize, usize)) -> &[u8] {
        assert!(row < self.height && col < self.width);
        let start = self.offset(row, col);
        &self.raster[start..start + CHANNELS]
    }
}

impl IndexMut<(usize, usize)> for PixelGrid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut [u8] {
        assert!(row < self.height && col < self.width);
        let start = self.offset(row, col);
        &mut self.raster[start..start + CHANNELS]
    }
}
