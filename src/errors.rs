// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while carving.
//!
//! Every stage of the pipeline is a pure transform, so every failure
//! is local to one carving iteration; the driver decides what to do
//! about it.

use failure::Fail;
use std::io;

/// The error type shared by every stage of the carver.
#[derive(Debug, Fail)]
pub enum CarveError {
    #[fail(display = "cannot process an empty grid ({}x{})", height, width)]
    EmptyGrid { height: usize, width: usize },

    #[fail(
        display = "pixel ({}, {}, channel {}) is outside a {}x{} grid",
        row, col, channel, height, width
    )]
    PixelOutOfBounds {
        row: usize,
        col: usize,
        channel: usize,
        height: usize,
        width: usize,
    },

    #[fail(display = "raster holds {} bytes, expected {}", actual, expected)]
    RasterSize { expected: usize, actual: usize },

    #[fail(display = "seam has {} entries, image has {} rows", actual, expected)]
    SeamLength { expected: usize, actual: usize },

    #[fail(display = "seam column {} in row {} is outside width {}", col, row, width)]
    SeamOutOfRange { row: usize, col: usize, width: usize },

    #[fail(
        display = "seam jumps from column {} to {} at row {}",
        prev, col, row
    )]
    SeamDisconnected { row: usize, prev: usize, col: usize },

    #[fail(display = "cannot remove a seam from an image {} column(s) wide", width)]
    TooNarrow { width: usize },

    #[fail(
        display = "{}x{} does not fit in a 16-bit image header",
        height, width
    )]
    TooLarge { height: usize, width: usize },

    #[fail(display = "image data truncated: wanted {} bytes, got {}", expected, actual)]
    Truncated { expected: usize, actual: usize },

    #[fail(display = "I/O error: {}", _0)]
    Io(#[cause] io::Error),

    #[fail(display = "image error: {}", _0)]
    Image(#[cause] image::ImageError),

    #[fail(display = "an energy worker thread panicked")]
    WorkerPanicked,

    #[fail(display = "configuration error: {}", _0)]
    Config(String),
}

impl From<io::Error> for CarveError {
    fn from(err: io::Error) -> Self {
        CarveError::Io(err)
    }
}

impl From<image::ImageError> for CarveError {
    fn from(err: image::ImageError) -> Self {
        CarveError::Image(err)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CarveError>;
