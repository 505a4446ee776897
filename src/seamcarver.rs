// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! Seam removal, and the driver that repeats
//! energy → cost table → seam → removal as many times as asked.

use crate::errors::{CarveError, Result};
use crate::pixelgrid::{PixelGrid, CHANNELS};
use crate::seam::SeamPath;
use crate::seamfinder::{DualGradient, SeamFinder};
use log::{debug, info, warn};

/// Build a new image one column narrower than `image`, leaving out the
/// seam's pixel in every row.  The source is untouched.
///
/// Fails if the seam is the wrong length, names a column that isn't
/// there, or if the image is only one column wide (there would be
/// nothing left).
pub fn remove_seam(image: &PixelGrid, seam: &SeamPath) -> Result<PixelGrid> {
    let (height, width) = image.dimensions();
    if width <= 1 {
        return Err(CarveError::TooNarrow { width });
    }
    if seam.len() != height {
        return Err(CarveError::SeamLength {
            expected: height,
            actual: seam.len(),
        });
    }

    let mut imgbuf = PixelGrid::new(height, width - 1);
    for (row, &cut) in seam.iter().enumerate() {
        if cut >= width {
            return Err(CarveError::SeamOutOfRange {
                row,
                col: cut,
                width,
            });
        }
        let (src, dst) = (image.row(row), imgbuf.row_mut(row));
        let split = cut * CHANNELS;
        dst[..split].copy_from_slice(&src[..split]);
        dst[split..].copy_from_slice(&src[split + CHANNELS..]);
    }
    Ok(imgbuf)
}

/// Holds the image being carved, replacing it with a narrower one on
/// every pass.
pub struct SeamCarver<F: SeamFinder = DualGradient> {
    image: PixelGrid,
    finder: F,
}

impl SeamCarver<DualGradient> {
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: PixelGrid) -> Self {
        SeamCarver::with_finder(image, DualGradient)
    }
}

impl<F: SeamFinder> SeamCarver<F> {
    /// Creates a SeamCarver that asks `finder` for its seams.
    pub fn with_finder(image: PixelGrid, finder: F) -> Self {
        SeamCarver { image, finder }
    }

    /// The image as carved so far.
    pub fn image(&self) -> &PixelGrid {
        &self.image
    }

    pub fn into_inner(self) -> PixelGrid {
        self.image
    }

    /// Remove one seam, returning it.  On failure the current image is
    /// left as it was.
    pub fn carve_once(&mut self) -> Result<SeamPath> {
        let seam = self.finder.find_vertical_seam(&self.image)?;
        debug!("removing seam {:?}", &seam[..]);
        self.image = remove_seam(&self.image, &seam)?;
        Ok(seam)
    }

    // This recalculates the entire energy map and cost table every
    // pass.  Only the columns near the removed seam actually change.

    /// Remove `seams` seams, calling `on_step(iteration, image)` after
    /// each one.  Refuses up front if that would leave no columns.
    pub fn carve<C>(&mut self, seams: usize, mut on_step: C) -> Result<()>
    where
        C: FnMut(usize, &PixelGrid) -> Result<()>,
    {
        let width = self.image.width();
        if seams >= width {
            warn!(
                "asked for {} seams from an image {} columns wide",
                seams, width
            );
            return Err(CarveError::TooNarrow { width });
        }
        for i in 0..seams {
            self.carve_once()?;
            let (height, width) = self.image.dimensions();
            info!("pass {}: image is now {}x{}", i, height, width);
            on_step(i, &self.image)?;
        }
        Ok(())
    }
}
