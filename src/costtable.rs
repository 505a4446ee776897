// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam cost table
//!
//! Dynamic programming over an energy map: each cell holds the least
//! total energy of any connected path from the top row down to that
//! cell.  The first row is the energy itself; every later row is its
//! own energy plus the cheapest of the (up to) three cells above it.
//! Unlike the energy pass, nothing wraps here: a cell on the left edge
//! has only two candidate parents.

use crate::energy::EnergyMap;
use crate::errors::{CarveError, Result};
use crate::pixelgrid::CHANNELS;
use crate::twodmap::TwoDimensionalMap;
use log::debug;
use std::ops::Index;

/// Cumulative minimum seam costs, one per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct CostTable {
    costs: TwoDimensionalMap<f64>,
}

// The cheapest of the in-bounds cells at `col - 1`, `col`, `col + 1`.
#[inline]
fn min_parent(above: &[f64], col: usize) -> f64 {
    let lo = col.saturating_sub(1);
    let hi = (col + 1).min(above.len() - 1);
    above[lo..=hi]
        .iter()
        .cloned()
        .fold(std::f64::INFINITY, f64::min)
}

impl CostTable {
    /// Build the table from raw, row-major energies.  This is the
    /// whole dynamic program; `compute_cost_table` just feeds it the
    /// energies of a map.
    pub fn from_energies(height: usize, width: usize, energies: &[f64]) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(CarveError::EmptyGrid { height, width });
        }
        if energies.len() != height * width {
            return Err(CarveError::RasterSize {
                expected: height * width,
                actual: energies.len(),
            });
        }

        let mut costs = TwoDimensionalMap::new(height, width);
        costs.row_mut(0).copy_from_slice(&energies[..width]);

        // Row i depends only on row i - 1, so walk down the table,
        // borrowing the two rows side by side.
        for (row, erow) in energies.chunks(width).enumerate().skip(1) {
            let (above, current) = costs.split_rows_mut(row);
            for (col, cell) in current.iter_mut().enumerate() {
                *cell = erow[col] + min_parent(above, col);
            }
        }
        Ok(CostTable { costs })
    }

    pub fn height(&self) -> usize {
        self.costs.height
    }

    pub fn width(&self) -> usize {
        self.costs.width
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.costs.height, self.costs.width)
    }

    /// Checked read of one cost.
    pub fn cost(&self, row: usize, col: usize) -> Option<f64> {
        self.costs.get(row, col)
    }

    /// One full row of costs.
    pub fn row(&self, row: usize) -> &[f64] {
        self.costs.row(row)
    }

    /// The last row, where every complete seam ends.
    pub fn bottom_row(&self) -> &[f64] {
        self.costs.row(self.costs.height - 1)
    }
}

impl Index<(usize, usize)> for CostTable {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.costs[(row, col)]
    }
}

/// Given an energy map, build the table of minimum cumulative seam
/// costs.
pub fn compute_cost_table(energy: &EnergyMap) -> Result<CostTable> {
    let (height, width) = energy.dimensions();
    debug!("building {}x{} cost table", height, width);
    let energies: Vec<f64> = energy
        .as_grid()
        .as_raw()
        .chunks(CHANNELS)
        .map(|p| f64::from(p[0]))
        .collect();
    CostTable::from_energies(height, width, &energies)
}
