// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Recover the cheapest seam from a finished cost table.
//!
//! Start at the cheapest cell of the bottom row and climb, at each row
//! choosing among the (up to) three cells above the current one.  The
//! neighbour choice is deliberately lopsided: the centre is the
//! default, the left cell displaces it only when strictly cheaper, and
//! the right cell displaces whichever is winning only when strictly
//! cheaper still.  So the centre beats the left on a tie, and the
//! right never wins a tie.  Output must be reproducible, so this is
//! not a symmetric argmin.

use crate::costtable::CostTable;
use crate::errors::{CarveError, Result};
use log::debug;
use std::ops::Deref;

/// One column index per row, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeamPath(Vec<usize>);

impl SeamPath {
    /// Wrap a list of columns.  No checks; see `validate`.
    pub fn new(columns: Vec<usize>) -> Self {
        SeamPath(columns)
    }

    /// Check the path against an image of the given size: one entry per
    /// row, every entry a real column, and no entry more than one column
    /// away from the one above it.
    pub fn validate(&self, height: usize, width: usize) -> Result<()> {
        if self.0.len() != height {
            return Err(CarveError::SeamLength {
                expected: height,
                actual: self.0.len(),
            });
        }
        for (row, &col) in self.0.iter().enumerate() {
            if col >= width {
                return Err(CarveError::SeamOutOfRange { row, col, width });
            }
        }
        for (row, pair) in self.0.windows(2).enumerate() {
            let (prev, col) = (pair[0], pair[1]);
            if (prev as isize - col as isize).abs() > 1 {
                return Err(CarveError::SeamDisconnected {
                    row: row + 1,
                    prev,
                    col,
                });
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl Deref for SeamPath {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

/// The column of the strictly smallest value; the first one wins a tie.
fn first_minimum(row: &[f64]) -> usize {
    let mut best = 0;
    for (col, &cost) in row.iter().enumerate().skip(1) {
        if cost < row[best] {
            best = col;
        }
    }
    best
}

/// Given the seam's column `center` in the row below, choose its
/// column in `row` (the cost-table row above).
pub fn best_neighbor(row: &[f64], center: usize) -> usize {
    let mut best_col = center;
    let mut min_cost = row[center];

    if center > 0 && row[center - 1] < min_cost {
        best_col = center - 1;
        min_cost = row[center - 1];
    }

    if center + 1 < row.len() && row[center + 1] < min_cost {
        best_col = center + 1;
    }

    best_col
}

/// Walk the cost table from the cheapest bottom cell to the top,
/// returning the seam's column in every row.
pub fn recover_seam(table: &CostTable) -> SeamPath {
    let height = table.height();
    let mut seam = vec![0; height];

    let mut col = first_minimum(table.bottom_row());
    debug!("cheapest seam ends at column {}, cost {}", col, table[(height - 1, col)]);
    seam[height - 1] = col;

    for row in (0..height - 1).rev() {
        col = best_neighbor(table.row(row), col);
        seam[row] = col;
    }
    SeamPath(seam)
}
