use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field, stored row-major.  It holds
/// whatever the current stage needs: cumulative seam costs, for
/// example.  Addressing is always `(row, col)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub height: usize,
    pub width: usize,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map filled with the content type's default.
    pub fn new(height: usize, width: usize) -> Self {
        TwoDimensionalMap {
            height,
            width,
            data: vec![P::default(); height * width],
        }
    }

    // Keep the index math in one place and never, ever mess with it.
    fn get_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height && col < self.width);
        row * self.width + col
    }

    /// Checked read of a single cell.
    pub fn get(&self, row: usize, col: usize) -> Option<P> {
        if row < self.height && col < self.width {
            Some(self.data[self.get_index(row, col)])
        } else {
            None
        }
    }

    /// A whole row, as a slice.
    pub fn row(&self, row: usize) -> &[P] {
        let start = self.get_index(row, 0);
        &self.data[start..start + self.width]
    }

    /// Borrow row `row - 1` and row `row` at the same time, the first
    /// immutably and the second mutably.  This is the shape every
    /// top-down dynamic programming pass wants.
    pub fn split_rows_mut(&mut self, row: usize) -> (&[P], &mut [P]) {
        let width = self.width;
        let (above, rest) = self.data.split_at_mut(row * width);
        (&above[(row - 1) * width..], &mut rest[..width])
    }

    /// A whole row, mutably.
    pub fn row_mut(&mut self, row: usize) -> &mut [P] {
        let start = self.get_index(row, 0);
        let width = self.width;
        &mut self.data[start..start + width]
    }

    /// The raw cells, row-major.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }
}

impl<P: Default + Copy> Index<(usize, usize)> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, (row, col): (usize, usize)) -> &P {
        let index = self.get_index(row, col);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(usize, usize)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut P {
        let index = self.get_index(row, col);
        &mut self.data[index]
    }
}
