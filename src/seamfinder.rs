use crate::costtable::compute_cost_table;
use crate::energy::compute_energy;
use crate::errors::Result;
use crate::pixelgrid::PixelGrid;
use crate::seam::{recover_seam, SeamPath};

/// This trait defines how we will get seams from an image.  It's a
/// primitive interface, just enough to let the carver stay ignorant of
/// how a seam was chosen.
pub trait SeamFinder {
    /// Find the next top-to-bottom seam to remove from `image`.
    fn find_vertical_seam(&self, image: &PixelGrid) -> Result<SeamPath>;
}

/// The plain dual-gradient seam finder: energy map, cost table,
/// backtrack.
#[derive(Debug, Default, Clone, Copy)]
pub struct DualGradient;

impl SeamFinder for DualGradient {
    fn find_vertical_seam(&self, image: &PixelGrid) -> Result<SeamPath> {
        let energy = compute_energy(image)?;
        let table = compute_cost_table(&energy)?;
        Ok(recover_seam(&table))
    }
}
