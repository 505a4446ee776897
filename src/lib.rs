// #![deny(missing_docs)]

//! Content-aware image narrowing by dual-gradient seam carving.
//!
//! One pass of the pipeline is
//! `PixelGrid → EnergyMap → CostTable → SeamPath → PixelGrid`, and the
//! result is one column narrower.  `SeamCarver` repeats it.

extern crate image;

pub mod errors;
pub use errors::{CarveError, Result};

pub mod twodmap;

pub mod pixelgrid;
pub use pixelgrid::PixelGrid;

pub mod pixelpairs;

pub mod energy;
pub use energy::{compute_energy, EnergyMap};

pub mod costtable;
pub use costtable::{compute_cost_table, CostTable};

pub mod seam;
pub use seam::{recover_seam, SeamPath};

pub mod seamfinder;
pub use seamfinder::{DualGradient, SeamFinder};

pub mod seamcarver;
pub use seamcarver::{remove_seam, SeamCarver};

pub mod binfile;
pub mod config;
pub mod convert;
