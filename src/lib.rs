// src/lib.rs
//! Turn Gaussian cube files into renderable geometry: an isosurface
//! triangle mesh of the sampled scalar field plus sphere/cylinder
//! placements for the atoms and their bonds.

pub mod config;
pub mod io;
pub mod model;
pub mod pipeline;
pub mod rendering;
pub mod surface;
pub mod utils;

pub use config::RenderConfig;
pub use io::{load_volume, CubeError};
pub use model::{Atom, Mesh, ParsedVolume, ScalarGrid};
pub use pipeline::{build_scene, process_batch, process_file, MolecularScene};
