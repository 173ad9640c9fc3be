// src/io/mod.rs
pub mod cube;
pub mod error;

pub use error::CubeError;

use crate::model::ParsedVolume;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load_volume<P: AsRef<Path>>(path: P) -> Result<ParsedVolume, CubeError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let volume = cube::parse(BufReader::new(file))?;

    log::info!(
        "Finished reading cube file {} ({} atoms, {}x{}x{} grid)",
        path.display(),
        volume.atoms.len(),
        volume.grid.nx,
        volume.grid.ny,
        volume.grid.nz
    );

    Ok(volume)
}
