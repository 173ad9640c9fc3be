// src/pipeline.rs

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::RenderConfig;
use crate::io::{self, CubeError};
use crate::model::{Mesh, ParsedVolume};
use crate::rendering::scene::{build_bonds, build_spheres, CylinderSpec, SphereSpec};
use crate::surface;

/// Everything the exporter needs for one input file.
pub struct MolecularScene {
    pub mesh: Mesh,
    pub spheres: Vec<SphereSpec>,
    pub bonds: Vec<CylinderSpec>,
}

/// Run the numeric stages for one parsed volume: extract, smooth, place.
/// An empty isosurface is a valid degenerate result; the scene still
/// carries the atom spheres and bonds, and the caller decides what to do
/// with the empty mesh (typically: skip the geometry export).
pub fn build_scene(volume: &ParsedVolume, config: &RenderConfig) -> MolecularScene {
    let mut mesh = surface::extract(&volume.grid, config.isosurface_value);
    if mesh.is_empty() {
        log::warn!(
            "empty isosurface at threshold {}",
            config.isosurface_value
        );
    } else {
        surface::smooth(&mut mesh, config.filter_iterations);
    }

    MolecularScene {
        mesh,
        spheres: build_spheres(&volume.atoms),
        bonds: build_bonds(&volume.atoms),
    }
}

pub fn process_file<P: AsRef<Path>>(
    path: P,
    config: &RenderConfig,
) -> Result<MolecularScene, CubeError> {
    let volume = io::load_volume(path)?;
    Ok(build_scene(&volume, config))
}

/// Process a batch of cube files in sorted path order, so animation
/// frame numbering is deterministic no matter how the paths were
/// discovered. Runs share nothing, so they go wide across the rayon
/// pool; one file failing to parse never touches the others.
pub fn process_batch(
    paths: &[PathBuf],
    config: &RenderConfig,
) -> Vec<(PathBuf, Result<MolecularScene, CubeError>)> {
    let mut sorted: Vec<PathBuf> = paths.to_vec();
    sorted.sort();

    sorted
        .into_par_iter()
        .map(|path| {
            let result = process_file(&path, config);
            if let Err(ref e) = result {
                log::error!("{}: {}", path.display(), e);
            }
            (path, result)
        })
        .collect()
}
