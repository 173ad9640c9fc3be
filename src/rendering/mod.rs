pub mod export;
pub mod scene;

pub use export::{write_obj, ScopedArtifact};
pub use scene::{build_bonds, build_spheres, CylinderSpec, SphereSpec};
