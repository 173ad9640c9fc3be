// src/rendering/export.rs

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::model::Mesh;

/// Write the mesh in Wavefront OBJ form: vertex positions, vertex
/// normals, and faces indexing both (OBJ indices are 1-based).
pub fn write_obj<P: AsRef<Path>>(path: P, mesh: &Mesh) -> io::Result<()> {
    let file = File::create(path.as_ref())?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# cubemesh isosurface")?;
    for v in &mesh.vertices {
        writeln!(out, "v {:.6} {:.6} {:.6}", v[0], v[1], v[2])?;
    }
    for n in &mesh.normals {
        writeln!(out, "vn {:.6} {:.6} {:.6}", n[0], n[1], n[2])?;
    }
    for t in &mesh.triangles {
        writeln!(
            out,
            "f {0}//{0} {1}//{1} {2}//{2}",
            t[0] + 1,
            t[1] + 1,
            t[2] + 1
        )?;
    }
    out.flush()?;

    log::info!(
        "wrote {} vertices / {} triangles to {}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        path.as_ref().display()
    );
    Ok(())
}

/// Scoped handle on the intermediate geometry file handed to the
/// external renderer. With `cleanup` set the file is removed when the
/// guard drops, on every exit path; without it the file is left alone.
pub struct ScopedArtifact {
    path: PathBuf,
    cleanup: bool,
}

impl ScopedArtifact {
    pub fn new<P: Into<PathBuf>>(path: P, cleanup: bool) -> Self {
        Self {
            path: path.into(),
            cleanup,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Give up cleanup and hand the path back to the caller.
    pub fn keep(mut self) -> PathBuf {
        self.cleanup = false;
        self.path.clone()
    }
}

impl Drop for ScopedArtifact {
    fn drop(&mut self) {
        if !self.cleanup {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.path) {
            // Nothing was written on failed runs; that is fine.
            if e.kind() != io::ErrorKind::NotFound {
                log::warn!("could not remove {}: {}", self.path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cubemesh_{}_{}.obj", tag, std::process::id()))
    }

    fn tiny_mesh() -> Mesh {
        let mut mesh = Mesh {
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            normals: vec![],
            triangles: vec![[0, 1, 2]],
        };
        mesh.recompute_normals();
        mesh
    }

    #[test]
    fn test_write_obj_records() {
        let path = temp_path("records");
        write_obj(&path, &tiny_mesh()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 3);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 3);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 1);
        // OBJ faces are 1-based
        assert!(text.contains("f 1//1 2//2 3//3"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_scoped_artifact_removes_file() {
        let path = temp_path("scoped");
        {
            let artifact = ScopedArtifact::new(&path, true);
            write_obj(artifact.path(), &tiny_mesh()).unwrap();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_scoped_artifact_keep() {
        let path = temp_path("kept");
        let artifact = ScopedArtifact::new(&path, true);
        write_obj(artifact.path(), &tiny_mesh()).unwrap();

        let kept = artifact.keep();
        assert!(kept.exists());
        std::fs::remove_file(&kept).unwrap();
    }

    #[test]
    fn test_scoped_artifact_tolerates_missing_file() {
        // Guard created, then the run fails before anything is written
        let _artifact = ScopedArtifact::new(temp_path("never_written"), true);
    }
}
