// src/model/mesh.rs

use crate::utils::geometry::{add, cross, normalize, sub};
use serde::{Deserialize, Serialize};

/// Indexed triangle mesh. One normal per vertex; every triangle index
/// must reference an existing vertex. The extractor builds it, the
/// smoother moves vertex positions in place, nothing else mutates it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<[f64; 3]>,
    pub normals: Vec<[f64; 3]>,
    pub triangles: Vec<[u32; 3]>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// A degenerate (but valid) result: nothing crossed the threshold.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Rebuild per-vertex normals from the current positions.
    /// Face normals are accumulated unnormalized, so larger triangles
    /// weigh in proportionally to their area.
    pub fn recompute_normals(&mut self) {
        let mut acc = vec![[0.0; 3]; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let face = cross(sub(v1, v0), sub(v2, v0));

            for &i in tri {
                acc[i as usize] = add(acc[i as usize], face);
            }
        }

        self.normals = acc.into_iter().map(normalize).collect();
    }
}
