// src/surface/smooth.rs

use crate::model::Mesh;
use crate::utils::geometry::add;

/// Laplacian smoothing: each vertex moves to the unweighted average of
/// itself and every vertex it shares a triangle with. The adjacency is
/// built once and reused across iterations; triangle topology is never
/// touched. `iterations == 0` leaves the mesh byte-identical, normals
/// included. After any real pass the normals are recomputed from the
/// final positions.
pub fn smooth(mesh: &mut Mesh, iterations: u32) {
    if iterations == 0 || mesh.vertices.is_empty() {
        return;
    }

    let adjacency = build_adjacency(mesh);

    for _ in 0..iterations {
        let current = mesh.vertices.clone();
        for (i, neighbors) in adjacency.iter().enumerate() {
            if neighbors.is_empty() {
                continue;
            }
            let mut sum = current[i];
            for &j in neighbors {
                sum = add(sum, current[j as usize]);
            }
            let w = (neighbors.len() + 1) as f64;
            mesh.vertices[i] = [sum[0] / w, sum[1] / w, sum[2] / w];
        }
    }

    mesh.recompute_normals();
}

/// For each vertex, the distinct vertices sharing at least one triangle
/// with it. Neighbor lists keep first-seen order so smoothing stays
/// deterministic.
fn build_adjacency(mesh: &Mesh) -> Vec<Vec<u32>> {
    let mut adjacency = vec![Vec::new(); mesh.vertex_count()];
    for tri in &mesh.triangles {
        for &a in tri {
            for &b in tri {
                if a != b && !adjacency[a as usize].contains(&b) {
                    adjacency[a as usize].push(b);
                }
            }
        }
    }
    adjacency
}
