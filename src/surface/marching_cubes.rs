// src/surface/marching_cubes.rs

use std::collections::HashMap;

use nalgebra::{Matrix3, Vector3};

use crate::model::{Mesh, ScalarGrid};
use crate::surface::tables::{CORNER_OFFSETS, EDGE_ANCHORS, EDGE_TABLE, TRI_TABLE};
use crate::utils::geometry::{add, cross, dot, sub};

/// Extract the isosurface of `grid` at `threshold` as a triangle mesh.
///
/// A corner counts as inside when its value is >= threshold. Vertices on
/// edges shared between neighboring cells are emitted once, keyed by the
/// edge's lower grid corner and axis, so the scan order alone fixes the
/// output: extracting the same grid twice is bit-for-bit identical.
/// A threshold outside the sampled value range yields an empty mesh.
/// Cells stop at the grid boundary; the surface is open there.
pub fn extract(grid: &ScalarGrid, threshold: f64) -> Mesh {
    let mut mesh = Mesh::new();
    if grid.nx < 2 || grid.ny < 2 || grid.nz < 2 {
        return mesh;
    }

    let (lo, hi) = value_range(grid);
    if threshold < lo || threshold > hi {
        log::debug!(
            "threshold {} outside value range [{}, {}], empty isosurface",
            threshold,
            lo,
            hi
        );
        return mesh;
    }

    // Index-space gradients map to world space through the inverse
    // transpose of the step basis (columns = step vectors).
    let b = &grid.basis;
    let basis = Matrix3::new(
        b[0][0], b[1][0], b[2][0],
        b[0][1], b[1][1], b[2][1],
        b[0][2], b[1][2], b[2][2],
    );
    let normal_map = basis
        .try_inverse()
        .map(|m| m.transpose())
        .unwrap_or_else(Matrix3::identity);

    let mut cache: EdgeCache = HashMap::new();

    for ix in 0..grid.nx - 1 {
        for iy in 0..grid.ny - 1 {
            for iz in 0..grid.nz - 1 {
                march_cell(grid, threshold, [ix, iy, iz], &normal_map, &mut cache, &mut mesh);
            }
        }
    }

    orient_triangles(&mut mesh);
    mesh
}

// Edge identity: lower corner grid indices + axis the edge runs along.
type EdgeCache = HashMap<([usize; 3], usize), u32>;

fn march_cell(
    grid: &ScalarGrid,
    threshold: f64,
    cell: [usize; 3],
    normal_map: &Matrix3<f64>,
    cache: &mut EdgeCache,
    mesh: &mut Mesh,
) {
    let mut case = 0usize;
    for (i, off) in CORNER_OFFSETS.iter().enumerate() {
        let v = grid.value(cell[0] + off[0], cell[1] + off[1], cell[2] + off[2]);
        if v < threshold {
            case |= 1 << i;
        }
    }

    let crossed = EDGE_TABLE[case];
    if crossed == 0 {
        return;
    }

    let mut edge_vertex = [0u32; 12];
    for (e, vertex) in edge_vertex.iter_mut().enumerate() {
        if crossed & (1 << e) != 0 {
            *vertex = vertex_on_edge(grid, threshold, cell, e, normal_map, cache, mesh);
        }
    }

    for tri in TRI_TABLE[case].chunks(3) {
        if tri[0] < 0 {
            break;
        }
        mesh.triangles.push([
            edge_vertex[tri[0] as usize],
            edge_vertex[tri[1] as usize],
            edge_vertex[tri[2] as usize],
        ]);
    }
}

fn vertex_on_edge(
    grid: &ScalarGrid,
    threshold: f64,
    cell: [usize; 3],
    edge: usize,
    normal_map: &Matrix3<f64>,
    cache: &mut EdgeCache,
    mesh: &mut Mesh,
) -> u32 {
    let (anchor, axis) = EDGE_ANCHORS[edge];
    let a = [cell[0] + anchor[0], cell[1] + anchor[1], cell[2] + anchor[2]];
    if let Some(&idx) = cache.get(&(a, axis)) {
        return idx;
    }

    let mut b = a;
    b[axis] += 1;

    // Interpolate lower corner -> upper corner, so both cells flanking
    // the edge land on exactly the same point.
    let v0 = grid.value(a[0], a[1], a[2]);
    let v1 = grid.value(b[0], b[1], b[2]);
    let t = if v1 == v0 {
        0.5
    } else {
        ((threshold - v0) / (v1 - v0)).clamp(0.0, 1.0)
    };

    let mut fidx = [a[0] as f64, a[1] as f64, a[2] as f64];
    fidx[axis] += t;
    let position = grid.point(fidx[0], fidx[1], fidx[2]);

    // Normal = field gradient, pointing from low toward high values.
    let g0 = index_gradient(grid, a);
    let g1 = index_gradient(grid, b);
    let world = normal_map * (g0 * (1.0 - t) + g1 * t);
    let normal = if world.norm() > 1e-12 {
        let n = world.normalize();
        [n.x, n.y, n.z]
    } else {
        [0.0, 0.0, 1.0]
    };

    let idx = mesh.vertices.len() as u32;
    mesh.vertices.push(position);
    mesh.normals.push(normal);
    cache.insert((a, axis), idx);
    idx
}

/// Central differences at a grid node, one-sided at the boundary.
fn index_gradient(grid: &ScalarGrid, node: [usize; 3]) -> Vector3<f64> {
    Vector3::new(
        diff_along(grid, node, 0),
        diff_along(grid, node, 1),
        diff_along(grid, node, 2),
    )
}

fn diff_along(grid: &ScalarGrid, node: [usize; 3], axis: usize) -> f64 {
    let n = [grid.nx, grid.ny, grid.nz][axis];
    let mut lo = node;
    let mut hi = node;
    if node[axis] > 0 {
        lo[axis] -= 1;
    }
    if node[axis] + 1 < n {
        hi[axis] += 1;
    }
    let span = (hi[axis] - lo[axis]) as f64;
    if span == 0.0 {
        return 0.0;
    }
    (grid.value(hi[0], hi[1], hi[2]) - grid.value(lo[0], lo[1], lo[2])) / span
}

/// Flip any triangle whose face normal opposes its averaged vertex
/// normals, so winding stays consistent with the gradient direction.
fn orient_triangles(mesh: &mut Mesh) {
    for tri in mesh.triangles.iter_mut() {
        let v0 = mesh.vertices[tri[0] as usize];
        let v1 = mesh.vertices[tri[1] as usize];
        let v2 = mesh.vertices[tri[2] as usize];
        let face = cross(sub(v1, v0), sub(v2, v0));

        let avg = add(
            add(
                mesh.normals[tri[0] as usize],
                mesh.normals[tri[1] as usize],
            ),
            mesh.normals[tri[2] as usize],
        );

        if dot(face, avg) < 0.0 {
            tri.swap(1, 2);
        }
    }
}

fn value_range(grid: &ScalarGrid) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in &grid.data {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::geometry::calculate_distance;

    fn grid_from_fn<F: Fn(f64, f64, f64) -> f64>(n: usize, step: f64, f: F) -> ScalarGrid {
        let mut data = Vec::with_capacity(n * n * n);
        for ix in 0..n {
            for iy in 0..n {
                for iz in 0..n {
                    data.push(f(ix as f64 * step, iy as f64 * step, iz as f64 * step));
                }
            }
        }
        ScalarGrid {
            origin: [0.0, 0.0, 0.0],
            basis: [[step, 0.0, 0.0], [0.0, step, 0.0], [0.0, 0.0, step]],
            nx: n,
            ny: n,
            nz: n,
            data,
        }
    }

    #[test]
    fn test_all_zero_grid_gives_empty_mesh() {
        let grid = grid_from_fn(4, 1.0, |_, _, _| 0.0);
        let mesh = extract(&grid, 0.5);
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_threshold_above_range_gives_empty_mesh() {
        let grid = grid_from_fn(4, 1.0, |x, y, z| x + y + z);
        assert!(extract(&grid, 100.0).is_empty());
        assert!(extract(&grid, -100.0).is_empty());
    }

    #[test]
    fn test_single_hot_sample_bounded() {
        let mut grid = grid_from_fn(4, 1.0, |_, _, _| 0.0);
        grid.data[(1 * 4 + 1) * 4 + 1] = 1.0;
        let mesh = extract(&grid, 0.5);

        assert!(!mesh.is_empty());
        // Every crossing sits on an edge incident to the hot sample at
        // (1, 1, 1), so all vertices stay inside its 8 surrounding cells.
        for v in &mesh.vertices {
            for c in v {
                assert!(*c >= -1e-9 && *c <= 2.0 + 1e-9, "vertex {:?}", v);
            }
            assert!(calculate_distance(*v, [1.0, 1.0, 1.0]) <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let grid = grid_from_fn(12, 0.5, |x, y, z| {
            1.5 - calculate_distance([x, y, z], [2.75, 2.75, 2.75])
        });
        let a = extract(&grid, 0.0);
        let b = extract(&grid, 0.0);
        assert_eq!(a.vertices, b.vertices);
        assert_eq!(a.normals, b.normals);
        assert_eq!(a.triangles, b.triangles);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_no_duplicate_vertices_on_shared_edges() {
        let grid = grid_from_fn(8, 1.0, |x, y, z| {
            3.0 - calculate_distance([x, y, z], [3.5, 3.5, 3.5])
        });
        let mesh = extract(&grid, 0.0);
        assert!(!mesh.is_empty());

        for (i, a) in mesh.vertices.iter().enumerate() {
            for b in mesh.vertices.iter().skip(i + 1) {
                assert!(
                    calculate_distance(*a, *b) > 1e-12,
                    "coincident vertices {:?}",
                    a
                );
            }
        }
    }

    #[test]
    fn test_triangle_indices_in_range() {
        let grid = grid_from_fn(6, 1.0, |x, y, z| {
            2.0 - calculate_distance([x, y, z], [2.5, 2.5, 2.5])
        });
        let mesh = extract(&grid, 0.0);
        assert_eq!(mesh.normals.len(), mesh.vertices.len());
        for tri in &mesh.triangles {
            for &i in tri {
                assert!((i as usize) < mesh.vertex_count());
            }
        }
    }

    #[test]
    fn test_spherical_field_vertices_near_radius() {
        // value = 0 exactly at radius r; a fine grid keeps every crossing
        // within one cell diagonal of the true sphere.
        let n = 17;
        let step = 0.25;
        let center = [2.0, 2.0, 2.0];
        let r = 1.5;
        let grid = grid_from_fn(n, step, |x, y, z| r - calculate_distance([x, y, z], center));
        let mesh = extract(&grid, 0.0);
        assert!(!mesh.is_empty());

        let diagonal = step * 3.0_f64.sqrt();
        for v in &mesh.vertices {
            let d = calculate_distance(*v, center);
            assert!(
                (d - r).abs() <= diagonal,
                "vertex {:?} at distance {}",
                v,
                d
            );
        }
    }

    #[test]
    fn test_winding_consistent_with_normals() {
        let grid = grid_from_fn(10, 0.5, |x, y, z| {
            1.2 - calculate_distance([x, y, z], [2.25, 2.25, 2.25])
        });
        let mesh = extract(&grid, 0.0);
        assert!(!mesh.is_empty());

        for tri in &mesh.triangles {
            let v0 = mesh.vertices[tri[0] as usize];
            let v1 = mesh.vertices[tri[1] as usize];
            let v2 = mesh.vertices[tri[2] as usize];
            let face = cross(sub(v1, v0), sub(v2, v0));
            let avg = add(
                add(mesh.normals[tri[0] as usize], mesh.normals[tri[1] as usize]),
                mesh.normals[tri[2] as usize],
            );
            assert!(dot(face, avg) >= 0.0);
        }
    }
}
