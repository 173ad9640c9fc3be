// src/rendering/scene.rs

use crate::io::cube::ANGSTROM_TO_BOHR;
use crate::model::elements::{covalent_radius, cpk_color, element_symbol};
use crate::model::Atom;
use crate::utils::geometry::calculate_distance;

// Bond detection tolerance on the covalent-radius sum
const BOND_TOLERANCE: f64 = 1.15;
// Anything closer than this is an overlapping pair, not a bond
const MIN_BOND_DIST: f64 = 0.4 * ANGSTROM_TO_BOHR;
// Displayed sphere radius as a fraction of the covalent radius
const ATOM_SCALE: f64 = 0.4;
const BOND_RADIUS: f64 = 0.12 * ANGSTROM_TO_BOHR;

// Placement records for the downstream exporter. Everything is in Bohr,
// matching the parsed atom positions.
pub struct SphereSpec {
    pub center: [f64; 3],
    pub radius: f64,
    pub color: (f64, f64, f64),
    pub element: &'static str,
}

pub struct CylinderSpec {
    pub start: [f64; 3],
    pub end: [f64; 3],
    pub radius: f64,
}

pub fn build_spheres(atoms: &[Atom]) -> Vec<SphereSpec> {
    atoms
        .iter()
        .map(|atom| SphereSpec {
            center: atom.position,
            radius: covalent_radius(atom.atomic_number) * ANGSTROM_TO_BOHR * ATOM_SCALE,
            color: cpk_color(atom.atomic_number),
            element: element_symbol(atom.atomic_number),
        })
        .collect()
}

/// One cylinder per atom pair whose separation fits the covalent bond
/// window: larger than the overlap cutoff, smaller than the radius sum
/// scaled by the tolerance.
pub fn build_bonds(atoms: &[Atom]) -> Vec<CylinderSpec> {
    let mut bonds = Vec::new();

    for (i, a1) in atoms.iter().enumerate() {
        let rad1 = covalent_radius(a1.atomic_number) * ANGSTROM_TO_BOHR;

        for (j, a2) in atoms.iter().enumerate() {
            if i >= j {
                continue; // Avoid duplicates
            }

            let dist = calculate_distance(a1.position, a2.position);
            let rad2 = covalent_radius(a2.atomic_number) * ANGSTROM_TO_BOHR;
            let max_bond_dist = (rad1 + rad2) * BOND_TOLERANCE;

            if dist > MIN_BOND_DIST && dist < max_bond_dist {
                bonds.push(CylinderSpec {
                    start: a1.position,
                    end: a2.position,
                    radius: BOND_RADIUS,
                });
            }
        }
    }

    log::debug!("placed {} bonds for {} atoms", bonds.len(), atoms.len());
    bonds
}
