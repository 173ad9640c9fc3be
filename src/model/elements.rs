/// Fixed element lookup tables keyed by atomic number, which is what a
/// cube file gives us. Radii are covalent radii in Angstroms. Colors are
/// standard CPK.

pub fn element_symbol(z: u32) -> &'static str {
    match z {
        // --- Period 1 ---
        1 => "H",
        2 => "He",
        // --- Period 2 ---
        3 => "Li", 4 => "Be", 5 => "B", 6 => "C", 7 => "N", 8 => "O", 9 => "F", 10 => "Ne",
        // --- Period 3 ---
        11 => "Na", 12 => "Mg", 13 => "Al", 14 => "Si", 15 => "P", 16 => "S", 17 => "Cl", 18 => "Ar",
        // --- Period 4 ---
        19 => "K", 20 => "Ca", 21 => "Sc", 22 => "Ti", 23 => "V", 24 => "Cr", 25 => "Mn",
        26 => "Fe", 27 => "Co", 28 => "Ni", 29 => "Cu", 30 => "Zn", 31 => "Ga", 32 => "Ge",
        33 => "As", 34 => "Se", 35 => "Br", 36 => "Kr",
        // --- Period 5 ---
        37 => "Rb", 38 => "Sr", 39 => "Y", 40 => "Zr", 41 => "Nb", 42 => "Mo", 43 => "Tc",
        44 => "Ru", 45 => "Rh", 46 => "Pd", 47 => "Ag", 48 => "Cd", 49 => "In", 50 => "Sn",
        51 => "Sb", 52 => "Te", 53 => "I", 54 => "Xe",
        // --- Period 6 ---
        55 => "Cs", 56 => "Ba", 57 => "La", 58 => "Ce", 59 => "Pr", 60 => "Nd", 61 => "Pm",
        62 => "Sm", 63 => "Eu", 64 => "Gd", 65 => "Tb", 66 => "Dy", 67 => "Ho", 68 => "Er",
        69 => "Tm", 70 => "Yb", 71 => "Lu", 72 => "Hf", 73 => "Ta", 74 => "W", 75 => "Re",
        76 => "Os", 77 => "Ir", 78 => "Pt", 79 => "Au", 80 => "Hg", 81 => "Tl", 82 => "Pb",
        83 => "Bi", 84 => "Po", 85 => "At", 86 => "Rn",
        // --- Period 7 (through Cm, as far as cube files in the wild go) ---
        87 => "Fr", 88 => "Ra", 89 => "Ac", 90 => "Th", 91 => "Pa", 92 => "U", 93 => "Np",
        94 => "Pu", 95 => "Am", 96 => "Cm",
        // Unknown/Dummy
        _ => "udf",
    }
}

pub fn covalent_radius(z: u32) -> f64 {
    match z {
        // --- Period 1 ---
        1 => 0.37,
        2 => 0.32,
        // --- Period 2 ---
        3 => 1.34,
        4 => 0.90,
        5 => 0.82,
        6 => 0.77,
        7 => 0.75,
        8 => 0.73,
        9 => 0.71,
        10 => 0.69,
        // --- Period 3 ---
        11 => 1.54,
        12 => 1.30,
        13 => 1.18,
        14 => 1.11,
        15 => 1.06,
        16 => 1.02,
        17 => 0.99,
        18 => 0.97,
        // --- Period 4 (Selected Common Metals) ---
        19 => 1.96,
        20 => 1.74,
        22 => 1.36,
        23 => 1.25,
        24 => 1.27,
        25 => 1.39,
        26 => 1.25,
        27 => 1.26,
        28 => 1.21,
        29 => 1.38,
        30 => 1.31,
        31 => 1.26,
        32 => 1.22,
        33 => 1.19,
        34 => 1.16,
        35 => 1.14,
        36 => 1.10,
        // --- Period 5 (Selected) ---
        47 => 1.53,
        79 => 1.44,
        // --- Catch-All (Unknown) ---
        _ => 1.00,
    }
}

pub fn cpk_color(z: u32) -> (f64, f64, f64) {
    match z {
        // --- Period 1 ---
        1 => (1.00, 1.00, 1.00),  // White
        2 => (0.85, 1.00, 1.00),  // Cyan-White
        // --- Period 2 ---
        3 => (0.80, 0.50, 1.00),  // Violet
        4 => (0.76, 1.00, 0.00),  // Yellow-Green
        5 => (1.00, 0.70, 0.70),  // Pink-Salmon
        6 => (0.20, 0.20, 0.20),  // Dark Grey
        7 => (0.19, 0.31, 0.97),  // Blue
        8 => (1.00, 0.05, 0.05),  // Red
        9 => (0.56, 0.88, 0.31),  // Green
        10 => (0.70, 0.89, 0.96), // Light Cyan
        // --- Period 3 ---
        11 => (0.67, 0.36, 0.95), // Violet
        12 => (0.54, 1.00, 0.00), // Forest Green
        13 => (0.75, 0.65, 0.65), // Silver-Grey
        14 => (0.94, 0.78, 0.63), // Tan
        15 => (1.00, 0.50, 0.00), // Orange
        16 => (1.00, 1.00, 0.19), // Yellow
        17 => (0.12, 0.94, 0.12), // Bright Green
        18 => (0.50, 0.82, 0.89), // Cyan
        // --- Period 4 (Selected Common Metals) ---
        19 => (0.56, 0.25, 0.83), // Purple
        20 => (0.24, 1.00, 0.00), // Dark Green
        22 => (0.75, 0.76, 0.78), // Silver
        23 => (0.65, 0.65, 0.67), // Grey
        24 => (0.54, 0.60, 0.78), // Blue-Grey
        25 => (0.61, 0.48, 0.78), // Purple-Grey
        26 => (0.88, 0.40, 0.20), // Rust / Orange
        27 => (0.94, 0.56, 0.63), // Pink-ish
        28 => (0.31, 0.82, 0.31), // Green
        29 => (0.78, 0.50, 0.20), // Copper
        30 => (0.49, 0.50, 0.69), // Slate
        31 => (0.76, 0.56, 0.56), // Dark Pink
        32 => (0.40, 0.56, 0.56), // Grey-Teal
        33 => (0.74, 0.50, 0.89), // Violet
        34 => (1.00, 0.63, 0.00), // Orange
        35 => (0.65, 0.16, 0.16), // Brown
        36 => (0.36, 0.72, 0.82), // Blue-Green
        // --- Period 5 (Selected) ---
        47 => (0.75, 0.75, 0.75), // Silver
        79 => (1.00, 0.82, 0.14), // Gold
        // --- Catch-All (Unknown) ---
        _ => (1.00, 0.08, 0.58), // Hot Pink for errors
    }
}
