// src/io/cube.rs
//
// Gaussian cube reader. Layout:
//   line 1-2   free-text comments
//   line 3     <atom count> <origin x y z>
//   line 4-6   <axis count> <step vector x y z>   (one line per axis)
//   then       one line per atom: <Z> <charge> <x y z>
//   then       nx*ny*nz field samples, whitespace separated, z fastest
//
// Positive axis counts declare Bohr, negative declare Angstrom. We keep
// Bohr as the internal unit and rescale origin + step vectors on the way
// in; atom positions are Bohr in both variants and stay as written.

use std::io::BufRead;

use crate::io::error::CubeError;
use crate::model::{Atom, LengthUnit, ParsedVolume, ScalarGrid};

pub const ANGSTROM_TO_BOHR: f64 = 1.8897259886;

struct LineReader<R> {
    lines: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, CubeError> {
        match self.lines.next() {
            Some(line) => {
                self.line_no += 1;
                Ok(Some(line?))
            }
            None => Ok(None),
        }
    }

    fn expect_line(&mut self, what: &str) -> Result<String, CubeError> {
        self.next_line()?
            .ok_or_else(|| CubeError::truncated(self.line_no + 1, format!("missing {}", what)))
    }
}

pub fn parse<R: BufRead>(reader: R) -> Result<ParsedVolume, CubeError> {
    let mut rd = LineReader::new(reader);

    let comment1 = rd.expect_line("first comment line")?;
    let comment2 = rd.expect_line("second comment line")?;

    // Header: atom count + origin
    let line = rd.expect_line("atom count / origin line")?;
    let mut toks = line.split_whitespace();
    let atom_count = parse_int(&mut toks, rd.line_no, "atom count")?;
    let mut origin = parse_vec3(&mut toks, rd.line_no, "grid origin")?;

    if atom_count <= 0 {
        // Negative counts flag multi-valued voxel records, which this
        // reader does not handle.
        return Err(CubeError::dimensions(
            rd.line_no,
            format!("atom count must be positive, got {}", atom_count),
        ));
    }

    // Axis lines: sample count + step vector, one per axis
    let mut counts = [0usize; 3];
    let mut basis = [[0.0f64; 3]; 3];
    let mut angstrom = false;
    for (axis, name) in ["x", "y", "z"].iter().enumerate() {
        let line = rd.expect_line("axis line")?;
        let mut toks = line.split_whitespace();
        let n = parse_int(&mut toks, rd.line_no, "axis sample count")?;
        basis[axis] = parse_vec3(&mut toks, rd.line_no, "axis step vector")?;

        if n < 0 {
            angstrom = true;
        }
        counts[axis] = n.unsigned_abs() as usize;
        if counts[axis] == 0 {
            return Err(CubeError::dimensions(
                rd.line_no,
                format!("{} axis sample count must be non-zero", name),
            ));
        }
    }

    let unit = if angstrom {
        for v in origin.iter_mut() {
            *v *= ANGSTROM_TO_BOHR;
        }
        for row in basis.iter_mut() {
            for v in row.iter_mut() {
                *v *= ANGSTROM_TO_BOHR;
            }
        }
        LengthUnit::Angstrom
    } else {
        LengthUnit::Bohr
    };

    // Atom lines
    let mut atoms = Vec::with_capacity(atom_count as usize);
    for _ in 0..atom_count {
        let line = rd.expect_line("atom line")?;
        let mut toks = line.split_whitespace();
        let z = parse_int(&mut toks, rd.line_no, "atomic number")?;
        if z < 0 {
            return Err(CubeError::dimensions(
                rd.line_no,
                format!("atomic number must be non-negative, got {}", z),
            ));
        }
        let charge = parse_real(&mut toks, rd.line_no, "nuclear charge")?;
        let position = parse_vec3(&mut toks, rd.line_no, "atom position")?;
        atoms.push(Atom {
            atomic_number: z as u32,
            charge,
            position,
        });
    }

    // Field samples: everything that is left, z fastest
    let (nx, ny, nz) = (counts[0], counts[1], counts[2]);
    let expected = nx * ny * nz;
    let mut data = Vec::with_capacity(expected);
    let mut found = 0usize;
    while let Some(line) = rd.next_line()? {
        for tok in line.split_whitespace() {
            found += 1;
            if found <= expected {
                data.push(parse_sample(tok, rd.line_no)?);
            }
        }
    }
    if found != expected {
        return Err(CubeError::GridSizeMismatch { expected, found });
    }

    Ok(ParsedVolume {
        comments: [comment1, comment2],
        atoms,
        grid: ScalarGrid {
            origin,
            basis,
            nx,
            ny,
            nz,
            data,
        },
        unit,
    })
}

fn parse_int<'a, I: Iterator<Item = &'a str>>(
    toks: &mut I,
    line: usize,
    what: &str,
) -> Result<i64, CubeError> {
    let tok = toks
        .next()
        .ok_or_else(|| CubeError::truncated(line, format!("missing {}", what)))?;
    tok.parse().map_err(|_| CubeError::number(line, tok))
}

fn parse_real<'a, I: Iterator<Item = &'a str>>(
    toks: &mut I,
    line: usize,
    what: &str,
) -> Result<f64, CubeError> {
    let tok = toks
        .next()
        .ok_or_else(|| CubeError::truncated(line, format!("missing {}", what)))?;
    tok.parse().map_err(|_| CubeError::number(line, tok))
}

fn parse_vec3<'a, I: Iterator<Item = &'a str>>(
    toks: &mut I,
    line: usize,
    what: &str,
) -> Result<[f64; 3], CubeError> {
    Ok([
        parse_real(toks, line, what)?,
        parse_real(toks, line, what)?,
        parse_real(toks, line, what)?,
    ])
}

/// Field-sample token. Fortran writers drop the `E` once the exponent
/// needs three digits (`0.806033-100`); such values underflow to 0.0
/// rather than failing the parse. Header tokens get no such leniency.
fn parse_sample(tok: &str, line: usize) -> Result<f64, CubeError> {
    if let Ok(v) = tok.parse() {
        return Ok(v);
    }
    if is_truncated_exponent(tok) {
        return Ok(0.0);
    }
    Err(CubeError::number(line, tok))
}

fn is_truncated_exponent(tok: &str) -> bool {
    if tok.contains(['E', 'e']) || tok.len() < 2 {
        return false;
    }
    match tok[1..].find(['+', '-']) {
        Some(p) => {
            let split = p + 1;
            tok[..split].parse::<f64>().is_ok() && tok[split..].parse::<i32>().is_ok()
        }
        None => false,
    }
}
