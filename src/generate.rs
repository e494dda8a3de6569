//! Random atom placement
//!
//! Unbounded rejection sampling: draw uniformly random cells and keep the
//! first `ATOM_COUNT` distinct ones. The random source is supplied by the
//! caller so layouts can be reproduced from a seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{ATOM_COUNT, GRID_SIZE};
use crate::pos::GridCell;

/// Draw one uniformly random cell.
fn random_cell<R: Rng + ?Sized>(rng: &mut R) -> GridCell {
    GridCell::new(
        rng.random_range(0..GRID_SIZE as u8),
        rng.random_range(0..GRID_SIZE as u8),
    )
}

/// Generate `ATOM_COUNT` pairwise-distinct random cells.
///
/// Duplicates are redrawn indefinitely, so the supplied source must be able
/// to reach enough of the grid; a degenerate source that always yields the
/// same cell will never return.
pub fn generate_atoms<R: Rng + ?Sized>(rng: &mut R) -> [GridCell; ATOM_COUNT] {
    let mut atoms = [GridCell::new(0, 0); ATOM_COUNT];
    let mut count = 0;
    while count < ATOM_COUNT {
        let cell = random_cell(rng);
        if atoms[..count].contains(&cell) {
            continue;
        }
        atoms[count] = cell;
        count += 1;
    }
    atoms
}

/// Generate an atom layout from a seed, for reproducible games.
pub fn generate_atoms_seeded(seed: u64) -> [GridCell; ATOM_COUNT] {
    generate_atoms(&mut Pcg32::seed_from_u64(seed))
}
