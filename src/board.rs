//! The atom grid
//!
//! Authoritative store for atom presence and the crate's public play API.
//! All mutation happens through this type; the ray tracer only ever reads
//! it. Gameplay limits (at most four hidden atoms, no duplicate rays) are
//! the caller's to enforce - the store itself accepts any number of atoms.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{ATOM_COUNT, GRID_SIZE};
use crate::error::Result;
use crate::generate::generate_atoms;
use crate::pos::{BorderPosition, GridCell};
use crate::trace::{self, Outcome};

/// The 8x8 atom grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    atoms: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place an atom. Idempotent: placing on an occupied cell is a no-op.
    pub fn place_atom(&mut self, cell: GridCell) -> Result<()> {
        cell.check()?;
        self.atoms[cell.y as usize][cell.x as usize] = true;
        Ok(())
    }

    /// Remove an atom. Idempotent: clearing an empty cell is a no-op.
    pub fn clear_atom(&mut self, cell: GridCell) -> Result<()> {
        cell.check()?;
        self.atoms[cell.y as usize][cell.x as usize] = false;
        Ok(())
    }

    /// Whether `cell` currently holds an atom.
    pub fn contains_atom(&self, cell: GridCell) -> Result<bool> {
        cell.check()?;
        Ok(self.atoms[cell.y as usize][cell.x as usize])
    }

    /// Reset every cell to empty.
    pub fn clear_all(&mut self) {
        self.atoms = [[false; GRID_SIZE]; GRID_SIZE];
    }

    /// Number of atoms currently placed.
    pub fn atom_count(&self) -> usize {
        self.atoms.iter().flatten().filter(|&&atom| atom).count()
    }

    /// Occupied cells, in row-major order.
    pub fn atoms(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.atoms.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, &atom)| atom.then(|| GridCell::new(x as u8, y as u8)))
        })
    }

    /// Clear the board and scatter a fresh random atom set.
    ///
    /// Returns the placed cells so the caller can record them for end-of-game
    /// comparison against the player's guesses.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> [GridCell; ATOM_COUNT] {
        self.clear_all();
        let placed = generate_atoms(rng);
        for cell in placed {
            self.atoms[cell.y as usize][cell.x as usize] = true;
        }
        log::debug!("board randomized with {} atoms", placed.len());
        placed
    }

    /// Fire a ray into the grid and report its fate.
    ///
    /// Fails only for an out-of-range entry offset; every valid entry
    /// produces exactly one outcome.
    pub fn fire_ray(&self, entry: BorderPosition) -> Result<Outcome> {
        trace::fire(self, entry)
    }

    /// Tracer-side read. Out-of-range lookups report no atom, which lets
    /// the step checks treat off-grid neighbours as empty.
    #[inline]
    pub(crate) fn occupied(&self, cell: GridCell) -> bool {
        self.atoms
            .get(cell.y as usize)
            .and_then(|row| row.get(cell.x as usize))
            .copied()
            .unwrap_or(false)
    }
}
