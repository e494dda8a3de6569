//! Black Box - a deduction puzzle engine
//!
//! Hidden atoms occupy cells of an 8x8 grid. Rays fired from the 32 border
//! positions are absorbed by an atom, bounced back out the side they
//! entered, or deflected around atoms until they exit somewhere else. This
//! crate is the deterministic core only: callers own scoring, turn-taking
//! and rendering.
//!
//! Core modules:
//! - `board`: The atom grid and the public play API
//! - `trace`: Ray routing (hit / reflection / detour rules)
//! - `pos`: Cell and border-position addressing
//! - `generate`: Random atom placement
//! - `error`: Engine error types

pub mod board;
pub mod error;
pub mod generate;
pub mod pos;
pub mod trace;

pub use board::Board;
pub use error::EngineError;
pub use generate::{generate_atoms, generate_atoms_seeded};
pub use pos::{BorderPosition, GridCell, Side};
pub use trace::Outcome;

/// Game configuration constants
pub mod consts {
    /// Grid width and height in cells
    pub const GRID_SIZE: usize = 8;
    /// Largest valid cell coordinate
    pub const MAX_COORD: u8 = (GRID_SIZE - 1) as u8;
    /// Atoms hidden on the board in a standard game
    pub const ATOM_COUNT: usize = 4;
    /// Addressable entry/exit points around the perimeter
    pub const BORDER_POSITIONS: usize = GRID_SIZE * 4;
    /// Upper bound on ray steps: one per distinct (cell, heading) state.
    /// The step transition is a pure function of that state, so a ray still
    /// in flight after this many steps is revisiting states and will never
    /// leave.
    pub const MAX_RAY_STEPS: usize = GRID_SIZE * GRID_SIZE * 4;
}
