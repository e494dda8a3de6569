//! Ray routing
//!
//! The puzzle's engine: a ray enters at a border position and is stepped
//! across the grid one cell at a time until it is absorbed, bounced back
//! out the side it entered, or leaves through another border position.
//!
//! Interaction rules, strongest first:
//! - An atom directly ahead absorbs the ray (hit).
//! - Atoms on both ahead-diagonals bounce it straight back (reflection):
//!   the ray cannot pass between them without grazing one.
//! - An atom on exactly one ahead-diagonal bends the ray 90 degrees away
//!   from it (detour) without stopping it.
//!
//! The entry cell is special - it has no previous cell, so its geometry
//! differs: an atom sitting on it absorbs the ray outright, and an atom on
//! either perpendicular neighbour reflects the ray before it ever moves.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::consts::MAX_RAY_STEPS;
use crate::error::{EngineError, Result};
use crate::pos::{BorderPosition, GridCell, Heading, border_exit};

/// Fate of a fired ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Ray left the grid at this border position.
    Exit(BorderPosition),
    /// Ray was absorbed by an atom.
    Hit,
    /// Ray bounced back out the side it entered.
    Reflected,
}

/// A ray in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ray {
    pub(crate) cell: GridCell,
    pub(crate) heading: Heading,
}

/// Result of advancing a ray by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Still in flight at the new cell and heading.
    Fly(Ray),
    /// Terminated with an outcome.
    Done(Outcome),
}

/// Trace a ray from `entry` across `board`.
pub(crate) fn fire(board: &Board, entry: BorderPosition) -> Result<Outcome> {
    entry.check()?;
    let outcome = run(board, entry)?;
    log::trace!("ray {entry} -> {outcome:?}");
    Ok(outcome)
}

fn run(board: &Board, entry: BorderPosition) -> Result<Outcome> {
    let (cell, heading) = entry.entry();
    let mut ray = Ray { cell, heading };

    // Entry checks, before any movement.
    if board.occupied(ray.cell) {
        return Ok(Outcome::Hit);
    }
    if heading
        .flanks()
        .into_iter()
        .any(|flank| atom_at(board, ray.cell.step(flank)))
    {
        return Ok(Outcome::Reflected);
    }

    // Step until the ray terminates. The ceiling covers every distinct
    // (cell, heading) state, so hitting it means the ray is cycling.
    for _ in 0..MAX_RAY_STEPS {
        match advance(board, ray) {
            Step::Fly(next) => ray = next,
            Step::Done(outcome) => return Ok(outcome),
        }
    }
    Err(EngineError::RayLoop)
}

/// Advance a ray by one step: hit check, reflection check, detour, move.
///
/// A pure transition on (cell, heading). Hit beats reflection beats detour;
/// off-grid neighbours read as empty.
pub(crate) fn advance(board: &Board, ray: Ray) -> Step {
    let mut heading = ray.heading;

    // Atom directly ahead absorbs the ray.
    let ahead = ray.cell.step(heading);
    if atom_at(board, ahead) {
        return Step::Done(Outcome::Hit);
    }

    // Atoms on both ahead-diagonals bounce the ray; a single one bends it
    // away from the atom.
    let flanks = heading.flanks();
    let blocked = flanks.map(|flank| atom_at(board, ahead.and_then(|cell| cell.step(flank))));
    match blocked {
        [true, true] => return Step::Done(Outcome::Reflected),
        [true, false] => heading = flanks[0].opposite(),
        [false, true] => heading = flanks[1].opposite(),
        [false, false] => {}
    }

    // Move one cell along the (possibly just bent) heading. A move off the
    // grid terminates instead, exiting with the heading held right now.
    match ray.cell.step(heading) {
        Some(cell) => Step::Fly(Ray { cell, heading }),
        None => match border_exit(ray.cell, heading) {
            Some(exit) => Step::Done(Outcome::Exit(exit)),
            // A blocked move can only happen on the boundary row or column.
            None => unreachable!("ray blocked on interior cell {}", ray.cell),
        },
    }
}

#[inline]
fn atom_at(board: &Board, cell: Option<GridCell>) -> bool {
    cell.is_some_and(|cell| board.occupied(cell))
}
