//! Cell and border-position addressing
//!
//! The grid has three coordinate interpretations that must never be
//! confused: interior cells, the 32 perimeter points where rays enter and
//! leave, and the direction a ray is travelling. Each gets its own type;
//! conversions between them live here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{GRID_SIZE, MAX_COORD};
use crate::error::{EngineError, Result};

/// One of the 64 cells of the atom grid.
///
/// `x` runs left to right, `y` top to bottom; both are valid in
/// `0..GRID_SIZE`. Board operations reject out-of-range cells rather than
/// clamping them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub x: u8,
    pub y: u8,
}

impl GridCell {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Bounds check against the fixed grid dimensions.
    #[inline]
    pub fn in_bounds(&self) -> bool {
        self.x < GRID_SIZE as u8 && self.y < GRID_SIZE as u8
    }

    pub(crate) fn check(&self) -> Result<()> {
        if self.in_bounds() {
            Ok(())
        } else {
            Err(EngineError::CellOutOfRange { x: self.x, y: self.y })
        }
    }

    /// Neighbouring cell one step along `heading`, or `None` past the grid
    /// edge.
    pub(crate) fn step(self, heading: Heading) -> Option<Self> {
        let (dx, dy) = heading.delta();
        let cell = Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        };
        cell.in_bounds().then_some(cell)
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four sides of the grid perimeter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    North,
    South,
    East,
    West,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::North => "NORTH",
            Side::South => "SOUTH",
            Side::East => "EAST",
            Side::West => "WEST",
        }
    }
}

/// One of the 32 entry/exit points around the grid perimeter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BorderPosition {
    pub side: Side,
    /// Offset along the side: column index for NORTH/SOUTH, row index for
    /// EAST/WEST.
    pub offset: u8,
}

impl BorderPosition {
    pub const fn new(side: Side, offset: u8) -> Self {
        Self { side, offset }
    }

    pub(crate) fn check(&self) -> Result<()> {
        if self.offset < GRID_SIZE as u8 {
            Ok(())
        } else {
            Err(EngineError::OffsetOutOfRange(self.offset))
        }
    }

    /// All 32 border positions, side by side.
    pub fn all() -> impl Iterator<Item = Self> {
        [Side::North, Side::South, Side::East, Side::West]
            .into_iter()
            .flat_map(|side| (0..GRID_SIZE as u8).map(move |offset| Self { side, offset }))
    }

    /// The first interior cell a ray entering here occupies, and the
    /// heading it starts out with.
    pub(crate) fn entry(self) -> (GridCell, Heading) {
        match self.side {
            Side::North => (GridCell::new(self.offset, 0), Heading::Down),
            Side::South => (GridCell::new(self.offset, MAX_COORD), Heading::Up),
            Side::East => (GridCell::new(MAX_COORD, self.offset), Heading::Left),
            Side::West => (GridCell::new(0, self.offset), Heading::Right),
        }
    }
}

impl fmt::Display for BorderPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.side.as_str(), self.offset)
    }
}

/// Direction of ray travel in grid space. UP decreases `y`, LEFT decreases
/// `x`. Internal to the engine; callers only ever see border positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Unit movement as (dx, dy).
    #[inline]
    pub(crate) fn delta(self) -> (i8, i8) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    pub(crate) fn opposite(self) -> Self {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// The two headings perpendicular to this one.
    pub(crate) fn flanks(self) -> [Self; 2] {
        match self {
            Heading::Up | Heading::Down => [Heading::Left, Heading::Right],
            Heading::Left | Heading::Right => [Heading::Up, Heading::Down],
        }
    }
}

/// Map a boundary cell, plus the heading the ray was travelling on arrival,
/// to the border position it leaves through.
///
/// Two sides meet at each corner cell, so the exit side there is decided by
/// the heading: leaving the NW corner moving UP exits NORTH, moving LEFT
/// exits WEST. Non-corner boundary cells resolve from whichever coordinate
/// sits on the edge. Returns `None` for interior cells.
pub(crate) fn border_exit(cell: GridCell, heading: Heading) -> Option<BorderPosition> {
    match (cell.x, cell.y, heading) {
        // NW corner
        (0, 0, Heading::Up) => Some(BorderPosition::new(Side::North, 0)),
        (0, 0, Heading::Left) => Some(BorderPosition::new(Side::West, 0)),
        // NE corner
        (MAX_COORD, 0, Heading::Up) => Some(BorderPosition::new(Side::North, MAX_COORD)),
        (MAX_COORD, 0, Heading::Right) => Some(BorderPosition::new(Side::East, 0)),
        // SW corner
        (0, MAX_COORD, Heading::Down) => Some(BorderPosition::new(Side::South, 0)),
        (0, MAX_COORD, Heading::Left) => Some(BorderPosition::new(Side::West, MAX_COORD)),
        // SE corner
        (MAX_COORD, MAX_COORD, Heading::Down) => Some(BorderPosition::new(Side::South, MAX_COORD)),
        (MAX_COORD, MAX_COORD, Heading::Right) => Some(BorderPosition::new(Side::East, MAX_COORD)),
        _ => {
            if cell.x == 0 {
                Some(BorderPosition::new(Side::West, cell.y))
            } else if cell.x == MAX_COORD {
                Some(BorderPosition::new(Side::East, cell.y))
            } else if cell.y == 0 {
                Some(BorderPosition::new(Side::North, cell.x))
            } else if cell.y == MAX_COORD {
                Some(BorderPosition::new(Side::South, cell.x))
            } else {
                None
            }
        }
    }
}
