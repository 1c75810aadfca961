//! Grid coordinates and the four axis-aligned neighbour directions

use serde::Deserialize;
use std::fmt;

/// One of the four neighbour directions of a grid cell
///
/// Deserializes from `up`, `down`, `left`, `right`; `top` and `bottom`
/// are accepted for `up` and `down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards smaller `y`
    #[serde(alias = "top")]
    Up,
    /// Towards larger `y`
    #[serde(alias = "bottom")]
    Down,
    /// Towards smaller `x`
    Left,
    /// Towards larger `x`
    Right,
}

impl Direction {
    /// All directions in propagation order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The direction pointing back at the origin cell
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Position within [`Direction::ALL`], used for per-direction tables
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    /// Unit offset `[dx, dy]` of this direction
    const fn offset(self) -> [i32; 2] {
        match self {
            Self::Up => [0, -1],
            Self::Down => [0, 1],
            Self::Left => [-1, 0],
            Self::Right => [1, 0],
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Integer grid coordinate, `x` to the right and `y` downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Position {
    /// Create a position from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step away in `direction`
    ///
    /// May lie outside the grid; check with [`Position::is_out_of_grid`].
    #[must_use]
    pub const fn neighbor(self, direction: Direction) -> Self {
        let [dx, dy] = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether either coordinate falls outside `0..size`
    pub fn is_out_of_grid(self, size: usize) -> bool {
        let inside = |value: i32| usize::try_from(value).is_ok_and(|v| v < size);
        !(inside(self.x) && inside(self.y))
    }

    /// Array index `[row, col]`, or `None` for negative coordinates
    pub fn to_index(self) -> Option<[usize; 2]> {
        let row = usize::try_from(self.y).ok()?;
        let col = usize::try_from(self.x).ok()?;
        Some([row, col])
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
