//! Board coordinates
//!
//! A [`Coordinate`] is a plain `(x, y)` value. `x` is the row a piece advances
//! along and `y` is the column. Coordinates are created ad hoc for each query
//! and may lie off the board; range checks are the engine's job.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseCoordinateError;

/// Immutable position on the board grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Dark squares are the only squares a piece may ever stand on
    #[inline]
    pub fn is_dark(&self) -> bool {
        self.x.rem_euclid(2) == self.y.rem_euclid(2)
    }

    /// Check if the coordinate lies inside a `size` x `size` board
    #[inline]
    pub fn in_bounds(&self, size: i32) -> bool {
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }

    /// Coordinate shifted by `(dx, dy)`
    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Parses `x,y` with optional surrounding whitespace or parentheses
impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (x, y) = trimmed
            .split_once(',')
            .ok_or_else(|| ParseCoordinateError::MissingSeparator(s.to_string()))?;

        let parse_axis = |axis: &str| {
            axis.trim()
                .parse::<i32>()
                .map_err(|_| ParseCoordinateError::InvalidAxis(axis.trim().to_string()))
        };

        Ok(Self::new(parse_axis(x)?, parse_axis(y)?))
    }
}
