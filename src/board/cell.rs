//! Compact one-byte cell encoding
//!
//! `0` is empty, `1..=4` are red dot counts and `5..=8` blue dot counts
//! (blue is offset by 4). A count of 4 only exists while a cascade is being
//! resolved; a board at rest holds at most 3 dots per cell.

use super::{Color, CRITICAL_DOTS};

const BLUE_OFFSET: u8 = 4;

/// Single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell(u8);

impl Cell {
    pub const EMPTY: Cell = Cell(0);

    /// Owned cell with `dots` dots of `color`
    #[inline]
    pub fn owned(color: Color, dots: u8) -> Self {
        debug_assert!((1..=CRITICAL_DOTS).contains(&dots), "dot count {dots} out of range");
        match color {
            Color::Red => Cell(dots),
            Color::Blue => Cell(dots + BLUE_OFFSET),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Owner of the cell, `None` when empty
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self.0 {
            0 => None,
            1..=BLUE_OFFSET => Some(Color::Red),
            _ => Some(Color::Blue),
        }
    }

    /// Dot count (0 for empty)
    #[inline]
    pub fn dots(self) -> u8 {
        match self.0 {
            0 => 0,
            d @ 1..=BLUE_OFFSET => d,
            d => d - BLUE_OFFSET,
        }
    }

    #[inline]
    pub fn is_owned_by(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// One dot below critical: the next increment explodes
    #[inline]
    pub fn is_ready(self) -> bool {
        self.dots() == CRITICAL_DOTS - 1
    }

    #[inline]
    pub fn is_critical(self) -> bool {
        self.dots() >= CRITICAL_DOTS
    }

    /// Raw encoded byte
    #[inline]
    pub fn raw(self) -> u8 {
        self.0
    }
}
