//! Board structure with move-phase tracking

use std::fmt;
use std::str::FromStr;

use super::{Cell, Color, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::error::BoardParseError;

/// Game board: one byte per cell plus per-color first-move flags and the
/// side to move. `Copy`, so search nodes snapshot it by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
    /// Red has completed its first placement
    pub red_moved: bool,
    /// Blue has completed its first placement
    pub blue_moved: bool,
    side_to_move: Color,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; TOTAL_CELLS],
            red_moved: false,
            blue_moved: false,
            side_to_move: Color::Red,
        }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Overwrite a cell without running any rules.
    /// Use `rules::apply_move` for game moves.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Whether `color` has made its first placement
    #[inline]
    pub fn has_moved(&self, color: Color) -> bool {
        match color {
            Color::Red => self.red_moved,
            Color::Blue => self.blue_moved,
        }
    }

    #[inline]
    pub fn set_moved(&mut self, color: Color) {
        match color {
            Color::Red => self.red_moved = true,
            Color::Blue => self.blue_moved = true,
        }
    }

    #[inline]
    pub fn both_moved(&self) -> bool {
        self.red_moved && self.blue_moved
    }

    /// Cells with their positions, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (Pos::from_index(idx), cell))
    }

    /// Number of cells owned by `color`
    pub fn piece_count(&self, color: Color) -> u32 {
        self.cells.iter().filter(|c| c.is_owned_by(color)).count() as u32
    }

    /// Total occupied cells
    #[inline]
    pub fn piece_total(&self) -> u32 {
        self.cells.iter().filter(|c| !c.is_empty()).count() as u32
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let cell = self.get(Pos::new(row as u8, col as u8));
                match cell.color() {
                    None => f.write_str(". ")?,
                    Some(Color::Red) => write!(f, "r{}", cell.dots())?,
                    Some(Color::Blue) => write!(f, "b{}", cell.dots())?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Parse a board from whitespace-separated tokens in row-major order:
/// `.` for empty, `r1`..`r3` / `b1`..`b3` for owned cells.
///
/// Colors present on the board are marked as having moved; Red is to move.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != TOTAL_CELLS {
            return Err(BoardParseError::CellCount {
                expected: TOTAL_CELLS,
                found: tokens.len(),
            });
        }

        let mut board = Board::new();
        for (idx, token) in tokens.iter().enumerate() {
            let cell = parse_cell(token).ok_or_else(|| BoardParseError::BadToken {
                index: idx,
                token: (*token).to_string(),
            })?;
            if let Some(color) = cell.color() {
                board.set_moved(color);
            }
            board.cells[idx] = cell;
        }
        Ok(board)
    }
}

fn parse_cell(token: &str) -> Option<Cell> {
    if token == "." {
        return Some(Cell::EMPTY);
    }
    let mut chars = token.chars();
    let color = match chars.next()? {
        'r' | 'R' => Color::Red,
        'b' | 'B' => Color::Blue,
        _ => return None,
    };
    let dots = chars.next()?.to_digit(10)?;
    if chars.next().is_some() || !(1..=3).contains(&dots) {
        return None;
    }
    Some(Cell::owned(color, dots as u8))
}
