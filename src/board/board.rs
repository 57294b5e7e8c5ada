//! Board structure backed by one bitboard per mark

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Cell, Player, BOARD_SIZE, TOTAL_CELLS};
use crate::error::{Error, Result};

/// Game board.
///
/// `Board` is `Copy`: search code branches with [`Board::with_move`], which
/// hands back a fresh snapshot, so sibling branches never see each other's
/// tentative moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// X marks bitboard
    pub x: Bitboard,
    /// O marks bitboard
    pub o: Bitboard,
}

impl Board {
    pub const fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    /// Build a board from cells in row-major order
    pub fn from_cells(cells: [Cell; TOTAL_CELLS]) -> Self {
        let mut board = Self::new();
        for (idx, cell) in cells.into_iter().enumerate() {
            if let Cell::Mark(player) = cell {
                board.stones_mut(player).set(idx);
            }
        }
        board
    }

    /// All cells in row-major order
    pub fn cells(&self) -> [Cell; TOTAL_CELLS] {
        std::array::from_fn(|idx| self.get(idx))
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at index
    #[inline]
    pub fn get(&self, idx: usize) -> Cell {
        if self.x.get(idx) {
            Cell::Mark(Player::X)
        } else if self.o.get(idx) {
            Cell::Mark(Player::O)
        } else {
            Cell::Empty
        }
    }

    /// Check if cell is empty
    #[inline]
    pub fn is_empty(&self, idx: usize) -> bool {
        !self.x.get(idx) && !self.o.get(idx)
    }

    /// Empty cells as a bitboard
    #[inline]
    pub fn empty_cells(&self) -> Bitboard {
        self.x.union(self.o).complement()
    }

    /// Copy of this board with `player` marked at `idx`.
    /// `self` is left untouched.
    #[inline]
    #[must_use]
    pub fn with_move(&self, idx: usize, player: Player) -> Board {
        debug_assert!(self.is_empty(idx), "cell {idx} is already occupied");
        let mut next = *self;
        next.stones_mut(player).set(idx);
        next
    }

    /// Mark a cell in place. Used by the front-ends to apply real moves.
    pub fn place(&mut self, idx: usize, player: Player) -> Result<()> {
        if idx >= TOTAL_CELLS {
            return Err(Error::CellOutOfRange { index: idx });
        }
        if !self.is_empty(idx) {
            return Err(Error::CellOccupied { index: idx });
        }
        self.stones_mut(player).set(idx);
        Ok(())
    }

    /// Clear a cell
    #[inline]
    pub fn remove(&mut self, idx: usize) {
        self.x.clear(idx);
        self.o.clear(idx);
    }

    /// Get bitboard for a mark
    #[inline]
    pub fn stones(&self, player: Player) -> Bitboard {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    #[inline]
    fn stones_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        }
    }

    /// Number of cells holding `player`'s mark
    #[inline]
    pub fn count(&self, player: Player) -> u32 {
        self.stones(player).count()
    }

    /// Total marks on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }
}

/// Compact notation: rows of `X`, `O` and `.` separated by `|`, e.g. `XX.|OO.|...`
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                write!(f, "|")?;
            }
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.get(row * BOARD_SIZE + col).symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Accepts `X`/`O` (any case) and `.`, `-`, `_` or space for empty cells.
    /// `|` and `/` row separators are skipped, as is surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [Cell::Empty; TOTAL_CELLS];
        let mut got = 0;
        for (position, character) in s.trim_matches('\n').chars().enumerate() {
            let cell = match character {
                'x' | 'X' => Cell::Mark(Player::X),
                'o' | 'O' => Cell::Mark(Player::O),
                '.' | '-' | '_' | ' ' => Cell::Empty,
                '|' | '/' => continue,
                _ => {
                    return Err(Error::InvalidCellCharacter {
                        character,
                        position,
                    })
                }
            };
            if got < TOTAL_CELLS {
                cells[got] = cell;
            }
            got += 1;
        }
        if got != TOTAL_CELLS {
            return Err(Error::InvalidBoardLength {
                expected: TOTAL_CELLS,
                got,
            });
        }
        Ok(Board::from_cells(cells))
    }
}
