use std::{
    fmt::{Display, Write},
    ops::Index,
    str::FromStr,
};

use smallvec::SmallVec;

use crate::error::BoardError;

pub const SIZE: usize = 3;
pub const CELLS: usize = SIZE * SIZE;
pub const BLANK: u8 = 0;

/// Row-major tile values; used as the visited-set key.
pub type Key = [u8; CELLS];

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Move::Down => (1, 0),
            Move::Up => (-1, 0),
            Move::Right => (0, 1),
            Move::Left => (0, -1),
        }
    }

    pub fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        })
    }
}

// expansion order; LDFS explores these in reverse since the last push is popped first
pub const MOVES: [Move; 4] = [Move::Down, Move::Up, Move::Right, Move::Left];

/// The solved board: blank in the top-left corner, 1..8 row-major after it.
pub const GOAL: Board = Board {
    tiles: [0, 1, 2, 3, 4, 5, 6, 7, 8],
    blank: (0, 0),
};

/// A 3x3 board holding each of 0..=8 exactly once, 0 being the blank.
///
/// Boards are only built through validating constructors or by sliding the
/// blank, so the permutation invariant always holds.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Board {
    tiles: Key,
    blank: (usize, usize),
}

impl Board {
    pub fn new(rows: [[u8; SIZE]; SIZE]) -> Result<Board, BoardError> {
        let mut tiles = [BLANK; CELLS];
        for (cell, value) in tiles.iter_mut().zip(rows.iter().flatten()) {
            *cell = *value;
        }

        Board::from_tiles(tiles)
    }

    /// Like [`Board::new`], additionally checking that the caller's idea of
    /// where the blank is agrees with the grid.
    pub fn with_blank(rows: [[u8; SIZE]; SIZE], blank: (usize, usize)) -> Result<Board, BoardError> {
        let board = Board::new(rows)?;
        board.check_blank(blank)?;
        Ok(board)
    }

    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Board, BoardError> {
        if rows.len() != SIZE {
            return Err(BoardError::RowCount { rows: rows.len() });
        }

        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != SIZE) {
            return Err(BoardError::RowLength {
                row,
                len: cells.len(),
            });
        }

        let mut tiles = [BLANK; CELLS];
        for (cell, value) in tiles.iter_mut().zip(rows.into_iter().flatten()) {
            *cell = value;
        }

        Board::from_tiles(tiles)
    }

    pub fn from_tiles(tiles: Key) -> Result<Board, BoardError> {
        let mut seen = [false; CELLS];
        for &value in &tiles {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(BoardError::OutOfRange { value })?;
            if std::mem::replace(slot, true) {
                return Err(BoardError::Duplicate { value });
            }
        }

        // nine distinct values from 0..9: the blank is there
        Ok(Board::from_permutation(tiles))
    }

    pub(crate) fn from_permutation(tiles: Key) -> Board {
        let ix = tiles.iter().position(|&t| t == BLANK).unwrap_or_default();
        debug_assert_eq!(tiles[ix], BLANK);

        Board {
            tiles,
            blank: (ix / SIZE, ix % SIZE),
        }
    }

    pub const fn goal() -> Board {
        GOAL
    }

    pub fn check_blank(&self, at: (usize, usize)) -> Result<(), BoardError> {
        if self.blank == at {
            Ok(())
        } else {
            Err(BoardError::BlankMismatch {
                row: at.0,
                col: at.1,
                found_row: self.blank.0,
                found_col: self.blank.1,
            })
        }
    }

    pub fn blank(&self) -> (usize, usize) {
        self.blank
    }

    pub fn tiles(&self) -> &Key {
        &self.tiles
    }

    pub fn key(&self) -> Key {
        self.tiles
    }

    pub fn is_goal(&self, goal: &Board) -> bool {
        self == goal
    }

    /// Slides the blank one step, or `None` if that would leave the board.
    pub fn apply(&self, mv: Move) -> Option<Board> {
        let (dr, dc) = mv.delta();
        let row = self.blank.0 as i32 + dr;
        let col = self.blank.1 as i32 + dc;
        let bounds = 0..SIZE as i32;
        if !bounds.contains(&row) || !bounds.contains(&col) {
            return None;
        }

        let target = (row as usize, col as usize);
        let mut next = *self;
        next.tiles[offset(self.blank)] = self[target];
        next.tiles[offset(target)] = BLANK;
        next.blank = target;
        Some(next)
    }

    /// Every board one slide away, in [`MOVES`] order.
    pub fn successors(&self) -> SmallVec<[(Board, Move); 4]> {
        MOVES
            .iter()
            .filter_map(|&mv| self.apply(mv).map(|next| (next, mv)))
            .collect()
    }

    pub fn replay(&self, moves: &[Move]) -> Option<Board> {
        moves.iter().try_fold(*self, |board, &mv| board.apply(mv))
    }
}

fn offset((row, col): (usize, usize)) -> usize {
    row * SIZE + col
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for line in self.tiles.chunks(SIZE) {
            if !first {
                f.write_char('\n')?;
            } else {
                first = false;
            }

            for &tile in line {
                if tile == BLANK {
                    f.write_str("  ")?;
                } else {
                    write!(f, "{} ", tile)?;
                }
            }
        }

        Ok(())
    }
}

impl Index<(usize, usize)> for Board {
    type Output = u8;
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.tiles[offset(index)]
    }
}

impl FromStr for Board {
    type Err = BoardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}

/// Rows are separated by newlines or `/`, cells by whitespace or commas.
pub fn parse_board(b: &str) -> Result<Board, BoardError> {
    let rows = b
        .trim()
        .split(|c| c == '\n' || c == '/')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(|row| {
            row.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|cell| !cell.is_empty())
                .map(|cell| {
                    cell.parse::<u8>()
                        .map_err(|_| BoardError::BadCell(cell.to_owned()))
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Board::from_rows(rows)
}

#[cfg(test)]
mod test {
    use super::*;

    fn board_with_blank_at(at: (usize, usize)) -> Board {
        let mut tiles = GOAL.key();
        tiles.swap(0, offset(at));
        Board::from_tiles(tiles).unwrap()
    }

    #[test]
    fn goal_is_canonical() {
        let goal = Board::new([[0, 1, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
        assert_eq!(goal, GOAL);
        assert_eq!(goal.blank(), (0, 0));
        assert!(goal.is_goal(&GOAL));
    }

    #[test]
    fn successor_counts_follow_blank_position() {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let board = board_with_blank_at((row, col));
                let edges = [row == 0, row == SIZE - 1, col == 0, col == SIZE - 1]
                    .iter()
                    .filter(|&&e| e)
                    .count();
                assert_eq!(board.successors().len(), 4 - edges, "blank at {:?}", (row, col));
            }
        }
    }

    #[test]
    fn successors_are_single_adjacent_swaps() {
        for ix in 0..CELLS {
            let board = board_with_blank_at((ix / SIZE, ix % SIZE));
            for (next, mv) in board.successors() {
                let (br, bc) = board.blank();
                let (nr, nc) = next.blank();
                assert_eq!(br.abs_diff(nr) + bc.abs_diff(nc), 1);

                let changed = board
                    .tiles()
                    .iter()
                    .zip(next.tiles())
                    .filter(|(a, b)| a != b)
                    .count();
                assert_eq!(changed, 2);
                assert_eq!(next[board.blank()], board[next.blank()]);
                assert_eq!(next.apply(mv.opposite()), Some(board));
            }
        }
    }

    #[test]
    fn successors_use_canonical_order() {
        let center = board_with_blank_at((1, 1));
        let moves: Vec<_> = center.successors().iter().map(|(_, mv)| *mv).collect();
        assert_eq!(moves, MOVES);

        let corner = GOAL.successors();
        assert_eq!(corner[0].1, Move::Down);
        assert_eq!(corner[1].1, Move::Right);
    }

    #[test]
    fn no_wraparound() {
        assert_eq!(GOAL.apply(Move::Up), None);
        assert_eq!(GOAL.apply(Move::Left), None);
        let right = GOAL.apply(Move::Right).unwrap();
        assert_eq!(right.key(), [1, 0, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn replay_stops_on_illegal_move() {
        let moves = [Move::Right, Move::Right, Move::Down];
        let board = GOAL.replay(&moves).unwrap();
        assert_eq!(board.key(), [1, 2, 5, 3, 4, 0, 6, 7, 8]);
        assert_eq!(board.replay(&[Move::Right]), None);
    }

    #[test]
    fn parse_accepts_slashes_and_newlines() {
        let a = parse_board("1 2 5 / 3 4 0 / 6 7 8").unwrap();
        let b: Board = "1,2,5\n3,4,0\n6,7,8\n".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.blank(), (1, 2));
    }

    #[test]
    fn parse_rejects_malformed_grids() {
        assert_eq!(
            parse_board("0 1 2 / 3 4 5"),
            Err(BoardError::RowCount { rows: 2 })
        );
        assert_eq!(
            parse_board("0 1 2 / 3 4 / 5 6 7 8"),
            Err(BoardError::RowLength { row: 1, len: 2 })
        );
        assert_eq!(
            parse_board("0 1 2 / 3 4 5 / 6 7 7"),
            Err(BoardError::Duplicate { value: 7 })
        );
        assert_eq!(
            parse_board("1 2 3 / 4 5 6 / 7 8 9"),
            Err(BoardError::OutOfRange { value: 9 })
        );
        assert_eq!(
            parse_board("0 1 2 / 3 x 5 / 6 7 8"),
            Err(BoardError::BadCell("x".to_owned()))
        );
    }

    #[test]
    fn blank_position_is_checked() {
        let rows = [[1, 2, 5], [3, 4, 0], [6, 7, 8]];
        assert!(Board::with_blank(rows, (1, 2)).is_ok());
        assert_eq!(
            Board::with_blank(rows, (0, 0)),
            Err(BoardError::BlankMismatch {
                row: 0,
                col: 0,
                found_row: 1,
                found_col: 2,
            })
        );
    }

    #[test]
    fn display_leaves_blank_empty() {
        let board = parse_board("1 2 5 / 3 4 0 / 6 7 8").unwrap();
        assert_eq!(board.to_string(), "1 2 5 \n3 4   \n6 7 8 ");
    }
}
