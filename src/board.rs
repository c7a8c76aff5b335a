use itertools::Itertools;
use std::{fmt, str::FromStr};

use crate::error::PuzzleError;

pub const ROWS: usize = 3;
pub const COLS: usize = 3;
pub const CELLS: usize = ROWS * COLS;

/// The solved configuration, with the blank in the centre.
pub const GOAL: Board = Board {
    cells: [1, 2, 3, 8, 0, 4, 7, 6, 5],
    blank: 4,
};

/// Index of every value inside [`GOAL`], keyed by value.
const GOAL_INDEX: [usize; CELLS] = goal_index();

const fn goal_index() -> [usize; CELLS] {
    let mut index = [0; CELLS];
    let mut i = 0;
    while i < CELLS {
        index[GOAL.cells[i] as usize] = i;
        i += 1;
    }
    index
}

/// Direction the blank travels in a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Enumeration order used for successor generation.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An immutable 3x3 board holding each of `0..=8` exactly once, `0` being the blank.
///
/// Boards are only built through validating constructors, so every value of
/// this type satisfies the permutation invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; CELLS],
    blank: usize,
}

impl Board {
    /// Builds a board from row-major cell values.
    pub fn from_flat(values: &[u8]) -> Result<Self, PuzzleError> {
        if values.len() != CELLS {
            return Err(PuzzleError::CellCount {
                expected: CELLS,
                found: values.len(),
            });
        }
        let blank = values
            .iter()
            .position(|&value| value == 0)
            .ok_or(PuzzleError::MissingBlank)?;

        let mut seen = [false; CELLS];
        for &value in values {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(PuzzleError::ValueOutOfRange(value))?;
            if *slot {
                return Err(PuzzleError::DuplicateValue(value));
            }
            *slot = true;
        }

        let mut cells = [0; CELLS];
        cells.copy_from_slice(values);
        Ok(Self { cells, blank })
    }

    pub fn from_rows(rows: [[u8; COLS]; ROWS]) -> Result<Self, PuzzleError> {
        Self::from_flat(&rows.iter().flatten().copied().collect_vec())
    }

    pub fn goal() -> Self {
        GOAL
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    pub fn rows(&self) -> [[u8; COLS]; ROWS] {
        let mut rows = [[0; COLS]; ROWS];
        for (i, &value) in self.cells.iter().enumerate() {
            rows[i / COLS][i % COLS] = value;
        }
        rows
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * COLS + col]
    }

    /// Row and column of the blank.
    pub fn locate_blank(&self) -> (usize, usize) {
        (self.blank / COLS, self.blank % COLS)
    }

    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// The board after sliding the blank one step, or `None` when that leaves the grid.
    pub fn try_move(&self, movement: Move) -> Option<Self> {
        let (row, col) = self.locate_blank();
        let (dr, dc) = movement.offset();

        let new_row = row as isize + dr;
        let new_col = col as isize + dc;

        if new_row >= 0 && new_row < ROWS as isize && new_col >= 0 && new_col < COLS as isize {
            Some(self.swap_blank(new_row as usize * COLS + new_col as usize))
        } else {
            None
        }
    }

    /// Every board one move away, in up, down, left, right order.
    pub fn successors(&self) -> impl Iterator<Item = (Board, Move)> {
        let board = *self;
        Move::ALL
            .into_iter()
            .filter_map(move |movement| board.try_move(movement).map(|next| (next, movement)))
    }

    /// Slides the tile at `(row, col)` into the blank when the two are orthogonally
    /// adjacent. Returns the unchanged board and `false` otherwise.
    pub fn apply_move(&self, row: usize, col: usize) -> (Board, bool) {
        let (blank_row, blank_col) = self.locate_blank();
        if row >= ROWS || col >= COLS {
            return (*self, false);
        }
        if row.abs_diff(blank_row) + col.abs_diff(blank_col) != 1 {
            return (*self, false);
        }
        (self.swap_blank(row * COLS + col), true)
    }

    /// The move that turns `self` into `next`, if they are one move apart.
    pub fn move_between(&self, next: &Board) -> Option<Move> {
        Move::ALL
            .into_iter()
            .find(|&movement| self.try_move(movement).as_ref() == Some(next))
    }

    /// Sum of the Manhattan distances of every tile to its goal cell.
    pub fn manhattan_distance(&self) -> u32 {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(i, &value)| {
                let target = GOAL_INDEX[value as usize];
                let distance = (i / COLS).abs_diff(target / COLS) + (i % COLS).abs_diff(target % COLS);
                distance as u32
            })
            .sum()
    }

    pub fn inversion_parity(&self) -> usize {
        inversion_count(&self.cells) % 2
    }

    fn swap_blank(&self, target: usize) -> Self {
        let mut cells = self.cells;
        cells.swap(self.blank, target);
        Self {
            cells,
            blank: target,
        }
    }
}

/// Number of pairs `i < j` with `values[i] > values[j]`, ignoring the blank.
pub fn inversion_count(values: &[u8]) -> usize {
    values
        .iter()
        .filter(|&&value| value != 0)
        .tuple_combinations()
        .filter(|(a, b)| a > b)
        .count()
}

/// Moves taking each board of `path` to the next one. `None` if two
/// consecutive boards are not a single move apart.
pub fn moves_along(path: &[Board]) -> Option<Vec<Move>> {
    path.iter()
        .tuple_windows()
        .map(|(current, next)| current.move_between(next))
        .collect()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(COLS) {
            for &val in row {
                if val == 0 {
                    write!(f, " . ")?;
                } else {
                    write!(f, "{:2} ", val)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = PuzzleError;

    /// Parses nine integers in row-major order, separated by whitespace, `,` or `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|_| PuzzleError::InvalidToken(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_flat(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn goal_is_goal() {
        assert!(GOAL.is_goal());
        assert!(Board::goal().is_goal());
        assert_eq!(GOAL.locate_blank(), (1, 1));
        assert!(!board("1 0 3 8 2 4 7 6 5").is_goal());
    }

    #[test]
    fn successors_follow_up_down_left_right() {
        let successors = GOAL.successors().collect_vec();
        let moves = successors.iter().map(|(_, movement)| *movement).collect_vec();
        assert_eq!(moves, Move::ALL.to_vec());
        assert_eq!(successors[0].0, board("1 0 3 8 2 4 7 6 5"));
        assert_eq!(successors[1].0, board("1 2 3 8 6 4 7 0 5"));
        assert_eq!(successors[2].0, board("1 2 3 0 8 4 7 6 5"));
        assert_eq!(successors[3].0, board("1 2 3 8 4 0 7 6 5"));
    }

    #[test]
    fn corner_blank_has_two_successors() {
        let corner = board("0 2 3 1 8 4 7 6 5");
        let moves = corner.successors().map(|(_, movement)| movement).collect_vec();
        assert_eq!(moves, vec![Move::Down, Move::Right]);
        // the source board is untouched
        assert_eq!(corner.locate_blank(), (0, 0));
    }

    #[test]
    fn apply_move_swaps_adjacent_tiles_only() {
        let (moved, ok) = GOAL.apply_move(0, 1);
        assert!(ok);
        assert_eq!(moved, board("1 0 3 8 2 4 7 6 5"));

        let (same, ok) = GOAL.apply_move(0, 0);
        assert!(!ok);
        assert_eq!(same, GOAL);

        let (same, ok) = GOAL.apply_move(1, 1);
        assert!(!ok);
        assert_eq!(same, GOAL);

        let (same, ok) = GOAL.apply_move(3, 1);
        assert!(!ok);
        assert_eq!(same, GOAL);
    }

    #[test]
    fn apply_move_round_trip() {
        let (moved, ok) = GOAL.apply_move(1, 2);
        assert!(ok);
        let (back, ok) = moved.apply_move(1, 1);
        assert!(ok);
        assert_eq!(back, GOAL);
    }

    #[test]
    fn invalid_boards_are_rejected() {
        assert_eq!(
            Board::from_flat(&[1, 2, 3]),
            Err(PuzzleError::CellCount {
                expected: 9,
                found: 3
            })
        );
        assert_eq!(
            Board::from_flat(&[1, 2, 3, 8, 9, 4, 7, 6, 5]),
            Err(PuzzleError::MissingBlank)
        );
        assert_eq!(
            Board::from_flat(&[1, 2, 3, 8, 0, 4, 7, 6, 9]),
            Err(PuzzleError::ValueOutOfRange(9))
        );
        assert_eq!(
            Board::from_flat(&[1, 1, 3, 8, 0, 4, 7, 6, 5]),
            Err(PuzzleError::DuplicateValue(1))
        );
        assert_eq!(
            "1 2 3 8 x 4 7 6 5".parse::<Board>(),
            Err(PuzzleError::InvalidToken("x".to_string()))
        );
    }

    #[test]
    fn parses_rows_and_separators() {
        let parsed = board("1,2,3 / 8,0,4 / 7,6,5");
        assert_eq!(parsed, GOAL);
        assert_eq!(Board::from_rows([[1, 2, 3], [8, 0, 4], [7, 6, 5]]), Ok(GOAL));
        assert_eq!(GOAL.rows(), [[1, 2, 3], [8, 0, 4], [7, 6, 5]]);
        assert_eq!(GOAL.get(2, 1), 6);
    }

    #[test]
    fn display_marks_blank() {
        assert_eq!(GOAL.to_string(), " 1  2  3 \n 8  .  4 \n 7  6  5 \n");
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(GOAL.manhattan_distance(), 0);
        assert_eq!(board("1 0 3 8 2 4 7 6 5").manhattan_distance(), 1);
        assert_eq!(board("2 8 3 1 6 4 7 0 5").manhattan_distance(), 5);
    }

    #[test]
    fn inversions() {
        assert_eq!(inversion_count(&[1, 2, 3, 8, 0, 4, 7, 6, 5]), 7);
        assert_eq!(inversion_count(&[1, 2, 3, 4, 5, 6, 7, 8, 0]), 0);
        assert_eq!(GOAL.inversion_parity(), 1);
        assert_eq!(board("2 1 3 8 0 4 7 6 5").inversion_parity(), 0);
    }

    #[test]
    fn moves_along_path() {
        let up = GOAL.try_move(Move::Up).unwrap();
        let left = up.try_move(Move::Left).unwrap();
        assert_eq!(moves_along(&[GOAL, up, left]), Some(vec![Move::Up, Move::Left]));
        assert_eq!(moves_along(&[GOAL, left]), None);
        assert_eq!(moves_along(&[GOAL]), Some(vec![]));
        assert_eq!(up.move_between(&GOAL), Some(Move::Down));
    }

    #[test]
    fn opposite_moves_cancel() {
        for movement in Move::ALL {
            let moved = GOAL.try_move(movement).unwrap();
            assert_eq!(moved.try_move(movement.opposite()), Some(GOAL));
        }
    }
}
