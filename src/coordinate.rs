//! Square coordinates and the distance lookups the evaluation performs on
//! them.
//!
//! The evaluator works on a board surrounded by a one-square ring of sentinel
//! squares (the edges lasers run off), so files and ranks range over
//! `-1..=8` rather than `0..=7`. Offsets between two such squares reach 9,
//! which is why [`MULT_DIST_TABLE`] is 10 entries wide.

use std::fmt;

use anyhow::bail;

use crate::distance::H_DIST_WIDTH;
use crate::table::{H_DIST_TABLE, MULT_DIST_TABLE};

/// Width of the playable board.
pub const BOARD_WIDTH: i8 = 8;

const MIN_INDEX: i8 = -1;
const MAX_INDEX: i8 = BOARD_WIDTH;

/// Weight [`mult_dist_between`] assigns to a square paired with itself. It is
/// larger than any table entry so that coinciding squares dominate.
pub const SAME_SQUARE_MULT_DIST: f64 = 2.0;

/// A square on the padded board. Files and ranks within `0..BOARD_WIDTH` are
/// playable, `-1` and [`BOARD_WIDTH`] are the sentinel ring.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    file: i8,
    rank: i8,
}

impl Coordinate {
    /// Creates a coordinate after checking that both components lie on the
    /// padded board.
    ///
    /// # Errors
    ///
    /// Returns an error if `file` or `rank` is outside `-1..=8`.
    pub fn new(file: i8, rank: i8) -> anyhow::Result<Self> {
        if !(MIN_INDEX..=MAX_INDEX).contains(&file) {
            bail!("file should be within [{MIN_INDEX}, {MAX_INDEX}], got {file}");
        }
        if !(MIN_INDEX..=MAX_INDEX).contains(&rank) {
            bail!("rank should be within [{MIN_INDEX}, {MAX_INDEX}], got {rank}");
        }
        Ok(Self { file, rank })
    }

    /// File index, `-1` and [`BOARD_WIDTH`] being the sentinel columns.
    #[must_use]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// Rank index, `-1` and [`BOARD_WIDTH`] being the sentinel rows.
    #[must_use]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    /// Returns `false` for the sentinel ring around the board.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < BOARD_WIDTH && self.rank >= 0 && self.rank < BOARD_WIDTH
    }
}

impl TryFrom<(i8, i8)> for Coordinate {
    type Error = anyhow::Error;

    fn try_from((file, rank): (i8, i8)) -> anyhow::Result<Self> {
        Self::new(file, rank)
    }
}

/// Parses a playable square in algebraic notation, e.g. "e4".
impl TryFrom<&str> for Coordinate {
    type Error = anyhow::Error;

    fn try_from(square: &str) -> anyhow::Result<Self> {
        let mut chars = square.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("square should be two characters, got '{square}'");
        };
        if !('a'..='h').contains(&file) {
            bail!("file should be within 'a'..='h', got '{file}'");
        }
        if !('1'..='8').contains(&rank) {
            bail!("rank should be within '1'..='8', got '{rank}'");
        }
        // Both characters are ASCII after the checks above.
        Self::new((file as u8 - b'a') as i8, (rank as u8 - b'1') as i8)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(
                f,
                "{}{}",
                char::from(b'a' + self.file().unsigned_abs()),
                self.rank() + 1
            )
        } else {
            write!(f, "({}, {})", self.file(), self.rank())
        }
    }
}

/// Absolute `(delta_file, delta_rank)` offsets between two squares.
#[must_use]
pub const fn delta(a: Coordinate, b: Coordinate) -> (u8, u8) {
    (a.file().abs_diff(b.file()), a.rank().abs_diff(b.rank()))
}

/// Number of orthogonal steps between two squares.
#[must_use]
pub const fn manhattan_distance(a: Coordinate, b: Coordinate) -> u8 {
    let (delta_file, delta_rank) = delta(a, b);
    delta_file + delta_rank
}

/// Looks up the multiplicative distance weight between two squares of the
/// padded board. Identical squares yield [`SAME_SQUARE_MULT_DIST`].
#[must_use]
pub fn mult_dist_between(a: Coordinate, b: Coordinate) -> f64 {
    let (delta_file, delta_rank) = delta(a, b);
    if delta_file == 0 && delta_rank == 0 {
        return SAME_SQUARE_MULT_DIST;
    }
    MULT_DIST_TABLE[usize::from(delta_rank)][usize::from(delta_file)]
}

/// Looks up the additive distance weight between two squares, which is only
/// tabulated for offsets within the playable board. Returns `None` when either
/// offset reaches into the sentinel ring.
#[must_use]
pub fn h_dist_between(a: Coordinate, b: Coordinate) -> Option<f64> {
    let (delta_file, delta_rank) = delta(a, b);
    if delta_file >= H_DIST_WIDTH || delta_rank >= H_DIST_WIDTH {
        return None;
    }
    Some(H_DIST_TABLE[usize::from(delta_rank)][usize::from(delta_file)])
}
