//! Materialized distance lookup tables.
//!
//! The tables are available in two forms: [`H_DIST_TABLE`] and
//! [`MULT_DIST_TABLE`] are precomputed in `build.rs` and can be indexed in
//! constant time by the evaluation, while [`LookupTable`] builds the same
//! values at runtime and renders them in the bracketed list notation printed
//! by the table generators.

use std::fmt;

use itertools::Itertools;

use crate::distance::{h_dist, mult_dist, H_DIST_WIDTH, MULT_DIST_WIDTH};

const H_DIST_SIZE: usize = H_DIST_WIDTH as usize;
const MULT_DIST_SIZE: usize = MULT_DIST_WIDTH as usize;

/// Additive distance weights indexed by `[delta_rank][delta_file]`.
///
/// Generated in build.rs.
pub const H_DIST_TABLE: [[f64; H_DIST_SIZE]; H_DIST_SIZE] =
    include!(concat!(env!("OUT_DIR"), "/h_dist_table"));
/// Multiplicative distance weights indexed by `[delta_file][delta_rank]`. The
/// formula is symmetric, so either order produces the same weight.
///
/// Generated in build.rs.
pub const MULT_DIST_TABLE: [[f64; MULT_DIST_SIZE]; MULT_DIST_SIZE] =
    include!(concat!(env!("OUT_DIR"), "/mult_dist_table"));

/// Two-dimensional table of weights stored outer-index-major.
#[derive(Clone, Debug, PartialEq)]
pub struct LookupTable {
    rows: Vec<Vec<f64>>,
}

impl LookupTable {
    /// Builds the 8x8 additive table: the outer index is the rank offset, the
    /// inner index is the file offset, and each cell is
    /// `h_dist(delta_file, delta_rank)`.
    #[must_use]
    pub fn h_dist_table() -> Self {
        Self {
            rows: (0..H_DIST_WIDTH)
                .map(|delta_rank| {
                    (0..H_DIST_WIDTH)
                        .map(|delta_file| h_dist(delta_file, delta_rank))
                        .collect()
                })
                .collect(),
        }
    }

    /// Builds the 10x10 multiplicative table: cell `[j][i]` is
    /// `mult_dist(j, i)`, i.e. the outer index is passed as the file offset.
    #[must_use]
    pub fn mult_dist_table() -> Self {
        Self {
            rows: (0..MULT_DIST_WIDTH)
                .map(|j| (0..MULT_DIST_WIDTH).map(|i| mult_dist(j, i)).collect())
                .collect(),
        }
    }

    /// Outer entries in order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the number of outer entries and the length of the first inner
    /// entry (all inner entries have the same length).
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows.len(), self.rows.first().map_or(0, Vec::len))
    }

    /// Returns the cell at `[outer][inner]` or `None` if either index is out of
    /// range.
    #[must_use]
    pub fn get(&self, outer: usize, inner: usize) -> Option<f64> {
        self.rows.get(outer)?.get(inner).copied()
    }
}

impl<const N: usize> From<[[f64; N]; N]> for LookupTable {
    fn from(table: [[f64; N]; N]) -> Self {
        Self {
            rows: table.iter().map(|row| row.to_vec()).collect(),
        }
    }
}

/// Renders the table as nested, comma-separated lists, e.g. `[[2.0, 1.5],
/// [1.5, 1.0]]`. Values use the shortest representation that reads back into
/// the same `f64` and keep a trailing `.0` when integral.
impl fmt::Display for LookupTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.rows.iter().format_with(", ", |row, write_row| {
                write_row(&format_args!(
                    "[{}]",
                    row.iter()
                        .format_with(", ", |value, write_value| write_value(&format_args!(
                            "{value:?}"
                        )))
                ))
            })
        )
    }
}
