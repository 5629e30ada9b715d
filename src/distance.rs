//! Distance-weighting formulas used to build the lookup tables.
//!
//! Both formulas take the absolute file and rank offsets between two squares
//! and return a weight that decays as the squares move apart: [`h_dist`] sums
//! the reciprocals of the offsets, [`mult_dist`] multiplies them. The result
//! is rounded to a fixed number of decimal places so that the tables are
//! stable when printed and easy to compare against.
//!
//! This module is also compiled into `build.rs` to precompute the tables and
//! must not depend on anything else in the crate.

/// Number of file (and rank) offsets covered by the additive table: offsets on
/// a regular 8x8 board range from 0 to 7.
pub const H_DIST_WIDTH: u8 = 8;
/// Number of file (and rank) offsets covered by the multiplicative table. The
/// board is surrounded by a ring of sentinel squares, so offsets reach 9.
pub const MULT_DIST_WIDTH: u8 = 10;

/// Decimal places kept by [`h_dist`].
pub const H_DIST_PRECISION: i32 = 8;
/// Decimal places kept by [`mult_dist`].
pub const MULT_DIST_PRECISION: i32 = 6;

/// Rounds `value` to `places` decimal digits, breaking ties away from zero.
///
/// None of the table cells lands on a tie, so the result matches rounding of
/// the exact decimal expansion.
#[must_use]
pub fn round_to_decimal_places(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    (value * scale).round() / scale
}

#[inline]
fn reciprocal(delta: u8) -> f64 {
    1.0 / (f64::from(delta) + 1.0)
}

/// Additive distance weight: `1 / (delta_file + 1) + 1 / (delta_rank + 1)`,
/// rounded to [`H_DIST_PRECISION`] decimal places.
///
/// Symmetric in its arguments. Equals `2.0` for coinciding squares.
#[must_use]
pub fn h_dist(delta_file: u8, delta_rank: u8) -> f64 {
    round_to_decimal_places(
        reciprocal(delta_file) + reciprocal(delta_rank),
        H_DIST_PRECISION,
    )
}

/// Multiplicative distance weight: `1 / (delta_file + 1) * 1 / (delta_rank +
/// 1)`, rounded to [`MULT_DIST_PRECISION`] decimal places.
///
/// Symmetric in its arguments. Equals `1.0` for coinciding squares.
#[must_use]
pub fn mult_dist(delta_file: u8, delta_rank: u8) -> f64 {
    round_to_decimal_places(
        reciprocal(delta_file) * reciprocal(delta_rank),
        MULT_DIST_PRECISION,
    )
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    // Correctly rounded decimal route: format with a fixed precision and parse
    // the result back.
    fn decimal_round(value: f64, places: i32) -> f64 {
        let places = usize::try_from(places).unwrap();
        format!("{value:.places$}").parse().unwrap()
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to_decimal_places(1.0 / 3.0, 2), 0.33);
        assert_eq!(round_to_decimal_places(2.0 / 3.0, 4), 0.6667);
        assert_eq!(round_to_decimal_places(1.5, 0), 2.0);
        assert_eq!(round_to_decimal_places(2.5, 0), 3.0);
        assert_eq!(round_to_decimal_places(-2.5, 0), -3.0);
        assert_eq!(round_to_decimal_places(0.25, 8), 0.25);
    }

    #[test]
    fn h_dist_values() {
        assert_eq!(h_dist(0, 0), 2.0);
        assert_eq!(h_dist(1, 0), 1.5);
        assert_eq!(h_dist(2, 0), 1.333_333_33);
        assert_eq!(h_dist(5, 0), 1.166_666_67);
        assert_eq!(h_dist(6, 6), 0.285_714_29);
        assert_eq!(h_dist(7, 7), 0.25);
    }

    #[test]
    fn h_dist_matches_formula() {
        for delta_file in 0..H_DIST_WIDTH {
            for delta_rank in 0..H_DIST_WIDTH {
                let exact =
                    1.0 / f64::from(delta_file + 1) + 1.0 / f64::from(delta_rank + 1);
                let value = h_dist(delta_file, delta_rank);
                assert_eq!(value, decimal_round(exact, H_DIST_PRECISION));
                assert_eq!(value, h_dist(delta_rank, delta_file));
                assert!(value > 0.0 && value <= 2.0, "{value} out of range");
                assert!(value >= 0.25, "{value} below the in-range minimum");
            }
        }
    }

    #[test]
    fn mult_dist_values() {
        assert_eq!(mult_dist(0, 0), 1.0);
        assert_eq!(mult_dist(0, 1), 0.5);
        assert_eq!(mult_dist(0, 2), 0.333_333);
        assert_eq!(mult_dist(2, 9), 0.033_333);
        assert_eq!(mult_dist(7, 7), 0.015_625);
        assert_eq!(mult_dist(9, 9), 0.01);
    }

    #[test]
    fn mult_dist_matches_formula() {
        for delta_file in 0..MULT_DIST_WIDTH {
            for delta_rank in 0..MULT_DIST_WIDTH {
                let exact =
                    (1.0 / f64::from(delta_file + 1)) * (1.0 / f64::from(delta_rank + 1));
                let value = mult_dist(delta_file, delta_rank);
                assert_eq!(value, decimal_round(exact, MULT_DIST_PRECISION));
                assert_eq!(value, mult_dist(delta_rank, delta_file));
                assert!(value > 0.0 && value <= 1.0, "{value} out of range");
                assert!(value >= 0.01, "{value} below the in-range minimum");
            }
        }
    }
}
