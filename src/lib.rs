//! Distance-weighting lookup tables for chess evaluation.
//!
//! The evaluation rewards pieces that are close to the opponent's king. Rather
//! than computing the weights on every call, it indexes precomputed tables by
//! the file and rank offsets between two squares:
//!
//! - [`distance::h_dist`]: `1 / (delta_file + 1) + 1 / (delta_rank + 1)`,
//!   tabulated 8x8 in [`table::H_DIST_TABLE`].
//! - [`distance::mult_dist`]: `1 / (delta_file + 1) * 1 / (delta_rank + 1)`,
//!   tabulated 10x10 in [`table::MULT_DIST_TABLE`].
//!
//! The `h_dist_table` and `mult_dist_table` binaries print the tables.

// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]
// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery
)]
#![deny(clippy::perf)]

pub mod coordinate;
pub mod distance;
pub mod table;

pub use table::LookupTable;

use shadow_rs::shadow;

shadow!(build);

/// Returns the full version that can be used to identify how the tables were
/// built in the first place.
#[must_use]
pub fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}
