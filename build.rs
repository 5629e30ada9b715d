//! Precomputes the distance lookup tables and writes them as Rust array
//! literals to the output directory, where the library picks them up with
//! `include!`. Also records the version information from Git and the build
//! environment.

use std::fmt::Write;
use std::path::Path;
use std::{env, fs};

#[allow(dead_code, unreachable_pub)]
#[path = "src/distance.rs"]
mod distance;

fn generate_file(filename: &str, contents: &str) {
    let out_dir = env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join(filename);
    fs::write(dest_path, contents)
        .unwrap_or_else(|e| panic!("failed to write {filename}: {e}"));
}

// Debug formatting gives the shortest representation that parses back into the
// same f64 and always keeps the decimal point, so it is a valid float literal.
fn serialize_table(width: u8, cell: fn(u8, u8) -> f64) -> String {
    let mut result = String::new();
    result.push('[');
    for outer in 0..width {
        result.push('[');
        for inner in 0..width {
            write!(result, "{:?}, ", cell(outer, inner)).expect("writing to String never fails");
        }
        result.push_str("],\n");
    }
    result.push(']');
    result
}

fn generate_distance_tables() {
    // Rows are indexed by rank offset, columns by file offset.
    generate_file(
        "h_dist_table",
        &serialize_table(distance::H_DIST_WIDTH, |delta_rank, delta_file| {
            distance::h_dist(delta_file, delta_rank)
        }),
    );
    generate_file(
        "mult_dist_table",
        &serialize_table(distance::MULT_DIST_WIDTH, distance::mult_dist),
    );
}

fn main() -> shadow_rs::SdResult<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/distance.rs");
    generate_distance_tables();
    shadow_rs::new()
}
