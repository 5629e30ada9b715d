//! Prints the additive distance lookup table.

use clap::Parser;
use distance_tables::LookupTable;

/// Prints the 8x8 additive distance table, indexed by
/// `[delta_rank][delta_file]`, as a single line.
#[derive(Parser, Debug)]
#[command(version = distance_tables::version(), about)]
struct Config {}

fn main() {
    let _config = Config::parse();
    println!("{}", LookupTable::h_dist_table());
}
