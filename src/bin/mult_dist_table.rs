//! Prints the multiplicative distance lookup table.

use clap::Parser;
use distance_tables::LookupTable;

/// Prints the 10x10 multiplicative distance table, indexed by
/// `[delta_file][delta_rank]`, as a single line.
#[derive(Parser, Debug)]
#[command(version = distance_tables::version(), about)]
struct Config {}

fn main() {
    let _config = Config::parse();
    println!("{}", LookupTable::mult_dist_table());
}
