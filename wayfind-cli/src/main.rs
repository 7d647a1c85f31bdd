//! `wayfind`: shortest four-way path between two cells of a grid file.
//!
//! Run: cargo run --bin wayfind -- data/grid.txt --endpoints data/endpoints.txt

use std::io;

use clap::Parser;
use wayfind_cli::Args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    wayfind_cli::run(&args, &mut input, &mut out)?;
    Ok(())
}
