//! Example demonstrating greedy coloring of a puzzle.
//!
//! Reads a puzzle in the text format (digits 1-9 for givens; `0`, `.`, or `_`
//! for empty cells; whitespace ignored) and prints the resulting coloring as
//! 9 lines of 9 space-separated digits, with `_` for any cell the greedy
//! pass could not color.
//!
//! # Usage
//!
//! Solve a puzzle from a file:
//!
//! ```sh
//! cargo run --example solve_puzzle -- puzzle.txt
//! ```
//!
//! Or from stdin:
//!
//! ```sh
//! echo "53__7____6__195____98____6_8___6___34__8_3__17___2___6_6____28____419__5____8__79" \
//!     | cargo run --example solve_puzzle
//! ```
//!
//! Reject puzzles with conflicting givens instead of coloring them as-is:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --check puzzle.txt
//! ```

use std::{
    fs,
    io::{self, Read as _},
    path::PathBuf,
    process,
    str::FromStr as _,
};

use clap::Parser;
use tintoku_core::DigitGrid;
use tintoku_solver::{ConstraintGraph, greedy, validate};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// File containing the puzzle; reads stdin when omitted.
    #[arg(value_name = "FILE")]
    puzzle: Option<PathBuf>,

    /// Fail if the puzzle's givens conflict, instead of coloring as-is.
    #[arg(long)]
    check: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let input = match read_input(args.puzzle.as_deref()) {
        Ok(input) => input,
        Err(err) => {
            log::error!("failed to read puzzle: {err}");
            process::exit(1);
        }
    };

    let puzzle = match DigitGrid::from_str(&input) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            log::error!("failed to parse puzzle: {err}");
            process::exit(1);
        }
    };
    log::info!("parsed puzzle with {} givens", puzzle.given_count());

    let graph = ConstraintGraph::shared();
    if args.check {
        if let Err(conflict) = validate::check_grid(graph, &puzzle) {
            log::error!("inconsistent puzzle: {conflict}");
            process::exit(1);
        }
    }

    let coloring = greedy::color(graph, &puzzle);
    if !coloring.is_complete() {
        log::warn!(
            "greedy coloring left {} cells unassigned",
            coloring.uncolored().len()
        );
    }

    print!("{coloring}");
}

fn read_input(path: Option<&std::path::Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
