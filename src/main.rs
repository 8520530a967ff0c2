#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;
mod logging;
mod render;

use std::{
  fs::{self, File},
  io::{BufRead, BufReader, Write},
  path::Path,
};

use args::Args;
use clap::Parser;
use log::info;
use render::render_text;
use util::{bitcode, error::XWordResult, grid::Grid, time::time_fn};
use xword_dict::Vocabulary;
use xword_gen::{projector::letter_grid, Puzzle, Solver, SolverConfig};

fn read_puzzle(path: &Path) -> XWordResult<Puzzle> {
  Puzzle::from_layout(&fs::read_to_string(path)?)
}

fn read_vocabulary(path: &Path) -> XWordResult<Vocabulary> {
  Vocabulary::parse_word_list(
    BufReader::new(File::open(path)?)
      .lines()
      .collect::<Result<Vec<_>, _>>()?,
  )
}

fn save_grid(grid: &Grid<Option<char>>, path: &Path) -> XWordResult {
  let result = bitcode::encode(grid);
  let mut file = File::create(path)?;
  file.write_all(&result)?;
  Ok(())
}

fn main() -> XWordResult {
  let args = Args::parse();
  logging::init_logger(args.verbose);

  let puzzle = read_puzzle(&args.structure)?;
  let vocabulary = read_vocabulary(&args.words)?;
  info!(
    "Filling {} slots from {} words",
    puzzle.slot_count(),
    vocabulary.len()
  );

  let solver = Solver::with_config(
    &puzzle,
    &vocabulary,
    SolverConfig { inference: args.inference },
  );
  let (time, (solution, stats)) = time_fn(|| solver.solve_with_stats());
  info!(
    "Took {}s ({} nodes, {} backtracks)",
    time.as_secs_f32(),
    stats.nodes,
    stats.backtracks
  );

  let Some(solution) = solution else {
    println!("No solution.");
    return Ok(());
  };

  let grid = letter_grid(&puzzle, &solution);
  println!("{}", render_text(&puzzle, &grid));
  if let Some(output) = &args.output {
    save_grid(&grid, output)?;
    info!("Saved grid to {}", output.display());
  }

  Ok(())
}
