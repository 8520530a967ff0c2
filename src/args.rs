use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Fill a crossword structure from a word list", long_about = None)]
pub struct Args {
  /// Structure file, one row per line: `_` for an open cell, `#` for a wall.
  pub structure: PathBuf,

  /// Word list, one word per line.
  pub words: PathBuf,

  /// Also write the filled grid to this file, bitcode-encoded.
  #[arg(long)]
  pub output: Option<PathBuf>,

  /// Maintain arc consistency after every tentative assignment.
  #[arg(long)]
  pub inference: bool,

  #[arg(short, long)]
  pub verbose: bool,
}
