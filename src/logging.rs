use std::env;

use log::LevelFilter;

/// Installs `env_logger` at `Info`, or `Debug` when `verbose` is set. An
/// explicit `RUST_LOG` overrides both.
pub fn init_logger(verbose: bool) {
  let level = if verbose {
    LevelFilter::Debug
  } else {
    LevelFilter::Info
  };

  let mut builder = env_logger::Builder::new();
  builder
    .filter(None, level)
    .format_timestamp(None)
    .format_target(false);

  if let Ok(filters) = env::var("RUST_LOG") {
    builder.parse_filters(&filters);
  }

  builder.init();
}
