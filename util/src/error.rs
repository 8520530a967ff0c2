use core::fmt;
use std::{
  error::Error,
  fmt::{Display, Formatter},
};

/// Errors raised while loading or constructing a puzzle. An unsatisfiable
/// puzzle is not an error: solving reports that as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XWordError {
  /// Malformed structure or word list text.
  Parse(String),
  /// A puzzle definition that violates a structural invariant (empty slot,
  /// overlap outside a slot, slot off the grid, ...).
  InvalidPuzzle(String),
  Internal(String),
}

impl Display for XWordError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      XWordError::Parse(msg) => write!(f, "Parse error: {msg}"),
      XWordError::InvalidPuzzle(msg) => write!(f, "Invalid puzzle: {msg}"),
      XWordError::Internal(msg) => write!(f, "Internal error: {msg}"),
    }
  }
}

impl Error for XWordError {}

pub type XWordResult<T = ()> = Result<T, Box<dyn Error>>;
