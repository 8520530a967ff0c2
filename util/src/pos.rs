use std::{
  fmt::Display,
  ops::{Add, Mul},
};

/// A cell coordinate: `x` is the column, `y` is the row.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pos {
  pub x: i32,
  pub y: i32,
}

impl Pos {
  pub const fn transpose(&self) -> Self {
    Self { x: self.y, y: self.x }
  }
}

impl Add<Diff> for Pos {
  type Output = Self;

  fn add(self, rhs: Diff) -> Self {
    Self { x: self.x + rhs.x, y: self.y + rhs.y }
  }
}

impl Display for Pos {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diff {
  pub x: i32,
  pub y: i32,
}

impl Diff {
  pub const DX: Self = Self { x: 1, y: 0 };
  pub const DY: Self = Self { x: 0, y: 1 };
}

impl Mul<Diff> for i32 {
  type Output = Diff;

  fn mul(self, rhs: Diff) -> Diff {
    Diff { x: self * rhs.x, y: self * rhs.y }
  }
}

#[cfg(test)]
mod tests {
  use googletest::prelude::*;

  use super::{Diff, Pos};

  #[gtest]
  fn test_offset() {
    expect_eq!(Pos { x: 1, y: 2 } + 3 * Diff::DX, Pos { x: 4, y: 2 });
    expect_eq!(Pos { x: 1, y: 2 } + 3 * Diff::DY, Pos { x: 1, y: 5 });
  }

  #[gtest]
  fn test_transpose() {
    expect_eq!(Pos { x: 1, y: 2 }.transpose(), Pos { x: 2, y: 1 });
  }
}
