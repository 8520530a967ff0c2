use std::fmt::Debug;

use bitcode::{Decode, Encode};

use crate::{
  error::{XWordError, XWordResult},
  pos::Pos,
};

pub trait Gridlike<T> {
  fn width(&self) -> u32;
  fn height(&self) -> u32;

  fn in_bounds(&self, pos: Pos) -> bool {
    pos.x >= 0 && pos.x < self.width() as i32 && pos.y >= 0 && pos.y < self.height() as i32
  }

  fn get(&self, pos: Pos) -> Option<&T>;

  fn iter_row<'a, 'b>(&'a self, y: u32) -> impl Iterator<Item = &'b T>
  where
    'a: 'b,
    T: 'a;
  fn iter_col<'a, 'b>(&'a self, x: u32) -> impl Iterator<Item = &'b T>
  where
    'a: 'b,
    T: 'a;

  fn transpose(&self) -> impl Gridlike<T>;
}

pub trait MutGridlike<T>: Gridlike<T> {
  fn get_mut(&mut self, pos: Pos) -> Option<&mut T>;
}

/// Row-major rectangular grid.
#[derive(Clone, PartialEq, Eq, Encode, Decode)]
pub struct Grid<T> {
  grid: Vec<T>,
  width: u32,
  height: u32,
}

impl<T> Grid<T> {
  pub fn from_vec(grid: Vec<T>, width: u32, height: u32) -> XWordResult<Self> {
    let expected_size = width as usize * height as usize;
    if grid.len() != expected_size {
      return Err(
        XWordError::Internal(format!(
          "Expected grid.len() == expected_size, {} != {expected_size}",
          grid.len()
        ))
        .into(),
      );
    }

    Ok(Self { grid, width, height })
  }

  fn idx(&self, pos: Pos) -> usize {
    debug_assert!(self.in_bounds(pos));
    pos.x as usize + pos.y as usize * self.width as usize
  }
}

impl<T> Grid<T>
where
  T: Default,
{
  pub fn new(width: u32, height: u32) -> Self {
    Self {
      grid: (0..width as usize * height as usize)
        .map(|_| T::default())
        .collect(),
      width,
      height,
    }
  }
}

impl<T> Gridlike<T> for Grid<T> {
  fn width(&self) -> u32 {
    self.width
  }

  fn height(&self) -> u32 {
    self.height
  }

  fn get(&self, pos: Pos) -> Option<&T> {
    self
      .in_bounds(pos)
      .then(|| self.grid.get(self.idx(pos)))
      .flatten()
  }

  fn iter_row<'a, 'b>(&'a self, y: u32) -> impl Iterator<Item = &'b T>
  where
    'a: 'b,
    T: 'a,
  {
    let y = y as i32;
    (0..self.width()).flat_map(move |x| self.get(Pos { x: x as i32, y }))
  }

  fn iter_col<'a, 'b>(&'a self, x: u32) -> impl Iterator<Item = &'b T>
  where
    'a: 'b,
    T: 'a,
  {
    let x = x as i32;
    (0..self.height()).flat_map(move |y| self.get(Pos { x, y: y as i32 }))
  }

  fn transpose(&self) -> impl Gridlike<T> {
    TransposeGrid { grid: self }
  }
}

impl<T> MutGridlike<T> for Grid<T> {
  fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
    self
      .in_bounds(pos)
      .then(|| {
        let index = self.idx(pos);
        self.grid.get_mut(index)
      })
      .flatten()
  }
}

impl<T: Debug> Debug for Grid<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    (0..self.height).try_fold((), |_, y| {
      self.iter_row(y).try_fold((), |_, t| write!(f, "{t:?} "))?;
      writeln!(f)
    })
  }
}

/// A view of a grid with rows and columns swapped.
pub struct TransposeGrid<'a, T> {
  grid: &'a Grid<T>,
}

impl<T> Gridlike<T> for TransposeGrid<'_, T> {
  fn width(&self) -> u32 {
    self.grid.height()
  }

  fn height(&self) -> u32 {
    self.grid.width()
  }

  fn get(&self, pos: Pos) -> Option<&T> {
    self.grid.get(pos.transpose())
  }

  fn iter_row<'b, 'c>(&'b self, y: u32) -> impl Iterator<Item = &'c T>
  where
    'b: 'c,
    T: 'b,
  {
    self.grid.iter_col(y)
  }

  fn iter_col<'b, 'c>(&'b self, x: u32) -> impl Iterator<Item = &'c T>
  where
    'b: 'c,
    T: 'b,
  {
    self.grid.iter_row(x)
  }

  fn transpose(&self) -> impl Gridlike<T> {
    self.grid
  }
}

impl<G, T> Gridlike<T> for &G
where
  G: Gridlike<T>,
{
  fn width(&self) -> u32 {
    (**self).width()
  }
  fn height(&self) -> u32 {
    (**self).height()
  }
  fn in_bounds(&self, pos: Pos) -> bool {
    (**self).in_bounds(pos)
  }
  fn get(&self, pos: Pos) -> Option<&T> {
    (**self).get(pos)
  }
  fn iter_row<'a, 'b>(&'a self, y: u32) -> impl Iterator<Item = &'b T>
  where
    'a: 'b,
    T: 'a,
  {
    (**self).iter_row(y)
  }
  fn iter_col<'a, 'b>(&'a self, x: u32) -> impl Iterator<Item = &'b T>
  where
    'a: 'b,
    T: 'a,
  {
    (**self).iter_col(x)
  }
  fn transpose(&self) -> impl Gridlike<T> {
    (**self).transpose()
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;

  use crate::pos::Pos;

  use super::{Grid, Gridlike, MutGridlike};

  #[gtest]
  fn test_from_vec_size_mismatch() {
    expect_that!(Grid::from_vec(vec![1, 2, 3], 2, 2), err(anything()));
  }

  #[gtest]
  fn test_transpose() {
    let grid = Grid::from_vec(vec![1, 2, 3, 4, 5, 6], 3, 2).unwrap();
    let transposed = grid.transpose();
    expect_eq!(transposed.width(), 2);
    expect_eq!(transposed.height(), 3);
    expect_that!(transposed.get(Pos { x: 1, y: 0 }).cloned(), some(eq(4)));
    expect_that!(
      transposed.iter_row(2).cloned().collect::<Vec<_>>(),
      container_eq([3, 6])
    );
  }

  #[gtest]
  fn test_get_mut() {
    let mut grid = Grid::<u32>::new(2, 2);
    *grid.get_mut(Pos { x: 1, y: 1 }).unwrap() = 7;
    expect_true!(grid.get_mut(Pos { x: 2, y: 0 }).is_none());
    expect_that!(grid.get(Pos { x: 1, y: 1 }).cloned(), some(eq(7)));
    expect_that!(
      grid.iter_row(1).cloned().collect::<Vec<_>>(),
      container_eq([0, 7])
    );
  }
}
