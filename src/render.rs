use itertools::Itertools;
use util::{
  grid::{Grid, Gridlike},
  pos::Pos,
};
use xword_gen::Puzzle;

const WALL: char = '█';

/// One line per row: walls as `█`, open cells as their letter or a space.
pub fn render_text(puzzle: &Puzzle, letters: &Grid<Option<char>>) -> String {
  (0..puzzle.height() as i32)
    .map(|y| {
      (0..puzzle.width() as i32)
        .map(|x| {
          let pos = Pos { x, y };
          if puzzle.is_open(pos) {
            letters.get(pos).cloned().flatten().unwrap_or(' ')
          } else {
            WALL
          }
        })
        .collect::<String>()
    })
    .join("\n")
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use xword_gen::{projector::letter_grid, Puzzle, Slot, Solution};

  use super::render_text;

  #[gtest]
  fn test_render_text() {
    let puzzle = Puzzle::from_layout(
      "__#
       #__",
    )
    .unwrap();
    let solution = Solution::from_words([
      (Slot::across(0, 0, 2), "HI".to_owned()),
      (Slot::across(1, 1, 2), "OK".to_owned()),
    ]);

    let text = render_text(&puzzle, &letter_grid(&puzzle, &solution));
    expect_eq!(text, "HI█\n█OK");
  }

  #[gtest]
  fn test_render_unfilled() {
    let puzzle = Puzzle::from_layout("_#_").unwrap();
    let text = render_text(&puzzle, &letter_grid(&puzzle, &Solution::from_words([])));
    expect_eq!(text, " █ ");
  }
}
