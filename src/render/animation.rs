// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Frame-by-frame replay of a placement on an ANSI terminal.
//!
//! Every placement prefix that ends in a desk cell is one frame. A frame is
//! the header, a blank line, the grid, a blank line and the progress line;
//! afterwards the cursor moves back up `rows + 4` lines so the next frame
//! overwrites it.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::config::Glyphs;
use crate::geometry::{DeskLength, Placement};
use crate::render::Grid;
use crate::variant::GoalRule;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Replays placements onto a writer.
pub struct Animator<W: Write> {
    out: W,
    delay: Duration,
    glyphs: Glyphs,
}

impl<W: Write> Animator<W> {
    pub fn new(out: W, delay: Duration, glyphs: Glyphs) -> Self {
        Self { out, delay, glyphs }
    }

    /// Draw one frame per placed desk cell of a `rows` x `columns` room.
    ///
    /// Returns the number of frames drawn.
    pub fn play(
        &mut self,
        header: &str,
        rows: i32,
        columns: i32,
        placement: &Placement,
        length: DeskLength,
        rule: GoalRule,
    ) -> io::Result<usize> {
        write!(self.out, "{}", CLEAR_SCREEN)?;
        let mut grid = Grid::new(rows, columns);
        let mut desk_cells = 0;
        let mut frames = 0;
        for &cell in placement {
            grid.mark(cell);
            if !cell.is_desk() {
                continue;
            }
            desk_cells += 1;
            writeln!(self.out, "{}\n", header)?;
            writeln!(self.out, "{}", grid.to_glyphs(&self.glyphs))?;
            writeln!(
                self.out,
                "placed {} {}",
                rule.measure(desk_cells, length),
                rule.unit()
            )?;
            write!(self.out, "\x1b[{}A", rows + 4)?;
            self.out.flush()?;
            frames += 1;
            thread::sleep(self.delay);
        }
        self.out.flush()?;
        thread::sleep(self.delay * 20);
        Ok(frames)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Cell, Region};

    #[test]
    fn test_one_frame_per_desk_cell() {
        let mut placement = Placement::new();
        placement.push(Cell::split(0, 2));
        placement.append(Placement::filled(Region::new(0, 0, 1, 2)));

        let mut animator = Animator::new(Vec::new(), Duration::ZERO, Glyphs::ascii());
        let frames = animator
            .play("Solve", 1, 3, &placement, DeskLength::new(2), GoalRule::DeskCount)
            .unwrap();
        assert_eq!(frames, 2);

        let text = String::from_utf8(animator.into_inner()).unwrap();
        assert!(text.starts_with(CLEAR_SCREEN));
        assert!(text.contains("X.~\n"));
        assert!(text.contains("XX~\n"));
        assert!(text.contains("placed 0 desks"));
        assert!(text.contains("placed 1 desks"));
        assert_eq!(text.matches("\x1b[5A").count(), 2);
    }

    #[test]
    fn test_cell_count_progress() {
        let placement = Placement::filled(Region::with_size(1, 3));
        let mut animator = Animator::new(Vec::new(), Duration::ZERO, Glyphs::ascii());
        animator
            .play("Solve", 1, 3, &placement, DeskLength::new(7), GoalRule::CellCount)
            .unwrap();
        let text = String::from_utf8(animator.into_inner()).unwrap();
        assert!(text.contains("placed 3 cells"));
    }
}
