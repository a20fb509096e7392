// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grids of cell markers built from placements.
//!
//! # Examples
//!
//! ```
//! use room_planner::geometry::{Cell, Placement};
//! use room_planner::render::Grid;
//!
//! let mut placement = Placement::new();
//! placement.push(Cell::desk(0, 0));
//! placement.push(Cell::desk(0, 1));
//! placement.push(Cell::split(1, 0));
//! let grid = Grid::from_placement(2, 3, &placement);
//! assert_eq!(grid.to_text(), "XX.\n...");
//! ```

use crate::config::Glyphs;
use crate::geometry::{Cell, CellRole, Placement};

/// A `rows` x `columns` grid; each cell holds the role of the last
/// placement cell written to it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Option<CellRole>>,
}

impl Grid {
    pub fn new(rows: i32, columns: i32) -> Self {
        let rows = rows.max(0) as usize;
        let columns = columns.max(0) as usize;
        Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
        }
    }

    pub fn from_placement(rows: i32, columns: i32, placement: &Placement) -> Self {
        let mut grid = Self::new(rows, columns);
        for &cell in placement {
            grid.mark(cell);
        }
        grid
    }

    /// Record `cell`; cells outside the grid are ignored.
    pub fn mark(&mut self, cell: Cell) {
        if let Some(index) = self.index(cell.row, cell.col) {
            self.cells[index] = Some(cell.role);
        }
    }

    pub fn role(&self, row: i32, col: i32) -> Option<CellRole> {
        self.index(row, col).and_then(|index| self.cells[index])
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.rows && col < self.columns).then(|| row * self.columns + col)
    }

    /// Solution file format: `X` for desks, `.` for everything else, rows
    /// separated by newlines, no trailing newline.
    pub fn to_text(&self) -> String {
        self.render(|role| match role {
            Some(CellRole::Desk) => "X",
            _ => ".",
        })
        .join("\n")
    }

    /// Console format: one line per row, each terminated by a newline.
    pub fn to_glyphs(&self, glyphs: &Glyphs) -> String {
        let mut text = String::new();
        for line in self.render(|role| match role {
            Some(CellRole::Desk) => glyphs.desk.as_str(),
            Some(CellRole::Split) => glyphs.split.as_str(),
            None => glyphs.empty.as_str(),
        }) {
            text.push_str(&line);
            text.push('\n');
        }
        text
    }

    fn render<'g>(&self, marker: impl Fn(Option<CellRole>) -> &'g str) -> Vec<String> {
        if self.columns == 0 {
            return vec![String::new(); self.rows];
        }
        self.cells
            .chunks(self.columns)
            .map(|row| row.iter().map(|&role| marker(role)).collect())
            .collect()
    }
}
