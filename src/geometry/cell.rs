// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Occupied cells and their roles.

/// What an occupied cell is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellRole {
    /// Part of a desk.
    Desk,
    /// Part of a split line separating two sub-regions.
    Split,
}

/// One occupied grid cell in absolute (or, inside the memo table, relative) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
    pub role: CellRole,
}

impl Cell {
    pub const fn desk(row: i32, col: i32) -> Self {
        Self {
            row,
            col,
            role: CellRole::Desk,
        }
    }

    pub const fn split(row: i32, col: i32) -> Self {
        Self {
            row,
            col,
            role: CellRole::Split,
        }
    }

    #[inline]
    pub fn is_desk(&self) -> bool {
        self.role == CellRole::Desk
    }

    /// Shift the cell by `(rows, cols)`.
    #[inline]
    pub const fn translated(self, rows: i32, cols: i32) -> Self {
        Self {
            row: self.row + rows,
            col: self.col + cols,
            role: self.role,
        }
    }

    /// Swap row and column.
    #[inline]
    pub const fn transposed(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
            role: self.role,
        }
    }
}
