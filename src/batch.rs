// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Batch runs over a level directory.
//!
//! Every `.in` file of the directory is read, each room is solved with one
//! shared [`SolveContext`] (so the memo table carries over between rooms and
//! files), every result is checked against its goal, and the text grids are
//! written to the matching `.out` file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::{RenderConfig, SolverConfig};
use crate::context::SolveContext;
use crate::error::PlannerError;
use crate::files::{instance_files, is_example, output_path, parse_rooms, write_solution, Room};
use crate::geometry::Placement;
use crate::render::{Animator, Grid};
use crate::variant::ProblemVariant;

/// Outcome of one instance file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub input: PathBuf,
    /// Where the solution was written, if it was.
    pub output: Option<PathBuf>,
    pub rooms: usize,
    pub elapsed: Duration,
}

/// Solves instance files for one problem variant, reporting to `console`.
pub struct BatchRunner<W: Write> {
    variant: ProblemVariant,
    ctx: SolveContext,
    render: RenderConfig,
    write_outputs: bool,
    console: W,
}

impl<W: Write> BatchRunner<W> {
    pub fn new(
        variant: ProblemVariant,
        solver: &SolverConfig,
        render: RenderConfig,
        console: W,
    ) -> Self {
        Self {
            variant,
            ctx: SolveContext::for_variant(variant, solver),
            render,
            write_outputs: true,
            console,
        }
    }

    /// Enable or disable writing `.out` files.
    pub fn write_outputs(mut self, enabled: bool) -> Self {
        self.write_outputs = enabled;
        self
    }

    pub fn context(&self) -> &SolveContext {
        &self.ctx
    }

    pub fn into_console(self) -> W {
        self.console
    }

    /// Solve every instance file in `dir`, in name order.
    pub fn run_dir(&mut self, dir: &Path) -> Result<Vec<FileReport>, PlannerError> {
        let files = instance_files(dir)?;
        info!(dir = %dir.display(), files = files.len(), level = %self.variant, "solving level");
        files.iter().map(|input| self.run_file(input)).collect()
    }

    /// Solve, check and (unless disabled or an example) write one instance file.
    pub fn run_file(&mut self, input: &Path) -> Result<FileReport, PlannerError> {
        let started = Instant::now();
        info!(file = %input.display(), "run");
        let text = fs::read_to_string(input).map_err(|err| PlannerError::io(input, err))?;
        let rooms = parse_rooms(input, &text, self.variant)?;
        let solution = self.solve_rooms(input, &rooms)?;

        let output = if self.write_outputs && !is_example(input) && !solution.is_empty() {
            let path = output_path(input);
            write_solution(&path, &solution)?;
            Some(path)
        } else {
            None
        };

        let elapsed = started.elapsed();
        debug!(
            memo_entries = self.ctx.memo.len(),
            stats = %self.ctx.statistics,
            "solver statistics"
        );
        info!(
            file = %input.display(),
            rooms = rooms.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "done"
        );
        Ok(FileReport {
            input: input.to_path_buf(),
            output,
            rooms: rooms.len(),
            elapsed,
        })
    }

    /// Solve rooms in order and return the solution file contents: one text
    /// grid per room, separated by blank lines.
    ///
    /// Stops at the first room whose result misses its goal.
    pub fn solve_rooms(&mut self, path: &Path, rooms: &[Room]) -> Result<String, PlannerError> {
        let mut grids = Vec::with_capacity(rooms.len());
        for (index, room) in rooms.iter().enumerate() {
            let placement = self.ctx.solve(room.region(), room.length);
            self.present(room, &placement)
                .map_err(|err| PlannerError::io("<console>", err))?;
            self.check_goal(path, index + 1, room, &placement)?;
            grids.push(format!(
                "{}\n",
                Grid::from_placement(room.rows, room.columns, &placement).to_text()
            ));
        }
        Ok(grids.join("\n"))
    }

    fn check_goal(
        &self,
        path: &Path,
        index: usize,
        room: &Room,
        placement: &Placement,
    ) -> Result<(), PlannerError> {
        let rule = self.variant.goal_rule();
        let achieved = rule.achieved(placement, room.length);
        debug!(
            room = index,
            columns = room.columns,
            rows = room.rows,
            length = room.length.get(),
            achieved,
            goal = room.goal,
            "solved room"
        );
        if achieved != room.goal {
            return Err(PlannerError::GoalMismatch {
                path: path.to_path_buf(),
                room: index,
                expected: room.goal,
                achieved,
                rule,
            });
        }
        Ok(())
    }

    fn present(&mut self, room: &Room, placement: &Placement) -> io::Result<()> {
        let header = format!(
            "Solve {} room size: {}x{} desk length: {}",
            self.variant, room.columns, room.rows, room.length
        );
        if self.render.show_grids {
            writeln!(self.console, "{}", header)?;
            let grid = Grid::from_placement(room.rows, room.columns, placement);
            writeln!(self.console, "{}", grid.to_glyphs(&self.render.glyphs))?;
        }
        if self.render.animates(room.rows, room.columns) {
            let mut animator = Animator::new(
                &mut self.console,
                self.render.animation,
                self.render.glyphs.clone(),
            );
            animator.play(
                &header,
                room.rows,
                room.columns,
                placement,
                room.length,
                self.variant.goal_rule(),
            )?;
        }
        Ok(())
    }
}
