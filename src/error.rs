// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for reading, solving and writing room batches.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::variant::GoalRule;

/// Errors that abort a batch.
#[derive(Debug)]
pub enum PlannerError {
    /// The level directory does not exist or is not a directory.
    MissingLevelDir { path: PathBuf },

    /// A line of an instance file could not be read as a room.
    MalformedInstance {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A solved room does not reach the goal recorded in its instance file.
    GoalMismatch {
        path: PathBuf,
        room: usize,
        expected: usize,
        achieved: usize,
        rule: GoalRule,
    },

    /// Reading or writing a file failed.
    Io { path: PathBuf, source: io::Error },
}

impl PlannerError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PlannerError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::MissingLevelDir { path } => {
                write!(f, "Input folder {} does not exist", path.display())
            }
            PlannerError::MalformedInstance { path, line, reason } => {
                write!(f, "{}:{}: {}", path.display(), line, reason)
            }
            PlannerError::GoalMismatch {
                path,
                room,
                expected,
                achieved,
                rule,
            } => {
                write!(
                    f,
                    "{} room {}: placed {} {} but the goal is {}",
                    path.display(),
                    room,
                    achieved,
                    rule.unit(),
                    expected
                )
            }
            PlannerError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for PlannerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlannerError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
