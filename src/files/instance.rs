// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reading problem instance files.
//!
//! An instance file starts with the number of rooms, followed by one room per
//! line: `columns rows goal`, or `columns rows goal length` for levels where
//! every room has its own desk length.
//!
//! ```text
//! 3
//! 3 1 1
//! 11 1 3
//! 5 3 4
//! ```

use std::path::Path;

use tracing::warn;

use crate::error::PlannerError;
use crate::geometry::{DeskLength, Region};
use crate::variant::ProblemVariant;

/// One room to plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub columns: i32,
    pub rows: i32,
    /// Expected desks (or cells, for cell-count levels).
    pub goal: usize,
    pub length: DeskLength,
}

impl Room {
    /// The whole room as a region anchored at the origin.
    pub fn region(&self) -> Region {
        Region::with_size(self.rows, self.columns)
    }
}

/// Parse the contents of an instance file.
///
/// `path` is only used for error messages. Blank lines are ignored. A room
/// count header that disagrees with the number of room lines is logged, not
/// rejected.
pub fn parse_rooms(
    path: &Path,
    text: &str,
    variant: ProblemVariant,
) -> Result<Vec<Room>, PlannerError> {
    let malformed = |line: usize, reason: String| PlannerError::MalformedInstance {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| malformed(1, "missing room count".to_string()))?;
    let declared: usize = header
        .parse()
        .map_err(|_| malformed(header_line, format!("invalid room count '{}'", header)))?;

    let mut rooms = Vec::with_capacity(declared);
    for (line_no, line) in lines {
        let fields = line
            .split_whitespace()
            .map(|field| {
                field
                    .parse::<i32>()
                    .map_err(|_| malformed(line_no, format!("invalid number '{}'", field)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if fields.len() != variant.fields_per_room() {
            return Err(malformed(
                line_no,
                format!(
                    "expected {} numbers for {}, found {}",
                    variant.fields_per_room(),
                    variant,
                    fields.len()
                ),
            ));
        }
        if fields[..3].iter().any(|&value| value < 0) {
            return Err(malformed(line_no, "negative room size or goal".to_string()));
        }

        let length = match variant.fixed_length() {
            Some(length) => length,
            None => DeskLength::try_new(fields[3])
                .ok_or_else(|| malformed(line_no, format!("invalid desk length {}", fields[3])))?,
        };
        rooms.push(Room {
            columns: fields[0],
            rows: fields[1],
            goal: fields[2] as usize,
            length,
        });
    }

    if rooms.len() != declared {
        warn!(
            path = %path.display(),
            declared,
            found = rooms.len(),
            "room count header does not match room lines"
        );
    }
    Ok(rooms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, variant: ProblemVariant) -> Result<Vec<Room>, PlannerError> {
        parse_rooms(Path::new("test.in"), text, variant)
    }

    #[test]
    fn test_fixed_length_rooms() {
        let rooms = parse("2\n3 1 1\n11 1 3\n", ProblemVariant::Level4).unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(
            rooms[1],
            Room {
                columns: 11,
                rows: 1,
                goal: 3,
                length: DeskLength::new(3)
            }
        );
        assert_eq!(rooms[1].region(), Region::new(0, 0, 1, 11));
    }

    #[test]
    fn test_per_room_length() {
        let rooms = parse("1\n5 4 2 4\n", ProblemVariant::Level6).unwrap();
        assert_eq!(rooms[0].length, DeskLength::new(4));
        assert_eq!(rooms[0].rows, 4);
        assert_eq!(rooms[0].columns, 5);
    }

    #[test]
    fn test_blank_lines_and_windows_endings() {
        let rooms = parse("2\r\n\r\n2 2 1\r\n4 1 1\r\n\r\n", ProblemVariant::Level5).unwrap();
        assert_eq!(rooms.len(), 2);
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse("1\n5 4 2\n", ProblemVariant::Level6).unwrap_err();
        match err {
            PlannerError::MalformedInstance { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_numbers() {
        assert!(parse("x\n", ProblemVariant::Level4).is_err());
        assert!(parse("1\n3 a 1\n", ProblemVariant::Level4).is_err());
        assert!(parse("1\n3 1 1 0\n", ProblemVariant::Level6).is_err());
        assert!(parse("1\n-3 1 1\n", ProblemVariant::Level4).is_err());
        assert!(parse("", ProblemVariant::Level4).is_err());
    }

    #[test]
    fn test_count_mismatch_is_tolerated() {
        let rooms = parse("5\n3 1 1\n", ProblemVariant::Level4).unwrap();
        assert_eq!(rooms.len(), 1);
    }
}
