// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Instance and solution files of a level directory.

pub mod instance;
pub mod output;

pub use instance::{parse_rooms, Room};
pub use output::{instance_files, is_example, output_path, write_solution};
