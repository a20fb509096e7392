// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use room_planner::config::SolverConfig;
use room_planner::{DeskLength, Placement, ProblemVariant, Region, SolveContext};

/// Solve a `rows` x `cols` room at the origin with a fresh context.
pub fn solve_fresh(variant: ProblemVariant, rows: i32, cols: i32, length: i32) -> Placement {
    let mut ctx = SolveContext::for_variant(variant, &SolverConfig::default());
    ctx.solve(Region::with_size(rows, cols), DeskLength::new(length))
}

/// Every cell of the placement lies inside `region`.
pub fn assert_contained(placement: &Placement, region: Region) {
    for cell in placement {
        assert!(
            region.contains(cell.row, cell.col),
            "cell {:?} outside region {}",
            cell,
            region
        );
    }
}

/// Desk cells are unique and never coincide with a split cell.
pub fn assert_no_overlap(placement: &Placement) {
    let mut desks = HashSet::new();
    for position in placement.desk_cells() {
        assert!(desks.insert(position), "desk cell {:?} placed twice", position);
    }
    for position in placement.split_cells() {
        assert!(
            !desks.contains(&position),
            "split cell {:?} is also a desk cell",
            position
        );
    }
}

/// The 4-connected components of the desk cells.
pub fn desk_components(placement: &Placement) -> Vec<Vec<(i32, i32)>> {
    let mut remaining: HashSet<(i32, i32)> = placement.desk_cells().collect();
    let mut components = Vec::new();
    while let Some(&start) = remaining.iter().next() {
        remaining.remove(&start);
        let mut component = vec![start];
        let mut stack = vec![start];
        while let Some((row, col)) = stack.pop() {
            for next in [(row - 1, col), (row + 1, col), (row, col - 1), (row, col + 1)] {
                if remaining.remove(&next) {
                    component.push(next);
                    stack.push(next);
                }
            }
        }
        component.sort();
        components.push(component);
    }
    components
}

/// A sorted component is a straight, gap-free run along one row or column.
fn is_straight_run(component: &[(i32, i32)]) -> bool {
    let (row0, col0) = component[0];
    let along_row = component
        .iter()
        .enumerate()
        .all(|(i, &(row, col))| row == row0 && col == col0 + i as i32);
    let along_col = component
        .iter()
        .enumerate()
        .all(|(i, &(row, col))| col == col0 && row == row0 + i as i32);
    along_row || along_col
}

/// Every desk is a straight run of exactly `length` cells.
pub fn assert_exact_desks(placement: &Placement, length: i32) {
    for component in desk_components(placement) {
        assert!(is_straight_run(&component), "bent desk {:?}", component);
        assert_eq!(component.len(), length as usize, "desk {:?}", component);
    }
}

/// Every desk is a straight run of at most `length` cells.
pub fn assert_short_desks(placement: &Placement, length: i32) {
    for component in desk_components(placement) {
        assert!(is_straight_run(&component), "bent desk {:?}", component);
        assert!(component.len() <= length as usize, "desk {:?}", component);
    }
}

/// All structural invariants of a solved room.
pub fn assert_valid(variant: ProblemVariant, placement: &Placement, region: Region, length: i32) {
    assert_contained(placement, region);
    assert_no_overlap(placement);
    match variant {
        ProblemVariant::Level7 => assert_short_desks(placement, length),
        _ => assert_exact_desks(placement, length),
    }
}
