mod common;

use std::collections::HashSet;

use cgmath::Point3;
use proptest::prelude::*;
use vein_miner::vein::{Termination, VeinSearch};
use vein_miner::voxels::block::block_type::BlockType;
use vein_miner::voxels::world::World;
use vein_miner::voxels::Position;

use common::{fill_box, line_x, manhattan, vein_distances, RecordingGrid};

const ORIGIN: Position = Point3::new(0, 0, 0);

/// Removes the origin the way a player break would, then runs the search.
fn mine(mut world: World, origin: Position, cap: usize) -> (RecordingGrid, usize, Termination) {
    let origin_type = world
        .get_block_type(origin)
        .expect("origin must be in a loaded chunk");
    assert!(world.break_block(origin), "origin must be breakable");
    let mut grid = RecordingGrid::new(world);
    let result = VeinSearch::new(cap).run(&mut grid, origin, origin_type);
    assert_eq!(result.broken, grid.broken.len());
    (grid, result.broken, result.termination)
}

#[test]
fn straight_line_is_fully_mined() {
    let mut world = World::new();
    line_x(&mut world, ORIGIN, 10, BlockType::IronOre);

    let (grid, broken, termination) = mine(world, ORIGIN, 64);

    assert_eq!(broken, 9);
    assert_eq!(termination, Termination::Exhausted);
    let expected: Vec<_> = (1..10).map(|x| Point3::new(x, 0, 0)).collect();
    assert_eq!(grid.broken, expected);
}

#[test]
fn solid_cube_is_capped_to_nearest_blocks() {
    let mut world = World::new();
    fill_box(&mut world, ORIGIN, Point3::new(4, 4, 4), BlockType::CoalOre);

    let (grid, broken, termination) = mine(world, ORIGIN, 64);

    assert_eq!(broken, 64);
    assert_eq!(termination, Termination::CapReached);
    let distances: Vec<i32> = grid.broken.iter().map(|p| manhattan(*p, ORIGIN)).collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]), "broken out of BFS order");
    assert_eq!(distances.iter().filter(|d| **d <= 5).count(), 52);
    assert_eq!(distances.iter().filter(|d| **d == 6).count(), 12);
    assert!(distances.iter().all(|d| *d <= 6));
    assert!(!grid.broken.contains(&ORIGIN));
}

#[test]
fn lone_origin_breaks_nothing() {
    let mut world = World::new();
    fill_box(&mut world, Point3::new(-1, -1, -1), Point3::new(1, 1, 1), BlockType::Stone);
    world.set_block(ORIGIN, BlockType::GoldOre);

    let (grid, broken, _) = mine(world, ORIGIN, 64);

    assert_eq!(broken, 0);
    assert!(grid.attempts.is_empty());
}

#[test]
fn other_block_types_are_left_alone() {
    let mut world = World::new();
    fill_box(&mut world, Point3::new(-2, -2, -2), Point3::new(6, 2, 2), BlockType::Stone);
    line_x(&mut world, ORIGIN, 5, BlockType::IronOre);
    world.set_block(Point3::new(2, 1, 0), BlockType::GoldOre);

    let (grid, broken, _) = mine(world, ORIGIN, 64);

    assert_eq!(broken, 4);
    assert_eq!(grid.attempts.len(), 4);
    assert_eq!(
        grid.world.get_block_type(Point3::new(2, 1, 0)),
        Some(BlockType::GoldOre)
    );
    assert_eq!(
        grid.world.get_block_type(Point3::new(5, 0, 0)),
        Some(BlockType::Stone)
    );
}

#[test]
fn refused_break_still_connects_the_vein() {
    let mut world = World::new();
    line_x(&mut world, ORIGIN, 10, BlockType::IronOre);
    world.protect(Point3::new(3, 0, 0));

    let (grid, broken, _) = mine(world, ORIGIN, 64);

    assert_eq!(broken, 8);
    assert_eq!(grid.attempts.len(), 9);
    assert_eq!(
        grid.world.get_block_type(Point3::new(3, 0, 0)),
        Some(BlockType::IronOre)
    );
    for x in 4..10 {
        assert_eq!(grid.world.get_block_type(Point3::new(x, 0, 0)), Some(BlockType::Air));
    }
}

#[test]
fn failed_breaks_do_not_count_against_the_cap() {
    let mut world = World::new();
    line_x(&mut world, ORIGIN, 10, BlockType::IronOre);
    world.protect(Point3::new(1, 0, 0));
    world.protect(Point3::new(2, 0, 0));

    let (grid, broken, termination) = mine(world, ORIGIN, 3);

    assert_eq!(broken, 3);
    assert_eq!(termination, Termination::CapReached);
    assert_eq!(
        grid.broken,
        vec![Point3::new(3, 0, 0), Point3::new(4, 0, 0), Point3::new(5, 0, 0)]
    );
}

#[test]
fn distance_ties_follow_direction_order() {
    let mut world = World::new();
    for offset in [
        Point3::new(0, -1, 0),
        Point3::new(0, 1, 0),
        Point3::new(0, 0, -1),
        Point3::new(0, 0, 1),
        Point3::new(-1, 0, 0),
        Point3::new(1, 0, 0),
        Point3::new(0, 0, 0),
    ] {
        world.set_block(offset, BlockType::DiamondOre);
    }

    let (grid, broken, _) = mine(world, ORIGIN, 2);

    assert_eq!(broken, 2);
    assert_eq!(grid.broken, vec![Point3::new(0, -1, 0), Point3::new(0, 1, 0)]);
}

#[test]
fn unloaded_chunks_bound_the_search() {
    let mut world = World::new();
    // x = 16 falls in chunk (1, 0, 0), which is never loaded.
    line_x(&mut world, Point3::new(10, 0, 0), 6, BlockType::OakLog);

    let (grid, broken, _) = mine(world, Point3::new(10, 0, 0), 64);

    assert_eq!(broken, 5);
    assert!(grid.world.get_chunk_at(Point3::new(1, 0, 0)).is_none());
}

fn arb_vein() -> impl Strategy<Value = (Vec<bool>, usize, usize)> {
    (prop::collection::vec(any::<bool>(), 216), 0usize..216, 1usize..48)
}

fn cell(index: usize) -> Position {
    let index = index as i32;
    Point3::new(index % 6, (index / 6) % 6, index / 36)
}

fn build(ore: &[bool], origin: usize) -> (World, HashSet<Position>) {
    let mut world = World::new();
    let mut cells = HashSet::new();
    for (index, is_ore) in ore.iter().enumerate() {
        if *is_ore || index == origin {
            world.set_block(cell(index), BlockType::IronOre);
            cells.insert(cell(index));
        } else {
            world.set_block(cell(index), BlockType::Stone);
        }
    }
    (world, cells)
}

proptest! {
    #[test]
    fn breaks_are_capped_connected_and_unique((ore, origin_index, cap) in arb_vein()) {
        let origin = cell(origin_index);
        let (world, cells) = build(&ore, origin_index);
        let distances = vein_distances(&cells, origin);
        let vein_size = distances.len();

        let (grid, broken, _) = mine(world, origin, cap);

        prop_assert!(broken <= cap);
        prop_assert_eq!(broken, (vein_size - 1).min(cap));

        let unique: HashSet<_> = grid.attempts.iter().copied().collect();
        prop_assert_eq!(unique.len(), grid.attempts.len());

        for position in &grid.broken {
            prop_assert!(*position != origin);
            prop_assert!(distances.contains_key(position), "{:?} not connected", position);
        }
    }

    #[test]
    fn capped_search_breaks_nearest_blocks_first((ore, origin_index, cap) in arb_vein()) {
        let origin = cell(origin_index);
        let (world, cells) = build(&ore, origin_index);
        let distances = vein_distances(&cells, origin);

        let (grid, _, _) = mine(world, origin, cap);

        let order: Vec<usize> = grid.broken.iter().map(|p| distances[p]).collect();
        prop_assert!(order.windows(2).all(|w| w[0] <= w[1]));

        if let Some(&farthest) = order.last() {
            let broken = grid.broken_set();
            for (position, d) in &distances {
                if *d > 0 && *d < farthest {
                    prop_assert!(broken.contains(position), "{:?} at {} skipped", position, d);
                }
            }
        }
    }

    #[test]
    fn protected_blocks_do_not_split_the_vein(
        (ore, origin_index, _) in arb_vein(),
        protected in prop::collection::vec(0usize..216, 0..20),
    ) {
        let origin = cell(origin_index);
        let (mut world, cells) = build(&ore, origin_index);
        let distances = vein_distances(&cells, origin);
        for index in &protected {
            if *index != origin_index {
                world.protect(cell(*index));
            }
        }

        let (grid, _, _) = mine(world, origin, usize::MAX);

        let expected: HashSet<Position> = distances
            .keys()
            .copied()
            .filter(|p| *p != origin && !grid.world.is_protected(*p))
            .collect();
        prop_assert_eq!(grid.broken_set(), expected);
        prop_assert_eq!(grid.attempts.len(), distances.len() - 1);
    }
}
