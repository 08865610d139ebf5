#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Vein Miner
//!
//! Breaks whole veins of connected blocks at once. When an actor breaks an ore or a
//! log while holding the activation modifier, every block of the same type connected
//! to it by faces is broken too, nearest first, up to a configurable cap.
//!
//! ## Key Modules
//!
//! * `vein` - Vein search, trigger policy, per-actor guard and the dispatcher
//! * `voxels` - Chunked voxel world the search runs against
//! * `config` - JSON configuration
//! * `core` - Shared-state primitives
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Point3;
//! use vein_miner::config::VeinMinerConfig;
//! use vein_miner::vein::{ActorId, BlockBreakEvent, VeinMiner};
//! use vein_miner::voxels::block::block_type::BlockType;
//! use vein_miner::voxels::world::World;
//!
//! let mut world = World::new();
//! for y in 0..5 {
//!     world.set_block(Point3::new(0, y, 0), BlockType::OakLog);
//! }
//! world.break_block(Point3::new(0, 0, 0));
//!
//! let miner = VeinMiner::new(&VeinMinerConfig::default());
//! let outcome = miner.on_block_broken(
//!     &mut world,
//!     &BlockBreakEvent {
//!         actor: ActorId(1),
//!         position: Point3::new(0, 0, 0),
//!         broken_type: BlockType::OakLog,
//!         modifier_held: true,
//!     },
//! );
//! assert_eq!(outcome.broken(), 4);
//! ```

use cgmath::Point3;
use log::info;

use config::{ConfigError, VeinMinerConfig};
use vein::{ActorId, BlockBreakEvent, VeinMiner};
use voxels::block::block_type::BlockType;
use voxels::chunk::CHUNK_DIMENSION;
use voxels::world::{ChunkGeneration, World};
use voxels::Position;

pub mod config;
pub mod core;
pub mod vein;
pub mod voxels;

/// Environment variable naming a configuration file for [`run`].
pub const CONFIG_ENV: &str = "VEINMINER_CONFIG";

/// Radius, in chunks, of the world generated by [`run`].
const DEMO_RADIUS: i32 = 1;

/// Initializes logging from `RUST_LOG`, writing to stdout.
pub fn init_logging() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG");
    // A logger may already be installed by an embedding application.
    let _ = log_builder.try_init();
}

/// Runs the demo: generates a small world and vein mines the first ore found in it.
pub fn run() -> Result<(), ConfigError> {
    init_logging();
    info!("Logger initialized");

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => VeinMinerConfig::load(path)?,
        None => VeinMinerConfig::default(),
    };
    let miner = VeinMiner::new(&config);

    let mut world = World::new();
    for x in -DEMO_RADIUS..=DEMO_RADIUS {
        for y in -DEMO_RADIUS..=DEMO_RADIUS {
            for z in -DEMO_RADIUS..=DEMO_RADIUS {
                world.add_chunk_at(Point3::new(x, y, z), ChunkGeneration::Perlin);
            }
        }
    }
    info!("Generated {} chunks", world.chunks.len());

    let Some((origin, ore)) = find_ore(&world) else {
        info!("No ore in the generated world, nothing to mine");
        return Ok(());
    };

    world.break_block(origin);
    let event = BlockBreakEvent {
        actor: ActorId(1),
        position: origin,
        broken_type: ore,
        modifier_held: true,
    };
    let outcome = miner.on_block_broken(&mut world, &event);
    info!("Breaking {} at {:?}: {:?}", ore, origin, outcome);
    Ok(())
}

/// Finds the first ore block of the centre chunk, scanning only solid cells.
fn find_ore(world: &World) -> Option<(Position, BlockType)> {
    let chunk = world.get_chunk_at(Point3::new(0, 0, 0))?;
    chunk.solid_array.iter_ones().find_map(|index| {
        let block_type = chunk.blocks.get(index)?.get_type()?;
        block_type.path().ends_with("_ore").then(|| {
            let index = index as i32;
            let position = Point3::new(
                index % CHUNK_DIMENSION,
                (index / CHUNK_DIMENSION) % CHUNK_DIMENSION,
                index / (CHUNK_DIMENSION * CHUNK_DIMENSION),
            );
            (position, block_type)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_ore_skips_non_ore_solids() {
        let mut world = World::new();
        world.add_chunk_at(Point3::new(0, 0, 0), ChunkGeneration::Empty);
        world.set_block(Point3::new(0, 0, 0), BlockType::Stone);
        world.set_block(Point3::new(4, 2, 1), BlockType::GoldOre);
        assert_eq!(
            find_ore(&world),
            Some((Point3::new(4, 2, 1), BlockType::GoldOre))
        );
    }

    #[test]
    fn find_ore_needs_a_centre_chunk_with_ore() {
        let mut world = World::new();
        assert_eq!(find_ore(&world), None);
        world.add_chunk_at(Point3::new(0, 0, 0), ChunkGeneration::Solid(BlockType::Stone));
        assert_eq!(find_ore(&world), None);
    }
}
