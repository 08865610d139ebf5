//! # Vein Miner Demo Entry Point
//!
//! Calls into the library's `run()` function, which generates a small world and vein
//! mines an ore vein in it.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run
//! VEINMINER_CONFIG=veinminer.json RUST_LOG=debug cargo run
//! ```

fn main() {
    if let Err(err) = vein_miner::run() {
        log::error!("{}", err);
        eprintln!("vein-miner: {}", err);
        std::process::exit(1);
    }
}
