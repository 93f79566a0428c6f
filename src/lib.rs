pub mod bleed_padder_lib;
pub mod error;
pub mod gap_remover_lib;
pub mod tile_grid;
pub mod tilesheet_io;

pub use bleed_padder_lib::{add_bleed, BleedPadderConfig};
pub use error::TileError;
pub use gap_remover_lib::{remove_gaps, remove_gaps_dynamic, GapRemoverConfig};
pub use tile_grid::{Sheet, TileGrid};
pub use tilesheet_io::{
    load_sheet, prompt_for_path, run_bleed_padder, run_gap_remover, run_with_prompts, save_sheet,
    SheetPaths,
};

/// Default log filter for the binaries, overridable through `RUST_LOG`.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
