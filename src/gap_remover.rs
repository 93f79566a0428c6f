use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use tilesheet_tools_lib::{init_logging, run_gap_remover, GapRemoverConfig, SheetPaths};

/// Remove the spacing between the tiles of a spaced tilesheet
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Tilesheet to read. Prompted for when omitted
    #[arg(long, env("TILESHEET_INPUT"))]
    input: Option<String>,

    /// Where to write the packed tilesheet. Prompted for when omitted
    #[arg(long, env("TILESHEET_OUTPUT"))]
    output: Option<String>,

    /// Tile width and height in pixels
    #[arg(long, default_value = "16")]
    tile_size: u32,

    /// Spacing between tiles in pixels
    #[arg(long, default_value = "1")]
    gap: u32,

    /// Block columns to discard from the right after packing
    #[arg(long, default_value = "3")]
    trailing_columns: u32,

    /// Block rows to discard from the bottom after packing
    #[arg(long, default_value = "2")]
    trailing_rows: u32,
}

impl SheetPaths for Args {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();
    init_logging();

    let args = Args::parse();
    let config = GapRemoverConfig {
        tile_size: args.tile_size,
        gap: args.gap,
        trailing_columns: args.trailing_columns,
        trailing_rows: args.trailing_rows,
    };
    log::debug!("Args: {:?}", args);

    run_gap_remover(&args, &config).context("Failed to remove tilesheet gaps")?;

    Ok(())
}
