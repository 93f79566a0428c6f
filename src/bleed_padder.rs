use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use tilesheet_tools_lib::{init_logging, run_bleed_padder, BleedPadderConfig, SheetPaths};

/// Surround every tile of a gapless tilesheet with a 1px copy of its edges
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Tilesheet to read. Prompted for when omitted
    #[arg(long, env("TILESHEET_INPUT"))]
    input: Option<String>,

    /// Where to write the padded tilesheet. Prompted for when omitted
    #[arg(long, env("TILESHEET_OUTPUT"))]
    output: Option<String>,

    /// Source tile width and height in pixels
    #[arg(long, default_value = "16")]
    tile_size: u32,
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
    dotenv().ok();
    init_logging();

    let args = Args::parse();
    let config = BleedPadderConfig {
        tile_size: args.tile_size,
    };

    run_bleed_padder(&args, &config)
        .with_context(|| format!("Failed to add bleed to {}px tiles", config.tile_size))?;

    Ok(())
}
