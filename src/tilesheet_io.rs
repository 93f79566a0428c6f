use image::DynamicImage;
use log::info;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::bleed_padder_lib::{add_bleed, BleedPadderConfig};
use crate::error::{Result, TileError};
use crate::gap_remover_lib::{remove_gaps_dynamic, GapRemoverConfig};

pub const INPUT_PROMPT: &str = "img path: ";
pub const OUTPUT_PROMPT: &str = "output path: ";

// Trait to abstract where the input and output paths come from
pub trait SheetPaths {
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
}

/// Decode an image file, keeping its colour type.
pub fn load_sheet<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    let image = image::open(path)?;
    info!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

/// Encode an image, picking the format from the file extension.
pub fn save_sheet<P: AsRef<Path>>(image: &DynamicImage, path: P) -> Result<()> {
    let path = path.as_ref();
    image.save(path)?;
    info!(
        "Saved {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(())
}

/// Ask for a path on `writer` and read a single line back from `reader`.
pub fn prompt_for_path<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> Result<String> {
    write!(writer, "{}", label)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    let path = line.trim_end_matches(&['\r', '\n'][..]);
    if path.is_empty() {
        return Err(TileError::MissingPath {
            label: label.trim_end_matches(&[':', ' '][..]).to_string(),
        });
    }
    Ok(path.to_string())
}

fn resolve_path<R: BufRead, W: Write>(
    given: Option<&str>,
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> Result<String> {
    match given {
        Some(path) if !path.is_empty() => Ok(path.to_string()),
        _ => prompt_for_path(reader, writer, label),
    }
}

/// Load, transform and save a sheet. Paths missing from `paths` are asked for
/// interactively: the input before loading, the output once the transform is done.
pub fn run_with_prompts<T, R, W, F>(paths: &T, reader: &mut R, writer: &mut W, transform: F) -> Result<()>
where
    T: SheetPaths,
    R: BufRead,
    W: Write,
    F: FnOnce(DynamicImage) -> Result<DynamicImage>,
{
    let input = resolve_path(paths.input_path(), reader, writer, INPUT_PROMPT)?;
    let image = load_sheet(&input)?;

    let transformed = transform(image)?;

    let output = resolve_path(paths.output_path(), reader, writer, OUTPUT_PROMPT)?;
    save_sheet(&transformed, &output)
}

pub fn run_gap_remover<T: SheetPaths>(paths: &T, config: &GapRemoverConfig) -> Result<()> {
    let stdin = io::stdin();
    run_with_prompts(paths, &mut stdin.lock(), &mut io::stdout(), |image| {
        remove_gaps_dynamic(image, config)
    })
}

pub fn run_bleed_padder<T: SheetPaths>(paths: &T, config: &BleedPadderConfig) -> Result<()> {
    let stdin = io::stdin();
    // Padded sheets are always RGBA
    run_with_prompts(paths, &mut stdin.lock(), &mut io::stdout(), |image| {
        Ok(add_bleed(&image.to_rgba8(), config)?.into())
    })
}
