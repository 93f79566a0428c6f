use image::{imageops, DynamicImage, Pixel};
use log::{debug, info};

use crate::error::{Result, TileError};
use crate::tile_grid::{clear_region, copy_within, Sheet};

/// Geometry of a spaced tilesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapRemoverConfig {
    pub tile_size: u32,
    /// Spacing between neighbouring tiles, in pixels.
    pub gap: u32,
    /// Block columns discarded from the right after compaction.
    pub trailing_columns: u32,
    /// Block rows discarded from the bottom after compaction.
    pub trailing_rows: u32,
}

impl Default for GapRemoverConfig {
    fn default() -> Self {
        GapRemoverConfig {
            tile_size: 16,
            gap: 1,
            trailing_columns: 3,
            trailing_rows: 2,
        }
    }
}

/// Pack the tiles of a spaced sheet together and crop the leftovers.
pub fn remove_gaps<P: Pixel + 'static>(mut image: Sheet<P>, config: &GapRemoverConfig) -> Result<Sheet<P>> {
    let tile = config.tile_size;
    if tile == 0 {
        return Err(TileError::ZeroTileSize);
    }
    let (width, height) = image.dimensions();

    let columns = compact_columns(&mut image, tile, config.gap);
    let rows = compact_rows(&mut image, tile, config.gap);
    debug!("Compacted {} block columns and {} block rows", columns, rows);

    let (crop_width, crop_height) = trailing_crop(columns, rows, config)?;
    if crop_width > width || crop_height > height {
        return Err(TileError::CropOutOfBounds {
            crop_width,
            crop_height,
            width,
            height,
        });
    }

    info!(
        "Removed gaps: {}x{} -> {}x{}",
        width, height, crop_width, crop_height
    );
    Ok(imageops::crop_imm(&image, 0, 0, crop_width, crop_height).to_image())
}

/// [`remove_gaps`] on a decoded image, keeping its colour type and bit depth.
pub fn remove_gaps_dynamic(image: DynamicImage, config: &GapRemoverConfig) -> Result<DynamicImage> {
    let packed = match image {
        DynamicImage::ImageLuma8(sheet) => remove_gaps(sheet, config)?.into(),
        DynamicImage::ImageLumaA8(sheet) => remove_gaps(sheet, config)?.into(),
        DynamicImage::ImageRgb8(sheet) => remove_gaps(sheet, config)?.into(),
        DynamicImage::ImageRgba8(sheet) => remove_gaps(sheet, config)?.into(),
        DynamicImage::ImageLuma16(sheet) => remove_gaps(sheet, config)?.into(),
        DynamicImage::ImageLumaA16(sheet) => remove_gaps(sheet, config)?.into(),
        DynamicImage::ImageRgb16(sheet) => remove_gaps(sheet, config)?.into(),
        DynamicImage::ImageRgba16(sheet) => remove_gaps(sheet, config)?.into(),
        DynamicImage::ImageRgb32F(sheet) => remove_gaps(sheet, config)?.into(),
        DynamicImage::ImageRgba32F(sheet) => remove_gaps(sheet, config)?.into(),
        other => remove_gaps(other.to_rgba8(), config)?.into(),
    };
    Ok(packed)
}

/// Start of the `index`th block once `index` gaps have accumulated before it.
/// `None` when the offset does not fit in a `u32`, which is past any sheet.
fn block_source(index: u32, tile: u32, gap: u32) -> Option<u32> {
    index.checked_mul(gap)?.checked_add(index * tile)
}

/// Slide each block column left over the gaps before it. Returns the number of passes.
fn compact_columns<P: Pixel + 'static>(image: &mut Sheet<P>, tile: u32, gap: u32) -> u32 {
    let height = image.height();
    let mut column = 0;
    while column * tile < image.width() {
        let dst_x = column * tile;
        match block_source(column, tile, gap) {
            Some(src_x) => copy_within(image, (src_x, 0), (tile, height), (dst_x, 0)),
            None => clear_region(image, (dst_x, 0), (tile, height)),
        }
        column += 1;
    }
    column
}

/// Slide each block row up over the gaps above it. Returns the number of passes.
fn compact_rows<P: Pixel + 'static>(image: &mut Sheet<P>, tile: u32, gap: u32) -> u32 {
    let width = image.width();
    let mut row = 0;
    while row * tile < image.height() {
        let dst_y = row * tile;
        match block_source(row, tile, gap) {
            Some(src_y) => copy_within(image, (0, src_y), (width, tile), (0, dst_y)),
            None => clear_region(image, (0, dst_y), (width, tile)),
        }
        row += 1;
    }
    row
}

fn trailing_crop(columns: u32, rows: u32, config: &GapRemoverConfig) -> Result<(u32, u32)> {
    let kept_columns = columns.saturating_sub(config.trailing_columns);
    let kept_rows = rows.saturating_sub(config.trailing_rows);
    if kept_columns == 0 || kept_rows == 0 {
        return Err(TileError::EmptyCrop {
            columns,
            rows,
            trailing_columns: config.trailing_columns,
            trailing_rows: config.trailing_rows,
        });
    }
    Ok((kept_columns * config.tile_size, kept_rows * config.tile_size))
}
