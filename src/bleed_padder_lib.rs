use image::RgbaImage;
use log::{debug, info, warn};

use crate::error::{Result, TileError};
use crate::tile_grid::{copy_within, crop_padded, paste_clipped, TileGrid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BleedPadderConfig {
    pub tile_size: u32,
}

impl Default for BleedPadderConfig {
    fn default() -> Self {
        BleedPadderConfig { tile_size: 16 }
    }
}

/// Re-lay a gapless sheet on a grid two pixels wider, surrounding each tile
/// with a copy of its own edge pixels.
pub fn add_bleed(image: &RgbaImage, config: &BleedPadderConfig) -> Result<RgbaImage> {
    let tile = config.tile_size;
    let source = TileGrid::covering(image.width(), image.height(), tile)?;
    if source.is_empty() {
        return Err(TileError::SheetTooSmall {
            width: image.width(),
            height: image.height(),
            tile_size: tile,
        });
    }
    if image.width() % tile != 0 || image.height() % tile != 0 {
        warn!(
            "Sheet of {}x{} is not a multiple of {}px, dropping the partial tiles",
            image.width(),
            image.height(),
            tile
        );
    }

    let padded = TileGrid::with_counts(source.columns, source.rows, tile + 2);
    let (out_width, out_height) = padded.pixel_size();
    debug!(
        "Padding {}x{} tiles into a {}x{} canvas",
        source.columns, source.rows, out_width, out_height
    );

    let mut out = RgbaImage::new(out_width, out_height);
    for (column, row) in source.cells() {
        bleed_tile(image, &mut out, source.origin(column, row), padded.origin(column, row), tile);
    }

    info!(
        "Added bleed: {}x{} -> {}x{}",
        image.width(),
        image.height(),
        out_width,
        out_height
    );
    Ok(out)
}

fn bleed_tile(
    image: &RgbaImage,
    out: &mut RgbaImage,
    (src_x, src_y): (u32, u32),
    (dst_x, dst_y): (u32, u32),
    tile: u32,
) {
    let body = crop_padded(image, src_x, src_y, tile, tile);
    paste_clipped(out, &body, dst_x + 1, dst_y + 1);

    let top = crop_padded(image, src_x, src_y, tile, 1);
    let bottom = crop_padded(image, src_x, src_y + tile - 1, tile, 1);
    paste_clipped(out, &top, dst_x + 1, dst_y);
    paste_clipped(out, &bottom, dst_x + 1, dst_y + tile + 1);

    // Side columns are read back from the canvas so the corners pick up the bleed rows.
    copy_within(out, (dst_x + 1, dst_y), (1, tile + 2), (dst_x, dst_y));
    copy_within(out, (dst_x + tile, dst_y), (1, tile + 2), (dst_x + tile + 1, dst_y));
}
