use image::{imageops, ImageBuffer, Pixel};

use crate::error::{Result, TileError};

/// Owned bitmap of any pixel type.
pub type Sheet<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// Tiles laid out on a regular grid.
///
/// `pitch` is the distance between the origins of neighbouring tiles: 16 for
/// a gapless 16px sheet, 18 for the same tiles once padded with bleed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    pub columns: u32,
    pub rows: u32,
    pub pitch: u32,
}

impl TileGrid {
    /// Grid of whole cells fitting inside `width` x `height`. Partial cells are dropped.
    pub fn covering(width: u32, height: u32, pitch: u32) -> Result<Self> {
        if pitch == 0 {
            return Err(TileError::ZeroTileSize);
        }
        Ok(TileGrid {
            columns: width / pitch,
            rows: height / pitch,
            pitch,
        })
    }

    /// Grid with an explicit cell count, used for allocating destination sheets.
    pub fn with_counts(columns: u32, rows: u32, pitch: u32) -> Self {
        TileGrid { columns, rows, pitch }
    }

    pub fn origin(&self, column: u32, row: u32) -> (u32, u32) {
        (column * self.pitch, row * self.pitch)
    }

    /// Pixel dimensions of the whole grid.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.columns * self.pitch, self.rows * self.pitch)
    }

    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// Every `(column, row)` pair, column-major.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.columns).flat_map(move |column| (0..self.rows).map(move |row| (column, row)))
    }
}

/// Copy a region out of `image`. Anything outside the image reads as zeroed pixels.
pub fn crop_padded<P: Pixel + 'static>(
    image: &Sheet<P>,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Sheet<P> {
    let mut region = Sheet::<P>::new(width, height);
    if x < image.width() && y < image.height() {
        let inside_width = width.min(image.width() - x);
        let inside_height = height.min(image.height() - y);
        let inside = imageops::crop_imm(image, x, y, inside_width, inside_height).to_image();
        imageops::replace(&mut region, &inside, 0, 0);
    }
    region
}

/// Paste `region` with its top-left corner at `(x, y)`, clipping to `dst`.
pub fn paste_clipped<P: Pixel + 'static>(dst: &mut Sheet<P>, region: &Sheet<P>, x: u32, y: u32) {
    imageops::replace(dst, region, i64::from(x), i64::from(y));
}

/// Copy a region of `image` onto another place in the same image.
pub fn copy_within<P: Pixel + 'static>(
    image: &mut Sheet<P>,
    (src_x, src_y): (u32, u32),
    (width, height): (u32, u32),
    (dst_x, dst_y): (u32, u32),
) {
    let region = crop_padded(image, src_x, src_y, width, height);
    paste_clipped(image, &region, dst_x, dst_y);
}

/// Zero out a region, clipping to `image`.
pub fn clear_region<P: Pixel + 'static>(
    image: &mut Sheet<P>,
    (x, y): (u32, u32),
    (width, height): (u32, u32),
) {
    paste_clipped(image, &Sheet::<P>::new(width, height), x, y);
}
