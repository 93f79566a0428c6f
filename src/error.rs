use thiserror::Error;

#[derive(Error, Debug)]
pub enum TileError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tile size must be greater than zero")]
    ZeroTileSize,

    #[error("Sheet of {width}x{height} is smaller than a single {tile_size}px tile")]
    SheetTooSmall { width: u32, height: u32, tile_size: u32 },

    #[error("Trailing crop of {trailing_columns} columns / {trailing_rows} rows leaves nothing of a {columns}x{rows} block grid")]
    EmptyCrop {
        columns: u32,
        rows: u32,
        trailing_columns: u32,
        trailing_rows: u32,
    },

    #[error("Crop to {crop_width}x{crop_height} exceeds the {width}x{height} sheet")]
    CropOutOfBounds {
        crop_width: u32,
        crop_height: u32,
        width: u32,
        height: u32,
    },

    #[error("No path given for '{label}'")]
    MissingPath { label: String },
}

pub type Result<T> = std::result::Result<T, TileError>;
