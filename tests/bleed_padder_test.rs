use anyhow::Result;
use image::RgbaImage;
use tilesheet_tools_lib::{add_bleed, BleedPadderConfig, TileError, TileGrid};

use test_sheets::patterned_sheet;

fn padded_default(sheet: &RgbaImage) -> Result<RgbaImage> {
    Ok(add_bleed(sheet, &BleedPadderConfig::default())?)
}

#[test]
fn test_output_dimensions() -> Result<()> {
    let padded = padded_default(&patterned_sheet(48, 32))?;

    assert_eq!(padded.dimensions(), (54, 36));
    Ok(())
}

#[test]
fn test_interior_matches_source_tile() -> Result<()> {
    let sheet = patterned_sheet(48, 32);
    let padded = padded_default(&sheet)?;

    for i in 0..3 {
        for j in 0..2 {
            for y in 0..16 {
                for x in 0..16 {
                    assert_eq!(
                        padded.get_pixel(i * 18 + 1 + x, j * 18 + 1 + y),
                        sheet.get_pixel(i * 16 + x, j * 16 + y),
                        "Interior mismatch in tile ({}, {}) at ({}, {})",
                        i,
                        j,
                        x,
                        y
                    );
                }
            }
        }
    }

    Ok(())
}

#[test]
fn test_corners_copy_source_corners() -> Result<()> {
    let sheet = patterned_sheet(48, 32);
    let padded = padded_default(&sheet)?;

    for i in 0..3 {
        for j in 0..2 {
            let (sx, sy) = (i * 16, j * 16);
            let (dx, dy) = (i * 18, j * 18);
            assert_eq!(padded.get_pixel(dx, dy), sheet.get_pixel(sx, sy));
            assert_eq!(padded.get_pixel(dx + 17, dy), sheet.get_pixel(sx + 15, sy));
            assert_eq!(padded.get_pixel(dx, dy + 17), sheet.get_pixel(sx, sy + 15));
            assert_eq!(padded.get_pixel(dx + 17, dy + 17), sheet.get_pixel(sx + 15, sy + 15));
        }
    }

    Ok(())
}

#[test]
fn test_edges_repeat_outer_rows_and_columns() -> Result<()> {
    let sheet = patterned_sheet(32, 16);
    let padded = padded_default(&sheet)?;

    for i in 0..2 {
        let (sx, dx) = (i * 16, i * 18);
        for k in 0..16 {
            assert_eq!(padded.get_pixel(dx + 1 + k, 0), sheet.get_pixel(sx + k, 0));
            assert_eq!(padded.get_pixel(dx + 1 + k, 17), sheet.get_pixel(sx + k, 15));
            assert_eq!(padded.get_pixel(dx, 1 + k), sheet.get_pixel(sx, k));
            assert_eq!(padded.get_pixel(dx + 17, 1 + k), sheet.get_pixel(sx + 15, k));
        }
    }

    Ok(())
}

#[test]
fn test_partial_tiles_are_dropped() -> Result<()> {
    let sheet = patterned_sheet(40, 20);
    let padded = padded_default(&sheet)?;

    assert_eq!(padded.dimensions(), (36, 18));
    assert_eq!(padded.get_pixel(18 + 1, 1), sheet.get_pixel(16, 0));
    Ok(())
}

#[test]
fn test_custom_tile_size() -> Result<()> {
    let sheet = patterned_sheet(8, 4);
    let padded = add_bleed(&sheet, &BleedPadderConfig { tile_size: 4 })?;

    assert_eq!(padded.dimensions(), (12, 6));
    assert_eq!(padded.get_pixel(6, 0), sheet.get_pixel(4, 0));
    assert_eq!(padded.get_pixel(11, 5), sheet.get_pixel(7, 3));
    Ok(())
}

#[test]
fn test_sheet_smaller_than_a_tile() {
    let err = add_bleed(&patterned_sheet(10, 40), &BleedPadderConfig::default()).unwrap_err();

    assert!(
        matches!(err, TileError::SheetTooSmall { width: 10, height: 40, tile_size: 16 }),
        "Unexpected error: {}",
        err
    );
}

#[test]
fn test_zero_tile_size_is_rejected() {
    let err = add_bleed(&patterned_sheet(16, 16), &BleedPadderConfig { tile_size: 0 }).unwrap_err();

    assert!(matches!(err, TileError::ZeroTileSize));
}

#[test]
fn test_tile_grid_pitch_geometry() -> Result<()> {
    let source = TileGrid::covering(40, 20, 16)?;
    assert_eq!((source.columns, source.rows), (2, 1));

    let padded = TileGrid::with_counts(source.columns, source.rows, 18);
    assert_eq!(padded.origin(1, 0), (18, 0));
    assert_eq!(padded.pixel_size(), (36, 18));
    assert!(matches!(TileGrid::covering(40, 20, 0), Err(TileError::ZeroTileSize)));
    Ok(())
}
