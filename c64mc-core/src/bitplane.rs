use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::format::*;

/// Pack one row of four pixels, leftmost pixel in the top two bits.
fn pack_row(row: &[u8], list: &ColourList, cell: usize) -> Result<u8> {
    let mut byte = 0u8;
    for &p in row {
        let slot = list
            .iter()
            .position(|&c| c == p)
            .ok_or(Error::UnmappedPixel { cell, colour: p })?;
        byte = (byte << 2) | slot as u8;
    }
    Ok(byte)
}

/// Encode a resolved canvas into bitmap, screen and colour memory.
pub fn encode_cells(
    canvas: &Canvas,
    lists: &[ColourList],
    background: u8,
) -> Result<MulticolourImage> {
    let mut image = MulticolourImage::new(background);

    for (cell, list) in lists.iter().enumerate() {
        for row in canvas.cell(cell).chunks_exact(CELL_WIDTH) {
            image.bitmap.push(pack_row(row, list, cell)?);
        }
        image.screen.push(list[1] << 4 | list[2]);
        image.colour.push(list[3]);
    }

    Ok(image)
}
