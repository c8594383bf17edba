use crate::format::*;
use crate::palette::PALETTE;

/// Rebuild the 160x200 RGB24 picture the VIC shows for `image`.
///
/// Bit pair 00 is the background, 01 the screen high nibble, 10 the screen
/// low nibble and 11 the colour memory nibble.
pub fn to_rgb(image: &MulticolourImage) -> Vec<u8> {
    let mut rgb = vec![0u8; WIDTH * HEIGHT * 3];

    for cell in 0..CELL_COUNT {
        let colours = image.cell_colours(cell);
        let ox = (cell % CELL_COLS) * CELL_WIDTH;
        let oy = (cell / CELL_COLS) * CELL_HEIGHT;

        for row in 0..CELL_HEIGHT {
            let byte = image.bitmap[cell * CELL_HEIGHT + row];
            for px in 0..CELL_WIDTH {
                let slot = (byte >> (6 - px * 2)) & 0b11;
                let entry = PALETTE[(colours[slot as usize] & 0x0F) as usize];
                let off = ((oy + row) * WIDTH + ox + px) * 3;
                rgb[off..off + 3].copy_from_slice(&entry);
            }
        }
    }

    rgb
}
