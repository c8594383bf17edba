use crate::error::{Error, Result};
use crate::format::*;
use crate::palette::{nearest_in_palette, PALETTE_SIZE};

/// Occurrences of each palette index.
pub type ColourCounts = [u32; PALETTE_SIZE];

/// 160x200 palette indices, stored cell by cell.
///
/// Cells are laid out row-major over the 40x25 grid, and each cell holds its
/// 8 rows of 4 pixels row-major, so a cell is a contiguous 32-byte slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            pixels: vec![0; CELL_COUNT * CELL_PIXELS],
        }
    }

    fn offset(x: usize, y: usize) -> usize {
        let cell = (y / CELL_HEIGHT) * CELL_COLS + x / CELL_WIDTH;
        cell * CELL_PIXELS + (y % CELL_HEIGHT) * CELL_WIDTH + x % CELL_WIDTH
    }

    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[Self::offset(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, index: u8) {
        self.pixels[Self::offset(x, y)] = index;
    }

    pub fn cell(&self, cell: usize) -> &[u8] {
        &self.pixels[cell * CELL_PIXELS..(cell + 1) * CELL_PIXELS]
    }

    pub fn cell_mut(&mut self, cell: usize) -> &mut [u8] {
        &mut self.pixels[cell * CELL_PIXELS..(cell + 1) * CELL_PIXELS]
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

/// Output of the quantizer: the unconstrained per-pixel canvas and how often
/// each colour was used across the whole picture.
pub struct Quantized {
    pub canvas: Canvas,
    pub counts: ColourCounts,
}

/// Map a 160x200 RGB24 buffer (row-major) to palette indices.
pub fn quantize(rgb: &[u8]) -> Result<Quantized> {
    let expected = WIDTH * HEIGHT * 3;
    if rgb.len() != expected {
        return Err(Error::PixelBufferSize {
            expected,
            actual: rgb.len(),
        });
    }

    let mut canvas = Canvas::new();
    let mut counts = [0u32; PALETTE_SIZE];

    for (i, px) in rgb.chunks_exact(3).enumerate() {
        let index = nearest_in_palette([px[0], px[1], px[2]]);
        canvas.set(i % WIDTH, i / WIDTH, index);
        counts[index as usize] += 1;
    }

    Ok(Quantized { canvas, counts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PALETTE;

    #[test]
    fn cell_layout_is_row_major() {
        let mut canvas = Canvas::new();
        canvas.set(5, 9, 7); // cell (1, 1), row 1, column 1
        let cell = canvas.cell(CELL_COLS + 1);
        assert_eq!(cell[CELL_WIDTH + 1], 7);
        assert_eq!(canvas.get(5, 9), 7);
        assert_eq!(canvas.cell(0).iter().filter(|&&p| p != 0).count(), 0);
    }

    #[test]
    fn quantize_counts_every_pixel() {
        let mut rgb = vec![0u8; WIDTH * HEIGHT * 3];
        // Top-right pixel white, bottom-left pixel blue.
        let tr = (WIDTH - 1) * 3;
        rgb[tr..tr + 3].copy_from_slice(&PALETTE[1]);
        let bl = (HEIGHT - 1) * WIDTH * 3;
        rgb[bl..bl + 3].copy_from_slice(&PALETTE[6]);

        let q = quantize(&rgb).unwrap();
        assert_eq!(q.counts[0], (WIDTH * HEIGHT - 2) as u32);
        assert_eq!(q.counts[1], 1);
        assert_eq!(q.counts[6], 1);
        assert_eq!(q.counts.iter().sum::<u32>(), (WIDTH * HEIGHT) as u32);
        assert_eq!(q.canvas.get(WIDTH - 1, 0), 1);
        assert_eq!(q.canvas.get(0, HEIGHT - 1), 6);
        assert_eq!(q.canvas.cell(CELL_COLS - 1)[3], 1);
    }

    #[test]
    fn quantize_rejects_wrong_size() {
        let err = quantize(&[0u8; 30]).err().unwrap();
        assert!(matches!(err, Error::PixelBufferSize { actual: 30, .. }));
    }
}
