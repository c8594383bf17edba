use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Multicolour bitmap width in (double-wide) pixels.
pub const WIDTH: usize = 160;
pub const HEIGHT: usize = 200;

/// A colour cell is 4 pixels wide and 8 rows tall.
pub const CELL_WIDTH: usize = 4;
pub const CELL_HEIGHT: usize = 8;
pub const CELL_PIXELS: usize = CELL_WIDTH * CELL_HEIGHT;

pub const CELL_COLS: usize = WIDTH / CELL_WIDTH;
pub const CELL_ROWS: usize = HEIGHT / CELL_HEIGHT;
pub const CELL_COUNT: usize = CELL_COLS * CELL_ROWS;

pub const BITMAP_SIZE: usize = CELL_COUNT * CELL_HEIGHT;
pub const SCREEN_SIZE: usize = CELL_COUNT;
pub const COLOUR_SIZE: usize = CELL_COUNT;

/// Colours of one cell: background, then the screen high nibble, screen low
/// nibble and colour memory entries.
pub type ColourList = [u8; 4];

/// Loader and display program, starting with the `$0801` load address.
/// A BASIC `SYS 2061` line jumps into code that copies the streams appended
/// after the program to `$6000`, `$4400` and `$D800`, then switches the VIC
/// into multicolour bitmap mode.
pub const PRG_LOADER: [u8; 121] = [
    0x01, 0x08, 0x0C, 0x08, 0x0D, 0x08, 0x9E, 0x32, 0x30, 0x36, 0x31, 0x00,
    0x00, 0x00, 0x78, 0xA2, 0x40, 0xA0, 0x1F, 0x20, 0x56, 0x08, 0xA9, 0x00,
    0x8D, 0x63, 0x08, 0xA9, 0x44, 0x8D, 0x64, 0x08, 0xA2, 0xE8, 0xA0, 0x03,
    0x20, 0x56, 0x08, 0xA9, 0x00, 0x8D, 0x63, 0x08, 0xA9, 0xD8, 0x8D, 0x64,
    0x08, 0xA2, 0xE8, 0xA0, 0x03, 0x20, 0x56, 0x08, 0xA9, 0x1C, 0x8D, 0x18,
    0xD0, 0xA9, 0x3B, 0x8D, 0x11, 0xD0, 0xA9, 0x18, 0x8D, 0x16, 0xD0, 0xA9,
    0x02, 0x8D, 0x00, 0xDD, 0xA9, 0x00, 0x8D, 0x20, 0xD0, 0x8D, 0x21, 0xD0,
    0x4C, 0x53, 0x08, 0xE8, 0xC8, 0xCA, 0xD0, 0x04, 0x88, 0xD0, 0x01, 0x60,
    0xAD, 0x78, 0x08, 0x8D, 0x00, 0x60, 0xEE, 0x60, 0x08, 0xD0, 0x03, 0xEE,
    0x61, 0x08, 0xEE, 0x63, 0x08, 0xD0, 0x03, 0xEE, 0x64, 0x08, 0x4C, 0x58,
    0x08,
];

/// Operand of the `LDA #bg` that feeds `$D020`/`$D021`.
pub const PRG_BACKGROUND_OFFSET: usize = 77;

pub const PRG_SIZE: usize = PRG_LOADER.len() + BITMAP_SIZE + SCREEN_SIZE + COLOUR_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Assembler source with `.byte` directives.
    Source,
    /// C header with `unsigned char` arrays.
    Header,
    /// Directly loadable program file.
    Prg,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "S" => Ok(OutputFormat::Source),
            "H" => Ok(OutputFormat::Header),
            "PRG" => Ok(OutputFormat::Prg),
            other => Err(Error::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Source => "S",
            OutputFormat::Header => "H",
            OutputFormat::Prg => "PRG",
        };
        f.write_str(name)
    }
}

/// The three memory streams plus the global background register value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MulticolourImage {
    pub background: u8,
    /// 8 bytes per cell, 2 bits per pixel.
    pub bitmap: Vec<u8>,
    /// Screen memory: colour list entries 1 and 2 as high and low nibble.
    pub screen: Vec<u8>,
    /// Colour memory: colour list entry 3.
    pub colour: Vec<u8>,
}

impl MulticolourImage {
    pub fn new(background: u8) -> Self {
        Self {
            background,
            bitmap: Vec::with_capacity(BITMAP_SIZE),
            screen: Vec::with_capacity(SCREEN_SIZE),
            colour: Vec::with_capacity(COLOUR_SIZE),
        }
    }

    /// The colour list a cell decodes to, as the VIC would resolve it.
    pub fn cell_colours(&self, cell: usize) -> ColourList {
        let screen = self.screen[cell];
        [self.background, screen >> 4, screen & 0x0F, self.colour[cell] & 0x0F]
    }
}
