pub mod background;
pub mod bitplane;
pub mod canvas;
pub mod compress;
pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod palette;
pub mod preview;
pub mod resolve;

pub use error::{Error, Result};
pub use format::{MulticolourImage, OutputFormat};

/// Convert a 160x200 RGB24 picture into multicolour bitmap streams.
///
/// `background` forces the global background colour; `None` picks the most
/// used colour.
pub fn convert(rgb: &[u8], background: Option<u8>) -> Result<MulticolourImage> {
    let fixed = background
        .map(|bg| background::validate_background(bg as i64))
        .transpose()?;

    let canvas::Quantized { mut canvas, counts } = canvas::quantize(rgb)?;
    let bg = background::select_background(fixed, &counts);
    let lists = resolve::resolve_cells(&mut canvas, bg);
    bitplane::encode_cells(&canvas, &lists, bg)
}
