use std::fmt::Write as _;
use std::io::Write;

use crate::error::Result;
use crate::format::*;

const BYTES_PER_LINE: usize = 32;

/// The two text flavours.
#[derive(Clone, Copy)]
enum Syntax {
    Assembler,
    C,
}

/// One labelled data block of an S or H file.
fn write_block(out: &mut String, name: &str, data: &[u8], syntax: Syntax) {
    match syntax {
        Syntax::C => {
            // Decimal length behind a hex prefix, as existing consumers expect.
            let _ = writeln!(out, "unsigned char {name}[0x{}] = [", data.len());
            for line in data.chunks(BYTES_PER_LINE) {
                out.push('\t');
                for b in line {
                    let _ = write!(out, "0x{b:02X},");
                }
                out.push('\n');
            }
            out.push_str("];\n");
        }
        Syntax::Assembler => {
            let _ = writeln!(out, "{name}");
            for line in data.chunks(BYTES_PER_LINE) {
                out.push_str("\t.byte ");
                for (i, b) in line.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    let _ = write!(out, "${b:02X}");
                }
                out.push('\n');
            }
        }
    }
}

fn to_text(image: &MulticolourImage, syntax: Syntax, id: &str) -> String {
    let mut out = String::with_capacity(64 * 1024);
    match syntax {
        Syntax::C => {
            let _ = write!(out, "\n#define {id}_background {}\n\n", image.background);
        }
        Syntax::Assembler => {
            let _ = write!(out, "\n{id}_background = {}\n\n", image.background);
        }
    }
    write_block(&mut out, id, &image.bitmap, syntax);
    out.push('\n');
    write_block(&mut out, &format!("{id}_screen"), &image.screen, syntax);
    out.push('\n');
    write_block(&mut out, &format!("{id}_colour"), &image.colour, syntax);
    out.push('\n');
    out
}

/// Build the loadable program: loader with the background patched in,
/// followed by the bitmap, screen and colour streams.
pub fn to_prg(image: &MulticolourImage) -> Vec<u8> {
    let mut out = Vec::with_capacity(PRG_SIZE);
    out.extend_from_slice(&PRG_LOADER);
    out[PRG_BACKGROUND_OFFSET] = image.background;
    out.extend_from_slice(&image.bitmap);
    out.extend_from_slice(&image.screen);
    out.extend_from_slice(&image.colour);
    out
}

/// Serialize an image in the requested format. `id` only affects S and H.
pub fn to_bytes(image: &MulticolourImage, format: OutputFormat, id: &str) -> Vec<u8> {
    match format {
        OutputFormat::Source => to_text(image, Syntax::Assembler, id).into_bytes(),
        OutputFormat::Header => to_text(image, Syntax::C, id).into_bytes(),
        OutputFormat::Prg => to_prg(image),
    }
}

/// Serialize and write an image in one call.
pub fn write_image<W: Write>(
    mut writer: W,
    image: &MulticolourImage,
    format: OutputFormat,
    id: &str,
) -> Result<W> {
    writer.write_all(&to_bytes(image, format, id))?;
    writer.flush()?;
    Ok(writer)
}
