use crate::error::{Error, Result};
use crate::format::*;

fn malformed(format: OutputFormat, reason: impl Into<String>) -> Error {
    Error::Malformed {
        format,
        reason: reason.into(),
    }
}

/// Guess which of the three formats `data` holds.
pub fn detect_format(data: &[u8]) -> Option<OutputFormat> {
    if data.len() == PRG_SIZE && data[..2] == PRG_LOADER[..2] {
        return Some(OutputFormat::Prg);
    }
    let text = std::str::from_utf8(data).ok()?;
    let first = text.lines().find(|l| !l.trim().is_empty())?;
    if first.starts_with("#define ") {
        Some(OutputFormat::Header)
    } else if first.contains("_background =") {
        Some(OutputFormat::Source)
    } else {
        None
    }
}

/// Parse the output of [`crate::encode::to_bytes`] back into its streams.
pub fn read_image(data: &[u8], format: OutputFormat) -> Result<MulticolourImage> {
    match format {
        OutputFormat::Prg => read_prg(data),
        _ => {
            let text = std::str::from_utf8(data)
                .map_err(|e| malformed(format, format!("not UTF-8: {e}")))?;
            read_text(text, format)
        }
    }
}

fn read_prg(data: &[u8]) -> Result<MulticolourImage> {
    let format = OutputFormat::Prg;
    if data.len() != PRG_SIZE {
        return Err(malformed(format, format!("{} bytes, expected {PRG_SIZE}", data.len())));
    }
    let (loader, streams) = data.split_at(PRG_LOADER.len());
    let loader_matches = loader
        .iter()
        .zip(PRG_LOADER.iter())
        .enumerate()
        .all(|(i, (a, b))| i == PRG_BACKGROUND_OFFSET || a == b);
    if !loader_matches {
        return Err(malformed(format, "unknown loader program"));
    }

    let (bitmap, rest) = streams.split_at(BITMAP_SIZE);
    let (screen, colour) = rest.split_at(SCREEN_SIZE);
    Ok(MulticolourImage {
        background: loader[PRG_BACKGROUND_OFFSET],
        bitmap: bitmap.to_vec(),
        screen: screen.to_vec(),
        colour: colour.to_vec(),
    })
}

fn parse_hex_byte(token: &str, format: OutputFormat) -> Result<u8> {
    let digits = match format {
        OutputFormat::Header => token.strip_prefix("0x"),
        _ => token.strip_prefix('$'),
    }
    .ok_or_else(|| malformed(format, format!("bad byte literal {token:?}")))?;
    u8::from_str_radix(digits, 16).map_err(|_| malformed(format, format!("bad byte literal {token:?}")))
}

fn read_text(text: &str, format: OutputFormat) -> Result<MulticolourImage> {
    let mut background = None;
    let mut blocks: Vec<Vec<u8>> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() || line == "];" {
            continue;
        }

        if let Some(data) = line.strip_prefix('\t') {
            let data = match format {
                OutputFormat::Header => data,
                _ => data
                    .strip_prefix(".byte ")
                    .ok_or_else(|| malformed(format, format!("unexpected line {line:?}")))?,
            };
            let block = blocks
                .last_mut()
                .ok_or_else(|| malformed(format, "data before first label"))?;
            for token in data.split(',').filter(|t| !t.is_empty()) {
                block.push(parse_hex_byte(token.trim(), format)?);
            }
            continue;
        }

        let value = match format {
            OutputFormat::Header => line
                .strip_prefix("#define ")
                .and_then(|rest| rest.split_whitespace().nth(1)),
            _ => line.split_once(" = ").map(|(_, v)| v),
        };
        if let Some(value) = value {
            let bg = value
                .trim()
                .parse::<u8>()
                .map_err(|_| malformed(format, format!("bad background {value:?}")))?;
            background = Some(bg);
        } else {
            // A new array or label starts a block.
            blocks.push(Vec::with_capacity(BITMAP_SIZE));
        }
    }

    let background = background.ok_or_else(|| malformed(format, "missing background"))?;
    let [bitmap, screen, colour]: [Vec<u8>; 3] = blocks
        .try_into()
        .map_err(|b: Vec<Vec<u8>>| malformed(format, format!("{} data blocks, expected 3", b.len())))?;

    for (name, block, size) in [
        ("bitmap", &bitmap, BITMAP_SIZE),
        ("screen", &screen, SCREEN_SIZE),
        ("colour", &colour, COLOUR_SIZE),
    ] {
        if block.len() != size {
            return Err(malformed(
                format,
                format!("{name} has {} bytes, expected {size}", block.len()),
            ));
        }
    }

    Ok(MulticolourImage {
        background,
        bitmap,
        screen,
        colour,
    })
}
