use tracing::info;

use crate::canvas::ColourCounts;
use crate::error::{Error, Result};
use crate::palette::{colour_name, PALETTE_SIZE};

/// Check an explicit background index.
pub fn validate_background(value: i64) -> Result<u8> {
    if (0..PALETTE_SIZE as i64).contains(&value) {
        Ok(value as u8)
    } else {
        Err(Error::InvalidBackground(value.to_string()))
    }
}

/// Parse a background index from text. Usable as a clap value parser.
pub fn parse_background(s: &str) -> Result<u8> {
    let value: i64 = s
        .trim()
        .parse()
        .map_err(|_| Error::InvalidBackground(s.to_string()))?;
    validate_background(value)
}

/// The fixed background if given, else the most used colour.
/// Ties go to the lowest palette index. `fixed` must already be validated.
pub fn select_background(fixed: Option<u8>, counts: &ColourCounts) -> u8 {
    if let Some(bg) = fixed {
        info!("Background fixed at {} ({bg})", colour_name(bg));
        return bg;
    }

    let mut bg = 0usize;
    for (i, &count) in counts.iter().enumerate() {
        if count > counts[bg] {
            bg = i;
        }
    }
    let bg = bg as u8;
    info!("Using {} ({bg}) for background colour", colour_name(bg));
    bg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_used_colour_wins() {
        let mut counts = [0u32; PALETTE_SIZE];
        counts[3] = 10;
        counts[9] = 11;
        assert_eq!(select_background(None, &counts), 9);
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let mut counts = [0u32; PALETTE_SIZE];
        counts[4] = 7;
        counts[2] = 7;
        counts[12] = 7;
        assert_eq!(select_background(None, &counts), 2);
        assert_eq!(select_background(None, &[0; PALETTE_SIZE]), 0);
    }

    #[test]
    fn fixed_background_overrides_counts() {
        let mut counts = [0u32; PALETTE_SIZE];
        counts[1] = 100;
        assert_eq!(select_background(Some(0), &counts), 0);
        assert_eq!(select_background(Some(15), &counts), 15);
    }

    #[test]
    fn parse_accepts_only_palette_range() {
        assert_eq!(parse_background("0").unwrap(), 0);
        assert_eq!(parse_background("15").unwrap(), 15);
        assert!(parse_background("20").is_err());
        assert!(parse_background("-1").is_err());
        assert!(parse_background("blue").is_err());
    }
}
