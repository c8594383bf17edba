/// The 16 C64 colours, in hardware index order.
pub const PALETTE: [[u8; 3]; 16] = [
    [0x00, 0x00, 0x00],
    [0xFF, 0xFF, 0xFF],
    [0x88, 0x00, 0x00],
    [0xAA, 0xFF, 0xEE],
    [0xCC, 0x44, 0xCC],
    [0x00, 0xCC, 0x55],
    [0x00, 0x00, 0xAA],
    [0xEE, 0xEE, 0x77],
    [0xDD, 0x88, 0x55],
    [0x66, 0x44, 0x00],
    [0xFF, 0x77, 0x77],
    [0x33, 0x33, 0x33],
    [0x77, 0x77, 0x77],
    [0xAA, 0xFF, 0x66],
    [0x00, 0x88, 0xFF],
    [0xBB, 0xBB, 0xBB],
];

pub const PALETTE_NAMES: [&str; 16] = [
    "Black",
    "White",
    "Red",
    "Cyan",
    "Violet",
    "Green",
    "Blue",
    "Yellow",
    "Orange",
    "Brown",
    "Lightred",
    "Dark Grey",
    "Medium Grey",
    "Light Green",
    "Light Blue",
    "Light Grey",
];

pub const PALETTE_SIZE: usize = PALETTE.len();

/// Palette name for an index, masked to the low nibble like the VIC does.
pub fn colour_name(index: u8) -> &'static str {
    PALETTE_NAMES[(index & 0x0F) as usize]
}

/// Squared Euclidean RGB distance. Same ordering as the true distance.
fn distance_sq(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x as i32 - y as i32;
            (d * d) as u32
        })
        .sum()
}

/// Nearest palette index for an RGB colour. Ties go to the lowest index.
pub fn nearest_in_palette(rgb: [u8; 3]) -> u8 {
    let mut best = 0u8;
    let mut best_dist = u32::MAX;
    for (i, &entry) in PALETTE.iter().enumerate() {
        let d = distance_sq(rgb, entry);
        if d < best_dist {
            best_dist = d;
            best = i as u8;
        }
    }
    best
}

/// Nearest of `candidates` to the palette colour `index`.
/// Ties go to the earliest candidate. `candidates` must not be empty.
pub fn nearest_in_subset(index: u8, candidates: &[u8]) -> u8 {
    let rgb = PALETTE[index as usize];
    let mut best = candidates[0];
    let mut best_dist = u32::MAX;
    for &c in candidates {
        let d = distance_sq(rgb, PALETTE[c as usize]);
        if d < best_dist {
            best_dist = d;
            best = c;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_entries_are_self_nearest() {
        for (i, &rgb) in PALETTE.iter().enumerate() {
            assert_eq!(nearest_in_palette(rgb) as usize, i);
        }
    }

    #[test]
    fn off_palette_colours_snap_to_closest() {
        assert_eq!(nearest_in_palette([10, 5, 0]), 0);
        assert_eq!(nearest_in_palette([250, 250, 250]), 1);
        assert_eq!(nearest_in_palette([0x70, 0x70, 0x70]), 12);
        assert_eq!(nearest_in_palette([0x10, 0x10, 0xB0]), 6);
    }

    #[test]
    fn subset_search_uses_candidate_order_on_ties() {
        // Light grey is equally far from medium grey and white.
        assert_eq!(nearest_in_subset(15, &[12, 1]), 12);
        assert_eq!(nearest_in_subset(15, &[1, 12]), 1);
        assert_eq!(nearest_in_subset(3, &[0, 0]), 0);
    }

    #[test]
    fn subset_search_returns_exact_member() {
        assert_eq!(nearest_in_subset(7, &[0, 7, 1]), 7);
    }

    #[test]
    fn subset_search_picks_closest_candidate() {
        // Red is closer to brown than to white or light blue.
        assert_eq!(nearest_in_subset(2, &[1, 14, 9]), 9);
        assert_eq!(nearest_in_subset(3, &[0, 13, 6]), 13);
        assert_eq!(nearest_in_subset(3, &[0, 13, 6, 1]), 1);
    }
}
