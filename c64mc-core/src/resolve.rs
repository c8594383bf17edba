use tracing::debug;

use crate::canvas::Canvas;
use crate::format::*;
use crate::palette::nearest_in_subset;

/// Colours of one cell, background first, then the others from most to
/// least used. Equal counts put the higher palette index first.
fn rank_colours(cell: &[u8], background: u8) -> Vec<u8> {
    // (colour, count) in order of first appearance, background always first
    let mut seen: Vec<(u8, u32)> = vec![(background, 0)];
    for &p in cell {
        match seen.iter_mut().find(|(c, _)| *c == p) {
            Some(entry) => entry.1 += 1,
            None => seen.push((p, 1)),
        }
    }

    let mut others: Vec<(u32, u8)> = seen[1..].iter().map(|&(c, n)| (n, c)).collect();
    others.sort_by(|a, b| b.cmp(a));

    let mut ranked = Vec::with_capacity(others.len() + 1);
    ranked.push(background);
    ranked.extend(others.into_iter().map(|(_, c)| c));
    ranked
}

fn is_subset(colours: &[u8], of: &ColourList) -> bool {
    colours.iter().all(|c| of.contains(c))
}

/// Enforce the four-colours-per-cell limit over the whole canvas.
///
/// Cells are visited row-major. Colours beyond the background and the three
/// most used are dropped and their pixels rewritten in `canvas` to the
/// nearest kept colour. A cell whose colours all appear in the previous
/// cell's list takes that list verbatim so the screen and colour streams
/// repeat; otherwise the list is padded with black.
///
/// Returns one four-entry list per cell.
pub fn resolve_cells(canvas: &mut Canvas, background: u8) -> Vec<ColourList> {
    let mut lists = Vec::with_capacity(CELL_COUNT);
    let mut last: Option<ColourList> = None;

    for cell in 0..CELL_COUNT {
        let mut colours = rank_colours(canvas.cell(cell), background);

        if colours.len() > 4 {
            debug!(
                "Block {}x{} has too many non-background colours: {:?} -> {:?}",
                cell % CELL_COLS,
                cell / CELL_COLS,
                &colours[1..],
                &colours[1..4]
            );
            colours.truncate(4);
            for p in canvas.cell_mut(cell).iter_mut() {
                if !colours.contains(p) {
                    *p = nearest_in_subset(*p, &colours);
                }
            }
        }

        let list = match last {
            Some(prev) if is_subset(&colours, &prev) => prev,
            _ => {
                let mut list = [0u8; 4];
                list[..colours.len()].copy_from_slice(&colours);
                list
            }
        };

        last = Some(list);
        lists.push(list);
    }

    lists
}
