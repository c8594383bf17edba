const HALF_BLOCK: &str = "▄";

/// Render an RGB24 picture as half-block cells: each terminal row shows two
/// pixel rows, the upper one as background and the lower as foreground.
/// Colour escapes are skipped when unchanged from the previous cell.
pub fn render_picture(rgb: &[u8], width: usize, height: usize, buf: &mut Vec<u8>) {
    buf.clear();

    // Move cursor to top-left
    buf.extend_from_slice(b"\x1b[H");

    let stride = width * 3;
    let mut prev_bg = [0u8; 3];
    let mut prev_fg = [0u8; 3];
    let mut first = true;

    for row in 0..height / 2 {
        if row > 0 {
            buf.extend_from_slice(b"\x1b[0m\r\n");
            first = true;
        }
        let top = row * 2 * stride;
        let bottom = top + stride;

        for col in 0..width {
            let bg = [rgb[top + col * 3], rgb[top + col * 3 + 1], rgb[top + col * 3 + 2]];
            let fg = [rgb[bottom + col * 3], rgb[bottom + col * 3 + 1], rgb[bottom + col * 3 + 2]];

            if first || bg != prev_bg {
                write_colour(buf, b"\x1b[48;2;", bg);
                prev_bg = bg;
            }
            if first || fg != prev_fg {
                write_colour(buf, b"\x1b[38;2;", fg);
                prev_fg = fg;
            }
            first = false;

            buf.extend_from_slice(HALF_BLOCK.as_bytes());
        }
    }

    // Reset colors
    buf.extend_from_slice(b"\x1b[0m");
}

fn write_colour(buf: &mut Vec<u8>, prefix: &[u8], [r, g, b]: [u8; 3]) {
    buf.extend_from_slice(prefix);
    write_u8(buf, r);
    buf.push(b';');
    write_u8(buf, g);
    buf.push(b';');
    write_u8(buf, b);
    buf.push(b'm');
}

/// Fast integer-to-ASCII for u8 values (0-255), no allocation.
fn write_u8(buf: &mut Vec<u8>, v: u8) {
    if v >= 100 {
        buf.push(b'0' + v / 100);
        buf.push(b'0' + (v / 10) % 10);
        buf.push(b'0' + v % 10);
    } else if v >= 10 {
        buf.push(b'0' + v / 10);
        buf.push(b'0' + v % 10);
    } else {
        buf.push(b'0' + v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_pixel_rows_share_one_line() {
        // 2x2: red over blue, then red over white.
        let rgb = [255, 0, 0, 255, 0, 0, 0, 0, 255, 255, 255, 255];
        let mut buf = Vec::new();
        render_picture(&rgb, 2, 2, &mut buf);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "\x1b[H\x1b[48;2;255;0;0m\x1b[38;2;0;0;255m▄\x1b[38;2;255;255;255m▄\x1b[0m"
        );
    }

    #[test]
    fn numbers_are_written_without_padding() {
        let mut buf = Vec::new();
        for v in [0u8, 7, 42, 255] {
            write_u8(&mut buf, v);
            buf.push(b' ');
        }
        assert_eq!(buf, b"0 7 42 255 ");
    }
}
