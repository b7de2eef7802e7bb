use crate::shared::frame::Frame;

pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;
pub const GLYPH_SPACING: usize = 1;
/// Scale used for the on-frame feedback label.
pub const LABEL_SCALE: usize = 2;

/// Draw `text` with its top-left corner at `(x, y)`.
///
/// Covers the characters the feedback label needs; anything else
/// (including spaces) advances the pen without drawing. Pixels that
/// fall outside the frame are clipped.
pub fn draw_text(frame: &mut Frame, x: i32, y: i32, text: &str, color: [u8; 3], scale: usize) {
    let width = frame.width() as i32;
    let height = frame.height() as i32;
    let stride = frame.width() as usize;
    let advance = ((GLYPH_WIDTH + GLYPH_SPACING) * scale) as i32;
    let data = frame.data_mut();

    let mut pen_x = x;
    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (row, &bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                        continue;
                    }
                    for sy in 0..scale {
                        for sx in 0..scale {
                            let px = pen_x + (col * scale + sx) as i32;
                            let py = y + (row * scale + sy) as i32;
                            if px < 0 || py < 0 || px >= width || py >= height {
                                continue;
                            }
                            let idx = (py as usize * stride + px as usize) * Frame::CHANNELS;
                            data[idx..idx + 3].copy_from_slice(&color);
                        }
                    }
                }
            }
        }
        pen_x += advance;
    }
}

/// 5x7 bitmap rows, top to bottom; bit 4 is the leftmost column.
fn glyph(c: char) -> Option<[u8; GLYPH_HEIGHT]> {
    let rows = match c {
        '0' => [
            0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110,
        ],
        '1' => [
            0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110,
        ],
        '2' => [
            0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111,
        ],
        '3' => [
            0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110,
        ],
        '4' => [
            0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010,
        ],
        '5' => [
            0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110,
        ],
        '6' => [
            0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110,
        ],
        '7' => [
            0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000,
        ],
        '8' => [
            0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110,
        ],
        '9' => [
            0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100,
        ],
        'R' => [
            0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001,
        ],
        'G' => [
            0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111,
        ],
        'B' => [
            0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110,
        ],
        ':' => [
            0b00000, 0b00100, 0b00100, 0b00000, 0b00100, 0b00100, 0b00000,
        ],
        _ => return None,
    };
    Some(rows)
}
