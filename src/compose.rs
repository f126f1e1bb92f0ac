use crate::{config::COLUMN_COUNT, font::Font, framebuffer::Framebuffer};

/// ORs glyph `index` of `font` into `buffer`, its first column at `start`.
///
/// Requests that would run past the last column, or name a glyph the font
/// does not have, are dropped without touching the buffer.
pub fn compose_glyph(buffer: &mut Framebuffer, start: usize, font: &Font, index: usize) {
    if index >= font.len() {
        return;
    }
    match start.checked_add(font.width()) {
        Some(end) if end <= COLUMN_COUNT => {}
        _ => return,
    }
    for column in 0..font.width() {
        buffer.or_column(start + column, font.column(index, column));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{BELL, DIGITS, LETTERS};

    #[test]
    fn writes_transposed_columns() {
        let mut fb = Framebuffer::new();
        compose_glyph(&mut fb, 10, &DIGITS, 8);
        for column in 0..5 {
            assert_eq!(fb.column(10 + column), DIGITS.column(8, column));
        }
        assert_eq!(fb.column(9), 0);
        assert_eq!(fb.column(15), 0);
    }

    #[test]
    fn keeps_existing_bits() {
        let mut fb = Framebuffer::new();
        fb.set_column(2, 0b1000_0001);
        compose_glyph(&mut fb, 0, &DIGITS, 0);
        assert_eq!(fb.column(2), 0b1000_0001 | DIGITS.column(0, 2));
    }

    #[test]
    fn drops_glyphs_that_would_overflow() {
        let mut fb = Framebuffer::new();
        compose_glyph(&mut fb, COLUMN_COUNT - 4, &DIGITS, 8);
        compose_glyph(&mut fb, COLUMN_COUNT - 6, &BELL, 0);
        compose_glyph(&mut fb, usize::MAX, &LETTERS, 0);
        compose_glyph(&mut fb, 0, &DIGITS, 10);
        assert_eq!(fb, Framebuffer::new());

        compose_glyph(&mut fb, COLUMN_COUNT - 5, &DIGITS, 8);
        assert_ne!(fb.column(COLUMN_COUNT - 1), 0);
        assert_eq!(fb.column(COLUMN_COUNT), 0);
    }
}
