//! Bitmap glyph tables.
//!
//! Glyphs are drawn row-major, one byte per row, the way they are easiest to
//! edit by hand. The framebuffer is column-major, so [`Font::column`] is where
//! the transpose happens.

/// Row bytes stored per glyph, whatever the family's visible height.
pub const GLYPH_ROWS: usize = 7;

/// Colon between hours and minutes, one framebuffer column.
pub const SEPARATOR: u8 = 0b0010_0100;

/// Small "z" drawn in the first three columns while snoozing.
pub const SNOOZE_MARK: [u8; 3] = [0b1010_0000, 0b1110_0000, 0b1010_0000];

/// A family of same-sized glyphs.
#[derive(Debug)]
pub struct Font {
    bitmaps: &'static [[u8; GLYPH_ROWS]],
    width: usize,
    height: usize,
    /// Bit of a row byte that holds glyph column 0; later columns sit below it.
    leading_bit: u8,
}

impl Font {
    const fn new(
        bitmaps: &'static [[u8; GLYPH_ROWS]],
        width: usize,
        height: usize,
        leading_bit: u8,
    ) -> Self {
        Self {
            bitmaps,
            width,
            height,
            leading_bit,
        }
    }

    pub const fn len(&self) -> usize {
        self.bitmaps.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bitmaps.is_empty()
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Row-major source bitmap of one glyph.
    pub fn glyph(&self, index: usize) -> Option<&'static [u8; GLYPH_ROWS]> {
        self.bitmaps.get(index)
    }

    /// One glyph column in framebuffer layout: glyph row `j` lands on bit `j + 1`,
    /// bit 0 stays empty as the top margin.
    ///
    /// Returns 0 for an unknown glyph or a column outside the glyph.
    pub fn column(&self, index: usize, column: usize) -> u8 {
        let Some(rows) = self.glyph(index) else {
            return 0;
        };
        if column >= self.width {
            return 0;
        }
        let bit = self.leading_bit - column as u8;
        rows.iter()
            .take(self.height)
            .enumerate()
            .fold(0, |acc, (row, bits)| acc | (((bits >> bit) & 1) << (row + 1)))
    }
}

/// Maps `A`-`Z` and `a`-`z` onto [`LETTERS`]; anything else has no glyph.
pub fn letter_index(character: char) -> Option<usize> {
    match character {
        'A'..='Z' => Some(character as usize - 'A' as usize),
        'a'..='z' => Some(character as usize - 'a' as usize),
        _ => None,
    }
}

/// Digits 0-9, five columns wide.
pub static DIGITS: Font = Font::new(&DIGIT_BITMAPS, 5, 6, 7);

/// Alarm bell.
pub static BELL: Font = Font::new(&BELL_BITMAPS, 7, 7, 7);

/// Letters A-Z, six columns wide including a blank trailing column.
pub static LETTERS: Font = Font::new(&LETTER_BITMAPS, 6, 7, 5);

#[rustfmt::skip]
static DIGIT_BITMAPS: [[u8; GLYPH_ROWS]; 10] = [
    [0b01110000, 0b10001000, 0b10001000, 0b10001000, 0b10001000, 0b01110000, 0], // 0
    [0b00010000, 0b00110000, 0b00010000, 0b00010000, 0b00010000, 0b00111000, 0], // 1
    [0b01110000, 0b10001000, 0b00010000, 0b00100000, 0b01000000, 0b11111000, 0], // 2
    [0b01110000, 0b10001000, 0b00001000, 0b00110000, 0b10001000, 0b01110000, 0], // 3
    [0b00010000, 0b00110000, 0b01010000, 0b11111000, 0b00010000, 0b00010000, 0], // 4
    [0b11110000, 0b10000000, 0b11100000, 0b00010000, 0b00010000, 0b11100000, 0], // 5
    [0b00110000, 0b01000000, 0b11110000, 0b10001000, 0b10001000, 0b01110000, 0], // 6
    [0b11111000, 0b10001000, 0b00010000, 0b00100000, 0b01000000, 0b10000000, 0], // 7
    [0b01110000, 0b10001000, 0b01110000, 0b10001000, 0b10001000, 0b01110000, 0], // 8
    [0b01110000, 0b10001000, 0b10001000, 0b01111000, 0b00001000, 0b01110000, 0], // 9
];

#[rustfmt::skip]
static BELL_BITMAPS: [[u8; GLYPH_ROWS]; 1] = [
    [0b00010000, 0b00111000, 0b01111100, 0b01111100, 0b01111100, 0b11111110, 0b00010000],
];

#[rustfmt::skip]
static LETTER_BITMAPS: [[u8; GLYPH_ROWS]; 26] = [
    [0, 0b011000, 0b100100, 0b111100, 0b100100, 0b100100, 0], // A
    [0, 0b111000, 0b100100, 0b111000, 0b100100, 0b111000, 0], // B
    [0, 0b011100, 0b100000, 0b100000, 0b100000, 0b011100, 0], // C
    [0, 0b111000, 0b100100, 0b100100, 0b100100, 0b111000, 0], // D
    [0, 0b111100, 0b100000, 0b111100, 0b100000, 0b111100, 0], // E
    [0, 0b111100, 0b100000, 0b111000, 0b100000, 0b100000, 0], // F
    [0, 0b011100, 0b100000, 0b101100, 0b100100, 0b011100, 0], // G
    [0, 0b100100, 0b100100, 0b111100, 0b100100, 0b100100, 0], // H
    [0, 0b011100, 0b001000, 0b001000, 0b010000, 0b011100, 0], // I
    [0, 0b011100, 0b001000, 0b001000, 0b001000, 0b011000, 0], // J
    [0, 0b100100, 0b101000, 0b110000, 0b101000, 0b100100, 0], // K
    [0, 0b100000, 0b100000, 0b100000, 0b100100, 0b111100, 0], // L
    [0, 0b100010, 0b110110, 0b101010, 0b100010, 0b100010, 0], // M
    [0, 0b100100, 0b110100, 0b101100, 0b101100, 0b100100, 0], // N
    [0, 0b011000, 0b100100, 0b100100, 0b100100, 0b011000, 0], // O
    [0, 0b111000, 0b101000, 0b111000, 0b100000, 0b100000, 0], // P
    [0, 0b001000, 0b010100, 0b100010, 0b010100, 0b001010, 0], // Q
    [0, 0b111000, 0b100100, 0b111000, 0b100100, 0b100100, 0], // R
    [0, 0b011110, 0b100000, 0b011100, 0b000010, 0b111100, 0], // S
    [0, 0b111110, 0b001000, 0b001000, 0b001000, 0b001000, 0], // T
    [0, 0b100100, 0b100100, 0b100100, 0b100100, 0b011000, 0], // U
    [0, 0b100010, 0b010010, 0b010100, 0b010100, 0b001000, 0], // V
    [0, 0b100010, 0b100010, 0b101010, 0b101010, 0b010100, 0], // W
    [0, 0b100010, 0b010100, 0b001000, 0b010100, 0b100010, 0], // X
    [0, 0b100010, 0b010100, 0b001000, 0b001000, 0b001000, 0], // Y
    [0, 0b111110, 0b000100, 0b001000, 0b010000, 0b111110, 0], // Z
];

#[cfg(test)]
mod tests {
    use super::*;

    /// Rebuilds the row-major bitmap from the transposed columns.
    fn untranspose(font: &Font, index: usize) -> [u8; GLYPH_ROWS] {
        let mut rows = [0u8; GLYPH_ROWS];
        for column in 0..font.width() {
            let bits = font.column(index, column);
            for (row, out) in rows.iter_mut().enumerate().take(font.height()) {
                if bits & (1 << (row + 1)) != 0 {
                    *out |= 1 << (font.leading_bit - column as u8);
                }
            }
        }
        rows
    }

    #[test]
    fn digit_columns_transpose_source_rows() {
        for digit in 0..DIGITS.len() {
            let source = DIGITS.glyph(digit).unwrap();
            let rebuilt = untranspose(&DIGITS, digit);
            assert_eq!(rebuilt[..6], source[..6], "digit {digit}");
        }
    }

    #[test]
    fn letter_and_bell_columns_transpose_source_rows() {
        for letter in 0..LETTERS.len() {
            assert_eq!(&untranspose(&LETTERS, letter), LETTERS.glyph(letter).unwrap());
        }
        assert_eq!(&untranspose(&BELL, 0), BELL.glyph(0).unwrap());
    }

    #[test]
    fn one_has_expected_columns() {
        // the "1" glyph: foot spans columns 2-4, stem is column 3
        let columns: [u8; 5] = core::array::from_fn(|c| DIGITS.column(1, c));
        assert_eq!(columns, [0, 0, 0b0100_0100, 0b0111_1110, 0b0100_0000]);
    }

    #[test]
    fn out_of_range_reads_blank() {
        assert_eq!(DIGITS.column(10, 0), 0);
        assert_eq!(DIGITS.column(8, 5), 0);
        assert_eq!(BELL.column(1, 0), 0);
    }

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(letter_index('A'), Some(0));
        assert_eq!(letter_index('z'), Some(25));
        assert_eq!(letter_index('q'), letter_index('Q'));
        assert_eq!(letter_index('5'), None);
        assert_eq!(letter_index(' '), None);
        assert_eq!(letter_index('é'), None);
    }
}
