//! Scene layouts: where each glyph of a time, alarm or text scene goes.

use core::ops::Range;

use heapless::Vec;

use crate::{
    clock::ClockFace,
    compose::compose_glyph,
    font::{letter_index, BELL, DIGITS, LETTERS, SEPARATOR, SNOOZE_MARK},
    framebuffer::Framebuffer,
};

/// Columns taken by a time block, separator included.
pub const TIME_WIDTH: usize = 25;

/// Column of the separator, relative to the time block.
pub const SEPARATOR_OFFSET: usize = 12;

/// Horizontal advance per character in text scenes.
pub const CHARACTER_PITCH: usize = 6;

/// Digit groups in a time block, one per [`ClockFace::digits`] entry.
pub const DIGIT_GROUPS: usize = 4;

const DIGIT_OFFSETS: [usize; DIGIT_GROUPS] = [0, 6, 14, 20];

const ALARM_WORD: [(usize, char); 6] = [
    (9, 'W'),
    (15, 'A'),
    (20, 'K'),
    (25, 'E'),
    (32, 'U'),
    (37, 'P'),
];

const ALARM_BELLS: [usize; 2] = [1, 40];

pub fn add_digit(buffer: &mut Framebuffer, start: usize, digit: u8) {
    compose_glyph(buffer, start, &DIGITS, usize::from(digit));
}

/// Characters without a glyph are skipped.
pub fn add_letter(buffer: &mut Framebuffer, start: usize, character: char) {
    if let Some(index) = letter_index(character) {
        compose_glyph(buffer, start, &LETTERS, index);
    }
}

pub fn add_bell(buffer: &mut Framebuffer, start: usize) {
    compose_glyph(buffer, start, &BELL, 0);
}

/// Owns both of its columns: assigns rather than ORs.
pub fn set_separator(buffer: &mut Framebuffer, start: usize, visible: bool) {
    buffer.set_column(start, if visible { SEPARATOR } else { 0 });
    buffer.set_column(start + 1, 0);
}

pub fn snooze_mark(buffer: &mut Framebuffer) {
    for (column, bits) in SNOOZE_MARK.iter().enumerate() {
        buffer.set_column(column, *bits);
    }
}

/// `HH:MM` with its left edge at `offset`.
pub fn time_scene(buffer: &mut Framebuffer, offset: usize, face: ClockFace, separator: bool) {
    for (digit, start) in face.digits().into_iter().zip(DIGIT_OFFSETS) {
        add_digit(buffer, offset + start, digit);
    }
    set_separator(buffer, offset + SEPARATOR_OFFSET, separator);
}

/// Column ranges of the digits that differ between `from` and `to`.
///
/// From [`ClockFace::UNSET`] every digit counts as changed, since the buffer
/// does not hold a time block yet.
pub fn digit_groups(offset: usize, from: ClockFace, to: ClockFace) -> Vec<Range<usize>, DIGIT_GROUPS> {
    let width = DIGITS.width();
    from.digits()
        .into_iter()
        .zip(to.digits())
        .zip(DIGIT_OFFSETS)
        .filter(|((old, new), _)| from.is_unset() || old != new)
        .map(|(_, start)| offset + start..offset + start + width)
        .collect()
}

/// "WAKE UP" between two bells. A negative banner is dark on lit.
pub fn alarm_scene(buffer: &mut Framebuffer, positive: bool) {
    for (start, character) in ALARM_WORD {
        add_letter(buffer, start, character);
    }
    for start in ALARM_BELLS {
        add_bell(buffer, start);
    }
    if !positive {
        buffer.invert();
    }
}

/// Left-aligned text; spaces and unknown characters only advance the pen.
pub fn string_scene(buffer: &mut Framebuffer, text: &str) {
    for (position, character) in text.chars().enumerate() {
        add_letter(buffer, position * CHARACTER_PITCH, character);
    }
}
