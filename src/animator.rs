//! Frame-by-frame transitions from the shown buffer to the staged one.
//!
//! Every frame mutates `current` in place; the caller pushes it to the
//! hardware and waits before asking for the next one.

use core::ops::Range;

use heapless::Vec;

use crate::{
    config::{BUFFER_LEN, COLUMN_COUNT},
    framebuffer::Framebuffer,
    layout::DIGIT_GROUPS,
};

/// Frames in a vertical roll: one per row bit.
pub const VERTICAL_FRAMES: usize = 8;

/// Most column groups one animation moves independently.
pub const MAX_GROUPS: usize = DIGIT_GROUPS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Swap in the staged buffer at once
    Immediate,
    /// Old content slides down, new content drops in from the top
    RollingVertical,
    /// Old content slides left, new content enters from the right
    RollingHorizontal,
}

/// One vertical roll frame over `columns`.
///
/// Each column moves one bit down and takes the staged column shifted up by
/// `7 - frame`; after frame 7 the columns equal the staged ones.
pub fn roll_vertical(current: &mut Framebuffer, staging: &Framebuffer, columns: Range<usize>, frame: usize) {
    let shift = (VERTICAL_FRAMES - 1).saturating_sub(frame) as u32;
    for column in columns {
        let incoming = staging.column(column).checked_shl(shift).unwrap_or(0);
        current.set_column(column, (current.column(column) >> 1) | incoming);
    }
}

/// One horizontal roll frame over `columns`.
///
/// Everything moves one column left. The freed right-hand column is blank on
/// frame 0 and staged column `frame - 1` of the group afterwards.
pub fn roll_horizontal(current: &mut Framebuffer, staging: &Framebuffer, columns: Range<usize>, frame: usize) {
    let Some(last) = columns.end.checked_sub(1).filter(|&last| last >= columns.start) else {
        return;
    };
    for column in columns.start..last {
        current.set_column(column, current.column(column + 1));
    }
    let incoming = match frame {
        0 => 0,
        n => staging.column(columns.start + n - 1),
    };
    current.set_column(last, incoming);
}

/// A transition in progress.
#[derive(Debug, Clone)]
pub struct Animation {
    transition: Transition,
    groups: Vec<Range<usize>, MAX_GROUPS>,
    frame: usize,
    frames: usize,
}

impl Animation {
    /// Animates only `groups`; columns outside them are left alone.
    pub fn new(transition: Transition, groups: Vec<Range<usize>, MAX_GROUPS>) -> Self {
        let frames = match transition {
            Transition::Immediate => 1,
            Transition::RollingVertical => VERTICAL_FRAMES,
            Transition::RollingHorizontal => groups.iter().map(|group| group.len() + 1).max().unwrap_or(0),
        };
        Self {
            transition,
            groups,
            frame: 0,
            frames,
        }
    }

    /// Animates every column of the chain as one group.
    pub fn whole_buffer(transition: Transition) -> Self {
        Self::new(transition, core::iter::once(0..COLUMN_COUNT).collect())
    }

    /// Copies every column outside the animated groups from `staging`, so
    /// only the groups are left to move. The guard slot is included.
    pub fn settle_untouched(&self, current: &mut Framebuffer, staging: &Framebuffer) {
        for column in 0..BUFFER_LEN {
            if !self.groups.iter().any(|group| group.contains(&column)) {
                current.set_column(column, staging.column(column));
            }
        }
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Frames already applied.
    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.frame >= self.frames
    }

    /// Applies the next frame. Returns `false`, leaving `current` untouched,
    /// once every frame has been applied.
    pub fn advance(&mut self, current: &mut Framebuffer, staging: &Framebuffer) -> bool {
        if self.is_finished() {
            return false;
        }
        let frame = self.frame;
        match self.transition {
            Transition::Immediate => current.copy_from(staging),
            Transition::RollingVertical => {
                for group in &self.groups {
                    roll_vertical(current, staging, group.clone(), frame);
                }
            }
            Transition::RollingHorizontal => {
                for group in self.groups.iter().filter(|group| frame <= group.len()) {
                    roll_horizontal(current, staging, group.clone(), frame);
                }
            }
        }
        self.frame += 1;
        true
    }
}
