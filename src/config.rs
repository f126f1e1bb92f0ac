/// Number of chained 8x8 modules.
pub const MODULE_COUNT: usize = 6;

/// Rows driven per module; on this board each "row" register is a visual column.
pub const ROWS_PER_MODULE: usize = 8;

/// Pixel columns across the whole chain.
pub const COLUMN_COUNT: usize = MODULE_COUNT * ROWS_PER_MODULE;

/// Framebuffer length. The extra byte is a guard slot never pushed to hardware.
pub const BUFFER_LEN: usize = COLUMN_COUNT + 1;

/// Highest brightness level the MAX7219 accepts.
pub const MAX_INTENSITY: u8 = 15;

/// Runtime settings for a [`LedRow`](crate::LedRow).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Brightness applied by `initialise`
    pub intensity: u8,
    /// Pause after every animation frame
    pub frame_delay_ms: u32,
    /// Left edge of the 25 column wide time block
    pub time_offset: usize,
    /// Draw the snooze mark on immediate and horizontal transitions too.
    /// Off by default: only the vertical roll shows it.
    pub snooze_on_every_transition: bool,
}

impl DisplayConfig {
    pub const fn new() -> Self {
        Self {
            intensity: 8,
            frame_delay_ms: 20,
            time_offset: 12,
            snooze_on_every_transition: false,
        }
    }

    pub const fn with_frame_delay_ms(mut self, frame_delay_ms: u32) -> Self {
        self.frame_delay_ms = frame_delay_ms;
        self
    }

    pub const fn with_time_offset(mut self, time_offset: usize) -> Self {
        self.time_offset = time_offset;
        self
    }

    pub const fn with_snooze_on_every_transition(mut self, enabled: bool) -> Self {
        self.snooze_on_every_transition = enabled;
        self
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}
