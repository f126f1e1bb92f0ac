/// The time currently on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockFace {
    pub hours: u8,
    pub minutes: u8,
}

impl ClockFace {
    /// Nothing shown yet, or the time was replaced by another scene.
    /// Never equal to a real time, so the next update always redraws.
    pub const UNSET: Self = Self::new(77, 77);

    pub const fn new(hours: u8, minutes: u8) -> Self {
        Self { hours, minutes }
    }

    pub const fn is_unset(self) -> bool {
        self.hours == Self::UNSET.hours && self.minutes == Self::UNSET.minutes
    }

    /// Hours tens, hours ones, minutes tens, minutes ones.
    pub const fn digits(self) -> [u8; 4] {
        [
            self.hours / 10,
            self.hours % 10,
            self.minutes / 10,
            self.minutes % 10,
        ]
    }
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::UNSET
    }
}
