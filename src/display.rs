use embedded_hal::blocking::delay::DelayMs;

use crate::{
    animator::{Animation, Transition},
    clock::ClockFace,
    config::{DisplayConfig, MAX_INTENSITY, MODULE_COUNT},
    driver::MatrixChain,
    framebuffer::Framebuffer,
    layout,
};

/// A row of LED matrix modules showing clock, alarm and text scenes.
///
/// `current` mirrors what the modules show, `staging` is where the next scene
/// is composed before a transition brings it on screen. All calls block until
/// their animation has finished; there is no concurrent use.
pub struct LedRow<D, T> {
    driver: D,
    delay: T,
    config: DisplayConfig,
    current: Framebuffer,
    staging: Framebuffer,
    face: ClockFace,
    snooze: bool,
    separator: bool,
    alarm: Option<u8>,
}

impl<D, T> LedRow<D, T>
where
    D: MatrixChain,
    T: DelayMs<u32>,
{
    pub fn new(driver: D, delay: T, config: DisplayConfig) -> Self {
        Self {
            driver,
            delay,
            config,
            current: Framebuffer::new(),
            staging: Framebuffer::new(),
            face: ClockFace::UNSET,
            snooze: false,
            separator: true,
            alarm: None,
        }
    }

    /// Wakes every module at the configured brightness and blanks it.
    pub fn initialise(&mut self) -> Result<(), D::Error> {
        let intensity = self.config.intensity.min(MAX_INTENSITY);
        for module in 0..MODULE_COUNT {
            self.driver.enable_module(module)?;
            self.driver.set_intensity(module, intensity)?;
            self.driver.clear_module(module)?;
        }
        Ok(())
    }

    /// Levels above 15 are clamped.
    pub fn set_intensity(&mut self, level: u8) -> Result<(), D::Error> {
        let level = level.min(MAX_INTENSITY);
        for module in 0..MODULE_COUNT {
            self.driver.set_intensity(module, level)?;
        }
        Ok(())
    }

    /// Shows `hours:minutes`, animating only the digits that changed. Coming
    /// from any other scene the whole display rolls.
    ///
    /// Does nothing when that time is already on screen.
    pub fn show_time(&mut self, hours: u8, minutes: u8, transition: Transition) -> Result<(), D::Error> {
        let next = ClockFace::new(hours, minutes);
        if next == self.face {
            return Ok(());
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("time {=u8}:{=u8} via {}", hours, minutes, transition);

        let offset = self.config.time_offset;
        self.staging.clear();
        layout::time_scene(&mut self.staging, offset, next, self.separator);

        let snooze = self.snooze
            && (transition == Transition::RollingVertical || self.config.snooze_on_every_transition);
        let mut animation = match transition {
            Transition::Immediate => Animation::new(transition, Default::default()),
            // whatever is on screen is not a time block: move all of it
            _ if self.face.is_unset() => Animation::whole_buffer(transition),
            _ => Animation::new(transition, layout::digit_groups(offset, self.face, next)),
        };
        if transition != Transition::Immediate {
            animation.settle_untouched(&mut self.current, &self.staging);
        }
        while animation.advance(&mut self.current, &self.staging) {
            layout::set_separator(&mut self.current, offset + layout::SEPARATOR_OFFSET, self.separator);
            if snooze {
                layout::snooze_mark(&mut self.current);
            }
            self.push()?;
            if transition != Transition::Immediate {
                self.delay.delay_ms(self.config.frame_delay_ms);
            }
        }

        // only after the last frame: the next call diffs against this
        self.face = next;
        self.alarm = None;
        Ok(())
    }

    /// Shows the wake-up banner for alarm `alarm`; `positive` is lit on dark.
    pub fn show_alarm(&mut self, alarm: u8, positive: bool) -> Result<(), D::Error> {
        #[cfg(feature = "defmt")]
        defmt::info!("alarm {=u8} positive={=bool}", alarm, positive);

        self.staging.clear();
        layout::alarm_scene(&mut self.staging, positive);
        self.current.copy_from(&self.staging);
        self.push()?;
        self.face = ClockFace::UNSET;
        self.alarm = Some(alarm);
        Ok(())
    }

    /// Shows `text` for `duration_ms`, then blanks the display.
    pub fn show_string(&mut self, text: &str, duration_ms: u32, transition: Transition) -> Result<(), D::Error> {
        self.staging.clear();
        layout::string_scene(&mut self.staging, text);
        self.present_staged(transition)?;
        self.delay.delay_ms(duration_ms);
        self.clear_all()
    }

    /// Draws into a cleared staging buffer and brings it on screen. The
    /// buffer is an `embedded_graphics` draw target.
    pub fn show_drawing<F>(&mut self, transition: Transition, draw: F) -> Result<(), D::Error>
    where
        F: FnOnce(&mut Framebuffer),
    {
        self.staging.clear();
        draw(&mut self.staging);
        self.present_staged(transition)
    }

    /// Blanks the display and forgets the shown time.
    pub fn clear_all(&mut self) -> Result<(), D::Error> {
        self.current.clear();
        self.face = ClockFace::UNSET;
        self.alarm = None;
        self.push()
    }

    /// Takes effect on the next time transition.
    pub fn set_snooze_indicator(&mut self, active: bool) {
        self.snooze = active;
    }

    /// Shows or hides the colon. Redraws at once if a time is on screen.
    pub fn set_separator_visible(&mut self, visible: bool) -> Result<(), D::Error> {
        if self.separator == visible {
            return Ok(());
        }
        self.separator = visible;
        if self.face.is_unset() {
            return Ok(());
        }
        let start = self.config.time_offset + layout::SEPARATOR_OFFSET;
        layout::set_separator(&mut self.current, start, visible);
        self.push()
    }

    pub fn current(&self) -> &Framebuffer {
        &self.current
    }

    pub fn staging(&self) -> &Framebuffer {
        &self.staging
    }

    pub fn clock_face(&self) -> ClockFace {
        self.face
    }

    pub fn snooze_indicator(&self) -> bool {
        self.snooze
    }

    /// Alarm whose banner is on screen, if any.
    pub fn active_alarm(&self) -> Option<u8> {
        self.alarm
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn release(self) -> (D, T) {
        (self.driver, self.delay)
    }

    fn present_staged(&mut self, transition: Transition) -> Result<(), D::Error> {
        let mut animation = Animation::whole_buffer(transition);
        while animation.advance(&mut self.current, &self.staging) {
            self.push()?;
            if transition != Transition::Immediate {
                self.delay.delay_ms(self.config.frame_delay_ms);
            }
        }
        self.face = ClockFace::UNSET;
        self.alarm = None;
        Ok(())
    }

    /// Sends `current` to the chain, one row register at a time.
    fn push(&mut self) -> Result<(), D::Error> {
        for module in 0..MODULE_COUNT {
            for (row, &bits) in self.current.module(module).iter().enumerate() {
                self.driver.write_row(module, row, bits)?;
            }
        }
        Ok(())
    }
}
