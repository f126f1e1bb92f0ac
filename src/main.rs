#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;
use rtic::app;

/// Wall time kept by the 1 Hz timer.
pub struct WallClock {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl WallClock {
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Advances one second. Returns `true` when the shown minute changed.
    pub fn tick(&mut self) -> bool {
        self.seconds += 1;
        if self.seconds < 60 {
            return false;
        }
        self.seconds = 0;
        self.add_minute();
        true
    }

    /// Sets the clock forward one minute; seconds are kept.
    pub fn add_minute(&mut self) {
        self.minutes += 1;
        if self.minutes >= 60 {
            self.minutes = 0;
            self.hours = (self.hours + 1) % 24;
        }
    }

    pub const fn hours_minutes(&self) -> (u8, u8) {
        (self.hours, self.minutes)
    }

    /// The colon blinks at 0.5 Hz: lit on even seconds.
    pub const fn colon_visible(&self) -> bool {
        self.seconds % 2 == 0
    }
}

#[app(device = rp_pico::hal::pac, peripherals = true, dispatchers = [I2C0_IRQ])]
mod app {
    use super::WallClock;
    use cortex_m::delay::Delay;
    use embedded_hal::digital::v2::ToggleableOutputPin;
    use matrix_clock::{DisplayConfig, LedRow, Transition, MODULE_COUNT};
    use max7219::{connectors::SpiConnectorSW, MAX7219};
    use rp_pico::hal::{
        clocks::{init_clocks_and_plls, Clock},
        fugit::{ExtU32, RateExtU32},
        gpio::{
            bank0::{Gpio15, Gpio16, Gpio17, Gpio18, Gpio19, Gpio25},
            FunctionSio, FunctionSpi, Interrupt, Pin, PullDown, PullUp, SioInput, SioOutput,
        },
        pac,
        sio::Sio,
        spi::{Enabled, Spi},
        timer::{Alarm, Alarm0, Timer},
        watchdog::Watchdog,
    };

    type Spi0 = Spi<
        Enabled,
        pac::SPI0,
        (
            Pin<Gpio19, FunctionSpi, PullDown>,
            Pin<Gpio16, FunctionSpi, PullDown>,
            Pin<Gpio18, FunctionSpi, PullDown>,
        ),
    >;
    type CsPin = Pin<Gpio17, FunctionSio<SioOutput>, PullDown>;
    type Chain = MAX7219<SpiConnectorSW<Spi0, CsPin>>;

    const XTAL_FREQ_HZ: u32 = 12_000_000;
    const TICK_US: u32 = 1_000_000;
    const BANNER_MS: u32 = 1_500;

    #[shared]
    struct Shared {
        clock: WallClock,
    }

    #[local]
    struct Local {
        row: LedRow<Chain, Delay>,
        button: Pin<Gpio15, FunctionSio<SioInput>, PullUp>,
        led: Pin<Gpio25, FunctionSio<SioOutput>, PullDown>,
        alarm: Alarm0,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let clocks = init_clocks_and_plls(
            XTAL_FREQ_HZ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut alarm = timer.alarm_0().unwrap();
        alarm.schedule(TICK_US.micros()).unwrap();
        alarm.enable_interrupt();

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let led = pins.led.into_push_pull_output();
        let button = pins.gpio15.into_pull_up_input();
        button.set_interrupt_enabled(Interrupt::EdgeLow, true);

        let mosi = pins.gpio19.into_function::<FunctionSpi>();
        let sck = pins.gpio18.into_function::<FunctionSpi>();
        let miso = pins.gpio16.into_function::<FunctionSpi>();
        let cs = pins.gpio17.into_push_pull_output();

        let spi = Spi::<_, _, _, 8>::new(pac.SPI0, (mosi, miso, sck)).init(
            &mut pac.RESETS,
            clocks.peripheral_clock.freq(),
            2_000_000u32.Hz(),
            &embedded_hal::spi::MODE_0,
        );

        let chain = MAX7219::from_spi_cs(MODULE_COUNT, spi, cs).unwrap();
        let delay = Delay::new(ctx.core.SYST, clocks.system_clock.freq().to_Hz());
        let mut row = LedRow::new(chain, delay, DisplayConfig::default());
        row.initialise().unwrap();
        row.show_string("hello", BANNER_MS, Transition::RollingHorizontal)
            .unwrap();
        defmt::info!("{=usize} modules ready", MODULE_COUNT);
        update_display::spawn(true).ok();

        (
            Shared {
                clock: WallClock::new(12, 34, 56),
            },
            Local {
                row,
                button,
                led,
                alarm,
            },
            init::Monotonics(),
        )
    }

    #[task(binds = TIMER_IRQ_0, priority = 1, shared = [clock], local = [alarm, led])]
    fn timer_tick(mut ctx: timer_tick::Context) {
        ctx.local.alarm.clear_interrupt();
        ctx.local.alarm.schedule(TICK_US.micros()).unwrap();
        ctx.local.led.toggle().unwrap();

        let minute_changed = ctx.shared.clock.lock(|c| c.tick());
        update_display::spawn(minute_changed).ok();
    }

    #[task(binds = IO_IRQ_BANK0, priority = 1, shared = [clock], local = [button])]
    fn button_press(mut ctx: button_press::Context) {
        ctx.local.button.clear_interrupt(Interrupt::EdgeLow);
        ctx.shared.clock.lock(|c| c.add_minute());
        update_display::spawn(true).ok();
    }

    /// Blinks the colon every tick; rolls the digits only when `redraw_time`.
    #[task(capacity = 2, shared = [clock], local = [row])]
    fn update_display(mut ctx: update_display::Context, redraw_time: bool) {
        let ((hours, minutes), colon) = ctx
            .shared
            .clock
            .lock(|c| (c.hours_minutes(), c.colon_visible()));

        let row = ctx.local.row;
        let mut shown = row.set_separator_visible(colon);
        if redraw_time {
            shown = shown.and_then(|()| row.show_time(hours, minutes, Transition::RollingVertical));
        }
        if let Err(err) = shown {
            defmt::warn!("display write failed: {}", defmt::Debug2Format(&err));
        }
    }
}
