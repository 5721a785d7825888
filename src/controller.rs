//! Strip controller: command handling and status reporting.
//!
//! Provides [`StripController`], which turns framework commands into strip
//! output, and the [`StatusSink`] trait through which it reports its on/off
//! state back to the framework.

use core::fmt::Write;

use heapless::String;
use palette::Srgb;

use crate::COLOR_OFF;
use crate::color::{ColorError, parse_hex_color, parse_hex_color_strict};
use crate::command::StripCommand;
use crate::config::{ColorPolicy, MAX_COLOR_LEN, MAX_NAME_LEN, StripConfig};
use crate::driver::{OutputPins, PixelDriver};

/// Maximum length of a status report: the name, a space and `off`.
pub const MAX_STATUS_LEN: usize = MAX_NAME_LEN + 4;

/// Color stored before any color command arrives.
pub const DEFAULT_COLOR: &str = "#000000";

/// Receiver for status reports (`"<name> on"` / `"<name> off"`).
///
/// Implement this for the framework's outbound channel.
pub trait StatusSink {
    /// Delivers one status report.
    fn send_status(&mut self, status: &str);
}

impl<F: FnMut(&str)> StatusSink for F {
    fn send_status(&mut self, status: &str) {
        self(status)
    }
}

/// On/off state of a strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchState {
    On,
    #[default]
    Off,
}

impl SwitchState {
    /// Keyword used in status reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SwitchState::On => "on",
            SwitchState::Off => "off",
        }
    }
}

/// Errors that can occur during controller operations.
///
/// Except for the lifecycle errors, the command has still been applied and
/// its status reported when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerError<E> {
    /// A command arrived before [`StripController::initialize`].
    NotInitialized,

    /// [`StripController::initialize`] was called a second time.
    AlreadyInitialized,

    /// Color payload rejected: malformed under [`ColorPolicy::Strict`], or
    /// longer than [`MAX_COLOR_LEN`] under either policy.
    InvalidColor(ColorError),

    /// The pixel driver failed to write the strip.
    Driver(E),
}

impl<E: core::fmt::Debug> core::fmt::Display for ControllerError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ControllerError::NotInitialized => write!(f, "controller not initialized"),
            ControllerError::AlreadyInitialized => write!(f, "controller already initialized"),
            ControllerError::InvalidColor(err) => write!(f, "{}", err),
            ControllerError::Driver(err) => write!(f, "pixel driver error: {:?}", err),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for ControllerError<E> {}

impl<E> From<ColorError> for ControllerError<E> {
    fn from(err: ColorError) -> Self {
        ControllerError::InvalidColor(err)
    }
}

/// Controls a single addressable strip from on/off and hex-color commands.
///
/// The displayed color is always a function of the switch state and the
/// stored color: black when off, the stored color when on. Each controller
/// exclusively owns its driver.
///
/// # Type Parameters
/// * `D` - Pixel driver implementation
/// * `S` - Status sink implementation
pub struct StripController<D: PixelDriver, S: StatusSink> {
    config: StripConfig,
    driver: D,
    sink: S,
    state: SwitchState,
    last_color: String<MAX_COLOR_LEN>,
    initialized: bool,
}

impl<D: PixelDriver, S: StatusSink> StripController<D, S> {
    /// Creates an uninitialized controller that is off and stores `#000000`.
    ///
    /// Nothing is written to the strip until [`initialize`](Self::initialize).
    pub fn new(config: StripConfig, driver: D, sink: S) -> Self {
        let mut last_color = String::new();
        let _ = last_color.push_str(DEFAULT_COLOR);

        Self {
            config,
            driver,
            sink,
            state: SwitchState::Off,
            last_color,
            initialized: false,
        }
    }

    /// Configures the driver, clearing the strip, then reports the status.
    ///
    /// Must be called once before any command. A driver failure is returned
    /// after the status has been reported; the controller still counts as
    /// initialized.
    pub fn initialize(&mut self) -> Result<(), ControllerError<D::Error>> {
        if self.initialized {
            return Err(ControllerError::AlreadyInitialized);
        }

        debug!(
            "{}: configuring strip, pins {}, {} pixels",
            self.config.name(),
            self.driver.output_pins(),
            self.driver.pixel_count()
        );

        self.initialized = true;
        let result = self.driver.configure();
        if result.is_err() {
            warn!("{}: strip configuration failed", self.config.name());
        }

        self.report_status();
        result.map_err(ControllerError::Driver)
    }

    /// Handles a framework message of the form `"<address> <payload>"`.
    ///
    /// See [`StripCommand::parse`] for how the payload is interpreted.
    pub fn handle_command(&mut self, message: &str) -> Result<(), ControllerError<D::Error>> {
        self.handle_action(StripCommand::parse(message))
    }

    /// Applies a parsed command, writes the strip and reports the status.
    ///
    /// The strip is written and the status reported even when the color is
    /// rejected or the driver fails; the first such failure is returned.
    pub fn handle_action(&mut self, command: StripCommand<'_>) -> Result<(), ControllerError<D::Error>> {
        if !self.initialized {
            return Err(ControllerError::NotInitialized);
        }

        let mut outcome = Ok(());
        match command {
            StripCommand::On => {
                debug!("{}: on", self.config.name());
                self.state = SwitchState::On;
            }
            StripCommand::Off => {
                debug!("{}: off", self.config.name());
                self.state = SwitchState::Off;
            }
            StripCommand::SetColor(color) => {
                debug!("{}: set color {}", self.config.name(), color);
                outcome = self.store_color(color);
            }
        }

        let written = self.write_output();
        self.report_status();

        outcome?;
        written.map_err(ControllerError::Driver)
    }

    /// Re-sends the status report without touching state or the strip.
    ///
    /// Allowed before [`initialize`](Self::initialize): it only reads state.
    pub fn refresh(&mut self) {
        self.report_status();
    }

    /// Returns the device name.
    pub fn name(&self) -> &str {
        self.config.name()
    }

    /// Returns the current on/off state.
    pub fn state(&self) -> SwitchState {
        self.state
    }

    /// Returns true if the strip is switched on.
    pub fn is_on(&self) -> bool {
        self.state == SwitchState::On
    }

    /// Returns the stored color string, exactly as last received.
    pub fn last_color(&self) -> &str {
        &self.last_color
    }

    /// Returns the color the strip shows in the current state.
    pub fn displayed_color(&self) -> Srgb<u8> {
        match self.state {
            SwitchState::On => parse_hex_color(&self.last_color),
            SwitchState::Off => COLOR_OFF,
        }
    }

    pub fn pixel_count(&self) -> u16 {
        self.driver.pixel_count()
    }

    pub fn output_pins(&self) -> OutputPins {
        self.driver.output_pins()
    }

    pub fn color_policy(&self) -> ColorPolicy {
        self.config.color_policy()
    }

    /// Returns true once [`initialize`](Self::initialize) has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns a reference to the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Returns a reference to the status sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the controller, returning the driver and the sink.
    pub fn into_parts(self) -> (D, S) {
        (self.driver, self.sink)
    }

    fn store_color(&mut self, color: &str) -> Result<(), ColorError> {
        // Stored colors are always the exact payload, never a prefix of it.
        if color.len() > MAX_COLOR_LEN {
            warn!(
                "{}: rejected color of {} bytes, keeping {}",
                self.config.name(),
                color.len(),
                self.last_color.as_str()
            );
            return Err(ColorError::ColorTooLong);
        }

        if self.config.color_policy() == ColorPolicy::Strict {
            if let Err(err) = parse_hex_color_strict(color) {
                warn!(
                    "{}: rejected color {}, keeping {}",
                    self.config.name(),
                    color,
                    self.last_color.as_str()
                );
                return Err(err);
            }
        }

        self.last_color.clear();
        self.last_color
            .push_str(color)
            .map_err(|_| ColorError::ColorTooLong)
    }

    fn write_output(&mut self) -> Result<(), D::Error> {
        let color = self.displayed_color();

        debug!(
            "{}: R:G:B = {}:{}:{}, {} pixels",
            self.config.name(),
            color.red,
            color.green,
            color.blue,
            self.driver.pixel_count()
        );

        let result = self.driver.fill_and_show(color);
        if result.is_err() {
            warn!("{}: strip write failed", self.config.name());
        }
        result
    }

    fn report_status(&mut self) {
        let mut status: String<MAX_STATUS_LEN> = String::new();
        // Name is at most MAX_NAME_LEN bytes, so the report always fits.
        let _ = write!(status, "{} {}", self.config.name(), self.state.as_str());
        self.sink.send_status(&status);
    }
}
