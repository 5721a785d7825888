//! Pixel output driver abstraction.
//!
//! A [`PixelDriver`] owns one physical strip: its pixel buffer, its data
//! pin(s) and the means to flush the buffer to the LEDs. The controller only
//! ever fills the whole strip with a single color, so the trait is deliberately
//! small. Two implementations ship with the crate:
//!
//! - [`PixelArray`](crate::PixelArray): a single-pin strip with an RGB buffer,
//!   flushed through any [`smart_leds::SmartLedsWrite`] writer.
//! - [`PixelBus`](crate::PixelBus): a strip parameterized by a wire color
//!   feature and an output transport that may use one or two pins.

use palette::Srgb;

/// Data pin(s) a strip is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputPins {
    /// One data line (WS2812 style).
    Single(u8),
    /// Data and clock lines (APA102/DotStar style).
    Pair(u8, u8),
}

impl OutputPins {
    /// Returns the primary data pin.
    pub fn primary(&self) -> u8 {
        match *self {
            OutputPins::Single(pin) | OutputPins::Pair(pin, _) => pin,
        }
    }

    /// Returns the secondary pin, if the strip uses one.
    pub fn secondary(&self) -> Option<u8> {
        match *self {
            OutputPins::Single(_) => None,
            OutputPins::Pair(_, pin) => Some(pin),
        }
    }
}

impl core::fmt::Display for OutputPins {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OutputPins::Single(pin) => write!(f, "{}", pin),
            OutputPins::Pair(data, clock) => write!(f, "{}+{}", data, clock),
        }
    }
}

/// Trait for abstracting addressable LED strip hardware.
///
/// Both operations block until the strip has been written; the duration
/// grows with the pixel count and cannot be cancelled.
pub trait PixelDriver {
    /// Hardware error type.
    type Error;

    /// Binds the strip to its pins, clears the buffer to black and flushes it.
    ///
    /// Called once at start-up, before any fill.
    fn configure(&mut self) -> Result<(), Self::Error>;

    /// Sets every pixel to `color` and flushes the buffer to the strip.
    fn fill_and_show(&mut self, color: Srgb<u8>) -> Result<(), Self::Error>;

    /// Number of pixels driven.
    fn pixel_count(&self) -> u16;

    /// Pins the strip is wired to.
    fn output_pins(&self) -> OutputPins;
}

pub(crate) fn check_pixel_count(requested: u16, capacity: usize) -> Result<(), crate::ConfigError> {
    if requested == 0 {
        return Err(crate::ConfigError::ZeroPixelCount);
    }
    if requested as usize > capacity {
        return Err(crate::ConfigError::PixelCountExceedsCapacity {
            requested,
            capacity,
        });
    }
    Ok(())
}
