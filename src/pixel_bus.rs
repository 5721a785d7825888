//! Strip driver parameterized by wire color feature and output transport.
//!
//! Strips differ in the order and number of channels they expect on the wire
//! ([`ColorFeature`]) and in how bytes reach them ([`Transport`]): one-wire
//! protocols need a single data pin, clocked protocols need two. [`PixelBus`]
//! combines both and keeps its buffer in wire format, so a flush is a plain
//! copy to the transport.

use palette::Srgb;

use crate::config::ConfigError;
use crate::driver::{OutputPins, PixelDriver, check_pixel_count};

/// Wire encoding of a pixel.
pub trait ColorFeature {
    /// One encoded pixel, as sent on the wire.
    type Pixel: Copy + Default;

    /// Encodes an RGB color into wire order.
    fn encode(color: Srgb<u8>) -> Self::Pixel;
}

/// Green, red, blue (most WS2812 strips).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grb;

/// Red, green, blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb;

/// Blue, red, green.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Brg;

/// Green, red, blue, white (SK6812 RGBW). The white channel stays dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grbw;

impl ColorFeature for Grb {
    type Pixel = [u8; 3];

    fn encode(color: Srgb<u8>) -> Self::Pixel {
        [color.green, color.red, color.blue]
    }
}

impl ColorFeature for Rgb {
    type Pixel = [u8; 3];

    fn encode(color: Srgb<u8>) -> Self::Pixel {
        [color.red, color.green, color.blue]
    }
}

impl ColorFeature for Brg {
    type Pixel = [u8; 3];

    fn encode(color: Srgb<u8>) -> Self::Pixel {
        [color.blue, color.red, color.green]
    }
}

impl ColorFeature for Grbw {
    type Pixel = [u8; 4];

    fn encode(color: Srgb<u8>) -> Self::Pixel {
        [color.green, color.red, color.blue, 0]
    }
}

/// Output method that moves encoded pixels to the strip.
pub trait Transport<P> {
    /// Transport error type.
    type Error;

    /// Prepares the output on the given pin(s).
    fn begin(&mut self, pins: OutputPins) -> Result<(), Self::Error>;

    /// Sends the encoded pixels, blocking until the strip has latched them.
    fn show(&mut self, pixels: &[P]) -> Result<(), Self::Error>;
}

/// A strip driven through transport `T` using color feature `F`.
///
/// # Type Parameters
/// * `F` - Wire color feature
/// * `T` - Output transport
/// * `N` - Buffer capacity in pixels
pub struct PixelBus<F: ColorFeature, T: Transport<F::Pixel>, const N: usize> {
    transport: T,
    pins: OutputPins,
    pixel_count: u16,
    pixels: [F::Pixel; N],
}

impl<F, T, const N: usize> PixelBus<F, T, N>
where
    F: ColorFeature,
    T: Transport<F::Pixel>,
{
    /// Creates a driver for `pixel_count` pixels on a single data pin.
    pub fn new(transport: T, pixel_count: u16, pin: u8) -> Result<Self, ConfigError> {
        Self::with_pins(transport, pixel_count, OutputPins::Single(pin))
    }

    /// Creates a driver for a two-wire (data and clock) strip.
    pub fn new_two_wire(
        transport: T,
        pixel_count: u16,
        data_pin: u8,
        clock_pin: u8,
    ) -> Result<Self, ConfigError> {
        Self::with_pins(transport, pixel_count, OutputPins::Pair(data_pin, clock_pin))
    }

    /// Creates a driver with explicit pins.
    ///
    /// # Errors
    /// * `ZeroPixelCount` - `pixel_count` is zero
    /// * `PixelCountExceedsCapacity` - `pixel_count` is larger than `N`
    pub fn with_pins(transport: T, pixel_count: u16, pins: OutputPins) -> Result<Self, ConfigError> {
        check_pixel_count(pixel_count, N)?;

        Ok(Self {
            transport,
            pins,
            pixel_count,
            pixels: [F::Pixel::default(); N],
        })
    }

    /// Sets every driven pixel to `color` without flushing.
    pub fn clear_to(&mut self, color: Srgb<u8>) {
        let encoded = F::encode(color);
        self.pixels[..self.pixel_count as usize].fill(encoded);
    }

    /// Returns the encoded buffer for the driven pixels.
    pub fn pixels(&self) -> &[F::Pixel] {
        &self.pixels[..self.pixel_count as usize]
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    fn show(&mut self) -> Result<(), T::Error> {
        let count = self.pixel_count as usize;
        self.transport.show(&self.pixels[..count])
    }
}

impl<F, T, const N: usize> PixelDriver for PixelBus<F, T, N>
where
    F: ColorFeature,
    T: Transport<F::Pixel>,
{
    type Error = T::Error;

    fn configure(&mut self) -> Result<(), Self::Error> {
        self.transport.begin(self.pins)?;
        self.pixels = [F::Pixel::default(); N];
        self.show()
    }

    fn fill_and_show(&mut self, color: Srgb<u8>) -> Result<(), Self::Error> {
        self.clear_to(color);
        self.show()
    }

    fn pixel_count(&self) -> u16 {
        self.pixel_count
    }

    fn output_pins(&self) -> OutputPins {
        self.pins
    }
}
