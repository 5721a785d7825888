//! Fixed-pin strip driver backed by an in-memory RGB array.

use palette::Srgb;
use smart_leds::{RGB8, SmartLedsWrite};

use crate::config::ConfigError;
use crate::driver::{OutputPins, PixelDriver, check_pixel_count};

/// A single-pin strip with a pixel array of capacity `N`.
///
/// Each pixel is set individually and the first `pixel_count` entries are
/// streamed to the writer on flush. The writer is expected to already be bound
/// to `pin` (e.g. an RMT channel or SPI peripheral set up by the application).
///
/// # Type Parameters
/// * `W` - Strip writer (WS2812 over SPI, RMT, bit-bang, ...)
/// * `N` - Buffer capacity in pixels
pub struct PixelArray<W, const N: usize> {
    writer: W,
    pin: u8,
    pixel_count: u16,
    pixels: [RGB8; N],
}

impl<W, const N: usize> PixelArray<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    /// Creates a driver for `pixel_count` pixels on `pin`.
    ///
    /// # Errors
    /// * `ZeroPixelCount` - `pixel_count` is zero
    /// * `PixelCountExceedsCapacity` - `pixel_count` is larger than `N`
    pub fn new(writer: W, pin: u8, pixel_count: u16) -> Result<Self, ConfigError> {
        check_pixel_count(pixel_count, N)?;

        Ok(Self {
            writer,
            pin,
            pixel_count,
            pixels: [RGB8::default(); N],
        })
    }

    /// Returns the current buffer contents for the driven pixels.
    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels[..self.pixel_count as usize]
    }

    /// Returns a reference to the underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the driver, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn show(&mut self) -> Result<(), W::Error> {
        let count = self.pixel_count as usize;
        self.writer.write(self.pixels[..count].iter().copied())
    }
}

impl<W, const N: usize> PixelDriver for PixelArray<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    type Error = W::Error;

    fn configure(&mut self) -> Result<(), Self::Error> {
        self.pixels = [RGB8::default(); N];
        self.show()
    }

    fn fill_and_show(&mut self, color: Srgb<u8>) -> Result<(), Self::Error> {
        let rgb = RGB8::new(color.red, color.green, color.blue);
        for pixel in self.pixels[..self.pixel_count as usize].iter_mut() {
            *pixel = rgb;
        }
        self.show()
    }

    fn pixel_count(&self) -> u16 {
        self.pixel_count
    }

    fn output_pins(&self) -> OutputPins {
        OutputPins::Single(self.pin)
    }
}
