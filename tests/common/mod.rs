//! Shared test infrastructure for st-rgb-strip integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use heapless::{String, Vec};
use palette::Srgb;
use smart_leds::{RGB8, SmartLedsWrite};
use st_rgb_strip::{OutputPins, PixelDriver, StatusSink, Transport};

// ============================================================================
// Mock Driver
// ============================================================================

/// Mock driver that records every configure and fill call
pub struct MockDriver {
    pixel_count: u16,
    pins: OutputPins,
    configure_calls: usize,
    fill_history: Vec<Srgb<u8>, 32>,
    fail_writes: bool,
}

impl MockDriver {
    pub fn new(pixel_count: u16) -> Self {
        Self {
            pixel_count,
            pins: OutputPins::Single(6),
            configure_calls: 0,
            fill_history: Vec::new(),
            fail_writes: false,
        }
    }

    /// Driver whose configure and fill calls all fail
    pub fn failing(pixel_count: u16) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(pixel_count)
        }
    }

    pub fn configure_calls(&self) -> usize {
        self.configure_calls
    }

    pub fn fill_history(&self) -> &[Srgb<u8>] {
        &self.fill_history
    }

    pub fn last_fill(&self) -> Option<Srgb<u8>> {
        self.fill_history.last().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteFailed;

impl PixelDriver for MockDriver {
    type Error = WriteFailed;

    fn configure(&mut self) -> Result<(), WriteFailed> {
        self.configure_calls += 1;
        if self.fail_writes {
            return Err(WriteFailed);
        }
        Ok(())
    }

    fn fill_and_show(&mut self, color: Srgb<u8>) -> Result<(), WriteFailed> {
        let _ = self.fill_history.push(color);
        if self.fail_writes {
            return Err(WriteFailed);
        }
        Ok(())
    }

    fn pixel_count(&self) -> u16 {
        self.pixel_count
    }

    fn output_pins(&self) -> OutputPins {
        self.pins
    }
}

// ============================================================================
// Mock Status Sink
// ============================================================================

/// Mock sink that records every status report
pub struct MockSink {
    reports: Vec<String<64>, 32>,
}

impl MockSink {
    pub fn new() -> Self {
        Self { reports: Vec::new() }
    }

    pub fn reports(&self) -> &[String<64>] {
        &self.reports
    }

    pub fn last_report(&self) -> Option<&str> {
        self.reports.last().map(|s| s.as_str())
    }

    pub fn count(&self) -> usize {
        self.reports.len()
    }
}

impl StatusSink for MockSink {
    fn send_status(&mut self, status: &str) {
        let mut report: String<64> = String::new();
        let _ = report.push_str(status);
        let _ = self.reports.push(report);
    }
}

// ============================================================================
// Mock Strip Writer
// ============================================================================

/// Mock smart-leds writer that records each frame
pub struct MockWriter {
    frames: Vec<Vec<RGB8, 64>, 8>,
}

impl MockWriter {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn frames(&self) -> &[Vec<RGB8, 64>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[RGB8]> {
        self.frames.last().map(|f| f.as_slice())
    }
}

impl SmartLedsWrite for MockWriter {
    type Error = ();
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let mut frame: Vec<RGB8, 64> = Vec::new();
        for color in iterator {
            let _ = frame.push(color.into());
        }
        let _ = self.frames.push(frame);
        Ok(())
    }
}

// ============================================================================
// Mock Transport
// ============================================================================

/// Mock transport that records begin calls and shown frames
pub struct MockTransport<P: Copy> {
    begun_with: Option<OutputPins>,
    frames: Vec<Vec<P, 64>, 8>,
}

impl<P: Copy> MockTransport<P> {
    pub fn new() -> Self {
        Self {
            begun_with: None,
            frames: Vec::new(),
        }
    }

    pub fn begun_with(&self) -> Option<OutputPins> {
        self.begun_with
    }

    pub fn frames(&self) -> &[Vec<P, 64>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[P]> {
        self.frames.last().map(|f| f.as_slice())
    }
}

impl<P: Copy> Transport<P> for MockTransport<P> {
    type Error = ();

    fn begin(&mut self, pins: OutputPins) -> Result<(), ()> {
        self.begun_with = Some(pins);
        Ok(())
    }

    fn show(&mut self, pixels: &[P]) -> Result<(), ()> {
        let mut frame: Vec<P, 64> = Vec::new();
        for pixel in pixels {
            let _ = frame.push(*pixel);
        }
        let _ = self.frames.push(frame);
        Ok(())
    }
}

// ============================================================================
// Test Colors
// ============================================================================

pub const BLACK: Srgb<u8> = Srgb::new(0, 0, 0);
pub const GREEN: Srgb<u8> = Srgb::new(0, 255, 0);
pub const ORANGE: Srgb<u8> = Srgb::new(255, 128, 0);
