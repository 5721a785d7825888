#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`StripController`**: Handles `on`/`off`/`#RRGGBB` commands for one strip and reports status
//! - **`StripCommand`**: A parsed framework command
//! - **`StripConfig`**: Device name and color validation policy
//! - **`PixelDriver`**: Trait for strip hardware, with two implementations:
//!   - **`PixelArray`**: Single-pin strip flushed through a `smart_leds::SmartLedsWrite` writer
//!   - **`PixelBus`**: Strip generic over a wire `ColorFeature` and an output `Transport`
//! - **`StatusSink`**: Trait to implement for the framework's status channel
//!
//! Colors are `Srgb<u8>`. The strip shows the stored color when on and black
//! when off; the stored color survives on/off transitions.

// Must come first so the logging macros are visible to the other modules.
mod fmt;

pub use palette::Srgb;

pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod driver;
pub mod pixel_array;
pub mod pixel_bus;

pub use color::{ColorError, format_hex_color, parse_hex_color, parse_hex_color_strict};
pub use command::StripCommand;
pub use config::{ColorPolicy, ConfigError, MAX_COLOR_LEN, MAX_NAME_LEN, StripConfig};
pub use controller::{ControllerError, StatusSink, StripController, SwitchState};
pub use driver::{OutputPins, PixelDriver};
pub use pixel_array::PixelArray;
pub use pixel_bus::{Brg, ColorFeature, Grb, Grbw, PixelBus, Rgb, Transport};

pub const COLOR_OFF: Srgb<u8> = Srgb::new(0, 0, 0);
