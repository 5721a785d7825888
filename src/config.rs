//! Construction-time configuration for strip controllers.

use heapless::String;

/// Maximum length of a device name, in bytes.
pub const MAX_NAME_LEN: usize = 32;

/// Maximum stored length of a color payload, in bytes.
pub const MAX_COLOR_LEN: usize = 32;

/// How color payloads are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorPolicy {
    /// Store any payload verbatim and parse it best-effort.
    #[default]
    Permissive,

    /// Reject payloads that are not `#RRGGBB`, keeping the previous color.
    Strict,
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Device name is empty.
    EmptyName,

    /// Device name is longer than [`MAX_NAME_LEN`].
    NameTooLong,

    /// Strip must have at least one pixel.
    ZeroPixelCount,

    /// Requested pixel count exceeds the driver's buffer.
    PixelCountExceedsCapacity { requested: u16, capacity: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyName => write!(f, "device name must not be empty"),
            ConfigError::NameTooLong => {
                write!(f, "device name exceeds {} bytes", MAX_NAME_LEN)
            }
            ConfigError::ZeroPixelCount => write!(f, "strip must have at least one pixel"),
            ConfigError::PixelCountExceedsCapacity {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "pixel count {} exceeds buffer capacity of {}",
                    requested, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Identity and behavior of a strip controller.
///
/// The name must match the device tile name configured on the hub side; it
/// prefixes every status report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripConfig {
    name: String<MAX_NAME_LEN>,
    color_policy: ColorPolicy,
}

impl StripConfig {
    /// Creates a configuration with the permissive color policy.
    pub fn new(name: &str) -> Result<Self, ConfigError> {
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }

        let name = String::try_from(name).map_err(|_| ConfigError::NameTooLong)?;

        Ok(Self {
            name,
            color_policy: ColorPolicy::default(),
        })
    }

    /// Sets the color validation policy.
    pub fn with_color_policy(mut self, policy: ColorPolicy) -> Self {
        self.color_policy = policy;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color_policy(&self) -> ColorPolicy {
        self.color_policy
    }
}
