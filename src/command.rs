//! Parsing of framework command messages.

/// A command addressed to a strip controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripCommand<'a> {
    /// Switch the strip on, showing the stored color.
    On,
    /// Switch the strip off.
    Off,
    /// Store a new color. The payload is already trimmed and is not validated.
    SetColor(&'a str),
}

impl<'a> StripCommand<'a> {
    /// Parses a framework message of the form `"<address> <payload>"`.
    ///
    /// Everything up to and including the first space is discarded. A message
    /// without a space is taken as payload in full. `on` and `off` must match
    /// exactly; any other payload is trimmed and treated as a color.
    pub fn parse(message: &'a str) -> Self {
        let payload = Self::payload(message);

        match payload {
            "on" => StripCommand::On,
            "off" => StripCommand::Off,
            other => StripCommand::SetColor(other.trim()),
        }
    }

    /// Returns the payload of a message with its address token removed.
    pub fn payload(message: &'a str) -> &'a str {
        match message.split_once(' ') {
            Some((_, payload)) => payload,
            None => message,
        }
    }
}
