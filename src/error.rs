//! Error types for the light page library

use core::fmt;

/// Error type for page and command operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Hostname does not fit the page footer
    HostnameTooLong,
    /// Color message has the wrong number of hex digits for the layout
    InvalidLength,
    /// Color message contains a non-hex digit
    InvalidHex,
    /// Text message is not a known control command
    UnknownCommand,
    /// Configuration JSON could not be parsed
    Config,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::HostnameTooLong => write!(f, "Hostname too long"),
            Error::InvalidLength => write!(f, "Invalid color message length"),
            Error::InvalidHex => write!(f, "Invalid hex digit in color message"),
            Error::UnknownCommand => write!(f, "Unknown command"),
            Error::Config => write!(f, "Configuration parse error"),
        }
    }
}

impl core::error::Error for Error {}
