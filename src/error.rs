//! Error types for board descriptors and Ethernet bring-up
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Board descriptor validation failures
//! - [`IoError`]: Port-layer failures while bringing the controller up
//!
//! The unified [`Error`] enum wraps both domain errors and is returned
//! by the bring-up routine.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Board descriptor validation errors
///
/// Raised by [`BoardDescriptor::validate`](crate::BoardDescriptor::validate).
/// For the compiled-in board these surface as build failures; the same
/// checks run again when the controller is brought up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Board name is empty
    EmptyName,
    /// Storage region has zero size
    StorageEmpty,
    /// Storage region is not a whole number of flash sectors
    StorageUnaligned,
    /// Storage region does not fit next to the firmware reserve
    StorageExceedsFlash,
    /// Flash size is larger than the chip can address
    FlashTooLarge,
    /// Board carries an Ethernet binding but networking is switched off
    NetworkDisabled,
    /// SPI bus index does not exist on the chip
    InvalidSpiBus,
    /// SPI clock rate is zero
    BaudRateZero,
    /// SPI clock rate exceeds the controller or peripheral limit
    BaudRateTooHigh,
    /// Pin number is outside the chip's GPIO range
    PinOutOfRange,
    /// SPI signal pin is not multiplexed to the selected bus
    PinNotOnSpiBus,
    /// Same pin assigned to more than one signal
    PinConflict,
    /// Pin cannot be driven as an output
    PinNotOutputCapable,
    /// Pin cannot raise an interrupt
    PinNotInterruptCapable,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::EmptyName => "board name is empty",
            ConfigError::StorageEmpty => "storage size is zero",
            ConfigError::StorageUnaligned => "storage size is not sector aligned",
            ConfigError::StorageExceedsFlash => "storage size exceeds usable flash",
            ConfigError::FlashTooLarge => "flash size exceeds chip limit",
            ConfigError::NetworkDisabled => "networking disabled for Ethernet board",
            ConfigError::InvalidSpiBus => "invalid SPI bus",
            ConfigError::BaudRateZero => "SPI baud rate is zero",
            ConfigError::BaudRateTooHigh => "SPI baud rate too high",
            ConfigError::PinOutOfRange => "pin out of range",
            ConfigError::PinNotOnSpiBus => "pin not routed to SPI bus",
            ConfigError::PinConflict => "pin assigned twice",
            ConfigError::PinNotOutputCapable => "pin not output capable",
            ConfigError::PinNotInterruptCapable => "pin not interrupt capable",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Port-layer errors during bring-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// SPI bus could not be opened or a transfer failed
    Spi,
    /// GPIO could not be claimed or driven
    Gpio,
    /// Interrupt handler could not be attached
    Interrupt,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::Spi => "SPI error",
            IoError::Gpio => "GPIO error",
            IoError::Interrupt => "interrupt registration failed",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// ```ignore
/// match bring_up(&desc, &mut port, delay) {
///     Err(Error::Config(ConfigError::BaudRateTooHigh)) => { /* ... */ }
///     Err(Error::Io(IoError::Gpio)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// I/O error
    Io(IoError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

impl embedded_hal::spi::Error for Error {
    fn kind(&self) -> embedded_hal::spi::ErrorKind {
        embedded_hal::spi::ErrorKind::Other
    }
}

/// Result type alias for bring-up operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for descriptor validation
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for port-layer operations
pub type IoResult<T> = core::result::Result<T, IoError>;

// =============================================================================
// Unit Tests
// =============================================================================
