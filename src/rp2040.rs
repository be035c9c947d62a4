//! RP2040 Pin and Peripheral Facts
//!
//! Limits of the RP2040 that board descriptors are validated against.
//!
//! # SPI Pin Multiplexing
//!
//! Each GPIO has a fixed SPI function (function select F1). The bus is
//! chosen by bit 3 of the pin number and the signal by the low two bits:
//!
//! | `pin & 3` | Signal |
//! |-----------|--------|
//! | 0         | RX     |
//! | 1         | CSn    |
//! | 2         | SCK    |
//! | 3         | TX     |
//!
//! So SPI0 uses GPIO 0-7 and 16-23, SPI1 uses GPIO 8-15 and 24-29.
//!
//! # Flash
//!
//! The RP2040 executes from external QSPI flash. The first part holds the
//! firmware image; the filesystem region occupies the end of flash.

// =============================================================================
// GPIO
// =============================================================================

/// Number of user GPIOs (GPIO0-GPIO29)
pub const GPIO_COUNT: u8 = 30;

/// Whether a pin number exists on the chip
#[inline]
pub const fn is_valid_gpio(pin: u8) -> bool {
    pin < GPIO_COUNT
}

/// Whether a pin can be driven as a push-pull output
///
/// Every user GPIO on the RP2040 has an output driver.
#[inline]
pub const fn is_output_capable(pin: u8) -> bool {
    is_valid_gpio(pin)
}

/// Whether a pin can raise an edge or level interrupt
#[inline]
pub const fn is_interrupt_capable(pin: u8) -> bool {
    is_valid_gpio(pin)
}

// =============================================================================
// SPI
// =============================================================================

/// Number of SPI controllers
pub const SPI_BUS_COUNT: u8 = 2;

/// Default peripheral clock (clk_peri) in Hz
pub const CLK_PERI_HZ: u32 = 125_000_000;

/// Maximum SPI master clock in Hz (clk_peri / 2)
pub const SPI_MAX_HZ: u32 = CLK_PERI_HZ / 2;

/// SPI controller instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiBus {
    /// SPI0
    Spi0,
    /// SPI1
    Spi1,
}

impl SpiBus {
    /// Look up a bus by index
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(SpiBus::Spi0),
            1 => Some(SpiBus::Spi1),
            _ => None,
        }
    }

    /// Bus index
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            SpiBus::Spi0 => 0,
            SpiBus::Spi1 => 1,
        }
    }
}

/// SPI signal carried by a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiSignal {
    /// Controller in (CIPO / MISO)
    Rx,
    /// Hardware chip select
    Csn,
    /// Serial clock
    Sck,
    /// Controller out (COPI / MOSI)
    Tx,
}

/// SPI bus and signal a GPIO is multiplexed to
#[must_use]
pub const fn spi_function(pin: u8) -> Option<(SpiBus, SpiSignal)> {
    if !is_valid_gpio(pin) {
        return None;
    }
    let bus = if (pin >> 3) & 1 == 0 {
        SpiBus::Spi0
    } else {
        SpiBus::Spi1
    };
    let signal = match pin & 3 {
        0 => SpiSignal::Rx,
        1 => SpiSignal::Csn,
        2 => SpiSignal::Sck,
        _ => SpiSignal::Tx,
    };
    Some((bus, signal))
}

/// Whether `pin` carries `signal` for `bus`
#[must_use]
pub const fn routes_to(pin: u8, bus: SpiBus, signal: SpiSignal) -> bool {
    match spi_function(pin) {
        Some((b, s)) => b.id() == bus.id() && s as u8 == signal as u8,
        None => false,
    }
}

// =============================================================================
// Flash
// =============================================================================

/// Flash erase sector size
pub const FLASH_SECTOR_BYTES: u32 = 4096;

/// Largest flash the XIP window maps (16 MiB)
pub const MAX_FLASH_BYTES: u32 = 16 * 1024 * 1024;

/// Flash kept for the firmware image below the storage region
pub const FIRMWARE_RESERVED_BYTES: u32 = 1024 * 1024;
