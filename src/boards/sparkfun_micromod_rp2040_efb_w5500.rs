//! SparkFun MicroMod RP2040 + Ethernet Function Board (RP2040 + W5500).
//!
//! The W5500 sits on the function board and reaches the processor board
//! through the MicroMod edge connector. SPI uses the MicroMod default SPI
//! pins; chip select, reset and interrupt come out on general-purpose
//! connector pins.

use crate::{BoardDescriptor, Pin, WiznetConfig};

/// SparkFun MicroMod RP2040 + Ethernet Function Board constants and helpers.
pub struct MicroModEfbW5500;

impl MicroModEfbW5500 {
    // =========================================================================
    // Board Identification
    // =========================================================================

    /// Board name.
    pub const BOARD_NAME: &'static str = "SparkFun MicroMod RP2040 + Ethernet Function Module";

    /// Board manufacturer.
    pub const MANUFACTURER: &'static str = "SparkFun";

    /// Ethernet controller on the function board.
    pub const CONTROLLER: &'static str = "W5500";

    // =========================================================================
    // Flash
    // =========================================================================

    /// 16 MiB QSPI flash on the processor board.
    pub const FLASH_BYTES: u32 = 16 * 1024 * 1024;

    /// Filesystem region at the end of flash.
    pub const STORAGE_BYTES: u32 = 14336 * 1024;

    // =========================================================================
    // SPI
    // =========================================================================

    /// SPI controller (SPI0).
    pub const SPI_BUS_ID: u8 = 0;

    /// SPI clock in Hz.
    pub const SPI_BAUD_RATE: u32 = 20_000_000;

    /// SPI_SCK (MicroMod default SPI clock).
    pub const SPI_SCK_GPIO: u8 = 22;

    /// SPI_COPI (MicroMod default SPI TX).
    pub const SPI_COPI_GPIO: u8 = 23;

    /// SPI_CIPO (MicroMod default SPI RX).
    pub const SPI_CIPO_GPIO: u8 = 20;

    // =========================================================================
    // Control Pins
    // =========================================================================

    /// Chip select: !CS0_PROCESSOR -> SPI_!CS -> G5.
    pub const CS_GPIO: u8 = 21;

    /// Reset: ETH_!RST -> G2/PWM -> PWM0_PROCESSOR -> PWM0.
    pub const RST_GPIO: u8 = 13;

    /// Interrupt: ETH_!INT -> G0_!INT -> D0_PROCESSOR -> D0.
    ///
    /// Wired, so received data is interrupt driven.
    pub const INT_GPIO: Option<u8> = Some(6);

    // =========================================================================
    // Features
    // =========================================================================

    /// Network support compiled in.
    pub const NETWORK: bool = true;

    /// Cooperative-scheduling network support compiled in.
    pub const ASYNC_NETWORK: bool = true;

    // =========================================================================
    // Helper Methods
    // =========================================================================

    /// Return the W5500 wiring for this board.
    #[must_use]
    pub const fn wiznet_config() -> WiznetConfig {
        let config = WiznetConfig::new(
            Self::SPI_BUS_ID,
            Self::SPI_BAUD_RATE,
            Pin::new(Self::SPI_SCK_GPIO),
            Pin::new(Self::SPI_COPI_GPIO),
            Pin::new(Self::SPI_CIPO_GPIO),
            Pin::new(Self::CS_GPIO),
            Pin::new(Self::RST_GPIO),
        );
        match Self::INT_GPIO {
            Some(gpio) => config.with_interrupt_pin(Pin::new(gpio)),
            None => config,
        }
    }

    /// Return the board descriptor.
    #[must_use]
    pub const fn descriptor() -> BoardDescriptor {
        BoardDescriptor {
            name: Self::BOARD_NAME,
            flash_bytes: Self::FLASH_BYTES,
            storage_bytes: Self::STORAGE_BYTES,
            network_enabled: Self::NETWORK,
            async_network_enabled: Self::ASYNC_NETWORK,
            wiznet: Self::wiznet_config(),
        }
    }

    /// Get a human-readable description of the board.
    #[must_use]
    pub const fn description() -> &'static str {
        "MicroMod RP2040 + Ethernet Function Board: W5500 on SPI0 @ 20 MHz, CS 21, RST 13, INT 6"
    }
}
