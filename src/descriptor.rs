//! Board descriptor types
//!
//! A [`BoardDescriptor`] is the static hardware description of one board:
//! its name, flash layout, and how the WIZnet Ethernet controller is wired
//! to the RP2040. Descriptors are plain `Copy` data built in `const`
//! context, and [`BoardDescriptor::validate`] is itself a `const fn` so the
//! compiled-in board is checked while the crate builds.

use crate::constants::WIZNET_MAX_SPI_HZ;
use crate::error::{ConfigError, ConfigResult};
use crate::rp2040::{self, SpiBus, SpiSignal};

/// Early return for `ConfigResult<()>` inside `const fn` (no `?` there).
macro_rules! const_try {
    ($e:expr) => {
        if let Err(e) = $e {
            return Err(e);
        }
    };
}

// =============================================================================
// Pin
// =============================================================================

/// GPIO number on the target microcontroller
///
/// Construction does not range-check; [`BoardDescriptor::validate`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin(u8);

impl Pin {
    /// Wrap a GPIO number
    #[must_use]
    pub const fn new(gpio: u8) -> Self {
        Self(gpio)
    }

    /// GPIO number
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Whether the pin exists on the RP2040
    #[must_use]
    pub const fn is_valid(self) -> bool {
        rp2040::is_valid_gpio(self.0)
    }

    /// SPI bus and signal this pin is multiplexed to
    #[must_use]
    pub const fn spi_function(self) -> Option<(SpiBus, SpiSignal)> {
        rp2040::spi_function(self.0)
    }
}

// =============================================================================
// Receive Mode
// =============================================================================

/// How the driver learns about received data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxMode {
    /// Interrupt line wired; the driver attaches a handler to this pin
    Interrupt(Pin),
    /// No interrupt line; the driver polls the controller
    Polling,
}

// =============================================================================
// WIZnet Wiring
// =============================================================================

/// WIZnet controller wiring: SPI bus, clock rate and control pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WiznetConfig {
    /// SPI controller index
    pub spi_bus_id: u8,
    /// SPI clock in Hz
    pub spi_baud_rate: u32,
    /// SCK pin
    pub spi_clock_pin: Pin,
    /// Controller-out pin (COPI / MOSI)
    pub spi_out_pin: Pin,
    /// Controller-in pin (CIPO / MISO)
    pub spi_in_pin: Pin,
    /// Chip select, active low, framed by software around each transaction
    pub chip_select_pin: Pin,
    /// Controller reset, active low
    pub reset_pin: Pin,
    /// Interrupt output of the controller (INTn), if wired
    pub interrupt_pin: Option<Pin>,
}

impl WiznetConfig {
    /// Create a wiring description without an interrupt line
    ///
    /// Every required signal is a parameter, so a binding with a missing pin
    /// does not compile.
    #[must_use]
    pub const fn new(
        spi_bus_id: u8,
        spi_baud_rate: u32,
        spi_clock_pin: Pin,
        spi_out_pin: Pin,
        spi_in_pin: Pin,
        chip_select_pin: Pin,
        reset_pin: Pin,
    ) -> Self {
        Self {
            spi_bus_id,
            spi_baud_rate,
            spi_clock_pin,
            spi_out_pin,
            spi_in_pin,
            chip_select_pin,
            reset_pin,
            interrupt_pin: None,
        }
    }

    /// Wire the controller's interrupt output to `pin`
    #[must_use]
    pub const fn with_interrupt_pin(mut self, pin: Pin) -> Self {
        self.interrupt_pin = Some(pin);
        self
    }

    /// Drop the interrupt line (poll instead)
    #[must_use]
    pub const fn without_interrupt_pin(mut self) -> Self {
        self.interrupt_pin = None;
        self
    }

    /// Set the SPI clock
    #[must_use]
    pub const fn with_baud_rate(mut self, hz: u32) -> Self {
        self.spi_baud_rate = hz;
        self
    }

    /// SPI controller, if the index exists
    #[must_use]
    pub const fn spi_bus(&self) -> Option<SpiBus> {
        SpiBus::from_id(self.spi_bus_id)
    }

    /// Receive notification mode implied by the wiring
    #[must_use]
    pub const fn rx_mode(&self) -> RxMode {
        match self.interrupt_pin {
            Some(pin) => RxMode::Interrupt(pin),
            None => RxMode::Polling,
        }
    }

    /// Check the wiring against controller and RP2040 limits
    pub const fn validate(&self) -> ConfigResult<()> {
        let Some(bus) = self.spi_bus() else {
            return Err(ConfigError::InvalidSpiBus);
        };

        if self.spi_baud_rate == 0 {
            return Err(ConfigError::BaudRateZero);
        }
        if self.spi_baud_rate > WIZNET_MAX_SPI_HZ || self.spi_baud_rate > rp2040::SPI_MAX_HZ {
            return Err(ConfigError::BaudRateTooHigh);
        }

        let (pins, count) = self.assigned_pins();
        let mut i = 0;
        while i < count {
            if !rp2040::is_valid_gpio(pins[i]) {
                return Err(ConfigError::PinOutOfRange);
            }
            i += 1;
        }

        const_try!(check_spi_pin(self.spi_clock_pin, bus, SpiSignal::Sck));
        const_try!(check_spi_pin(self.spi_out_pin, bus, SpiSignal::Tx));
        const_try!(check_spi_pin(self.spi_in_pin, bus, SpiSignal::Rx));

        if !rp2040::is_output_capable(self.chip_select_pin.number())
            || !rp2040::is_output_capable(self.reset_pin.number())
        {
            return Err(ConfigError::PinNotOutputCapable);
        }
        if let Some(pin) = self.interrupt_pin
            && !rp2040::is_interrupt_capable(pin.number())
        {
            return Err(ConfigError::PinNotInterruptCapable);
        }

        let mut a = 0;
        while a < count {
            let mut b = a + 1;
            while b < count {
                if pins[a] == pins[b] {
                    return Err(ConfigError::PinConflict);
                }
                b += 1;
            }
            a += 1;
        }

        Ok(())
    }

    /// Every assigned GPIO number and how many slots are used
    const fn assigned_pins(&self) -> ([u8; 6], usize) {
        let mut pins = [
            self.spi_clock_pin.number(),
            self.spi_out_pin.number(),
            self.spi_in_pin.number(),
            self.chip_select_pin.number(),
            self.reset_pin.number(),
            0,
        ];
        match self.interrupt_pin {
            Some(pin) => {
                pins[5] = pin.number();
                (pins, 6)
            }
            None => (pins, 5),
        }
    }
}

const fn check_spi_pin(pin: Pin, bus: SpiBus, signal: SpiSignal) -> ConfigResult<()> {
    if rp2040::routes_to(pin.number(), bus, signal) {
        Ok(())
    } else {
        Err(ConfigError::PinNotOnSpiBus)
    }
}

// =============================================================================
// Board Descriptor
// =============================================================================

/// Static hardware description of a board
///
/// One instance per supported board, built in `const` context and never
/// mutated. See [`crate::get_descriptor`] for the compiled-in board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardDescriptor {
    /// Human-readable board name
    pub name: &'static str,
    /// Physical flash size in bytes
    pub flash_bytes: u32,
    /// Filesystem region size in bytes, placed at the end of flash
    pub storage_bytes: u32,
    /// Network support compiled in
    pub network_enabled: bool,
    /// Cooperative-scheduling network support compiled in
    ///
    /// Carried for the network runtime; nothing in this crate acts on it.
    pub async_network_enabled: bool,
    /// Ethernet controller wiring
    pub wiznet: WiznetConfig,
}

impl BoardDescriptor {
    /// Check every field against RP2040 and controller limits
    ///
    /// Returns the first violated constraint. Flash and storage are checked
    /// before the network binding.
    pub const fn validate(&self) -> ConfigResult<()> {
        if self.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if self.flash_bytes > rp2040::MAX_FLASH_BYTES {
            return Err(ConfigError::FlashTooLarge);
        }
        if self.storage_bytes == 0 {
            return Err(ConfigError::StorageEmpty);
        }
        if self.storage_bytes % rp2040::FLASH_SECTOR_BYTES != 0 {
            return Err(ConfigError::StorageUnaligned);
        }
        match self.storage_bytes.checked_add(rp2040::FIRMWARE_RESERVED_BYTES) {
            Some(needed) if needed <= self.flash_bytes => {}
            _ => return Err(ConfigError::StorageExceedsFlash),
        }
        if !self.network_enabled {
            return Err(ConfigError::NetworkDisabled);
        }
        self.wiznet.validate()
    }

    /// Byte offset of the storage region from the start of flash
    #[must_use]
    pub const fn storage_offset(&self) -> u32 {
        self.flash_bytes.saturating_sub(self.storage_bytes)
    }

    /// Bytes left for the firmware image below the storage region
    #[must_use]
    pub const fn firmware_capacity(&self) -> u32 {
        self.storage_offset()
    }

    /// Receive notification mode for the Ethernet controller
    #[must_use]
    pub const fn rx_mode(&self) -> RxMode {
        self.wiznet.rx_mode()
    }
}
