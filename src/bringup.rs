//! WIZnet Controller Bring-Up
//!
//! Consumes a [`BoardDescriptor`] to wire up the Ethernet controller:
//!
//! 1. Validate the descriptor (fail fast before touching hardware)
//! 2. Open the SPI bus at the configured clock on the configured pins
//! 3. Claim chip select and park it high (deasserted)
//! 4. Pulse reset low, release it, wait for the controller to come up
//! 5. Attach the receive interrupt when the board wires one
//!
//! Peripheral access goes through [`PortHal`], implemented by the port layer
//! on top of the RP2040 HAL in use (or by a mock in tests). The returned
//! [`WiznetLink`] owns the bus as a [`WiznetDevice`], an
//! [`embedded_hal::spi::SpiDevice`] that frames every transaction with chip
//! select.
//!
//! # Example
//!
//! ```ignore
//! use rp2_wiznet_board::{bring_up, get_descriptor, RxMode};
//!
//! let board = get_descriptor();
//! let mut link = bring_up(&board, &mut port, delay)?;
//!
//! if let RxMode::Interrupt(pin) = link.rx_mode() {
//!     // pin now raises an interrupt on received data
//! }
//! link.device_mut().write(&[0x00, 0x39, 0x00])?;
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{ErrorType, Operation, SpiBus as HalSpiBus, SpiDevice};

use crate::constants::{RESET_PULSE_US, RESET_RECOVERY_US};
use crate::descriptor::{BoardDescriptor, Pin, RxMode};
use crate::error::{ConfigError, Error, IoError, IoResult, Result};
use crate::rp2040::SpiBus;

// =============================================================================
// Port Layer
// =============================================================================

/// Port-layer access to the peripherals the controller is wired to
pub trait PortHal {
    /// Opened SPI bus
    type Spi: HalSpiBus;
    /// GPIO configured as push-pull output
    type Output: OutputPin;

    /// Open `bus` at `baud_hz` with the given signal pins
    fn open_spi(&mut self, bus: SpiBus, baud_hz: u32, sck: Pin, tx: Pin, rx: Pin)
    -> IoResult<Self::Spi>;

    /// Claim `pin` as a push-pull output
    fn output_pin(&mut self, pin: Pin) -> IoResult<Self::Output>;

    /// Register `pin` as the controller's receive interrupt (falling edge)
    fn listen_rx_interrupt(&mut self, pin: Pin) -> IoResult<()>;
}

// =============================================================================
// SPI Device
// =============================================================================

/// SPI device for the controller: exclusive bus plus software chip select
#[derive(Debug)]
pub struct WiznetDevice<BUS, CS, D> {
    bus: BUS,
    cs: CS,
    delay: D,
}

impl<BUS: HalSpiBus, CS: OutputPin, D: DelayNs> WiznetDevice<BUS, CS, D> {
    /// Wrap a bus and chip select; drives chip select high
    pub fn new(bus: BUS, mut cs: CS, delay: D) -> Result<Self> {
        cs.set_high().map_err(|_| IoError::Gpio)?;
        Ok(Self { bus, cs, delay })
    }

    /// Consume the device and return its parts
    pub fn release(self) -> (BUS, CS, D) {
        (self.bus, self.cs, self.delay)
    }

    fn run(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<()> {
        for op in operations {
            match op {
                Operation::Read(buf) => self.bus.read(buf),
                Operation::Write(buf) => self.bus.write(buf),
                Operation::Transfer(read, write) => self.bus.transfer(read, write),
                Operation::TransferInPlace(buf) => self.bus.transfer_in_place(buf),
                Operation::DelayNs(ns) => {
                    self.bus.flush().map_err(|_| IoError::Spi)?;
                    self.delay.delay_ns(*ns);
                    Ok(())
                }
            }
            .map_err(|_| IoError::Spi)?;
        }
        Ok(())
    }
}

impl<BUS, CS, D> ErrorType for WiznetDevice<BUS, CS, D> {
    type Error = Error;
}

impl<BUS: HalSpiBus, CS: OutputPin, D: DelayNs> SpiDevice for WiznetDevice<BUS, CS, D> {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<()> {
        self.cs.set_low().map_err(|_| IoError::Gpio)?;

        // Chip select is released even when an operation fails.
        let result = self.run(operations);
        let flushed = self.bus.flush().map_err(|_| Error::Io(IoError::Spi));
        let released = self.cs.set_high().map_err(|_| Error::Io(IoError::Gpio));

        result?;
        flushed?;
        released?;
        Ok(())
    }
}

// =============================================================================
// Link
// =============================================================================

/// Controller brought up and ready for the network driver
#[derive(Debug)]
pub struct WiznetLink<SPI, OUT, D> {
    device: WiznetDevice<SPI, OUT, D>,
    reset: OUT,
    rx_mode: RxMode,
}

impl<SPI: HalSpiBus, OUT: OutputPin, D: DelayNs> WiznetLink<SPI, OUT, D> {
    /// SPI device framing transactions with chip select
    pub fn device_mut(&mut self) -> &mut WiznetDevice<SPI, OUT, D> {
        &mut self.device
    }

    /// Receive notification mode
    pub fn rx_mode(&self) -> RxMode {
        self.rx_mode
    }

    /// Pulse the reset line again
    pub fn hardware_reset(&mut self) -> Result<()> {
        pulse_reset(&mut self.reset, &mut self.device.delay)
    }

    /// Consume the link and return the device and reset pin
    pub fn release(self) -> (WiznetDevice<SPI, OUT, D>, OUT) {
        (self.device, self.reset)
    }
}

/// Drive reset low for [`RESET_PULSE_US`], release, wait [`RESET_RECOVERY_US`]
pub fn pulse_reset<O: OutputPin, D: DelayNs>(reset: &mut O, delay: &mut D) -> Result<()> {
    reset.set_low().map_err(|_| IoError::Gpio)?;
    delay.delay_us(RESET_PULSE_US);

    reset.set_high().map_err(|_| IoError::Gpio)?;
    delay.delay_us(RESET_RECOVERY_US);

    Ok(())
}

// =============================================================================
// Bring-Up
// =============================================================================

/// Bring the Ethernet controller described by `board` out of reset
///
/// # Errors
///
/// - [`Error::Config`] if the descriptor fails validation; no hardware is
///   touched in that case
/// - [`Error::Io`] if the port layer cannot open the bus, claim a pin or
///   attach the interrupt
pub fn bring_up<P: PortHal, D: DelayNs>(
    board: &BoardDescriptor,
    port: &mut P,
    delay: D,
) -> Result<WiznetLink<P::Spi, P::Output, D>> {
    board.validate()?;

    let wiznet = &board.wiznet;
    let Some(bus) = wiznet.spi_bus() else {
        return Err(ConfigError::InvalidSpiBus.into());
    };

    let spi = port.open_spi(
        bus,
        wiznet.spi_baud_rate,
        wiznet.spi_clock_pin,
        wiznet.spi_out_pin,
        wiznet.spi_in_pin,
    )?;

    #[cfg(feature = "defmt")]
    defmt::info!(
        "SPI{=u8} open at {=u32} Hz (SCK={=u8} TX={=u8} RX={=u8})",
        bus.id(),
        wiznet.spi_baud_rate,
        wiznet.spi_clock_pin.number(),
        wiznet.spi_out_pin.number(),
        wiznet.spi_in_pin.number()
    );

    let cs = port.output_pin(wiznet.chip_select_pin)?;
    let mut device = WiznetDevice::new(spi, cs, delay)?;

    let mut reset = port.output_pin(wiznet.reset_pin)?;
    pulse_reset(&mut reset, &mut device.delay)?;

    #[cfg(feature = "defmt")]
    defmt::info!("{} reset on GPIO{=u8}", board.name, wiznet.reset_pin.number());

    let rx_mode = wiznet.rx_mode();
    match rx_mode {
        RxMode::Interrupt(pin) => {
            port.listen_rx_interrupt(pin)?;

            #[cfg(feature = "defmt")]
            defmt::info!("RX interrupt on GPIO{=u8}", pin.number());
        }
        RxMode::Polling => {
            #[cfg(feature = "defmt")]
            defmt::debug!("no interrupt line, polling for RX");
        }
    }

    Ok(WiznetLink {
        device,
        reset,
        rx_mode,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
