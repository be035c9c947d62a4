//! Testing utilities and mock implementations
//!
//! Mock port layer for exercising bring-up on the host. Every mock shares
//! one event log so tests can assert the exact order of hardware actions.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use crate::bringup::PortHal;
use crate::descriptor::Pin;
use crate::error::{IoError, IoResult};
use crate::rp2040::SpiBus;

/// Shared, ordered record of hardware actions
pub type EventLog = Rc<RefCell<Vec<Event>>>;

/// Hardware action observed by a mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenSpi {
        bus: u8,
        baud_hz: u32,
        sck: u8,
        tx: u8,
        rx: u8,
    },
    ClaimOutput(u8),
    PinHigh(u8),
    PinLow(u8),
    ListenRx(u8),
    SpiWrite(Vec<u8>),
    SpiRead(usize),
    SpiFlush,
    Delay(u32),
}

// =============================================================================
// Mock Port
// =============================================================================

/// Mock port layer handing out logging SPI buses and pins
///
/// # Example
///
/// ```ignore
/// let mut port = MockPort::new();
/// port.fail_pin(13);
/// let err = bring_up(&board, &mut port, MockDelay::new(port.log())).unwrap_err();
/// ```
#[derive(Debug, Default)]
pub struct MockPort {
    log: EventLog,
    fail_open_spi: bool,
    fail_interrupt: bool,
    failing_pin: Option<u8>,
    /// Shared with every bus handed out
    spi_failing: Rc<Cell<bool>>,
}

impl MockPort {
    /// Create a new mock port with an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the shared event log
    pub fn log(&self) -> EventLog {
        Rc::clone(&self.log)
    }

    /// Snapshot of recorded events
    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    /// Clear the event log
    pub fn clear_events(&self) {
        self.log.borrow_mut().clear();
    }

    /// Make `open_spi` fail
    pub fn fail_open_spi(&mut self) {
        self.fail_open_spi = true;
    }

    /// Make claiming `gpio` as an output fail
    pub fn fail_pin(&mut self, gpio: u8) {
        self.failing_pin = Some(gpio);
    }

    /// Make interrupt registration fail
    pub fn fail_interrupt(&mut self) {
        self.fail_interrupt = true;
    }

    /// Make reads and writes on already opened buses fail
    pub fn fail_spi_transfers(&self) {
        self.spi_failing.set(true);
    }
}

impl PortHal for MockPort {
    type Spi = MockSpiBus;
    type Output = MockOutputPin;

    fn open_spi(
        &mut self,
        bus: SpiBus,
        baud_hz: u32,
        sck: Pin,
        tx: Pin,
        rx: Pin,
    ) -> IoResult<MockSpiBus> {
        if self.fail_open_spi {
            return Err(IoError::Spi);
        }
        self.log.borrow_mut().push(Event::OpenSpi {
            bus: bus.id(),
            baud_hz,
            sck: sck.number(),
            tx: tx.number(),
            rx: rx.number(),
        });
        Ok(MockSpiBus {
            log: self.log(),
            failing: Rc::clone(&self.spi_failing),
        })
    }

    fn output_pin(&mut self, pin: Pin) -> IoResult<MockOutputPin> {
        if self.failing_pin == Some(pin.number()) {
            return Err(IoError::Gpio);
        }
        self.log
            .borrow_mut()
            .push(Event::ClaimOutput(pin.number()));
        Ok(MockOutputPin {
            gpio: pin.number(),
            log: self.log(),
        })
    }

    fn listen_rx_interrupt(&mut self, pin: Pin) -> IoResult<()> {
        if self.fail_interrupt {
            return Err(IoError::Interrupt);
        }
        self.log.borrow_mut().push(Event::ListenRx(pin.number()));
        Ok(())
    }
}

// =============================================================================
// Mock SPI Bus
// =============================================================================

/// Mock SPI bus; reads return zeros
#[derive(Debug)]
pub struct MockSpiBus {
    log: EventLog,
    failing: Rc<Cell<bool>>,
}

impl MockSpiBus {
    fn check(&self) -> Result<(), embedded_hal::spi::ErrorKind> {
        if self.failing.get() {
            Err(embedded_hal::spi::ErrorKind::Other)
        } else {
            Ok(())
        }
    }
}

impl embedded_hal::spi::ErrorType for MockSpiBus {
    type Error = embedded_hal::spi::ErrorKind;
}

impl embedded_hal::spi::SpiBus for MockSpiBus {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        self.check()?;
        words.fill(0);
        self.log.borrow_mut().push(Event::SpiRead(words.len()));
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        self.check()?;
        self.log.borrow_mut().push(Event::SpiWrite(words.to_vec()));
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.write(write)?;
        self.read(read)
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        let out = words.to_vec();
        self.transfer(words, &out)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::SpiFlush);
        Ok(())
    }
}

// =============================================================================
// Mock Output Pin
// =============================================================================

/// Mock push-pull output
#[derive(Debug)]
pub struct MockOutputPin {
    gpio: u8,
    log: EventLog,
}

impl embedded_hal::digital::ErrorType for MockOutputPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::PinLow(self.gpio));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::PinHigh(self.gpio));
        Ok(())
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records each delay in the shared log instead of waiting.
#[derive(Debug)]
pub struct MockDelay {
    log: EventLog,
}

impl MockDelay {
    /// Create a mock delay recording into `log`
    pub fn new(log: EventLog) -> Self {
        Self { log }
    }

    /// Total nanoseconds "delayed" so far
    pub fn total_ns(&self) -> u64 {
        self.log
            .borrow()
            .iter()
            .map(|e| match e {
                Event::Delay(ns) => u64::from(*ns),
                _ => 0,
            })
            .sum()
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::Delay(ns));
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal::delay::DelayNs;

    use super::*;

    #[test]
    fn delay_totals_recorded_waits() {
        let log = EventLog::default();
        let mut delay = MockDelay::new(Rc::clone(&log));
        delay.delay_ns(100);
        delay.delay_us(2);
        assert_eq!(delay.total_ns(), 2_100);
    }
}
