//! RP2040 WIZnet Board Support
//!
//! A `no_std`, `no_alloc` board-support crate for RP2040 boards carrying a
//! WIZnet-family Ethernet controller on SPI.
//!
//! The crate exposes one static, validated hardware description of the
//! selected board, the [`BoardDescriptor`], and the bring-up routine that
//! consumes it to wire the controller up.
//!
//! # Architecture
//!
//! 1. **Descriptor** ([`descriptor`]): board name, flash layout and
//!    controller wiring as `const` data with a `const fn` validator
//! 2. **Board table** ([`boards`]): one module per supported board
//! 3. **Chip limits** ([`rp2040`]): GPIO range, SPI pin multiplexing, clocks
//! 4. **Bring-up** ([`bringup`]): opens SPI, resets the controller and
//!    attaches the receive interrupt through a [`PortHal`] implementation
//!
//! # Build-Time Validation
//!
//! The selected board's descriptor is validated in a `const` item. A table
//! with an out-of-range pin, an over-rated SPI clock or a storage region
//! that does not fit in flash stops the build with the error's description.
//! Required wiring has no defaults, so a missing pin is a compile error too.
//!
//! # Features
//!
//! - `sparkfun-micromod-rp2040-efb-w5500` (default): SparkFun MicroMod RP2040
//!   with the Ethernet Function Board
//! - `defmt`: Enable defmt formatting and bring-up logging
//!
//! # Example
//!
//! ```ignore
//! use rp2_wiznet_board::{bring_up, get_descriptor};
//!
//! let board = get_descriptor();
//! let mut link = bring_up(&board, &mut port, delay)?;
//! ```

#![no_std]
#![deny(missing_docs)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::struct_excessive_bools,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports
)]
#[cfg(not(any(feature = "sparkfun-micromod-rp2040-efb-w5500")))]
compile_error!(
    "No board selected. Enable a board feature; the default is 'sparkfun-micromod-rp2040-efb-w5500'."
);

// =============================================================================
// Modules
// =============================================================================

pub mod boards;
pub mod bringup;
pub mod constants;
pub mod descriptor;
pub mod error;
pub mod rp2040;

// Test utilities (only available during testing)
#[cfg(test)]
mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use bringup::{PortHal, WiznetDevice, WiznetLink, bring_up, pulse_reset};
pub use descriptor::{BoardDescriptor, Pin, RxMode, WiznetConfig};
pub use error::{ConfigError, ConfigResult, Error, IoError, IoResult, Result};

// =============================================================================
// Board Selection
// =============================================================================

/// Board selected at build time
#[cfg(feature = "sparkfun-micromod-rp2040-efb-w5500")]
pub type SelectedBoard = boards::MicroModEfbW5500;

const DESCRIPTOR: BoardDescriptor = SelectedBoard::descriptor();

// Rejects an invalid board table at build time.
const _: () = {
    if let Err(e) = DESCRIPTOR.validate() {
        panic!("{}", e.as_str());
    }
};

/// Descriptor of the board this crate was built for
pub static BOARD: BoardDescriptor = DESCRIPTOR;

/// Return the descriptor of the board this crate was built for
///
/// Pure and infallible; every call returns the same value.
#[must_use]
pub const fn get_descriptor() -> BoardDescriptor {
    DESCRIPTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_matches_selected_board() {
        assert_eq!(get_descriptor(), SelectedBoard::descriptor());
        assert_eq!(get_descriptor(), BOARD);
    }

    #[test]
    fn get_descriptor_is_idempotent() {
        let first = get_descriptor();
        for _ in 0..8 {
            assert_eq!(get_descriptor(), first);
        }
    }

    #[test]
    fn compiled_board_is_valid() {
        assert_eq!(get_descriptor().validate(), Ok(()));
    }

    #[cfg(feature = "sparkfun-micromod-rp2040-efb-w5500")]
    #[test]
    fn micromod_descriptor_values() {
        let d = get_descriptor();
        assert_eq!(d.name, "SparkFun MicroMod RP2040 + Ethernet Function Module");
        assert_eq!(d.storage_bytes, 14336 * 1024);
        assert_eq!(d.wiznet.spi_bus_id, 0);
        assert_eq!(d.wiznet.spi_baud_rate, 20_000_000);
        assert_eq!(d.wiznet.chip_select_pin, Pin::new(21));
        assert_eq!(d.wiznet.reset_pin, Pin::new(13));
        assert_eq!(d.wiznet.interrupt_pin, Some(Pin::new(6)));
        assert!(d.network_enabled);
        assert!(d.async_network_enabled);
    }

    #[test]
    fn interrupt_pin_distinct_from_control_pins() {
        let w = get_descriptor().wiznet;
        if let Some(irq) = w.interrupt_pin {
            assert_ne!(irq, w.chip_select_pin);
            assert_ne!(irq, w.reset_pin);
        }
    }
}
