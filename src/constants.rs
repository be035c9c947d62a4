//! Centralized Constants
//!
//! Single source of truth for the controller limits and timing values used
//! by descriptor validation and bring-up.
//!
//! # Organization
//!
//! - **Controller limits**: WIZnet-family SPI clock ceiling
//! - **Timing**: Reset pulse and recovery delays
//!
//! Microcontroller limits live in [`crate::rp2040`].

// =============================================================================
// Controller Limits
// =============================================================================

/// Maximum SPI clock for the WIZnet controller family in Hz
///
/// The lowest common rating across the family; descriptors above this are
/// rejected even when a particular chip would tolerate more.
pub const WIZNET_MAX_SPI_HZ: u32 = 20_000_000;

// =============================================================================
// Timing Constants
// =============================================================================

/// Reset assertion time in microseconds (RSTn low, minimum 500 µs)
pub const RESET_PULSE_US: u32 = 500;

/// Wait after releasing reset in microseconds (internal PLL lock, 1 ms)
pub const RESET_RECOVERY_US: u32 = 1_000;
