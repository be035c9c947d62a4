//! Board-specific pin mappings and descriptors.
//!
//! Each module describes one supported board: wiring constants as associated
//! consts on a unit struct, plus the [`BoardDescriptor`](crate::BoardDescriptor)
//! built from them.
//!
//! # Supported Boards
//!
//! - SparkFun MicroMod RP2040 + Ethernet Function Board (WIZnet W5500)
//!
//! # Selection
//!
//! The compiled-in board is chosen with a Cargo feature and exposed through
//! [`crate::get_descriptor`]. All board modules are compiled regardless, so
//! their tables stay checked.

pub mod sparkfun_micromod_rp2040_efb_w5500;

pub use sparkfun_micromod_rp2040_efb_w5500::MicroModEfbW5500;
