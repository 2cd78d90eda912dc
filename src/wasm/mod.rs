//! WebAssembly bindings for the mc6502 clock-level emulator.
//!
//! Exposes a JavaScript-callable wrapper that steps the MPU clock by clock or
//! instruction by instruction and lets a page show the bus and registers.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator6502;
