//! # Processor Status Flags
//!
//! The status register P is stored in the datapath as a plain byte. Whenever a
//! component needs to reason about individual bits it unpacks the byte into a
//! [`Flags`] value, works on named booleans, and packs it back.
//!
//! Bit layout (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: (unused, conventionally 1)
//! - Bit 4: B (Break)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)
//!
//! A ninth bit, PCC (page-cross carry), only exists on the unpacked value. The
//! MPU fills it in every clock from the adders' pending carries so the
//! controller can decide whether a fix-up clock is needed. It is never packed
//! into the status byte.

use std::fmt;

/// Carry flag mask (bit 0).
pub const CARRY: u8 = 0b0000_0001;
/// Zero flag mask (bit 1).
pub const ZERO: u8 = 0b0000_0010;
/// Interrupt-disable flag mask (bit 2).
pub const INTERRUPT: u8 = 0b0000_0100;
/// Decimal-mode flag mask (bit 3).
pub const DECIMAL: u8 = 0b0000_1000;
/// Break flag mask (bit 4).
pub const BREAK: u8 = 0b0001_0000;
/// Unused bit 5.
pub const UNUSED: u8 = 0b0010_0000;
/// Overflow flag mask (bit 6).
pub const OVERFLOW: u8 = 0b0100_0000;
/// Negative flag mask (bit 7).
pub const NEGATIVE: u8 = 0b1000_0000;

/// Unpacked processor status.
///
/// # Examples
///
/// ```
/// use mc6502::Flags;
///
/// let flags = Flags::from_byte(0b1000_0011);
/// assert!(flags.n && flags.z && flags.c);
/// assert!(!flags.v);
/// assert_eq!(flags.to_byte(), 0b1000_0011);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags {
    /// Carry
    pub c: bool,
    /// Zero
    pub z: bool,
    /// Interrupt disable
    pub i: bool,
    /// Decimal mode
    pub d: bool,
    /// Break
    pub b: bool,
    /// Bit 5
    pub unused: bool,
    /// Overflow
    pub v: bool,
    /// Negative
    pub n: bool,
    /// Page-cross carry. Transient, never part of the status byte.
    pub pcc: bool,
}

impl Flags {
    /// Unpacks a status byte. PCC is always false on the result.
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            c: byte & CARRY != 0,
            z: byte & ZERO != 0,
            i: byte & INTERRUPT != 0,
            d: byte & DECIMAL != 0,
            b: byte & BREAK != 0,
            unused: byte & UNUSED != 0,
            v: byte & OVERFLOW != 0,
            n: byte & NEGATIVE != 0,
            pcc: false,
        }
    }

    /// Packs the eight architectural bits. PCC is dropped.
    pub const fn to_byte(self) -> u8 {
        (self.c as u8)
            | (self.z as u8) << 1
            | (self.i as u8) << 2
            | (self.d as u8) << 3
            | (self.b as u8) << 4
            | (self.unused as u8) << 5
            | (self.v as u8) << 6
            | (self.n as u8) << 7
    }

    /// Returns a copy with the page-cross carry set to `pcc`.
    pub const fn with_page_cross_carry(self, pcc: bool) -> Self {
        Self { pcc, ..self }
    }

    /// Sets N and Z from a result byte.
    pub fn set_nz(&mut self, value: u8) {
        self.n = value & NEGATIVE != 0;
        self.z = value == 0;
    }
}

impl From<u8> for Flags {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}

impl From<Flags> for u8 {
    fn from(flags: Flags) -> Self {
        flags.to_byte()
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N={} V={} -={} B={} D={} I={} Z={} C={}",
            self.n as u8,
            self.v as u8,
            self.unused as u8,
            self.b as u8,
            self.d as u8,
            self.i as u8,
            self.z as u8,
            self.c as u8
        )
    }
}
