//! # Storage Cells
//!
//! Every register in the datapath is an 8-bit cell with a gated write: the
//! input only lands when the write enable for that cell is asserted during the
//! clock. Because the value type is `u8`, an out-of-range write cannot be
//! expressed; wide intermediates are masked where they leave the ALU.

/// An 8-bit register with gated write.
///
/// # Examples
///
/// ```
/// use mc6502::StorageCell;
///
/// let mut cell = StorageCell::new(0x77);
/// cell.latch(0x12, false);
/// assert_eq!(cell.get(), 0x77);
/// cell.latch(0x12, true);
/// assert_eq!(cell.get(), 0x12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StorageCell {
    value: u8,
}

impl StorageCell {
    /// Creates a cell holding `value`.
    pub const fn new(value: u8) -> Self {
        Self { value }
    }

    /// Current contents.
    pub const fn get(self) -> u8 {
        self.value
    }

    /// Clocks `input` into the cell when `enable` is asserted.
    pub fn latch(&mut self, input: u8, enable: bool) {
        if enable {
            self.value = input;
        }
    }

    /// Unconditional load, used for fixtures and the status register.
    pub fn set(&mut self, value: u8) {
        self.value = value;
    }
}
