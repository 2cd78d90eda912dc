//! # Program Counter Adder
//!
//! The PC has its own incrementer, separate from the ALU. For relative
//! branches it also adds the signed displacement to PCL, but the carry into
//! PCH is held back for one clock. The controller sees that pending carry as
//! PCC and spends an extra clock applying it, which is where the page-crossing
//! penalty of a taken branch comes from.

/// Operation selected for the PC adder this clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PcAdderOp {
    /// Pass PCL/PCH through unchanged.
    #[default]
    Nop,
    /// PC + 1 with ripple from PCL into PCH.
    Inc,
    /// PCL + 1 + signed offset; the carry into PCH is deferred.
    Add,
    /// Apply the deferred carry (+1 or -1) to PCH and clear it.
    CarryAdd,
}

/// PC adder state: the carry deferred by [`PcAdderOp::Add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PcAdder {
    carry: i8,
}

impl PcAdder {
    /// Creates an adder with no pending carry.
    pub const fn new() -> Self {
        Self { carry: 0 }
    }

    /// Pending carry into PCH: -1, 0 or +1.
    pub const fn carry(&self) -> i8 {
        self.carry
    }

    /// True while a deferred carry is waiting to be applied.
    pub const fn page_crossed(&self) -> bool {
        self.carry != 0
    }

    /// Runs one clock of the adder and returns the new (PCL, PCH) candidates.
    ///
    /// `offset` is the raw byte on the data bus, interpreted as a signed
    /// displacement by [`PcAdderOp::Add`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mc6502::{PcAdder, PcAdderOp};
    ///
    /// let mut adder = PcAdder::new();
    /// // Operand at 0x00F1, branch +0x20: PCL wraps, PCH fix deferred
    /// assert_eq!(adder.compute(0xF1, 0x00, 0x20, PcAdderOp::Add), (0x12, 0x00));
    /// assert!(adder.page_crossed());
    /// assert_eq!(adder.compute(0x12, 0x00, 0x00, PcAdderOp::CarryAdd), (0x12, 0x01));
    /// assert!(!adder.page_crossed());
    /// ```
    pub fn compute(&mut self, pcl: u8, pch: u8, offset: u8, op: PcAdderOp) -> (u8, u8) {
        match op {
            PcAdderOp::Nop => (pcl, pch),
            PcAdderOp::Inc => {
                let [low, high] = u16::from_le_bytes([pcl, pch]).wrapping_add(1).to_le_bytes();
                (low, high)
            }
            PcAdderOp::Add => {
                // Signed: a branch at 0x0040 with offset 0xE0 lands on 0x0022
                let sum = pcl as i16 + 1 + offset as i8 as i16;
                self.carry = if sum > 0xFF {
                    1
                } else if sum < 0 {
                    -1
                } else {
                    0
                };
                ((sum & 0xFF) as u8, pch)
            }
            PcAdderOp::CarryAdd => {
                let pch = pch.wrapping_add(self.carry as u8);
                self.carry = 0;
                (pcl, pch)
            }
        }
    }
}
