//! # Arithmetic Logic Unit
//!
//! The ALU is a pure function of two operands, the incoming status flags and
//! an operation selector. It owns no state. Every result is masked to 8 bits
//! before it leaves this module, and any flag an operation does not name is
//! passed through untouched.
//!
//! `Cmp` and `Bit` hand back operand A unchanged; only the flags move. The
//! datapath relies on that to write the result back into the compared
//! register without disturbing it.

use crate::flags::{Flags, NEGATIVE, OVERFLOW};

/// ALU operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AluOp {
    /// A + 1 (N, Z)
    Inc,
    /// A - 1 (N, Z)
    Dec,
    /// A << 1 (N, Z, C)
    Asl,
    /// A >> 1 (N cleared, Z, C)
    Lsr,
    /// A << 1 with carry in at bit 0 (N, Z, C)
    Rol,
    /// A >> 1 with carry in at bit 7 (N, Z, C)
    Ror,
    /// A + B + C, binary or BCD (N, V, Z, C)
    Adc,
    /// A - B - !C, binary or BCD (N, V, Z, C)
    Sbc,
    /// Passes A; N/V from B, Z from A & B
    Bit,
    /// Passes A; N, Z, C from A - B
    Cmp,
    /// A & B (N, Z)
    And,
    /// A | B (N, Z)
    Ora,
    /// A ^ B (N, Z)
    Eor,
    /// Passes A, no flag change
    #[default]
    Tha,
}

/// Runs one ALU operation.
///
/// # Examples
///
/// ```
/// use mc6502::{alu, AluOp, Flags};
///
/// let (result, flags) = alu::compute(0x7F, 0x02, Flags::default(), AluOp::Adc);
/// assert_eq!(result, 0x81);
/// assert!(flags.n && flags.v && !flags.c);
///
/// // Compare leaves operand A alone
/// let (result, flags) = alu::compute(0x33, 0x33, Flags::default(), AluOp::Cmp);
/// assert_eq!(result, 0x33);
/// assert!(flags.z && flags.c);
/// ```
pub fn compute(a: u8, b: u8, flags: Flags, op: AluOp) -> (u8, Flags) {
    let mut f = flags;
    let result = match op {
        AluOp::Inc => {
            let r = a.wrapping_add(1);
            f.set_nz(r);
            r
        }
        AluOp::Dec => {
            let r = a.wrapping_sub(1);
            f.set_nz(r);
            r
        }
        AluOp::Asl => {
            f.c = a & 0x80 != 0;
            let r = a << 1;
            f.set_nz(r);
            r
        }
        AluOp::Lsr => {
            f.c = a & 0x01 != 0;
            let r = a >> 1;
            f.n = false;
            f.z = r == 0;
            r
        }
        AluOp::Rol => {
            let r = (a << 1) | flags.c as u8;
            f.c = a & 0x80 != 0;
            f.set_nz(r);
            r
        }
        AluOp::Ror => {
            let r = ((flags.c as u8) << 7) | (a >> 1);
            f.c = a & 0x01 != 0;
            f.set_nz(r);
            r
        }
        AluOp::Adc if flags.d => decimal_add(a, b, &mut f),
        AluOp::Adc => binary_add(a, b, &mut f),
        AluOp::Sbc if flags.d => decimal_subtract(a, b, &mut f),
        AluOp::Sbc => binary_add(a, !b, &mut f),
        AluOp::Bit => {
            f.n = b & NEGATIVE != 0;
            f.v = b & OVERFLOW != 0;
            f.z = a & b == 0;
            a
        }
        AluOp::Cmp => {
            f.set_nz(a.wrapping_sub(b));
            f.c = a >= b;
            a
        }
        AluOp::And => {
            let r = a & b;
            f.set_nz(r);
            r
        }
        AluOp::Ora => {
            let r = a | b;
            f.set_nz(r);
            r
        }
        AluOp::Eor => {
            let r = a ^ b;
            f.set_nz(r);
            r
        }
        AluOp::Tha => a,
    };
    (result, f)
}

fn binary_add(a: u8, b: u8, f: &mut Flags) -> u8 {
    let sum = a as u16 + b as u16 + f.c as u16;
    let r = sum as u8;
    // Operands agree in sign, result does not
    f.v = !(a ^ b) & (a ^ r) & 0x80 != 0;
    f.c = sum > 0xFF;
    f.set_nz(r);
    r
}

// V comes from the sum before the high-nibble correction. NMOS parts leave
// decimal-mode V undocumented; this convention is kept bit-for-bit.
fn decimal_add(a: u8, b: u8, f: &mut Flags) -> u8 {
    let mut low = (a & 0x0F) as u16 + (b & 0x0F) as u16 + f.c as u16;
    if low >= 0x0A {
        low = ((low + 0x06) & 0x0F) + 0x10;
    }
    let sum = (a & 0xF0) as u16 + (b & 0xF0) as u16 + low;
    let r = if sum >= 0xA0 { sum + 0x60 } else { sum };
    f.n = r & 0x80 != 0;
    f.v = sum > 0x7F;
    f.z = r & 0xFF == 0;
    f.c = r >= 0x100;
    r as u8
}

fn decimal_subtract(a: u8, b: u8, f: &mut Flags) -> u8 {
    let borrow = 1 - f.c as i16;
    let low = (a & 0x0F) as i16 - (b & 0x0F) as i16 - borrow;
    let diff = a as i16 - b as i16 - borrow;
    let mut r = diff;
    if diff < 0 {
        r -= 0x60;
    }
    if low < 0 {
        r -= 0x06;
    }
    f.n = r & 0x80 != 0;
    f.v = (r & 0x80 != 0) ^ (r & 0x100 != 0);
    f.z = r & 0xFF == 0;
    f.c = diff >= 0;
    (r & 0xFF) as u8
}
