//! # Addressing Modes
//!
//! The 13 addressing modes of the 6502. The decoder reports one of these for
//! every opcode, and the controller's operand-fetch state dispatches on it to
//! pick the micro-state chain that computes the effective address.
//!
//! Each mode also has a short text tag (`abs`, `zpgx`, ...) used by opcode
//! listings and test fixtures.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within page 0.
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within page 0.
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    Relative,

    /// Full 16-bit address.
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Costs a fix-up clock when the index addition crosses a page.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Costs a fix-up clock when the index addition crosses a page.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    IndirectY,
}

impl AddressingMode {
    /// All modes, in declaration order.
    pub const ALL: [AddressingMode; 13] = [
        AddressingMode::Implicit,
        AddressingMode::Accumulator,
        AddressingMode::Immediate,
        AddressingMode::ZeroPage,
        AddressingMode::ZeroPageX,
        AddressingMode::ZeroPageY,
        AddressingMode::Relative,
        AddressingMode::Absolute,
        AddressingMode::AbsoluteX,
        AddressingMode::AbsoluteY,
        AddressingMode::Indirect,
        AddressingMode::IndirectX,
        AddressingMode::IndirectY,
    ];

    /// Short text tag for the mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use mc6502::AddressingMode;
    ///
    /// assert_eq!(AddressingMode::AbsoluteX.tag(), "absx");
    /// assert_eq!("indy".parse::<AddressingMode>(), Ok(AddressingMode::IndirectY));
    /// ```
    pub const fn tag(self) -> &'static str {
        match self {
            AddressingMode::Implicit => "impl",
            AddressingMode::Accumulator => "acc",
            AddressingMode::Immediate => "imm",
            AddressingMode::ZeroPage => "zpg",
            AddressingMode::ZeroPageX => "zpgx",
            AddressingMode::ZeroPageY => "zpgy",
            AddressingMode::Relative => "rel",
            AddressingMode::Absolute => "abs",
            AddressingMode::AbsoluteX => "absx",
            AddressingMode::AbsoluteY => "absy",
            AddressingMode::Indirect => "ind",
            AddressingMode::IndirectX => "indx",
            AddressingMode::IndirectY => "indy",
        }
    }

    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
            _ => 1,
        }
    }

    /// True for the modes whose operand byte is a zero-page address.
    pub const fn is_zero_page(self) -> bool {
        matches!(
            self,
            AddressingMode::ZeroPage
                | AddressingMode::ZeroPageX
                | AddressingMode::ZeroPageY
                | AddressingMode::IndirectX
                | AddressingMode::IndirectY
        )
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when parsing an unknown addressing-mode tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown addressing mode tag '{0}'")]
pub struct ParseAddressingModeError(pub String);

impl FromStr for AddressingMode {
    type Err = ParseAddressingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressingMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.tag() == s)
            .ok_or_else(|| ParseAddressingModeError(s.to_string()))
    }
}
