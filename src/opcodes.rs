//! # Opcode Table and Decoder
//!
//! The controller does not know opcode numbers. In operand fetch it hands the
//! latched opcode to a [`Decoder`] and dispatches on the returned mnemonic and
//! addressing mode. [`OpcodeTable`] is the default decoder, backed by the
//! 256-entry [`OPCODE_TABLE`]:
//!
//! - **151 documented instructions**, the official NMOS 6502 opcodes
//! - **105 undocumented opcodes**, decoded as [`Mnemonic::Unknown`] in
//!   implied mode with 0 cycles and 1 byte
//!
//! Base cycle counts exclude page-crossing and branch-taken penalties.

use std::fmt;

use crate::addressing::AddressingMode;
use crate::flags::Flags;

/// Instruction mnemonics of the documented NMOS 6502 set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Undocumented opcode. Runs as a single-cycle no-op.
    Unknown,
}

impl Mnemonic {
    /// Upper-case assembler name, `"???"` for [`Mnemonic::Unknown`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
            Mnemonic::Unknown => "???",
        }
    }

    /// Conditional branches (BCC, BCS, BEQ, BMI, BNE, BPL, BVC, BVS).
    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            Mnemonic::Bcc
                | Mnemonic::Bcs
                | Mnemonic::Beq
                | Mnemonic::Bmi
                | Mnemonic::Bne
                | Mnemonic::Bpl
                | Mnemonic::Bvc
                | Mnemonic::Bvs
        )
    }

    /// Register stores: the final bus cycle writes A, X or Y.
    pub const fn is_store(self) -> bool {
        matches!(self, Mnemonic::Sta | Mnemonic::Stx | Mnemonic::Sty)
    }

    /// Shift, rotate, increment and decrement. These read-modify-write memory
    /// unless they are used in accumulator mode.
    pub const fn is_read_modify_write(self) -> bool {
        matches!(
            self,
            Mnemonic::Asl
                | Mnemonic::Lsr
                | Mnemonic::Rol
                | Mnemonic::Ror
                | Mnemonic::Inc
                | Mnemonic::Dec
        )
    }

    /// Instructions whose second clock addresses the stack page.
    pub const fn uses_stack(self) -> bool {
        matches!(
            self,
            Mnemonic::Php
                | Mnemonic::Pha
                | Mnemonic::Plp
                | Mnemonic::Pla
                | Mnemonic::Jsr
                | Mnemonic::Brk
                | Mnemonic::Rti
                | Mnemonic::Rts
        )
    }

    /// Evaluates a branch condition. False for anything that is not a branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use mc6502::{Flags, Mnemonic};
    ///
    /// let flags = Flags { z: true, ..Flags::default() };
    /// assert!(Mnemonic::Beq.branch_taken(flags));
    /// assert!(!Mnemonic::Bne.branch_taken(flags));
    /// assert!(!Mnemonic::Lda.branch_taken(flags));
    /// ```
    pub const fn branch_taken(self, flags: Flags) -> bool {
        match self {
            Mnemonic::Bcc => !flags.c,
            Mnemonic::Bcs => flags.c,
            Mnemonic::Beq => flags.z,
            Mnemonic::Bne => !flags.z,
            Mnemonic::Bmi => flags.n,
            Mnemonic::Bpl => !flags.n,
            Mnemonic::Bvc => !flags.v,
            Mnemonic::Bvs => flags.v,
            _ => false,
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static information about one opcode.
///
/// # Examples
///
/// ```
/// use mc6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeInfo {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,
    /// Addressing mode.
    pub mode: AddressingMode,
    /// Clock count without page-crossing or branch penalties. 0 when undocumented.
    pub base_cycles: u8,
    /// Opcode plus operand bytes.
    pub size_bytes: u8,
}

impl OpcodeInfo {
    /// True for the 151 documented opcodes.
    pub const fn is_documented(&self) -> bool {
        !matches!(self.mnemonic, Mnemonic::Unknown)
    }
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode, base_cycles: u8) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        base_cycles,
        size_bytes: 1 + mode.operand_bytes(),
    }
}

const UNKNOWN: OpcodeInfo = OpcodeInfo {
    mnemonic: Mnemonic::Unknown,
    mode: AddressingMode::Implicit,
    base_cycles: 0,
    size_bytes: 1,
};

const IMPL: AddressingMode = AddressingMode::Implicit;
const ACC: AddressingMode = AddressingMode::Accumulator;
const IMM: AddressingMode = AddressingMode::Immediate;
const ZPG: AddressingMode = AddressingMode::ZeroPage;
const ZPGX: AddressingMode = AddressingMode::ZeroPageX;
const ZPGY: AddressingMode = AddressingMode::ZeroPageY;
const REL: AddressingMode = AddressingMode::Relative;
const ABS: AddressingMode = AddressingMode::Absolute;
const ABSX: AddressingMode = AddressingMode::AbsoluteX;
const ABSY: AddressingMode = AddressingMode::AbsoluteY;
const IND: AddressingMode = AddressingMode::Indirect;
const INDX: AddressingMode = AddressingMode::IndirectX;
const INDY: AddressingMode = AddressingMode::IndirectY;

/// Opcode information indexed by opcode byte.
pub const OPCODE_TABLE: [OpcodeInfo; 256] = [
    op(Mnemonic::Brk, IMPL, 7), // 0x00
    op(Mnemonic::Ora, INDX, 6), // 0x01
    UNKNOWN, // 0x02
    UNKNOWN, // 0x03
    UNKNOWN, // 0x04
    op(Mnemonic::Ora, ZPG, 3), // 0x05
    op(Mnemonic::Asl, ZPG, 5), // 0x06
    UNKNOWN, // 0x07
    op(Mnemonic::Php, IMPL, 3), // 0x08
    op(Mnemonic::Ora, IMM, 2), // 0x09
    op(Mnemonic::Asl, ACC, 2), // 0x0A
    UNKNOWN, // 0x0B
    UNKNOWN, // 0x0C
    op(Mnemonic::Ora, ABS, 4), // 0x0D
    op(Mnemonic::Asl, ABS, 6), // 0x0E
    UNKNOWN, // 0x0F
    op(Mnemonic::Bpl, REL, 2), // 0x10
    op(Mnemonic::Ora, INDY, 5), // 0x11
    UNKNOWN, // 0x12
    UNKNOWN, // 0x13
    UNKNOWN, // 0x14
    op(Mnemonic::Ora, ZPGX, 4), // 0x15
    op(Mnemonic::Asl, ZPGX, 6), // 0x16
    UNKNOWN, // 0x17
    op(Mnemonic::Clc, IMPL, 2), // 0x18
    op(Mnemonic::Ora, ABSY, 4), // 0x19
    UNKNOWN, // 0x1A
    UNKNOWN, // 0x1B
    UNKNOWN, // 0x1C
    op(Mnemonic::Ora, ABSX, 4), // 0x1D
    op(Mnemonic::Asl, ABSX, 7), // 0x1E
    UNKNOWN, // 0x1F
    op(Mnemonic::Jsr, ABS, 6), // 0x20
    op(Mnemonic::And, INDX, 6), // 0x21
    UNKNOWN, // 0x22
    UNKNOWN, // 0x23
    op(Mnemonic::Bit, ZPG, 3), // 0x24
    op(Mnemonic::And, ZPG, 3), // 0x25
    op(Mnemonic::Rol, ZPG, 5), // 0x26
    UNKNOWN, // 0x27
    op(Mnemonic::Plp, IMPL, 4), // 0x28
    op(Mnemonic::And, IMM, 2), // 0x29
    op(Mnemonic::Rol, ACC, 2), // 0x2A
    UNKNOWN, // 0x2B
    op(Mnemonic::Bit, ABS, 4), // 0x2C
    op(Mnemonic::And, ABS, 4), // 0x2D
    op(Mnemonic::Rol, ABS, 6), // 0x2E
    UNKNOWN, // 0x2F
    op(Mnemonic::Bmi, REL, 2), // 0x30
    op(Mnemonic::And, INDY, 5), // 0x31
    UNKNOWN, // 0x32
    UNKNOWN, // 0x33
    UNKNOWN, // 0x34
    op(Mnemonic::And, ZPGX, 4), // 0x35
    op(Mnemonic::Rol, ZPGX, 6), // 0x36
    UNKNOWN, // 0x37
    op(Mnemonic::Sec, IMPL, 2), // 0x38
    op(Mnemonic::And, ABSY, 4), // 0x39
    UNKNOWN, // 0x3A
    UNKNOWN, // 0x3B
    UNKNOWN, // 0x3C
    op(Mnemonic::And, ABSX, 4), // 0x3D
    op(Mnemonic::Rol, ABSX, 7), // 0x3E
    UNKNOWN, // 0x3F
    op(Mnemonic::Rti, IMPL, 6), // 0x40
    op(Mnemonic::Eor, INDX, 6), // 0x41
    UNKNOWN, // 0x42
    UNKNOWN, // 0x43
    UNKNOWN, // 0x44
    op(Mnemonic::Eor, ZPG, 3), // 0x45
    op(Mnemonic::Lsr, ZPG, 5), // 0x46
    UNKNOWN, // 0x47
    op(Mnemonic::Pha, IMPL, 3), // 0x48
    op(Mnemonic::Eor, IMM, 2), // 0x49
    op(Mnemonic::Lsr, ACC, 2), // 0x4A
    UNKNOWN, // 0x4B
    op(Mnemonic::Jmp, ABS, 3), // 0x4C
    op(Mnemonic::Eor, ABS, 4), // 0x4D
    op(Mnemonic::Lsr, ABS, 6), // 0x4E
    UNKNOWN, // 0x4F
    op(Mnemonic::Bvc, REL, 2), // 0x50
    op(Mnemonic::Eor, INDY, 5), // 0x51
    UNKNOWN, // 0x52
    UNKNOWN, // 0x53
    UNKNOWN, // 0x54
    op(Mnemonic::Eor, ZPGX, 4), // 0x55
    op(Mnemonic::Lsr, ZPGX, 6), // 0x56
    UNKNOWN, // 0x57
    op(Mnemonic::Cli, IMPL, 2), // 0x58
    op(Mnemonic::Eor, ABSY, 4), // 0x59
    UNKNOWN, // 0x5A
    UNKNOWN, // 0x5B
    UNKNOWN, // 0x5C
    op(Mnemonic::Eor, ABSX, 4), // 0x5D
    op(Mnemonic::Lsr, ABSX, 7), // 0x5E
    UNKNOWN, // 0x5F
    op(Mnemonic::Rts, IMPL, 6), // 0x60
    op(Mnemonic::Adc, INDX, 6), // 0x61
    UNKNOWN, // 0x62
    UNKNOWN, // 0x63
    UNKNOWN, // 0x64
    op(Mnemonic::Adc, ZPG, 3), // 0x65
    op(Mnemonic::Ror, ZPG, 5), // 0x66
    UNKNOWN, // 0x67
    op(Mnemonic::Pla, IMPL, 4), // 0x68
    op(Mnemonic::Adc, IMM, 2), // 0x69
    op(Mnemonic::Ror, ACC, 2), // 0x6A
    UNKNOWN, // 0x6B
    op(Mnemonic::Jmp, IND, 5), // 0x6C
    op(Mnemonic::Adc, ABS, 4), // 0x6D
    op(Mnemonic::Ror, ABS, 6), // 0x6E
    UNKNOWN, // 0x6F
    op(Mnemonic::Bvs, REL, 2), // 0x70
    op(Mnemonic::Adc, INDY, 5), // 0x71
    UNKNOWN, // 0x72
    UNKNOWN, // 0x73
    UNKNOWN, // 0x74
    op(Mnemonic::Adc, ZPGX, 4), // 0x75
    op(Mnemonic::Ror, ZPGX, 6), // 0x76
    UNKNOWN, // 0x77
    op(Mnemonic::Sei, IMPL, 2), // 0x78
    op(Mnemonic::Adc, ABSY, 4), // 0x79
    UNKNOWN, // 0x7A
    UNKNOWN, // 0x7B
    UNKNOWN, // 0x7C
    op(Mnemonic::Adc, ABSX, 4), // 0x7D
    op(Mnemonic::Ror, ABSX, 7), // 0x7E
    UNKNOWN, // 0x7F
    UNKNOWN, // 0x80
    op(Mnemonic::Sta, INDX, 6), // 0x81
    UNKNOWN, // 0x82
    UNKNOWN, // 0x83
    op(Mnemonic::Sty, ZPG, 3), // 0x84
    op(Mnemonic::Sta, ZPG, 3), // 0x85
    op(Mnemonic::Stx, ZPG, 3), // 0x86
    UNKNOWN, // 0x87
    op(Mnemonic::Dey, IMPL, 2), // 0x88
    UNKNOWN, // 0x89
    op(Mnemonic::Txa, IMPL, 2), // 0x8A
    UNKNOWN, // 0x8B
    op(Mnemonic::Sty, ABS, 4), // 0x8C
    op(Mnemonic::Sta, ABS, 4), // 0x8D
    op(Mnemonic::Stx, ABS, 4), // 0x8E
    UNKNOWN, // 0x8F
    op(Mnemonic::Bcc, REL, 2), // 0x90
    op(Mnemonic::Sta, INDY, 6), // 0x91
    UNKNOWN, // 0x92
    UNKNOWN, // 0x93
    op(Mnemonic::Sty, ZPGX, 4), // 0x94
    op(Mnemonic::Sta, ZPGX, 4), // 0x95
    op(Mnemonic::Stx, ZPGY, 4), // 0x96
    UNKNOWN, // 0x97
    op(Mnemonic::Tya, IMPL, 2), // 0x98
    op(Mnemonic::Sta, ABSY, 5), // 0x99
    op(Mnemonic::Txs, IMPL, 2), // 0x9A
    UNKNOWN, // 0x9B
    UNKNOWN, // 0x9C
    op(Mnemonic::Sta, ABSX, 5), // 0x9D
    UNKNOWN, // 0x9E
    UNKNOWN, // 0x9F
    op(Mnemonic::Ldy, IMM, 2), // 0xA0
    op(Mnemonic::Lda, INDX, 6), // 0xA1
    op(Mnemonic::Ldx, IMM, 2), // 0xA2
    UNKNOWN, // 0xA3
    op(Mnemonic::Ldy, ZPG, 3), // 0xA4
    op(Mnemonic::Lda, ZPG, 3), // 0xA5
    op(Mnemonic::Ldx, ZPG, 3), // 0xA6
    UNKNOWN, // 0xA7
    op(Mnemonic::Tay, IMPL, 2), // 0xA8
    op(Mnemonic::Lda, IMM, 2), // 0xA9
    op(Mnemonic::Tax, IMPL, 2), // 0xAA
    UNKNOWN, // 0xAB
    op(Mnemonic::Ldy, ABS, 4), // 0xAC
    op(Mnemonic::Lda, ABS, 4), // 0xAD
    op(Mnemonic::Ldx, ABS, 4), // 0xAE
    UNKNOWN, // 0xAF
    op(Mnemonic::Bcs, REL, 2), // 0xB0
    op(Mnemonic::Lda, INDY, 5), // 0xB1
    UNKNOWN, // 0xB2
    UNKNOWN, // 0xB3
    op(Mnemonic::Ldy, ZPGX, 4), // 0xB4
    op(Mnemonic::Lda, ZPGX, 4), // 0xB5
    op(Mnemonic::Ldx, ZPGY, 4), // 0xB6
    UNKNOWN, // 0xB7
    op(Mnemonic::Clv, IMPL, 2), // 0xB8
    op(Mnemonic::Lda, ABSY, 4), // 0xB9
    op(Mnemonic::Tsx, IMPL, 2), // 0xBA
    UNKNOWN, // 0xBB
    op(Mnemonic::Ldy, ABSX, 4), // 0xBC
    op(Mnemonic::Lda, ABSX, 4), // 0xBD
    op(Mnemonic::Ldx, ABSY, 4), // 0xBE
    UNKNOWN, // 0xBF
    op(Mnemonic::Cpy, IMM, 2), // 0xC0
    op(Mnemonic::Cmp, INDX, 6), // 0xC1
    UNKNOWN, // 0xC2
    UNKNOWN, // 0xC3
    op(Mnemonic::Cpy, ZPG, 3), // 0xC4
    op(Mnemonic::Cmp, ZPG, 3), // 0xC5
    op(Mnemonic::Dec, ZPG, 5), // 0xC6
    UNKNOWN, // 0xC7
    op(Mnemonic::Iny, IMPL, 2), // 0xC8
    op(Mnemonic::Cmp, IMM, 2), // 0xC9
    op(Mnemonic::Dex, IMPL, 2), // 0xCA
    UNKNOWN, // 0xCB
    op(Mnemonic::Cpy, ABS, 4), // 0xCC
    op(Mnemonic::Cmp, ABS, 4), // 0xCD
    op(Mnemonic::Dec, ABS, 6), // 0xCE
    UNKNOWN, // 0xCF
    op(Mnemonic::Bne, REL, 2), // 0xD0
    op(Mnemonic::Cmp, INDY, 5), // 0xD1
    UNKNOWN, // 0xD2
    UNKNOWN, // 0xD3
    UNKNOWN, // 0xD4
    op(Mnemonic::Cmp, ZPGX, 4), // 0xD5
    op(Mnemonic::Dec, ZPGX, 6), // 0xD6
    UNKNOWN, // 0xD7
    op(Mnemonic::Cld, IMPL, 2), // 0xD8
    op(Mnemonic::Cmp, ABSY, 4), // 0xD9
    UNKNOWN, // 0xDA
    UNKNOWN, // 0xDB
    UNKNOWN, // 0xDC
    op(Mnemonic::Cmp, ABSX, 4), // 0xDD
    op(Mnemonic::Dec, ABSX, 7), // 0xDE
    UNKNOWN, // 0xDF
    op(Mnemonic::Cpx, IMM, 2), // 0xE0
    op(Mnemonic::Sbc, INDX, 6), // 0xE1
    UNKNOWN, // 0xE2
    UNKNOWN, // 0xE3
    op(Mnemonic::Cpx, ZPG, 3), // 0xE4
    op(Mnemonic::Sbc, ZPG, 3), // 0xE5
    op(Mnemonic::Inc, ZPG, 5), // 0xE6
    UNKNOWN, // 0xE7
    op(Mnemonic::Inx, IMPL, 2), // 0xE8
    op(Mnemonic::Sbc, IMM, 2), // 0xE9
    op(Mnemonic::Nop, IMPL, 2), // 0xEA
    UNKNOWN, // 0xEB
    op(Mnemonic::Cpx, ABS, 4), // 0xEC
    op(Mnemonic::Sbc, ABS, 4), // 0xED
    op(Mnemonic::Inc, ABS, 6), // 0xEE
    UNKNOWN, // 0xEF
    op(Mnemonic::Beq, REL, 2), // 0xF0
    op(Mnemonic::Sbc, INDY, 5), // 0xF1
    UNKNOWN, // 0xF2
    UNKNOWN, // 0xF3
    UNKNOWN, // 0xF4
    op(Mnemonic::Sbc, ZPGX, 4), // 0xF5
    op(Mnemonic::Inc, ZPGX, 6), // 0xF6
    UNKNOWN, // 0xF7
    op(Mnemonic::Sed, IMPL, 2), // 0xF8
    op(Mnemonic::Sbc, ABSY, 4), // 0xF9
    UNKNOWN, // 0xFA
    UNKNOWN, // 0xFB
    UNKNOWN, // 0xFC
    op(Mnemonic::Sbc, ABSX, 4), // 0xFD
    op(Mnemonic::Inc, ABSX, 7), // 0xFE
    UNKNOWN, // 0xFF
];

/// Maps a raw opcode byte to the mnemonic and addressing mode the controller
/// dispatches on.
///
/// Implement this to run the micro-sequencer against a different opcode map.
/// Anything the controller does not recognise falls back to a single-cycle
/// no-op.
pub trait Decoder {
    /// Decodes one opcode byte.
    fn decode(&self, opcode: u8) -> (Mnemonic, AddressingMode);
}

/// The documented NMOS 6502 opcode map, backed by [`OPCODE_TABLE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpcodeTable;

impl OpcodeTable {
    /// Full table entry for `opcode`.
    pub const fn info(&self, opcode: u8) -> OpcodeInfo {
        OPCODE_TABLE[opcode as usize]
    }
}

impl Decoder for OpcodeTable {
    fn decode(&self, opcode: u8) -> (Mnemonic, AddressingMode) {
        let info = self.info(opcode);
        (info.mnemonic, info.mode)
    }
}

impl<D: Decoder + ?Sized> Decoder for &D {
    fn decode(&self, opcode: u8) -> (Mnemonic, AddressingMode) {
        (**self).decode(opcode)
    }
}
