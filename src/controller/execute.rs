//! Opcode-to-ALU tables.
//!
//! The execute stage of most short instructions is one ALU pass whose result
//! is written back into a register. It happens during the next opcode fetch.

use crate::addressing::AddressingMode;
use crate::alu::AluOp;
use crate::flags::{CARRY, DECIMAL, INTERRUPT, OVERFLOW};
use crate::opcodes::Mnemonic;
use crate::signals::{AluInputA, AluInputB, StatusSource};

use super::Instruction;

/// Register receiving an execute-stage result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Destination {
    A,
    X,
    Y,
    S,
}

/// Source, operand, destination and operation of an execute stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Execute {
    pub a: AluInputA,
    pub b: AluInputB,
    pub dst: Destination,
    pub op: AluOp,
}

const fn exec(a: AluInputA, b: AluInputB, dst: Destination, op: AluOp) -> Option<Execute> {
    Some(Execute { a, b, dst, op })
}

/// Execute stage run in the opcode fetch following `instr`, if any.
pub(super) fn lookup(instr: &Instruction) -> Option<Execute> {
    use AluInputA as In;
    use AluInputB::{Temp, Zero};
    use Destination as Out;

    match instr.mnemonic {
        Mnemonic::Adc => exec(In::A, Temp, Out::A, AluOp::Adc),
        Mnemonic::Sbc => exec(In::A, Temp, Out::A, AluOp::Sbc),
        Mnemonic::And => exec(In::A, Temp, Out::A, AluOp::And),
        Mnemonic::Ora => exec(In::A, Temp, Out::A, AluOp::Ora),
        Mnemonic::Eor => exec(In::A, Temp, Out::A, AluOp::Eor),
        Mnemonic::Bit => exec(In::A, Temp, Out::A, AluOp::Bit),
        Mnemonic::Cmp => exec(In::A, Temp, Out::A, AluOp::Cmp),
        Mnemonic::Cpx => exec(In::X, Temp, Out::X, AluOp::Cmp),
        Mnemonic::Cpy => exec(In::Y, Temp, Out::Y, AluOp::Cmp),

        Mnemonic::Asl | Mnemonic::Lsr | Mnemonic::Rol | Mnemonic::Ror
            if instr.mode == AddressingMode::Accumulator =>
        {
            exec(In::A, Zero, Out::A, modify_op(instr.mnemonic)?)
        }

        Mnemonic::Inx => exec(In::X, Zero, Out::X, AluOp::Inc),
        Mnemonic::Dex => exec(In::X, Zero, Out::X, AluOp::Dec),
        Mnemonic::Iny => exec(In::Y, Zero, Out::Y, AluOp::Inc),
        Mnemonic::Dey => exec(In::Y, Zero, Out::Y, AluOp::Dec),

        // Loads and pulls set N/Z by OR-ing with zero
        Mnemonic::Lda | Mnemonic::Pla => exec(In::T, Zero, Out::A, AluOp::Ora),
        Mnemonic::Ldx => exec(In::T, Zero, Out::X, AluOp::Ora),
        Mnemonic::Ldy => exec(In::T, Zero, Out::Y, AluOp::Ora),

        Mnemonic::Tax => exec(In::A, Zero, Out::X, AluOp::Ora),
        Mnemonic::Tay => exec(In::A, Zero, Out::Y, AluOp::Ora),
        Mnemonic::Txa => exec(In::X, Zero, Out::A, AluOp::Ora),
        Mnemonic::Tya => exec(In::Y, Zero, Out::A, AluOp::Ora),
        Mnemonic::Tsx => exec(In::S, Zero, Out::X, AluOp::Ora),
        Mnemonic::Txs => exec(In::X, Zero, Out::S, AluOp::Tha),

        _ => None,
    }
}

/// Status directive for flag instructions and PLP.
pub(super) fn status_directive(mnemonic: Mnemonic) -> Option<StatusSource> {
    match mnemonic {
        Mnemonic::Clc => Some(StatusSource::Clear(CARRY)),
        Mnemonic::Sec => Some(StatusSource::Set(CARRY)),
        Mnemonic::Cli => Some(StatusSource::Clear(INTERRUPT)),
        Mnemonic::Sei => Some(StatusSource::Set(INTERRUPT)),
        Mnemonic::Cld => Some(StatusSource::Clear(DECIMAL)),
        Mnemonic::Sed => Some(StatusSource::Set(DECIMAL)),
        Mnemonic::Clv => Some(StatusSource::Clear(OVERFLOW)),
        Mnemonic::Plp => Some(StatusSource::Latch),
        _ => None,
    }
}

/// ALU operation for shift, rotate, increment and decrement.
pub(super) fn modify_op(mnemonic: Mnemonic) -> Option<AluOp> {
    match mnemonic {
        Mnemonic::Asl => Some(AluOp::Asl),
        Mnemonic::Lsr => Some(AluOp::Lsr),
        Mnemonic::Rol => Some(AluOp::Rol),
        Mnemonic::Ror => Some(AluOp::Ror),
        Mnemonic::Inc => Some(AluOp::Inc),
        Mnemonic::Dec => Some(AluOp::Dec),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instr(mnemonic: Mnemonic, mode: AddressingMode) -> Instruction {
        Instruction {
            opcode: 0,
            mnemonic,
            mode,
        }
    }

    #[test]
    fn test_shift_executes_only_in_accumulator_mode() {
        assert!(lookup(&instr(Mnemonic::Asl, AddressingMode::Accumulator)).is_some());
        assert!(lookup(&instr(Mnemonic::Asl, AddressingMode::ZeroPage)).is_none());
        assert!(lookup(&instr(Mnemonic::Inc, AddressingMode::Absolute)).is_none());
    }

    #[test]
    fn test_compare_writes_back_its_own_register() {
        let cpx = lookup(&instr(Mnemonic::Cpx, AddressingMode::Immediate)).unwrap();
        assert_eq!((cpx.a, cpx.dst, cpx.op), (AluInputA::X, Destination::X, AluOp::Cmp));
    }

    #[test]
    fn test_stores_and_jumps_have_no_execute_stage() {
        for mnemonic in [Mnemonic::Sta, Mnemonic::Jmp, Mnemonic::Nop, Mnemonic::Unknown] {
            assert!(lookup(&instr(mnemonic, AddressingMode::Absolute)).is_none());
        }
    }

    #[test]
    fn test_status_directives() {
        assert_eq!(status_directive(Mnemonic::Sed), Some(StatusSource::Set(DECIMAL)));
        assert_eq!(status_directive(Mnemonic::Clv), Some(StatusSource::Clear(OVERFLOW)));
        assert_eq!(status_directive(Mnemonic::Plp), Some(StatusSource::Latch));
        assert_eq!(status_directive(Mnemonic::Php), None);
    }
}
