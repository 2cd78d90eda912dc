//! Opcode fetch (T0) and operand fetch (T1).

use crate::addressing::AddressingMode;
use crate::flags::Flags;
use crate::opcodes::Mnemonic;
use crate::pc_adder::PcAdderOp;
use crate::signals::{AbhSource, AblSource, ControlSignals, PchSource, PclSource, RegisterSource, StatusSource};

use super::execute::{self, Destination};
use super::{Instruction, State};

/// Advances PC through the PC adder with `op`.
fn drive_pc(s: &mut ControlSignals, op: PcAdderOp) {
    s.pc_op = op;
    s.pcl_src = PclSource::Adder;
    s.pcl_we = true;
    s.pch_src = PchSource::Adder;
    s.pch_we = true;
}

/// T0. `prev` is the instruction whose execute stage overlaps this fetch.
pub(super) fn fetch_opcode(prev: &Instruction, s: &mut ControlSignals) -> State {
    s.ir_we = true;
    drive_pc(s, PcAdderOp::Inc);

    if let Some(exec) = execute::lookup(prev) {
        s.alu_a = exec.a;
        s.alu_b = exec.b;
        s.alu_op = exec.op;
        s.reg_src = RegisterSource::Alu;
        match exec.dst {
            Destination::A => s.a_we = true,
            Destination::X => s.x_we = true,
            Destination::Y => s.y_we = true,
            Destination::S => s.s_we = true,
        }
        // Tha (TXS) returns the flags unchanged
        s.p_src = StatusSource::Alu;
    } else if let Some(directive) = execute::status_directive(prev.mnemonic) {
        s.p_src = directive;
    }

    s.address_from_pc();
    State::FetchOperand
}

/// T1. Decoding already happened; dispatch on the decoded instruction.
pub(super) fn fetch_operand(instr: &Instruction, flags: Flags, s: &mut ControlSignals) -> State {
    let taken = instr.mnemonic.branch_taken(flags);

    let pc_op = match instr.mode {
        AddressingMode::Implicit | AddressingMode::Accumulator => PcAdderOp::Nop,
        AddressingMode::Relative if taken => PcAdderOp::Add,
        _ => PcAdderOp::Inc,
    };
    drive_pc(s, pc_op);
    s.latch_temp();

    if instr.mode.is_zero_page() {
        s.address(AblSource::Latch, AbhSource::Zero);
    } else if instr.mnemonic.uses_stack() {
        s.address(AblSource::S, AbhSource::One);
    } else {
        s.address_from_pc();
    }

    match instr.mode {
        AddressingMode::Accumulator | AddressingMode::Immediate => State::FetchOpcode,
        AddressingMode::Absolute => State::Absolute,
        AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => State::AbsoluteIndexed,
        AddressingMode::Indirect => State::IndirectHigh,
        AddressingMode::IndirectX => State::IndexedIndirectAdd,
        AddressingMode::IndirectY => State::IndirectIndexedLow,
        AddressingMode::ZeroPage if instr.mnemonic.is_store() => State::WriteData,
        AddressingMode::ZeroPage => State::FetchData,
        AddressingMode::ZeroPageX | AddressingMode::ZeroPageY => State::ZeroPageIndexed,
        AddressingMode::Relative if taken => State::BranchTaken,
        AddressingMode::Relative => State::FetchOpcode,
        AddressingMode::Implicit => match instr.mnemonic {
            Mnemonic::Brk => State::BrkPushPch,
            Mnemonic::Pha | Mnemonic::Php => State::Push,
            Mnemonic::Pla | Mnemonic::Plp => State::Pull,
            Mnemonic::Rti => State::RtiIncrementStack,
            Mnemonic::Rts => State::RtsIncrementStack,
            _ => State::FetchOpcode,
        },
    }
}
