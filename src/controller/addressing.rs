//! Address-computation chains: absolute, indexed, indirect, zero-page indexed
//! and relative.
//!
//! Index additions run the ALU in address mode. A carry out of the low byte
//! shows up as PCC on the next clock, which is how [`page_cross_fixup`]
//! decides whether the high byte needs the extra increment.

use crate::addressing::AddressingMode;
use crate::alu::AluOp;
use crate::flags::Flags;
use crate::opcodes::Mnemonic;
use crate::pc_adder::PcAdderOp;
use crate::signals::{
    AbhSource, AblSource, AluInputA, AluInputB, ControlSignals, PchSource, PclSource, RegisterSource,
};

use super::{Instruction, State};

fn index_register(mode: AddressingMode) -> AluInputA {
    match mode {
        AddressingMode::AbsoluteY | AddressingMode::ZeroPageY | AddressingMode::IndirectY => AluInputA::Y,
        _ => AluInputA::X,
    }
}

/// Where an instruction goes once its effective address is on the bus.
fn operand_state(instr: &Instruction) -> State {
    if instr.mnemonic.is_store() {
        State::WriteData
    } else {
        State::FetchData
    }
}

fn increment_pc(s: &mut ControlSignals) {
    s.pc_op = PcAdderOp::Inc;
    s.pcl_src = PclSource::Adder;
    s.pcl_we = true;
    s.pch_src = PchSource::Adder;
    s.pch_we = true;
}

/// Second operand byte of an absolute instruction.
pub(super) fn absolute(instr: &Instruction, s: &mut ControlSignals) -> State {
    match instr.mnemonic {
        // Dummy stack read; the target high byte is fetched after the pushes
        Mnemonic::Jsr => {
            s.dl_we = true;
            State::JsrPushPch
        }
        Mnemonic::Jmp => {
            s.dl_we = true;
            s.jump_to_latch_and_temp();
            State::FetchOpcode
        }
        _ => {
            increment_pc(s);
            s.dl_we = true;
            s.address(AblSource::T, AbhSource::Latch);
            operand_state(instr)
        }
    }
}

/// High operand byte of `abs,X` / `abs,Y`; the index is added to the low byte.
pub(super) fn absolute_indexed(instr: &Instruction, s: &mut ControlSignals) -> State {
    increment_pc(s);
    s.latch_temp();
    s.address_add(index_register(instr.mode), AluInputB::Temp, AluOp::Adc);
    s.address(AblSource::Alu, AbhSource::Latch);
    State::PageCrossFixup
}

/// Always spent by indexed modes. Bumps the address high byte when the index
/// addition carried; loads that did not cross finish here.
pub(super) fn page_cross_fixup(instr: &Instruction, flags: Flags, s: &mut ControlSignals) -> State {
    // T holds the base high byte until the write-back at the end of this clock
    s.latch_temp();
    if flags.pcc {
        s.address_add(AluInputA::T, AluInputB::Zero, AluOp::Inc);
        s.address_high(AbhSource::Alu);
    }

    if instr.is_memory_read_modify_write() {
        State::FetchData
    } else if instr.mnemonic.is_store() {
        State::WriteData
    } else if flags.pcc {
        State::FetchData
    } else {
        s.address_from_pc();
        State::FetchOpcode
    }
}

/// `JMP (ind)`: pointer high byte.
pub(super) fn indirect_high(s: &mut ControlSignals) -> State {
    increment_pc(s);
    s.dl_we = true;
    s.address(AblSource::T, AbhSource::Latch);
    State::IndirectTargetLow
}

/// Target low byte. The pointer increment wraps within its page.
pub(super) fn indirect_target_low(s: &mut ControlSignals) -> State {
    s.address_add(AluInputA::T, AluInputB::Zero, AluOp::Inc);
    s.latch_temp();
    s.address_low(AblSource::Alu);
    State::IndirectTargetHigh
}

pub(super) fn indirect_target_high(s: &mut ControlSignals) -> State {
    s.dl_we = true;
    s.jump_to_latch_and_temp();
    State::FetchOpcode
}

/// `(zp,X)`: dummy read of the base while X is added, wrapping in page 0.
pub(super) fn indexed_indirect_add(s: &mut ControlSignals) -> State {
    s.address_add(AluInputA::X, AluInputB::Temp, AluOp::Adc);
    s.reg_src = RegisterSource::Alu;
    s.t_we = true;
    s.address_low(AblSource::Alu);
    State::IndexedIndirectLow
}

pub(super) fn indexed_indirect_low(s: &mut ControlSignals) -> State {
    s.address_add(AluInputA::T, AluInputB::Zero, AluOp::Inc);
    s.latch_temp();
    s.address_low(AblSource::Alu);
    State::IndexedIndirectHigh
}

pub(super) fn indexed_indirect_high(instr: &Instruction, s: &mut ControlSignals) -> State {
    s.dl_we = true;
    s.address(AblSource::T, AbhSource::Latch);
    operand_state(instr)
}

/// `(zp),Y`: pointer low byte.
pub(super) fn indirect_indexed_low(s: &mut ControlSignals) -> State {
    s.address_add(AluInputA::T, AluInputB::Zero, AluOp::Inc);
    s.latch_temp();
    s.address_low(AblSource::Alu);
    State::IndirectIndexedHigh
}

/// Pointer high byte; Y is added to the low byte.
pub(super) fn indirect_indexed_high(s: &mut ControlSignals) -> State {
    s.address_add(AluInputA::Y, AluInputB::Temp, AluOp::Adc);
    s.latch_temp();
    s.address(AblSource::Alu, AbhSource::Latch);
    State::PageCrossFixup
}

/// `zp,X` / `zp,Y`: dummy read of the base while the index is added.
pub(super) fn zero_page_indexed(instr: &Instruction, s: &mut ControlSignals) -> State {
    s.address_add(index_register(instr.mode), AluInputB::Temp, AluOp::Adc);
    s.address_low(AblSource::Alu);
    operand_state(instr)
}

/// Taken branch. PCL already holds the target low byte; apply the deferred
/// carry and spend one more clock if it was non-zero.
pub(super) fn branch_taken(flags: Flags, s: &mut ControlSignals) -> State {
    s.pc_op = PcAdderOp::CarryAdd;
    s.pcl_src = PclSource::Adder;
    s.pcl_we = true;
    s.pch_src = PchSource::Adder;
    s.pch_we = true;
    s.address_from_pc();

    if flags.pcc {
        State::BranchPageCross
    } else {
        State::FetchOpcode
    }
}
