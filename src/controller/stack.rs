//! Stack and vector chains: JSR, BRK, PHA/PHP, PLA/PLP, RTI and RTS.
//!
//! The stack lives in page 0x01. Operand fetch already put `0x01:S` on the
//! address bus, so these states only move the low half. S steps through the
//! ALU in address mode, which leaves P alone.

use crate::alu::AluOp;
use crate::opcodes::Mnemonic;
use crate::pc_adder::PcAdderOp;
use crate::signals::{AbhSource, AblSource, ControlSignals, DataBusSource, PchSource, PclSource, StatusSource};

use super::{Instruction, State};

/// Write cycle pushing `src` and pointing the bus at the next free slot.
fn push_byte(s: &mut ControlSignals, src: DataBusSource) {
    s.write(src);
    s.step_stack(AluOp::Dec);
    s.address_low(AblSource::Alu);
}

pub(super) fn jsr_push_pch(s: &mut ControlSignals) -> State {
    push_byte(s, DataBusSource::Pch);
    State::JsrPushPcl
}

pub(super) fn jsr_push_pcl(s: &mut ControlSignals) -> State {
    s.write(DataBusSource::Pcl);
    s.step_stack(AluOp::Dec);
    s.address_from_pc();
    State::JsrFetchHigh
}

pub(super) fn jsr_fetch_high(s: &mut ControlSignals) -> State {
    s.dl_we = true;
    s.jump_to_latch_and_temp();
    State::FetchOpcode
}

pub(super) fn brk_push_pch(s: &mut ControlSignals) -> State {
    push_byte(s, DataBusSource::Pch);
    State::BrkPushPcl
}

pub(super) fn brk_push_pcl(s: &mut ControlSignals) -> State {
    push_byte(s, DataBusSource::Pcl);
    State::BrkPushStatus
}

/// Pushes P as it stands. P itself is left alone.
pub(super) fn brk_push_status(s: &mut ControlSignals) -> State {
    s.write(DataBusSource::P);
    s.step_stack(AluOp::Dec);
    s.address(AblSource::Fe, AbhSource::Ff);
    State::BrkVectorLow
}

pub(super) fn brk_vector_low(s: &mut ControlSignals) -> State {
    s.latch_temp();
    s.address_low(AblSource::Ff);
    State::BrkVectorHigh
}

pub(super) fn brk_vector_high(s: &mut ControlSignals) -> State {
    s.dl_we = true;
    s.jump_to_latch_and_temp();
    State::FetchOpcode
}

/// PHA / PHP.
pub(super) fn push(instr: &Instruction, s: &mut ControlSignals) -> State {
    let src = if instr.mnemonic == Mnemonic::Php {
        DataBusSource::P
    } else {
        DataBusSource::A
    };
    s.write(src);
    s.step_stack(AluOp::Dec);
    s.address_from_pc();
    State::FetchOpcode
}

/// PLA / PLP: pre-increment S, then read through fetch-data.
pub(super) fn pull(s: &mut ControlSignals) -> State {
    s.step_stack(AluOp::Inc);
    s.address_low(AblSource::Alu);
    State::FetchData
}

/// Dummy stack read while S is pre-incremented.
pub(super) fn increment_stack(next: State, s: &mut ControlSignals) -> State {
    s.step_stack(AluOp::Inc);
    s.address_low(AblSource::Alu);
    next
}

pub(super) fn rti_pull_status(s: &mut ControlSignals) -> State {
    s.dl_we = true;
    s.p_src = StatusSource::Latch;
    s.step_stack(AluOp::Inc);
    s.address_low(AblSource::Alu);
    State::RtiPullPcl
}

pub(super) fn pull_pcl(next: State, s: &mut ControlSignals) -> State {
    s.dl_we = true;
    s.pcl_src = PclSource::Latch;
    s.pcl_we = true;
    s.step_stack(AluOp::Inc);
    s.address_low(AblSource::Alu);
    next
}

pub(super) fn rti_pull_pch(s: &mut ControlSignals) -> State {
    s.dl_we = true;
    s.pch_src = PchSource::Latch;
    s.pch_we = true;
    s.address(AblSource::Pcl, AbhSource::Latch);
    State::FetchOpcode
}

pub(super) fn rts_pull_pch(s: &mut ControlSignals) -> State {
    s.dl_we = true;
    s.pch_src = PchSource::Latch;
    s.pch_we = true;
    s.address_from_pc();
    State::RtsIncrementPc
}

/// Steps past the last byte of the JSR.
pub(super) fn rts_increment_pc(s: &mut ControlSignals) -> State {
    s.pc_op = PcAdderOp::Inc;
    s.pcl_src = PclSource::Adder;
    s.pcl_we = true;
    s.pch_src = PchSource::Adder;
    s.pch_we = true;
    s.address_from_pc();
    State::FetchOpcode
}
