//! Finish states shared by every addressing chain.

use crate::alu::AluOp;
use crate::opcodes::Mnemonic;
use crate::signals::{AluInputA, AluInputB, ControlSignals, DataBusSource, RegisterSource, StatusSource};

use super::execute;
use super::{Instruction, State};

/// Reads the operand into T. Read-modify-write keeps the address for the
/// two writes that follow.
pub(super) fn fetch_data(instr: &Instruction, s: &mut ControlSignals) -> State {
    s.latch_temp();
    if instr.is_memory_read_modify_write() {
        State::ModifyData
    } else {
        s.address_from_pc();
        State::FetchOpcode
    }
}

/// Writes the unmodified value back while the ALU works on T.
pub(super) fn modify_data(instr: &Instruction, s: &mut ControlSignals) -> State {
    s.write(DataBusSource::T);
    s.alu_a = AluInputA::T;
    s.alu_b = AluInputB::Zero;
    s.alu_op = execute::modify_op(instr.mnemonic).unwrap_or(AluOp::Tha);
    s.reg_src = RegisterSource::Alu;
    s.t_we = true;
    s.p_src = StatusSource::Alu;
    State::WriteData
}

/// Commits a store register or the modified T.
pub(super) fn write_data(instr: &Instruction, s: &mut ControlSignals) -> State {
    let src = match instr.mnemonic {
        Mnemonic::Sta => DataBusSource::A,
        Mnemonic::Stx => DataBusSource::X,
        Mnemonic::Sty => DataBusSource::Y,
        _ => DataBusSource::T,
    };
    s.write(src);
    s.address_from_pc();
    State::FetchOpcode
}
