//! # Controller
//!
//! The micro-sequencer. Each clock it looks at its current micro-state, the
//! instruction register and the status flags, builds a complete
//! [`ControlSignals`] vector for the datapath and moves to the next state.
//!
//! Only two things persist across clocks: the micro-state and the decoded
//! instruction. The decoded instruction is refreshed in operand fetch (T1),
//! which is the first clock in which the new opcode is sitting in IR.
//!
//! Like the real part, execution is pipelined: the last step of a short
//! instruction (the ALU operation of `LDA`, `ADC`, `TAX`, ...) happens while
//! the next opcode is being fetched.
//!
//! ## Handler families
//!
//! - **fetch**: opcode fetch (T0) and operand fetch (T1)
//! - **addressing**: absolute, indexed, indirect, zero-page-indexed and branch chains
//! - **data**: fetch-data, modify-data and write-data finish states
//! - **stack**: JSR, BRK, push, pull, RTI and RTS chains
//! - **execute**: the opcode-to-ALU tables used by T0 and modify-data

mod addressing;
mod data;
mod execute;
mod fetch;
mod stack;

use tracing::trace;

use crate::addressing::AddressingMode;
use crate::flags::Flags;
use crate::opcodes::{Decoder, Mnemonic, OpcodeTable};
use crate::signals::ControlSignals;

/// Controller micro-state. One state is one clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// T0: latch the opcode, run the previous instruction's execute stage.
    #[default]
    FetchOpcode,
    /// T1: decode and fetch the first operand byte.
    FetchOperand,

    // Generic finish states
    FetchData,
    ModifyData,
    WriteData,

    // Absolute, JMP and JSR
    Absolute,
    JsrPushPch,
    JsrPushPcl,
    JsrFetchHigh,

    // Indexed and indirect
    AbsoluteIndexed,
    PageCrossFixup,
    IndirectHigh,
    IndirectTargetLow,
    IndirectTargetHigh,
    IndexedIndirectAdd,
    IndexedIndirectLow,
    IndexedIndirectHigh,
    IndirectIndexedLow,
    IndirectIndexedHigh,
    ZeroPageIndexed,

    // Relative
    BranchTaken,
    BranchPageCross,

    // BRK
    BrkPushPch,
    BrkPushPcl,
    BrkPushStatus,
    BrkVectorLow,
    BrkVectorHigh,

    // Push and pull
    Push,
    Pull,

    // RTI
    RtiIncrementStack,
    RtiPullStatus,
    RtiPullPcl,
    RtiPullPch,

    // RTS
    RtsIncrementStack,
    RtsPullPcl,
    RtsPullPch,
    RtsIncrementPc,
}

/// The instruction currently being sequenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u8,
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
}

impl Default for Instruction {
    fn default() -> Self {
        Self {
            opcode: 0x00,
            mnemonic: Mnemonic::Unknown,
            mode: AddressingMode::Implicit,
        }
    }
}

impl Instruction {
    /// Shift, rotate, increment or decrement of a memory operand.
    pub fn is_memory_read_modify_write(&self) -> bool {
        self.mnemonic.is_read_modify_write() && self.mode != AddressingMode::Accumulator
    }
}

/// The micro-sequencer.
///
/// # Examples
///
/// ```
/// use mc6502::{Controller, Flags, State};
///
/// let mut controller = Controller::new();
/// assert_eq!(controller.state(), State::FetchOpcode);
///
/// let signals = controller.tick(0x00, Flags::default());
/// assert!(signals.ir_we);
/// assert_eq!(controller.state(), State::FetchOperand);
/// ```
#[derive(Debug, Clone)]
pub struct Controller<D: Decoder = OpcodeTable> {
    decoder: D,
    state: State,
    instruction: Instruction,
}

impl Controller<OpcodeTable> {
    /// Creates a controller using the documented NMOS opcode map.
    pub fn new() -> Self {
        Self::with_decoder(OpcodeTable)
    }
}

impl Default for Controller<OpcodeTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Decoder> Controller<D> {
    /// Creates a controller in opcode fetch using `decoder`.
    pub fn with_decoder(decoder: D) -> Self {
        Self {
            decoder,
            state: State::FetchOpcode,
            instruction: Instruction::default(),
        }
    }

    /// Micro-state the next clock will execute.
    pub fn state(&self) -> State {
        self.state
    }

    /// Most recently decoded instruction.
    pub fn instruction(&self) -> Instruction {
        self.instruction
    }

    /// The opcode decoder.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Forces the micro-state. Used to start sequencing mid-instruction in
    /// fixtures.
    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }

    /// Runs one clock: returns the control signals for the current state and
    /// advances to the next one.
    ///
    /// `ir` is the instruction register as it stands before this clock.
    /// `flags` must carry PCC for this clock.
    pub fn tick(&mut self, ir: u8, flags: Flags) -> ControlSignals {
        let mut s = ControlSignals::default();
        let instr = self.instruction;

        self.state = match self.state {
            State::FetchOpcode => fetch::fetch_opcode(&instr, &mut s),
            State::FetchOperand => {
                let (mnemonic, mode) = self.decoder.decode(ir);
                self.instruction = Instruction {
                    opcode: ir,
                    mnemonic,
                    mode,
                };
                trace!(opcode = ir, %mnemonic, %mode, "decode");
                fetch::fetch_operand(&self.instruction, flags, &mut s)
            }

            State::FetchData => data::fetch_data(&instr, &mut s),
            State::ModifyData => data::modify_data(&instr, &mut s),
            State::WriteData => data::write_data(&instr, &mut s),

            State::Absolute => addressing::absolute(&instr, &mut s),
            State::JsrPushPch => stack::jsr_push_pch(&mut s),
            State::JsrPushPcl => stack::jsr_push_pcl(&mut s),
            State::JsrFetchHigh => stack::jsr_fetch_high(&mut s),

            State::AbsoluteIndexed => addressing::absolute_indexed(&instr, &mut s),
            State::PageCrossFixup => addressing::page_cross_fixup(&instr, flags, &mut s),
            State::IndirectHigh => addressing::indirect_high(&mut s),
            State::IndirectTargetLow => addressing::indirect_target_low(&mut s),
            State::IndirectTargetHigh => addressing::indirect_target_high(&mut s),
            State::IndexedIndirectAdd => addressing::indexed_indirect_add(&mut s),
            State::IndexedIndirectLow => addressing::indexed_indirect_low(&mut s),
            State::IndexedIndirectHigh => addressing::indexed_indirect_high(&instr, &mut s),
            State::IndirectIndexedLow => addressing::indirect_indexed_low(&mut s),
            State::IndirectIndexedHigh => addressing::indirect_indexed_high(&mut s),
            State::ZeroPageIndexed => addressing::zero_page_indexed(&instr, &mut s),

            State::BranchTaken => addressing::branch_taken(flags, &mut s),
            State::BranchPageCross => State::FetchOpcode,

            State::BrkPushPch => stack::brk_push_pch(&mut s),
            State::BrkPushPcl => stack::brk_push_pcl(&mut s),
            State::BrkPushStatus => stack::brk_push_status(&mut s),
            State::BrkVectorLow => stack::brk_vector_low(&mut s),
            State::BrkVectorHigh => stack::brk_vector_high(&mut s),

            State::Push => stack::push(&instr, &mut s),
            State::Pull => stack::pull(&mut s),

            State::RtiIncrementStack => stack::increment_stack(State::RtiPullStatus, &mut s),
            State::RtiPullStatus => stack::rti_pull_status(&mut s),
            State::RtiPullPcl => stack::pull_pcl(State::RtiPullPch, &mut s),
            State::RtiPullPch => stack::rti_pull_pch(&mut s),

            State::RtsIncrementStack => stack::increment_stack(State::RtsPullPcl, &mut s),
            State::RtsPullPcl => stack::pull_pcl(State::RtsPullPch, &mut s),
            State::RtsPullPch => stack::rts_pull_pch(&mut s),
            State::RtsIncrementPc => stack::rts_increment_pc(&mut s),
        };
        s
    }
}
