//! # Control Signals
//!
//! The controller's output for one clock: every multiplexer select and write
//! enable the datapath needs. A fresh [`ControlSignals`] value is built each
//! clock starting from the inert default (read cycle, nothing written, ALU
//! passing A through, status held), so nothing carries over between clocks.

use std::fmt;

use crate::alu::AluOp;
use crate::pc_adder::PcAdderOp;

/// Bus direction for the current clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadWrite {
    /// The caller supplies the byte at the presented address.
    #[default]
    Read,
    /// The caller stores the output byte at the presented address.
    Write,
}

/// What drives the internal data bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataBusSource {
    /// The byte read from storage this clock.
    #[default]
    Memory,
    A,
    X,
    Y,
    /// Temp register.
    T,
    /// Status register.
    P,
    Pcl,
    Pch,
}

/// Input selected for PCL when `pcl_we` is asserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PclSource {
    /// Data latch.
    Latch,
    /// Temp register.
    Temp,
    /// PC adder output.
    #[default]
    Adder,
}

/// Input selected for PCH when `pch_we` is asserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PchSource {
    /// Data latch.
    Latch,
    /// PC adder output.
    #[default]
    Adder,
}

/// ALU operand A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AluInputA {
    #[default]
    Zero,
    A,
    X,
    Y,
    S,
    T,
}

/// ALU operand B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AluInputB {
    #[default]
    Zero,
    /// Data latch.
    Latch,
    /// Temp register.
    Temp,
}

/// Shared input for the A, X, Y, S and T write ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterSource {
    /// Data latch.
    #[default]
    Latch,
    /// ALU result.
    Alu,
}

/// Status register update for this clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusSource {
    /// Keep P.
    #[default]
    Hold,
    /// P takes the data latch (PLP, RTI).
    Latch,
    /// P |= mask.
    Set(u8),
    /// P &= !mask.
    Clear(u8),
    /// P takes the flags produced by the ALU.
    Alu,
}

/// Input for the low address-bus half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AblSource {
    /// Data latch.
    Latch,
    /// Stack pointer, after this clock's write-back.
    S,
    /// Temp register.
    T,
    /// Program counter low byte.
    #[default]
    Pcl,
    /// ALU result.
    Alu,
    /// Hard-wired 0xFE (low half of the break vector).
    Fe,
    /// Hard-wired 0xFF.
    Ff,
}

/// Input for the high address-bus half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbhSource {
    /// Data latch.
    Latch,
    /// Program counter high byte.
    #[default]
    Pch,
    /// ALU result.
    Alu,
    /// Hard-wired 0x00 (zero page).
    Zero,
    /// Hard-wired 0x01 (stack page).
    One,
    /// Hard-wired 0xFF (vector page).
    Ff,
}

/// Complete control-signal vector for one clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlSignals {
    pub rw: ReadWrite,
    pub db_src: DataBusSource,
    /// Data latch write enable.
    pub dl_we: bool,
    /// Instruction register write enable.
    pub ir_we: bool,

    pub pc_op: PcAdderOp,
    pub pcl_src: PclSource,
    pub pcl_we: bool,
    pub pch_src: PchSource,
    pub pch_we: bool,

    pub alu_a: AluInputA,
    pub alu_b: AluInputB,
    pub alu_op: AluOp,
    /// Run the ALU as an address adder: carry-in and decimal mode are
    /// ignored, and the carry out is latched as the address carry.
    pub alu_address: bool,

    pub reg_src: RegisterSource,
    pub a_we: bool,
    pub x_we: bool,
    pub y_we: bool,
    pub s_we: bool,
    pub t_we: bool,

    pub p_src: StatusSource,

    pub abl_src: AblSource,
    pub abl_we: bool,
    pub abh_src: AbhSource,
    pub abh_we: bool,
}

impl ControlSignals {
    /// True when this clock stores the output byte.
    pub fn is_write(&self) -> bool {
        self.rw == ReadWrite::Write
    }

    /// Drives the address bus from the program counter.
    pub(crate) fn address_from_pc(&mut self) {
        self.address(AblSource::Pcl, AbhSource::Pch);
    }

    pub(crate) fn address(&mut self, low: AblSource, high: AbhSource) {
        self.abl_src = low;
        self.abl_we = true;
        self.abh_src = high;
        self.abh_we = true;
    }

    pub(crate) fn address_low(&mut self, low: AblSource) {
        self.abl_src = low;
        self.abl_we = true;
    }

    pub(crate) fn address_high(&mut self, high: AbhSource) {
        self.abh_src = high;
        self.abh_we = true;
    }

    /// Latches the fetched byte into T.
    pub(crate) fn latch_temp(&mut self) {
        self.dl_we = true;
        self.reg_src = RegisterSource::Latch;
        self.t_we = true;
    }

    /// Address-mode ALU operation with no register write-back.
    pub(crate) fn address_add(&mut self, a: AluInputA, b: AluInputB, op: AluOp) {
        self.alu_a = a;
        self.alu_b = b;
        self.alu_op = op;
        self.alu_address = true;
    }

    /// Steps S by one with `op` (`Inc` or `Dec`) and writes it back.
    pub(crate) fn step_stack(&mut self, op: AluOp) {
        self.address_add(AluInputA::S, AluInputB::Zero, op);
        self.reg_src = RegisterSource::Alu;
        self.s_we = true;
    }

    /// Write cycle putting `src` on the data bus.
    pub(crate) fn write(&mut self, src: DataBusSource) {
        self.rw = ReadWrite::Write;
        self.db_src = src;
    }

    /// Loads PC from the data latch (high) and T (low).
    pub(crate) fn jump_to_latch_and_temp(&mut self) {
        self.pcl_src = PclSource::Temp;
        self.pcl_we = true;
        self.pch_src = PchSource::Latch;
        self.pch_we = true;
        self.address(AblSource::T, AbhSource::Latch);
    }
}

impl fmt::Display for ControlSignals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rw {
            ReadWrite::Read => f.write_str("R")?,
            ReadWrite::Write => write!(f, "W db={:?}", self.db_src)?,
        }
        if self.dl_we {
            f.write_str(" dl")?;
        }
        if self.ir_we {
            f.write_str(" ir")?;
        }
        if self.pc_op != PcAdderOp::Nop {
            write!(f, " pc={:?}", self.pc_op)?;
        }
        if self.pcl_we {
            write!(f, " pcl<{:?}", self.pcl_src)?;
        }
        if self.pch_we {
            write!(f, " pch<{:?}", self.pch_src)?;
        }
        if self.alu_op != AluOp::Tha || self.alu_a != AluInputA::Zero {
            write!(
                f,
                " alu={:?}({:?},{:?}){}",
                self.alu_op,
                self.alu_a,
                self.alu_b,
                if self.alu_address { "@" } else { "" }
            )?;
        }
        let writes = [
            (self.a_we, "A"),
            (self.x_we, "X"),
            (self.y_we, "Y"),
            (self.s_we, "S"),
            (self.t_we, "T"),
        ];
        for (enabled, name) in writes {
            if enabled {
                write!(f, " {}<{:?}", name, self.reg_src)?;
            }
        }
        match self.p_src {
            StatusSource::Hold => {}
            StatusSource::Set(mask) => write!(f, " p|={:02X}", mask)?,
            StatusSource::Clear(mask) => write!(f, " p&=!{:02X}", mask)?,
            other => write!(f, " p<{:?}", other)?,
        }
        if self.abl_we {
            write!(f, " abl<{:?}", self.abl_src)?;
        }
        if self.abh_we {
            write!(f, " abh<{:?}", self.abh_src)?;
        }
        Ok(())
    }
}
