//! # Datapath
//!
//! The register file and the bus network between the registers, the ALU and
//! the PC adder. It does nothing on its own: every clock, the control
//! signals say which source drives each bus and which cells latch.
//!
//! ## Clock order
//!
//! 1. The data bus takes its source (storage input or a register).
//! 2. DL and IR latch from it when enabled.
//! 3. The PC adder runs; PCL/PCH latch their selected inputs.
//! 4. The ALU runs on its selected operands.
//! 5. A, X, Y, S and T latch the data latch or the ALU result.
//! 6. P is held, loaded, masked or replaced with the ALU flags.
//! 7. The address bus halves latch their selected inputs.
//!
//! The returned address is the bus value from *before* step 7 on a write
//! cycle, so a write lands where the previous clock pointed, and the new value
//! on a read cycle.

use std::fmt;

use crate::alu;
use crate::flags::Flags;
use crate::pc_adder::PcAdder;
use crate::register::StorageCell;
use crate::signals::{
    AbhSource, AblSource, AluInputA, AluInputB, ControlSignals, DataBusSource, PchSource, PclSource,
    RegisterSource, StatusSource,
};

/// Power-on value of A, X, Y and T. Picked to stand out if it leaks.
pub const SENTINEL: u8 = 0x77;

/// Architecturally visible registers.
///
/// Used to install fixture state and to read results back.
///
/// # Examples
///
/// ```
/// use mc6502::Registers;
///
/// let regs = Registers { pc: 0x0200, a: 0x42, ..Registers::default() };
/// assert_eq!(regs.s, 0xFF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    pub pc: u16,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub s: u8,
    pub p: u8,
}

impl Default for Registers {
    fn default() -> Self {
        Self {
            pc: 0x0000,
            a: 0x00,
            x: 0x00,
            y: 0x00,
            s: 0xFF,
            p: 0x00,
        }
    }
}

/// Registers, buses, ALU and PC adder.
#[derive(Debug, Clone)]
pub struct Datapath {
    a: StorageCell,
    x: StorageCell,
    y: StorageCell,
    s: StorageCell,
    t: StorageCell,
    p: StorageCell,
    pcl: StorageCell,
    pch: StorageCell,
    abl: StorageCell,
    abh: StorageCell,
    db: StorageCell,
    dl: StorageCell,
    ir: StorageCell,

    pc_adder: PcAdder,
    alu_result: u8,
    address_carry: bool,
}

impl Default for Datapath {
    fn default() -> Self {
        Self::new()
    }
}

impl Datapath {
    /// Creates a datapath at its power-on values: A, X, Y and T hold
    /// [`SENTINEL`], S is 0xFF, everything else is zero.
    pub fn new() -> Self {
        Self {
            a: StorageCell::new(SENTINEL),
            x: StorageCell::new(SENTINEL),
            y: StorageCell::new(SENTINEL),
            s: StorageCell::new(0xFF),
            t: StorageCell::new(SENTINEL),
            p: StorageCell::default(),
            pcl: StorageCell::default(),
            pch: StorageCell::default(),
            abl: StorageCell::default(),
            abh: StorageCell::default(),
            db: StorageCell::default(),
            dl: StorageCell::default(),
            ir: StorageCell::default(),
            pc_adder: PcAdder::new(),
            alu_result: 0,
            address_carry: false,
        }
    }

    /// Runs one clock.
    ///
    /// `data` is the byte read from storage at the current address.
    /// `data_bus_enable` gates the data-bus buffer; when it is low the buffer
    /// keeps its previous value.
    ///
    /// Returns the data-bus byte (what a write cycle stores) and the address
    /// for the caller.
    pub fn tick(&mut self, data: u8, signals: &ControlSignals, data_bus_enable: bool) -> (u8, u16) {
        let db = match signals.db_src {
            DataBusSource::Memory => data,
            DataBusSource::A => self.a.get(),
            DataBusSource::X => self.x.get(),
            DataBusSource::Y => self.y.get(),
            DataBusSource::T => self.t.get(),
            DataBusSource::P => self.p.get(),
            DataBusSource::Pcl => self.pcl.get(),
            DataBusSource::Pch => self.pch.get(),
        };
        self.db.latch(db, data_bus_enable);
        self.dl.latch(self.db.get(), signals.dl_we);
        self.ir.latch(data, signals.ir_we);

        // Branch offsets come straight off the pins, like the opcode
        let (pcl, pch) = self
            .pc_adder
            .compute(self.pcl.get(), self.pch.get(), data, signals.pc_op);
        let pcl = match signals.pcl_src {
            PclSource::Latch => self.dl.get(),
            PclSource::Temp => self.t.get(),
            PclSource::Adder => pcl,
        };
        let pch = match signals.pch_src {
            PchSource::Latch => self.dl.get(),
            PchSource::Adder => pch,
        };
        self.pcl.latch(pcl, signals.pcl_we);
        self.pch.latch(pch, signals.pch_we);

        let (result, alu_flags) = self.run_alu(signals);
        self.alu_result = result;
        self.address_carry = signals.alu_address && alu_flags.c;

        let input = match signals.reg_src {
            RegisterSource::Latch => self.dl.get(),
            RegisterSource::Alu => result,
        };
        self.a.latch(input, signals.a_we);
        self.x.latch(input, signals.x_we);
        self.y.latch(input, signals.y_we);
        self.s.latch(input, signals.s_we);
        self.t.latch(input, signals.t_we);

        match signals.p_src {
            StatusSource::Hold => {}
            StatusSource::Latch => self.p.set(self.dl.get()),
            StatusSource::Set(mask) => self.p.set(self.p.get() | mask),
            StatusSource::Clear(mask) => self.p.set(self.p.get() & !mask),
            StatusSource::Alu => self.p.set(alu_flags.to_byte()),
        }

        let previous = self.address_bus();
        let abl = match signals.abl_src {
            AblSource::Latch => self.dl.get(),
            AblSource::S => self.s.get(),
            AblSource::T => self.t.get(),
            AblSource::Pcl => self.pcl.get(),
            AblSource::Alu => result,
            AblSource::Fe => 0xFE,
            AblSource::Ff => 0xFF,
        };
        let abh = match signals.abh_src {
            AbhSource::Latch => self.dl.get(),
            AbhSource::Pch => self.pch.get(),
            AbhSource::Alu => result,
            AbhSource::Zero => 0x00,
            AbhSource::One => 0x01,
            AbhSource::Ff => 0xFF,
        };
        self.abl.latch(abl, signals.abl_we);
        self.abh.latch(abh, signals.abh_we);

        let address = if signals.is_write() {
            previous
        } else {
            self.address_bus()
        };
        (self.db.get(), address)
    }

    fn run_alu(&self, signals: &ControlSignals) -> (u8, Flags) {
        let a = match signals.alu_a {
            AluInputA::Zero => 0x00,
            AluInputA::A => self.a.get(),
            AluInputA::X => self.x.get(),
            AluInputA::Y => self.y.get(),
            AluInputA::S => self.s.get(),
            AluInputA::T => self.t.get(),
        };
        let b = match signals.alu_b {
            AluInputB::Zero => 0x00,
            AluInputB::Latch => self.dl.get(),
            AluInputB::Temp => self.t.get(),
        };
        let mut flags = self.flags();
        if signals.alu_address {
            flags.c = false;
            flags.d = false;
        }
        alu::compute(a, b, flags, signals.alu_op)
    }

    /// Current address bus value.
    pub fn address_bus(&self) -> u16 {
        u16::from_le_bytes([self.abl.get(), self.abh.get()])
    }

    /// Program counter.
    pub fn pc(&self) -> u16 {
        u16::from_le_bytes([self.pcl.get(), self.pch.get()])
    }

    pub fn a(&self) -> u8 {
        self.a.get()
    }

    pub fn x(&self) -> u8 {
        self.x.get()
    }

    pub fn y(&self) -> u8 {
        self.y.get()
    }

    /// Stack pointer (offset into page 0x01).
    pub fn s(&self) -> u8 {
        self.s.get()
    }

    /// Temp register.
    pub fn t(&self) -> u8 {
        self.t.get()
    }

    /// Status register byte.
    pub fn p(&self) -> u8 {
        self.p.get()
    }

    /// Data-bus buffer.
    pub fn db(&self) -> u8 {
        self.db.get()
    }

    /// Data latch.
    pub fn dl(&self) -> u8 {
        self.dl.get()
    }

    /// Instruction register.
    pub fn ir(&self) -> u8 {
        self.ir.get()
    }

    /// Last ALU output.
    pub fn alu_result(&self) -> u8 {
        self.alu_result
    }

    /// Unpacked status register. PCC is false.
    pub fn flags(&self) -> Flags {
        Flags::from_byte(self.p.get())
    }

    /// PCC for the next clock: a deferred PC adder carry, or a carry out of
    /// last clock's address addition.
    pub fn page_cross_carry(&self) -> bool {
        self.pc_adder.page_crossed() || self.address_carry
    }

    pub fn pc_adder(&self) -> &PcAdder {
        &self.pc_adder
    }

    /// Snapshot of the architectural registers.
    pub fn registers(&self) -> Registers {
        Registers {
            pc: self.pc(),
            a: self.a.get(),
            x: self.x.get(),
            y: self.y.get(),
            s: self.s.get(),
            p: self.p.get(),
        }
    }

    /// Installs `regs`. PC and the address bus both take `regs.pc`.
    pub fn load_registers(&mut self, regs: &Registers) {
        let [low, high] = regs.pc.to_le_bytes();
        self.pcl.set(low);
        self.pch.set(high);
        self.abl.set(low);
        self.abh.set(high);
        self.a.set(regs.a);
        self.x.set(regs.x);
        self.y.set(regs.y);
        self.s.set(regs.s);
        self.p.set(regs.p);
    }
}

impl fmt::Display for Datapath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PC={:04X} AB={:04X} DB={:02X} A={:02X} X={:02X} Y={:02X} S={:02X} P={:02X} T={:02X} ALU={:02X}",
            self.pc(),
            self.address_bus(),
            self.db.get(),
            self.a.get(),
            self.x.get(),
            self.y.get(),
            self.s.get(),
            self.p.get(),
            self.t.get(),
            self.alu_result
        )
    }
}
