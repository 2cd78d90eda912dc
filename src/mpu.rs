//! # MPU
//!
//! Controller and datapath wired together. One call to [`Mpu::tick`] is one
//! clock: the controller sees the status flags (with PCC filled in from the
//! adders' pending carries) and emits control signals, then the datapath
//! executes them.
//!
//! The MPU does not own storage. The caller reads the byte at
//! [`Mpu::address`], passes it to `tick`, and stores the output byte at the
//! returned address when [`Mpu::read_or_write`] says the clock was a write.

use tracing::trace;

use crate::controller::{Controller, State};
use crate::datapath::{Datapath, Registers};
use crate::flags::Flags;
use crate::opcodes::{Decoder, OpcodeTable};
use crate::signals::{ControlSignals, ReadWrite};

/// The five input pins sampled each clock. All default to `true`.
///
/// Only `data_bus_enable` has an effect: when low, the data-bus buffer keeps
/// its previous value. `ready`, `reset_n`, `irq_n` and `nmi_n` are accepted
/// and ignored; interrupt entry is not sequenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLines {
    pub data_bus_enable: bool,
    pub ready: bool,
    pub reset_n: bool,
    pub irq_n: bool,
    pub nmi_n: bool,
}

impl Default for InputLines {
    fn default() -> Self {
        Self {
            data_bus_enable: true,
            ready: true,
            reset_n: true,
            irq_n: true,
            nmi_n: true,
        }
    }
}

/// The microprocessor: controller plus datapath.
///
/// # Examples
///
/// ```
/// use mc6502::{Mpu, ReadWrite};
///
/// // LDA #$77, driven by hand
/// let program = [0xA9, 0x77, 0xEA];
/// let mut mpu = Mpu::new();
/// for _ in 0..3 {
///     let byte = program[mpu.address() as usize];
///     mpu.tick(byte);
///     assert_eq!(mpu.read_or_write(), ReadWrite::Read);
/// }
/// assert_eq!(mpu.datapath().a(), 0x77);
/// assert_eq!(mpu.datapath().pc(), 0x0003);
/// ```
#[derive(Debug, Clone)]
pub struct Mpu<D: Decoder = OpcodeTable> {
    controller: Controller<D>,
    datapath: Datapath,
    signals: ControlSignals,
}

impl Mpu<OpcodeTable> {
    /// Creates an MPU with the documented NMOS opcode map, registers at their
    /// power-on sentinels and the controller in opcode fetch.
    pub fn new() -> Self {
        Self::with_decoder(OpcodeTable)
    }
}

impl Default for Mpu<OpcodeTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Decoder> Mpu<D> {
    /// Creates an MPU that decodes opcodes with `decoder`.
    pub fn with_decoder(decoder: D) -> Self {
        Self {
            controller: Controller::with_decoder(decoder),
            datapath: Datapath::new(),
            signals: ControlSignals::default(),
        }
    }

    /// One clock with all input lines inactive.
    pub fn tick(&mut self, data: u8) -> (u8, u16) {
        self.tick_with(data, InputLines::default())
    }

    /// One clock with explicit input lines.
    ///
    /// Returns the data-bus byte and the address: on a write clock, where
    /// the byte must be stored; on a read clock, where the next byte comes
    /// from.
    pub fn tick_with(&mut self, data: u8, lines: InputLines) -> (u8, u16) {
        let state = self.controller.state();
        let flags = self
            .datapath
            .flags()
            .with_page_cross_carry(self.datapath.page_cross_carry());

        let signals = self.controller.tick(self.datapath.ir(), flags);
        let (out, address) = self
            .datapath
            .tick(data, &signals, lines.data_bus_enable);
        self.signals = signals;

        trace!(
            ?state,
            signals = %self.signals,
            datapath = %self.datapath,
            "clock"
        );
        (out, address)
    }

    /// Current address-bus value: where the next clock reads from.
    pub fn address(&self) -> u16 {
        self.datapath.address_bus()
    }

    /// Direction of the most recent clock.
    pub fn read_or_write(&self) -> ReadWrite {
        self.signals.rw
    }

    /// Control signals emitted on the most recent clock.
    pub fn signals(&self) -> &ControlSignals {
        &self.signals
    }

    /// Returns the control signals to their inert defaults. Registers and
    /// the micro-state are untouched.
    pub fn reset(&mut self) {
        self.signals = ControlSignals::default();
    }

    /// Micro-state the next clock will execute.
    pub fn state(&self) -> State {
        self.controller.state()
    }

    pub fn controller(&self) -> &Controller<D> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller<D> {
        &mut self.controller
    }

    pub fn datapath(&self) -> &Datapath {
        &self.datapath
    }

    /// Status flags with PCC as the controller will see it next clock.
    pub fn flags(&self) -> Flags {
        self.datapath
            .flags()
            .with_page_cross_carry(self.datapath.page_cross_carry())
    }

    /// Snapshot of the architectural registers.
    pub fn registers(&self) -> Registers {
        self.datapath.registers()
    }

    /// Installs register state. PC and the address bus both take `regs.pc`.
    pub fn load_registers(&mut self, regs: &Registers) {
        self.datapath.load_registers(regs);
    }
}
