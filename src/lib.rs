//! # Clock-Level 6502 Microarchitecture
//!
//! A clock-accurate model of the NMOS 6502's insides: the micro-sequencer that
//! emits control signals each clock, the register file and buses those
//! signals drive, and the ALU. It reproduces which value is on which bus on
//! which clock, including dummy reads, read-modify-write double writes and
//! page-crossing penalty clocks.
//!
//! ## Quick Start
//!
//! ```rust
//! use mc6502::{FlatMemory, MemoryBus, Registers, System};
//!
//! // INC $2255
//! let mut memory = FlatMemory::new();
//! memory.load(0x0000, &[0xEE, 0x55, 0x22]).unwrap();
//! memory.write(0x2255, 0x77);
//!
//! let mut system = System::new(memory);
//! system.mpu_mut().load_registers(&Registers::default());
//!
//! assert_eq!(system.step(), 6);
//! assert_eq!(system.memory().read(0x2255), 0x78);
//! ```
//!
//! ## Driving the clock by hand
//!
//! [`Mpu`] has no storage. Each clock the caller reads the byte at
//! [`Mpu::address`], passes it to [`Mpu::tick`], and stores the returned byte
//! at the returned address if [`Mpu::read_or_write`] reports a write.
//! [`System`] packages that loop.
//!
//! ## Modules
//!
//! - `flags` - status bits and the transient page-cross carry
//! - `register` - gated 8-bit storage cells
//! - `pc_adder` - PC incrementer with deferred branch carry
//! - `alu` - the stateless arithmetic/logic unit
//! - `signals` - the per-clock control-signal vector
//! - `datapath` - registers, buses, ALU and PC adder
//! - `controller` - the micro-sequencer
//! - `mpu` - controller plus datapath
//! - `opcodes`, `addressing` - the opcode decoder
//! - `memory` - the `MemoryBus` trait and `FlatMemory`
//! - `system` - MPU plus memory clock loop
//!
//! ## Logging
//!
//! Every clock emits a `tracing` event at TRACE level with the micro-state,
//! the control signals and a register dump; [`System::step`] logs each
//! instruction at DEBUG. No subscriber is installed by the library.

pub mod addressing;
pub mod alu;
pub mod controller;
pub mod datapath;
pub mod flags;
pub mod memory;
pub mod mpu;
pub mod opcodes;
pub mod pc_adder;
pub mod register;
pub mod signals;
pub mod system;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, ParseAddressingModeError};
pub use alu::AluOp;
pub use controller::{Controller, Instruction, State};
pub use datapath::{Datapath, Registers};
pub use flags::Flags;
pub use memory::{FlatMemory, MemoryBus, MemoryError};
pub use mpu::{InputLines, Mpu};
pub use opcodes::{Decoder, Mnemonic, OpcodeInfo, OpcodeTable, OPCODE_TABLE};
pub use pc_adder::{PcAdder, PcAdderOp};
pub use register::StorageCell;
pub use signals::{ControlSignals, ReadWrite};
pub use system::{BusCycle, System};
