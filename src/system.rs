//! # Clock-Loop Harness
//!
//! [`System`] pairs an [`Mpu`] with a [`MemoryBus`] and runs the caller loop:
//! read at the MPU's address, clock it, store the output byte if the clock
//! was a write.

use tracing::debug;

use crate::controller::State;
use crate::memory::MemoryBus;
use crate::mpu::Mpu;
use crate::opcodes::{Decoder, OpcodeTable};
use crate::signals::ReadWrite;

/// One bus transaction as seen by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusCycle {
    pub address: u16,
    pub data: u8,
    pub rw: ReadWrite,
}

/// An MPU attached to storage, with a clock counter.
///
/// # Examples
///
/// ```
/// use mc6502::{FlatMemory, Registers, System};
///
/// let memory = FlatMemory::from_image(&[0xA9, 0x77, 0x85, 0x55]).unwrap();
/// let mut system = System::new(memory);
/// system.mpu_mut().load_registers(&Registers::default());
///
/// assert_eq!(system.step(), 2); // LDA #$77
/// assert_eq!(system.mpu().registers().a, 0x77);
/// assert_eq!(system.step(), 3); // STA $55
/// assert_eq!(system.memory().as_slice()[0x55], 0x77);
/// ```
#[derive(Debug, Clone)]
pub struct System<M: MemoryBus, D: Decoder = OpcodeTable> {
    mpu: Mpu<D>,
    memory: M,
    cycles: u64,
}

impl<M: MemoryBus> System<M, OpcodeTable> {
    /// Attaches a fresh MPU to `memory`.
    pub fn new(memory: M) -> Self {
        Self::with_mpu(Mpu::new(), memory)
    }
}

impl<M: MemoryBus, D: Decoder> System<M, D> {
    /// Attaches an existing MPU to `memory`.
    pub fn with_mpu(mpu: Mpu<D>, memory: M) -> Self {
        Self {
            mpu,
            memory,
            cycles: 0,
        }
    }

    /// Runs one clock and returns the bus transaction it made.
    pub fn clock(&mut self) -> BusCycle {
        let read_address = self.mpu.address();
        let input = self.memory.read(read_address);
        let (output, address) = self.mpu.tick(input);
        self.cycles += 1;

        match self.mpu.read_or_write() {
            ReadWrite::Write => {
                self.memory.write(address, output);
                BusCycle {
                    address,
                    data: output,
                    rw: ReadWrite::Write,
                }
            }
            ReadWrite::Read => BusCycle {
                address: read_address,
                data: input,
                rw: ReadWrite::Read,
            },
        }
    }

    /// Runs exactly `cycles` clocks. Returns the total clock count.
    pub fn run_for_cycles(&mut self, cycles: u64) -> u64 {
        for _ in 0..cycles {
            self.clock();
        }
        self.cycles
    }

    /// Runs one instruction and returns how many clocks it took.
    ///
    /// Counting starts at the instruction's opcode fetch and stops when the
    /// controller is back at opcode fetch. One more, uncounted clock then
    /// performs the next opcode fetch, which is where the instruction's
    /// execute stage lands; afterwards PC points one past the next opcode.
    ///
    /// If the previous `step` already made that overlapped fetch, it counts
    /// as this instruction's first clock.
    pub fn step(&mut self) -> u32 {
        self.step_with(|_| {})
    }

    /// [`step`](Self::step), handing every bus transaction to `observe`.
    pub fn step_with(&mut self, mut observe: impl FnMut(&BusCycle)) -> u32 {
        let mut cycles = 1;
        if self.mpu.state() == State::FetchOpcode {
            observe(&self.clock());
        }
        while self.mpu.state() != State::FetchOpcode {
            observe(&self.clock());
            cycles += 1;
        }

        let instruction = self.mpu.controller().instruction();
        debug!(
            opcode = instruction.opcode,
            mnemonic = %instruction.mnemonic,
            mode = %instruction.mode,
            cycles,
            "step"
        );

        observe(&self.clock());
        cycles
    }

    pub fn mpu(&self) -> &Mpu<D> {
        &self.mpu
    }

    pub fn mpu_mut(&mut self) -> &mut Mpu<D> {
        &mut self.mpu
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Clocks run since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datapath::Registers;
    use crate::memory::FlatMemory;

    #[test]
    fn test_clock_reports_writes() {
        // STA $0055 with A=0x77
        let memory = FlatMemory::from_image(&[0x85, 0x55]).unwrap();
        let mut system = System::new(memory);
        system.mpu_mut().load_registers(&Registers {
            a: 0x77,
            ..Registers::default()
        });

        let fetch = system.clock();
        assert_eq!(
            fetch,
            BusCycle {
                address: 0x0000,
                data: 0x85,
                rw: ReadWrite::Read
            }
        );
        system.clock();
        let store = system.clock();
        assert_eq!(
            store,
            BusCycle {
                address: 0x0055,
                data: 0x77,
                rw: ReadWrite::Write
            }
        );
        assert_eq!(system.memory().read(0x0055), 0x77);
        assert_eq!(system.cycles(), 3);
    }

    #[test]
    fn test_run_for_cycles_counts() {
        let mut system = System::new(FlatMemory::new());
        assert_eq!(system.run_for_cycles(10), 10);
        assert_eq!(system.run_for_cycles(5), 15);
    }

    #[test]
    fn test_step_overlaps_next_fetch() {
        // LDA #$01, LDX #$02
        let memory = FlatMemory::from_image(&[0xA9, 0x01, 0xA2, 0x02]).unwrap();
        let mut system = System::new(memory);
        system.mpu_mut().load_registers(&Registers::default());

        assert_eq!(system.step(), 2);
        assert_eq!(system.mpu().registers().pc, 0x0003);
        assert_eq!(system.mpu().state(), State::FetchOperand);
        assert_eq!(system.step(), 2);
        assert_eq!(system.mpu().registers().x, 0x02);
        assert_eq!(system.cycles(), 5);
    }
}
