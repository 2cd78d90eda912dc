//! Fuzz target for clocking the MPU.
//!
//! Builds arbitrary register state and memory contents, then runs a bounded
//! number of clocks looking for panics and broken bus invariants.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mc6502::{FlatMemory, InputLines, MemoryBus, ReadWrite, Registers, State, System};

/// Arbitrary register state
#[derive(Debug, Arbitrary)]
struct FuzzRegisters {
    pc: u16,
    a: u8,
    x: u8,
    y: u8,
    s: u8,
    p: u8,
}

/// Memory regions the program is most likely to touch
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at PC
    program: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// BRK vector
    vector: [u8; 2],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    regs: FuzzRegisters,
    memory: FuzzMemory,
    /// Clocks on which the data bus is disabled
    disabled_clocks: Vec<u8>,
    clocks: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        memory.write(0x0100 + i as u16, byte);
    }
    memory.write(0xFFFE, input.memory.vector[0]);
    memory.write(0xFFFF, input.memory.vector[1]);
    for (i, &byte) in input.memory.program.iter().enumerate() {
        memory.write(input.regs.pc.wrapping_add(i as u16), byte);
    }

    let mut system = System::new(memory);
    system.mpu_mut().load_registers(&Registers {
        pc: input.regs.pc,
        a: input.regs.a,
        x: input.regs.x,
        y: input.regs.y,
        s: input.regs.s,
        p: input.regs.p,
    });

    // Whole instructions first: every one must return to opcode fetch
    for _ in 0..4 {
        let clocks = system.step();
        assert!((1..=7).contains(&clocks), "instruction took {clocks} clocks");
        assert_eq!(system.mpu().state(), State::FetchOperand);
    }

    // Then raw clocks with the data bus enable toggled
    for clock in 0..input.clocks {
        let lines = InputLines {
            data_bus_enable: !input.disabled_clocks.contains(&clock),
            ..InputLines::default()
        };
        let data = system.memory().read(system.mpu().address());
        let (out, address) = system.mpu_mut().tick_with(data, lines);
        if system.mpu().read_or_write() == ReadWrite::Write {
            system.memory_mut().write(address, out);
        }
    }
});
