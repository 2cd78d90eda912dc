//! Tests for clock-level bus behavior seen from outside the MPU.
//!
//! Covers:
//! - The address/data/direction of every clock of representative instructions
//! - Write clocks returning the address being written
//! - The data-bus enable input holding the previous bus value
//! - Driving the MPU by hand against custom storage
//! - Borrowed storage through `&mut M`

use mc6502::{BusCycle, FlatMemory, InputLines, MemoryBus, Mpu, ReadWrite, Registers, State, System};

fn setup(program: &[u8], regs: Registers) -> System<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(regs.pc, program).unwrap();
    let mut system = System::new(memory);
    system.mpu_mut().load_registers(&regs);
    system
}

fn read(address: u16, data: u8) -> BusCycle {
    BusCycle {
        address,
        data,
        rw: ReadWrite::Read,
    }
}

fn write(address: u16, data: u8) -> BusCycle {
    BusCycle {
        address,
        data,
        rw: ReadWrite::Write,
    }
}

fn trace(system: &mut System<FlatMemory>) -> Vec<BusCycle> {
    let mut cycles = Vec::new();
    system.step_with(|cycle| cycles.push(*cycle));
    cycles
}

// ========== Per-clock traces ==========

#[test]
fn test_sta_absolute_trace() {
    let regs = Registers {
        pc: 0x0200,
        a: 0x5A,
        ..Registers::default()
    };
    let mut system = setup(&[0x8D, 0x00, 0x40], regs);

    assert_eq!(
        trace(&mut system),
        vec![
            read(0x0200, 0x8D),
            read(0x0201, 0x00),
            read(0x0202, 0x40),
            write(0x4000, 0x5A),
            read(0x0203, 0x00),
        ]
    );
}

#[test]
fn test_zero_page_x_dummy_reads_base() {
    let regs = Registers {
        pc: 0x0200,
        x: 0x03,
        ..Registers::default()
    };
    let mut system = setup(&[0xB5, 0x80], regs);
    system.memory_mut().write(0x0080, 0x11);
    system.memory_mut().write(0x0083, 0x22);

    assert_eq!(
        trace(&mut system),
        vec![
            read(0x0200, 0xB5),
            read(0x0201, 0x80),
            read(0x0080, 0x11),
            read(0x0083, 0x22),
            read(0x0202, 0x00),
        ]
    );
}

#[test]
fn test_implied_instruction_rereads_next_byte() {
    let mut system = setup(
        &[0xE8, 0xC8],
        Registers {
            pc: 0x0200,
            ..Registers::default()
        },
    );

    assert_eq!(
        trace(&mut system),
        vec![read(0x0200, 0xE8), read(0x0201, 0xC8), read(0x0201, 0xC8)]
    );
}

#[test]
fn test_pha_write_clock() {
    let regs = Registers {
        pc: 0x0200,
        a: 0x99,
        s: 0x80,
        ..Registers::default()
    };
    let mut system = setup(&[0x48], regs);

    assert_eq!(
        trace(&mut system),
        vec![
            read(0x0200, 0x48),
            read(0x0201, 0x00),
            write(0x0180, 0x99),
            read(0x0201, 0x00),
        ]
    );
}

#[test]
fn test_brk_trace() {
    let regs = Registers {
        pc: 0x0200,
        p: 0x80,
        ..Registers::default()
    };
    let mut system = setup(&[0x00, 0x00], regs);
    system.memory_mut().write(0xFFFE, 0x00);
    system.memory_mut().write(0xFFFF, 0x80);

    assert_eq!(
        trace(&mut system),
        vec![
            read(0x0200, 0x00),
            read(0x0201, 0x00),
            write(0x01FF, 0x02),
            write(0x01FE, 0x01),
            write(0x01FD, 0x80),
            read(0xFFFE, 0x00),
            read(0xFFFF, 0x80),
            read(0x8000, 0x00),
        ]
    );
}

// ========== Raw MPU interface ==========

#[test]
fn test_write_clock_returns_target_address() {
    // STA $55 with A=0x77
    let program = [0x85, 0x55];
    let mut mpu = Mpu::new();
    mpu.load_registers(&Registers {
        a: 0x77,
        ..Registers::default()
    });

    mpu.tick(program[mpu.address() as usize]);
    mpu.tick(program[mpu.address() as usize]);
    assert_eq!(mpu.address(), 0x0055);

    let (data, address) = mpu.tick(0x00);
    assert_eq!(mpu.read_or_write(), ReadWrite::Write);
    assert_eq!((data, address), (0x77, 0x0055));
    // The bus already points at the next opcode
    assert_eq!(mpu.address(), 0x0002);
}

#[test]
fn test_read_clock_returns_next_address() {
    let mut mpu = Mpu::new();
    let (data, address) = mpu.tick(0xEA);
    assert_eq!(mpu.read_or_write(), ReadWrite::Read);
    assert_eq!(data, 0xEA);
    assert_eq!(address, 0x0001);
}

#[test]
fn test_data_bus_disabled_keeps_previous_byte() {
    // LDA #$42, but the operand clock has the data bus disabled
    let mut mpu = Mpu::new();
    let disabled = InputLines {
        data_bus_enable: false,
        ..InputLines::default()
    };

    mpu.tick(0xA9);
    let (data, _) = mpu.tick_with(0x42, disabled);
    assert_eq!(data, 0xA9);
    mpu.tick(0xEA);

    assert_eq!(mpu.datapath().a(), 0xA9);
}

// ========== Custom storage ==========

struct RomRam {
    ram: [u8; 0x100],
    rom: [u8; 0x100],
}

impl MemoryBus for RomRam {
    fn read(&self, addr: u16) -> u8 {
        if addr < 0x8000 {
            self.ram[(addr & 0xFF) as usize]
        } else {
            self.rom[(addr & 0xFF) as usize]
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if addr < 0x8000 {
            self.ram[(addr & 0xFF) as usize] = value;
        }
    }
}

#[test]
fn test_system_over_custom_storage() {
    let mut rom = [0u8; 0x100];
    // LDA #$5A / STA $10 / STA $8010 (ignored by ROM)
    rom[..7].copy_from_slice(&[0xA9, 0x5A, 0x85, 0x10, 0x8D, 0x10, 0x80]);
    let storage = RomRam {
        ram: [0; 0x100],
        rom,
    };
    let mut system = System::new(storage);
    system.mpu_mut().load_registers(&Registers {
        pc: 0x8000,
        ..Registers::default()
    });

    system.step();
    system.step();
    system.step();

    assert_eq!(system.memory().ram[0x10], 0x5A);
    assert_eq!(system.memory().rom[0x10], 0x00);
}

#[test]
fn test_system_over_borrowed_memory() {
    let mut memory = FlatMemory::from_image(&[0xA9, 0x01, 0x85, 0x20]).unwrap();
    {
        let mut system = System::new(&mut memory);
        system.mpu_mut().load_registers(&Registers::default());
        system.step();
        system.step();
        assert_eq!(system.mpu().state(), State::FetchOperand);
    }
    assert_eq!(memory.read(0x0020), 0x01);
}

#[test]
fn test_run_for_cycles_is_clock_exact() {
    // INC $10 forever via JMP
    let mut system = setup(
        &[0xE6, 0x10, 0x4C, 0x00, 0x02],
        Registers {
            pc: 0x0200,
            ..Registers::default()
        },
    );

    // INC zp (5) + JMP (3) per iteration
    system.run_for_cycles(8 * 4);
    assert_eq!(system.memory().read(0x0010), 4);
    assert_eq!(system.cycles(), 32);
}
