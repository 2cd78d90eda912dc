//! Tests for JMP absolute and JMP indirect.
//!
//! Covers:
//! - Absolute jump in three clocks
//! - Indirect jump in five clocks
//! - The indirect pointer wrapping inside its page
//! - Jumps leaving registers and flags alone

use mc6502::{FlatMemory, MemoryBus, Registers, System};

fn setup(program: &[u8], regs: Registers) -> System<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(regs.pc, program).unwrap();
    let mut system = System::new(memory);
    system.mpu_mut().load_registers(&regs);
    system
}

fn at(pc: u16) -> Registers {
    Registers {
        pc,
        ..Registers::default()
    }
}

// ========== Absolute ==========

#[test]
fn test_jmp_absolute() {
    let mut system = setup(&[0x4C, 0x34, 0x12], at(0x0200));

    assert_eq!(system.step(), 3);
    assert_eq!(system.mpu().registers().pc, 0x1235);
}

#[test]
fn test_jmp_absolute_fetches_target_next() {
    let mut system = setup(&[0x4C, 0x00, 0x30], at(0x0200));
    system.memory_mut().write(0x3000, 0xE8);

    let mut trace = Vec::new();
    system.step_with(|cycle| trace.push(cycle.address));
    assert_eq!(trace, vec![0x0200, 0x0201, 0x0202, 0x3000]);

    // INX at the target
    system.step();
    assert_eq!(system.mpu().registers().x, 0x01);
}

#[test]
fn test_jmp_preserves_registers() {
    let regs = Registers {
        pc: 0x0200,
        a: 0x11,
        x: 0x22,
        y: 0x33,
        s: 0x44,
        p: 0xC3,
    };
    let mut system = setup(&[0x4C, 0x00, 0x30], regs);
    system.step();

    let after = system.mpu().registers();
    assert_eq!((after.a, after.x, after.y, after.s, after.p), (0x11, 0x22, 0x33, 0x44, 0xC3));
}

// ========== Indirect ==========

#[test]
fn test_jmp_indirect() {
    let mut system = setup(&[0x6C, 0x00, 0x30], at(0x0200));
    system.memory_mut().write(0x3000, 0x78);
    system.memory_mut().write(0x3001, 0x56);

    assert_eq!(system.step(), 5);
    assert_eq!(system.mpu().registers().pc, 0x5679);
}

#[test]
fn test_jmp_indirect_pointer_wraps_within_page() {
    let mut system = setup(&[0x6C, 0xFF, 0x03], at(0x0200));
    system.memory_mut().write(0x03FF, 0x34);
    system.memory_mut().write(0x0300, 0x12);
    system.memory_mut().write(0x0400, 0x56);

    assert_eq!(system.step(), 5);
    assert_eq!(system.mpu().registers().pc, 0x1235);
}
