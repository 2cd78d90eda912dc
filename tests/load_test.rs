//! Tests for LDA, LDX and LDY across addressing modes.
//!
//! Covers:
//! - Immediate loads and the pipelined write-back
//! - N/Z flag updates
//! - Zero page, zero page indexed (with wrap) and absolute loads
//! - Indexed loads with and without a page crossing
//! - Indexed indirect and indirect indexed loads
//! - Carry and decimal flags not leaking into address arithmetic

use mc6502::{BusCycle, FlatMemory, MemoryBus, ReadWrite, Registers, System};

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

// ========== Immediate ==========

#[test]
fn test_lda_immediate_from_reset_state() {
    let mut system = setup(&[0xA9, 0x77], at(0x0000));

    assert_eq!(system.step(), 2);

    let regs = system.mpu().registers();
    assert_eq!(regs.a, 0x77);
    assert_eq!(regs.pc, 0x0003);
    assert!(!system.mpu().flags().z);
    assert!(!system.mpu().flags().n);
}

#[test]
fn test_lda_immediate_zero_sets_z() {
    let mut system = setup(&[0xA9, 0x00], at(0x0200));
    system.step();

    let flags = system.mpu().flags();
    assert!(flags.z);
    assert!(!flags.n);
}

#[test]
fn test_lda_immediate_negative_sets_n() {
    let mut system = setup(&[0xA9, 0x80], at(0x0200));
    system.step();

    let flags = system.mpu().flags();
    assert!(flags.n);
    assert!(!flags.z);
}

#[test]
fn test_load_leaves_carry_alone() {
    let regs = Registers {
        pc: 0x0200,
        p: 0x01,
        ..Registers::default()
    };
    let mut system = setup(&[0xA2, 0x00], regs);
    system.step();

    assert!(system.mpu().flags().c);
    assert!(system.mpu().flags().z);
}

#[test]
fn test_ldx_and_ldy_immediate() {
    let mut system = setup(&[0xA2, 0x12, 0xA0, 0xF4], at(0x0200));

    assert_eq!(system.step(), 2);
    assert_eq!(system.step(), 2);

    let regs = system.mpu().registers();
    assert_eq!(regs.x, 0x12);
    assert_eq!(regs.y, 0xF4);
    assert!(system.mpu().flags().n);
}

// ========== Zero Page ==========

#[test]
fn test_lda_zero_page() {
    let mut system = setup(&[0xA5, 0x42], at(0x0200));
    system.memory_mut().write(0x0042, 0x99);

    assert_eq!(system.step(), 3);
    assert_eq!(system.mpu().registers().a, 0x99);
    assert_eq!(system.mpu().registers().pc, 0x0203);
}

#[test]
fn test_lda_zero_page_x() {
    let regs = Registers {
        pc: 0x0200,
        x: 0x05,
        ..Registers::default()
    };
    let mut system = setup(&[0xB5, 0x40], regs);
    system.memory_mut().write(0x0045, 0x3C);

    assert_eq!(system.step(), 4);
    assert_eq!(system.mpu().registers().a, 0x3C);
}

#[test]
fn test_lda_zero_page_x_wraps_within_page_zero() {
    let regs = Registers {
        pc: 0x0200,
        x: 0x20,
        ..Registers::default()
    };
    let mut system = setup(&[0xB5, 0xF0], regs);
    system.memory_mut().write(0x0010, 0x5A);
    system.memory_mut().write(0x0110, 0xEE);

    assert_eq!(system.step(), 4);
    assert_eq!(system.mpu().registers().a, 0x5A);
}

#[test]
fn test_ldx_zero_page_y() {
    let regs = Registers {
        pc: 0x0200,
        y: 0x03,
        ..Registers::default()
    };
    let mut system = setup(&[0xB6, 0x10], regs);
    system.memory_mut().write(0x0013, 0x81);

    assert_eq!(system.step(), 4);
    assert_eq!(system.mpu().registers().x, 0x81);
    assert!(system.mpu().flags().n);
}

// ========== Absolute ==========

#[test]
fn test_lda_absolute() {
    let mut system = setup(&[0xAD, 0x55, 0x22], at(0x0200));
    system.memory_mut().write(0x2255, 0x77);

    assert_eq!(system.step(), 4);
    assert_eq!(system.mpu().registers().a, 0x77);
    assert_eq!(system.mpu().registers().pc, 0x0204);
}

#[test]
fn test_ldy_absolute() {
    let mut system = setup(&[0xAC, 0x00, 0x30], at(0x0200));
    system.memory_mut().write(0x3000, 0x00);

    assert_eq!(system.step(), 4);
    assert_eq!(system.mpu().registers().y, 0x00);
    assert!(system.mpu().flags().z);
}

// ========== Absolute Indexed ==========

#[test]
fn test_lda_absolute_x_without_page_cross() {
    let regs = Registers {
        pc: 0x0200,
        x: 0x11,
        ..Registers::default()
    };
    let mut system = setup(&[0xBD, 0x44, 0x22], regs);
    system.memory_mut().write(0x2255, 0x77);

    assert_eq!(system.step(), 4);
    assert_eq!(system.mpu().registers().a, 0x77);
}

#[test]
fn test_lda_absolute_x_with_page_cross() {
    let regs = Registers {
        pc: 0x0200,
        x: 0x65,
        ..Registers::default()
    };
    let mut system = setup(&[0xBD, 0xF0, 0x21], regs);
    system.memory_mut().write(0x2255, 0x77);
    system.memory_mut().write(0x2155, 0xBB);

    assert_eq!(system.step(), 5);
    assert_eq!(system.mpu().registers().a, 0x77);
}

#[test]
fn test_page_cross_makes_dummy_read_in_wrong_page() {
    let regs = Registers {
        pc: 0x0200,
        x: 0x65,
        ..Registers::default()
    };
    let mut system = setup(&[0xBD, 0xF0, 0x21], regs);

    let mut reads = Vec::new();
    system.step_with(|cycle: &BusCycle| reads.push(cycle.address));

    assert_eq!(reads, vec![0x0200, 0x0201, 0x0202, 0x2155, 0x2255, 0x0203]);
}

#[test]
fn test_lda_absolute_y_with_page_cross() {
    let regs = Registers {
        pc: 0x0200,
        y: 0x01,
        ..Registers::default()
    };
    let mut system = setup(&[0xB9, 0xFF, 0x30], regs);
    system.memory_mut().write(0x3100, 0x42);

    assert_eq!(system.step(), 5);
    assert_eq!(system.mpu().registers().a, 0x42);
}

#[test]
fn test_carry_and_decimal_do_not_leak_into_index_add() {
    let regs = Registers {
        pc: 0x0200,
        x: 0x11,
        p: 0x09,
        ..Registers::default()
    };
    let mut system = setup(&[0xBD, 0x44, 0x22], regs);
    system.memory_mut().write(0x2255, 0x77);
    system.memory_mut().write(0x2256, 0x66);

    assert_eq!(system.step(), 4);
    assert_eq!(system.mpu().registers().a, 0x77);
    // Address arithmetic leaves P untouched
    assert_eq!(system.mpu().registers().p, 0x09);
}

#[test]
fn test_ldx_absolute_y_wraps_address_space() {
    let regs = Registers {
        pc: 0x0200,
        y: 0x10,
        ..Registers::default()
    };
    let mut system = setup(&[0xBE, 0xF8, 0xFF], regs);
    system.memory_mut().write(0x0008, 0x24);

    assert_eq!(system.step(), 5);
    assert_eq!(system.mpu().registers().x, 0x24);
}

// ========== Indirect ==========

#[test]
fn test_lda_indexed_indirect() {
    let regs = Registers {
        pc: 0x0200,
        x: 0x05,
        ..Registers::default()
    };
    let mut system = setup(&[0xA1, 0x40], regs);
    system.memory_mut().write(0x0045, 0x55);
    system.memory_mut().write(0x0046, 0x22);
    system.memory_mut().write(0x2255, 0x9A);

    assert_eq!(system.step(), 6);
    assert_eq!(system.mpu().registers().a, 0x9A);
}

#[test]
fn test_lda_indexed_indirect_pointer_wraps_in_page_zero() {
    let regs = Registers {
        pc: 0x0200,
        x: 0x01,
        ..Registers::default()
    };
    let mut system = setup(&[0xA1, 0xFE], regs);
    system.memory_mut().write(0x00FF, 0x34);
    system.memory_mut().write(0x0000, 0x12);
    system.memory_mut().write(0x1234, 0x61);

    assert_eq!(system.step(), 6);
    assert_eq!(system.mpu().registers().a, 0x61);
}

#[test]
fn test_lda_indirect_indexed_without_page_cross() {
    let regs = Registers {
        pc: 0x0200,
        y: 0x11,
        ..Registers::default()
    };
    let mut system = setup(&[0xB1, 0x40], regs);
    system.memory_mut().write(0x0040, 0x44);
    system.memory_mut().write(0x0041, 0x22);
    system.memory_mut().write(0x2255, 0x77);

    assert_eq!(system.step(), 5);
    assert_eq!(system.mpu().registers().a, 0x77);
}

#[test]
fn test_lda_indirect_indexed_with_page_cross() {
    let regs = Registers {
        pc: 0x0200,
        y: 0x65,
        ..Registers::default()
    };
    let mut system = setup(&[0xB1, 0x40], regs);
    system.memory_mut().write(0x0040, 0xF0);
    system.memory_mut().write(0x0041, 0x21);
    system.memory_mut().write(0x2255, 0x77);

    let mut cycles = Vec::new();
    let count = system.step_with(|cycle| cycles.push(*cycle));

    assert_eq!(count, 6);
    assert_eq!(system.mpu().registers().a, 0x77);
    assert!(cycles.iter().all(|c| c.rw == ReadWrite::Read));
    assert_eq!(cycles[4].address, 0x2155);
    assert_eq!(cycles[5].address, 0x2255);
}
