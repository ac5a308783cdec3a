//! Property-based tests for addressing mode resolution.
//!
//! These tests verify that the addressing modes calculate effective addresses
//! and page crossings correctly, including zero-page wraparound and the
//! indirect JMP page bug.

use nmos6502::{AddressingMode, FlatMemory, MemoryBus, Registers, CPU};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn registers(x: u8, y: u8) -> Registers {
    let mut regs = Registers::new();
    regs.x = x;
    regs.y = y;
    regs
}

proptest! {
    /// Property: Zero page,X wraps within zero page
    #[test]
    fn prop_zero_page_x_wraps(base in any::<u8>(), x in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        let effective = base.wrapping_add(x) as u16;
        cpu.memory_mut().write(effective, value);
        cpu.memory_mut().load(0x8000, &[0xB5, base]); // LDA zp,X
        cpu.set_x(x);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: Absolute,Y reports a page crossing exactly when the high byte changes
    #[test]
    fn prop_absolute_y_page_crossing(base in any::<u16>(), y in any::<u8>()) {
        let mut mem = FlatMemory::new();
        mem.load(0x0600, &[base as u8, (base >> 8) as u8]);

        let op = AddressingMode::AbsoluteY.resolve(0x0600, &registers(0, y), &mem, false);
        let expected = base.wrapping_add(y as u16);

        prop_assert_eq!(op.address, expected);
        prop_assert_eq!(op.page_crossed, (base >> 8) != (expected >> 8));
        prop_assert_eq!(op.bytes_consumed, 2);
    }

    /// Property: (zp,X) reads its pointer from zero page, wrapping on both bytes
    #[test]
    fn prop_indexed_indirect(zp in any::<u8>(), x in any::<u8>(), target in any::<u16>()) {
        let mut mem = FlatMemory::new();
        mem.write(0x0600, zp);
        let pointer = zp.wrapping_add(x);
        mem.write(pointer as u16, target as u8);
        mem.write(pointer.wrapping_add(1) as u16, (target >> 8) as u8);

        let op = AddressingMode::IndexedIndirect.resolve(0x0600, &registers(x, 0), &mem, false);

        prop_assert_eq!(op.address, target);
        prop_assert!(!op.page_crossed);
    }

    /// Property: (zp),Y adds Y to the pointer and reports page crossings
    #[test]
    fn prop_indirect_indexed(zp in any::<u8>(), y in any::<u8>(), base in any::<u16>()) {
        let mut mem = FlatMemory::new();
        mem.write(0x0600, zp);
        mem.write(zp as u16, base as u8);
        mem.write(zp.wrapping_add(1) as u16, (base >> 8) as u8);

        let op = AddressingMode::IndirectIndexed.resolve(0x0600, &registers(0, y), &mem, false);
        let expected = base.wrapping_add(y as u16);

        prop_assert_eq!(op.address, expected);
        prop_assert_eq!(op.page_crossed, (base >> 8) != (expected >> 8));
    }

    /// Property: Relative targets are the signed offset from the next instruction
    #[test]
    fn prop_relative_target(pc in 0x0200u16..0xFF00, offset in any::<i8>()) {
        let mut mem = FlatMemory::new();
        mem.write(pc, offset as u8);

        let op = AddressingMode::Relative.resolve(pc, &Registers::new(), &mem, false);
        let next = pc + 1;
        let expected = (next as i32 + offset as i32) as u16;

        prop_assert_eq!(op.address, expected);
        prop_assert_eq!(op.page_crossed, (next >> 8) != (expected >> 8));
    }

    /// Property: JMP indirect never carries into the pointer's high byte
    #[test]
    fn prop_jmp_indirect_page_bug(page in 0x02u8..0x7F, lo in any::<u8>(), hi in any::<u8>()) {
        let mut cpu = setup_cpu();
        let pointer = (page as u16) << 8 | 0xFF;
        cpu.memory_mut().load(0x8000, &[0x6C, 0xFF, page]);
        cpu.memory_mut().write(pointer, lo);
        cpu.memory_mut().write((page as u16) << 8, hi);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.pc(), (hi as u16) << 8 | lo as u16);
    }

    /// Property: Loads through the resolver only read memory when asked to
    #[test]
    fn prop_resolve_load_flag(address in any::<u16>(), value in any::<u8>()) {
        let mut mem = FlatMemory::new();
        mem.write(address, value);
        mem.write(0x0600, address as u8);
        mem.write(0x0601, (address >> 8) as u8);
        let regs = Registers::new();

        let loaded = AddressingMode::Absolute.resolve(0x0600, &regs, &mem, true);
        let skipped = AddressingMode::Absolute.resolve(0x0600, &regs, &mem, false);

        // The operand bytes themselves may be the target
        let expected = mem.read(address);
        prop_assert_eq!(loaded.value, expected);
        prop_assert_eq!(skipped.value, 0);
        prop_assert_eq!(loaded.address, skipped.address);
    }
}
