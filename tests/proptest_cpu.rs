//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to verify that CPU operations maintain
//! fundamental invariants across all possible input combinations.

use nmos6502::{FlatMemory, MemoryBus, Mnemonic, OpcodeTable, CPU};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

/// Opcodes whose only effect on PC is advancing past the instruction.
fn straight_line_opcodes() -> Vec<u8> {
    OpcodeTable::build()
        .iter()
        .filter(|e| {
            !e.mnemonic.is_branch()
                && !matches!(
                    e.mnemonic,
                    Mnemonic::Jmp
                        | Mnemonic::Jsr
                        | Mnemonic::Rts
                        | Mnemonic::Rti
                        | Mnemonic::Brk
                        | Mnemonic::Jam
                )
        })
        .map(|e| e.opcode)
        .collect()
}

/// Every opcode that completes a step.
fn non_jam_opcodes() -> Vec<u8> {
    OpcodeTable::build()
        .iter()
        .filter(|e| e.mnemonic != Mnemonic::Jam)
        .map(|e| e.opcode)
        .collect()
}

/// Packs a value 0..=99 as BCD.
fn to_bcd(n: u8) -> u8 {
    ((n / 10) << 4) | (n % 10)
}

// ========== PC and Cycle Properties ==========

proptest! {
    /// Property: For straight-line instructions, PC advances by exactly the instruction size
    #[test]
    fn prop_pc_advances_by_instruction_size(
        opcode in prop::sample::select(straight_line_opcodes()),
        operand1 in any::<u8>(),
        operand2 in any::<u8>(),
    ) {
        let table = OpcodeTable::build();
        let entry = table.get(opcode).unwrap();
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, operand1, operand2]);

        cpu.step().unwrap();

        prop_assert_eq!(
            cpu.pc(),
            0x8000 + entry.size_bytes() as u16,
            "PC should advance by {} bytes for opcode 0x{:02X} ({})",
            entry.size_bytes(),
            opcode,
            entry.mnemonic
        );
    }

    /// Property: A step costs at least its base cycles and at most two more
    #[test]
    fn prop_cycles_within_bounds(
        opcode in prop::sample::select(non_jam_opcodes()),
        operand1 in any::<u8>(),
        operand2 in any::<u8>(),
        x in any::<u8>(),
        y in any::<u8>(),
        status in any::<u8>(),
    ) {
        let table = OpcodeTable::build();
        let entry = table.get(opcode).unwrap();
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, operand1, operand2]);
        cpu.set_x(x);
        cpu.set_y(y);
        cpu.set_status(status);

        let cycles = cpu.step().unwrap();

        prop_assert!(cycles >= entry.base_cycles);
        prop_assert!(cycles <= entry.base_cycles + 2);
        prop_assert_eq!(cpu.cycles(), cycles as u64);
    }

    /// Property: LDA abs,X pays one extra cycle exactly when indexing crosses a page
    #[test]
    fn prop_absolute_x_page_penalty(base in any::<u16>(), x in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0xBD, base as u8, (base >> 8) as u8]);
        cpu.set_x(x);

        let crossed = (base & 0xFF00) != (base.wrapping_add(x as u16) & 0xFF00);
        let cycles = cpu.step().unwrap();

        prop_assert_eq!(cycles, 4 + crossed as u8);
    }

    /// Property: Bit 5 of the status register always reads as 1
    #[test]
    fn prop_unused_bit_always_set(
        opcode in prop::sample::select(non_jam_opcodes()),
        operand1 in any::<u8>(),
        operand2 in any::<u8>(),
        status in any::<u8>(),
        stacked in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, operand1, operand2]);
        cpu.memory_mut().write(0x01FE, stacked);
        cpu.set_status(status);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.status() & 0x20, 0x20);
    }
}

// ========== Arithmetic Properties ==========

proptest! {
    /// Property: ADC then SBC of the same operand (carry set) restores A plus the original carry
    #[test]
    fn prop_adc_sbc_round_trip(a in any::<u8>(), b in any::<u8>(), carry in any::<bool>()) {
        let mut cpu = setup_cpu();

        // ADC #b ; SEC ; SBC #b
        cpu.memory_mut().load(0x8000, &[0x69, b, 0x38, 0xE9, b]);
        cpu.set_a(a);
        cpu.set_flag_c(carry);

        cpu.step().unwrap();
        cpu.step().unwrap();
        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), a.wrapping_add(carry as u8));
    }

    /// Property: Binary ADC matches 9-bit addition
    #[test]
    fn prop_adc_binary(a in any::<u8>(), b in any::<u8>(), carry in any::<bool>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0x69, b]);
        cpu.set_a(a);
        cpu.set_flag_c(carry);

        cpu.step().unwrap();

        let sum = a as u16 + b as u16 + carry as u16;
        let signed = a as i8 as i16 + b as i8 as i16 + carry as i16;
        prop_assert_eq!(cpu.a(), sum as u8);
        prop_assert_eq!(cpu.flag_c(), sum > 0xFF);
        prop_assert_eq!(cpu.flag_v(), !(-128..=127).contains(&signed));
        prop_assert_eq!(cpu.flag_z(), sum as u8 == 0);
        prop_assert_eq!(cpu.flag_n(), sum as u8 & 0x80 != 0);
    }

    /// Property: Decimal ADC of valid BCD operands is BCD addition modulo 100
    #[test]
    fn prop_adc_decimal_valid_bcd(a in 0u8..100, b in 0u8..100, carry in any::<bool>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0x69, to_bcd(b)]);
        cpu.set_flag_d(true);
        cpu.set_a(to_bcd(a));
        cpu.set_flag_c(carry);

        cpu.step().unwrap();

        let sum = a as u16 + b as u16 + carry as u16;
        prop_assert_eq!(cpu.a(), to_bcd((sum % 100) as u8));
        prop_assert_eq!(cpu.flag_c(), sum >= 100);
    }

    /// Property: Decimal SBC of valid BCD operands is BCD subtraction modulo 100
    #[test]
    fn prop_sbc_decimal_valid_bcd(a in 0u8..100, b in 0u8..100, carry in any::<bool>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0xE9, to_bcd(b)]);
        cpu.set_flag_d(true);
        cpu.set_a(to_bcd(a));
        cpu.set_flag_c(carry);

        cpu.step().unwrap();

        let difference = a as i16 - b as i16 - (!carry) as i16;
        prop_assert_eq!(cpu.a(), to_bcd(difference.rem_euclid(100) as u8));
        prop_assert_eq!(cpu.flag_c(), difference >= 0);
    }

    /// Property: CMP sets C iff A >= operand and never changes A
    #[test]
    fn prop_cmp_carry(a in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0xC9, value]);
        cpu.set_a(a);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.flag_c(), a >= value);
        prop_assert_eq!(cpu.flag_z(), a == value);
        prop_assert_eq!(cpu.a(), a);
    }
}

// ========== Flag and Stack Properties ==========

proptest! {
    /// Property: LDA immediate sets N from bit 7 and Z iff zero
    #[test]
    fn prop_lda_immediate_flags(value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0xA9, value]);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.flag_n(), value & 0x80 != 0);
        prop_assert_eq!(cpu.flag_z(), value == 0);
    }

    /// Property: PHA then PLA restores A and SP for any starting SP
    #[test]
    fn prop_pha_pla_round_trip(a in any::<u8>(), sp in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0x48, 0xA9, 0x00, 0x68]);
        cpu.set_a(a);
        cpu.set_sp(sp);

        cpu.step().unwrap();
        cpu.step().unwrap();
        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.sp(), sp);
    }

    /// Property: PHP then PLP restores every flag except B
    #[test]
    fn prop_php_plp_round_trip(status in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0x08, 0x28]);
        cpu.set_status(status);

        cpu.step().unwrap();
        cpu.step().unwrap();

        // PHP pushes B set, PLP restores what was pushed
        prop_assert_eq!(cpu.status(), status | 0x30);
    }
}
