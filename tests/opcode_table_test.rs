//! Tests for opcode table construction.
//!
//! Tests cover:
//! - The full table defines all 256 opcodes exactly once
//! - Documented-only tables
//! - Duplicate assignment rejection
//! - Instruction sizes and base cycle counts for representative entries

use nmos6502::{AddressingMode, Mnemonic, OpcodeTable, TableBuilder, TableError};

#[test]
fn test_full_table_defines_every_opcode() {
    let table = OpcodeTable::build();

    assert_eq!(table.len(), 256);
    for opcode in 0..=255u8 {
        let entry = table
            .get(opcode)
            .unwrap_or_else(|| panic!("opcode 0x{:02X} should be defined", opcode));
        assert_eq!(entry.opcode, opcode);
    }
}

#[test]
fn test_documented_only_table() {
    let mut builder = TableBuilder::new();
    builder.load_legal().unwrap();
    let table = builder.finish();

    assert_eq!(table.len(), 151);
    assert_eq!(table.get(0xA9).unwrap().mnemonic, Mnemonic::Lda);
    assert!(table.get(0xA7).is_none()); // LAX zp
    assert!(table.get(0x02).is_none()); // JAM
}

#[test]
fn test_illegal_only_table() {
    let mut builder = TableBuilder::new();
    builder.load_illegal().unwrap();
    let table = builder.finish();

    assert_eq!(table.len(), 105);
    assert!(table.get(0xEA).is_none()); // NOP only lives in the documented set
    assert_eq!(table.get(0xEB).unwrap().mnemonic, Mnemonic::Usbc);
}

#[test]
fn test_duplicate_set_is_rejected() {
    let mut builder = TableBuilder::new();
    builder.load_legal().unwrap();

    let err = builder.load_legal().unwrap_err();
    assert_eq!(
        err,
        TableError::DuplicateOpcodeAssignment {
            opcode: 0x00,
            existing: Mnemonic::Brk,
            attempted: Mnemonic::Brk,
        }
    );
}

#[test]
fn test_duplicate_single_entry_is_rejected() {
    let mut builder = TableBuilder::new();
    builder.load_legal().unwrap();

    let result = builder.load(0xA9, Mnemonic::Lax, AddressingMode::Immediate, 2);
    assert!(matches!(
        result,
        Err(TableError::DuplicateOpcodeAssignment {
            opcode: 0xA9,
            existing: Mnemonic::Lda,
            attempted: Mnemonic::Lax,
        })
    ));
}

#[test]
fn test_duplicate_error_message() {
    let err = TableError::DuplicateOpcodeAssignment {
        opcode: 0xEA,
        existing: Mnemonic::Nop,
        attempted: Mnemonic::Nop,
    };
    let message = err.to_string();
    assert!(message.contains("0xEA"), "message was: {}", message);
    assert!(message.contains("NOP"), "message was: {}", message);
}

#[test]
fn test_custom_table_from_single_entries() {
    let mut builder = TableBuilder::new();
    builder
        .load(0xA9, Mnemonic::Lda, AddressingMode::Immediate, 2)
        .unwrap()
        .load(0xEA, Mnemonic::Nop, AddressingMode::Implied, 2)
        .unwrap();
    let table = builder.finish();

    assert_eq!(table.len(), 2);
    assert_eq!(table.iter().count(), 2);
}

#[test]
fn test_representative_entries() {
    let table = OpcodeTable::build();

    // (opcode, mnemonic, mode, base cycles, size)
    let cases = [
        (0x00, Mnemonic::Brk, AddressingMode::Immediate, 7, 2),
        (0x6C, Mnemonic::Jmp, AddressingMode::Indirect, 5, 3),
        (0x20, Mnemonic::Jsr, AddressingMode::Absolute, 6, 3),
        (0x0A, Mnemonic::Asl, AddressingMode::Accumulator, 2, 1),
        (0x1E, Mnemonic::Asl, AddressingMode::AbsoluteX, 7, 3),
        (0x91, Mnemonic::Sta, AddressingMode::IndirectIndexed, 6, 2),
        (0xD0, Mnemonic::Bne, AddressingMode::Relative, 2, 2),
        (0xC7, Mnemonic::Dcp, AddressingMode::ZeroPage, 5, 2),
        (0xD3, Mnemonic::Dcp, AddressingMode::IndirectIndexed, 8, 2),
        (0xBB, Mnemonic::Las, AddressingMode::AbsoluteY, 4, 3),
        (0x9C, Mnemonic::Shy, AddressingMode::AbsoluteX, 5, 3),
        (0xFC, Mnemonic::Nop, AddressingMode::AbsoluteX, 4, 3),
        (0x02, Mnemonic::Jam, AddressingMode::Implied, 2, 1),
    ];

    for (opcode, mnemonic, mode, base_cycles, size) in cases {
        let entry = table.get(opcode).unwrap();
        assert_eq!(entry.mnemonic, mnemonic, "opcode 0x{:02X}", opcode);
        assert_eq!(entry.mode, mode, "opcode 0x{:02X}", opcode);
        assert_eq!(entry.base_cycles, base_cycles, "opcode 0x{:02X}", opcode);
        assert_eq!(entry.size_bytes(), size, "opcode 0x{:02X}", opcode);
    }
}

#[test]
fn test_jam_opcodes() {
    let table = OpcodeTable::build();
    let jams: Vec<u8> = table
        .iter()
        .filter(|e| e.mnemonic == Mnemonic::Jam)
        .map(|e| e.opcode)
        .collect();

    assert_eq!(
        jams,
        vec![0x02, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2]
    );
}
