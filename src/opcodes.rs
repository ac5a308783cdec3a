//! # Opcode Table
//!
//! This module contains the instruction kinds and the 256-entry opcode table that
//! maps each opcode byte to its instruction, addressing mode and base cycle cost.
//!
//! The table is assembled at startup from two sets:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 undocumented opcodes** - JAMs, NOP variants and the combined
//!   read-modify-write and register-combining instructions
//!
//! Together they cover all 256 opcode values. Assigning the same opcode twice is a
//! defect in the table definition and aborts construction.

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::addressing::AddressingMode;

/// Instruction kind. Several opcodes share one kind, differing only in addressing
/// mode and cycle cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    // Documented
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,

    // Undocumented
    Alr,
    Anc,
    Ane,
    Arr,
    Dcp,
    Isc,
    Jam,
    Las,
    Lax,
    Lxa,
    Rla,
    Rra,
    Sax,
    Sbx,
    Sha,
    Shx,
    Shy,
    Slo,
    Sre,
    Tas,
    Usbc,
}

impl Mnemonic {
    /// Assembler mnemonic, for diagnostics and tracing.
    pub fn name(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
            Mnemonic::Alr => "ALR",
            Mnemonic::Anc => "ANC",
            Mnemonic::Ane => "ANE",
            Mnemonic::Arr => "ARR",
            Mnemonic::Dcp => "DCP",
            Mnemonic::Isc => "ISC",
            Mnemonic::Jam => "JAM",
            Mnemonic::Las => "LAS",
            Mnemonic::Lax => "LAX",
            Mnemonic::Lxa => "LXA",
            Mnemonic::Rla => "RLA",
            Mnemonic::Rra => "RRA",
            Mnemonic::Sax => "SAX",
            Mnemonic::Sbx => "SBX",
            Mnemonic::Sha => "SHA",
            Mnemonic::Shx => "SHX",
            Mnemonic::Shy => "SHY",
            Mnemonic::Slo => "SLO",
            Mnemonic::Sre => "SRE",
            Mnemonic::Tas => "TAS",
            Mnemonic::Usbc => "USBC",
        }
    }

    /// Whether the instruction reads its memory operand.
    ///
    /// Stores and jumps only need the effective address, so the resolver skips the
    /// data read for them.
    pub fn reads_operand(self) -> bool {
        !matches!(
            self,
            Mnemonic::Sta
                | Mnemonic::Stx
                | Mnemonic::Sty
                | Mnemonic::Sax
                | Mnemonic::Sha
                | Mnemonic::Shx
                | Mnemonic::Shy
                | Mnemonic::Tas
                | Mnemonic::Jmp
                | Mnemonic::Jsr
        )
    }

    /// Whether this is a conditional branch.
    pub fn is_branch(self) -> bool {
        matches!(
            self,
            Mnemonic::Bcc
                | Mnemonic::Bcs
                | Mnemonic::Beq
                | Mnemonic::Bmi
                | Mnemonic::Bne
                | Mnemonic::Bpl
                | Mnemonic::Bvc
                | Mnemonic::Bvs
        )
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One slot of the opcode table.
///
/// # Examples
///
/// ```
/// use nmos6502::{AddressingMode, Mnemonic, OpcodeTable};
///
/// let table = OpcodeTable::build();
/// let lda_imm = table.get(0xA9).unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Instruction kind.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this opcode.
    pub mode: AddressingMode,

    /// Opcode byte (equal to the slot index).
    pub opcode: u8,

    /// Cycle cost before page crossing and branch penalties.
    pub base_cycles: u8,
}

impl OpcodeEntry {
    /// Total instruction size in bytes (opcode + operands).
    pub fn size_bytes(&self) -> u8 {
        1 + self.mode.operand_bytes()
    }
}

/// Errors raised while assembling an opcode table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// An opcode was loaded into a slot that is already occupied.
    #[error("Cannot load {attempted} over existing {existing} at opcode 0x{opcode:02X}")]
    DuplicateOpcodeAssignment {
        opcode: u8,
        existing: Mnemonic,
        attempted: Mnemonic,
    },
}

/// Incrementally assembles an [`OpcodeTable`], rejecting duplicate assignments.
///
/// # Examples
///
/// ```
/// use nmos6502::{AddressingMode, Mnemonic, TableBuilder, TableError};
///
/// let mut builder = TableBuilder::new();
/// builder.load(0xEA, Mnemonic::Nop, AddressingMode::Implied, 2).unwrap();
///
/// let err = builder
///     .load(0xEA, Mnemonic::Nop, AddressingMode::Implied, 2)
///     .unwrap_err();
/// assert!(matches!(err, TableError::DuplicateOpcodeAssignment { opcode: 0xEA, .. }));
/// ```
#[derive(Debug, Clone)]
pub struct TableBuilder {
    entries: [Option<OpcodeEntry>; 256],
}

impl TableBuilder {
    /// Creates a builder with all 256 slots empty.
    pub fn new() -> Self {
        Self {
            entries: [None; 256],
        }
    }

    /// Assigns `opcode`. Fails if the slot is already taken.
    pub fn load(
        &mut self,
        opcode: u8,
        mnemonic: Mnemonic,
        mode: AddressingMode,
        base_cycles: u8,
    ) -> Result<&mut Self, TableError> {
        let slot = &mut self.entries[opcode as usize];
        if let Some(existing) = slot {
            return Err(TableError::DuplicateOpcodeAssignment {
                opcode,
                existing: existing.mnemonic,
                attempted: mnemonic,
            });
        }
        *slot = Some(OpcodeEntry {
            mnemonic,
            mode,
            opcode,
            base_cycles,
        });
        Ok(self)
    }

    /// Loads the 151 documented opcodes.
    pub fn load_legal(&mut self) -> Result<&mut Self, TableError> {
        self.load_set(sets::LEGAL)
    }

    /// Loads the 105 undocumented opcodes.
    pub fn load_illegal(&mut self) -> Result<&mut Self, TableError> {
        self.load_set(sets::ILLEGAL)
    }

    fn load_set(&mut self, set: &[sets::Definition]) -> Result<&mut Self, TableError> {
        for &(opcode, mnemonic, mode, cycles) in set {
            self.load(opcode, mnemonic, mode, cycles)?;
        }
        Ok(self)
    }

    /// Freezes the builder into an immutable table.
    pub fn finish(&self) -> OpcodeTable {
        let table = OpcodeTable {
            entries: self.entries,
        };
        debug!("opcode table built with {} of 256 slots occupied", table.len());
        table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable 256-slot opcode table, indexed by opcode byte.
///
/// Built once at startup and shared read-only (typically behind an `Arc`) by any
/// number of CPUs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeTable {
    entries: [Option<OpcodeEntry>; 256],
}

impl OpcodeTable {
    /// Builds the complete table: documented opcodes first, then undocumented ones.
    ///
    /// # Panics
    ///
    /// Panics if any opcode is defined twice. That is a defect in the table
    /// definitions, never a runtime condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use nmos6502::OpcodeTable;
    ///
    /// let table = OpcodeTable::build();
    /// assert_eq!(table.len(), 256);
    /// ```
    pub fn build() -> Self {
        match Self::try_build() {
            Ok(table) => table,
            Err(e) => panic!("invalid opcode table: {e}"),
        }
    }

    /// Builds the complete table, reporting duplicate assignments as an error.
    pub fn try_build() -> Result<Self, TableError> {
        Ok(TableBuilder::new().load_legal()?.load_illegal()?.finish())
    }

    /// Returns the entry for `opcode`, or `None` if the opcode is not modeled.
    #[inline]
    pub fn get(&self, opcode: u8) -> Option<&OpcodeEntry> {
        self.entries[opcode as usize].as_ref()
    }

    /// Iterates over occupied slots in opcode order.
    pub fn iter(&self) -> impl Iterator<Item = &OpcodeEntry> {
        self.entries.iter().flatten()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for OpcodeTable {
    fn default() -> Self {
        Self::build()
    }
}

/// Opcode definitions as `(opcode, kind, mode, base cycles)`.
mod sets {
    use super::Mnemonic::{self, *};
    use crate::addressing::AddressingMode::{self, *};

    pub(super) type Definition = (u8, Mnemonic, AddressingMode, u8);

    /// Documented NMOS 6502 opcodes. BRK is modeled as taking one padding byte so
    /// the pushed return address is the opcode address + 2.
    pub(super) const LEGAL: &[Definition] = &[
        (0x00, Brk, Immediate, 7),
        (0x01, Ora, IndexedIndirect, 6),
        (0x05, Ora, ZeroPage, 3),
        (0x06, Asl, ZeroPage, 5),
        (0x08, Php, Implied, 3),
        (0x09, Ora, Immediate, 2),
        (0x0A, Asl, Accumulator, 2),
        (0x0D, Ora, Absolute, 4),
        (0x0E, Asl, Absolute, 6),
        (0x10, Bpl, Relative, 2),
        (0x11, Ora, IndirectIndexed, 5),
        (0x15, Ora, ZeroPageX, 4),
        (0x16, Asl, ZeroPageX, 6),
        (0x18, Clc, Implied, 2),
        (0x19, Ora, AbsoluteY, 4),
        (0x1D, Ora, AbsoluteX, 4),
        (0x1E, Asl, AbsoluteX, 7),
        (0x20, Jsr, Absolute, 6),
        (0x21, And, IndexedIndirect, 6),
        (0x24, Bit, ZeroPage, 3),
        (0x25, And, ZeroPage, 3),
        (0x26, Rol, ZeroPage, 5),
        (0x28, Plp, Implied, 4),
        (0x29, And, Immediate, 2),
        (0x2A, Rol, Accumulator, 2),
        (0x2C, Bit, Absolute, 4),
        (0x2D, And, Absolute, 4),
        (0x2E, Rol, Absolute, 6),
        (0x30, Bmi, Relative, 2),
        (0x31, And, IndirectIndexed, 5),
        (0x35, And, ZeroPageX, 4),
        (0x36, Rol, ZeroPageX, 6),
        (0x38, Sec, Implied, 2),
        (0x39, And, AbsoluteY, 4),
        (0x3D, And, AbsoluteX, 4),
        (0x3E, Rol, AbsoluteX, 7),
        (0x40, Rti, Implied, 6),
        (0x41, Eor, IndexedIndirect, 6),
        (0x45, Eor, ZeroPage, 3),
        (0x46, Lsr, ZeroPage, 5),
        (0x48, Pha, Implied, 3),
        (0x49, Eor, Immediate, 2),
        (0x4A, Lsr, Accumulator, 2),
        (0x4C, Jmp, Absolute, 3),
        (0x4D, Eor, Absolute, 4),
        (0x4E, Lsr, Absolute, 6),
        (0x50, Bvc, Relative, 2),
        (0x51, Eor, IndirectIndexed, 5),
        (0x55, Eor, ZeroPageX, 4),
        (0x56, Lsr, ZeroPageX, 6),
        (0x58, Cli, Implied, 2),
        (0x59, Eor, AbsoluteY, 4),
        (0x5D, Eor, AbsoluteX, 4),
        (0x5E, Lsr, AbsoluteX, 7),
        (0x60, Rts, Implied, 6),
        (0x61, Adc, IndexedIndirect, 6),
        (0x65, Adc, ZeroPage, 3),
        (0x66, Ror, ZeroPage, 5),
        (0x68, Pla, Implied, 4),
        (0x69, Adc, Immediate, 2),
        (0x6A, Ror, Accumulator, 2),
        (0x6C, Jmp, Indirect, 5),
        (0x6D, Adc, Absolute, 4),
        (0x6E, Ror, Absolute, 6),
        (0x70, Bvs, Relative, 2),
        (0x71, Adc, IndirectIndexed, 5),
        (0x75, Adc, ZeroPageX, 4),
        (0x76, Ror, ZeroPageX, 6),
        (0x78, Sei, Implied, 2),
        (0x79, Adc, AbsoluteY, 4),
        (0x7D, Adc, AbsoluteX, 4),
        (0x7E, Ror, AbsoluteX, 7),
        (0x81, Sta, IndexedIndirect, 6),
        (0x84, Sty, ZeroPage, 3),
        (0x85, Sta, ZeroPage, 3),
        (0x86, Stx, ZeroPage, 3),
        (0x88, Dey, Implied, 2),
        (0x8A, Txa, Implied, 2),
        (0x8C, Sty, Absolute, 4),
        (0x8D, Sta, Absolute, 4),
        (0x8E, Stx, Absolute, 4),
        (0x90, Bcc, Relative, 2),
        (0x91, Sta, IndirectIndexed, 6),
        (0x94, Sty, ZeroPageX, 4),
        (0x95, Sta, ZeroPageX, 4),
        (0x96, Stx, ZeroPageY, 4),
        (0x98, Tya, Implied, 2),
        (0x99, Sta, AbsoluteY, 5),
        (0x9A, Txs, Implied, 2),
        (0x9D, Sta, AbsoluteX, 5),
        (0xA0, Ldy, Immediate, 2),
        (0xA1, Lda, IndexedIndirect, 6),
        (0xA2, Ldx, Immediate, 2),
        (0xA4, Ldy, ZeroPage, 3),
        (0xA5, Lda, ZeroPage, 3),
        (0xA6, Ldx, ZeroPage, 3),
        (0xA8, Tay, Implied, 2),
        (0xA9, Lda, Immediate, 2),
        (0xAA, Tax, Implied, 2),
        (0xAC, Ldy, Absolute, 4),
        (0xAD, Lda, Absolute, 4),
        (0xAE, Ldx, Absolute, 4),
        (0xB0, Bcs, Relative, 2),
        (0xB1, Lda, IndirectIndexed, 5),
        (0xB4, Ldy, ZeroPageX, 4),
        (0xB5, Lda, ZeroPageX, 4),
        (0xB6, Ldx, ZeroPageY, 4),
        (0xB8, Clv, Implied, 2),
        (0xB9, Lda, AbsoluteY, 4),
        (0xBA, Tsx, Implied, 2),
        (0xBC, Ldy, AbsoluteX, 4),
        (0xBD, Lda, AbsoluteX, 4),
        (0xBE, Ldx, AbsoluteY, 4),
        (0xC0, Cpy, Immediate, 2),
        (0xC1, Cmp, IndexedIndirect, 6),
        (0xC4, Cpy, ZeroPage, 3),
        (0xC5, Cmp, ZeroPage, 3),
        (0xC6, Dec, ZeroPage, 5),
        (0xC8, Iny, Implied, 2),
        (0xC9, Cmp, Immediate, 2),
        (0xCA, Dex, Implied, 2),
        (0xCC, Cpy, Absolute, 4),
        (0xCD, Cmp, Absolute, 4),
        (0xCE, Dec, Absolute, 6),
        (0xD0, Bne, Relative, 2),
        (0xD1, Cmp, IndirectIndexed, 5),
        (0xD5, Cmp, ZeroPageX, 4),
        (0xD6, Dec, ZeroPageX, 6),
        (0xD8, Cld, Implied, 2),
        (0xD9, Cmp, AbsoluteY, 4),
        (0xDD, Cmp, AbsoluteX, 4),
        (0xDE, Dec, AbsoluteX, 7),
        (0xE0, Cpx, Immediate, 2),
        (0xE1, Sbc, IndexedIndirect, 6),
        (0xE4, Cpx, ZeroPage, 3),
        (0xE5, Sbc, ZeroPage, 3),
        (0xE6, Inc, ZeroPage, 5),
        (0xE8, Inx, Implied, 2),
        (0xE9, Sbc, Immediate, 2),
        (0xEA, Nop, Implied, 2),
        (0xEC, Cpx, Absolute, 4),
        (0xED, Sbc, Absolute, 4),
        (0xEE, Inc, Absolute, 6),
        (0xF0, Beq, Relative, 2),
        (0xF1, Sbc, IndirectIndexed, 5),
        (0xF5, Sbc, ZeroPageX, 4),
        (0xF6, Inc, ZeroPageX, 6),
        (0xF8, Sed, Implied, 2),
        (0xF9, Sbc, AbsoluteY, 4),
        (0xFD, Sbc, AbsoluteX, 4),
        (0xFE, Inc, AbsoluteX, 7),
    ];

    /// Undocumented NMOS opcodes. 0xEA is only defined in the documented set.
    pub(super) const ILLEGAL: &[Definition] = &[
        // JAM
        (0x02, Jam, Implied, 2),
        (0x12, Jam, Implied, 2),
        (0x22, Jam, Implied, 2),
        (0x32, Jam, Implied, 2),
        (0x42, Jam, Implied, 2),
        (0x52, Jam, Implied, 2),
        (0x62, Jam, Implied, 2),
        (0x72, Jam, Implied, 2),
        (0x92, Jam, Implied, 2),
        (0xB2, Jam, Implied, 2),
        (0xD2, Jam, Implied, 2),
        (0xF2, Jam, Implied, 2),
        // NOP
        (0x1A, Nop, Implied, 2),
        (0x3A, Nop, Implied, 2),
        (0x5A, Nop, Implied, 2),
        (0x7A, Nop, Implied, 2),
        (0xDA, Nop, Implied, 2),
        (0xFA, Nop, Implied, 2),
        (0x80, Nop, Immediate, 2),
        (0x82, Nop, Immediate, 2),
        (0x89, Nop, Immediate, 2),
        (0xC2, Nop, Immediate, 2),
        (0xE2, Nop, Immediate, 2),
        (0x04, Nop, ZeroPage, 3),
        (0x44, Nop, ZeroPage, 3),
        (0x64, Nop, ZeroPage, 3),
        (0x14, Nop, ZeroPageX, 4),
        (0x34, Nop, ZeroPageX, 4),
        (0x54, Nop, ZeroPageX, 4),
        (0x74, Nop, ZeroPageX, 4),
        (0xD4, Nop, ZeroPageX, 4),
        (0xF4, Nop, ZeroPageX, 4),
        (0x0C, Nop, Absolute, 4),
        (0x1C, Nop, AbsoluteX, 4),
        (0x3C, Nop, AbsoluteX, 4),
        (0x5C, Nop, AbsoluteX, 4),
        (0x7C, Nop, AbsoluteX, 4),
        (0xDC, Nop, AbsoluteX, 4),
        (0xFC, Nop, AbsoluteX, 4),
        // Immediate combinations
        (0x4B, Alr, Immediate, 2),
        (0x0B, Anc, Immediate, 2),
        (0x2B, Anc, Immediate, 2),
        (0x8B, Ane, Immediate, 2),
        (0x6B, Arr, Immediate, 2),
        (0xAB, Lxa, Immediate, 2),
        (0xCB, Sbx, Immediate, 2),
        (0xEB, Usbc, Immediate, 2),
        // DCP
        (0xC7, Dcp, ZeroPage, 5),
        (0xD7, Dcp, ZeroPageX, 6),
        (0xCF, Dcp, Absolute, 6),
        (0xDF, Dcp, AbsoluteX, 7),
        (0xDB, Dcp, AbsoluteY, 7),
        (0xC3, Dcp, IndexedIndirect, 8),
        (0xD3, Dcp, IndirectIndexed, 8),
        // ISC
        (0xE7, Isc, ZeroPage, 5),
        (0xF7, Isc, ZeroPageX, 6),
        (0xEF, Isc, Absolute, 6),
        (0xFF, Isc, AbsoluteX, 7),
        (0xFB, Isc, AbsoluteY, 7),
        (0xE3, Isc, IndexedIndirect, 8),
        (0xF3, Isc, IndirectIndexed, 8),
        // LAS
        (0xBB, Las, AbsoluteY, 4),
        // LAX
        (0xA7, Lax, ZeroPage, 3),
        (0xB7, Lax, ZeroPageY, 4),
        (0xAF, Lax, Absolute, 4),
        (0xBF, Lax, AbsoluteY, 4),
        (0xA3, Lax, IndexedIndirect, 6),
        (0xB3, Lax, IndirectIndexed, 5),
        // RLA
        (0x27, Rla, ZeroPage, 5),
        (0x37, Rla, ZeroPageX, 6),
        (0x2F, Rla, Absolute, 6),
        (0x3F, Rla, AbsoluteX, 7),
        (0x3B, Rla, AbsoluteY, 7),
        (0x23, Rla, IndexedIndirect, 8),
        (0x33, Rla, IndirectIndexed, 8),
        // RRA
        (0x67, Rra, ZeroPage, 5),
        (0x77, Rra, ZeroPageX, 6),
        (0x6F, Rra, Absolute, 6),
        (0x7F, Rra, AbsoluteX, 7),
        (0x7B, Rra, AbsoluteY, 7),
        (0x63, Rra, IndexedIndirect, 8),
        (0x73, Rra, IndirectIndexed, 8),
        // SAX
        (0x87, Sax, ZeroPage, 3),
        (0x97, Sax, ZeroPageY, 4),
        (0x8F, Sax, Absolute, 4),
        (0x83, Sax, IndexedIndirect, 6),
        // Address-dependent stores
        (0x9F, Sha, AbsoluteY, 5),
        (0x93, Sha, IndirectIndexed, 6),
        (0x9E, Shx, AbsoluteY, 5),
        (0x9C, Shy, AbsoluteX, 5),
        (0x9B, Tas, AbsoluteY, 5),
        // SLO
        (0x07, Slo, ZeroPage, 5),
        (0x17, Slo, ZeroPageX, 6),
        (0x0F, Slo, Absolute, 6),
        (0x1F, Slo, AbsoluteX, 7),
        (0x1B, Slo, AbsoluteY, 7),
        (0x03, Slo, IndexedIndirect, 8),
        (0x13, Slo, IndirectIndexed, 8),
        // SRE
        (0x47, Sre, ZeroPage, 5),
        (0x57, Sre, ZeroPageX, 6),
        (0x4F, Sre, Absolute, 6),
        (0x5F, Sre, AbsoluteX, 7),
        (0x5B, Sre, AbsoluteY, 7),
        (0x43, Sre, IndexedIndirect, 8),
        (0x53, Sre, IndirectIndexed, 8),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_sizes() {
        assert_eq!(sets::LEGAL.len(), 151);
        assert_eq!(sets::ILLEGAL.len(), 105);
    }

    #[test]
    fn test_full_table_occupies_every_slot() {
        let table = OpcodeTable::build();
        assert_eq!(table.len(), 256);
        for opcode in 0..=255u8 {
            let entry = table.get(opcode).expect("slot should be occupied");
            assert_eq!(entry.opcode, opcode);
        }
    }

    #[test]
    fn test_loading_sets_twice_is_rejected() {
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
    fn test_names() {
        assert_eq!(Mnemonic::Usbc.name(), "USBC");
        assert_eq!(Mnemonic::Lax.to_string(), "LAX");
    }
}
