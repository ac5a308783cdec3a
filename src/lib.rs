//! # NMOS 6502 Instruction Core
//!
//! A cycle-accurate instruction core for the MOS Technology 6502 and the Ricoh 2A03
//! used in the NES, including the undocumented ("illegal") opcodes that real
//! software relies on.
//!
//! The crate decodes one opcode at a time, resolves its addressing mode, executes it
//! against the processor registers and a host-supplied memory bus, and reports the
//! exact number of clock cycles consumed. Memory mapping, peripherals, interrupt
//! scheduling and ROM loading belong to the host.
//!
//! ## Quick Start
//!
//! ```rust
//! use nmos6502::{CPU, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//! memory.write(0xFFFC, 0x00); // Reset vector low byte
//! memory.write(0xFFFD, 0x80); // Reset vector high byte
//! memory.write(0x8000, 0xA9); // LDA #$05
//! memory.write(0x8001, 0x05);
//!
//! let mut cpu = CPU::new(memory);
//! let cycles = cpu.step().unwrap();
//!
//! assert_eq!(cpu.a(), 0x05);
//! assert_eq!(cpu.pc(), 0x8002);
//! assert_eq!(cycles, 2);
//! ```
//!
//! ## Sharing the Opcode Table
//!
//! The 256-entry opcode table is built once and handed to every CPU explicitly:
//!
//! ```rust
//! use std::sync::Arc;
//! use nmos6502::{Config, OpcodeTable, CPU, FlatMemory};
//!
//! let table = Arc::new(OpcodeTable::build());
//! let nes = CPU::with_table(FlatMemory::new(), Arc::clone(&table), Config::ricoh_2a03());
//! let c64 = CPU::with_table(FlatMemory::new(), table, Config::nmos());
//! # let _ = (nes, c64);
//! ```
//!
//! ## Modules
//!
//! - `addressing` - Addressing modes and operand resolution
//! - `config` - Host-selectable behavior (decimal mode, unstable opcode constant)
//! - `cpu` - CPU state, accessors and the single-step execution driver
//! - `cycles` - Cycle accounting for page crossings and branches
//! - `memory` - MemoryBus trait and a flat 64KB implementation
//! - `opcodes` - Instruction kinds and the opcode table
//! - `registers` - Register file and status flags

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod cycles;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use config::Config;
pub use cpu::CPU;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Mnemonic, OpcodeEntry, OpcodeTable, TableBuilder, TableError};
pub use registers::{Registers, Status};

use thiserror::Error;

/// Errors that can occur during CPU execution.
///
/// Both variants are terminal for the current step; the host decides whether to
/// reset the CPU or stop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The opcode has no entry in the opcode table.
    ///
    /// Contains the opcode byte value for debugging purposes.
    #[error("Opcode 0x{0:02X} is not implemented")]
    UnimplementedOpcode(u8),

    /// A JAM opcode locked the processor. Only a reset recovers it.
    #[error("Processor jammed by opcode 0x{opcode:02X} at 0x{pc:04X}")]
    ProcessorJammed {
        /// The halting opcode.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: u16,
    },
}
