//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file, configuration and memory image, runs a
//! short burst of instructions, and checks the invariants every step must keep.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nmos6502::{Config, ExecutionError, FlatMemory, MemoryBus, CPU};

/// Arbitrary CPU initial state
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    decimal_mode: bool,
    unstable_magic: u8,
}

/// Memory regions the first few instructions are likely to touch
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location
    program: [u8; 16],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Window at 0x4000 for absolute addressing
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    irq_after: Option<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    // Reset vector -> 0x8000, IRQ/BRK and NMI vectors -> 0x9000
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);
    memory.write(0xFFFA, 0x00);
    memory.write(0xFFFB, 0x90);

    memory.load(0x8000, &input.memory.program);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);

    let state = &input.cpu_state;
    let config = Config::nmos()
        .with_decimal_mode(state.decimal_mode)
        .with_unstable_magic(state.unstable_magic);

    let mut cpu = CPU::with_config(memory, config);
    cpu.set_a(state.a);
    cpu.set_x(state.x);
    cpu.set_y(state.y);
    cpu.set_sp(state.sp);
    cpu.set_status(state.status);

    for i in 0..8u8 {
        if input.irq_after == Some(i) {
            cpu.irq();
        }

        let before = cpu.cycles();
        match cpu.step() {
            Ok(cycles) => {
                assert!(cycles >= 2 && cycles <= 8, "cycle count {} out of range", cycles);
                assert_eq!(cpu.cycles(), before + cycles as u64);
            }
            Err(ExecutionError::ProcessorJammed { pc, .. }) => {
                assert!(cpu.is_jammed());
                assert_eq!(cpu.pc(), pc);
                assert_eq!(cpu.cycles(), before);
                break;
            }
            Err(ExecutionError::UnimplementedOpcode(opcode)) => {
                panic!("full table is missing opcode 0x{:02X}", opcode);
            }
        }

        assert_eq!(cpu.status() & 0x20, 0x20);
    }
});
