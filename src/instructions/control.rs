//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR: Jump to subroutine
//! - RTS: Return from subroutine
//! - BRK: Force interrupt
//! - RTI: Return from interrupt
//! - NOP: No operation (all documented and undocumented variants)
//!
//! BRK is a software interrupt that:
//! 1. Pushes PC+2 to the stack (high byte first, then low byte)
//! 2. Pushes processor status to stack with B flag set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from IRQ vector at $FFFE/F

use crate::cpu::IRQ_VECTOR;
use crate::{MemoryBus, Operand, Status, CPU};

/// Executes the JMP (Jump) instruction.
///
/// The resolver has already applied the indirect page-wrap bug for JMP ($xxFF).
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    cpu.regs.pc = op.address;
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (return address - 1),
/// high byte first, then jumps.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let return_address = cpu.regs.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.regs.pc = op.address;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the return address (low byte first) and adds one.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    let return_address = cpu.pull_word();
    cpu.regs.pc = return_address.wrapping_add(1);
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// The padding byte after the opcode has already been consumed, so PC is the
/// opcode address + 2.
///
/// Flags affected:
/// - B: Set to 1 (in the pushed status byte, not in the register)
/// - I: Set to 1
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push_word(cpu.regs.pc);

    let status = cpu.regs.status | Status::BREAK | Status::UNUSED;
    cpu.push(status.bits());

    cpu.regs.set_flag(Status::INTERRUPT_DISABLE, true);
    cpu.regs.pc = cpu.memory.read_word(IRQ_VECTOR);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls status, then PC (low byte first). The Break bit is not a real latch: the
/// pulled copy is ignored and the register keeps its current B value. Bit 5 always
/// reads as 1.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let pulled = Status::from_byte(cpu.pull()) - Status::BREAK;
    let kept = cpu.regs.status & Status::BREAK;
    cpu.regs.status = pulled | kept;

    cpu.regs.pc = cpu.pull_word();
}

/// NOP and its undocumented variants. Any operand bytes were consumed by the
/// resolver; nothing else changes.
pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>) {}
