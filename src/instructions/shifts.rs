//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left
//! - ROR: Rotate Right
//!
//! Each operates on the accumulator (Accumulator mode) or on a memory byte. The bit
//! shifted out lands in the carry flag; Z and N follow the result.

use super::modify;
use crate::{AddressingMode, MemoryBus, Operand, Registers, Status, CPU};

/// Shifts left; old bit 7 goes to C.
pub(crate) fn asl(regs: &mut Registers, value: u8) -> u8 {
    regs.set_flag(Status::CARRY, value & 0x80 != 0);
    value << 1
}

/// Shifts right; old bit 0 goes to C.
pub(crate) fn lsr(regs: &mut Registers, value: u8) -> u8 {
    regs.set_flag(Status::CARRY, value & 0x01 != 0);
    value >> 1
}

/// Rotates left through carry.
pub(crate) fn rol(regs: &mut Registers, value: u8) -> u8 {
    let carry_in = regs.flag(Status::CARRY) as u8;
    regs.set_flag(Status::CARRY, value & 0x80 != 0);
    (value << 1) | carry_in
}

/// Rotates right through carry.
pub(crate) fn ror(regs: &mut Registers, value: u8) -> u8 {
    let carry_in = regs.flag(Status::CARRY) as u8;
    regs.set_flag(Status::CARRY, value & 0x01 != 0);
    (value >> 1) | (carry_in << 7)
}

pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, op: Operand) {
    let result = modify(cpu, mode, op, asl);
    cpu.regs.status.set_zn(result);
}

pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, op: Operand) {
    let result = modify(cpu, mode, op, lsr);
    cpu.regs.status.set_zn(result);
}

pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, op: Operand) {
    let result = modify(cpu, mode, op, rol);
    cpu.regs.status.set_zn(result);
}

pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, op: Operand) {
    let result = modify(cpu, mode, op, ror);
    cpu.regs.status.set_zn(result);
}
