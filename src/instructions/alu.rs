//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry (also USBC, $EB)
//! - AND, ORA, EOR: Bitwise logic
//! - CMP, CPX, CPY: Compare
//! - BIT: Bit test
//!
//! The add/subtract and compare cores are shared with the undocumented
//! read-modify-write instructions (RRA, ISC, DCP).

use crate::{MemoryBus, Operand, Registers, Status, CPU};

/// Adds `value` and the carry flag to A in binary mode, setting C, V, Z and N.
fn add_binary(regs: &mut Registers, value: u8) {
    let a = regs.a;
    let carry_in = regs.flag(Status::CARRY) as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    regs.set_flag(Status::CARRY, sum > 0xFF);
    // Overflow when both operands share a sign the result does not
    regs.set_flag(Status::OVERFLOW, (a ^ result) & (value ^ result) & 0x80 != 0);
    regs.load_a(result);
}

/// NMOS decimal addition.
///
/// Z comes from the binary sum, N and V from the high nibble before the final
/// decimal adjust, C from the adjusted high nibble.
fn add_decimal(regs: &mut Registers, value: u8) {
    let a = regs.a as u16;
    let v = value as u16;
    let carry_in = regs.flag(Status::CARRY) as u16;

    let binary = (a + v + carry_in) as u8;

    let mut lo = (a & 0x0F) + (v & 0x0F) + carry_in;
    let mut hi = (a & 0xF0) + (v & 0xF0);
    if lo > 0x09 {
        lo += 0x06;
        hi += 0x10;
    }

    regs.set_flag(Status::NEGATIVE, hi & 0x80 != 0);
    regs.set_flag(Status::OVERFLOW, !(a ^ v) & (a ^ hi) & 0x80 != 0);

    if hi > 0x90 {
        hi += 0x60;
    }

    regs.set_flag(Status::CARRY, hi > 0xFF);
    regs.set_flag(Status::ZERO, binary == 0);
    regs.a = ((hi & 0xF0) | (lo & 0x0F)) as u8;
}

/// NMOS decimal subtraction. All flags follow the binary result.
fn sub_decimal(regs: &mut Registers, value: u8) {
    let a = regs.a as i16;
    let v = value as i16;
    let borrow = !regs.flag(Status::CARRY) as i16;

    let mut lo = (a & 0x0F) - (v & 0x0F) - borrow;
    let mut hi = (a & 0xF0) - (v & 0xF0);
    if lo < 0 {
        lo -= 0x06;
        hi -= 0x10;
    }
    if hi < 0 {
        hi -= 0x60;
    }

    add_binary(regs, !value);
    regs.a = ((hi & 0xF0) | (lo & 0x0F)) as u8;
}

fn decimal_active<M: MemoryBus>(cpu: &CPU<M>) -> bool {
    cpu.config.decimal_mode && cpu.regs.flag(Status::DECIMAL)
}

/// ADC core: A = A + value + C, honoring decimal mode when enabled.
pub(crate) fn add<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    if decimal_active(cpu) {
        add_decimal(&mut cpu.regs, value);
    } else {
        add_binary(&mut cpu.regs, value);
    }
}

/// SBC core: A = A - value - !C, honoring decimal mode when enabled.
pub(crate) fn subtract<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    if decimal_active(cpu) {
        sub_decimal(&mut cpu.regs, value);
    } else {
        // Binary subtraction is addition of the one's complement
        add_binary(&mut cpu.regs, !value);
    }
}

/// Compare core: sets C if `register >= value`, Z and N from the difference.
pub(crate) fn compare(regs: &mut Registers, register: u8, value: u8) {
    let result = register.wrapping_sub(value);
    regs.set_flag(Status::CARRY, register >= value);
    regs.status.set_zn(result);
}

/// Executes the ADC (Add with Carry) instruction.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    add(cpu, op.value);
}

/// Executes the SBC (Subtract with Carry) instruction.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    subtract(cpu, op.value);
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let result = cpu.regs.a & op.value;
    cpu.regs.load_a(result);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let result = cpu.regs.a | op.value;
    cpu.regs.load_a(result);
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let result = cpu.regs.a ^ op.value;
    cpu.regs.load_a(result);
}

pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let a = cpu.regs.a;
    compare(&mut cpu.regs, a, op.value);
}

pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let x = cpu.regs.x;
    compare(&mut cpu.regs, x, op.value);
}

pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let y = cpu.regs.y;
    compare(&mut cpu.regs, y, op.value);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from A AND M; N and V are copied from bits 7 and 6 of M. A is unchanged.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let value = op.value;
    cpu.regs.set_flag(Status::ZERO, cpu.regs.a & value == 0);
    cpu.regs.set_flag(Status::NEGATIVE, value & 0x80 != 0);
    cpu.regs.set_flag(Status::OVERFLOW, value & 0x40 != 0);
}
