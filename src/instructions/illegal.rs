//! # Undocumented Instructions
//!
//! NMOS 6502 opcodes outside the official instruction set that behave reproducibly
//! (or, for a few, reproducibly enough to be relied on):
//!
//! - JAM: locks the processor until reset
//! - SLO, RLA, SRE, RRA, DCP, ISC: read-modify-write followed by an ALU operation
//!   on the new value (ORA, AND, EOR, ADC, CMP, SBC respectively)
//! - LAX, SAX, ANC, ALR, ARR, ANE, LXA, SBX, LAS: register-combining operations
//! - SHA, SHX, SHY, TAS: stores ANDed with the high byte of the address + 1
//!
//! ## Unstable opcodes
//!
//! ANE and LXA depend on analog bus behavior. Both OR the accumulator with
//! `Config::unstable_magic` before combining it with the operand.
//!
//! SHA/SHX/SHY/TAS corrupt the target address on real parts when indexing crosses a
//! page. This core always stores `register & (H + 1)`, where H is the high byte of
//! the computed effective address, and always stores it at that address.

use super::alu::{add, compare, subtract};
use super::shifts::{asl, lsr, rol, ror};
use super::write_back;
use crate::{ExecutionError, MemoryBus, OpcodeEntry, Operand, Status, CPU};

/// Halts the processor. PC is rewound to the JAM opcode and the CPU stays jammed
/// until reset.
pub(crate) fn execute_jam<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
) -> Result<(), ExecutionError> {
    let pc = cpu.regs.pc.wrapping_sub(entry.size_bytes() as u16);
    cpu.regs.pc = pc;
    cpu.jammed = true;
    Err(ExecutionError::ProcessorJammed {
        opcode: entry.opcode,
        pc,
    })
}

/// SLO: ASL memory, then ORA.
pub(crate) fn execute_slo<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let shifted = asl(&mut cpu.regs, op.value);
    write_back(cpu, op, shifted);
    let result = cpu.regs.a | shifted;
    cpu.regs.load_a(result);
}

/// RLA: ROL memory, then AND.
pub(crate) fn execute_rla<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let rotated = rol(&mut cpu.regs, op.value);
    write_back(cpu, op, rotated);
    let result = cpu.regs.a & rotated;
    cpu.regs.load_a(result);
}

/// SRE: LSR memory, then EOR.
pub(crate) fn execute_sre<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let shifted = lsr(&mut cpu.regs, op.value);
    write_back(cpu, op, shifted);
    let result = cpu.regs.a ^ shifted;
    cpu.regs.load_a(result);
}

/// RRA: ROR memory, then ADC using the carry the rotate produced.
pub(crate) fn execute_rra<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let rotated = ror(&mut cpu.regs, op.value);
    write_back(cpu, op, rotated);
    add(cpu, rotated);
}

/// DCP: DEC memory, then CMP.
pub(crate) fn execute_dcp<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let decremented = op.value.wrapping_sub(1);
    write_back(cpu, op, decremented);
    let a = cpu.regs.a;
    compare(&mut cpu.regs, a, decremented);
}

/// ISC: INC memory, then SBC.
pub(crate) fn execute_isc<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let incremented = op.value.wrapping_add(1);
    write_back(cpu, op, incremented);
    subtract(cpu, incremented);
}

/// LAX: load A and X with the same value.
pub(crate) fn execute_lax<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    cpu.regs.a = op.value;
    cpu.regs.load_x(op.value);
}

/// SAX: store A AND X. No flags.
pub(crate) fn execute_sax<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    cpu.memory.write(op.address, cpu.regs.a & cpu.regs.x);
}

/// ANC: AND immediate, then copy N into C.
pub(crate) fn execute_anc<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let result = cpu.regs.a & op.value;
    cpu.regs.load_a(result);
    cpu.regs.set_flag(Status::CARRY, result & 0x80 != 0);
}

/// ALR: AND immediate, then LSR A.
pub(crate) fn execute_alr<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let masked = cpu.regs.a & op.value;
    let result = lsr(&mut cpu.regs, masked);
    cpu.regs.load_a(result);
}

/// ARR: AND immediate, then ROR A with unusual C and V.
///
/// Binary mode: C = bit 6 of the result, V = bit 6 XOR bit 5. With decimal
/// arithmetic active, N/Z/V come from the rotate and each nibble is BCD-fixed based
/// on the pre-rotate value, the high fix also producing C.
pub(crate) fn execute_arr<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let masked = cpu.regs.a & op.value;
    let carry_in = cpu.regs.flag(Status::CARRY);
    let mut result = (masked >> 1) | ((carry_in as u8) << 7);

    if cpu.config.decimal_mode && cpu.regs.flag(Status::DECIMAL) {
        cpu.regs.set_flag(Status::NEGATIVE, carry_in);
        cpu.regs.set_flag(Status::ZERO, result == 0);
        cpu.regs.set_flag(Status::OVERFLOW, (masked ^ result) & 0x40 != 0);

        if (masked & 0x0F) + (masked & 0x01) > 0x05 {
            result = (result & 0xF0) | (result.wrapping_add(0x06) & 0x0F);
        }
        let high_fix = (masked as u16 & 0xF0) + (masked as u16 & 0x10) > 0x50;
        if high_fix {
            result = result.wrapping_add(0x60);
        }
        cpu.regs.set_flag(Status::CARRY, high_fix);
        cpu.regs.a = result;
    } else {
        cpu.regs.load_a(result);
        cpu.regs.set_flag(Status::CARRY, result & 0x40 != 0);
        cpu.regs.set_flag(Status::OVERFLOW, ((result >> 6) ^ (result >> 5)) & 0x01 != 0);
    }
}

/// ANE (XAA): A = (A | magic) & X & immediate.
pub(crate) fn execute_ane<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let result = (cpu.regs.a | cpu.config.unstable_magic) & cpu.regs.x & op.value;
    cpu.regs.load_a(result);
}

/// LXA: A = X = (A | magic) & immediate.
pub(crate) fn execute_lxa<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let result = (cpu.regs.a | cpu.config.unstable_magic) & op.value;
    cpu.regs.a = result;
    cpu.regs.load_x(result);
}

/// SBX: X = (A & X) - immediate, flags as CMP. Ignores carry-in and decimal mode.
pub(crate) fn execute_sbx<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let masked = cpu.regs.a & cpu.regs.x;
    compare(&mut cpu.regs, masked, op.value);
    cpu.regs.x = masked.wrapping_sub(op.value);
}

/// LAS: A = X = SP = SP & memory.
pub(crate) fn execute_las<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let result = cpu.regs.sp & op.value;
    cpu.regs.a = result;
    cpu.regs.sp = result;
    cpu.regs.load_x(result);
}

/// High byte of the effective address plus one, the mask the SHx family applies.
fn high_byte_plus_one(address: u16) -> u8 {
    ((address >> 8) as u8).wrapping_add(1)
}

/// SHA (AHX): store A & X & (H + 1).
pub(crate) fn execute_sha<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let value = cpu.regs.a & cpu.regs.x & high_byte_plus_one(op.address);
    cpu.memory.write(op.address, value);
}

/// SHX: store X & (H + 1).
pub(crate) fn execute_shx<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let value = cpu.regs.x & high_byte_plus_one(op.address);
    cpu.memory.write(op.address, value);
}

/// SHY: store Y & (H + 1).
pub(crate) fn execute_shy<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let value = cpu.regs.y & high_byte_plus_one(op.address);
    cpu.memory.write(op.address, value);
}

/// TAS (SHS): SP = A & X, then store SP & (H + 1).
pub(crate) fn execute_tas<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    cpu.regs.sp = cpu.regs.a & cpu.regs.x;
    let value = cpu.regs.sp & high_byte_plus_one(op.address);
    cpu.memory.write(op.address, value);
}
