//! # Increment and Decrement Instructions
//!
//! - INC, DEC: memory operand, written back
//! - INX, INY, DEX, DEY: index registers
//!
//! All wrap at 8 bits, leave C alone and set Z and N from the result.

use super::write_back;
use crate::{MemoryBus, Operand, CPU};

pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let result = op.value.wrapping_add(1);
    write_back(cpu, op, result);
    cpu.regs.status.set_zn(result);
}

pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    let result = op.value.wrapping_sub(1);
    write_back(cpu, op, result);
    cpu.regs.status.set_zn(result);
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    let x = cpu.regs.x.wrapping_add(1);
    cpu.regs.load_x(x);
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    let y = cpu.regs.y.wrapping_add(1);
    cpu.regs.load_y(y);
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    let x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.load_x(x);
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    let y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.load_y(y);
}
