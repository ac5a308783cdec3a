//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: load a register from the operand, setting Z and N
//! - STA, STX, STY: store a register to the effective address, no flag changes

use crate::{MemoryBus, Operand, CPU};

pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    cpu.regs.load_a(op.value);
}

pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    cpu.regs.load_x(op.value);
}

pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    cpu.regs.load_y(op.value);
}

pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    cpu.memory.write(op.address, cpu.regs.a);
}

pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    cpu.memory.write(op.address, cpu.regs.x);
}

pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand) {
    cpu.memory.write(op.address, cpu.regs.y);
}
