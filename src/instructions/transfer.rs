//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX set Z and N from the copied value. TXS touches no flags.

use crate::{MemoryBus, CPU};

pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    let a = cpu.regs.a;
    cpu.regs.load_x(a);
}

pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    let a = cpu.regs.a;
    cpu.regs.load_y(a);
}

pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    let x = cpu.regs.x;
    cpu.regs.load_a(x);
}

pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    let y = cpu.regs.y;
    cpu.regs.load_a(y);
}

pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    let sp = cpu.regs.sp;
    cpu.regs.load_x(sp);
}

pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.sp = cpu.regs.x;
}
