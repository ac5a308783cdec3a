//! # Stack Instructions
//!
//! - PHA: Push accumulator
//! - PHP: Push processor status (B and bit 5 forced to 1 on the pushed copy)
//! - PLA: Pull accumulator (sets Z and N)
//! - PLP: Pull processor status (restored verbatim, bit 5 reads as 1)
//!
//! The stack lives at 0x0100-0x01FF; SP wraps modulo 256.

use crate::{MemoryBus, Status, CPU};

pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push(cpu.regs.a);
}

pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.regs.status | Status::BREAK | Status::UNUSED;
    cpu.push(status.bits());
}

pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull();
    cpu.regs.load_a(value);
}

pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull();
    cpu.regs.status = Status::from_byte(value);
}
