//! # Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED, CLV: set or clear a single status flag.
//!
//! SED sets the flag on every part; whether it changes arithmetic is decided by
//! `Config::decimal_mode`.

use crate::{MemoryBus, Status, CPU};

pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(Status::CARRY, false);
}

pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(Status::CARRY, true);
}

pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(Status::INTERRUPT_DISABLE, false);
}

pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(Status::INTERRUPT_DISABLE, true);
}

pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(Status::DECIMAL, false);
}

pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(Status::DECIMAL, true);
}

pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(Status::OVERFLOW, false);
}
