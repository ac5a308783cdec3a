//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset; the
//! resolver has already computed the target. Cycle timing varies based on whether
//! the branch is taken and whether a page boundary is crossed, and is accounted in
//! `cycles`, not here.
//!
//! No flags are affected.

use crate::cycles::branch_taken;
use crate::{MemoryBus, Mnemonic, Operand, CPU};

/// Jumps to the branch target if the condition for `mnemonic` holds.
pub(crate) fn execute_branch<M: MemoryBus>(cpu: &mut CPU<M>, mnemonic: Mnemonic, op: Operand) {
    if branch_taken(mnemonic, cpu.regs.status) {
        cpu.regs.pc = op.address;
    }
}
