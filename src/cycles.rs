//! # Cycle Accounting
//!
//! Every instruction costs its table entry's base cycles plus a per-instruction
//! adjustment:
//!
//! - Read instructions using AbsoluteX, AbsoluteY or IndirectIndexed pay +1 when the
//!   index addition crosses a page. Writes and read-modify-writes already include
//!   that cycle in their base cost.
//! - Branches pay +1 when taken and +1 more when the target is in another page.
//!
//! This is the only place variable timing is computed.

use crate::{AddressingMode, Mnemonic, OpcodeEntry, Status};

/// Whether the branch instruction `mnemonic` is taken with the given flags.
///
/// Returns false for non-branch instructions.
pub fn branch_taken(mnemonic: Mnemonic, status: Status) -> bool {
    match mnemonic {
        Mnemonic::Bcc => !status.contains(Status::CARRY),
        Mnemonic::Bcs => status.contains(Status::CARRY),
        Mnemonic::Bne => !status.contains(Status::ZERO),
        Mnemonic::Beq => status.contains(Status::ZERO),
        Mnemonic::Bpl => !status.contains(Status::NEGATIVE),
        Mnemonic::Bmi => status.contains(Status::NEGATIVE),
        Mnemonic::Bvc => !status.contains(Status::OVERFLOW),
        Mnemonic::Bvs => status.contains(Status::OVERFLOW),
        _ => false,
    }
}

/// Extra cycles over the base cost.
///
/// `pc` is the address of the instruction's opcode and `address` its effective
/// address. Neither changes the cost on NMOS parts; the resolver has already
/// reduced them to `page_crossed`. `status` is the flag state the instruction
/// executed with.
pub fn cycle_tweak(
    mnemonic: Mnemonic,
    mode: AddressingMode,
    _pc: u16,
    _address: u16,
    page_crossed: bool,
    status: Status,
) -> u8 {
    match mnemonic {
        Mnemonic::Adc
        | Mnemonic::And
        | Mnemonic::Cmp
        | Mnemonic::Eor
        | Mnemonic::Lda
        | Mnemonic::Ldx
        | Mnemonic::Ldy
        | Mnemonic::Ora
        | Mnemonic::Sbc
        | Mnemonic::Lax
        | Mnemonic::Las
        | Mnemonic::Nop => {
            let indexed = matches!(
                mode,
                AddressingMode::AbsoluteX | AddressingMode::AbsoluteY | AddressingMode::IndirectIndexed
            );
            u8::from(indexed && page_crossed)
        }
        m if m.is_branch() => {
            if branch_taken(m, status) {
                1 + u8::from(page_crossed)
            } else {
                0
            }
        }
        _ => 0,
    }
}

/// Cycles consumed by one execution of `entry`.
///
/// # Examples
///
/// ```
/// use nmos6502::{cycles, OpcodeTable, Status};
///
/// let table = OpcodeTable::build();
/// let lda_abs_x = table.get(0xBD).unwrap();
///
/// assert_eq!(cycles::cycles(lda_abs_x, 0x8000, 0x1234, false, Status::POWER_ON), 4);
/// assert_eq!(cycles::cycles(lda_abs_x, 0x8000, 0x1300, true, Status::POWER_ON), 5);
/// ```
pub fn cycles(entry: &OpcodeEntry, pc: u16, address: u16, page_crossed: bool, status: Status) -> u8 {
    entry.base_cycles + cycle_tweak(entry.mnemonic, entry.mode, pc, address, page_crossed, status)
}
