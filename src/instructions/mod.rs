//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by
//! category. Each instruction is a standalone function that receives the CPU and the
//! operand already resolved by the addressing mode; `execute` dispatches on the
//! instruction kind.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)
//! - **illegal**: Undocumented opcodes (JAM, SLO, RLA, SRE, RRA, DCP, ISC, LAX, SAX,
//!   ANC, ALR, ARR, ANE, LXA, SBX, LAS, SHA, SHX, SHY, TAS, USBC)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod illegal;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{AddressingMode, ExecutionError, MemoryBus, Mnemonic, OpcodeEntry, Operand, CPU};

/// Executes one instruction whose operand has already been resolved.
///
/// Only JAM fails; every other instruction is total.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    entry: &OpcodeEntry,
    op: Operand,
) -> Result<(), ExecutionError> {
    let mode = entry.mode;

    match entry.mnemonic {
        // Load/store
        Mnemonic::Lda => load_store::execute_lda(cpu, op),
        Mnemonic::Ldx => load_store::execute_ldx(cpu, op),
        Mnemonic::Ldy => load_store::execute_ldy(cpu, op),
        Mnemonic::Sta => load_store::execute_sta(cpu, op),
        Mnemonic::Stx => load_store::execute_stx(cpu, op),
        Mnemonic::Sty => load_store::execute_sty(cpu, op),

        // ALU
        Mnemonic::Adc => alu::execute_adc(cpu, op),
        Mnemonic::Sbc | Mnemonic::Usbc => alu::execute_sbc(cpu, op),
        Mnemonic::And => alu::execute_and(cpu, op),
        Mnemonic::Ora => alu::execute_ora(cpu, op),
        Mnemonic::Eor => alu::execute_eor(cpu, op),
        Mnemonic::Cmp => alu::execute_cmp(cpu, op),
        Mnemonic::Cpx => alu::execute_cpx(cpu, op),
        Mnemonic::Cpy => alu::execute_cpy(cpu, op),
        Mnemonic::Bit => alu::execute_bit(cpu, op),

        // Shifts
        Mnemonic::Asl => shifts::execute_asl(cpu, mode, op),
        Mnemonic::Lsr => shifts::execute_lsr(cpu, mode, op),
        Mnemonic::Rol => shifts::execute_rol(cpu, mode, op),
        Mnemonic::Ror => shifts::execute_ror(cpu, mode, op),

        // Increment/decrement
        Mnemonic::Inc => inc_dec::execute_inc(cpu, op),
        Mnemonic::Dec => inc_dec::execute_dec(cpu, op),
        Mnemonic::Inx => inc_dec::execute_inx(cpu),
        Mnemonic::Iny => inc_dec::execute_iny(cpu),
        Mnemonic::Dex => inc_dec::execute_dex(cpu),
        Mnemonic::Dey => inc_dec::execute_dey(cpu),

        // Branches
        Mnemonic::Bcc
        | Mnemonic::Bcs
        | Mnemonic::Beq
        | Mnemonic::Bne
        | Mnemonic::Bmi
        | Mnemonic::Bpl
        | Mnemonic::Bvc
        | Mnemonic::Bvs => branches::execute_branch(cpu, entry.mnemonic, op),

        // Control flow
        Mnemonic::Jmp => control::execute_jmp(cpu, op),
        Mnemonic::Jsr => control::execute_jsr(cpu, op),
        Mnemonic::Rts => control::execute_rts(cpu),
        Mnemonic::Brk => control::execute_brk(cpu),
        Mnemonic::Rti => control::execute_rti(cpu),
        Mnemonic::Nop => control::execute_nop(cpu),

        // Stack
        Mnemonic::Pha => stack::execute_pha(cpu),
        Mnemonic::Php => stack::execute_php(cpu),
        Mnemonic::Pla => stack::execute_pla(cpu),
        Mnemonic::Plp => stack::execute_plp(cpu),

        // Flags
        Mnemonic::Clc => flags::execute_clc(cpu),
        Mnemonic::Sec => flags::execute_sec(cpu),
        Mnemonic::Cli => flags::execute_cli(cpu),
        Mnemonic::Sei => flags::execute_sei(cpu),
        Mnemonic::Cld => flags::execute_cld(cpu),
        Mnemonic::Sed => flags::execute_sed(cpu),
        Mnemonic::Clv => flags::execute_clv(cpu),

        // Transfers
        Mnemonic::Tax => transfer::execute_tax(cpu),
        Mnemonic::Tay => transfer::execute_tay(cpu),
        Mnemonic::Txa => transfer::execute_txa(cpu),
        Mnemonic::Tya => transfer::execute_tya(cpu),
        Mnemonic::Tsx => transfer::execute_tsx(cpu),
        Mnemonic::Txs => transfer::execute_txs(cpu),

        // Undocumented
        Mnemonic::Jam => return illegal::execute_jam(cpu, entry),
        Mnemonic::Slo => illegal::execute_slo(cpu, op),
        Mnemonic::Rla => illegal::execute_rla(cpu, op),
        Mnemonic::Sre => illegal::execute_sre(cpu, op),
        Mnemonic::Rra => illegal::execute_rra(cpu, op),
        Mnemonic::Dcp => illegal::execute_dcp(cpu, op),
        Mnemonic::Isc => illegal::execute_isc(cpu, op),
        Mnemonic::Lax => illegal::execute_lax(cpu, op),
        Mnemonic::Sax => illegal::execute_sax(cpu, op),
        Mnemonic::Anc => illegal::execute_anc(cpu, op),
        Mnemonic::Alr => illegal::execute_alr(cpu, op),
        Mnemonic::Arr => illegal::execute_arr(cpu, op),
        Mnemonic::Ane => illegal::execute_ane(cpu, op),
        Mnemonic::Lxa => illegal::execute_lxa(cpu, op),
        Mnemonic::Sbx => illegal::execute_sbx(cpu, op),
        Mnemonic::Las => illegal::execute_las(cpu, op),
        Mnemonic::Sha => illegal::execute_sha(cpu, op),
        Mnemonic::Shx => illegal::execute_shx(cpu, op),
        Mnemonic::Shy => illegal::execute_shy(cpu, op),
        Mnemonic::Tas => illegal::execute_tas(cpu, op),
    }

    Ok(())
}

/// Writes the result of a read-modify-write instruction.
///
/// NMOS parts write the unmodified value back before the new one; memory-mapped
/// devices can observe both writes.
pub(crate) fn write_back<M: MemoryBus>(cpu: &mut CPU<M>, op: Operand, result: u8) {
    cpu.memory.write(op.address, op.value);
    cpu.memory.write(op.address, result);
}

/// Applies `f` to the accumulator or to the memory operand, depending on `mode`,
/// and stores the result where the input came from.
pub(crate) fn modify<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    op: Operand,
    f: impl FnOnce(&mut crate::Registers, u8) -> u8,
) -> u8 {
    if mode == AddressingMode::Accumulator {
        let a = cpu.regs.a;
        let result = f(&mut cpu.regs, a);
        cpu.regs.a = result;
        result
    } else {
        let result = f(&mut cpu.regs, op.value);
        write_back(cpu, op, result);
        result
    }
}
