//! # Addressing Modes
//!
//! The thirteen ways an opcode names its operand, and [`AddressingMode::resolve`],
//! which reads the operand bytes after the opcode and produces the effective
//! address, the loaded value and whether indexing left the base page.

use crate::{MemoryBus, Registers};

/// How an instruction locates its operand.
///
/// Operand length is 0 bytes for `Implied`/`Accumulator`, 2 for the absolute family
/// and `Indirect`, and 1 for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// CLC, RTS, TAX
    Implied,
    /// ASL A
    Accumulator,
    /// LDA #$10
    Immediate,
    /// LDA $80
    ZeroPage,
    /// LDA $80,X; the sum stays in page zero.
    ZeroPageX,
    /// LDX $80,Y; the sum stays in page zero.
    ZeroPageY,
    /// JMP $1234
    Absolute,
    AbsoluteX,
    AbsoluteY,
    /// JMP ($10FF). A pointer ending in $FF fetches its high byte from the
    /// start of the same page.
    Indirect,
    /// LDA ($40,X): index into page zero, then follow the pointer.
    IndexedIndirect,
    /// LDA ($40),Y: follow the page-zero pointer, then index.
    IndirectIndexed,
    /// Branch displacement, signed and relative to the following instruction.
    Relative,
}

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Operand {
    /// Operand byte: the immediate value, A for accumulator mode, or the byte at
    /// `address` when the resolver was asked to load it. Zero otherwise.
    pub value: u8,

    /// Effective address. For Immediate this is the address of the operand byte;
    /// for Relative it is the branch target. Zero for Implied/Accumulator.
    pub address: u16,

    /// Number of bytes consumed after the opcode.
    pub bytes_consumed: u8,

    /// True when indexing (or a branch target) moved into a different page.
    pub page_crossed: bool,
}

#[inline]
fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Reads a pointer from zero page, wrapping the high byte fetch within page 0.
#[inline]
fn read_zero_page_word<M: MemoryBus>(memory: &M, zp: u8) -> u16 {
    let lo = memory.read(zp as u16) as u16;
    let hi = memory.read(zp.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed
            | AddressingMode::Relative => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Returns true for modes whose effective address names a memory location that
    /// instructions read from or write to.
    pub fn is_memory(self) -> bool {
        !matches!(
            self,
            AddressingMode::Implied
                | AddressingMode::Accumulator
                | AddressingMode::Immediate
                | AddressingMode::Relative
                | AddressingMode::Indirect
        )
    }

    /// Resolves the operand for this mode.
    ///
    /// `pc` is the address of the first operand byte (the byte after the opcode).
    /// Registers supply A, X and Y. When `load` is true and the mode addresses
    /// memory, the byte at the effective address is read into `Operand::value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nmos6502::{AddressingMode, FlatMemory, MemoryBus, Registers};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0x0600, 0xF0); // $10F0,X
    /// mem.write(0x0601, 0x10);
    ///
    /// let mut regs = Registers::new();
    /// regs.x = 0x20;
    ///
    /// let op = AddressingMode::AbsoluteX.resolve(0x0600, &regs, &mem, false);
    /// assert_eq!(op.address, 0x1110);
    /// assert_eq!(op.bytes_consumed, 2);
    /// assert!(op.page_crossed);
    /// ```
    pub fn resolve<M: MemoryBus>(self, pc: u16, regs: &Registers, memory: &M, load: bool) -> Operand {
        let bytes_consumed = self.operand_bytes();
        let mut page = false;

        let address = match self {
            AddressingMode::Implied => {
                return Operand::default();
            }
            AddressingMode::Accumulator => {
                return Operand {
                    value: regs.a,
                    ..Operand::default()
                };
            }
            AddressingMode::Immediate => {
                return Operand {
                    value: memory.read(pc),
                    address: pc,
                    bytes_consumed,
                    page_crossed: false,
                };
            }
            AddressingMode::ZeroPage => memory.read(pc) as u16,
            AddressingMode::ZeroPageX => memory.read(pc).wrapping_add(regs.x) as u16,
            AddressingMode::ZeroPageY => memory.read(pc).wrapping_add(regs.y) as u16,
            AddressingMode::Absolute => memory.read_word(pc),
            AddressingMode::AbsoluteX => {
                let base = memory.read_word(pc);
                let addr = base.wrapping_add(regs.x as u16);
                page = page_crossed(base, addr);
                addr
            }
            AddressingMode::AbsoluteY => {
                let base = memory.read_word(pc);
                let addr = base.wrapping_add(regs.y as u16);
                page = page_crossed(base, addr);
                addr
            }
            AddressingMode::Indirect => {
                let pointer = memory.read_word(pc);
                // The high byte fetch never carries into the pointer's high byte
                let hi_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
                let lo = memory.read(pointer) as u16;
                let hi = memory.read(hi_addr) as u16;
                (hi << 8) | lo
            }
            AddressingMode::IndexedIndirect => {
                let zp = memory.read(pc).wrapping_add(regs.x);
                read_zero_page_word(memory, zp)
            }
            AddressingMode::IndirectIndexed => {
                let base = read_zero_page_word(memory, memory.read(pc));
                let addr = base.wrapping_add(regs.y as u16);
                page = page_crossed(base, addr);
                addr
            }
            AddressingMode::Relative => {
                let offset = memory.read(pc) as i8;
                let next = pc.wrapping_add(1);
                let target = next.wrapping_add_signed(offset as i16);
                page = page_crossed(next, target);
                target
            }
        };

        let value = if load && self.is_memory() {
            memory.read(address)
        } else {
            0
        };

        Operand {
            value,
            address,
            bytes_consumed,
            page_crossed: page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn regs(x: u8, y: u8) -> Registers {
        let mut regs = Registers::new();
        regs.x = x;
        regs.y = y;
        regs
    }

    #[test]
    fn test_zero_page_x_wraps() {
        let mut mem = FlatMemory::new();
        mem.write(0x0200, 0xF0);
        mem.write(0x0010, 0x77);

        let op = AddressingMode::ZeroPageX.resolve(0x0200, &regs(0x20, 0), &mem, true);
        assert_eq!(op.address, 0x0010);
        assert_eq!(op.value, 0x77);
        assert!(!op.page_crossed);
    }

    #[test]
    fn test_indirect_page_bug() {
        let mut mem = FlatMemory::new();
        mem.load(0x0200, &[0xFF, 0x30]); // JMP ($30FF)
        mem.write(0x30FF, 0x80);
        mem.write(0x3000, 0x40);
        mem.write(0x3100, 0x50);

        let op = AddressingMode::Indirect.resolve(0x0200, &regs(0, 0), &mem, false);
        assert_eq!(op.address, 0x4080);
    }

    #[test]
    fn test_indexed_indirect_wraps_pointer() {
        let mut mem = FlatMemory::new();
        mem.write(0x0200, 0xFE);
        // 0xFE + 0x01 = 0xFF; pointer bytes at 0xFF and 0x00
        mem.write(0x00FF, 0x34);
        mem.write(0x0000, 0x12);

        let op = AddressingMode::IndexedIndirect.resolve(0x0200, &regs(0x01, 0), &mem, false);
        assert_eq!(op.address, 0x1234);
    }

    #[test]
    fn test_indirect_indexed_page_cross() {
        let mut mem = FlatMemory::new();
        mem.write(0x0200, 0x40);
        mem.write(0x0040, 0xF0);
        mem.write(0x0041, 0x12);

        let op = AddressingMode::IndirectIndexed.resolve(0x0200, &regs(0, 0x10), &mem, false);
        assert_eq!(op.address, 0x1300);
        assert!(op.page_crossed);

        let op = AddressingMode::IndirectIndexed.resolve(0x0200, &regs(0, 0x0F), &mem, false);
        assert_eq!(op.address, 0x12FF);
        assert!(!op.page_crossed);
    }

    #[test]
    fn test_relative_backwards() {
        let mut mem = FlatMemory::new();
        mem.write(0x0601, 0xFE);

        let op = AddressingMode::Relative.resolve(0x0601, &regs(0, 0), &mem, false);
        assert_eq!(op.address, 0x0600);
        assert!(!op.page_crossed);

        mem.write(0x0700, 0xFE);
        let op = AddressingMode::Relative.resolve(0x0700, &regs(0, 0), &mem, false);
        assert_eq!(op.address, 0x06FF);
        assert!(op.page_crossed);
    }

    #[test]
    fn test_operand_bytes() {
        assert_eq!(AddressingMode::Implied.operand_bytes(), 0);
        assert_eq!(AddressingMode::Relative.operand_bytes(), 1);
        assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
    }
}
