//! # Registers and Status Flags
//!
//! The 6502 register file: accumulator, two index registers, stack pointer,
//! program counter and the packed NV-BDIZC status register.

use bitflags::bitflags;

bitflags! {
    /// Processor status register.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break, only meaningful on pushed copies)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Status register contents after power-on: I set, unused bit set.
    pub const POWER_ON: Status = Status::INTERRUPT_DISABLE.union(Status::UNUSED);

    /// Builds a status value from a raw byte. The unused bit always reads as set.
    pub fn from_byte(value: u8) -> Self {
        Status::from_bits_retain(value) | Status::UNUSED
    }

    /// Sets Z and N from an 8-bit result.
    pub fn set_zn(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::POWER_ON
    }
}

/// The complete register file of one simulated CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator register
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub sp: u8,

    /// Program counter (address of next instruction)
    pub pc: u16,

    /// Status flags
    pub status: Status,
}

impl Registers {
    /// Register state after power-on, before the reset vector is loaded.
    pub fn new() -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            sp: 0xFD,
            pc: 0x0000,
            status: Status::POWER_ON,
        }
    }

    /// Returns whether `flag` is set.
    pub fn flag(&self, flag: Status) -> bool {
        self.status.contains(flag)
    }

    /// Sets or clears `flag`. The unused bit cannot be cleared.
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.status.set(flag, value);
        self.status.insert(Status::UNUSED);
    }

    /// Loads A and updates Z/N.
    pub fn load_a(&mut self, value: u8) {
        self.a = value;
        self.status.set_zn(value);
    }

    /// Loads X and updates Z/N.
    pub fn load_x(&mut self, value: u8) {
        self.x = value;
        self.status.set_zn(value);
    }

    /// Loads Y and updates Z/N.
    pub fn load_y(&mut self, value: u8) {
        self.y = value;
        self.status.set_zn(value);
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
