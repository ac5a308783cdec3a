//! # Memory Port
//!
//! The CPU reaches RAM, ROM and memory-mapped registers only through [`MemoryBus`].
//! Address decoding, mirroring and bank switching are the host's business; the core
//! just issues byte reads and writes in the order the silicon does.
//!
//! Both operations are total over 0x0000-0xFFFF. An open bus or a write to ROM is
//! modeled by the implementation returning whatever it likes or dropping the write.

/// Byte-wide access to a 16-bit address space.
///
/// `read` takes `&self` so the resolver can fetch operands without exclusive access;
/// devices with read side effects use interior mutability. `write` takes
/// `&mut self`. Neither can fail.
///
/// # Examples
///
/// ```
/// use nmos6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use nmos6502::MemoryBus;
///
/// struct RamWithMirrors {
///     ram: [u8; 0x0800], // 2KB internal RAM mirrored through 0x1FFF
/// }
///
/// impl MemoryBus for RamWithMirrors {
///     fn read(&self, addr: u16) -> u8 {
///         match addr {
///             0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize],
///             _ => 0x00,
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x2000 {
///             self.ram[(addr & 0x07FF) as usize] = value;
///         }
///     }
/// }
///
/// let mut mem = RamWithMirrors { ram: [0; 0x0800] };
/// mem.write(0x0801, 0x99);
/// assert_eq!(mem.read(0x0001), 0x99);
/// ```
pub trait MemoryBus {
    /// Returns the byte at `addr`. Must not panic for any address.
    fn read(&self, addr: u16) -> u8;

    /// Stores `value` at `addr`. Must not panic; read-only regions may drop it.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word from `addr` and `addr + 1`.
    ///
    /// The high byte address wraps at 0xFFFF.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

/// 64 KiB of zero-initialized RAM covering the whole address space.
///
/// The reference [`MemoryBus`]: no mirroring, no devices, every write sticks.
///
/// # Examples
///
/// ```
/// use nmos6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0xEA); // NOP
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.step(), Ok(2));
/// ```
pub struct FlatMemory {
    data: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping at 0xFFFF.
    ///
    /// ```
    /// use nmos6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x0600, &[0xA9, 0x05]);
    /// assert_eq!(mem.read(0x0601), 0x05);
    /// ```
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
