//! # Processor and Execution Driver
//!
//! [`CPU`] owns the register file, the running cycle total, the jam latch, its
//! [`Config`] and the memory bus, and executes through a shared [`OpcodeTable`].
//!
//! `step()` runs exactly one instruction: fetch, table lookup, operand resolution,
//! semantics, cycle accounting. It never loops and never polls for interrupts; the
//! host calls `irq()`, `nmi()` or `reset()` between steps.

use std::sync::Arc;

use log::{debug, trace, warn};

use crate::instructions;
use crate::{cycles, Config, ExecutionError, MemoryBus, OpcodeTable, Registers, Status};

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// NMI vector location.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector location.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector location.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles taken by the reset, IRQ and NMI sequences.
const INTERRUPT_CYCLES: u8 = 7;

/// One simulated 6502 / 2A03, generic over the memory bus it drives.
///
/// # Examples
///
/// ```
/// use nmos6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i()); // Interrupt disable set on reset
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    pub(crate) regs: Registers,

    /// Cycles consumed since construction
    pub(crate) cycles: u64,

    /// Set once a JAM opcode has locked the processor
    pub(crate) jammed: bool,

    /// Behavior switches
    pub(crate) config: Config,

    pub(crate) memory: M,

    table: Arc<OpcodeTable>,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU with its own opcode table and the NMOS configuration.
    ///
    /// Power-on state: PC from the reset vector at 0xFFFC/0xFFFD, SP = 0xFD, I set,
    /// A = X = Y = 0, no cycles counted.
    pub fn new(memory: M) -> Self {
        Self::with_table(memory, Arc::new(OpcodeTable::build()), Config::default())
    }

    /// Creates a new CPU with a freshly built opcode table and the given configuration.
    pub fn with_config(memory: M, config: Config) -> Self {
        Self::with_table(memory, Arc::new(OpcodeTable::build()), config)
    }

    /// Creates a new CPU that executes through a shared opcode table.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use nmos6502::{Config, CPU, FlatMemory, OpcodeTable};
    ///
    /// let table = Arc::new(OpcodeTable::build());
    /// let a = CPU::with_table(FlatMemory::new(), Arc::clone(&table), Config::default());
    /// let b = CPU::with_table(FlatMemory::new(), table, Config::ricoh_2a03());
    /// assert!(!b.config().decimal_mode);
    /// # let _ = a;
    /// ```
    pub fn with_table(memory: M, table: Arc<OpcodeTable>, config: Config) -> Self {
        let mut regs = Registers::new();
        regs.pc = memory.read_word(RESET_VECTOR);

        Self {
            regs,
            cycles: 0,
            jammed: false,
            config,
            memory,
            table,
        }
    }

    /// Executes one instruction and returns the number of cycles it consumed.
    ///
    /// # Errors
    ///
    /// - `UnimplementedOpcode` if the table has no entry for the opcode. PC is left
    ///   pointing at the opcode.
    /// - `ProcessorJammed` if a JAM opcode executes, or on every call after one did
    ///   until [`reset`](Self::reset). PC stays on the JAM opcode.
    ///
    /// No cycles are recorded for a failed step.
    ///
    /// # Examples
    ///
    /// ```
    /// use nmos6502::{CPU, ExecutionError, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xEA); // NOP
    /// mem.write(0x8001, 0x02); // JAM
    ///
    /// let mut cpu = CPU::new(mem);
    ///
    /// assert_eq!(cpu.step(), Ok(2));
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::ProcessorJammed { opcode: 0x02, pc: 0x8001 })
    /// );
    /// assert!(cpu.is_jammed());
    /// ```
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        let opcode_pc = self.regs.pc;
        let opcode = self.memory.read(opcode_pc);

        if self.jammed {
            return Err(ExecutionError::ProcessorJammed {
                opcode,
                pc: opcode_pc,
            });
        }

        let Some(entry) = self.table.get(opcode).copied() else {
            warn!("Unimplemented opcode 0x{:02X} at 0x{:04X}", opcode, opcode_pc);
            return Err(ExecutionError::UnimplementedOpcode(opcode));
        };

        self.regs.pc = opcode_pc.wrapping_add(1);
        let operand = entry.mode.resolve(
            self.regs.pc,
            &self.regs,
            &self.memory,
            entry.mnemonic.reads_operand(),
        );
        self.regs.pc = self.regs.pc.wrapping_add(operand.bytes_consumed as u16);

        let status = self.regs.status;
        if let Err(e) = instructions::execute(self, &entry, operand) {
            warn!("{} at 0x{:04X}: {}", entry.mnemonic, opcode_pc, e);
            return Err(e);
        }

        let cycles = cycles::cycles(&entry, opcode_pc, operand.address, operand.page_crossed, status);
        self.cycles += cycles as u64;

        trace!(
            "{:04X}  {:02X}  {:<4} {:?}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}  +{}",
            opcode_pc,
            opcode,
            entry.mnemonic.name(),
            entry.mode,
            self.regs.a,
            self.regs.x,
            self.regs.y,
            self.regs.status.bits(),
            self.regs.sp,
            cycles
        );

        Ok(cycles)
    }

    // ========== Reset and Interrupts ==========

    /// Performs the reset sequence: PC from the reset vector, SP = 0xFD, I set.
    ///
    /// Also releases a jammed processor. Returns the cycles consumed.
    pub fn reset(&mut self) -> u8 {
        self.regs.pc = self.memory.read_word(RESET_VECTOR);
        self.regs.sp = 0xFD;
        self.regs.set_flag(Status::INTERRUPT_DISABLE, true);
        self.jammed = false;
        self.cycles += INTERRUPT_CYCLES as u64;
        debug!("reset: PC=0x{:04X}", self.regs.pc);
        INTERRUPT_CYCLES
    }

    /// Services a maskable interrupt request.
    ///
    /// Ignored (returning 0 cycles) when the I flag is set or the processor is
    /// jammed. Otherwise pushes PC and status (Break clear), sets I and jumps
    /// through 0xFFFE/0xFFFF.
    pub fn irq(&mut self) -> u8 {
        if self.jammed || self.regs.flag(Status::INTERRUPT_DISABLE) {
            return 0;
        }
        self.interrupt(IRQ_VECTOR)
    }

    /// Services a non-maskable interrupt through 0xFFFA/0xFFFB.
    ///
    /// Returns 0 cycles if the processor is jammed.
    pub fn nmi(&mut self) -> u8 {
        if self.jammed {
            return 0;
        }
        self.interrupt(NMI_VECTOR)
    }

    fn interrupt(&mut self, vector: u16) -> u8 {
        self.push_word(self.regs.pc);
        let pushed = (self.regs.status - Status::BREAK) | Status::UNUSED;
        self.push(pushed.bits());
        self.regs.set_flag(Status::INTERRUPT_DISABLE, true);
        self.regs.pc = self.memory.read_word(vector);
        self.cycles += INTERRUPT_CYCLES as u64;
        debug!("interrupt via 0x{:04X}: PC=0x{:04X}", vector, self.regs.pc);
        INTERRUPT_CYCLES
    }

    // ========== Stack ==========

    /// Pushes a byte onto the stack. SP wraps within page 1.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.regs.sp as u16, value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    /// Pulls a byte from the stack. SP wraps within page 1.
    pub(crate) fn pull(&mut self) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.regs.sp as u16)
    }

    /// Pushes a word, high byte first.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    /// Pulls a word, low byte first.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    // ========== Register Getters ==========

    pub fn a(&self) -> u8 {
        self.regs.a
    }

    pub fn x(&self) -> u8 {
        self.regs.x
    }

    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Address of the next opcode to fetch.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Stack pointer; the next push lands at 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC, bit 5 always 1).
    pub fn status(&self) -> u8 {
        self.regs.status.bits()
    }

    /// Returns the full register file.
    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    /// Running total of cycles from steps, resets and interrupts.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns true once a JAM opcode has locked the processor.
    pub fn is_jammed(&self) -> bool {
        self.jammed
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the opcode table this CPU executes through.
    pub fn table(&self) -> &Arc<OpcodeTable> {
        &self.table
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Status Flag Getters ==========
    //
    // One per flag, named after the NV-BDIZC letters.

    pub fn flag_n(&self) -> bool {
        self.regs.flag(Status::NEGATIVE)
    }

    pub fn flag_v(&self) -> bool {
        self.regs.flag(Status::OVERFLOW)
    }

    pub fn flag_b(&self) -> bool {
        self.regs.flag(Status::BREAK)
    }

    pub fn flag_d(&self) -> bool {
        self.regs.flag(Status::DECIMAL)
    }

    pub fn flag_i(&self) -> bool {
        self.regs.flag(Status::INTERRUPT_DISABLE)
    }

    pub fn flag_z(&self) -> bool {
        self.regs.flag(Status::ZERO)
    }

    pub fn flag_c(&self) -> bool {
        self.regs.flag(Status::CARRY)
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Sets the status register from a packed byte. Bit 5 always reads back as 1.
    pub fn set_status(&mut self, value: u8) {
        self.regs.status = Status::from_byte(value);
    }

    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.regs.set_flag(Status::NEGATIVE, value);
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.regs.set_flag(Status::OVERFLOW, value);
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.regs.set_flag(Status::BREAK, value);
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.regs.set_flag(Status::DECIMAL, value);
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.regs.set_flag(Status::INTERRUPT_DISABLE, value);
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.regs.set_flag(Status::ZERO, value);
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.regs.set_flag(Status::CARRY, value);
    }
}
