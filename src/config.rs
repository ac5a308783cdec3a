//! # CPU Configuration
//!
//! Host-selectable behavior that differs between members of the 6502 family or that
//! real silicon does not pin down deterministically.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Constant used by ANE ($8B) and LXA ($AB) in place of the chip's bus-capacitance
/// dependent value. 0xEE matches what most NMOS parts produce at room temperature.
pub const DEFAULT_UNSTABLE_MAGIC: u8 = 0xEE;

/// Behavior switches consumed by the instruction core.
///
/// # Examples
///
/// ```
/// use nmos6502::Config;
///
/// let nes = Config::ricoh_2a03();
/// assert!(!nes.decimal_mode);
///
/// let custom = Config::nmos().with_unstable_magic(0xFF);
/// assert!(custom.decimal_mode);
/// assert_eq!(custom.unstable_magic, 0xFF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Honor the Decimal flag in ADC, SBC and their illegal relatives.
    ///
    /// The 2A03 has the BCD circuitry disconnected; the D flag still exists and can
    /// be set, it just has no arithmetic effect.
    pub decimal_mode: bool,

    /// Constant OR'ed into A by ANE and LXA before the AND with the operand.
    pub unstable_magic: u8,
}

impl Config {
    /// Stock NMOS 6502: decimal arithmetic enabled.
    pub const fn nmos() -> Self {
        Self {
            decimal_mode: true,
            unstable_magic: DEFAULT_UNSTABLE_MAGIC,
        }
    }

    /// Ricoh 2A03 (NES): decimal arithmetic ignored.
    pub const fn ricoh_2a03() -> Self {
        Self {
            decimal_mode: false,
            unstable_magic: DEFAULT_UNSTABLE_MAGIC,
        }
    }

    pub const fn with_decimal_mode(mut self, enabled: bool) -> Self {
        self.decimal_mode = enabled;
        self
    }

    pub const fn with_unstable_magic(mut self, magic: u8) -> Self {
        self.unstable_magic = magic;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::nmos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nmos() {
        assert_eq!(Config::default(), Config::nmos());
        assert!(Config::default().decimal_mode);
        assert_eq!(Config::default().unstable_magic, DEFAULT_UNSTABLE_MAGIC);
    }

    #[test]
    fn test_builders() {
        let config = Config::ricoh_2a03()
            .with_decimal_mode(true)
            .with_unstable_magic(0x00);
        assert!(config.decimal_mode);
        assert_eq!(config.unstable_magic, 0x00);
    }
}
