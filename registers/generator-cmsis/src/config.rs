// Licensed under the Apache-2.0 license

//! Configuration for the generated CMSIS header.
//!
//! [`DeviceConfig`] controls the symbol prefix used for typedefs and address
//! macros, the device family named in doc groups, and where each peripheral
//! struct starts.

/// Device naming and layout options for header generation.
///
/// # Example
///
/// ```
/// use mcu_registers_generator_cmsis::config::DeviceConfig;
///
/// // LPC11xx defaults: `LPC_<Name>_TypeDef`, doc groups `LPC11xx_<Name>`
/// let config = DeviceConfig::lpc11xx();
/// assert_eq!(config.device, "LPC");
/// assert_eq!(config.family, "LPC11xx");
///
/// let config = DeviceConfig::lpc11xx()
///     .family("LPC13xx")
///     .pad_from_base(true);
/// assert_eq!(config.family, "LPC13xx");
/// assert!(config.pad_from_base);
/// ```
#[derive(Clone, Debug)]
pub struct DeviceConfig {
    /// Prefix of generated symbols: `<device>_<Name>_TypeDef`, `<device>_<Name>`.
    pub device: String,

    /// Device family used in `@addtogroup` names and titles.
    pub family: String,

    /// Start every struct at word offset 0 instead of the lowest register
    /// offset, padding the gap with a reserved array.
    pub pad_from_base: bool,
}

impl DeviceConfig {
    /// Configuration for the NXP LPC11xx family.
    pub fn lpc11xx() -> Self {
        Self {
            device: "LPC".to_string(),
            family: "LPC11xx".to_string(),
            pad_from_base: false,
        }
    }

    /// Set the symbol prefix.
    pub fn device(mut self, device: &str) -> Self {
        self.device = device.to_string();
        self
    }

    /// Set the family name used in doc groups.
    pub fn family(mut self, family: &str) -> Self {
        self.family = family.to_string();
        self
    }

    /// Set whether structs are padded from the peripheral base address.
    pub fn pad_from_base(mut self, pad: bool) -> Self {
        self.pad_from_base = pad;
        self
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::lpc11xx()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lpc11xx() {
        let config = DeviceConfig::default();
        assert_eq!(config.device, "LPC");
        assert_eq!(config.family, "LPC11xx");
        assert!(!config.pad_from_base);
    }

    #[test]
    fn test_builder() {
        let config = DeviceConfig::lpc11xx().device("LPC13").family("LPC13xx");
        assert_eq!(config.device, "LPC13");
        assert_eq!(config.family, "LPC13xx");
    }
}
