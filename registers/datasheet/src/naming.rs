// Licensed under the Apache-2.0 license

//! Display names for newly discovered peripherals.
//!
//! Table titles name peripherals in prose ("system control block",
//! "I2C-bus controller"). Generated symbols need a short identifier, which is
//! chosen by a [`PeripheralNamer`] when a peripheral is first seen.

use crate::error::DatasheetResult;
use std::collections::HashMap;

const MIN_DEFAULT_NAME_LEN: usize = 3;

/// Derives a display name from a raw table title.
///
/// Returns the first maximal run of at least three uppercase ASCII letters or
/// digits, or `raw_name` itself when there is none.
///
/// ```
/// use mcu_registers_datasheet::naming::default_display_name;
/// assert_eq!(default_display_name("I2C-bus controller"), "I2C");
/// assert_eq!(default_display_name("SSP0/1"), "SSP0");
/// assert_eq!(default_display_name("system control block"), "system control block");
/// ```
pub fn default_display_name(raw_name: &str) -> &str {
    let mut start = None;
    for (i, c) in raw_name.char_indices() {
        let in_class = c.is_ascii_uppercase() || c.is_ascii_digit();
        match (in_class, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if i - s >= MIN_DEFAULT_NAME_LEN {
                    return &raw_name[s..i];
                }
                start = None;
            }
            _ => {}
        }
    }
    match start {
        Some(s) if raw_name.len() - s >= MIN_DEFAULT_NAME_LEN => &raw_name[s..],
        _ => raw_name,
    }
}

/// Chooses the display name of a peripheral the first time it is seen.
pub trait PeripheralNamer {
    fn name_peripheral(&mut self, raw_name: &str, default: &str) -> DatasheetResult<String>;
}

impl<N: PeripheralNamer + ?Sized> PeripheralNamer for &mut N {
    fn name_peripheral(&mut self, raw_name: &str, default: &str) -> DatasheetResult<String> {
        (**self).name_peripheral(raw_name, default)
    }
}

impl<N: PeripheralNamer + ?Sized> PeripheralNamer for Box<N> {
    fn name_peripheral(&mut self, raw_name: &str, default: &str) -> DatasheetResult<String> {
        (**self).name_peripheral(raw_name, default)
    }
}

/// Always takes the derived default name.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptDefaults;

impl PeripheralNamer for AcceptDefaults {
    fn name_peripheral(&mut self, _raw_name: &str, default: &str) -> DatasheetResult<String> {
        Ok(default.to_string())
    }
}

/// Fixed raw-name to display-name assignments, with a fallback namer for
/// peripherals the table does not mention.
pub struct NameTable<N> {
    names: HashMap<String, String>,
    fallback: N,
}

impl<N: PeripheralNamer> NameTable<N> {
    pub fn new(names: HashMap<String, String>, fallback: N) -> Self {
        Self { names, fallback }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<N: PeripheralNamer> PeripheralNamer for NameTable<N> {
    fn name_peripheral(&mut self, raw_name: &str, default: &str) -> DatasheetResult<String> {
        match self.names.get(raw_name) {
            Some(name) => Ok(name.clone()),
            None => self.fallback.name_peripheral(raw_name, default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_display_name() {
        assert_eq!(default_display_name("UART"), "UART");
        assert_eq!(default_display_name("16-bit counter/timer CT16B0"), "CT16B0");
        assert_eq!(default_display_name("I/O configuration"), "I/O configuration");
        assert_eq!(default_display_name("ADC"), "ADC");
        // Runs shorter than three characters are ignored.
        assert_eq!(default_display_name("IO ADC"), "ADC");
        assert_eq!(default_display_name("GPIO0 and GPIO1"), "GPIO0");
        assert_eq!(default_display_name(""), "");
    }

    #[test]
    fn test_default_display_name_lowercase_breaks_run() {
        assert_eq!(default_display_name("WDTmode"), "WDT");
        assert_eq!(default_display_name("ABcDE"), "ABcDE");
    }

    #[test]
    fn test_accept_defaults() {
        let mut namer = AcceptDefaults;
        assert_eq!(namer.name_peripheral("UART", "UART").unwrap(), "UART");
    }

    #[test]
    fn test_name_table_fallback() {
        let mut names = HashMap::new();
        names.insert("system control block".to_string(), "SYSCON".to_string());
        let mut table = NameTable::new(names, AcceptDefaults);
        assert_eq!(
            table
                .name_peripheral("system control block", "system control block")
                .unwrap(),
            "SYSCON"
        );
        assert_eq!(table.name_peripheral("UART", "UART").unwrap(), "UART");
    }
}
