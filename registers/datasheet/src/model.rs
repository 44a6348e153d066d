// Licensed under the Apache-2.0 license

//! Peripherals and registers recovered from a datasheet.

use std::collections::{BTreeMap, HashMap};

/// Software access rights listed in a register overview table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Access {
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

impl Access {
    /// Maps the text of an access column (`RO`, `R`, `WO`, `W`, `R/W`, `-`).
    ///
    /// Anything that is not explicitly read-only or write-only is treated as
    /// read/write, including the `-` placeholder.
    pub fn from_column(column: &str) -> Self {
        match column {
            "RO" | "R" => Access::ReadOnly,
            "WO" | "W" => Access::WriteOnly,
            _ => Access::ReadWrite,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Register {
    pub name: String,
    pub access: Access,
    pub description: String,
}

/// Sparse register layout keyed by word offset (byte offset / 4).
pub type RegisterMap = BTreeMap<usize, Register>;

#[derive(Clone, Debug)]
pub struct Peripheral {
    /// Name exactly as it appears in the table title.
    pub raw_name: String,
    /// Name used for generated symbols.
    pub display_name: String,
    /// Base address text with whitespace removed.
    pub base_address: String,
    pub registers: RegisterMap,
}

impl Peripheral {
    pub fn new(raw_name: &str, display_name: &str, address: &str) -> Self {
        Self {
            raw_name: raw_name.to_string(),
            display_name: display_name.to_string(),
            base_address: address.chars().filter(|c| !c.is_whitespace()).collect(),
            registers: RegisterMap::new(),
        }
    }
}

/// Peripherals in order of first appearance, indexed by raw name.
#[derive(Clone, Debug, Default)]
pub struct PeripheralMap {
    peripherals: Vec<Peripheral>,
    index: HashMap<String, usize>,
}

impl PeripheralMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, raw_name: &str) -> bool {
        self.index.contains_key(raw_name)
    }

    pub fn get(&self, raw_name: &str) -> Option<&Peripheral> {
        self.index.get(raw_name).map(|&i| &self.peripherals[i])
    }

    /// Returns the peripheral for `raw_name`, creating it with `create` first
    /// when it is not known yet.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        raw_name: &str,
        create: impl FnOnce() -> Result<Peripheral, E>,
    ) -> Result<&mut Peripheral, E> {
        let position = match self.index.get(raw_name) {
            Some(&i) => i,
            None => {
                let peripheral = create()?;
                self.index.insert(raw_name.to_string(), self.peripherals.len());
                self.peripherals.push(peripheral);
                self.peripherals.len() - 1
            }
        };
        Ok(&mut self.peripherals[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Peripheral> {
        self.peripherals.iter()
    }

    pub fn len(&self) -> usize {
        self.peripherals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peripherals.is_empty()
    }
}

impl<'a> IntoIterator for &'a PeripheralMap {
    type Item = &'a Peripheral;
    type IntoIter = std::slice::Iter<'a, Peripheral>;

    fn into_iter(self) -> Self::IntoIter {
        self.peripherals.iter()
    }
}
