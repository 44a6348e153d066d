// Licensed under the Apache-2.0 license

//! Output types and code generation for CMSIS device headers.
//!
//! This module contains the data structures that represent the generated
//! header ([`GeneratedHeader`], [`GeneratedPeripheral`], [`GeneratedField`])
//! and the logic to render them as C.
//!
//! ## Code Generation Flow
//!
//! ```text
//! PeripheralMap → GeneratedHeader → C header text
//!                 ├── GeneratedPeripheral[] → typedef struct blocks
//!                 └── base addresses        → #define address macros
//! ```
//!
//! ## Generated Code Structure
//!
//! For a peripheral displayed as "UART" on an LPC11xx part:
//!
//! ```text
//! /*------------- UART (UART) ----------------------------*/
//! /** @addtogroup LPC11xx_UART LPC11xx UART (UART)
//!   @{
//! */
//! typedef struct
//! {
//!   __O	uint32_t THR;		// Transmit Holding Register
//!   __IO	uint32_t IER;		// Interrupt Enable Register
//! 	uint32_t RESERVED0[5];
//!   __IO	uint32_t SCR;		// Scratch Pad Register
//! } LPC_UART_TypeDef;
//! /*@}*/ /* end of group LPC11xx_UART */
//!
//! #define LPC_UART		((LPC_UART_TypeDef*	) 0x40008000 )
//! ```

use crate::config::DeviceConfig;
use crate::util::{common_prefix, strip_common_prefix};
use mcu_registers_datasheet::{Access, Peripheral, PeripheralMap};
use std::fmt;

//=============================================================================
// Generated Types
//=============================================================================

/// CMSIS access qualifier of a register field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Qualifier {
    /// `__I`: read-only.
    Input,
    /// `__O`: write-only.
    Output,
    /// `__IO`: read/write.
    InputOutput,
}

impl Qualifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Qualifier::Input => "__I",
            Qualifier::Output => "__O",
            Qualifier::InputOutput => "__IO",
        }
    }
}

impl From<Access> for Qualifier {
    fn from(access: Access) -> Self {
        match access {
            Access::ReadOnly => Qualifier::Input,
            Access::WriteOnly => Qualifier::Output,
            Access::ReadWrite => Qualifier::InputOutput,
        }
    }
}

/// One member of a generated peripheral struct.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GeneratedField {
    /// A 32-bit register.
    Register {
        /// Word offset from the peripheral base.
        offset: usize,
        qualifier: Qualifier,
        /// Register name with the peripheral's common prefix removed.
        name: String,
        description: String,
    },
    /// Padding for a run of unused word offsets.
    Reserved {
        /// Word offset of the first padded slot.
        offset: usize,
        /// Sequence number within the peripheral, starting at 0.
        number: usize,
        /// Number of 32-bit words.
        count: usize,
    },
}

/// The complete output for a single peripheral.
#[derive(Clone, Debug, Default)]
pub struct GeneratedPeripheral {
    pub raw_name: String,
    pub name: String,
    pub base_address: String,
    /// Prefix stripped from every register name.
    pub common_prefix: String,
    /// Struct members in ascending offset order.
    pub fields: Vec<GeneratedField>,
}

/// A complete CMSIS device header.
#[derive(Clone, Debug)]
pub struct GeneratedHeader {
    pub config: DeviceConfig,
    pub peripherals: Vec<GeneratedPeripheral>,
}

//=============================================================================
// Layout
//=============================================================================

impl GeneratedPeripheral {
    /// Lays out the struct members of a peripheral.
    ///
    /// Registers are emitted in ascending word offset order. Each run of
    /// unused offsets between the first and last register becomes a single
    /// reserved array; with `pad_from_base`, offsets below the first register
    /// are padded too.
    pub fn from_peripheral(peripheral: &Peripheral, config: &DeviceConfig) -> Self {
        let prefix =
            common_prefix(peripheral.registers.values().map(|r| r.name.as_str())).to_string();

        let mut fields = Vec::new();
        let mut next_offset = match peripheral.registers.keys().next() {
            Some(_) if config.pad_from_base => 0,
            Some(&first) => first,
            None => 0,
        };
        let mut reserved_count = 0;

        for (&offset, register) in &peripheral.registers {
            if offset > next_offset {
                fields.push(GeneratedField::Reserved {
                    offset: next_offset,
                    number: reserved_count,
                    count: offset - next_offset,
                });
                reserved_count += 1;
            }
            fields.push(GeneratedField::Register {
                offset,
                qualifier: register.access.into(),
                name: strip_common_prefix(&register.name, &prefix).to_string(),
                description: register.description.clone(),
            });
            next_offset = offset + 1;
        }

        Self {
            raw_name: peripheral.raw_name.clone(),
            name: peripheral.display_name.clone(),
            base_address: peripheral.base_address.clone(),
            common_prefix: prefix,
            fields,
        }
    }
}

impl GeneratedHeader {
    pub fn new(peripherals: &PeripheralMap, config: &DeviceConfig) -> Self {
        Self {
            config: config.clone(),
            peripherals: peripherals
                .iter()
                .map(|p| GeneratedPeripheral::from_peripheral(p, config))
                .collect(),
        }
    }
}

//=============================================================================
// Code Generation
//=============================================================================

impl fmt::Display for GeneratedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratedField::Register {
                qualifier,
                name,
                description,
                ..
            } => writeln!(
                f,
                "  {}\tuint32_t {name};\t\t// {description}",
                qualifier.as_str()
            ),
            GeneratedField::Reserved { number, count, .. } => {
                writeln!(f, "\tuint32_t RESERVED{number}[{count}];")
            }
        }
    }
}

impl GeneratedPeripheral {
    /// Writes the banner, doc group and `typedef struct` of this peripheral.
    pub fn write_struct(&self, f: &mut impl fmt::Write, config: &DeviceConfig) -> fmt::Result {
        let DeviceConfig { device, family, .. } = config;
        let (raw, name) = (&self.raw_name, &self.name);

        writeln!(f, "/*------------- {raw} ({name}) ----------------------------*/")?;
        writeln!(f, "/** @addtogroup {family}_{name} {family} {raw} ({name}) ")?;
        writeln!(f, "  @{{")?;
        writeln!(f, "*/")?;
        writeln!(f, "typedef struct")?;
        writeln!(f, "{{")?;
        for field in &self.fields {
            write!(f, "{field}")?;
        }
        writeln!(f, "}} {device}_{name}_TypeDef;")?;
        writeln!(f, "/*@}}*/ /* end of group {family}_{name} */")?;
        writeln!(f)
    }

    /// Writes the macro binding the peripheral symbol to its base address.
    pub fn write_declaration(
        &self,
        f: &mut impl fmt::Write,
        config: &DeviceConfig,
    ) -> fmt::Result {
        let symbol = format!("{}_{}", config.device, self.name);
        writeln!(
            f,
            "#define {symbol}\t\t(({symbol}_TypeDef*\t) {} )",
            self.base_address
        )
    }
}

impl fmt::Display for GeneratedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peripheral in &self.peripherals {
            peripheral.write_struct(f, &self.config)?;
        }
        write!(f, "\n\n\n\n")?;
        for peripheral in &self.peripherals {
            peripheral.write_declaration(f, &self.config)?;
        }
        Ok(())
    }
}
