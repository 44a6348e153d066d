// Licensed under the Apache-2.0 license

//! Datasheet register tables to CMSIS device header generator.
//!
//! This crate turns the peripherals collected by `mcu-registers-datasheet`
//! into a C header with one `typedef struct` per peripheral and one address
//! macro binding each peripheral symbol to its base address.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use mcu_registers_datasheet::naming::AcceptDefaults;
//! use mcu_registers_generator_cmsis::{generate_cmsis_header_from_file, DeviceConfig};
//!
//! let header = generate_cmsis_header_from_file(
//!     Path::new("UM10398.txt"),
//!     &mut AcceptDefaults,
//!     &DeviceConfig::lpc11xx(),
//! ).unwrap();
//! std::fs::write("cmsis_device.h", header).unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`util`]: common prefix computation and stripping
//! - [`config`]: device naming and layout options ([`DeviceConfig`])
//! - [`output`]: generated header types and C code generation

pub mod config;
pub mod output;
pub mod util;


use anyhow::Context;
use log::debug;
use mcu_registers_datasheet::{read_datasheet, PeripheralMap, PeripheralNamer};
use std::path::Path;

pub use config::DeviceConfig;
pub use output::{GeneratedField, GeneratedHeader, GeneratedPeripheral, Qualifier};

/// Generates the CMSIS header text for already collected peripherals.
pub fn generate_cmsis_header(peripherals: &PeripheralMap, config: &DeviceConfig) -> String {
    let header = GeneratedHeader::new(peripherals, config);
    for p in &header.peripherals {
        debug!(
            "{}_{}: {} fields, common prefix {:?}",
            config.device,
            p.name,
            p.fields.len(),
            p.common_prefix
        );
    }
    header.to_string()
}

/// Reads a datasheet text file and generates the CMSIS header text for it.
pub fn generate_cmsis_header_from_file(
    datasheet: &Path,
    namer: &mut dyn PeripheralNamer,
    config: &DeviceConfig,
) -> anyhow::Result<String> {
    let peripherals = read_datasheet(datasheet, namer)
        .with_context(|| format!("Failed to extract registers from {}", datasheet.display()))?;
    Ok(generate_cmsis_header(&peripherals, config))
}
