// Licensed under the Apache-2.0 license

//! Command to extract register overview tables into a CMSIS device header.

use crate::config::HeaderConfigFile;
use crate::prompt::Prompt;
use anyhow::{Context, Result};
use clap::Args;
use log::debug;
use mcu_registers_datasheet::naming::{AcceptDefaults, NameTable};
use mcu_registers_datasheet::PeripheralNamer;
use mcu_registers_generator_cmsis::{generate_cmsis_header_from_file, DeviceConfig};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct CmsisHeaderArgs {
    /// Datasheet converted to plain text; asked for when omitted
    datasheet: Option<PathBuf>,

    /// Header file to write
    #[arg(short, long, default_value = "cmsis_device.h")]
    output: PathBuf,

    /// Symbol prefix for typedefs and address macros [default: LPC]
    #[arg(long, value_name = "PREFIX")]
    device: Option<String>,

    /// Family name used in doc groups [default: LPC11xx]
    #[arg(long, value_name = "NAME")]
    family: Option<String>,

    /// TOML file with device settings and a [names] table
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Never prompt; use the derived peripheral names
    #[arg(long)]
    accept_defaults: bool,

    /// Pad each struct from offset 0 of the peripheral
    #[arg(long)]
    pad_from_base: bool,
}

/// Settings from the command line take precedence over the config file.
fn device_config(args: &CmsisHeaderArgs, file: &HeaderConfigFile) -> DeviceConfig {
    let mut config = DeviceConfig::lpc11xx();
    if let Some(device) = args.device.as_ref().or(file.device.as_ref()) {
        config = config.device(device);
    }
    if let Some(family) = args.family.as_ref().or(file.family.as_ref()) {
        config = config.family(family);
    }
    config.pad_from_base(args.pad_from_base || file.pad_from_base.unwrap_or(false))
}

fn write_header(
    datasheet: &Path,
    output: &Path,
    namer: &mut dyn PeripheralNamer,
    config: &DeviceConfig,
) -> Result<()> {
    let header = generate_cmsis_header_from_file(datasheet, namer, config)?;
    std::fs::write(output, header)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}

/// Generate a CMSIS device header from a datasheet.
pub(crate) fn generate(args: &CmsisHeaderArgs) -> Result<()> {
    let file = match &args.config {
        Some(path) => HeaderConfigFile::load(path)?,
        None => HeaderConfigFile::default(),
    };
    let config = device_config(args, &file);
    debug!("{config:?}");

    let datasheet = match &args.datasheet {
        Some(path) => path.clone(),
        None => Prompt::new(io::stdin().lock(), io::stdout()).ask_datasheet()?,
    };
    println!("Extracting registers from: {}", datasheet.display());

    let fallback: Box<dyn PeripheralNamer> = if args.accept_defaults {
        Box::new(AcceptDefaults)
    } else {
        Box::new(Prompt::new(io::stdin().lock(), io::stdout()))
    };
    let mut namer = NameTable::new(file.names, fallback);
    debug!("{} peripheral names from config", namer.len());

    write_header(&datasheet, &args.output, &mut namer, &config)?;
    println!(
        "Look in {} to find C structs and macro definitions for CMSIS",
        args.output.display()
    );
    Ok(())
}
