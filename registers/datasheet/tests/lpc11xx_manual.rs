// Licensed under the Apache-2.0 license

use log::LevelFilter;
use mcu_registers_datasheet::naming::{AcceptDefaults, NameTable};
use mcu_registers_datasheet::{read_datasheet, Access, DatasheetError};
use simple_logger::SimpleLogger;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

const MANUAL_EXCERPT: &str = r#"
UM10398                      Chapter 3: LPC111x/LPC11Cxx System configuration (SYSCON)

3.5 Register description
All registers in this block are on word address boundaries.

Table 7.    Register overview: system control block (base address 0x4004 8000)
Name               Access   Address offset   Description                                 Reset value  Reference
SYSMEMREMAP        R/W      0x000            System memory remap                         0x002        Table 8
PRESETCTRL         R/W      0x004            Peripheral reset control                    0x000        Table 9
SYSPLLCTRL         R/W      0x008            System PLL control                          0x000        Table 10
SYSPLLSTAT         R        0x00C            System PLL status                           0x000        Table 11
-                  -        0x010 - 0x01C    Reserved                                    -            -
SYSOSCCTRL         R/W      0x020            System oscillator control                   0x000        Table 12
                                             and bypass
WDTOSCCTRL         R/W      0x024            Watchdog oscillator control                 0x000        Table 13

UM10398                      All information provided in this document is subject to legal disclaimers.

Table 7.    Register overview: system control block (base address 0x4004 8000) …continued
Name               Access   Address offset   Description                                 Reset value  Reference
SYSAHBCLKCTRL      R/W      0x080            System AHB clock control                    0x85F        Table 20
DEVICE_ID          R        0x3F4            Device ID                                   -            Table 44

Chapter 7: LPC111x/LPC11Cxx I/O configuration (IOCONFIG)

Table 55.   Register overview: I/O configuration (base address
            0x4004 4000)
Name               Access   Address offset   Description                                 Reset value  Reference
IOCON_PIO2_6       R/W      0x000            I/O configuration for pin PIO2_6            0xD0         Table 56
-                  R/W      0x004            Reserved                                    -            -
IOCON_PIO2_0       R/W      0x008            I/O configuration for pin PIO2_0/DTR/SSEL1  0xD0         Table 58
3.6 Functional description

Table 172.  Register overview: UART (base address: 0x4000 8000)
    Name       Access  Address offset  Description                        Reset value
    RBR        RO      0x000           Receiver Buffer Register           NA
    THR        WO      0x000           Transmit Holding Register          NA
    IER        R/W     0x004           Interrupt Enable Register          0x00
    SCR        R/W     0x01C           Scratch Pad Register               0x00
Table 173.  UART Receiver Buffer Register
"#;

fn write_manual(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn init_logging() {
    let _ = SimpleLogger::new().with_level(LevelFilter::Debug).init();
}

#[test]
fn test_read_manual_excerpt() {
    init_logging();
    let manual = write_manual(MANUAL_EXCERPT);
    let mut names = NameTable::new(
        HashMap::from([
            ("system control block".to_string(), "SYSCON".to_string()),
            ("I/O configuration".to_string(), "IOCON".to_string()),
        ]),
        AcceptDefaults,
    );

    let peripherals = read_datasheet(manual.path(), &mut names).unwrap();

    let summary: Vec<_> = peripherals
        .iter()
        .map(|p| (p.display_name.as_str(), p.base_address.as_str()))
        .collect();
    assert_eq!(
        summary,
        [
            ("SYSCON", "0x40048000"),
            ("IOCON", ""),
            ("UART", "0x40008000"),
        ]
    );

    let syscon = peripherals.get("system control block").unwrap();
    assert_eq!(
        syscon.registers.keys().copied().collect::<Vec<_>>(),
        [0, 1, 2, 3, 8, 9, 0x20, 0xfd]
    );
    assert_eq!(syscon.registers[&3].access, Access::ReadOnly);
    assert_eq!(
        syscon.registers[&8].description,
        "System oscillator control"
    );
    assert_eq!(syscon.registers[&0xfd].name, "DEVICE_ID");

    let iocon = peripherals.get("I/O configuration").unwrap();
    assert_eq!(iocon.registers.keys().copied().collect::<Vec<_>>(), [0, 2]);
    assert_eq!(
        iocon.registers[&2].description,
        "I/O configuration for pin PIO2_0/DTR/SSEL1"
    );

    let uart = peripherals.get("UART").unwrap();
    assert_eq!(uart.registers.keys().copied().collect::<Vec<_>>(), [0, 1, 7]);
    assert_eq!(uart.registers[&0].name, "THR");
    assert_eq!(uart.registers[&0].access, Access::WriteOnly);
}

#[test]
fn test_read_manual_without_tables() {
    init_logging();
    let manual = write_manual("UM10398\nChapter 1: Introductory information\n");
    let peripherals = read_datasheet(manual.path(), &mut AcceptDefaults).unwrap();
    assert!(peripherals.is_empty());
}

#[test]
fn test_overflowing_offset_aborts() {
    init_logging();
    let manual = write_manual(concat!(
        "Table 1. Register overview: WDT (base address 0x4000 4000)\n",
        "Name     Access  Address   Description\n",
        "WDMOD    R/W     0x000     Watchdog mode register\n",
        "WDTC     R/W     0x10000000000000004   Watchdog timer constant register\n",
    ));
    let err = read_datasheet(manual.path(), &mut AcceptDefaults).unwrap_err();
    match err {
        DatasheetError::InvalidOffset { line, text, .. } => {
            assert_eq!(line, 4);
            assert_eq!(text, "0x10000000000000004");
        }
        other => panic!("unexpected error: {other}"),
    }
}
