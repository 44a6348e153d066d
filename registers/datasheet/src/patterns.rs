// Licensed under the Apache-2.0 license

//! Line patterns for register overview tables.
//!
//! A table starts with a title such as
//!
//! ```text
//! Table 8.  Register overview: system control block (base address 0x4004 8000)
//! ```
//!
//! followed by a column header line and one row per register:
//!
//! ```text
//! SYSMEMREMAP    R/W   0x000          System memory remap       0x002   Table 9
//! -              -     0x00C - 0x01C  Reserved                  -       -
//! ```

use crate::model::Access;
use regex::Regex;
use std::sync::LazyLock;

static PERIPHERAL_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Register overview: (?P<name>.*) \(base address:?(?P<address>[^)]*)")
        .expect("peripheral header pattern")
});

static CLOSED_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\)|[Cc]ontinued)\s*$").expect("closed title pattern"));

static REGISTER_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<name>\w+|-)\s+",
        r"(?P<access>R/W|RO|WO|R|W|-)\s+",
        r"(?P<index>0x[0-9A-Fa-f]+)\s?(?:-|to)?\s?(?:0x[0-9A-Fa-f]+)?\s+",
        r"(?P<description>[\w/\-]+(?:\s[\w/\-]+)*)",
    ))
    .expect("register row pattern")
});

/// Title line of a register overview table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PeripheralHeader {
    pub name: String,
    /// Address text as printed, possibly with embedded spaces.
    pub address: String,
    /// True when the title runs on to the following line.
    pub wrapped: bool,
}

/// Matches the title line of a register overview table.
pub fn match_peripheral_header(line: &str) -> Option<PeripheralHeader> {
    let caps = PERIPHERAL_HEADER.captures(line)?;
    Some(PeripheralHeader {
        name: caps["name"].to_string(),
        address: caps["address"].to_string(),
        wrapped: !CLOSED_TITLE.is_match(line),
    })
}

/// One register row, before its offset is interpreted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegisterRow {
    /// Register name, or `-` for an explicitly reserved row.
    pub name: String,
    pub access: Access,
    /// Hex byte offset text, including the `0x` prefix.
    pub index: String,
    pub description: String,
}

impl RegisterRow {
    pub fn is_reserved(&self) -> bool {
        self.name == "-"
    }

    /// Parses the hex byte offset of this row.
    pub fn byte_offset(&self) -> Result<usize, std::num::ParseIntError> {
        let digits = self.index.trim_start_matches("0x");
        usize::from_str_radix(digits, 16)
    }
}

/// Matches a register row with the table's alignment prefix already removed.
pub fn match_register_row(line: &str) -> Option<RegisterRow> {
    let caps = REGISTER_ROW.captures(line)?;
    Some(RegisterRow {
        name: caps["name"].to_string(),
        access: Access::from_column(&caps["access"]),
        index: caps["index"].to_string(),
        description: caps["description"].to_string(),
    })
}
