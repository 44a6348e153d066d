// Licensed under the Apache-2.0 license

//! Walks a whole datasheet and gathers every peripheral's register table.

use crate::cursor::DocumentCursor;
use crate::error::{DatasheetError, DatasheetResult};
use crate::model::{Peripheral, PeripheralMap};
use crate::naming::{default_display_name, PeripheralNamer};
use crate::patterns::match_peripheral_header;
use crate::table::parse_registers;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Collects all peripherals described by register overview tables.
///
/// A table whose title names an already known peripheral is a continuation:
/// its rows are merged into the existing register map and its base address
/// is ignored.
pub fn collect_peripherals<R: BufRead>(
    cursor: &mut DocumentCursor<R>,
    namer: &mut dyn PeripheralNamer,
) -> DatasheetResult<PeripheralMap> {
    let mut peripherals = PeripheralMap::new();

    while let Some(line) = cursor.next_line()? {
        let Some(header) = match_peripheral_header(&line) else {
            continue;
        };
        let title_line = cursor.line_number();

        if header.wrapped {
            // Rest of the title.
            cursor.next_line()?;
        }

        if peripherals.contains(&header.name) {
            debug!("Line {title_line}: continuation of \"{}\"", header.name);
        }
        let peripheral = peripherals.get_or_try_insert_with(&header.name, || {
            let default = default_display_name(&header.name);
            let display_name = namer.name_peripheral(&header.name, default)?;
            info!(
                "Line {title_line}: peripheral \"{}\" as {display_name}",
                header.name
            );
            Ok::<_, DatasheetError>(Peripheral::new(
                &header.name,
                &display_name,
                &header.address,
            ))
        })?;

        let summary = parse_registers(cursor, &mut peripheral.registers)?;
        debug!(
            "{}: alignment {}, {} registers, {} reserved rows, {} skipped lines",
            peripheral.display_name,
            summary.alignment,
            summary.stored,
            summary.reserved,
            summary.skipped
        );
    }

    Ok(peripherals)
}

/// Opens a datasheet text file and collects its peripherals.
pub fn read_datasheet(
    path: &Path,
    namer: &mut dyn PeripheralNamer,
) -> DatasheetResult<PeripheralMap> {
    let file = File::open(path).map_err(|source| DatasheetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut cursor = DocumentCursor::new(BufReader::new(file));
    collect_peripherals(&mut cursor, namer)
}
