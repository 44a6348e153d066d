// Licensed under the Apache-2.0 license

//! Register overview table parsing.

use crate::cursor::DocumentCursor;
use crate::error::{DatasheetError, DatasheetResult};
use crate::model::{Register, RegisterMap};
use crate::patterns::match_register_row;
use log::debug;
use std::io::BufRead;

/// Counts of what a single table fragment contributed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TableSummary {
    /// Leading whitespace width of the line following the title.
    pub alignment: usize,
    /// Rows stored into the register map (including overwrites).
    pub stored: usize,
    /// Rows named `-`.
    pub reserved: usize,
    /// Wrapped-description and short lines.
    pub skipped: usize,
}

/// Returns the part of `line` after the first `alignment` characters.
fn strip_alignment(line: &str, alignment: usize) -> &str {
    match line.char_indices().nth(alignment) {
        Some((i, _)) => &line[i..],
        None => "",
    }
}

/// Lines that are neither rows nor the end of the table: text continuing
/// the row above with a space at the alignment column, and lines ending
/// before the alignment column. The terminator counts as a column, so a
/// blank line is only skipped when the table is indented by two or more.
fn is_skipped(line: &str, alignment: usize) -> bool {
    let width = line.chars().count() + 1;
    alignment > width || strip_alignment(line, alignment).starts_with(' ')
}

/// Parses one register overview table fragment into `registers`.
///
/// The cursor must be positioned on the line following the table title. That
/// line fixes the alignment column and is not itself a register row. Rows
/// are read until one fails to match; that line is consumed. Rows at an
/// offset already present in `registers` replace the earlier entry.
pub fn parse_registers<R: BufRead>(
    cursor: &mut DocumentCursor<R>,
    registers: &mut RegisterMap,
) -> DatasheetResult<TableSummary> {
    let mut summary = TableSummary::default();

    let Some(first) = cursor.next_line()? else {
        return Ok(summary);
    };
    summary.alignment = first.chars().take_while(|c| c.is_whitespace()).count();

    let mut previous: Option<usize> = None;
    while let Some(line) = cursor.peek()? {
        if is_skipped(line, summary.alignment) {
            summary.skipped += 1;
            cursor.next_line()?;
            continue;
        }
        let rest = strip_alignment(line, summary.alignment);

        let Some(row) = match_register_row(rest) else {
            let ending = rest.trim_end().to_string();
            cursor.next_line()?;
            debug!("Table ends at line {}: {ending:?}", cursor.line_number());
            break;
        };
        cursor.next_line()?;
        let line_number = cursor.line_number();

        let offset = row
            .byte_offset()
            .map_err(|source| DatasheetError::InvalidOffset {
                line: line_number,
                text: row.index.clone(),
                source,
            })?
            / 4;

        if let Some(previous) = previous {
            if offset < previous {
                return Err(DatasheetError::OutOfOrderOffset {
                    line: line_number,
                    name: row.name,
                    offset,
                    previous,
                });
            }
        }
        previous = Some(offset);

        if row.is_reserved() {
            summary.reserved += 1;
            continue;
        }

        registers.insert(
            offset,
            Register {
                name: row.name,
                access: row.access,
                description: row.description,
            },
        );
        summary.stored += 1;
    }

    Ok(summary)
}
