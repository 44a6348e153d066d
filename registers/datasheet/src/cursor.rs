// Licensed under the Apache-2.0 license

//! Forward-only line cursor shared by the collector and the table parser.
//!
//! The document is read exactly once. Both the peripheral collector and the
//! register table parser advance the same [`DocumentCursor`], so the line a
//! table parser stops on is never seen again by the collector.

use crate::error::DatasheetResult;
use std::io::{BufRead, Lines};

pub struct DocumentCursor<R> {
    lines: Lines<R>,
    peeked: Option<String>,
    line: usize,
}

impl<R: BufRead> DocumentCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            peeked: None,
            line: 0,
        }
    }

    /// Returns the next line without consuming it.
    pub fn peek(&mut self) -> DatasheetResult<Option<&str>> {
        if self.peeked.is_none() {
            self.peeked = self.lines.next().transpose()?;
        }
        Ok(self.peeked.as_deref())
    }

    /// Consumes and returns the next line, without its line terminator.
    pub fn next_line(&mut self) -> DatasheetResult<Option<String>> {
        let line = match self.peeked.take() {
            Some(line) => Some(line),
            None => self.lines.next().transpose()?,
        };
        if line.is_some() {
            self.line += 1;
        }
        Ok(line)
    }

    /// 1-based number of the most recently consumed line (0 before any read).
    pub fn line_number(&self) -> usize {
        self.line
    }
}

impl<'a> DocumentCursor<&'a [u8]> {
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}
