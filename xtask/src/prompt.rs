// Licensed under the Apache-2.0 license

//! Interactive questions on the terminal.

use anyhow::{bail, Result};
use mcu_registers_datasheet::{DatasheetResult, PeripheralNamer};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Asks questions on `output` and reads one line per answer from `input`.
pub(crate) struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the trimmed answer, or `None` at end of input.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim().to_string()))
    }

    /// Asks for the datasheet text file to read.
    pub fn ask_datasheet(&mut self) -> Result<PathBuf> {
        match self.ask("Datasheet to read: ")? {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => bail!("No datasheet given"),
        }
    }
}

impl<R: BufRead, W: Write> PeripheralNamer for Prompt<R, W> {
    /// An empty answer or end of input takes the default.
    fn name_peripheral(&mut self, raw_name: &str, default: &str) -> DatasheetResult<String> {
        let answer = self.ask(&format!("Name for \"{raw_name}\" (Default {default}): "))?;
        Ok(match answer {
            Some(name) if !name.is_empty() => name,
            _ => default.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_name_peripheral() {
        let mut output = Vec::new();
        let mut prompt = Prompt::new(Cursor::new("  SYSCON \n\n"), &mut output);
        assert_eq!(
            prompt
                .name_peripheral("system control block", "system control block")
                .unwrap(),
            "SYSCON"
        );
        assert_eq!(prompt.name_peripheral("UART", "UART").unwrap(), "UART");
        // End of input.
        assert_eq!(
            prompt
                .name_peripheral("16-bit counter/timer CT16B0", "CT16B0")
                .unwrap(),
            "CT16B0"
        );
        drop(prompt);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            concat!(
                "Name for \"system control block\" (Default system control block): ",
                "Name for \"UART\" (Default UART): ",
                "Name for \"16-bit counter/timer CT16B0\" (Default CT16B0): ",
            )
        );
    }

    #[test]
    fn test_ask_datasheet() {
        let mut output = Vec::new();
        let mut prompt = Prompt::new(Cursor::new("UM10398.txt\r\n"), &mut output);
        assert_eq!(
            prompt.ask_datasheet().unwrap(),
            PathBuf::from("UM10398.txt")
        );
        drop(prompt);
        assert_eq!(output, b"Datasheet to read: ");
    }

    #[test]
    fn test_ask_datasheet_empty() {
        let mut prompt = Prompt::new(Cursor::new("\n"), io::sink());
        assert!(prompt.ask_datasheet().is_err());
        let mut prompt = Prompt::new(Cursor::new(""), io::sink());
        assert!(prompt.ask_datasheet().is_err());
    }
}
