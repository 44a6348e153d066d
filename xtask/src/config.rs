// Licensed under the Apache-2.0 license

//! Optional TOML settings for `cargo xtask cmsis-header`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Contents of a `--config` file. Every key is optional.
///
/// ```toml
/// device = "LPC"
/// family = "LPC11xx"
/// pad_from_base = false
///
/// [names]
/// "system control block" = "SYSCON"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct HeaderConfigFile {
    pub device: Option<String>,
    pub family: Option<String>,
    pub pad_from_base: Option<bool>,
    /// Raw table title to display name.
    #[serde(default)]
    pub names: HashMap<String, String>,
}

impl HeaderConfigFile {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config {}", path.display()))
    }
}
