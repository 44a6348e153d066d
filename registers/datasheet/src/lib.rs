// Licensed under the Apache-2.0 license

//! Register map extraction from plain-text microcontroller user manuals.
//!
//! The manuals are expected as layout-preserving text dumps, in which each
//! peripheral is described by one or more "Register overview" tables. This
//! crate finds those tables and turns them into a [`PeripheralMap`].
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use mcu_registers_datasheet::{naming::AcceptDefaults, read_datasheet};
//!
//! let peripherals = read_datasheet(Path::new("UM10398.txt"), &mut AcceptDefaults).unwrap();
//! for p in &peripherals {
//!     println!("{} @ {}: {} registers", p.display_name, p.base_address, p.registers.len());
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`cursor`]: forward-only line cursor shared by all parsing stages
//! - [`patterns`]: table title and register row matchers
//! - [`table`]: register overview table parser
//! - [`collector`]: whole-document scan and continuation merging
//! - [`naming`]: display names for discovered peripherals
//! - [`model`]: peripheral and register types

pub mod collector;
pub mod cursor;
pub mod model;
pub mod naming;
pub mod patterns;
pub mod table;

mod error;

pub use collector::{collect_peripherals, read_datasheet};
pub use cursor::DocumentCursor;
pub use error::{DatasheetError, DatasheetResult};
pub use model::{Access, Peripheral, PeripheralMap, Register, RegisterMap};
pub use naming::PeripheralNamer;
