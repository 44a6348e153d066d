// Licensed under the Apache-2.0 license

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;

mod cmsis_header;
mod config;
mod prompt;

#[derive(Parser)]
#[command(author, version, about, long_about = None, name = "xtask")]
struct Xtask {
    /// Log every table the extractor reads
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    xtask: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a CMSIS device header from the register overview tables of a
    /// datasheet converted to plain text
    CmsisHeader(cmsis_header::CmsisHeaderArgs),
}

fn main() -> Result<()> {
    let cli = Xtask::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).init()?;

    match &cli.xtask {
        Commands::CmsisHeader(args) => cmsis_header::generate(args),
    }
}
