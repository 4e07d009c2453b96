//! Command-line surface (§6), unchanged from the Go `cmd/main.go` flags
//! plus the quality/DPI/ccitt knobs `converter.Convert` reads from its
//! caller.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputType {
    Pdf,
    Tiff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CcittFlag {
    On,
    Off,
    Auto,
}

#[derive(Debug, Parser)]
#[command(name = "foliant", about = "Convert archival TIFF folders to PDF")]
pub struct Cli {
    /// Directory whose immediate subdirectories are page folders
    #[arg(long)]
    pub input: PathBuf,

    /// Destination directory; may be given up to twice to mirror output
    #[arg(long, required = true)]
    pub output: Vec<PathBuf>,

    /// Only `pdf` is in scope; `tiff` is accepted and rejected at startup
    #[arg(long, value_enum, default_value_t = OutputType::Pdf)]
    pub r#type: OutputType,

    #[arg(long, value_enum, default_value_t = CcittFlag::Auto)]
    pub ccitt: CcittFlag,

    #[arg(long, default_value_t = 300)]
    pub rgbdpi: u32,

    #[arg(long, default_value_t = 300)]
    pub grdpi: u32,

    #[arg(long, default_value_t = 100)]
    pub rgbq: u8,

    #[arg(long, default_value_t = 100)]
    pub grq: u8,
}

impl Cli {
    /// Validate the cross-field rules the flag parser itself can't express
    pub fn validate(&self) -> Result<(), String> {
        if self.output.is_empty() || self.output.len() > 2 {
            return Err(format!(
                "--output must be given 1 or 2 times, got {}",
                self.output.len()
            ));
        }
        if self.r#type != OutputType::Pdf {
            return Err("--type tiff is not in scope; only pdf is supported".to_string());
        }
        Ok(())
    }
}
