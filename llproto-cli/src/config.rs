//! Frame configuration for the command line
//!
//! A JSON file (`--config`) provides the base configuration; individual
//! flags override its fields. Without either, the library defaults apply.

use anyhow::{Context, Result};
use clap::Args;
use llproto_core::FrameConfig;
use std::fs;
use tracing::debug;

/// Framing flags shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct FrameArgs {
    /// JSON file with payload_size, begin_marker, end_marker and reject_marker
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Payload size in bytes
    #[arg(long, global = true)]
    pub payload_size: Option<usize>,

    /// Begin marker (e.g. 0xAA or 170)
    #[arg(long, global = true, value_parser = parse_byte)]
    pub begin: Option<u8>,

    /// End marker (e.g. 0xBB or 187)
    #[arg(long, global = true, value_parser = parse_byte)]
    pub end: Option<u8>,

    /// Reject (escape) marker (e.g. 0xCC or 204)
    #[arg(long, global = true, value_parser = parse_byte)]
    pub reject: Option<u8>,
}

impl FrameArgs {
    /// Resolve the effective configuration
    pub fn resolve(&self) -> Result<FrameConfig> {
        let base = match &self.config {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {}", path))?;
                serde_json::from_str::<FrameConfig>(&content)
                    .with_context(|| format!("Invalid frame config in {}", path))?
            }
            None => FrameConfig::default(),
        };

        let config = FrameConfig::new(
            self.payload_size.unwrap_or(base.payload_size()),
            self.begin.unwrap_or(base.begin_marker()),
            self.end.unwrap_or(base.end_marker()),
            self.reject.unwrap_or(base.reject_marker()),
        )
        .context("Invalid frame configuration")?;

        debug!("Using frame config {:?}", config);
        Ok(config)
    }
}

/// Parse a byte given in hex (`0xAA`) or decimal (`170`)
pub fn parse_byte(s: &str) -> Result<u8, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|e| format!("invalid byte '{}': {}", s, e))
}
