//! Library entry for llproto-cli used by integration tests and embedding.

pub mod commands;
pub mod config;

// Re-export commands for convenience
pub use commands::*;
pub use config::FrameArgs;
