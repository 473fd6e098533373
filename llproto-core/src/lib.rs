//! # llproto Core
//!
//! Byte-stuffing framing for fixed-size messages carried over an
//! unstructured byte stream such as a serial or radio link.
//!
//! Every frame is a begin marker, the payload with each marker-valued byte
//! preceded by a reject marker, and an end marker. The three marker values
//! and the payload size are chosen per link through [`FrameConfig`].
//!
//! ## Modules
//!
//! - `constants`: Default markers and size limits
//! - `types`: Core types (FrameConfig, Status, ScanResult)
//! - `encoder`: Size computation and frame encoding
//! - `decoder`: The decoding automaton
//! - `scanner`: Repeated decoding over a captured buffer
//! - `framer`: Configuration-holding convenience wrapper
//!
//! ## Example
//!
//! ```
//! use llproto_core::{decoder::decode, encoder::encode_frame, FrameConfig, Status};
//!
//! let config = FrameConfig::with_payload_size(4).unwrap();
//! let frame = encode_frame(&config, &[0x01, 0xBB, 0x02, 0x03]).unwrap();
//! assert_eq!(frame.as_ref(), &[0xAA, 0x01, 0xCC, 0xBB, 0x02, 0x03, 0xBB]);
//!
//! let mut payload = [0u8; 4];
//! let result = decode(&config, Some(&frame[..]), Some(&mut payload[..]));
//! assert_eq!(result.status, Status::Success);
//! assert_eq!(result.remainder, 0);
//! assert_eq!(payload, [0x01, 0xBB, 0x02, 0x03]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod framer;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use error::FrameError;
pub use framer::Framer;
pub use types::{FrameConfig, ScanResult, Status};

/// Result type alias for llproto operations
pub type Result<T> = core::result::Result<T, FrameError>;
