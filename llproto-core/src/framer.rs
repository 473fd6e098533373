//! Configuration-holding front end over the encoder, decoder and scanner

use crate::decoder::decode;
use crate::encoder::{encode_frame, encode_into, encoded_size};
use crate::error::FrameError;
use crate::scanner::{scan_stream_with_stats, LocatedFrame, ScanStats};
use crate::types::{FrameConfig, ScanResult};
use alloc::vec;
use alloc::vec::Vec;
use bytes::Bytes;

/// Encodes and decodes frames for one [`FrameConfig`]
///
/// A `Framer` holds no mutable state and can be shared freely between
/// threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Framer {
    config: FrameConfig,
}

impl Framer {
    /// Create a framer from an already validated configuration
    pub const fn new(config: FrameConfig) -> Self {
        Self { config }
    }

    /// Create a framer from raw parameters
    pub fn with_markers(
        payload_size: usize,
        begin_marker: u8,
        end_marker: u8,
        reject_marker: u8,
    ) -> Result<Self, FrameError> {
        FrameConfig::new(payload_size, begin_marker, end_marker, reject_marker).map(Self::new)
    }

    /// The configuration in use
    pub const fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Exact encoded size of `payload`, 0 if it has the wrong length
    pub fn encoded_size(&self, payload: &[u8]) -> usize {
        encoded_size(&self.config, Some(payload))
    }

    /// Encode `payload` into a new buffer
    pub fn encode(&self, payload: &[u8]) -> Result<Bytes, FrameError> {
        encode_frame(&self.config, payload)
    }

    /// Encode `payload` into `output`, returning the bytes written
    ///
    /// Returns 0 and leaves `output` untouched if the payload has the wrong
    /// length or `output` is too small.
    pub fn encode_into(&self, payload: &[u8], output: &mut [u8]) -> usize {
        encode_into(&self.config, Some(payload), Some(output))
    }

    /// Decode at most one frame from `input` into `output`
    pub fn decode(&self, input: &[u8], output: &mut [u8]) -> ScanResult {
        decode(&self.config, Some(input), Some(output))
    }

    /// Decode at most one frame, allocating the payload on success
    pub fn decode_to_bytes(&self, input: &[u8]) -> (ScanResult, Option<Bytes>) {
        let mut payload = vec![0u8; self.config.payload_size()];
        let result = self.decode(input, &mut payload);
        let payload = result.is_success().then(|| Bytes::from(payload));
        (result, payload)
    }

    /// Scan a whole buffer for frames
    pub fn scan(&self, data: &[u8]) -> (Vec<LocatedFrame>, ScanStats) {
        scan_stream_with_stats(&self.config, data)
    }
}

impl From<FrameConfig> for Framer {
    fn from(config: FrameConfig) -> Self {
        Self::new(config)
    }
}
