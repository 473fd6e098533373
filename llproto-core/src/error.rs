//! Error types for llproto operations
//!
//! Stream anomalies (short, long or incomplete frames) are not errors; the
//! decoder reports them as a [`Status`](crate::types::Status). These errors
//! cover configuration and the allocating convenience API.

/// Errors that can occur while configuring or using a framer
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Two or more marker values coincide
    #[cfg_attr(
        feature = "std",
        error("Markers must be pairwise distinct: begin={begin:#04x}, end={end:#04x}, reject={reject:#04x}")
    )]
    DuplicateMarkers {
        /// Configured begin marker.
        begin: u8,
        /// Configured end marker.
        end: u8,
        /// Configured reject marker.
        reject: u8,
    },

    /// Payload size is zero or exceeds the maximum
    #[cfg_attr(feature = "std", error("Invalid payload size {0}: must be between 1 and {1}"))]
    InvalidPayloadSize(usize, usize),

    /// Payload handed to the encoder does not match the configured size
    #[cfg_attr(feature = "std", error("Payload size mismatch: expected {expected} bytes, got {actual}"))]
    PayloadSizeMismatch {
        /// The configured payload size.
        expected: usize,
        /// The length of the payload actually supplied.
        actual: usize,
    },
}

// serde's `try_from` needs a Display error even without std
#[cfg(not(feature = "std"))]
impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}
