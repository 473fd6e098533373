//! Core types for llproto framing

use crate::constants::{
    max_encoded_size, DEFAULT_BEGIN_MARKER, DEFAULT_END_MARKER, DEFAULT_PAYLOAD_SIZE,
    DEFAULT_REJECT_MARKER, MAX_PAYLOAD_SIZE,
};
use crate::error::FrameError;
use serde::{Deserialize, Serialize};

/// Framing parameters shared by a transmitter and a receiver
///
/// Both ends must agree on every field. A `FrameConfig` can only be built
/// through [`FrameConfig::new`] (or deserialization, which runs the same
/// checks), so a value in hand always has pairwise distinct markers and a
/// payload size in `1..=MAX_PAYLOAD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FrameConfigFields")]
pub struct FrameConfig {
    payload_size: usize,
    begin_marker: u8,
    end_marker: u8,
    reject_marker: u8,
}

impl FrameConfig {
    /// Create a validated configuration
    pub fn new(
        payload_size: usize,
        begin_marker: u8,
        end_marker: u8,
        reject_marker: u8,
    ) -> Result<Self, FrameError> {
        let config = Self {
            payload_size,
            begin_marker,
            end_marker,
            reject_marker,
        };
        config.validate()?;
        Ok(config)
    }

    /// Default markers with a custom payload size
    pub fn with_payload_size(payload_size: usize) -> Result<Self, FrameError> {
        Self::new(
            payload_size,
            DEFAULT_BEGIN_MARKER,
            DEFAULT_END_MARKER,
            DEFAULT_REJECT_MARKER,
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), FrameError> {
        if self.payload_size == 0 || self.payload_size > MAX_PAYLOAD_SIZE {
            return Err(FrameError::InvalidPayloadSize(
                self.payload_size,
                MAX_PAYLOAD_SIZE,
            ));
        }

        if self.begin_marker == self.end_marker
            || self.begin_marker == self.reject_marker
            || self.end_marker == self.reject_marker
        {
            return Err(FrameError::DuplicateMarkers {
                begin: self.begin_marker,
                end: self.end_marker,
                reject: self.reject_marker,
            });
        }

        Ok(())
    }

    /// Exact number of payload bytes per message
    pub const fn payload_size(&self) -> usize {
        self.payload_size
    }

    /// Marker opening a frame
    pub const fn begin_marker(&self) -> u8 {
        self.begin_marker
    }

    /// Marker closing a frame
    pub const fn end_marker(&self) -> u8 {
        self.end_marker
    }

    /// Marker escaping the byte that follows it
    pub const fn reject_marker(&self) -> u8 {
        self.reject_marker
    }

    /// Check whether `byte` collides with any of the three markers
    #[inline]
    pub const fn is_marker(&self, byte: u8) -> bool {
        byte == self.begin_marker || byte == self.end_marker || byte == self.reject_marker
    }

    /// Upper bound on the encoded size of any payload
    pub const fn max_encoded_size(&self) -> usize {
        max_encoded_size(self.payload_size)
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            payload_size: DEFAULT_PAYLOAD_SIZE,
            begin_marker: DEFAULT_BEGIN_MARKER,
            end_marker: DEFAULT_END_MARKER,
            reject_marker: DEFAULT_REJECT_MARKER,
        }
    }
}

/// Unchecked mirror of [`FrameConfig`] used as the deserialization source
#[derive(Deserialize)]
struct FrameConfigFields {
    payload_size: usize,
    begin_marker: u8,
    end_marker: u8,
    reject_marker: u8,
}

impl TryFrom<FrameConfigFields> for FrameConfig {
    type Error = FrameError;

    fn try_from(fields: FrameConfigFields) -> Result<Self, Self::Error> {
        FrameConfig::new(
            fields.payload_size,
            fields.begin_marker,
            fields.end_marker,
            fields.reject_marker,
        )
    }
}

/// Outcome of a single decode call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// A complete message was decoded into the output buffer
    Success,
    /// A required argument was absent or the output buffer cannot hold a payload
    BadParameters,
    /// No begin marker was found in the input
    NoMessage,
    /// The input ended in the middle of a message
    NoEnoughBytes,
    /// An end marker arrived before the payload was filled
    MessageTooShort,
    /// The payload was filled but the next byte was not the end marker
    MessageTooLong,
}

impl Status {
    /// Stable lowercase name, matching the serde representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::BadParameters => "bad_parameters",
            Status::NoMessage => "no_message",
            Status::NoEnoughBytes => "no_enough_bytes",
            Status::MessageTooShort => "message_too_short",
            Status::MessageTooLong => "message_too_long",
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status plus resume position reported by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// What happened
    pub status: Status,

    /// Offset of the first unconsumed byte, relative to the input slice
    ///
    /// 0 when nothing remains.
    pub remainder: usize,
}

impl ScanResult {
    /// Create a new result
    pub const fn new(status: Status, remainder: usize) -> Self {
        Self { status, remainder }
    }

    /// Shorthand for an argument failure
    pub const fn bad_parameters() -> Self {
        Self::new(Status::BadParameters, 0)
    }

    /// Check if a message was decoded
    pub const fn is_success(&self) -> bool {
        matches!(self.status, Status::Success)
    }

    /// Check if the caller may resume scanning at `remainder`
    pub const fn is_resumable(&self) -> bool {
        !matches!(self.status, Status::BadParameters)
    }
}
