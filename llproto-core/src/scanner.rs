//! Stream scanner for captured or noisy input
//!
//! Drives [`decode`](crate::decoder::decode) repeatedly over a whole buffer, resuming at each
//! reported remainder, and collects every frame that decodes cleanly.

use crate::decoder::{run, Pass};
use crate::types::{FrameConfig, ScanResult, Status};
use alloc::vec;
use alloc::vec::Vec;
use bytes::Bytes;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// A frame found at a specific offset in the stream
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedFrame {
    /// Byte offset of the frame's begin marker
    pub offset: usize,

    /// Total size of the encoded frame in bytes, markers and escapes included
    pub size: usize,

    /// The unescaped payload
    pub payload: Bytes,
}

/// Scan statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ScanStats {
    /// Total bytes scanned
    pub bytes_scanned: usize,

    /// Number of valid frames found
    pub frames_found: usize,

    /// Number of candidates closed by an early end marker
    pub too_short: usize,

    /// Number of candidates that overran the payload size
    pub too_long: usize,

    /// Bytes at the end of the stream belonging to an unfinished frame
    pub incomplete_tail: usize,

    /// Total bytes recovered (sum of all valid frame sizes)
    pub bytes_recovered: usize,
}

impl ScanStats {
    /// Calculate recovery rate as a percentage
    pub fn recovery_rate(&self) -> f64 {
        if self.bytes_scanned == 0 {
            0.0
        } else {
            (self.bytes_recovered as f64 / self.bytes_scanned as f64) * 100.0
        }
    }

    /// Number of frame candidates that failed to decode
    pub fn decode_failures(&self) -> usize {
        self.too_short + self.too_long
    }
}

/// Scan a byte stream for valid frames
///
/// Frames that are too short or too long are skipped; scanning resumes
/// where the decoder says it should. An unfinished frame at the very end of
/// the stream is not reported.
pub fn scan_stream(config: &FrameConfig, data: &[u8]) -> Vec<LocatedFrame> {
    scan_stream_with_stats(config, data).0
}

/// Scan stream with statistics
pub fn scan_stream_with_stats(
    config: &FrameConfig,
    data: &[u8],
) -> (Vec<LocatedFrame>, ScanStats) {
    let mut stats = ScanStats {
        bytes_scanned: data.len(),
        ..Default::default()
    };

    let mut results = Vec::new();
    let mut payload = vec![0u8; config.payload_size()];
    let mut pos = 0;

    #[cfg(feature = "logging")]
    debug!("Starting stream scan of {} bytes", data.len());

    while pos < data.len() {
        let window = &data[pos..];
        let Pass {
            result: ScanResult { status, remainder },
            frame_start,
        } = run(config, window, &mut payload);

        match status {
            Status::Success => {
                let offset = pos + frame_start;
                let end = if remainder == 0 { data.len() } else { pos + remainder };
                let size = end - offset;

                #[cfg(feature = "logging")]
                debug!("Recovered frame at offset {} (size: {} bytes)", offset, size);

                stats.bytes_recovered += size;
                results.push(LocatedFrame {
                    offset,
                    size,
                    payload: Bytes::copy_from_slice(&payload),
                });
                pos = end;
            }
            Status::MessageTooShort | Status::MessageTooLong => {
                #[cfg(feature = "logging")]
                warn!(
                    "Rejected frame candidate at offset {}: {}",
                    pos + frame_start,
                    status
                );

                if status == Status::MessageTooShort {
                    stats.too_short += 1;
                } else {
                    stats.too_long += 1;
                }
                pos += remainder;
            }
            Status::NoEnoughBytes => {
                stats.incomplete_tail = window.len() - remainder;

                #[cfg(feature = "logging")]
                debug!(
                    "Unfinished frame at offset {} ({} bytes)",
                    pos + remainder,
                    stats.incomplete_tail
                );
                break;
            }
            Status::NoMessage | Status::BadParameters => break,
        }
    }

    stats.frames_found = results.len();

    #[cfg(feature = "logging")]
    debug!(
        "Scan complete: found {} valid frames out of {} bytes scanned",
        stats.frames_found, stats.bytes_scanned
    );

    (results, stats)
}
