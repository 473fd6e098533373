//! Fuzz entry points for llproto-core
//!
//! Each function takes raw fuzzer input and must never panic. The first
//! input bytes pick the framing configuration so that marker collisions and
//! small payload sizes are exercised, not only the defaults.
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Call these functions from a `fuzz_target!` and run `cargo fuzz run <target>`

#![warn(missing_docs)]

use llproto_core::{
    decoder::decode,
    encoder::{encode_frame, encoded_size},
    scanner::scan_stream_with_stats,
    FrameConfig, Status,
};

/// Split fuzzer input into a configuration and the remaining bytes
fn split_config(data: &[u8]) -> Option<(FrameConfig, &[u8])> {
    match data {
        [size, begin, end, reject, rest @ ..] => {
            let config = FrameConfig::new(*size as usize % 64 + 1, *begin, *end, *reject).ok()?;
            Some((config, rest))
        }
        _ => None,
    }
}

/// Decode one frame and check the remainder stays inside the input
pub fn fuzz_decode(data: &[u8]) {
    let Some((config, input)) = split_config(data) else {
        return;
    };
    let mut output = vec![0u8; config.payload_size()];

    let result = decode(&config, Some(input), Some(&mut output[..]));
    assert!(result.remainder <= input.len());
    assert_ne!(result.status, Status::BadParameters);
}

/// Encode a payload and check that it decodes back unchanged
pub fn fuzz_encode(data: &[u8]) {
    let Some((config, rest)) = split_config(data) else {
        return;
    };
    if rest.len() < config.payload_size() {
        return;
    }
    let payload = &rest[..config.payload_size()];

    let Ok(frame) = encode_frame(&config, payload) else {
        return;
    };
    assert_eq!(frame.len(), encoded_size(&config, Some(payload)));

    let mut output = vec![0u8; config.payload_size()];
    let result = decode(&config, Some(&frame[..]), Some(&mut output[..]));
    assert_eq!(result.status, Status::Success);
    assert_eq!(output, payload);
}

/// Scan the input and check every located frame lies within it
pub fn fuzz_scan(data: &[u8]) {
    let Some((config, input)) = split_config(data) else {
        return;
    };

    let (frames, stats) = scan_stream_with_stats(&config, input);
    assert_eq!(frames.len(), stats.frames_found);
    for frame in &frames {
        assert!(frame.offset + frame.size <= input.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_decode_empty() {
        fuzz_decode(&[]);
        fuzz_decode(&[4, 0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn test_fuzz_decode_random() {
        fuzz_decode(&[3, 0xAA, 0xBB, 0xCC, 0xAA, 0x12, 0x34, 0x56, 0x78, 0xBB]);
    }

    #[test]
    fn test_fuzz_duplicate_markers_ignored() {
        fuzz_decode(&[3, 0x01, 0x01, 0x02, 0x01, 0x01]);
    }

    #[test]
    fn test_fuzz_decode_doubled_reject() {
        fuzz_decode(&[3, 0xAA, 0xBB, 0xCC, 0xAA, 0xCC, 0xCC, 0xBB, 0xAA, 0x01, 0x02, 0xBB]);
    }

    #[test]
    fn test_fuzz_encode_markers() {
        fuzz_encode(&[3, 0xAA, 0xBB, 0xCC, 0xCC, 0xBB, 0xAA, 0xCC]);
    }

    #[test]
    fn test_fuzz_scan_random() {
        let mut data = vec![15, 0xAA, 0xBB, 0xCC];
        data.extend_from_slice(&[0xFF; 1024]);
        fuzz_scan(&data);
    }
}
