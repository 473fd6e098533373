//! Frame encoding
//!
//! A frame is laid out as:
//! 1. Begin marker (1 byte)
//! 2. Payload (`payload_size` bytes), where every byte equal to one of the
//!    three markers is preceded by the reject marker
//! 3. End marker (1 byte)

use crate::constants::FRAME_OVERHEAD;
use crate::error::FrameError;
use crate::types::FrameConfig;
use bytes::{BufMut, Bytes, BytesMut};

/// Exact number of bytes [`encode_into`] will write for `payload`
///
/// Returns 0 when `payload` is absent or is not exactly
/// `config.payload_size()` bytes long. Any real frame is at least 2 bytes,
/// so 0 never collides with a valid size.
pub fn encoded_size(config: &FrameConfig, payload: Option<&[u8]>) -> usize {
    let Some(payload) = payload else {
        return 0;
    };
    if payload.len() != config.payload_size() {
        return 0;
    }

    let escaped = payload.iter().filter(|&&b| config.is_marker(b)).count();
    config.payload_size() + FRAME_OVERHEAD + escaped
}

/// Encode `payload` into the front of `output`
///
/// Returns the number of bytes written, which always equals
/// [`encoded_size`] for the same payload. Nothing is written and 0 is
/// returned when either argument is absent, the payload has the wrong
/// length, or `output` is too small to hold the whole frame.
pub fn encode_into(
    config: &FrameConfig,
    payload: Option<&[u8]>,
    output: Option<&mut [u8]>,
) -> usize {
    let (Some(payload), Some(output)) = (payload, output) else {
        return 0;
    };

    let size = encoded_size(config, Some(payload));
    if size == 0 || output.len() < size {
        return 0;
    }

    let mut dst = &mut output[..size];
    put_frame(config, payload, &mut dst);
    debug_assert!(dst.is_empty());
    size
}

/// Encode `payload` into a freshly allocated frame
pub fn encode_frame(config: &FrameConfig, payload: &[u8]) -> Result<Bytes, FrameError> {
    if payload.len() != config.payload_size() {
        return Err(FrameError::PayloadSizeMismatch {
            expected: config.payload_size(),
            actual: payload.len(),
        });
    }

    let mut buf = BytesMut::with_capacity(encoded_size(config, Some(payload)));
    put_frame(config, payload, &mut buf);
    Ok(buf.freeze())
}

/// Write begin marker, escaped payload and end marker
fn put_frame<B: BufMut>(config: &FrameConfig, payload: &[u8], buf: &mut B) {
    buf.put_u8(config.begin_marker());

    for &byte in payload {
        if config.is_marker(byte) {
            buf.put_u8(config.reject_marker());
        }
        buf.put_u8(byte);
    }

    buf.put_u8(config.end_marker());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::max_encoded_size;

    const PAYLOAD: [u8; 16] = [
        0xF3, 0x77, 0x56, 0xC4, 0x95, 0x94, 0x76, 0x8B, 0x12, 0x88, 0x34, 0xDD, 0x44, 0x77, 0x51,
        0x31,
    ];

    #[test]
    fn test_encode_without_collisions() {
        let config = FrameConfig::default();
        let encoded = encode_frame(&config, &PAYLOAD).unwrap();

        assert_eq!(encoded.len(), 18);
        assert_eq!(encoded[0], 0xAA);
        assert_eq!(&encoded[1..17], &PAYLOAD);
        assert_eq!(encoded[17], 0xBB);
    }

    #[test]
    fn test_encode_escapes_end_marker() {
        let config = FrameConfig::default();
        let mut payload = PAYLOAD;
        payload[1] = 0xBB;

        let encoded = encode_frame(&config, &payload).unwrap();

        assert_eq!(encoded.len(), 19);
        assert_eq!(&encoded[..5], &[0xAA, 0xF3, 0xCC, 0xBB, 0x56]);
        assert_eq!(encoded[18], 0xBB);
    }

    #[test]
    fn test_encode_doubles_reject_marker() {
        let config = FrameConfig::default();
        let mut payload = PAYLOAD;
        payload[1] = 0xCC;

        let encoded = encode_frame(&config, &payload).unwrap();

        assert_eq!(&encoded[..5], &[0xAA, 0xF3, 0xCC, 0xCC, 0x56]);
    }

    #[test]
    fn test_encode_mixed_markers() {
        let config = FrameConfig::default();
        let payload = [
            0xF3, 0xBB, 0xAA, 0xC4, 0x95, 0xCC, 0x76, 0x8B, 0x12, 0xCC, 0x34, 0xDD, 0xAA, 0x77,
            0x51, 0xBB,
        ];
        let expected = [
            0xAA, 0xF3, 0xCC, 0xBB, 0xCC, 0xAA, 0xC4, 0x95, 0xCC, 0xCC, 0x76, 0x8B, 0x12, 0xCC,
            0xCC, 0x34, 0xDD, 0xCC, 0xAA, 0x77, 0x51, 0xCC, 0xBB, 0xBB,
        ];

        assert_eq!(encoded_size(&config, Some(&payload[..])), 24);
        assert_eq!(encode_frame(&config, &payload).unwrap().as_ref(), &expected);
    }

    #[test]
    fn test_all_marker_payloads_hit_upper_bound() {
        let config = FrameConfig::default();
        for marker in [0xAA, 0xBB, 0xCC] {
            let payload = [marker; 16];
            let encoded = encode_frame(&config, &payload).unwrap();

            assert_eq!(encoded.len(), max_encoded_size(16));
            assert_eq!(encoded[0], 0xAA);
            assert_eq!(encoded[33], 0xBB);
            for pair in encoded[1..33].chunks(2) {
                assert_eq!(pair, &[0xCC, marker]);
            }
        }
    }

    #[test]
    fn test_encode_into_matches_encode_frame() {
        let config = FrameConfig::default();
        let mut payload = PAYLOAD;
        payload[4] = 0xAA;
        let mut output = [0u8; 40];

        let written = encode_into(&config, Some(&payload[..]), Some(&mut output[..]));

        assert_eq!(written, encoded_size(&config, Some(&payload[..])));
        assert_eq!(
            &output[..written],
            encode_frame(&config, &payload).unwrap().as_ref()
        );
        assert!(output[written..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_absent_arguments_write_nothing() {
        let config = FrameConfig::default();
        let mut output = [0x11u8; 40];

        assert_eq!(encoded_size(&config, None), 0);
        assert_eq!(encode_into(&config, None, Some(&mut output[..])), 0);
        assert_eq!(encode_into(&config, Some(&PAYLOAD[..]), None), 0);
        assert!(output.iter().all(|&b| b == 0x11));
    }

    #[test]
    fn test_short_output_writes_nothing() {
        let config = FrameConfig::default();
        let mut output = [0x11u8; 17];

        assert_eq!(encode_into(&config, Some(&PAYLOAD[..]), Some(&mut output[..])), 0);
        assert!(output.iter().all(|&b| b == 0x11));
    }

    #[test]
    fn test_wrong_payload_length() {
        let config = FrameConfig::default();

        assert_eq!(encoded_size(&config, Some(&PAYLOAD[..15])), 0);
        assert!(matches!(
            encode_frame(&config, &PAYLOAD[..15]),
            Err(FrameError::PayloadSizeMismatch {
                expected: 16,
                actual: 15
            })
        ));
    }
}
