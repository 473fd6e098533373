//! Reference vectors for begin=0xAA, end=0xBB, reject=0xCC, payload size 16

use llproto_core::{
    decoder::decode,
    encoder::{encode_frame, encoded_size},
    FrameConfig, ScanResult, Status,
};

fn hex_bytes(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).unwrap()
}

fn config() -> FrameConfig {
    FrameConfig::default()
}

/// Encode `input`, compare with `expected`, then decode it back
fn check_vector(input: &str, expected: &str) {
    let config = config();
    let payload = hex_bytes(input);
    let expected = hex_bytes(expected);

    assert_eq!(encoded_size(&config, Some(&payload[..])), expected.len());

    let encoded = encode_frame(&config, &payload).unwrap();
    assert_eq!(encoded.as_ref(), expected.as_slice());

    let mut output = [0u8; 16];
    let result = decode(&config, Some(&encoded[..]), Some(&mut output[..]));
    assert_eq!(result, ScanResult::new(Status::Success, 0));
    assert_eq!(&output[..], payload.as_slice());
}

#[test]
fn vector_plain_payload() {
    check_vector(
        "F3 77 56 C4 95 94 76 8B 12 88 34 DD 44 77 51 31",
        "AA F3 77 56 C4 95 94 76 8B 12 88 34 DD 44 77 51 31 BB",
    );
}

#[test]
fn vector_end_marker_in_payload() {
    check_vector(
        "F3 BB 56 C4 95 94 76 8B 12 88 34 DD 44 77 51 31",
        "AA F3 CC BB 56 C4 95 94 76 8B 12 88 34 DD 44 77 51 31 BB",
    );
}

#[test]
fn vector_reject_marker_in_payload() {
    check_vector(
        "F3 CC 56 C4 95 94 76 8B 12 88 34 DD 44 77 51 31",
        "AA F3 CC CC 56 C4 95 94 76 8B 12 88 34 DD 44 77 51 31 BB",
    );
}

#[test]
fn vector_mixed_markers() {
    check_vector(
        "F3 BB AA C4 95 CC 76 8B 12 CC 34 DD AA 77 51 BB",
        "AA F3 CC BB CC AA C4 95 CC CC 76 8B 12 CC CC 34 DD CC AA 77 51 CC BB BB",
    );
}

#[test]
fn vector_all_reject() {
    let input = "CC ".repeat(16);
    let expected = format!("AA {}BB", "CC ".repeat(32));
    check_vector(&input, &expected);
}

#[test]
fn vector_all_begin() {
    let input = "AA ".repeat(16);
    let expected = format!("AA {}BB", "CC AA ".repeat(16));
    check_vector(&input, &expected);
}

#[test]
fn vector_all_end() {
    let input = "BB ".repeat(16);
    let expected = format!("AA {}BB", "CC BB ".repeat(16));
    check_vector(&input, &expected);
}

#[test]
fn vector_truncated_frame() {
    let config = config();
    let stream = hex_bytes("AA F3 77 56 C4 95 94 76");
    let mut output = [0u8; 16];

    let result = decode(&config, Some(&stream[..]), Some(&mut output[..]));

    assert_eq!(result, ScanResult::new(Status::NoEnoughBytes, 0));
}

#[test]
fn vector_too_short() {
    let config = config();
    let stream = hex_bytes("AA F3 77 56 C4 BB");
    let mut output = [0u8; 16];

    let result = decode(&config, Some(&stream[..]), Some(&mut output[..]));

    assert_eq!(result, ScanResult::new(Status::MessageTooShort, 6));
}

#[test]
fn vector_too_long() {
    let config = config();
    let stream = hex_bytes("AA F3 77 56 C4 95 94 76 8B 12 88 34 DD 44 77 51 31 31 BB");
    let mut output = [0u8; 16];

    let result = decode(&config, Some(&stream[..]), Some(&mut output[..]));

    assert_eq!(result, ScanResult::new(Status::MessageTooLong, 17));
}

#[test]
fn vector_lost_frame_after_distortion() {
    // Frame one is cut after its reject marker; frame two follows directly
    let config = FrameConfig::with_payload_size(12).unwrap();
    let stream = hex_bytes(
        "AA DD DD DD DD DD DD CC AA DD DD DD DD DD DD DD DD DD DD DD DD BB",
    );
    let mut output = [0u8; 12];

    let first = decode(&config, Some(&stream[..]), Some(&mut output[..]));
    assert_eq!(first.status, Status::MessageTooLong);

    let tail = &stream[first.remainder..];
    let second = decode(&config, Some(tail), Some(&mut output[..]));
    assert_eq!(second.status, Status::NoMessage);
}

/// Expected status, remainder and payload for damaged or unusual streams,
/// payload size 4
const MALFORMED: &[(&str, Status, usize, Option<&str>)] = &[
    // end and begin markers after a doubled reject are dropped
    ("AA CC CC BB 01 02 03 BB", Status::Success, 0, Some("CC 01 02 03")),
    ("AA CC CC AA BB 01 02 03 BB", Status::Success, 0, Some("CC 01 02 03")),
    ("00 AA CC CC AA 01 02 03 BB 11", Status::Success, 9, Some("CC 01 02 03")),
    // a third reject starts a fresh escape
    ("AA CC CC CC BB 01 02 BB", Status::Success, 0, Some("CC BB 01 02")),
    ("AA 01 CC CC BB CC BB 02 BB", Status::Success, 0, Some("01 CC BB 02")),
    // a doubled reject that fills the payload is followed by the end marker
    ("AA 01 02 03 CC CC BB 05", Status::Success, 7, Some("01 02 03 CC")),
    // once a data byte is stored the end marker counts again
    ("AA CC CC 01 BB 00", Status::MessageTooShort, 5, None),
    ("AA 01 BB", Status::MessageTooShort, 3, None),
    ("AA 01 02 03 04 CC BB", Status::MessageTooLong, 5, None),
    ("AA 01 AA 02 03 04 BB", Status::Success, 0, Some("01 02 03 04")),
    ("CC AA 01 02 03 04 BB", Status::NoMessage, 7, None),
    ("BB CC 01", Status::NoMessage, 3, None),
];

#[test]
fn vector_malformed_streams() {
    let config = FrameConfig::with_payload_size(4).unwrap();

    for &(stream, status, remainder, payload) in MALFORMED {
        let stream = hex_bytes(stream);
        let mut output = [0u8; 4];

        let result = decode(&config, Some(&stream[..]), Some(&mut output[..]));

        assert_eq!(result, ScanResult::new(status, remainder), "stream {:02X?}", stream);
        if let Some(payload) = payload {
            assert_eq!(output.to_vec(), hex_bytes(payload), "stream {:02X?}", stream);
        }
    }
}
