//! Constants and limits for the llproto frame format

/// Default begin marker
pub const DEFAULT_BEGIN_MARKER: u8 = 0xAA;

/// Default end marker
pub const DEFAULT_END_MARKER: u8 = 0xBB;

/// Default reject (escape) marker
pub const DEFAULT_REJECT_MARKER: u8 = 0xCC;

/// Default payload size in bytes
pub const DEFAULT_PAYLOAD_SIZE: usize = 16;

/// Maximum payload size (1 MB)
///
/// The format has no length field, so this only bounds what a receiver is
/// willing to accumulate for a single message.
pub const MAX_PAYLOAD_SIZE: usize = 1024 * 1024;

/// Bytes added around every payload (begin + end marker)
pub const FRAME_OVERHEAD: usize = 2;

/// Size of a frame whose payload contains no marker values
pub const fn min_encoded_size(payload_size: usize) -> usize {
    payload_size + FRAME_OVERHEAD
}

/// Size of a frame whose payload consists only of marker values
///
/// No encoded frame is ever longer than this.
pub const fn max_encoded_size(payload_size: usize) -> usize {
    payload_size * 2 + FRAME_OVERHEAD
}
