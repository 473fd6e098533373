//! Frame decoding
//!
//! [`decode`] scans an arbitrary byte slice for the first frame that opens
//! there, unescapes its payload into a caller buffer and reports a
//! [`Status`] plus the offset where the next call should resume. Nothing is
//! retained between calls; each call starts over in [`State::Searching`].
//!
//! The automaton is expressed as a pure [`transition`] function over
//! `(state, previous raw byte, current byte)`. The driver in [`decode`] adds
//! the two things a transition cannot see: how many payload bytes have been
//! stored, and where in the slice the current frame began.
//!
//! # Resynchronisation
//!
//! The format carries no length or sequence information. If a frame is cut
//! off after a reject marker and the next frame starts right away, its
//! begin marker is taken as escaped payload data and the next frame is
//! reported as part of a [`Status::MessageTooLong`]. Layers above this one
//! must add sequence numbers or checksums if that loss matters.

use crate::types::{FrameConfig, ScanResult, Status};

/// Automaton state between two input bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Outside any frame, looking for a begin marker
    Searching,
    /// Inside a frame, accumulating payload
    InMessage,
    /// The previous byte was an unescaped reject marker; the next byte is data
    EscapePending,
    /// The last stored byte was a reject marker taken from a doubled pair
    ///
    /// Begin and end markers are dropped here instead of opening or closing
    /// anything. The next data byte returns to [`State::InMessage`] and a
    /// reject marker starts a new escape.
    EscapeDouble,
}

impl State {
    /// Check if the automaton is inside a frame
    pub const fn in_frame(&self) -> bool {
        !matches!(self, State::Searching)
    }
}

/// Effect of one transition on the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Consume the byte without storing it
    Skip,
    /// The byte is a begin marker opening a new frame
    Open,
    /// Append the byte to the payload
    Store,
    /// An unescaped end marker arrived inside the frame
    PrematureEnd,
}

/// Single step of the decoding automaton
///
/// `previous` is the raw input byte before `byte`, or `None` at the start of
/// the slice. The check that a filled payload is followed by the end
/// marker happens in [`decode`], before this function is consulted.
pub fn transition(
    config: &FrameConfig,
    state: State,
    previous: Option<u8>,
    byte: u8,
) -> (State, Action) {
    let begin = config.begin_marker();
    let end = config.end_marker();
    let reject = config.reject_marker();

    match state {
        State::Searching => {
            if byte == begin && previous != Some(reject) {
                (State::InMessage, Action::Open)
            } else {
                (State::Searching, Action::Skip)
            }
        }
        State::EscapePending => {
            let next = if byte == reject {
                State::EscapeDouble
            } else {
                State::InMessage
            };
            (next, Action::Store)
        }
        State::InMessage => {
            if byte == end {
                (State::Searching, Action::PrematureEnd)
            } else if byte == reject {
                (State::EscapePending, Action::Skip)
            } else if byte == begin {
                // Stray begin markers inside a frame are dropped
                (State::InMessage, Action::Skip)
            } else {
                (State::InMessage, Action::Store)
            }
        }
        // Control bytes are not honoured until a data byte is stored or a
        // fresh escape starts.
        State::EscapeDouble => {
            if byte == reject {
                (State::EscapePending, Action::Skip)
            } else if byte == begin || byte == end {
                (State::EscapeDouble, Action::Skip)
            } else {
                (State::InMessage, Action::Store)
            }
        }
    }
}

/// Decode at most one frame from `input` into `output`
///
/// Returns [`Status::BadParameters`] without scanning or writing when an
/// argument is absent or `output` is shorter than the configured payload
/// size. Otherwise:
///
/// - [`Status::Success`]: `output[..payload_size]` holds the payload;
///   `remainder` is the index just past the end marker, or 0 if that was
///   the last byte.
/// - [`Status::MessageTooShort`]: `remainder` is the index just past the
///   premature end marker.
/// - [`Status::MessageTooLong`]: `remainder` is the index of the byte that
///   should have been the end marker.
/// - [`Status::NoEnoughBytes`]: `remainder` is the index of the begin marker
///   of the unfinished frame.
/// - [`Status::NoMessage`]: `remainder` is `input.len()`.
///
/// `output` may be partially overwritten by any status other than
/// `BadParameters` and `NoMessage`.
pub fn decode(
    config: &FrameConfig,
    input: Option<&[u8]>,
    output: Option<&mut [u8]>,
) -> ScanResult {
    let (Some(input), Some(output)) = (input, output) else {
        return ScanResult::bad_parameters();
    };

    if output.len() < config.payload_size() {
        return ScanResult::bad_parameters();
    }

    run(config, input, output).result
}

/// Outcome of one pass of the automaton over a slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pass {
    pub result: ScanResult,
    /// Index of the begin marker of the frame this pass opened, 0 if none
    pub frame_start: usize,
}

const fn finish(status: Status, remainder: usize, frame_start: usize) -> Pass {
    Pass {
        result: ScanResult::new(status, remainder),
        frame_start,
    }
}

/// Run the automaton over `input`
///
/// `output` must hold at least `payload_size` bytes.
pub(crate) fn run(config: &FrameConfig, input: &[u8], output: &mut [u8]) -> Pass {
    let payload_size = config.payload_size();
    let mut state = State::Searching;
    let mut frame_start = 0;
    let mut filled = 0;
    let mut pos = 0;

    while pos < input.len() {
        if !state.in_frame() {
            // Searching only reacts to begin markers
            match find_begin(config, input, pos) {
                Some(at) => pos = at,
                None => break,
            }
        } else if filled == payload_size {
            if input[pos] != config.end_marker() {
                return finish(Status::MessageTooLong, pos, frame_start);
            }
            let next = pos + 1;
            let remainder = if next == input.len() { 0 } else { next };
            return finish(Status::Success, remainder, frame_start);
        }

        let byte = input[pos];
        let previous = pos.checked_sub(1).map(|i| input[i]);
        let (next, action) = transition(config, state, previous, byte);

        match action {
            Action::Skip => {}
            Action::Open => {
                frame_start = pos;
                filled = 0;
            }
            Action::Store => {
                output[filled] = byte;
                filled += 1;
            }
            Action::PrematureEnd => {
                return finish(Status::MessageTooShort, pos + 1, frame_start);
            }
        }

        state = next;
        pos += 1;
    }

    if state.in_frame() {
        finish(Status::NoEnoughBytes, frame_start, frame_start)
    } else {
        finish(Status::NoMessage, input.len(), frame_start)
    }
}

/// Next begin marker candidate at or after `from`
fn find_begin(config: &FrameConfig, input: &[u8], from: usize) -> Option<usize> {
    memchr::memchr(config.begin_marker(), &input[from..]).map(|rel| from + rel)
}
