use crate::{HIGH_NOTE, LOW_NOTE};

/// Map a note onto a strip of `strip_len` pixels.
///
/// The playable range spreads linearly across the strip; notes outside
/// it have no position. The top note computes to exactly `strip_len`,
/// so the result is clamped back onto the strip.
pub fn led_for_note(note: u8, strip_len: usize) -> Option<usize> {
    if strip_len == 0 || note < LOW_NOTE || note > HIGH_NOTE {
        return None;
    }
    let offset = (note - LOW_NOTE) as usize;
    let span = (HIGH_NOTE - LOW_NOTE) as usize;
    Some((offset * strip_len / span).min(strip_len - 1))
}
