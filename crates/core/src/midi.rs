use crate::{MAX_BRIGHTNESS, MIN_BRIGHTNESS};

/// A classified channel-voice message.
///
/// Only note events matter here; a note-on with velocity zero is the
/// usual running-status convention for note-off and is classified as
/// such.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteEvent {
    On { note: u8, velocity: u8 },
    Off { note: u8 },
}

#[cfg(feature = "defmt")]
impl defmt::Format for NoteEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            NoteEvent::On { note, velocity } => {
                defmt::write!(fmt, "Note On: {} velocity {}", note, velocity)
            }
            NoteEvent::Off { note } => defmt::write!(fmt, "Note Off: {}", note),
        }
    }
}

/// Classify a raw transport event.
///
/// Only the high nibble of the status byte is interpreted; anything
/// that is not a note message yields `None` and is dropped upstream.
pub fn classify(status: u8, note: u8, velocity: u8) -> Option<NoteEvent> {
    match status >> 4 {
        0x9 if velocity > 0 => Some(NoteEvent::On { note, velocity }),
        0x9 | 0x8 => Some(NoteEvent::Off { note }),
        _ => None,
    }
}

/// Map velocity onto the configured brightness window.
///
/// Velocity 127 hits the ceiling exactly; the floor keeps even the
/// softest press visible.
pub fn brightness_for(velocity: u8) -> u8 {
    let span = (MAX_BRIGHTNESS - MIN_BRIGHTNESS) as u16;
    (velocity.min(127) as u16 * span / 127) as u8 + MIN_BRIGHTNESS
}
