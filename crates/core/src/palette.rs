use crate::color::{Rgb, blend, rgb_from_u32};
use crate::{HIGH_NOTE, LOW_NOTE};

/// Number of MIDI note numbers the table covers
pub const NOTE_COUNT: usize = 128;

/// Anchor sequence red→orange→yellow→green→blue→indigo→violet
pub const RAINBOW: [Rgb; 7] = [
    rgb_from_u32(0xFF0000),
    rgb_from_u32(0xFF7F00),
    rgb_from_u32(0xFFFF00),
    rgb_from_u32(0x00FF00),
    rgb_from_u32(0x0000FF),
    rgb_from_u32(0x4B0082),
    rgb_from_u32(0x9400D3),
];

/// Note→colour table, built once at startup and read-only afterwards.
///
/// Notes outside the playable range stay black so they never light up.
pub struct Palette {
    colors: [Rgb; NOTE_COUNT],
}

impl Palette {
    /// Interpolate the anchor sequence across the playable note range.
    ///
    /// Each playable note falls into one of `anchors.len() - 1` equal
    /// segments and is blended between the segment's two anchors by its
    /// offset within the segment. When the segment span collapses to
    /// zero (more anchors than notes, or a single anchor) the blend
    /// ratio falls back to 0 instead of dividing by zero.
    pub fn new(anchors: &[Rgb]) -> Self {
        let mut colors = [Rgb::default(); NOTE_COUNT];
        if !anchors.is_empty() {
            let range = (HIGH_NOTE - LOW_NOTE) as usize;
            let segments = anchors.len() - 1;
            let span = if segments == 0 { 0 } else { range / segments };
            for (note, slot) in colors.iter_mut().enumerate() {
                if note < LOW_NOTE as usize || note > HIGH_NOTE as usize {
                    continue;
                }
                let offset = note - LOW_NOTE as usize;
                let index = offset * segments / range;
                let ratio = if span == 0 {
                    0.0
                } else {
                    (offset % span) as f32 / span as f32
                };
                *slot = blend(
                    anchors[index],
                    anchors[(index + 1) % anchors.len()],
                    ratio,
                );
            }
        }
        Self { colors }
    }

    /// The default seven-anchor rainbow across the 88-key range
    pub fn rainbow() -> Self {
        Self::new(&RAINBOW)
    }

    /// Base colour for a note, black outside the playable range
    pub fn color(&self, note: u8) -> Rgb {
        self.colors
            .get(note as usize)
            .copied()
            .unwrap_or_default()
    }
}
