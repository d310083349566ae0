#![no_std]

pub mod color;
pub mod command;
pub mod layout;
pub mod midi;
pub mod palette;
pub mod render;
pub mod source;

pub use color::Rgb;
pub use command::{CommandChannel, CommandReceiver, CommandSender, LightCommand};
pub use midi::NoteEvent;
pub use palette::Palette;
pub use render::{RenderEngine, Strip};
pub use source::NoteStream;

/// Lowest playable MIDI note (A0 on an 88-key keyboard)
pub const LOW_NOTE: u8 = 21;

/// Highest playable MIDI note (C8)
pub const HIGH_NOTE: u8 = 108;

/// Brightness floor so the softest touch still produces a visible glow
pub const MIN_BRIGHTNESS: u8 = 20;

/// Brightness at full velocity
pub const MAX_BRIGHTNESS: u8 = 255;
