use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::color::Rgb;

/// How many commands may sit between the event source and the renderer.
/// A full queue blocks the producer instead of dropping, so a note-off
/// can never go missing behind its note-on.
pub const COMMAND_QUEUE_DEPTH: usize = 16;

/// One unit of render work, produced per classified note event and
/// consumed exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightCommand {
    /// Index of the primary LED on the strip
    pub led: usize,
    /// Base colour of the note before brightness scaling
    pub color: Rgb,
    /// Velocity-derived brightness of the primary LED
    pub brightness: u8,
    /// true lights the glow footprint, false extinguishes it
    pub note_on: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for LightCommand {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "LightCommand {{ led: {}, color: ({}, {}, {}), brightness: {}, note_on: {} }}",
            self.led,
            self.color.r,
            self.color.g,
            self.color.b,
            self.brightness,
            self.note_on,
        )
    }
}

/// Channel types for the command queue, the sole synchronization point
/// between the two tasks.
pub type CommandChannel = Channel<CriticalSectionRawMutex, LightCommand, COMMAND_QUEUE_DEPTH>;
pub type CommandSender =
    Sender<'static, CriticalSectionRawMutex, LightCommand, COMMAND_QUEUE_DEPTH>;
pub type CommandReceiver =
    Receiver<'static, CriticalSectionRawMutex, LightCommand, COMMAND_QUEUE_DEPTH>;
