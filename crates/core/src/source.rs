use crate::color::Rgb;
use crate::command::{CommandSender, LightCommand};
use crate::layout::led_for_note;
use crate::midi::{self, NoteEvent};
use crate::palette::Palette;

/// Transport boundary: anything that yields raw 3-byte channel-voice
/// events (status, note, velocity).
///
/// Awaiting the next event must yield the CPU while nothing is pending.
pub trait NoteStream {
    async fn next_event(&mut self) -> [u8; 3];
}

/// Build the render command for one classified note event.
///
/// Notes without a strip position produce nothing and are dropped
/// silently; that is the normal fate of notes outside the playable
/// range, not an error.
pub fn command_for(event: NoteEvent, palette: &Palette, strip_len: usize) -> Option<LightCommand> {
    match event {
        NoteEvent::On { note, velocity } => Some(LightCommand {
            led: led_for_note(note, strip_len)?,
            color: palette.color(note),
            brightness: midi::brightness_for(velocity),
            note_on: true,
        }),
        NoteEvent::Off { note } => Some(LightCommand {
            led: led_for_note(note, strip_len)?,
            color: Rgb::default(),
            brightness: 0,
            note_on: false,
        }),
    }
}

/// Producer half of the pipeline: translate transport events into
/// commands for the render engine.
///
/// Runs for the lifetime of the process. When the queue is full the
/// send blocks until the renderer catches up; commands are never
/// dropped or reordered.
pub async fn pump<T: NoteStream>(
    transport: &mut T,
    palette: &Palette,
    strip_len: usize,
    commands: CommandSender,
) -> ! {
    loop {
        let [status, note, velocity] = transport.next_event().await;
        let Some(event) = midi::classify(status, note, velocity) else {
            continue;
        };
        #[cfg(feature = "defmt")]
        defmt::info!("{}", event);
        if let Some(command) = command_for(event, palette, strip_len) {
            commands.send(command).await;
        }
    }
}
