use crate::color::{Rgb, scaled};
use crate::command::{CommandReceiver, LightCommand};

/// How far the glow of one note reaches on each side of its LED
pub const GLOW_RADIUS: usize = 2;

/// Strip transmission boundary.
///
/// `set_pixel` and `clear` only stage values in the driver's local
/// buffer; nothing reaches the physical strip until `transmit`. The
/// engine stages a whole command and transmits once, so partial glow
/// footprints are never visible.
pub trait Strip {
    type Error;

    /// Stage one pixel. Out-of-range indices are the driver's problem
    /// and may be ignored; the engine never produces them.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Stage black everywhere
    fn clear(&mut self);

    /// Push the staged buffer out to the physical strip
    async fn transmit(&mut self) -> Result<(), Self::Error>;
}

impl<S: Strip> Strip for &mut S {
    type Error = S::Error;

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        (**self).set_pixel(index, color);
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    async fn transmit(&mut self) -> Result<(), Self::Error> {
        (**self).transmit().await
    }
}

/// Consumer half of the pipeline.
///
/// Holds no state about previously active notes: each command is
/// applied on its own, and overlapping glow footprints let the later
/// command overwrite shared pixels.
pub struct RenderEngine<S: Strip> {
    strip: S,
    strip_len: usize,
}

impl<S: Strip> RenderEngine<S> {
    pub fn new(strip: S, strip_len: usize) -> Self {
        Self { strip, strip_len }
    }

    /// Blank the whole strip in one transmission; used once at startup
    pub async fn blank(&mut self) -> Result<(), S::Error> {
        self.strip.clear();
        self.strip.transmit().await
    }

    /// Apply one command to the strip with a single transmission.
    ///
    /// A note-on writes the primary LED at full brightness and up to
    /// two neighbours on each side attenuated by 1/(distance+1); a
    /// note-off writes black over that same footprint so the glow is
    /// fully extinguished, whatever happened in between.
    pub async fn apply(&mut self, command: &LightCommand) -> Result<(), S::Error> {
        let first = command.led.saturating_sub(GLOW_RADIUS);
        let last = (command.led + GLOW_RADIUS).min(self.strip_len.saturating_sub(1));
        for led in first..=last {
            let pixel = if command.note_on {
                let distance = command.led.abs_diff(led) as u8;
                scaled(command.color, command.brightness / (distance + 1))
            } else {
                Rgb::default()
            };
            self.strip.set_pixel(led, pixel);
        }
        self.strip.transmit().await
    }

    /// Drain the command queue for the lifetime of the process,
    /// blocking while it is empty.
    ///
    /// Returns only when a transmission fails; retrying is not the
    /// engine's business, the caller escalates.
    pub async fn run(&mut self, commands: CommandReceiver) -> Result<(), S::Error> {
        loop {
            let command = commands.receive().await;
            #[cfg(feature = "defmt")]
            defmt::debug!("{}", command);
            self.apply(&command).await?;
        }
    }
}
