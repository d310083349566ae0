use crate::STRIP_LENGTH;
use esp_hal::{
    Async,
    gpio::interconnect::PeripheralOutput,
    rmt::{ConstChannelAccess, Rmt, Tx},
};
use esp_hal_smartled::{LedAdapterError, SmartLedsAdapterAsync, buffer_size_async};
use keylight_core::{Rgb, Strip};
use smart_leds::{SmartLedsWriteAsync, gamma};

/// We must know what the LED TX buffer size is as a constant for the types involved here
const STRIP_INTERNAL_BUF_LEN: usize = buffer_size_async(STRIP_LENGTH);

/// Pixel state staged by the render engine between transmissions
pub type PixelBuffer = [Rgb; STRIP_LENGTH];

/// Holds the state needed to drive the LED strip
pub struct StripDriver {
    /// Driver for the led array. We have to size it here to exactly what we will get back from
    /// the `SmartLedsAdapterAsync::new()` function when we set up the driver below
    led: SmartLedsAdapterAsync<ConstChannelAccess<Tx, 0>, STRIP_INTERNAL_BUF_LEN>,
    pixels: PixelBuffer,
}

impl StripDriver {
    /// Create a new driver for the LED strip.
    ///
    /// # Parameters
    /// * `rmt` - The RMT peripheral device to use for driving the LED strip
    /// * `pin` - The GPIO pin to which the LED strip is connected
    pub fn new<'a>(rmt: Rmt<Async>, pin: impl PeripheralOutput<'a>) -> Self {
        let channel = rmt.channel0;
        let buffer = [0_u32; buffer_size_async(STRIP_LENGTH)];
        let led = SmartLedsAdapterAsync::new(channel, pin, buffer);
        Self {
            led,
            pixels: [Rgb::default(); STRIP_LENGTH],
        }
    }
}

impl Strip for StripDriver {
    type Error = LedAdapterError;

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn clear(&mut self) {
        self.pixels = [Rgb::default(); STRIP_LENGTH];
    }

    /// Push the staged buffer out to the LED devices.
    ///
    /// Gamma correction is applied here at the boundary so the staged
    /// values stay linear for the render engine.
    async fn transmit(&mut self) -> Result<(), Self::Error> {
        self.led.write(gamma(self.pixels.iter().cloned())).await
    }
}
