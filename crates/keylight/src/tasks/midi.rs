use defmt::info;
use embassy_futures::join::join;
use embassy_usb::class::midi::MidiClass;
use embassy_usb::{Builder, Config as UsbConfig};
use esp_hal::otg_fs::{
    Usb,
    asynch::{Config as OtgConfig, Driver},
};
use esp_hal::peripherals::{GPIO19, GPIO20, USB0};
use keylight_core::{CommandSender, Palette, source};

use crate::STRIP_LENGTH;
use crate::drivers::usb_midi::{MIDI_PACKET_SIZE, UsbMidiStream};

/// Espressif's test VID/PID pair, good enough for a bus-powered toy
const USB_VID: u16 = 0x303A;
const USB_PID: u16 = 0x4000;

/// Producer task: owns the USB device stack and feeds the command
/// queue.
///
/// The USB driver future and the event pump run concurrently here;
/// neither ever completes. The pump blocks on the queue when the
/// renderer falls behind, which is the intended backpressure.
#[embassy_executor::task]
pub async fn midi_task(
    usb: USB0<'static>,
    dp: GPIO20<'static>,
    dm: GPIO19<'static>,
    palette: &'static Palette,
    commands: CommandSender,
) {
    let mut ep_out_buffer = [0_u8; 1024];
    let usb = Usb::new(usb, dp, dm);
    let driver = Driver::new(usb, &mut ep_out_buffer, OtgConfig::default());

    let mut config = UsbConfig::new(USB_VID, USB_PID);
    config.manufacturer = Some("Keylight");
    config.product = Some("Keylight MIDI Strip");
    config.serial_number = Some("123456");
    config.max_power = 100;
    config.max_packet_size_0 = 64;

    let mut config_descriptor = [0; 256];
    let mut bos_descriptor = [0; 256];
    let mut msos_descriptor = [0; 256];
    let mut control_buf = [0; 64];

    let mut builder = Builder::new(
        driver,
        config,
        &mut config_descriptor,
        &mut bos_descriptor,
        &mut msos_descriptor,
        &mut control_buf,
    );
    let class = MidiClass::new(&mut builder, 1, 1, MIDI_PACKET_SIZE);
    let mut device = builder.build();

    info!("MIDI_TASK: USB device configured. Waiting for events...");
    let mut stream = UsbMidiStream::new(class);
    join(
        device.run(),
        source::pump(&mut stream, palette, STRIP_LENGTH, commands),
    )
    .await;
}
