#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

use defmt::info;
use embassy_executor::Spawner;
use esp_hal::{
    Config,
    clock::CpuClock,
    rmt::Rmt,
    time::Rate,
    timer::systimer::SystemTimer,
};
use keylight::{
    STRIP_LENGTH,
    drivers::strip::StripDriver,
    tasks::{midi::midi_task, render::render_task},
};
use keylight_core::{CommandChannel, Palette};
use panic_rtt_target as _;

use static_cell::StaticCell;

/// The command queue, the only state the two tasks share
static COMMAND_CHANNEL: StaticCell<CommandChannel> = StaticCell::new();

/// Note colour table, built once before either task can observe it
static PALETTE: StaticCell<Palette> = StaticCell::new();

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    #[cfg(all(feature = "rtt", feature = "defmt"))]
    rtt_target::rtt_init_defmt!();

    let peripherals = esp_hal::init(Config::default().with_cpu_clock(CpuClock::max()));
    let timer0 = SystemTimer::new(peripherals.SYSTIMER);
    esp_hal_embassy::init(timer0.alarm0);

    info!("MAIN: USB MIDI LED strip, {} pixels", STRIP_LENGTH);

    let palette = PALETTE.init(Palette::rainbow());
    let channel = COMMAND_CHANNEL.init(CommandChannel::new());

    let rmt = Rmt::new(peripherals.RMT, Rate::from_mhz(80))
        .expect("Failed to initialise RMT0")
        .into_async();
    let strip = StripDriver::new(rmt, peripherals.GPIO48);

    // Consumer first so the strip is blanked before notes can arrive
    spawner
        .spawn(render_task(channel.receiver(), strip))
        .expect("Failed to spawn render task");
    spawner
        .spawn(midi_task(
            peripherals.USB0,
            peripherals.GPIO20,
            peripherals.GPIO19,
            palette,
            channel.sender(),
        ))
        .expect("Failed to spawn MIDI task");

    info!("MAIN: Tasks running");
}
