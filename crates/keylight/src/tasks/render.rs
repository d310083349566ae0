use defmt::{info, panic};
use keylight_core::{CommandReceiver, RenderEngine};

use crate::STRIP_LENGTH;
use crate::drivers::strip::StripDriver;

/// Consumer task: drains the command queue and drives the strip.
///
/// The strip is fully managed from this task; nothing else writes
/// pixels. A transmission failure is not retried here, it takes the
/// task down loudly so the supervisor surfaces it.
#[embassy_executor::task]
pub async fn render_task(commands: CommandReceiver, strip: StripDriver) {
    let mut engine = RenderEngine::new(strip, STRIP_LENGTH);

    // A dark strip before the first note arrives
    if let Err(e) = engine.blank().await {
        panic!("initial strip clear failed: {}", defmt::Debug2Format(&e));
    }

    info!("RENDER_TASK: Task started. Waiting for commands...");
    if let Err(e) = engine.run(commands).await {
        panic!("strip transmission failed: {}", defmt::Debug2Format(&e));
    }
}
