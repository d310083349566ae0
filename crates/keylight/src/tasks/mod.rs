pub mod midi;
pub mod render;

pub use midi::midi_task;
pub use render::render_task;
