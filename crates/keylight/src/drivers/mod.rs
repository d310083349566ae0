pub mod strip;
pub mod usb_midi;

pub use strip::StripDriver;
pub use usb_midi::UsbMidiStream;
