use defmt::{info, warn};
use embassy_usb::class::midi::MidiClass;
use embassy_usb::driver::{Driver, EndpointError};
use heapless::Deque;
use keylight_core::NoteStream;

/// Max packet size of the MIDI bulk endpoints
pub const MIDI_PACKET_SIZE: u16 = 64;

/// Adapts the USB MIDI class to the 3-byte note event stream the
/// pipeline consumes.
///
/// A completed USB transfer may carry several 4-byte USB-MIDI event
/// packets, so whole transfers are split here and handed out one event
/// at a time.
pub struct UsbMidiStream<'d, D: Driver<'d>> {
    class: MidiClass<'d, D>,
    pending: Deque<[u8; 3], 16>,
}

impl<'d, D: Driver<'d>> UsbMidiStream<'d, D> {
    pub fn new(class: MidiClass<'d, D>) -> Self {
        Self {
            class,
            pending: Deque::new(),
        }
    }
}

impl<'d, D: Driver<'d>> NoteStream for UsbMidiStream<'d, D> {
    async fn next_event(&mut self) -> [u8; 3] {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return event;
            }
            let mut transfer = [0_u8; MIDI_PACKET_SIZE as usize];
            match self.class.read_packet(&mut transfer).await {
                Ok(len) => {
                    // Each event packet is the cable/code byte followed by the
                    // three MIDI bytes; only the MIDI bytes travel further.
                    for packet in transfer[..len].chunks_exact(4) {
                        if self.pending.push_back([packet[1], packet[2], packet[3]]).is_err() {
                            warn!("MIDI event backlog full, dropping rest of transfer");
                            break;
                        }
                    }
                }
                Err(EndpointError::BufferOverflow) => {
                    warn!("MIDI transfer larger than the packet buffer, dropped");
                }
                Err(EndpointError::Disabled) => {
                    info!("USB MIDI interface down, waiting for the host");
                    self.class.wait_connection().await;
                }
            }
        }
    }
}
