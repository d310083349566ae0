mod tests {
    use keylight_core::midi::{NoteEvent, brightness_for, classify};
    use keylight_core::palette::Palette;
    use keylight_core::source::command_for;
    use keylight_core::{MAX_BRIGHTNESS, MIN_BRIGHTNESS};

    #[test]
    fn test_note_on_classification_ignores_the_channel() {
        for channel in 0..16 {
            assert_eq!(
                classify(0x90 | channel, 60, 100),
                Some(NoteEvent::On {
                    note: 60,
                    velocity: 100
                })
            );
        }
    }

    #[test]
    fn test_zero_velocity_note_on_is_a_note_off() {
        assert_eq!(classify(0x90, 60, 0), Some(NoteEvent::Off { note: 60 }));
        assert_eq!(classify(0x80, 60, 64), Some(NoteEvent::Off { note: 60 }));
    }

    #[test]
    fn test_non_note_messages_are_dropped() {
        // Control change, program change, pitch bend, realtime clock
        for status in [0xB0, 0xC0, 0xE0, 0xF8, 0x00, 0x70] {
            assert_eq!(classify(status, 60, 100), None);
        }
    }

    #[test]
    fn test_brightness_window() {
        assert_eq!(brightness_for(127), MAX_BRIGHTNESS);
        // velocity * (255 - 20) / 127 + 20 for the defaults
        assert_eq!(brightness_for(100), 205);
        // The integer division floors, so the softest press sits one
        // step above the configured floor
        assert_eq!(brightness_for(1), MIN_BRIGHTNESS + 1);
        for velocity in 1..=127 {
            assert!(brightness_for(velocity) >= MIN_BRIGHTNESS);
        }
    }

    #[test]
    fn test_malformed_velocity_saturates() {
        assert_eq!(brightness_for(200), MAX_BRIGHTNESS);
    }

    #[test]
    fn test_note_on_command_carries_position_color_brightness() {
        let palette = Palette::rainbow();
        let command = command_for(
            NoteEvent::On {
                note: 60,
                velocity: 100,
            },
            &palette,
            88,
        )
        .unwrap();
        assert!(command.note_on);
        assert_eq!(command.led, 39);
        assert_eq!(command.brightness, 205);
        assert_eq!(command.color, palette.color(60));
        assert_ne!(command.color, Default::default());
    }

    #[test]
    fn test_note_off_command_shares_the_position() {
        let palette = Palette::rainbow();
        let command = command_for(NoteEvent::Off { note: 60 }, &palette, 88).unwrap();
        assert!(!command.note_on);
        assert_eq!(command.led, 39);
    }

    #[test]
    fn test_unplayable_notes_produce_no_command() {
        let palette = Palette::rainbow();
        for note in [0, 10, 20, 109, 127] {
            assert_eq!(
                command_for(
                    NoteEvent::On {
                        note,
                        velocity: 100
                    },
                    &palette,
                    88
                ),
                None
            );
            assert_eq!(command_for(NoteEvent::Off { note }, &palette, 88), None);
        }
    }
}
