mod tests {
    use keylight_core::color::Rgb;
    use keylight_core::palette::{Palette, RAINBOW};
    use keylight_core::{HIGH_NOTE, LOW_NOTE};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_out_of_range_notes_are_black() {
        let palette = Palette::rainbow();
        for note in 0..LOW_NOTE {
            assert_eq!(palette.color(note), BLACK);
        }
        for note in (HIGH_NOTE + 1)..=127 {
            assert_eq!(palette.color(note), BLACK);
        }
        // Beyond the table entirely
        assert_eq!(palette.color(255), BLACK);
    }

    #[test]
    fn test_every_playable_note_is_lit() {
        let palette = Palette::rainbow();
        for note in LOW_NOTE..=HIGH_NOTE {
            assert_ne!(palette.color(note), BLACK, "note {note} has no colour");
        }
    }

    #[test]
    fn test_low_note_starts_at_the_first_anchor() {
        let palette = Palette::rainbow();
        assert_eq!(palette.color(LOW_NOTE), RAINBOW[0]);
    }

    #[test]
    fn test_adjacent_notes_move_toward_the_next_anchor() {
        let palette = Palette::rainbow();
        // First segment runs red→orange: green rises, red stays maxed
        let a = palette.color(LOW_NOTE);
        let b = palette.color(LOW_NOTE + 1);
        assert_eq!(a.r, 255);
        assert_eq!(b.r, 255);
        assert!(b.g > a.g);
    }

    #[test]
    fn test_single_anchor_paints_the_whole_range() {
        let white = Rgb {
            r: 255,
            g: 255,
            b: 255,
        };
        let palette = Palette::new(&[white]);
        for note in LOW_NOTE..=HIGH_NOTE {
            assert_eq!(palette.color(note), white);
        }
        assert_eq!(palette.color(LOW_NOTE - 1), BLACK);
    }

    #[test]
    fn test_more_anchors_than_notes_does_not_divide_by_zero() {
        // 90 anchors over 87 playable offsets collapses the segment
        // span to zero; the builder must fall back instead of panicking.
        let anchors = [Rgb { r: 10, g: 20, b: 30 }; 90];
        let palette = Palette::new(&anchors);
        for note in LOW_NOTE..=HIGH_NOTE {
            assert_eq!(palette.color(note), anchors[0]);
        }
    }

    #[test]
    fn test_empty_anchor_list_yields_darkness() {
        let palette = Palette::new(&[]);
        for note in 0..=127 {
            assert_eq!(palette.color(note), BLACK);
        }
    }
}
