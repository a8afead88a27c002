mod tests {
    use embassy_time::Instant;
    use aeri_light_patterns::{TurnSignalEffectId, TurnSignalFrame};
    use aeri_light_patterns::color::Rgb;

    const AMBER: Rgb = Rgb { r: 255, g: 96, b: 0 };
    const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_speed_maps_to_step_interval() {
        assert_eq!(TurnSignalFrame::new(0, AMBER).step_ms(), 25);
        assert_eq!(TurnSignalFrame::new(50, AMBER).step_ms(), 15);
        assert_eq!(TurnSignalFrame::new(100, AMBER).step_ms(), 5);
        // Out-of-range speeds clamp instead of extrapolating.
        assert_eq!(TurnSignalFrame::new(255, AMBER).step_ms(), 5);
    }

    #[test]
    fn test_sequential_starts_dark_and_fills() {
        let frame = TurnSignalFrame::new(0, AMBER); // 25 ms per step
        let mut leds = [OFF; 10];

        TurnSignalEffectId::Sequential.render(Instant::from_millis(0), &frame, &mut leds);
        assert!(leds.iter().all(|led| *led == OFF));

        TurnSignalEffectId::Sequential.render(Instant::from_millis(125), &frame, &mut leds);
        assert_eq!(leds[..5], [AMBER; 5]);
        assert_eq!(leds[5..], [OFF; 5]);

        TurnSignalEffectId::Sequential.render(Instant::from_millis(250), &frame, &mut leds);
        assert!(leds.iter().all(|led| *led == AMBER));
    }

    #[test]
    fn test_sequential_gap_goes_dark() {
        let frame = TurnSignalFrame::new(0, AMBER);
        let mut leds = [AMBER; 10];

        // step 11 of a 10-pixel strip falls in the off gap
        TurnSignalEffectId::Sequential.render(Instant::from_millis(275), &frame, &mut leds);
        assert!(leds.iter().all(|led| *led == OFF));
    }

    #[test]
    fn test_pulsing_arrow_toggles() {
        let frame = TurnSignalFrame::new(50, AMBER);
        let mut leds = [OFF; 8];

        TurnSignalEffectId::PulsingArrow.render(Instant::from_millis(600), &frame, &mut leds);
        assert!(leds.iter().all(|led| *led == AMBER));

        TurnSignalEffectId::PulsingArrow.render(Instant::from_millis(1100), &frame, &mut leds);
        assert!(leds.iter().all(|led| *led == OFF));
    }

    #[test]
    fn test_fill_and_flush_alternates() {
        let frame = TurnSignalFrame::new(100, AMBER); // 5 ms per step
        let mut leds = [OFF; 10];

        // Fill cycle, 3 steps in: pixels 0..3 lit.
        TurnSignalEffectId::FillAndFlush.render(Instant::from_millis(10), &frame, &mut leds);
        assert_eq!(leds[..3], [AMBER; 3]);
        assert!(leds[3..].iter().all(|led| *led == OFF));

        // Odd cycle: everything flushed dark.
        TurnSignalEffectId::FillAndFlush.render(Instant::from_millis(60), &frame, &mut leds);
        assert!(leds.iter().all(|led| *led == OFF));
    }

    #[test]
    fn test_comet_trail_leaves_decaying_wake() {
        let frame = TurnSignalFrame::new(100, AMBER); // 2.5 ms per head pixel
        let mut leds = [OFF; 10];

        TurnSignalEffectId::CometTrail.render(Instant::from_millis(5), &frame, &mut leds);
        assert_eq!(leds[2], AMBER);

        TurnSignalEffectId::CometTrail.render(Instant::from_millis(10), &frame, &mut leds);
        assert_eq!(leds[4], AMBER);
        assert_ne!(leds[2], OFF);
        assert_ne!(leds[2], AMBER);
    }

    #[test]
    fn test_left_and_right_channels_match() {
        let frame = TurnSignalFrame::new(70, AMBER);
        let mut left = [OFF; 12];
        let mut right = [OFF; 12];

        for ms in (0..1000).step_by(16) {
            let now = Instant::from_millis(ms);
            TurnSignalEffectId::Sequential.render(now, &frame, &mut left);
            TurnSignalEffectId::Sequential.render(now, &frame, &mut right);
            assert_eq!(left, right);
        }
    }

    #[test]
    fn test_empty_strip_is_noop() {
        let frame = TurnSignalFrame::new(50, AMBER);
        let mut leds: [Rgb; 0] = [];
        for raw in 0..TurnSignalEffectId::COUNT {
            if let Some(id) = TurnSignalEffectId::from_raw(raw) {
                id.render(Instant::from_millis(1234), &frame, &mut leds);
            }
        }
    }
}
