mod tests {
    use embassy_time::Duration;
    use aeri_light_patterns::{Rng8, WelcomeEffectId, WelcomeFrame};
    use aeri_light_patterns::color::{BLACK, Rgb};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    fn frame(elapsed_ms: u64, duration_ms: u64) -> WelcomeFrame {
        WelcomeFrame::new(
            Duration::from_millis(elapsed_ms),
            Duration::from_millis(duration_ms),
            [RED, GREEN, BLUE],
        )
    }

    #[test]
    fn test_center_fill_endpoints() {
        let mut rng = Rng8::new(1);

        let mut leds = [RED; 30];
        WelcomeEffectId::CenterFill.render(&frame(0, 1000), &mut rng, &mut leds);
        assert_eq!(leds, [BLACK; 30]);

        WelcomeEffectId::CenterFill.render(&frame(1000, 1000), &mut rng, &mut leds);
        assert_eq!(leds, [RED; 30]);

        // Odd strip lengths fill completely too.
        let mut odd = [BLACK; 31];
        WelcomeEffectId::CenterFill.render(&frame(1000, 1000), &mut rng, &mut odd);
        assert_eq!(odd, [RED; 31]);
    }

    #[test]
    fn test_theater_chase_fills_from_both_ends() {
        let mut rng = Rng8::new(1);

        let mut leds = [RED; 12];
        WelcomeEffectId::TheaterChase.render(&frame(0, 1000), &mut rng, &mut leds);
        assert_eq!(leds, [BLACK; 12]);

        WelcomeEffectId::TheaterChase.render(&frame(500, 1000), &mut rng, &mut leds);
        let blue = Rgb { r: 0, g: 0, b: 255 };
        assert_eq!(leds[..2], [blue; 2]);
        assert_eq!(leds[2..10], [BLACK; 8]);
        assert_eq!(leds[10..], [blue; 2]);

        WelcomeEffectId::TheaterChase.render(&frame(1000, 1000), &mut rng, &mut leds);
        assert_eq!(leds, [blue; 12]);
    }

    #[test]
    fn test_laser_position_is_monotone() {
        let mut rng = Rng8::new(1);
        let mut last_pos = 0;
        // Irregular sampling must never move the beam backwards.
        for elapsed in [0u64, 90, 100, 333, 500, 501, 980, 1000] {
            let mut leds = [BLACK; 30];
            WelcomeEffectId::Laser.render(&frame(elapsed, 1000), &mut rng, &mut leds);
            let pos = leds.iter().position(|led| *led == RED).unwrap();
            assert!(pos >= last_pos, "beam moved back at {elapsed} ms");
            last_pos = pos;
        }
        assert_eq!(last_pos, 29);
    }

    #[test]
    fn test_startup_scan_head_leads_fill() {
        let mut rng = Rng8::new(1);
        let mut leds = [BLACK; 30];
        WelcomeEffectId::StartupScan.render(&frame(500, 1000), &mut rng, &mut leds);

        let dim_red = Rgb { r: 160, g: 0, b: 0 };
        assert_eq!(leds[..14], [dim_red; 14]);
        assert_eq!(leds[14], GREEN);
        assert_eq!(leds[15..], [BLACK; 15]);
    }

    #[test]
    fn test_charging_gradient_reaches_full_color() {
        let mut rng = Rng8::new(1);
        let mut leds = [GREEN; 4];
        WelcomeEffectId::Charging.render(&frame(1000, 1000), &mut rng, &mut leds);
        assert_eq!(leds[0], BLACK);
        assert_eq!(leds[3], RED);
    }

    #[test]
    fn test_spectrum_resolve_settles_on_color1() {
        let mut rng = Rng8::new(1);
        let mut leds = [BLACK; 30];
        WelcomeEffectId::SpectrumResolve.render(&frame(1000, 1000), &mut rng, &mut leds);
        for led in &leds {
            assert!(led.r >= 254);
            assert!(led.g <= 1);
            assert!(led.b <= 1);
        }
    }

    #[test]
    fn test_spectrum_resolve_continuous_at_midpoint() {
        let mut rng = Rng8::new(1);
        let mut before = [BLACK; 30];
        let mut after = [BLACK; 30];
        WelcomeEffectId::SpectrumResolve.render(&frame(496, 1000), &mut rng, &mut before);
        WelcomeEffectId::SpectrumResolve.render(&frame(504, 1000), &mut rng, &mut after);

        // Crossing into the resolve phase must not jump further than the
        // rainbow moves for the same elapsed span.
        for (a, b) in before.iter().zip(after.iter()) {
            assert!(a.r.abs_diff(b.r) <= 20);
            assert!(a.g.abs_diff(b.g) <= 20);
            assert!(a.b.abs_diff(b.b) <= 20);
        }
    }

    #[test]
    fn test_dna_strands_sit_a_quarter_cycle_apart() {
        let mut rng = Rng8::new(1);
        let mut leds = [BLACK; 4];
        WelcomeEffectId::Dna.render(&frame(0, 1000), &mut rng, &mut leds);

        // Pixel 0 at t = 0: the sine strand is at its midpoint while the
        // cosine strand peaks.
        assert_eq!(leds[0], Rgb { r: 63, g: 128, b: 0 });
    }

    #[test]
    fn test_glitch_draws_only_white_bars() {
        let mut rng = Rng8::new(42);
        let mut leds = [BLACK; 20];
        for _ in 0..60 {
            WelcomeEffectId::Glitch.render(&frame(100, 1000), &mut rng, &mut leds);
            for led in &leds {
                assert!(led.r == led.g && led.g == led.b, "tinted pixel {led:?}");
            }
        }
    }

    #[test]
    fn test_spotlights_share_one_hue() {
        use aeri_light_patterns::color::{add_colors, hsv2rgb};
        use aeri_light_patterns::Hsv;

        let mut rng = Rng8::new(1);
        let mut leds = [BLACK; 40];
        WelcomeEffectId::Spotlights.render(&frame(730, 2000), &mut rng, &mut leds);

        // Every lit pixel is the shared spotlight color, possibly stacked
        // where two lights overlap.
        let light = hsv2rgb(Hsv {
            hue: (730 / 20) as u8,
            sat: 255,
            val: 255,
        });
        let mut allowed = [BLACK; 4];
        allowed[0] = light;
        for i in 1..4 {
            allowed[i] = add_colors(allowed[i - 1], light);
        }
        for led in leds.iter().filter(|led| **led != BLACK) {
            assert!(allowed.contains(led), "off-hue pixel {led:?}");
        }
    }

    #[test]
    fn test_sync_pulse_dark_at_start_and_peaks() {
        let mut rng = Rng8::new(1);

        let mut leds = [RED; 10];
        WelcomeEffectId::SyncPulse.render(&frame(0, 255), &mut rng, &mut leds);
        assert_eq!(leds, [BLACK; 10]);

        WelcomeEffectId::SyncPulse.render(&frame(42, 255), &mut rng, &mut leds);
        assert_eq!(leds, [RED; 10]);
    }

    #[test]
    fn test_heartbeat_is_uniform() {
        let mut rng = Rng8::new(1);

        // Below the spike threshold the fill tracks the beat level itself.
        let mut leds = [BLACK; 4];
        WelcomeEffectId::Heartbeat.render(&frame(0, 3000), &mut rng, &mut leds);
        assert_eq!(leds, [Rgb { r: 127, g: 0, b: 0 }; 4]);

        for elapsed in (0..3000).step_by(73) {
            let mut leds = [BLACK; 20];
            WelcomeEffectId::Heartbeat.render(&frame(elapsed, 3000), &mut rng, &mut leds);
            assert!(leds.iter().all(|led| *led == leds[0]));
            assert_eq!(leds[0].g, 0);
            assert_eq!(leds[0].b, 0);
        }
    }

    #[test]
    fn test_cyberwave_is_deterministic() {
        let mut rng = Rng8::new(1);
        let mut a = [BLACK; 25];
        let mut b = [BLACK; 25];
        WelcomeEffectId::Cyberwave.render(&frame(730, 2000), &mut rng, &mut a);
        WelcomeEffectId::Cyberwave.render(&frame(730, 2000), &mut rng, &mut b);
        assert_eq!(a, b);
        assert!(a.iter().any(|led| *led != a[0]));
    }

    #[test]
    fn test_every_effect_tolerates_any_strip_length() {
        for raw in 0..WelcomeEffectId::COUNT {
            let Some(id) = WelcomeEffectId::from_raw(raw) else {
                panic!("mode {raw} missing");
            };
            for len in [1usize, 2, 3, 5, 30, 64] {
                let mut rng = Rng8::new(42);
                let mut leds = vec![BLACK; len];
                for elapsed in [0u64, 1, 499, 999, 1000, 5000] {
                    id.render(&frame(elapsed, 1000), &mut rng, &mut leds);
                }
            }
        }
    }

    #[test]
    fn test_empty_strip_is_noop() {
        let mut rng = Rng8::new(1);
        let mut leds: [Rgb; 0] = [];
        for raw in 0..WelcomeEffectId::COUNT {
            if let Some(id) = WelcomeEffectId::from_raw(raw) {
                id.render(&frame(500, 1000), &mut rng, &mut leds);
            }
        }
    }
}
