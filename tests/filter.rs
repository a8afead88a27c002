mod tests {
    use embassy_time::{Duration, Instant};
    use aeri_light_patterns::{BrightnessFilter, Filter};
    use aeri_light_patterns::color::Rgb;

    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_full_brightness_passes_through() {
        let mut filter = BrightnessFilter::new(255);
        let mut frame = [WHITE; 4];
        filter.apply(&mut frame);
        assert_eq!(frame, [WHITE; 4]);
    }

    #[test]
    fn test_zero_brightness_blacks_out() {
        let mut filter = BrightnessFilter::new(0);
        let mut frame = [WHITE; 4];
        filter.apply(&mut frame);
        assert_eq!(frame, [BLACK; 4]);
    }

    #[test]
    fn test_half_brightness_scales() {
        let mut filter = BrightnessFilter::new(128);
        let mut frame = [WHITE; 2];
        filter.apply(&mut frame);
        assert_eq!(frame, [Rgb { r: 128, g: 128, b: 128 }; 2]);
    }

    #[test]
    fn test_fade_progresses_and_settles() {
        let mut filter = BrightnessFilter::new(0);
        filter.set(255, Duration::from_millis(1000), Instant::from_millis(0));
        assert!(filter.is_fading());

        filter.tick(Instant::from_millis(500));
        assert_eq!(filter.value(), 127);
        assert!(filter.is_fading());

        filter.tick(Instant::from_millis(1000));
        assert_eq!(filter.value(), 255);
        assert!(!filter.is_fading());
    }

    #[test]
    fn test_zero_duration_applies_immediately() {
        let mut filter = BrightnessFilter::new(40);
        filter.set(200, Duration::from_millis(0), Instant::from_millis(100));
        assert_eq!(filter.value(), 200);
        assert!(!filter.is_fading());
    }

    #[test]
    fn test_retarget_mid_fade_starts_from_current() {
        let mut filter = BrightnessFilter::new(0);
        filter.set(200, Duration::from_millis(1000), Instant::from_millis(0));
        filter.tick(Instant::from_millis(500));
        let midway = filter.value();

        filter.set(0, Duration::from_millis(1000), Instant::from_millis(500));
        filter.tick(Instant::from_millis(500));
        assert_eq!(filter.value(), midway);
        filter.tick(Instant::from_millis(1500));
        assert_eq!(filter.value(), 0);
    }
}
