mod tests {
    use aeri_light_patterns::Rng8;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Rng8::new(42);
        let mut b = Rng8::new(42);
        for _ in 0..64 {
            assert_eq!(a.random8(), b.random8());
        }
    }

    #[test]
    fn test_seeds_diverge() {
        let mut a = Rng8::new(1);
        let mut b = Rng8::new(2);
        let differs = (0..16).any(|_| a.random16() != b.random16());
        assert!(differs);
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = Rng8::new(0);
        let any_nonzero = (0..16).any(|_| rng.random8() != 0);
        assert!(any_nonzero);
    }

    #[test]
    fn test_below_respects_bound() {
        let mut rng = Rng8::new(7);
        for _ in 0..256 {
            assert!(rng.below(30) < 30);
        }
        assert_eq!(rng.below(0), 0);
        assert_eq!(rng.below(1), 0);
    }

    #[test]
    fn test_range8_stays_inside() {
        let mut rng = Rng8::new(99);
        for _ in 0..256 {
            let v = rng.range8(160, 255);
            assert!(v >= 160);
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = Rng8::new(5);
        for _ in 0..64 {
            assert!(!rng.chance(0));
        }
    }
}
