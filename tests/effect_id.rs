mod tests {
    use aeri_light_patterns::{AmbientEffectId, TurnSignalEffectId, WelcomeEffectId};

    #[test]
    fn test_ambient_id_round_trip() {
        for raw in 0..AmbientEffectId::COUNT {
            let id = AmbientEffectId::from_raw(raw);
            assert!(id.is_some(), "mode {raw} missing");
            let id = id.unwrap();
            assert_eq!(id as u8, raw);
            assert_eq!(AmbientEffectId::parse_from_str(id.as_str()), Some(id));
            assert_eq!(id.to_slot().id(), id);
        }
        assert_eq!(AmbientEffectId::from_raw(AmbientEffectId::COUNT), None);
    }

    #[test]
    fn test_ambient_id_parse() {
        assert_eq!(
            AmbientEffectId::parse_from_str("pacifica"),
            Some(AmbientEffectId::Pacifica)
        );
        assert_eq!(
            AmbientEffectId::parse_from_str("bouncing_balls"),
            Some(AmbientEffectId::BouncingBalls)
        );
        assert_eq!(AmbientEffectId::parse_from_str("nope"), None);
    }

    #[test]
    fn test_ambient_id_assignments() {
        assert_eq!(AmbientEffectId::from_raw(0), Some(AmbientEffectId::Solid));
        assert_eq!(
            AmbientEffectId::from_raw(23),
            Some(AmbientEffectId::Lightning)
        );
    }

    #[test]
    fn test_turn_signal_id_round_trip() {
        for raw in 0..TurnSignalEffectId::COUNT {
            let id = TurnSignalEffectId::from_raw(raw);
            assert!(id.is_some(), "mode {raw} missing");
            let id = id.unwrap();
            assert_eq!(id as u8, raw);
            assert_eq!(TurnSignalEffectId::parse_from_str(id.as_str()), Some(id));
        }
        assert_eq!(TurnSignalEffectId::from_raw(TurnSignalEffectId::COUNT), None);
    }

    #[test]
    fn test_turn_signal_id_parse() {
        assert_eq!(
            TurnSignalEffectId::parse_from_str("sequential"),
            Some(TurnSignalEffectId::Sequential)
        );
        assert_eq!(TurnSignalEffectId::parse_from_str(""), None);
    }

    #[test]
    fn test_welcome_id_round_trip() {
        for raw in 0..WelcomeEffectId::COUNT {
            let id = WelcomeEffectId::from_raw(raw);
            assert!(id.is_some(), "mode {raw} missing");
            let id = id.unwrap();
            assert_eq!(id as u8, raw);
            assert_eq!(WelcomeEffectId::parse_from_str(id.as_str()), Some(id));
        }
        assert_eq!(WelcomeEffectId::from_raw(WelcomeEffectId::COUNT), None);
    }

    #[test]
    fn test_welcome_id_parse() {
        assert_eq!(
            WelcomeEffectId::parse_from_str("cyberwave"),
            Some(WelcomeEffectId::Cyberwave)
        );
        assert_eq!(
            WelcomeEffectId::parse_from_str("power_on_scan"),
            Some(WelcomeEffectId::PowerOnScan)
        );
    }
}
