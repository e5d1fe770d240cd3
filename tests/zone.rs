mod common;

mod tests {
    use crate::common::Buffers;
    use pinball_light_zones::color::{BLACK, RED, Rgb};
    use pinball_light_zones::zone::{
        HeartMode, JackpotMode, LogoMode, ShuttleMode, StreetMode, ZoneProgram,
    };
    use pinball_light_zones::{
        Claim, Fixture, HeartZone, Instant, JackpotZone, LayoutError, LogoZone, RenderOutcome,
        ShuttleZone, StreetZone, ZoneMachine,
    };

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_mode_catalog_from_raw() {
        assert_eq!(LogoMode::from_raw(3), Some(LogoMode::Scanner));
        assert_eq!(LogoMode::from_raw(6), None);
        assert_eq!(JackpotMode::from_raw(8), Some(JackpotMode::DimmedHold));
        assert_eq!(JackpotMode::from_raw(200), None);
        assert_eq!(ShuttleMode::from_raw(3), None);
        assert_eq!(StreetMode::from_raw(255), None);
        assert_eq!(HeartMode::from_raw(1), Some(HeartMode::BeatWithEyes));
    }

    #[test]
    fn test_mode_catalog_strings() {
        assert_eq!(
            JackpotMode::parse_from_str("dual_chase"),
            Some(JackpotMode::DualChase)
        );
        assert_eq!(JackpotMode::DualChase.as_str(), "dual_chase");
        assert_eq!(LogoMode::parse_from_str("disco"), None);
        for mode in LogoMode::ALL {
            assert_eq!(LogoMode::parse_from_str(mode.as_str()), Some(*mode));
        }
    }

    #[test]
    fn test_mode_catalog_cycles() {
        assert_eq!(LogoMode::Rainbow.next(), LogoMode::Pulse);
        assert_eq!(LogoMode::Idle.next(), LogoMode::Rainbow);
        assert_eq!(JackpotMode::DimmedHold.next(), JackpotMode::Classic);
        assert_eq!(ShuttleMode::Boost.next(), ShuttleMode::Flicker);
        assert_eq!(StreetMode::Sparkle.next(), StreetMode::Pulse);
        assert_eq!(HeartMode::BeatWithEyes.next(), HeartMode::Beat);
    }

    #[test]
    fn test_zone_canvas_too_large() {
        let result = ZoneMachine::new(LogoZone::new(1), &[Claim::new(1, 0, 100)]);
        assert!(matches!(result, Err(LayoutError::ZoneTooLarge)));
    }

    #[test]
    fn test_frame_pacing() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let mut logo = ZoneMachine::new(LogoZone::new(1), &[Fixture::PINBALL.logo]).unwrap();

        assert_eq!(logo.mode(), None);
        assert!(matches!(logo.render(at(0), &stage), RenderOutcome::Rendered { .. }));
        assert_eq!(logo.mode(), Some(LogoMode::Rainbow));
        assert_eq!(logo.render(at(5), &stage), RenderOutcome::Waiting);
        assert_eq!(logo.next_frame_in(at(5)).map(|d| d.as_millis()), Some(15));
        assert!(matches!(logo.render(at(20), &stage), RenderOutcome::Rendered { .. }));
    }

    #[test]
    fn test_zone_writes_only_its_claims() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let fixture = Fixture::PINBALL;
        let mut logo = ZoneMachine::new(LogoZone::new(1), &[fixture.logo]).unwrap();

        logo.render(at(0), &stage);

        let strip1 = buffers.strip1.snapshot();
        for (i, led) in strip1.iter().enumerate() {
            if fixture.logo.span.contains(i) {
                assert_ne!(*led, BLACK, "logo pixel {i}");
            } else {
                assert_eq!(*led, BLACK, "pixel {i}");
            }
        }
        assert_eq!(&strip1[8..20], logo.canvas());
        assert!(buffers.strip0.snapshot().iter().all(|led| *led == BLACK));
    }

    #[test]
    fn test_mode_switches_after_duration() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let mut logo = ZoneMachine::new(LogoZone::new(1), &[Fixture::PINBALL.logo]).unwrap();

        logo.render(at(0), &stage);
        logo.render(at(59_999), &stage);
        assert_eq!(logo.mode(), Some(LogoMode::Rainbow));

        logo.render(at(60_000), &stage);
        assert_eq!(logo.mode(), Some(LogoMode::Pulse));
        assert_eq!(logo.mode_started(), Some(at(60_000)));
    }

    #[test]
    fn test_clock_going_backwards_waits() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let mut logo = ZoneMachine::new(LogoZone::new(1), &[Fixture::PINBALL.logo]).unwrap();

        assert!(matches!(
            logo.render(at(100_000), &stage),
            RenderOutcome::Rendered { .. }
        ));
        let canvas = logo.canvas().to_vec();
        assert_eq!(logo.render(at(10), &stage), RenderOutcome::Waiting);
        assert_eq!(logo.mode(), Some(LogoMode::Rainbow));
        assert_eq!(logo.mode_started(), Some(at(100_000)));
        assert_eq!(logo.canvas(), canvas.as_slice());
    }

    #[test]
    fn test_logo_scanner_bounces() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let mut logo = ZoneMachine::new(LogoZone::new(1), &[Fixture::PINBALL.logo]).unwrap();

        logo.render(at(0), &stage);
        assert_eq!(logo.program().scanner_position(), None);

        // Rainbow, pulse and sparkle run 60 s each
        logo.render(at(60_000), &stage);
        logo.render(at(120_000), &stage);
        logo.render(at(180_000), &stage);
        assert_eq!(logo.mode(), Some(LogoMode::Scanner));
        assert_eq!(logo.program().scanner_position(), Some(1));
        assert_ne!(logo.canvas()[0], BLACK);

        logo.render(at(180_040), &stage);
        assert_eq!(logo.program().scanner_position(), Some(2));
        assert_eq!(logo.canvas()[0], BLACK);
    }

    #[test]
    fn test_no_stall_past_mode_duration() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let mut shuttle =
            ZoneMachine::new(ShuttleZone::new(5), &[Fixture::PINBALL.shuttle]).unwrap();
        let duration = ShuttleMode::Flicker.timing().duration.as_millis();

        let mut now = 0;
        let mut seen = Vec::new();
        while now <= 4 * duration {
            shuttle.render(at(now), &stage);
            let mode = shuttle.mode().unwrap();
            if seen.last() != Some(&mode) {
                seen.push(mode);
            }
            let started = shuttle.mode_started().unwrap();
            assert!(at(now).saturating_duration_since(started).as_millis() < duration + 5);
            now += 5;
        }
        assert_eq!(
            seen,
            [
                ShuttleMode::Flicker,
                ShuttleMode::Wave,
                ShuttleMode::Boost,
                ShuttleMode::Flicker,
                ShuttleMode::Wave,
            ]
        );
    }

    #[test]
    fn test_one_transition_after_a_long_gap() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let mut street =
            ZoneMachine::new(StreetZone::new(2), &Fixture::PINBALL.planets).unwrap();

        street.render(at(0), &stage);
        assert_eq!(street.mode(), Some(StreetMode::Pulse));
        street.render(at(1_000_000), &stage);
        assert_eq!(street.mode(), Some(StreetMode::Sparkle));
        assert_eq!(street.mode_started(), Some(at(1_000_000)));
    }

    #[test]
    fn test_street_lights_every_planet() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let fixture = Fixture::PINBALL;
        let mut street = ZoneMachine::new(StreetZone::new(2), &fixture.planets).unwrap();

        street.render(at(0), &stage);
        for planet in fixture.planets {
            let index = usize::from(planet.span.start);
            assert_ne!(buffers.strip1.get(index), Some(BLACK));
        }
    }

    #[test]
    fn test_jackpot_dim_leaves_canvas_untouched() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let fixture = Fixture::PINBALL;
        let mut jackpot = ZoneMachine::new(
            JackpotZone::new(fixture.jackpot_segment_len, 7),
            &[fixture.jackpot],
        )
        .unwrap()
        .with_dim(128);

        jackpot.render(at(0), &stage);
        assert_eq!(jackpot.mode(), Some(JackpotMode::Classic));
        assert_eq!(jackpot.canvas()[0], RED);
        assert_eq!(buffers.strip0.get(0), Some(Rgb { r: 128, g: 0, b: 0 }));
        assert_eq!(buffers.strip0.get(6), Some(BLACK));
    }

    #[test]
    fn test_jackpot_classic_chase_steps_per_segment() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let fixture = Fixture::PINBALL;
        let mut jackpot = ZoneMachine::new(
            JackpotZone::new(fixture.jackpot_segment_len, 7),
            &[fixture.jackpot],
        )
        .unwrap();

        jackpot.render(at(0), &stage);
        assert_eq!(jackpot.mode(), Some(JackpotMode::Classic));
        assert_eq!(jackpot.program().classic_segment(), Some(1));
        assert_eq!(jackpot.render(at(299), &stage), RenderOutcome::Waiting);
        jackpot.render(at(300), &stage);
        assert_eq!(jackpot.program().classic_segment(), Some(2));
        assert_eq!(buffers.strip0.get(6), Some(RED));
        assert_eq!(buffers.strip0.get(0), Some(BLACK));

        jackpot.render(at(10_000), &stage);
        assert_eq!(jackpot.program().classic_segment(), None);
    }

    #[test]
    fn test_jackpot_dual_chase_on_the_ladder() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let fixture = Fixture::PINBALL;
        let mut jackpot = ZoneMachine::new(
            JackpotZone::new(fixture.jackpot_segment_len, 7),
            &[fixture.jackpot],
        )
        .unwrap();

        // Classic and alternating fill run 10 s each
        jackpot.render(at(0), &stage);
        jackpot.render(at(10_000), &stage);
        jackpot.render(at(20_000), &stage);
        assert_eq!(jackpot.mode(), Some(JackpotMode::DualChase));
        assert_eq!(jackpot.program().dual_chase_indices(48), Some((1, 46)));
        assert_eq!(buffers.strip0.get(0), Some(pinball_light_zones::color::CYAN));
        assert_eq!(buffers.strip0.get(47), Some(pinball_light_zones::color::MAGENTA));
    }

    #[test]
    fn test_heart_zone_beats() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let fixture = Fixture::PINBALL;
        let mut heart = ZoneMachine::new(HeartZone::default(), &fixture.heart_claims()).unwrap();

        heart.render(at(0), &stage);
        assert_eq!(heart.canvas().len(), 5);
        let beat = buffers.strip0.get(52).unwrap();
        assert!(beat.r > 0 && beat.g == 0 && beat.b == 0);
        assert_eq!(HeartZone::NAME, "heart");
    }

    #[test]
    fn test_override_suspends_rendering() {
        use pinball_light_zones::{TakeoverConfig, Takeover, TakeoverPoll};
        use pinball_light_zones::Duration;

        let buffers = Buffers::new();
        let stage = buffers.stage();
        let mut logo = ZoneMachine::new(LogoZone::new(1), &[Fixture::PINBALL.logo]).unwrap();
        let mut takeover = Takeover::new(TakeoverConfig {
            interval: Duration::from_millis(100),
            ..TakeoverConfig::DEFAULT
        });

        assert_eq!(takeover.poll(at(0), &stage), TakeoverPoll::Idle);
        assert!(matches!(
            takeover.poll(at(100), &stage),
            TakeoverPoll::Running { .. }
        ));
        assert_eq!(logo.render(at(120), &stage), RenderOutcome::Suspended);
        assert_eq!(logo.mode(), None);
    }
}
