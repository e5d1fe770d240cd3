mod common;

mod tests {
    use crate::common::Buffers;
    use pinball_light_zones::zone::HeartMode;
    use pinball_light_zones::{
        Claim, Duration, Fixture, HeartLoop, HeartZone, Instant, JackpotZone, LayoutError,
        LogoZone, Pacing, RenderOutcome, ShuttleZone, Takeover, TakeoverConfig, ZoneLoop,
        ZoneMachine,
    };

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_short_pacing_by_default() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let logo = ZoneMachine::new(LogoZone::new(1), &[Fixture::PINBALL.logo]).unwrap();
        let mut zone_loop = ZoneLoop::new(&stage, logo).unwrap();

        let result = zone_loop.tick(at(0));
        assert!(matches!(result.outcome, RenderOutcome::Rendered { .. }));
        assert!(!result.takeover);
        assert_eq!(result.sleep, Duration::from_millis(5));
    }

    #[test]
    fn test_update_flag_switches_to_long_pacing() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let logo = ZoneMachine::new(LogoZone::new(1), &[Fixture::PINBALL.logo]).unwrap();
        let mut zone_loop = ZoneLoop::new(&stage, logo).unwrap();

        assert_eq!(zone_loop.tick(at(0)).sleep, Duration::from_millis(5));
        stage.signals().begin_update();
        stage.signals().begin_update();
        assert!(stage.signals().update_in_progress());
        assert_eq!(zone_loop.tick(at(5)).sleep, Duration::from_millis(1_000));
    }

    #[test]
    fn test_custom_pacing() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let pacing = Pacing {
            short: Duration::from_millis(2),
            long: Duration::from_millis(500),
        };
        let logo = ZoneMachine::new(LogoZone::new(1), &[Fixture::PINBALL.logo]).unwrap();
        let mut zone_loop = ZoneLoop::new(&stage, logo).unwrap().with_pacing(pacing);
        assert_eq!(zone_loop.tick(at(0)).sleep, Duration::from_millis(2));
    }

    #[test]
    fn test_zone_loop_rejects_claims_outside_the_stage() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let claim = Claim::new(1, 110, 130);
        let logo = ZoneMachine::new(LogoZone::new(1), &[claim]).unwrap();
        assert!(matches!(
            ZoneLoop::new(&stage, logo),
            Err(LayoutError::OutOfBounds(_))
        ));
    }

    #[test]
    fn test_cross_zone_overlap_needs_fixture_validation() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let fixture = Fixture {
            shuttle: Claim::new(1, 15, 18),
            ..Fixture::PINBALL
        };

        // Each loop only sees its own claims
        let logo = ZoneMachine::new(LogoZone::new(1), &[fixture.logo]).unwrap();
        let shuttle = ZoneMachine::new(ShuttleZone::new(2), &[fixture.shuttle]).unwrap();
        assert!(ZoneLoop::new(&stage, logo).is_ok());
        assert!(ZoneLoop::new(&stage, shuttle).is_ok());

        assert!(matches!(
            fixture.validate(&stage.strip_lens()),
            Err(LayoutError::Overlap(..))
        ));
        assert_eq!(Fixture::PINBALL.validate(&stage.strip_lens()), Ok(()));
    }

    #[test]
    fn test_heart_loop_runs_the_override() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        let fixture = Fixture::PINBALL;
        let heart = ZoneMachine::new(HeartZone::default(), &fixture.heart_claims()).unwrap();
        let takeover = Takeover::new(TakeoverConfig {
            interval: Duration::from_millis(1_000),
            duration: Duration::from_millis(500),
            ..TakeoverConfig::DEFAULT
        });
        let mut heart_loop = HeartLoop::new(&stage, heart, takeover).unwrap();
        let jackpot = ZoneMachine::new(
            JackpotZone::new(fixture.jackpot_segment_len, 3),
            &[fixture.jackpot],
        )
        .unwrap();
        let mut jackpot_loop = ZoneLoop::new(&stage, jackpot).unwrap();

        let first = heart_loop.tick(at(0));
        assert!(!first.takeover);
        assert_eq!(heart_loop.zone().mode(), Some(HeartMode::Beat));

        let during = heart_loop.tick(at(1_000));
        assert!(during.takeover);
        assert_eq!(during.outcome, RenderOutcome::Suspended);
        assert_eq!(during.sleep, Duration::from_millis(30));
        assert!(heart_loop.takeover().is_running());

        let blocked = jackpot_loop.tick(at(1_010));
        assert!(blocked.takeover);
        assert_eq!(blocked.sleep, Duration::from_millis(5));

        let after = heart_loop.tick(at(1_500));
        assert!(!after.takeover);
        assert!(matches!(after.outcome, RenderOutcome::Rendered { .. }));
        assert!(!stage.signals().override_active());
        assert!(matches!(
            jackpot_loop.tick(at(1_510)).outcome,
            RenderOutcome::Rendered { .. }
        ));
    }

    #[test]
    fn test_fps_estimate() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        for ms in (0..=1_000).step_by(10) {
            stage.commit(at(ms));
        }
        assert_eq!(stage.output().fps(), 101);
    }

    #[test]
    fn test_global_brightness_applies_at_commit() {
        let buffers = Buffers::new();
        let stage = buffers.stage();
        buffers.strip0.fill(pinball_light_zones::color::WHITE);
        stage.output().set_brightness(0);
        assert_eq!(stage.output().brightness(), 0);
        stage.commit(at(0));

        let frame = stage
            .output()
            .with_driver(|driver| driver.last_frame(0).map(<[_]>::to_vec))
            .unwrap();
        assert!(frame.iter().all(|led| *led == pinball_light_zones::color::BLACK));
        assert_eq!(buffers.strip0.get(0), Some(pinball_light_zones::color::WHITE));
    }
}
