mod common;

mod tests {
    use crate::common::{Buffers, STRIP0_LEN, STRIP1_LEN};
    use pinball_light_zones::buffer::{Claim, FrameBuffer, PixelCell, Span, claims_disjoint};
    use pinball_light_zones::color::{BLACK, RED, WARM_WHITE};
    use pinball_light_zones::layout::validate_claims;
    use pinball_light_zones::stage::MAX_STRIPS;
    use pinball_light_zones::{Fixture, Instant, LayoutError, Stage};

    use crate::common::RecordingDriver;

    #[test]
    fn test_pinball_fixture_is_valid() {
        let fixture = Fixture::PINBALL;
        assert_eq!(fixture.validate(&Fixture::PINBALL_STRIP_LENS), Ok(()));
        let claims = fixture.all_claims().unwrap();
        assert!(claims_disjoint(&claims));
    }

    #[test]
    fn test_jackpot_is_eight_segments_of_six() {
        let fixture = Fixture::PINBALL;
        assert_eq!(fixture.jackpot.span.count(), 8 * fixture.jackpot_segment_len);
        assert_eq!(fixture.jackpot_segment_len, 6);
    }

    #[test]
    fn test_overlap_is_rejected() {
        let a = Claim::new(0, 0, 10);
        let b = Claim::new(0, 9, 12);
        assert_eq!(
            validate_claims(&[a, b], &[20]),
            Err(LayoutError::Overlap(a, b))
        );
        // Same range on another strip does not overlap
        assert_eq!(validate_claims(&[a, Claim::new(1, 0, 10)], &[20, 20]), Ok(()));
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let claim = Claim::new(0, 10, 30);
        assert_eq!(
            validate_claims(&[claim], &[20]),
            Err(LayoutError::OutOfBounds(claim))
        );
        let empty = Claim::new(0, 5, 5);
        assert_eq!(
            validate_claims(&[empty], &[20]),
            Err(LayoutError::OutOfBounds(empty))
        );
    }

    #[test]
    fn test_unknown_strip_is_rejected() {
        let claim = Claim::single(3, 0);
        assert_eq!(
            validate_claims(&[claim], &[20, 20]),
            Err(LayoutError::UnknownStrip(claim))
        );
    }

    #[test]
    fn test_fixture_does_not_fit_short_strips() {
        assert!(Fixture::PINBALL.validate(&[STRIP0_LEN, 60]).is_err());
    }

    #[test]
    fn test_span_helpers() {
        let span = Span::new(4, 8);
        assert_eq!(span.count(), 4);
        assert!(span.contains(4) && span.contains(7));
        assert!(!span.contains(8));
        assert_eq!(span.clamped(6), 4..6);
        assert_eq!(Span::new(8, 4).count(), 0);
        assert!(!Span::new(8, 4).overlaps(span));
    }

    #[test]
    fn test_too_many_strips() {
        let strip = FrameBuffer::<4>::new();
        let strips: Vec<&[PixelCell]> = (0..=MAX_STRIPS).map(|_| strip.cells()).collect();
        let result = Stage::new(&strips, RecordingDriver::default());
        assert!(matches!(result, Err(LayoutError::TooManyStrips)));
    }

    #[test]
    fn test_frame_buffer_set_is_bounds_checked() {
        let buffer = FrameBuffer::<4>::new();
        assert!(buffer.set(3, RED));
        assert!(!buffer.set(4, RED));
        assert_eq!(buffer.get(3), Some(RED));
        assert_eq!(buffer.get(4), None);
        buffer.fill(BLACK);
        assert_eq!(buffer.snapshot(), [BLACK; 4]);
    }

    #[test]
    fn test_paint_static() {
        let buffers = Buffers::new();
        buffers.strip0.fill(RED);
        let stage = buffers.stage();
        let fixture = Fixture::PINBALL;

        fixture.paint_static(&stage, Instant::from_millis(0));

        assert_eq!(buffers.strip0.snapshot(), [BLACK; STRIP0_LEN]);
        let strip1 = buffers.strip1.snapshot();
        for &index in fixture.bride.1 {
            assert_eq!(strip1[usize::from(index)], WARM_WHITE);
        }
        assert_eq!(strip1[0], BLACK);
        assert_eq!(strip1.len(), STRIP1_LEN);

        stage.output().with_driver(|driver| {
            assert_eq!(driver.writes, 2);
            assert_eq!(driver.last_frame(1).map(<[_]>::len), Some(STRIP1_LEN));
        });
    }
}
