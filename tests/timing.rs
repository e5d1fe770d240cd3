mod tests {
    use pinball_light_zones::{Deadline, Duration, Instant};

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_deadline_due_after_period() {
        let deadline = Deadline::new(at(1_000), Duration::from_millis(500));
        assert!(!deadline.is_due(at(1_499)));
        assert!(deadline.is_due(at(1_500)));
        assert_eq!(deadline.remaining(at(1_200)), Duration::from_millis(300));
        assert_eq!(deadline.remaining(at(9_000)), Duration::from_millis(0));
        assert_eq!(deadline.elapsed(at(1_250)), Duration::from_millis(250));
    }

    #[test]
    fn test_deadline_before_its_start() {
        let deadline = Deadline::new(at(1_000), Duration::from_millis(500));
        assert_eq!(deadline.elapsed(at(10)), Duration::from_millis(0));
        assert!(!deadline.is_due(at(10)));
        assert_eq!(deadline.remaining(at(10)), Duration::from_millis(500));
    }

    #[test]
    fn test_immediate_deadline() {
        let deadline = Deadline::immediate(at(1_000));
        assert!(deadline.is_due(at(1_000)));
        assert!(deadline.is_due(at(10)));
        assert_eq!(deadline.remaining(at(10)), Duration::from_millis(0));
    }

    #[test]
    fn test_deadline_restart() {
        let mut deadline = Deadline::new(at(0), Duration::from_millis(100));
        deadline.restart(at(5_000), Duration::from_millis(20));
        assert_eq!(deadline.since(), at(5_000));
        assert_eq!(deadline.after(), Duration::from_millis(20));
        assert!(!deadline.is_due(at(5_019)));
        assert!(deadline.is_due(at(5_020)));
    }
}
