//! Property tests driving a [Timer] with arbitrary clock histories.
use proptest::prelude::*;
use proptest::proptest;

use crate::*;

fn build(
    ticks_per_second: f64,
    timescale: f64,
    max_tick_count: u32,
) -> (ManualClock, Timer<ManualClock>) {
    let clock = ManualClock::new(0.0);
    let timer = TimerBuilder::new()
        .ticks_per_second(ticks_per_second)
        .timescale(timescale)
        .max_tick_count(max_tick_count)
        .build(clock.clone())
        .unwrap();
    (clock, timer)
}

fn check_bounds_impl(
    ticks_per_second: f64,
    timescale: f64,
    max_tick_count: u32,
    deltas: Vec<f64>,
) -> proptest::test_runner::TestCaseResult {
    let (clock, mut timer) = build(ticks_per_second, timescale, max_tick_count);

    for d in deltas {
        clock.advance(d);
        timer.advance_time();

        let mut performed = 0u32;
        timer.perform_ticks(|| performed += 1);

        prop_assert!(timer.get_tick_count() <= timer.get_max_tick_count());
        prop_assert_eq!(performed, timer.get_tick_count());
        prop_assert!(timer.get_partial_tick() >= 0.0);
        prop_assert!(timer.get_partial_tick().is_finite());
    }

    Ok(())
}

/// Without a cap in the way, the leftover is always a fraction of a tick.
fn check_uncapped_partial_impl(
    ticks_per_second: f64,
    timescale: f64,
    deltas: Vec<f64>,
) -> proptest::test_runner::TestCaseResult {
    let (clock, mut timer) = build(ticks_per_second, timescale, u32::MAX);

    for d in deltas {
        clock.advance(d);
        timer.advance_time();
        prop_assert!(timer.get_partial_tick() < 1.0);
    }

    Ok(())
}

fn check_stationary_clock_impl(
    ticks_per_second: f64,
    deltas: Vec<f64>,
) -> proptest::test_runner::TestCaseResult {
    let (clock, mut timer) = build(ticks_per_second, 1.0, 0);

    for d in deltas {
        clock.advance(d);
        timer.advance_time();
        let partial = timer.get_partial_tick();

        timer.advance_time();
        prop_assert_eq!(timer.get_tick_count(), 0);
        prop_assert_eq!(timer.get_partial_tick(), partial);
    }

    Ok(())
}

fn check_accumulation_impl(
    ticks_per_second: f64,
    deltas: Vec<f64>,
) -> proptest::test_runner::TestCaseResult {
    let (clock, mut timer) = build(ticks_per_second, 1.0, u32::MAX);
    let start = clock.get_time();

    let mut total_ticks = 0u64;
    for d in deltas {
        clock.advance(d);
        timer.advance_time();
        total_ticks += timer.get_tick_count() as u64;
    }

    let expected = ticks_per_second * (clock.get_time() - start);
    let got = total_ticks as f64 + timer.get_partial_tick();
    prop_assert!(
        (got - expected).abs() <= 1e-6 * expected.max(1.0),
        "got {} ticks, expected {}",
        got,
        expected
    );
    prop_assert!((total_ticks as f64 - expected.floor()).abs() <= 1.0);

    Ok(())
}

fn check_pause_impl(
    ticks_per_second: f64,
    deltas: Vec<f64>,
) -> proptest::test_runner::TestCaseResult {
    let (clock, mut timer) = build(ticks_per_second, 0.0, 0);

    for d in deltas {
        clock.advance(d);
        timer.advance_time();
        prop_assert_eq!(timer.get_tick_count(), 0);
        prop_assert_eq!(timer.get_partial_tick(), 0.0);
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        ..Default::default()
    })]
    #[test]
    #[allow(unreachable_code)]
    fn fuzz_tick_bounds(
        ticks_per_second in 0.5..240.0f64,
        timescale in -4.0..50.0f64,
        max_tick_count in 0..20u32,
        deltas in proptest::collection::vec(-3.0..5.0f64, 0..200usize),
    ) {
        return check_bounds_impl(ticks_per_second, timescale, max_tick_count, deltas);
    }

    #[test]
    #[allow(unreachable_code)]
    fn fuzz_uncapped_partial(
        ticks_per_second in 0.5..240.0f64,
        timescale in 0.0..8.0f64,
        deltas in proptest::collection::vec(-3.0..5.0f64, 0..200usize),
    ) {
        return check_uncapped_partial_impl(ticks_per_second, timescale, deltas);
    }

    #[test]
    #[allow(unreachable_code)]
    fn fuzz_stationary_clock(
        ticks_per_second in 0.5..240.0f64,
        deltas in proptest::collection::vec(0.0..2.0f64, 0..100usize),
    ) {
        return check_stationary_clock_impl(ticks_per_second, deltas);
    }

    #[test]
    #[allow(unreachable_code)]
    fn fuzz_accumulation(
        ticks_per_second in 1.0..120.0f64,
        deltas in proptest::collection::vec(0.0..=1.0f64, 0..100usize),
    ) {
        return check_accumulation_impl(ticks_per_second, deltas);
    }

    #[test]
    #[allow(unreachable_code)]
    fn fuzz_pause(
        ticks_per_second in 0.5..240.0f64,
        deltas in proptest::collection::vec(-3.0..100.0f64, 0..100usize),
    ) {
        return check_pause_impl(ticks_per_second, deltas);
    }
}

// However far behind the loop falls, one iteration never runs more than the cap.
proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        ..Default::default()
    })]
    #[test]
    fn fuzz_spiral_of_death(
        ticks_per_second in 1.0..240.0f64,
        timescale in 1.0..1000.0f64,
        stall in 0.0..1000.0f64,
    ) {
        let (clock, mut timer) = build(ticks_per_second, timescale, 0);
        let cap = timer.get_default_max_tick_count();
        prop_assert_eq!(timer.get_max_tick_count(), cap);

        clock.advance(stall);
        timer.advance_time();
        prop_assert!(timer.get_tick_count() <= cap);

        let owed = (stall.min(1.0) * timescale * ticks_per_second).floor();
        if owed >= cap as f64 {
            prop_assert_eq!(timer.get_tick_count(), cap);
        }
    }
}

/// Frames reported across all windows plus the in-progress count is every frame counted.
fn check_fps_conservation_impl(frame_gaps: Vec<f64>) -> proptest::test_runner::TestCaseResult {
    let clock = ManualClock::new(0.0);
    let mut timer = Timer::new(20.0, clock.clone()).unwrap();

    let mut reported = 0u64;
    let mut windows = 0u64;
    for gap in frame_gaps.iter() {
        clock.advance(*gap);
        timer.calc_fps_with(|fps| {
            reported += fps as u64;
            windows += 1;
        });
    }

    prop_assert_eq!(
        reported + timer.get_frames_per_second() as u64,
        frame_gaps.len() as u64
    );
    // One window per whole second the clock has moved.
    prop_assert_eq!(windows, clock.get_time().floor() as u64);

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        ..Default::default()
    })]
    #[test]
    #[allow(unreachable_code)]
    fn fuzz_fps_windows(
        frame_gaps in proptest::collection::vec(0.0..0.5f64, 0..300usize),
    ) {
        return check_fps_conservation_impl(frame_gaps);
    }
}
