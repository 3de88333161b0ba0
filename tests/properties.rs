//! Property tests for slider invariants.
//!
//! Uses proptest to verify:
//! 1. Grade sizes — endpoints match the configured range, steps are even
//! 2. Handle bounds — no pointer input moves the handle off the baseline
//! 3. Settling — after release the handle rests exactly on the committed tick
//! 4. Programmatic sizes — any requested size lands on a legal grade

use std::time::{Duration, Instant};

use floem::kurbo::Point;
use floem_font_resize::{FontResizeConfig, FontResizeController, GradeScale, Phase};
use proptest::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 200.0;

fn controller(total_grade: usize, standard_grade: usize) -> FontResizeController {
    let config = FontResizeConfig::default()
        .with_total_grade(total_grade)
        .with_standard_grade(standard_grade);
    let mut ctl = FontResizeController::new(config);
    ctl.layout(WIDTH, HEIGHT);
    ctl
}

fn assert_on_baseline(ctl: &FontResizeController) -> Result<(), TestCaseError> {
    let geometry = ctl.geometry().expect("laid out");
    let x = ctl.handle().x;
    prop_assert!(
        x >= geometry.start_x() && x <= geometry.stop_x(),
        "handle x {x} outside {}..={}",
        geometry.start_x(),
        geometry.stop_x()
    );
    Ok(())
}

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_coord() -> impl Strategy<Value = f64> {
    -2000.0..2000.0_f64
}

fn arb_path() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((arb_coord(), arb_coord()), 1..20)
}

// ── 1. Grade sizes ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn grade_sizes_span_range(
        min in 1.0..40.0_f64,
        span in 0.5..60.0_f64,
        total in 2usize..12,
    ) {
        let scale = GradeScale::new(min, min + span, total);
        prop_assert!((scale.size(1) - min).abs() < 1e-9);
        prop_assert!((scale.size(total) - (min + span)).abs() < 1e-9);
        for g in 2..=total {
            let step = scale.size(g) - scale.size(g - 1);
            prop_assert!((step - scale.per_grade_delta()).abs() < 1e-9);
        }
    }
}

// ── 2. Handle bounds ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn drag_never_leaves_baseline(path in arb_path()) {
        let mut ctl = controller(6, 3);
        let now = Instant::now();
        // Grab the handle wherever it is, then wander.
        let handle = ctl.handle();
        ctl.pointer_down(handle, now);
        for (i, (x, y)) in path.iter().enumerate() {
            ctl.pointer_move(Point::new(*x, *y), now + Duration::from_millis(i as u64));
            assert_on_baseline(&ctl)?;
        }
    }

    #[test]
    fn taps_never_leave_baseline(taps in arb_path()) {
        let mut ctl = controller(6, 2);
        let mut now = Instant::now();
        for (x, y) in taps {
            let pos = Point::new(x, y);
            ctl.pointer_down(pos, now);
            ctl.pointer_up(pos, now + Duration::from_millis(20));
            ctl.advance(now + Duration::from_millis(60));
            assert_on_baseline(&ctl)?;
            now += Duration::from_millis(80);
        }
    }
}

// ── 3. Settling ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn release_settles_on_committed_tick(
        total in 2usize..10,
        target_x in arb_coord(),
    ) {
        let mut ctl = controller(total, 1);
        let now = Instant::now();
        let handle = ctl.handle();
        ctl.pointer_down(handle, now);
        ctl.pointer_move(Point::new(target_x, handle.y), now + Duration::from_millis(10));
        ctl.pointer_up(Point::new(target_x, handle.y), now + Duration::from_millis(20));
        ctl.advance(now + Duration::from_secs(5));

        prop_assert_eq!(ctl.phase(), Phase::Idle);
        let geometry = ctl.geometry().expect("laid out");
        let grade = ctl.grade();
        prop_assert!((1..=total).contains(&grade));
        prop_assert_eq!(ctl.handle().x, geometry.tick_x(grade - 1));
        prop_assert_eq!(geometry.nearest_tick(ctl.handle().x), grade - 1);
    }
}

// ── 4. Programmatic sizes ────────────────────────────────────────────

proptest! {
    #[test]
    fn set_font_size_lands_on_legal_grade(size in -100.0..200.0_f64) {
        let mut ctl = controller(6, 2);
        ctl.set_font_size(size);
        prop_assert!(ctl.layout(WIDTH, HEIGHT));
        prop_assert!((1..=6).contains(&ctl.grade()));
        let geometry = ctl.geometry().expect("laid out");
        prop_assert_eq!(ctl.handle().x, geometry.tick_x(ctl.grade() - 1));
        if size <= 15.0 {
            prop_assert_eq!(ctl.grade(), 1);
        }
        if size >= 25.0 {
            prop_assert_eq!(ctl.grade(), 6);
        }
    }
}
