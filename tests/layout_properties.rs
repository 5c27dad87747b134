use brick_colour_quiz::rendering::layout::{compute, FontMetrics, FontSizes, LayoutGeometry, Viewport};

fn layout(w: u32, h: u32, n: usize) -> LayoutGeometry {
    compute(Viewport::new(w, h), n, &FontMetrics::default())
}

fn assert_stacked(g: &LayoutGeometry) {
    for pair in g.buttons.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(a.bottom() <= b.y, "buttons overlap: {a:?} {b:?}");
        assert!(!a.overlaps(&b));
        assert_eq!(b.y - a.bottom(), g.gap);
    }
    if let Some(first) = g.buttons.first() {
        assert!(first.y >= g.swatch.bottom(), "first button under swatch");
    }
}

#[test]
fn default_window_swatch_is_a_third_of_height() {
    let g = layout(1200, 800, 4);
    assert_eq!(g.swatch.height, 264);
    assert_eq!(g.buttons.len(), 4);
    assert!(g.title.y < g.stat_line1.y && g.stat_line1.y < g.stat_line2.y);
    assert!(g.stat_line2.y < g.prompt.y && g.prompt.y < g.swatch.y);
}

#[test]
fn buttons_never_overlap_and_stay_ordered() {
    for w in [640, 1024, 1200, 1920] {
        for h in (360..=1600).step_by(20) {
            for n in 1..=9 {
                assert_stacked(&layout(w, h, n));
            }
        }
    }
}

#[test]
fn buttons_clear_the_footer_band_on_roomy_windows() {
    let m = FontMetrics::default();
    for h in 800..=2000 {
        for n in 1..=3 {
            let g = layout(1200, h, n);
            let last = g.buttons.last().unwrap();
            assert!(last.bottom() <= g.footer.y - m.footer, "h={h} n={n}");
        }
    }
    for h in 1200..=2000 {
        for n in 1..=6 {
            let g = layout(1200, h, n);
            let last = g.buttons.last().unwrap();
            assert!(last.bottom() <= g.footer.y - m.footer, "h={h} n={n}");
        }
    }
}

#[test]
fn short_window_triggers_one_correction_pass() {
    let g = layout(1200, 600, 4);
    assert!(g.overflow.corrected());
    assert_eq!(g.overflow.initial, 159);
    assert_eq!(g.overflow.residual, 113);
    assert!(g.overflow.residual < g.overflow.initial);
    assert_eq!((g.button_height, g.gap), (48, 12));
}

#[test]
fn correction_never_makes_things_worse() {
    for h in (200..=1400).step_by(7) {
        for n in 1..=9 {
            let g = layout(1200, h, n);
            assert!(g.overflow.residual <= g.overflow.initial, "h={h} n={n}");
            if g.overflow.corrected() {
                assert!(g.button_height >= 48 && g.gap >= 12);
            }
        }
    }
}

#[test]
fn layout_is_a_pure_function() {
    let fonts = FontSizes::for_viewport_height(900).metrics();
    let a = compute(Viewport::new(1000, 900), 5, &fonts);
    let b = compute(Viewport::new(1000, 900), 5, &fonts);
    assert_eq!(a, b);
}

#[test]
fn every_button_is_hit_testable_at_its_centre() {
    let g = layout(1200, 1000, 6);
    for (i, r) in g.buttons.iter().enumerate() {
        let cx = (r.x + r.width / 2) as f32;
        let cy = (r.y + r.height / 2) as f32;
        assert_eq!(g.button_at(cx, cy), Some(i));
    }
    assert_eq!(g.button_at(1.0, 1.0), None);
}
