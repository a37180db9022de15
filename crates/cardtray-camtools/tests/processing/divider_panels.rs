//! Tests for divider panel outlines and full tray planning

use approx::assert_abs_diff_eq;
use cardtray_camtools::divider_panel::{DividerPanelBuilder, DividerPanelParameters};
use cardtray_camtools::path_tracer::{PathTurtle, Point, TraceRecorder};
use cardtray_camtools::tray::{DividerVariant, TrayPlan};
use cardtray_settings::{NotchSettings, TrayConfig};

fn bounds(points: &[Point]) -> (f64, f64, f64, f64) {
    points.iter().fold(
        (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        |(min_x, min_y, max_x, max_y), p| {
            (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
        },
    )
}

#[test]
fn test_every_variant_traces_closed_outlines() {
    let mut config = TrayConfig::default();
    config.slot.angle = 10.0;
    let plan = TrayPlan::new(&config).expect("Failed to plan tray");

    for variant in DividerVariant::ALL {
        for panel in plan.dividers(variant).expect("Failed to build dividers") {
            let mut turtle = PathTurtle::new();
            panel.draw(&mut turtle);
            assert!(turtle.is_closed(), "{} divider should close", variant);
        }
    }
}

#[test]
fn test_spanning_divider_extent() {
    let params = DividerPanelParameters {
        widths: vec![60.0, 60.0],
        height: 50.0,
        notch: NotchSettings {
            enabled: false,
            ..NotchSettings::default()
        },
        ..DividerPanelParameters::default()
    };
    let builder = DividerPanelBuilder::new(params).expect("Failed to create divider");
    let mut turtle = PathTurtle::new();
    builder.draw(&mut turtle);

    let paths = turtle.paths();
    assert_eq!(paths.len(), 1);
    let (min_x, min_y, max_x, max_y) = bounds(paths[0]);

    // The tabs reach the full width, the body hangs the full height below the top edge.
    assert_abs_diff_eq!(min_x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(max_x, builder.total_width() - 0.3, epsilon = 1e-9);
    assert_abs_diff_eq!(min_y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(max_y, 50.0, epsilon = 1e-9);
}

#[test]
fn test_divider_draw_is_repeatable() {
    let plan = TrayPlan::new(&TrayConfig::default()).expect("Failed to plan tray");
    let panels = plan
        .dividers(DividerVariant::AsymmetricTabs)
        .expect("Failed to build dividers");

    let mut first = TraceRecorder::new();
    let mut second = TraceRecorder::new();
    panels[0].draw(&mut first);
    panels[0].draw(&mut second);
    assert_eq!(first, second);
}

#[test]
fn test_outside_tray_side_wall_matches_outer_length() {
    let mut config = TrayConfig::default();
    config.outside = true;
    config.slot.angle = 20.0;
    let plan = TrayPlan::new(&config).expect("Failed to plan tray");

    let report = plan.report();
    assert_abs_diff_eq!(report.slot_edge_outer_length, 350.0, epsilon = 1e-9);

    let mut turtle = PathTurtle::new();
    plan.draw_slot_edge(&mut turtle).expect("Failed to trace side wall");
    assert_eq!(turtle.position(), Point::new(plan.side_wall_length(), 0.0));
}
