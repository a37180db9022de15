//! Tests for slot layout generation, length normalization and edge tracing

use approx::{assert_abs_diff_eq, assert_relative_eq};
use cardtray_camtools::divider_slots::{
    EdgeSegment, SlotLayoutGenerator, SlotParameters, SlottedEdge,
};
use cardtray_camtools::path_tracer::{PathTurtle, TraceRecorder};
use cardtray_camtools::SlotLayoutError;

fn generator(angle: f64, radius: f64) -> SlotLayoutGenerator {
    SlotLayoutGenerator::new(SlotParameters {
        width: 3.6,
        depth: 10.0,
        angle,
        radius,
    })
    .expect("Failed to create slot layout generator")
}

#[test]
fn test_four_equal_sections_at_zero_angle() {
    let mut edge = generator(0.0, 1.5)
        .generate(&[70.0, 70.0, 70.0, 70.0], 60.0)
        .expect("Failed to generate edge");

    assert_eq!(edge.straight_edges().count(), 4);
    assert_eq!(edge.slots().count(), 3);
    assert_abs_diff_eq!(edge.total_length(), 4.0 * 70.0 + 3.0 * 3.6, epsilon = 1e-9);
    for straight in edge.straight_edges() {
        assert_eq!(straight.angle_compensation, 0.0);
    }

    edge.adjust_to_target_length(300.0).expect("Failed to normalize edge");
    assert_relative_eq!(edge.total_length(), 300.0, max_relative = 1e-9);

    let ratios: Vec<f64> = edge.straight_edges().map(|s| s.outside_ratio).collect();
    assert!(ratios.iter().all(|r| *r == ratios[0]));
    assert_relative_eq!(ratios[0], 1.0 + 9.2 / 280.0, max_relative = 1e-12);
}

#[test]
fn test_normalization_is_exact_across_configurations() {
    let cases: [(&[f64], f64, f64, f64, f64); 5] = [
        (&[25.0; 14], 0.0, 1.5, 100.0, 380.0),
        (&[25.0; 14], 17.5, 1.5, 100.0, 344.0),
        (&[0.0, 40.0, 55.0, 40.0], -22.0, 2.0, 80.0, 150.0),
        (&[90.0, 10.0, 90.0], 35.0, 0.5, 40.0, 260.0),
        (&[120.0], 5.0, 1.0, 60.0, 100.0),
    ];

    for (sections, angle, radius, height, target) in cases {
        let mut edge = generator(angle, radius)
            .generate(sections, height)
            .expect("Failed to generate edge");
        edge.adjust_to_target_length(target).expect("Failed to normalize edge");
        assert_relative_eq!(edge.total_length(), target, max_relative = 1e-9);
    }
}

#[test]
fn test_normalization_leaves_slots_untouched() {
    let mut edge = generator(12.0, 1.5)
        .generate(&[30.0, 30.0, 30.0], 50.0)
        .expect("Failed to generate edge");
    let slots_before: Vec<_> = edge.slots().cloned().collect();

    edge.adjust_to_target_length(120.0).expect("Failed to normalize edge");

    let slots_after: Vec<_> = edge.slots().cloned().collect();
    assert_eq!(slots_before, slots_after);
}

#[test]
fn test_zero_angle_symmetry() {
    let edge = generator(0.0, 2.5)
        .generate(&[40.0, 40.0, 40.0], 30.0)
        .expect("Failed to generate edge");

    for slot in edge.slots() {
        assert_abs_diff_eq!(
            slot.round_edge_start_correction(),
            slot.round_edge_end_correction(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            slot.corrected_start_depth(),
            slot.corrected_end_depth(),
            epsilon = 1e-12
        );
        assert_eq!(slot.extra_depth(), 0.0);
    }
}

#[test]
fn test_slide_compensation_grows_with_angle() {
    let mut previous = 0.0;
    for step in 1..18 {
        let angle = step as f64 * 5.0;
        let edge = generator(angle, 0.5)
            .generate(&[60.0, 60.0], 40.0)
            .expect("Failed to generate edge");
        let last = edge
            .straight_edges()
            .last()
            .expect("edge ends with a straight run");

        assert!(
            last.angle_compensation > previous,
            "angle {}: {} should exceed {}",
            angle,
            last.angle_compensation,
            previous
        );
        previous = last.angle_compensation;
    }
}

/// Rebuild every straight run's compensation from its neighbouring slots.
fn expected_compensations(edge: &SlottedEdge) -> Vec<f64> {
    let segments = edge.segments();
    segments
        .iter()
        .enumerate()
        .filter(|(_, segment)| segment.as_straight().is_some())
        .map(|(index, _)| {
            let before = index
                .checked_sub(1)
                .and_then(|i| segments[i].as_slot())
                .map(|slot| slot.round_edge_end_correction())
                .unwrap_or(0.0);
            let after = segments
                .get(index + 1)
                .and_then(EdgeSegment::as_slot)
                .map(|slot| slot.round_edge_start_correction())
                .unwrap_or(0.0);
            before + after
        })
        .collect()
}

#[test]
fn test_each_slot_correction_lands_once_on_each_neighbour() {
    let layouts: [(&[f64], f64, f64); 4] = [
        (&[70.0; 4], 0.0, 1.5),
        (&[25.0; 14], 20.0, 1.5),
        (&[0.0, 30.0, 40.0, 50.0], -15.0, 2.0),
        (&[30.0, 40.0, 0.0], 30.0, 1.0),
    ];

    for (sections, angle, radius) in layouts {
        let edge = generator(angle, radius)
            .generate(sections, 50.0)
            .expect("Failed to generate edge");
        let actual: Vec<f64> = edge
            .straight_edges()
            .map(|s| s.round_edge_compensation)
            .collect();
        let expected = expected_compensations(&edge);

        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(&expected) {
            assert_abs_diff_eq!(*a, *e, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_retrace_is_identical() {
    let mut edge = generator(18.0, 1.5)
        .generate(&[25.0; 14], 100.0)
        .expect("Failed to generate edge");
    edge.adjust_to_target_length(344.0).expect("Failed to normalize edge");

    let mut first = TraceRecorder::new();
    let mut second = TraceRecorder::new();
    edge.draw(&mut first, 344.0).expect("Failed to trace edge");
    edge.draw(&mut second, 344.0).expect("Failed to trace edge");

    assert_eq!(first, second);
    assert!(!first.commands().is_empty());
}

#[test]
fn test_many_slots_end_exactly_on_declared_length() {
    let edge = generator(25.0, 1.5)
        .generate(&[20.0; 40], 90.0)
        .expect("Failed to generate edge");
    let declared = edge.total_length();

    let mut turtle = PathTurtle::new();
    edge.draw(&mut turtle, declared).expect("Failed to trace edge");

    assert_eq!(turtle.position().x, declared);
    assert_eq!(turtle.position().y, 0.0);

    // The traced outline itself stays within drift tolerance of the analytic length.
    let paths = turtle.paths();
    assert_eq!(paths.len(), 1);
    let end = paths[0].last().expect("non-empty path");
    assert_abs_diff_eq!(end.x, declared, epsilon = 1e-6);
}

#[test]
fn test_infeasible_edge_fails_before_tracing() {
    let result = generator(0.0, 6.0).generate(&[50.0, 4.0, 50.0], 20.0);
    assert!(matches!(
        result,
        Err(SlotLayoutError::InfeasibleGeometry { index: 2, .. })
    ));
}
