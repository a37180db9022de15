//! Slotted Edge Tracer
//!
//! Replays a [`SlottedEdge`] onto a [`PathTracer`]. Trigonometric steps drift a
//! little with every slot, so each slot is traced from a saved state and
//! followed by a snap to its analytic length, and the whole edge ends with a
//! snap to the declared edge length.

use crate::divider_slots::{EdgeSegment, SlotDescription, SlottedEdge};
use crate::error::{check_positive, SlotLayoutResult};
use crate::path_tracer::{Move, PathTracer};
use tracing::debug;

/// Edge with multiple angled rounded slots for dividers.
#[derive(Debug, Clone, Copy)]
pub struct DividerSlotsEdge<'a> {
    edge: &'a SlottedEdge,
}

impl<'a> DividerSlotsEdge<'a> {
    pub fn new(edge: &'a SlottedEdge) -> Self {
        Self { edge }
    }

    /// Trace the edge; the cursor ends exactly `length` along the starting
    /// heading.
    ///
    /// Nothing is emitted when `length` is not a positive number or a straight
    /// segment would trace a negative length.
    pub fn draw<T: PathTracer + ?Sized>(
        &self,
        tracer: &mut T,
        length: f64,
    ) -> SlotLayoutResult<()> {
        check_positive("declared edge length", length)?;
        self.edge.validate()?;

        debug!(
            segments = self.edge.segments().len(),
            declared_length = length,
            traced_length = self.edge.total_length(),
            "Tracing slotted edge"
        );

        tracer.save_state();
        for segment in self.edge.segments() {
            match segment {
                EdgeSegment::Straight(straight) => tracer.forward(straight.tracing_length()),
                EdgeSegment::Slot(slot) => Self::draw_slot(tracer, slot),
            }
        }
        tracer.restore_state();
        tracer.snap_to(length);
        Ok(())
    }

    fn draw_slot<T: PathTracer + ?Sized>(tracer: &mut T, slot: &SlotDescription) {
        tracer.save_state();
        tracer.trace(&slot_moves(slot));
        tracer.restore_state();
        tracer.snap_to(slot.tracing_length());
    }
}

/// Fillet in, down the starting wall, across, up the ending wall, fillet out.
///
/// The crossing is perpendicular to the walls, so it is the raw slot width;
/// its footprint along the edge is the angle-corrected width.
pub fn slot_moves(slot: &SlotDescription) -> [Move; 7] {
    [
        Move::Arc {
            angle: 90.0 - slot.angle,
            radius: slot.start_radius,
        },
        Move::Forward(slot.corrected_start_depth()),
        Move::Turn(-90.0),
        Move::Forward(slot.width),
        Move::Turn(-90.0),
        Move::Forward(slot.corrected_end_depth()),
        Move::Arc {
            angle: 90.0 + slot.angle,
            radius: slot.end_radius,
        },
    ]
}

impl SlottedEdge {
    /// Trace this edge, snapping the cursor to `length` at the end.
    pub fn draw<T: PathTracer + ?Sized>(
        &self,
        tracer: &mut T,
        length: f64,
    ) -> SlotLayoutResult<()> {
        DividerSlotsEdge::new(self).draw(tracer, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::divider_slots::{SlotLayoutGenerator, SlotParameters};
    use crate::path_tracer::{PathTurtle, TraceCommand, TraceRecorder};
    use approx::assert_abs_diff_eq;

    fn edge(sections: &[f64], angle: f64, radius: f64) -> SlottedEdge {
        SlotLayoutGenerator::new(SlotParameters {
            width: 3.6,
            depth: 10.0,
            angle,
            radius,
        })
        .expect("valid parameters")
        .generate(sections, 40.0)
        .expect("layout")
    }

    #[test]
    fn test_command_sequence() {
        let edge = edge(&[20.0, 20.0], 0.0, 1.5);
        let slot = edge.slots().next().expect("one slot").clone();
        let mut recorder = TraceRecorder::new();
        edge.draw(&mut recorder, edge.total_length()).expect("trace");

        let expected = vec![
            TraceCommand::SaveState,
            TraceCommand::Forward(18.5),
            TraceCommand::SaveState,
            TraceCommand::Arc {
                angle: 90.0,
                radius: 1.5,
            },
            TraceCommand::Forward(slot.corrected_start_depth()),
            TraceCommand::Turn(-90.0),
            TraceCommand::Forward(3.6),
            TraceCommand::Turn(-90.0),
            TraceCommand::Forward(slot.corrected_end_depth()),
            TraceCommand::Arc {
                angle: 90.0,
                radius: 1.5,
            },
            TraceCommand::RestoreState,
            TraceCommand::SnapTo(slot.tracing_length()),
            TraceCommand::Forward(18.5),
            TraceCommand::RestoreState,
            TraceCommand::SnapTo(edge.total_length()),
        ];
        assert_eq!(recorder.commands(), expected.as_slice());
    }

    #[test]
    fn test_angled_slot_closes_on_its_tracing_length() {
        for angle in [-35.0, -10.0, 0.0, 15.0, 40.0] {
            for (start_radius, end_radius) in [(0.0, 0.0), (1.5, 1.5), (0.0, 2.0), (2.5, 0.5)] {
                let slot = SlotDescription::with_radii(3.0, 12.0, angle, start_radius, end_radius);
                let mut turtle = PathTurtle::new();
                turtle.trace(&slot_moves(&slot));

                assert_abs_diff_eq!(turtle.position().x, slot.tracing_length(), epsilon = 1e-9);
                assert_abs_diff_eq!(turtle.position().y, 0.0, epsilon = 1e-9);
                assert_abs_diff_eq!(turtle.heading(), 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_cursor_ends_at_declared_length() {
        let edge = edge(&[25.0; 14], 12.0, 1.5);
        let mut turtle = PathTurtle::new();
        edge.draw(&mut turtle, 400.0).expect("trace");

        assert_eq!(turtle.position().x, 400.0);
        assert_eq!(turtle.position().y, 0.0);
        assert_eq!(turtle.heading(), 0.0);
    }

    #[test]
    fn test_rejects_bad_declared_length_without_drawing() {
        let edge = edge(&[20.0, 20.0], 0.0, 1.5);
        for length in [0.0, -5.0, f64::NAN] {
            let mut recorder = TraceRecorder::new();
            assert!(edge.draw(&mut recorder, length).is_err());
            assert!(recorder.commands().is_empty());
        }
    }
}
