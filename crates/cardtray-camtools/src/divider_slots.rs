//! Divider Slots
//!
//! Lays out a row of angled, radius-filleted slots along an edge so removable
//! dividers can be dropped between card sections. Each slot gives up part of the
//! straight run on either side to its fillets; the generator folds those
//! corrections into the neighbouring straight segments while it builds the edge
//! left to right, so the traced edge length is known analytically.

pub mod trig;
pub mod types;

pub use trig::TrigCache;
pub use types::{EdgeSegment, SlotDescription, StraightEdgeDescription};

use crate::error::{
    check_finite, check_positive, ParameterError, ParameterResult, SlotLayoutError,
    SlotLayoutResult,
};
use cardtray_settings::SlotSettings;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A straight segment may trace this far below zero before it counts as infeasible.
pub const FEASIBILITY_TOLERANCE: f64 = 1e-9;

/// Slot geometry shared by every slot on an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotParameters {
    /// Slot opening, normally material thickness plus slack
    pub width: f64,
    pub depth: f64,
    /// Degrees from vertical, strictly within (-90, 90)
    pub angle: f64,
    /// Fillet radius at the slot entrance
    pub radius: f64,
}

impl Default for SlotParameters {
    fn default() -> Self {
        Self::from_settings(&SlotSettings::default(), 3.0)
    }
}

impl SlotParameters {
    pub fn from_settings(settings: &SlotSettings, thickness: f64) -> Self {
        Self {
            width: settings.slot_width(thickness),
            depth: settings.depth,
            angle: settings.angle,
            radius: settings.radius,
        }
    }

    pub fn validate(&self) -> ParameterResult<()> {
        check_positive("slot width", self.width)?;
        check_finite("slot depth", self.depth, false)?;
        check_finite("slot radius", self.radius, false)?;
        if !self.angle.is_finite() || self.angle <= -90.0 || self.angle >= 90.0 {
            return Err(ParameterError::OutOfRange {
                name: "slot angle".to_string(),
                value: self.angle,
                min: -90.0,
                max: 90.0,
            });
        }
        Ok(())
    }

    fn slot(&self) -> SlotDescription {
        SlotDescription::new(self.width, self.depth, self.angle, self.radius)
    }

    fn flush_slot(&self) -> SlotDescription {
        SlotDescription::with_radii(self.width, self.depth, self.angle, 0.0, self.radius)
    }
}

/// Ordered straight/slot sequence describing one slotted edge, left to right.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlottedEdge {
    segments: Vec<EdgeSegment>,
}

impl SlottedEdge {
    pub fn segments(&self) -> &[EdgeSegment] {
        &self.segments
    }

    pub fn straight_edges(&self) -> impl Iterator<Item = &StraightEdgeDescription> {
        self.segments.iter().filter_map(EdgeSegment::as_straight)
    }

    pub fn slots(&self) -> impl Iterator<Item = &SlotDescription> {
        self.segments.iter().filter_map(EdgeSegment::as_slot)
    }

    /// Sum of every segment's tracing length.
    pub fn total_length(&self) -> f64 {
        self.segments.iter().map(EdgeSegment::tracing_length).sum()
    }

    /// Useful length of each straight run, in order.
    pub fn useful_lengths(&self) -> Vec<f64> {
        self.straight_edges()
            .map(StraightEdgeDescription::useful_length)
            .collect()
    }

    /// Rescale every straight run by the same ratio so that `total_length()`
    /// equals `target_length`. Slot geometry is left untouched.
    ///
    /// The ratio is derived from the unscaled edge, so calling this again with a
    /// different target replaces the previous rescale.
    pub fn adjust_to_target_length(&mut self, target_length: f64) -> SlotLayoutResult<()> {
        check_positive("target length", target_length)?;

        let asked_total: f64 = self.straight_edges().map(|e| e.asked_length).sum();
        if asked_total == 0.0 {
            return Err(ParameterError::NoScalableSegments.into());
        }

        let unscaled_length: f64 = self
            .segments
            .iter()
            .map(|segment| match segment {
                EdgeSegment::Straight(straight) => {
                    straight.asked_length - straight.round_edge_compensation
                        + straight.angle_compensation
                }
                EdgeSegment::Slot(slot) => slot.tracing_length(),
            })
            .sum();
        let compensation = unscaled_length - target_length;
        let outside_ratio = 1.0 - compensation / asked_total;

        for (index, segment) in self.segments.iter().enumerate() {
            if let EdgeSegment::Straight(straight) = segment {
                let rescaled = StraightEdgeDescription {
                    outside_ratio,
                    ..straight.clone()
                };
                check_feasible(index, &rescaled)?;
            }
        }

        for segment in &mut self.segments {
            if let EdgeSegment::Straight(straight) = segment {
                straight.outside_ratio = outside_ratio;
            }
        }

        debug!(
            target_length,
            outside_ratio,
            total_length = self.total_length(),
            "Rescaled slotted edge"
        );
        Ok(())
    }

    /// Check that no straight run traces a negative length.
    pub fn validate(&self) -> SlotLayoutResult<()> {
        for (index, segment) in self.segments.iter().enumerate() {
            if let EdgeSegment::Straight(straight) = segment {
                check_feasible(index, straight)?;
            }
        }
        Ok(())
    }

    /// Per-segment dump of traced versus useful lengths.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for (index, segment) in self.segments.iter().enumerate() {
            let line = match segment {
                EdgeSegment::Straight(straight) => format!(
                    "{:>3} {} traced={:.4} useful={:.4}\n",
                    index,
                    straight,
                    straight.tracing_length(),
                    straight.useful_length()
                ),
                EdgeSegment::Slot(slot) => {
                    format!("{:>3} {} traced={:.4}\n", index, slot, slot.tracing_length())
                }
            };
            out.push_str(&line);
        }
        out.push_str(&format!("total={:.6}\n", self.total_length()));
        out
    }

    fn push(&mut self, segment: EdgeSegment) {
        self.segments.push(segment);
    }

    fn last_straight_mut(&mut self) -> Option<&mut StraightEdgeDescription> {
        self.segments.iter_mut().rev().find_map(|segment| match segment {
            EdgeSegment::Straight(straight) => Some(straight),
            EdgeSegment::Slot(_) => None,
        })
    }
}

fn check_feasible(index: usize, straight: &StraightEdgeDescription) -> SlotLayoutResult<()> {
    let tracing_length = straight.tracing_length();
    if tracing_length < -FEASIBILITY_TOLERANCE || !tracing_length.is_finite() {
        return Err(SlotLayoutError::InfeasibleGeometry {
            index,
            tracing_length,
        });
    }
    Ok(())
}

/// Builds slotted edges where every slot shares the same angle and radius.
#[derive(Debug, Clone)]
pub struct SlotLayoutGenerator {
    params: SlotParameters,
}

impl SlotLayoutGenerator {
    pub fn new(params: SlotParameters) -> SlotLayoutResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn from_settings(settings: &SlotSettings, thickness: f64) -> SlotLayoutResult<Self> {
        Self::new(SlotParameters::from_settings(settings, thickness))
    }

    pub fn params(&self) -> &SlotParameters {
        &self.params
    }

    /// Lay out slots between the given sections.
    ///
    /// `sections` are the lengths of the spaces between slots. A leading zero
    /// places a slot flush with the start of the edge. `height` is the height of
    /// the angled face; the last straight run grows by `height * tan(angle)` so
    /// content can slide all the way down.
    pub fn generate(&self, sections: &[f64], height: f64) -> SlotLayoutResult<SlottedEdge> {
        Self::validate_sections(sections)?;
        check_finite("height", height, false)?;

        let params = &self.params;
        let mut edge = SlottedEdge::default();
        let mut remaining = sections.iter().copied();

        // A slot flush with the start has no material before it, so no entrance fillet.
        let mut first_correction = 0.0;
        let mut first_length = remaining.next().unwrap_or_default();
        if first_length == 0.0 {
            let slot = params.flush_slot();
            first_correction = slot.round_edge_end_correction();
            edge.push(EdgeSegment::Slot(slot));
            first_length = remaining.next().ok_or_else(|| {
                ParameterError::invalid(
                    "sections",
                    "a leading zero section needs at least one section after it",
                )
            })?;
        }
        edge.push(EdgeSegment::Straight(StraightEdgeDescription::new(
            first_length,
            first_correction,
        )));

        for length in remaining {
            let slot = params.slot();

            // The straight run before the slot stops early for the entrance fillet.
            if let Some(previous) = edge.last_straight_mut() {
                previous.round_edge_compensation += slot.round_edge_start_correction();
            }

            let end_correction = slot.round_edge_end_correction();
            edge.push(EdgeSegment::Slot(slot));
            edge.push(EdgeSegment::Straight(StraightEdgeDescription::new(
                length,
                end_correction,
            )));
        }

        let slide = height * TrigCache::shared().tan(params.angle);
        if let Some(last) = edge.last_straight_mut() {
            last.angle_compensation += slide;
        }

        edge.validate()?;

        debug!(
            sections = sections.len(),
            segments = edge.segments.len(),
            total_length = edge.total_length(),
            "Generated slotted edge"
        );
        Ok(edge)
    }

    fn validate_sections(sections: &[f64]) -> ParameterResult<()> {
        if sections.is_empty() {
            return Err(ParameterError::Missing("sections".to_string()));
        }
        for length in sections {
            check_finite("section length", *length, false)?;
        }
        Ok(())
    }
}
