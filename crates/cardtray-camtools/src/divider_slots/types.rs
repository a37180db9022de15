//! Segment model for slotted edges

use super::trig::TrigCache;
use std::fmt;

/// One angled, radius-filleted slot cut into an edge.
///
/// All derived lengths are recomputed from the attributes on every call; only
/// the angle-keyed trig values are cached.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotDescription {
    /// Slot opening measured perpendicular to the slot walls
    pub width: f64,
    pub depth: f64,
    /// Degrees from vertical, signed
    pub angle: f64,
    pub start_radius: f64,
    pub end_radius: f64,
}

impl SlotDescription {
    /// Slot with the same fillet radius on both sides.
    pub fn new(width: f64, depth: f64, angle: f64, radius: f64) -> Self {
        Self::with_radii(width, depth, angle, radius, radius)
    }

    pub fn with_radii(
        width: f64,
        depth: f64,
        angle: f64,
        start_radius: f64,
        end_radius: f64,
    ) -> Self {
        Self {
            width,
            depth,
            angle,
            start_radius,
            end_radius,
        }
    }

    fn div_by_cos(&self) -> f64 {
        TrigCache::shared().cos_recip(self.angle)
    }

    fn tan(&self) -> f64 {
        TrigCache::shared().tan(self.angle)
    }

    /// Horizontal footprint of the slot opening; equals `width` at 0°.
    pub fn angle_corrected_width(&self) -> f64 {
        self.width * self.div_by_cos()
    }

    /// How much earlier the preceding straight run stops to leave room for the
    /// entrance fillet.
    pub fn round_edge_start_correction(&self) -> f64 {
        self.start_radius * (self.div_by_cos() - self.tan())
    }

    /// How much later the following straight run starts because of the exit
    /// fillet.
    pub fn round_edge_end_correction(&self) -> f64 {
        self.end_radius * (self.div_by_cos() + self.tan())
    }

    /// The angle makes one wall of the slot deeper than the other.
    pub fn extra_depth(&self) -> f64 {
        self.width * self.tan()
    }

    /// Straight length of the starting wall.
    pub fn corrected_start_depth(&self) -> f64 {
        self.depth + self.extra_depth().max(0.0) - self.round_edge_start_correction()
    }

    /// Straight length of the ending wall.
    pub fn corrected_end_depth(&self) -> f64 {
        self.depth + (-self.extra_depth()).max(0.0) - self.round_edge_end_correction()
    }

    /// Length this slot takes along the edge.
    pub fn tracing_length(&self) -> f64 {
        self.round_edge_start_correction()
            + self.angle_corrected_width()
            + self.round_edge_end_correction()
    }
}

impl fmt::Display for SlotDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Slot({:.2}, depth={:.2}, angle={:.2}, start_radius={:.2}, end_radius={:.2})",
            self.width, self.depth, self.angle, self.start_radius, self.end_radius
        )
    }
}

/// A straight run between two slots, or between a slot and an end of the edge.
#[derive(Debug, Clone, PartialEq)]
pub struct StraightEdgeDescription {
    /// Section length requested by the caller
    pub asked_length: f64,
    /// Length given up to the fillets of the neighbouring slots
    pub round_edge_compensation: f64,
    /// Uniform scale set by normalization
    pub outside_ratio: f64,
    /// Extra length on the last run so content can slide down an angled face
    pub angle_compensation: f64,
}

impl StraightEdgeDescription {
    pub fn new(asked_length: f64, round_edge_compensation: f64) -> Self {
        Self {
            asked_length,
            round_edge_compensation,
            outside_ratio: 1.0,
            angle_compensation: 0.0,
        }
    }

    /// Length traced for this run.
    pub fn tracing_length(&self) -> f64 {
        self.useful_length() - self.round_edge_compensation + self.angle_compensation
    }

    /// Part of the length usable by the tray content.
    pub fn useful_length(&self) -> f64 {
        self.asked_length * self.outside_ratio
    }
}

impl fmt::Display for StraightEdgeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Straight({:.2}, round_edge_compensation={:.2}, angle_compensation={:.2}, outside_ratio={:.4})",
            self.asked_length,
            self.round_edge_compensation,
            self.angle_compensation,
            self.outside_ratio
        )
    }
}

/// One entry of a slotted edge, left to right.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeSegment {
    Straight(StraightEdgeDescription),
    Slot(SlotDescription),
}

impl EdgeSegment {
    pub fn tracing_length(&self) -> f64 {
        match self {
            EdgeSegment::Straight(straight) => straight.tracing_length(),
            EdgeSegment::Slot(slot) => slot.tracing_length(),
        }
    }

    pub fn as_straight(&self) -> Option<&StraightEdgeDescription> {
        match self {
            EdgeSegment::Straight(straight) => Some(straight),
            EdgeSegment::Slot(_) => None,
        }
    }

    pub fn as_slot(&self) -> Option<&SlotDescription> {
        match self {
            EdgeSegment::Slot(slot) => Some(slot),
            EdgeSegment::Straight(_) => None,
        }
    }
}

impl fmt::Display for EdgeSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeSegment::Straight(straight) => fmt::Display::fmt(straight, f),
            EdgeSegment::Slot(slot) => fmt::Display::fmt(slot, f),
        }
    }
}
