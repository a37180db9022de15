//! Card Tray Planner
//!
//! Turns a [`TrayConfig`] into the pieces the geometry engine draws: the
//! slotted side edge, its declared length, and the divider panels for each
//! divider variant.

use crate::divider_panel::{DividerPanelBuilder, DividerPanelParameters};
use crate::divider_slots::{SlotLayoutGenerator, SlottedEdge, TrigCache};
use crate::error::{ParameterError, SlotLayoutResult};
use crate::path_tracer::PathTracer;
use cardtray_settings::TrayConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// The ways a set of dividers can rest on the walls between columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DividerVariant {
    /// Full-thickness tabs of unequal height so neighbouring tabs stack in one slot
    AsymmetricTabs,
    /// Half-thickness tabs so neighbouring tabs sit side by side
    HalfTabs,
    /// Full-thickness tabs
    FullTabs,
    /// One divider across every column
    Spanning,
}

impl DividerVariant {
    pub const ALL: [DividerVariant; 4] = [
        DividerVariant::AsymmetricTabs,
        DividerVariant::HalfTabs,
        DividerVariant::FullTabs,
        DividerVariant::Spanning,
    ];
}

impl fmt::Display for DividerVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DividerVariant::AsymmetricTabs => "asymmetric tabs",
            DividerVariant::HalfTabs => "half tabs",
            DividerVariant::FullTabs => "full tabs",
            DividerVariant::Spanning => "spanning",
        };
        f.write_str(name)
    }
}

/// Geometry derived from a tray configuration.
#[derive(Debug, Clone)]
pub struct TrayPlan {
    config: TrayConfig,
    tray_height: f64,
    slot_edge: SlottedEdge,
}

impl TrayPlan {
    pub fn new(config: &TrayConfig) -> SlotLayoutResult<Self> {
        config
            .validate()
            .map_err(|err| ParameterError::invalid("tray config", err.to_string()))?;

        let angle = config.slot.angle;
        // Inside dimensions give the content height; leaning content needs less tray.
        let tray_height = if config.outside {
            config.height - config.thickness
        } else {
            config.height / TrigCache::shared().cos_recip(angle)
        };

        let generator = SlotLayoutGenerator::from_settings(&config.slot, config.thickness)?;
        let mut slot_edge = generator.generate(&config.sections, tray_height)?;

        if config.outside {
            let target: f64 = config.sections.iter().sum::<f64>() - 2.0 * config.thickness;
            slot_edge.adjust_to_target_length(target)?;
        }

        info!(
            sections = config.sections.len(),
            slots = slot_edge.slots().count(),
            side_wall_length = slot_edge.total_length(),
            tray_height,
            "Planned card tray"
        );

        Ok(Self {
            config: config.clone(),
            tray_height,
            slot_edge,
        })
    }

    pub fn config(&self) -> &TrayConfig {
        &self.config
    }

    pub fn tray_height(&self) -> f64 {
        self.tray_height
    }

    /// Height of content that still fits when leaning at the slot angle.
    pub fn content_height(&self) -> f64 {
        self.tray_height * TrigCache::shared().cos_recip(self.config.slot.angle)
    }

    pub fn slot_edge(&self) -> &SlottedEdge {
        &self.slot_edge
    }

    /// Length of the side walls carrying the slots.
    pub fn side_wall_length(&self) -> f64 {
        self.slot_edge.total_length()
    }

    /// Trace the slotted top edge of a side wall.
    pub fn draw_slot_edge<T: PathTracer + ?Sized>(&self, tracer: &mut T) -> SlotLayoutResult<()> {
        self.slot_edge.draw(tracer, self.side_wall_length())
    }

    /// Divider panels for one variant: one per column, or a single one for
    /// [`DividerVariant::Spanning`].
    pub fn dividers(&self, variant: DividerVariant) -> SlotLayoutResult<Vec<DividerPanelBuilder>> {
        let c = &self.config;
        let base = DividerPanelParameters {
            widths: Vec::new(),
            height: self.tray_height,
            thickness: c.thickness,
            depth: c.slot.depth,
            play: c.divider.play,
            first_tab_width: c.thickness,
            second_tab_width: c.thickness,
            asymmetric_tabs: None,
            notch: c.notch.clone(),
        };

        let panels: Vec<DividerPanelParameters> = match variant {
            DividerVariant::Spanning => vec![DividerPanelParameters {
                widths: c.columns.clone(),
                ..base
            }],
            DividerVariant::FullTabs => c
                .columns
                .iter()
                .map(|width| DividerPanelParameters {
                    widths: vec![*width],
                    ..base.clone()
                })
                .collect(),
            DividerVariant::HalfTabs => c
                .columns
                .iter()
                .map(|width| DividerPanelParameters {
                    widths: vec![*width],
                    first_tab_width: c.thickness / 2.0,
                    second_tab_width: c.thickness / 2.0,
                    ..base.clone()
                })
                .collect(),
            DividerVariant::AsymmetricTabs => c
                .columns
                .iter()
                .map(|width| DividerPanelParameters {
                    widths: vec![*width],
                    asymmetric_tabs: Some(c.divider.asymmetric_ratio),
                    ..base.clone()
                })
                .collect(),
        };

        debug!(%variant, count = panels.len(), "Building divider panels");
        panels.into_iter().map(DividerPanelBuilder::new).collect()
    }

    pub fn report(&self) -> LayoutReport {
        LayoutReport {
            slot_edge_outer_length: self.side_wall_length() + 2.0 * self.config.thickness,
            slot_edge_inner_lengths: self.slot_edge.useful_lengths(),
            tray_height: self.tray_height,
            content_height: self.content_height(),
        }
    }
}

/// Summary of the planned lengths, two decimals per value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutReport {
    pub slot_edge_outer_length: f64,
    pub slot_edge_inner_lengths: Vec<f64>,
    pub tray_height: f64,
    pub content_height: f64,
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner: Vec<String> = self
            .slot_edge_inner_lengths
            .iter()
            .map(|length| format!("{:.2}", length))
            .collect();
        writeln!(f, "Slot_edge_outer_length:{:.2}", self.slot_edge_outer_length)?;
        writeln!(f, "Slot_edge_inner_lengths:{}", inner.join("|"))?;
        writeln!(f, "Tray_height:{:.2}", self.tray_height)?;
        write!(f, "Content_height:{:.2}", self.content_height)
    }
}
