//! Divider Panel Builder
//!
//! Outline of a removable divider that drops into the slots of two facing
//! walls. The top edge carries a tab at each end whose height matches the slot
//! depth; the bottom edge is cut away between columns so the divider straddles
//! the inner walls. Sides and bottom give up `2 * play` so the panel slides
//! without rattling.
//!
//! The panel is drawn counter-clockwise starting at the top-left corner with
//! the body on the left of the direction of travel (towards +y).

use crate::error::{
    check_finite, check_positive, ParameterError, ParameterResult, SlotLayoutResult,
};
use crate::path_tracer::{Move, PathTracer};
use cardtray_settings::NotchSettings;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividerPanelParameters {
    /// Width of every column the divider spans
    pub widths: Vec<f64>,
    /// Full height of the panel including the tabs
    pub height: f64,
    /// Material thickness, also the gap left between columns
    pub thickness: f64,
    /// Slot depth, the height of the tabs
    pub depth: f64,
    /// Clearance removed from sides, bottom and tabs
    pub play: f64,
    /// Tab at the start of the top edge
    pub first_tab_width: f64,
    /// Tab at the end of the top edge
    pub second_tab_width: f64,
    /// Share of the slot depth given to the second tab; the first tab gets the rest
    pub asymmetric_tabs: Option<f64>,
    pub notch: NotchSettings,
}

impl Default for DividerPanelParameters {
    fn default() -> Self {
        Self {
            widths: vec![70.0],
            height: 60.0,
            thickness: 3.0,
            depth: 10.0,
            play: 0.15,
            first_tab_width: 3.0,
            second_tab_width: 3.0,
            asymmetric_tabs: None,
            notch: NotchSettings::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DividerPanelBuilder {
    params: DividerPanelParameters,
}

impl DividerPanelBuilder {
    pub fn new(params: DividerPanelParameters) -> SlotLayoutResult<Self> {
        Self::validate_parameters(&params)?;
        Ok(Self { params })
    }

    fn validate_parameters(params: &DividerPanelParameters) -> ParameterResult<()> {
        if params.widths.is_empty() {
            return Err(ParameterError::Missing("divider widths".to_string()));
        }

        check_finite("play", params.play, false)?;
        check_positive("thickness", params.thickness)?;
        check_finite("slot depth", params.depth, false)?;
        check_positive("height", params.height)?;

        for width in &params.widths {
            check_positive("divider width", *width)?;
            if *width <= 2.0 * params.play {
                return Err(ParameterError::invalid(
                    "divider width",
                    format!("{} leaves nothing after removing 2 x play", width),
                ));
            }
        }

        if params.height <= params.depth {
            return Err(ParameterError::invalid(
                "height",
                format!("must exceed the slot depth {}", params.depth),
            ));
        }

        for (name, width) in [
            ("first tab width", params.first_tab_width),
            ("second tab width", params.second_tab_width),
        ] {
            check_finite(name, width, false)?;
            if width < params.play {
                return Err(ParameterError::invalid(
                    name,
                    format!("must be at least the play {}", params.play),
                ));
            }
        }

        if let Some(ratio) = params.asymmetric_tabs {
            if !ratio.is_finite() || ratio <= 0.0 || ratio >= 1.0 {
                return Err(ParameterError::OutOfRange {
                    name: "asymmetric tabs".to_string(),
                    value: ratio,
                    min: 0.0,
                    max: 1.0,
                });
            }
            if params.depth * ratio < params.play {
                return Err(ParameterError::invalid(
                    "asymmetric tabs",
                    "second tab would be shorter than the play",
                ));
            }
        }

        if params.notch.enabled {
            check_finite("notch depth", params.notch.depth, false)?;
            check_finite("notch upper radius", params.notch.upper_radius, false)?;
            check_finite("notch lower radius", params.notch.lower_radius, false)?;
            if params.notch.depth >= params.height {
                return Err(ParameterError::invalid(
                    "notch depth",
                    format!("must be less than the divider height {}", params.height),
                ));
            }
        }

        Ok(())
    }

    pub fn params(&self) -> &DividerPanelParameters {
        &self.params
    }

    /// Overall width of the panel, tabs included.
    pub fn total_width(&self) -> f64 {
        let p = &self.params;
        let gaps = p.widths.len().saturating_sub(1) as f64 * p.thickness;
        p.widths.iter().sum::<f64>() + gaps + p.first_tab_width + p.second_tab_width
    }

    /// Heights of the first and second tab.
    pub fn tab_heights(&self) -> (f64, f64) {
        let p = &self.params;
        match p.asymmetric_tabs {
            Some(ratio) => (p.depth * (1.0 - ratio), p.depth * ratio - p.play),
            None => (p.depth, p.depth),
        }
    }

    /// Trace the closed outline of the panel.
    pub fn draw<T: PathTracer + ?Sized>(&self, tracer: &mut T) {
        let p = &self.params;
        let (first_tab_height, second_tab_height) = self.tab_heights();
        let body = p.height - p.depth;

        debug!(
            widths = p.widths.len(),
            total_width = self.total_width(),
            asymmetric = p.asymmetric_tabs.is_some(),
            "Tracing divider panel"
        );

        // An asymmetric first tab sits lower, so the outline starts past it.
        if p.asymmetric_tabs.is_some() {
            tracer.snap_to(p.first_tab_width - p.play);
        } else {
            tracer.forward(p.first_tab_width - p.play);
        }

        for (index, width) in p.widths.iter().enumerate() {
            if index > 0 {
                tracer.forward(p.thickness);
            }
            tracer.trace(&notched_edge_moves(*width, &p.notch));
        }

        tracer.trace(&[
            Move::Forward(p.second_tab_width - p.play),
            Move::Turn(90.0),
            Move::Forward(second_tab_height),
            Move::Turn(90.0),
            Move::Forward(p.second_tab_width),
            Move::Turn(-90.0),
            Move::Forward(p.height - second_tab_height),
            Move::Turn(90.0),
        ]);

        for width in p.widths.iter().skip(1).rev() {
            tracer.trace(&[
                Move::Forward(width - 2.0 * p.play),
                Move::Turn(90.0),
                Move::Forward(body),
                Move::Turn(-90.0),
                Move::Forward(p.thickness + 2.0 * p.play),
                Move::Turn(-90.0),
                Move::Forward(body),
                Move::Turn(90.0),
            ]);
        }

        let first_width = p.widths.first().copied().unwrap_or_default();
        tracer.trace(&[
            Move::Forward(first_width - 2.0 * p.play),
            Move::Turn(90.0),
            Move::Forward(body),
            Move::Turn(-90.0),
            Move::Forward(p.first_tab_width),
            Move::Turn(90.0),
            Move::Forward(first_tab_height),
            Move::Turn(90.0),
        ]);

        if p.asymmetric_tabs.is_some() {
            tracer.trace(&[
                Move::Forward(p.first_tab_width - p.play),
                Move::Turn(-90.0),
                Move::Forward(p.depth - first_tab_height),
                Move::Turn(90.0),
            ]);
        }
    }
}

/// Top edge of one divider section with a finger notch to lift it out.
///
/// Three equal straight thirds around a rounded dip of `notch.depth`; a plain
/// straight edge when the notch is disabled or the radii do not fit.
pub fn notched_edge_moves(width: f64, notch: &NotchSettings) -> Vec<Move> {
    let third = (width - 2.0 * notch.upper_radius - 2.0 * notch.lower_radius) / 3.0;
    let straight_height = notch.depth - notch.upper_radius - notch.lower_radius;

    if !notch.enabled || third <= 0.0 || straight_height < 0.0 {
        return vec![Move::Forward(width)];
    }

    vec![
        Move::Forward(third),
        Move::Arc {
            angle: 90.0,
            radius: notch.upper_radius,
        },
        Move::Forward(straight_height),
        Move::Arc {
            angle: -90.0,
            radius: notch.lower_radius,
        },
        Move::Forward(third),
        Move::Arc {
            angle: -90.0,
            radius: notch.lower_radius,
        },
        Move::Forward(straight_height),
        Move::Arc {
            angle: 90.0,
            radius: notch.upper_radius,
        },
        Move::Forward(third),
    ]
}
