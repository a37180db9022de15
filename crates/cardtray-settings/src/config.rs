//! Tray Configuration
//!
//! Dimensions and slot/divider settings for a card storage tray, with
//! JSON/TOML persistence. Every dimension is in millimetres, every angle in
//! degrees.

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Settings for the divider slots cut into the side walls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotSettings {
    /// Depth of the slot
    pub depth: f64,
    /// Angle at which slots are cut, 0° is vertical
    pub angle: f64,
    /// Radius of the slot entrance
    pub radius: f64,
    /// Slack added to the material thickness to help insert dividers (may be negative)
    pub extra_slack: f64,
}

impl Default for SlotSettings {
    fn default() -> Self {
        Self {
            depth: 10.0,
            angle: 0.0,
            radius: 1.5,
            extra_slack: 0.2,
        }
    }
}

impl SlotSettings {
    /// Width of the slot opening for the given material thickness.
    pub fn slot_width(&self, thickness: f64) -> f64 {
        thickness + self.extra_slack
    }
}

/// Settings for the removable divider panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DividerSettings {
    /// Clearance removed from tabs and sides so a divider slides without binding
    pub play: f64,
    /// Share of the slot depth given to the first tab of an asymmetric divider
    pub asymmetric_ratio: f64,
}

impl Default for DividerSettings {
    fn default() -> Self {
        Self {
            play: 0.15,
            asymmetric_ratio: 0.5,
        }
    }
}

/// Settings for the finger notch on the top edge of each divider section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotchSettings {
    pub enabled: bool,
    pub depth: f64,
    pub upper_radius: f64,
    pub lower_radius: f64,
}

impl Default for NotchSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            depth: 15.0,
            upper_radius: 1.0,
            lower_radius: 8.0,
        }
    }
}

/// Complete tray configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayConfig {
    /// Material thickness
    pub thickness: f64,
    /// Height of the stored content (or of the tray when `outside` is set)
    pub height: f64,
    /// Whether the dimensions are outer dimensions
    pub outside: bool,
    /// Column widths across the tray, each one gets its own divider
    pub columns: Vec<f64>,
    /// Section lengths between slots along the side walls
    pub sections: Vec<f64>,
    pub slot: SlotSettings,
    pub divider: DividerSettings,
    pub notch: NotchSettings,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            thickness: 3.0,
            height: 104.0,
            outside: false,
            columns: vec![70.0; 4],
            sections: vec![25.0; 14],
            slot: SlotSettings::default(),
            divider: DividerSettings::default(),
            notch: NotchSettings::default(),
        }
    }
}

fn check_positive(name: &str, value: f64) -> SettingsResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SettingsError::invalid(
            name,
            format!("must be a positive number, got {}", value),
        ));
    }
    Ok(())
}

fn check_non_negative(name: &str, value: f64) -> SettingsResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SettingsError::invalid(
            name,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}

impl TrayConfig {
    /// Load config from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format_of(path)? {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded tray config");
        Ok(config)
    }

    /// Save config to a `.json` or `.toml` file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        check_positive("thickness", self.thickness)?;
        check_positive("height", self.height)?;

        if self.columns.is_empty() {
            return Err(SettingsError::invalid("columns", "at least one column is required"));
        }
        for width in &self.columns {
            check_positive("columns", *width)?;
        }

        if self.sections.is_empty() {
            return Err(SettingsError::invalid(
                "sections",
                "at least one section is required",
            ));
        }
        for length in &self.sections {
            check_non_negative("sections", *length)?;
        }

        check_non_negative("slot.depth", self.slot.depth)?;
        check_non_negative("slot.radius", self.slot.radius)?;
        if !self.slot.angle.is_finite() || self.slot.angle.abs() >= 90.0 {
            return Err(SettingsError::invalid(
                "slot.angle",
                format!("must be strictly between -90 and 90 degrees, got {}", self.slot.angle),
            ));
        }
        if !self.slot.extra_slack.is_finite() {
            return Err(SettingsError::invalid("slot.extra_slack", "must be finite"));
        }
        check_positive("slot width (thickness + slot.extra_slack)", self.slot.slot_width(self.thickness))?;

        check_non_negative("divider.play", self.divider.play)?;
        let ratio = self.divider.asymmetric_ratio;
        if !ratio.is_finite() || ratio <= 0.0 || ratio >= 1.0 {
            return Err(SettingsError::invalid(
                "divider.asymmetric_ratio",
                format!("must be strictly between 0 and 1, got {}", ratio),
            ));
        }

        check_non_negative("notch.depth", self.notch.depth)?;
        check_non_negative("notch.upper_radius", self.notch.upper_radius)?;
        check_non_negative("notch.lower_radius", self.notch.lower_radius)?;

        Ok(())
    }
}

enum ConfigFormat {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<ConfigFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(ConfigFormat::Json),
        Some("toml") => Ok(ConfigFormat::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}
