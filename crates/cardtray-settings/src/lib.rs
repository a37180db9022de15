//! # CardTray Settings
//!
//! Tray configuration: material thickness, tray height, column and section
//! rows, and the slot, divider and notch settings consumed by the geometry
//! engine in `cardtray-camtools`.

pub mod config;
pub mod error;

pub use config::{DividerSettings, NotchSettings, SlotSettings, TrayConfig};
pub use error::{SettingsError, SettingsResult};
