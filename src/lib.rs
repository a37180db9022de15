//! # CardTray
//!
//! Slot and divider geometry for laser-cut trading-card storage trays.
//!
//! ## Architecture
//!
//! CardTray is organized as a workspace with multiple crates:
//!
//! 1. **cardtray-settings** - Tray configuration, defaults, validation, JSON/TOML persistence
//! 2. **cardtray-camtools** - Slot layout, length normalization, edge tracing, divider panels
//! 3. **cardtray** - Main binary that loads a configuration and prints the planned layout
//!
//! ## Features
//!
//! - **Angled Slots**: Radius-filleted slots at any angle strictly between -90° and 90°
//! - **Exact Lengths**: Straight runs rescaled so an edge matches a fixed outer dimension
//! - **Drift-Free Tracing**: Every slot and every edge snaps to its analytic length
//! - **Divider Panels**: Asymmetric, half, full and spanning tabs with finger notches

pub use cardtray_camtools::{
    DividerPanelBuilder, DividerVariant, EdgeSegment, LayoutReport, PathTracer, PathTurtle,
    SlotDescription, SlotLayoutError, SlotLayoutGenerator, SlottedEdge, StraightEdgeDescription,
    TraceRecorder, TrayPlan,
};
pub use cardtray_settings::{SettingsError, TrayConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, keeping stdout for the layout
/// - RUST_LOG environment variable support
/// - JSON lines instead of pretty output when `CARDTRAY_LOG_JSON` is set
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if std::env::var_os("CARDTRAY_LOG_JSON").is_some() {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
