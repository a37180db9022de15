use anyhow::Context;
use cardtray::{
    init_logging, DividerVariant, PathTurtle, TrayConfig, TrayPlan, BUILD_DATE, VERSION,
};
use std::path::PathBuf;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    info!(version = VERSION, build_date = BUILD_DATE, "Starting cardtray");

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => TrayConfig::load_from_file(&path)
            .with_context(|| format!("Failed to load tray config {}", path.display()))?,
        None => TrayConfig::default(),
    };

    let plan = TrayPlan::new(&config).context("Failed to plan tray")?;

    let mut side_wall = PathTurtle::new();
    plan.draw_slot_edge(&mut side_wall).context("Failed to trace side wall")?;
    let points: usize = side_wall.paths().iter().map(|path| path.len()).sum();
    info!(points, "Traced side wall");

    for variant in DividerVariant::ALL {
        let panels = plan
            .dividers(variant)
            .with_context(|| format!("Failed to build {} dividers", variant))?;
        let closed = panels
            .iter()
            .filter(|panel| {
                let mut outline = PathTurtle::new();
                panel.draw(&mut outline);
                outline.is_closed()
            })
            .count();
        info!(%variant, panels = panels.len(), closed, "Traced dividers");
    }

    println!("{}", plan.report());
    print!("{}", plan.slot_edge().describe());
    Ok(())
}
