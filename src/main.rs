mod config;
mod context;
mod controller;
mod data;
mod geometry;
mod hit;
mod layers;
mod layout;
mod logging;
mod scene;
mod script;
mod surface;
mod tooltip;
mod types;
mod viewport;

use std::time::Instant;

use crate::config::SkyMapConfig;
use crate::controller::InteractionController;
use crate::data::load_objects;
use crate::logging::setup_logging;
use crate::scene::SkyScene;
use crate::script::{load_script, replay};
use crate::surface::SvgSurface;
use crate::tooltip::PageGeometry;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "skymap")]
#[command(about = "Polar sky map of the objects above an observer", version)]
struct Args {
    /// JSON file with the objects, either the backend response or a bare array
    #[arg(long)]
    objects: String,

    /// Output SVG path
    #[arg(short = 'o', long = "out")]
    out: String,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Optional CSS override file path; if omitted embedded CSS is used
    #[arg(long)]
    css: Option<String>,

    /// Optional interaction script replayed before the frame is written
    #[arg(long)]
    events: Option<String>,

    /// Keep objects with a negative altitude
    #[arg(long)]
    include_below_horizon: bool,

    /// Log specification, e.g. "info" or "warn, skymap::controller=debug"
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn build_config(args: &Args) -> Result<SkyMapConfig> {
    let cfg = SkyMapConfig {
        width: args.width,
        height: args.height,
        include_below_horizon: args.include_below_horizon,
        ..SkyMapConfig::default()
    };
    // The horizon circle needs a positive radius
    let half = args.width.min(args.height) as f64 / 2.0;
    if half <= cfg.horizon_inset {
        bail!(
            "canvas {}x{} is too small, both sides must exceed {} px",
            args.width,
            args.height,
            2.0 * cfg.horizon_inset
        );
    }
    Ok(cfg)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = setup_logging(&args.log_level).context("starting logger")?;

    let cfg = build_config(&args)?;
    let loaded = load_objects(&args.objects)?;

    let page = PageGeometry::unscaled(cfg.width, cfg.height);
    let mut controller = InteractionController::new(SkyScene::new(Vec::new(), cfg), page);
    let start = Instant::now();
    controller.set_objects(loaded.objects, start);

    if let Some(path) = &args.events {
        let steps = load_script(path)?;
        let summary = replay(&mut controller, &steps, start);
        info!(
            "replayed {} events from {path} ({} renders, cursor {:?}): zoom {:.1}x, pan ({:.0}, {:.0})",
            summary.events,
            summary.renders,
            summary.cursor,
            controller.viewport().zoom,
            controller.viewport().pan.x,
            controller.viewport().pan.y
        );
        if let Some(o) = controller.hovered() {
            info!("pointer rests on {}", o.name);
        }
        let tooltip = controller.tooltip();
        if tooltip.is_visible() {
            if let (Some(content), Some(pos)) = (tooltip.content(), tooltip.positioner()) {
                info!(
                    "tooltip for ({:.0}, {:.0}) placed {:?} at ({:.0}, {:.0}): {}",
                    pos.anchor_canvas.x,
                    pos.anchor_canvas.y,
                    pos.placement,
                    pos.rect.left,
                    pos.rect.top,
                    content.lines().collect::<Vec<_>>().join(" | ")
                );
            }
        } else if tooltip.release_pending() {
            debug!("tooltip hidden, release still pending");
        }
    }

    let cfg = &controller.scene().cfg;
    let mut surface = SvgSurface::new(cfg.width, cfg.height, args.css.as_deref());
    controller.render(&mut surface);
    surface
        .save(&args.out)
        .with_context(|| format!("writing {}", args.out))?;
    info!("wrote {}", args.out);

    Ok(())
}

#[cfg(test)]
mod test_utils;
