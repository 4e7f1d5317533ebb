// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless coffee-bag wall.
//!
//! Loads a catalog (or makes one up), runs the wall for a fixed number of
//! frames while replaying a short script of drags, wheel scrolls, a search,
//! and a tap, and logs what a renderer would have been asked to draw.
//!
//! Run:
//! - `cargo run -p bagwall_demos -- --frames 300 --query fruity`
//! - `RUST_LOG=bagwall_view=debug cargo run -p bagwall_demos -- --catalog coffees.json`

mod assets;

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use bagwall_camera::{PointerId, PointerKind, WheelDelta};
use bagwall_catalog::{AssetPaths, CatalogError, CatalogItem, load_catalog, resolve_dimensions};
use bagwall_view::{
    FrameReport, InputEvent, InstanceKey, PointerSample, Renderer, VisualInstance, WallConfig,
    WallView,
};
use clap::Parser;
use kurbo::{Point, Size, Vec2};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::assets::{FsDetailView, PngProbe, synthetic_catalog};

/// Milliseconds per simulated frame.
const FRAME_MS: u64 = 16;

/// Frames a tapped detail view stays open before it is dismissed.
const DETAIL_FRAMES: u32 = 45;

#[derive(Debug, Parser)]
#[command(name = "bagwall-demo", about = "Drive a headless coffee-bag wall")]
struct Cli {
    /// JSON catalog to load; a synthetic catalog is used when omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Directory holding `coffee-bag-NN.png` images.
    #[arg(long, default_value = "bags")]
    bags: PathBuf,
    /// Directory searched for `coffee-NN.md` recipes; may be repeated.
    #[arg(long = "recipes")]
    recipes: Vec<PathBuf>,
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of frames to run.
    #[arg(long, default_value_t = 240)]
    frames: u32,
    /// Display width in logical pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,
    /// Display height in logical pixels.
    #[arg(long, default_value_t = 800.0)]
    height: f64,
    /// Seed for the shuffle; overrides the configuration.
    #[arg(long)]
    seed: Option<u64>,
    /// Search typed partway through the run.
    #[arg(long)]
    query: Option<String>,
    /// Size of the synthetic catalog.
    #[arg(long, default_value_t = 26)]
    synthetic: u32,
    /// Longest wait for one image header, in milliseconds.
    #[arg(long, default_value_t = 2000)]
    image_timeout_ms: u64,
}

/// Keeps the set of visuals a real renderer would hold.
#[derive(Debug, Default)]
struct CountingRenderer {
    live: HashSet<InstanceKey>,
    positioned: u64,
    released: u64,
    placeholders: u64,
}

impl Renderer for CountingRenderer {
    fn position_visual(&mut self, visual: &VisualInstance) {
        self.live.insert(visual.key);
        self.positioned += 1;
        if visual.placeholder {
            self.placeholders += 1;
        }
    }

    fn release_visual(&mut self, key: InstanceKey) {
        if !self.live.remove(&key) {
            tracing::warn!(?key, "release of a visual that was never positioned");
        }
        self.released += 1;
    }

    fn show_failure(&mut self, message: &str) {
        tracing::error!("{message}");
    }
}

#[derive(Debug)]
enum Step {
    Input(InputEvent),
    Search(String),
}

fn pointer(kind: PointerKind, pos: Point, frame: u32) -> PointerSample {
    PointerSample {
        pointer: PointerId(1),
        kind,
        pos,
        time_ms: u64::from(frame) * FRAME_MS,
    }
}

/// Frame-stamped interactions: a fling, a wheel scroll, a hover, an
/// optional search, and a tap on whatever sits mid-display.
fn script(view: Size, query: Option<&str>) -> Vec<(u32, Step)> {
    let center = Point::new(view.width / 2.0, view.height / 2.0);
    let mut steps = Vec::new();

    let mut pos = center;
    let down = pointer(PointerKind::Touch, pos, 10);
    steps.push((10, Step::Input(InputEvent::PointerDown(down))));
    for frame in 11..=30 {
        pos += Vec2::new(-4.0, -18.0);
        let sample = pointer(PointerKind::Touch, pos, frame);
        steps.push((frame, Step::Input(InputEvent::PointerMove(sample))));
    }
    let up = pointer(PointerKind::Touch, pos, 31);
    steps.push((31, Step::Input(InputEvent::PointerUp(up))));

    steps.push((
        90,
        Step::Input(InputEvent::Wheel(WheelDelta {
            dx: 0.0,
            dy: 240.0,
            shift: false,
        })),
    ));
    steps.push((
        120,
        Step::Input(InputEvent::PointerMove(pointer(PointerKind::Mouse, center, 120))),
    ));
    if let Some(query) = query {
        steps.push((140, Step::Search(query.to_owned())));
    }
    steps.push((
        200,
        Step::Input(InputEvent::PointerDown(pointer(PointerKind::Mouse, center, 200))),
    ));
    steps.push((
        204,
        Step::Input(InputEvent::PointerUp(pointer(PointerKind::Mouse, center, 204))),
    ));
    steps
}

fn load_items(
    cli: &Cli,
    config: &WallConfig,
    assets: &AssetPaths,
) -> Result<Vec<CatalogItem>, CatalogError> {
    let Some(path) = &cli.catalog else {
        tracing::info!(count = cli.synthetic, "using a synthetic catalog");
        return Ok(synthetic_catalog(cli.synthetic, assets));
    };
    let records = load_catalog(path)?;
    let mut items = CatalogItem::from_records(&records, assets);
    let mut sizes = PngProbe::new(Duration::from_millis(cli.image_timeout_ms));
    let report = resolve_dimensions(&mut items, &mut sizes, config.view.unresolved);
    tracing::info!(
        records = records.len(),
        resolved = report.resolved,
        placeholders = report.placeholders.len(),
        excluded = report.excluded.len(),
        "catalog loaded"
    );
    Ok(items)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => WallConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => WallConfig::default(),
    };
    if cli.seed.is_some() {
        config.view.seed = cli.seed;
    }

    let mut assets = AssetPaths {
        image_dir: cli.bags.clone(),
        ..AssetPaths::default()
    };
    if !cli.recipes.is_empty() {
        assets.recipe_dirs = cli.recipes.clone();
    }

    let view = Size::new(cli.width, cli.height);
    let mut renderer = CountingRenderer::default();
    let items = load_items(&cli, &config, &assets);
    let mut wall = WallView::bootstrap(items, config, view, &mut renderer)
        .context("the wall could not start")?;
    let mut detail = FsDetailView::new(assets);

    let mut steps = script(view, cli.query.as_deref()).into_iter().peekable();
    let mut paused_at = None;
    for frame in 0..cli.frames {
        let now = u64::from(frame) * FRAME_MS;
        while let Some((_, step)) = steps.next_if(|(at, _)| *at <= frame) {
            match step {
                Step::Input(event) => {
                    if let Some(number) = wall.handle_input(event, &mut detail) {
                        tracing::info!(frame, number, "tap opened a detail view");
                        paused_at = Some(frame);
                    }
                }
                Step::Search(query) => wall.search(&query, now),
            }
        }
        if let Some(result) = wall.poll_search(now)? {
            tracing::info!(
                frame,
                matches = result.indices.len(),
                fell_back = result.fell_back,
                "search applied"
            );
        }
        if paused_at.is_some_and(|at| frame >= at + DETAIL_FRAMES) {
            paused_at = None;
            wall.resume();
        }

        match wall.frame(&mut renderer) {
            FrameReport::Paused => {}
            FrameReport::Drawn(stats) if frame % 30 == 0 || stats.released > 0 => {
                tracing::info!(
                    frame,
                    added = stats.added,
                    updated = stats.updated,
                    released = stats.released,
                    active = stats.active,
                    camera = ?wall.camera().position(),
                    phase = ?wall.camera().phase(),
                    cursor = ?wall.cursor(),
                    "frame"
                );
            }
            FrameReport::Drawn(_) => {}
        }
    }

    tracing::info!(
        frames = cli.frames,
        positioned = renderer.positioned,
        released = renderer.released,
        placeholders = renderer.placeholders,
        live = renderer.live.len(),
        details = detail.opened,
        generation = wall.generation(),
        "done"
    );
    Ok(())
}
