//! Scripted replay host.
//!
//! Runs a JSON script of pointer, touch and wheel steps through a
//! `DrawingCanvas`, then writes the raster as a PNG and prints a JSON summary
//! of what the gestures produced.
//!
//! ```text
//! inkboard <script.json> [--settings path] [--image in.png] [--out out.png]
//! ```

use anyhow::{Context, Result, bail};
use inkboard::brush::DirectBrush;
use inkboard::input::{PointerEvent, ScrollDelta, WheelEvent};
use inkboard::settings::{CanvasSettings, default_settings_path};
use inkboard::stroke::Stroke;
use inkboard::types::{ClientPoint, Modifiers, Tool};
use inkboard::{CanvasEvent, Color, DrawingCanvas, FillReport, PixelBuffer, ViewState, logging};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default = "default_size")]
    width: u32,
    #[serde(default = "default_size")]
    height: u32,
    #[serde(default = "default_background")]
    background: Color,
    #[serde(default)]
    steps: Vec<Step>,
}

fn default_size() -> u32 {
    256
}

fn default_background() -> Color {
    Color::WHITE
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Step {
    Start {
        #[serde(flatten)]
        pointer: PointerStep,
        #[serde(default)]
        start_at_edge: bool,
    },
    Move {
        #[serde(flatten)]
        pointer: PointerStep,
    },
    End {
        #[serde(flatten)]
        pointer: PointerStep,
    },
    Wheel {
        x: f32,
        y: f32,
        dy: f32,
        #[serde(default)]
        lines: bool,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Tool {
        tool: Tool,
    },
    Disable {
        disabled: bool,
    },
    ResetView,
}

/// One pointer sample. With `touches` set, `x`/`y` default to the first touch.
#[derive(Debug, Deserialize)]
struct PointerStep {
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    /// Milliseconds since the script started
    #[serde(default)]
    t: u64,
    #[serde(default)]
    touches: Vec<ClientPoint>,
    #[serde(default)]
    modifiers: Modifiers,
}

impl PointerStep {
    fn to_event(&self) -> PointerEvent {
        let timestamp = Duration::from_millis(self.t);
        let event = if self.touches.is_empty() {
            PointerEvent::mouse(ClientPoint::new(self.x, self.y), timestamp)
        } else {
            PointerEvent::touch(self.touches.clone(), timestamp)
        };
        event.with_modifiers(self.modifiers)
    }

    /// End events report the lifted finger as the position and the rest as
    /// remaining touches.
    fn to_end_event(&self) -> PointerEvent {
        if self.touches.is_empty() {
            return self.to_event();
        }
        PointerEvent::touch_end(
            ClientPoint::new(self.x, self.y),
            self.touches.clone(),
            Duration::from_millis(self.t),
        )
        .with_modifiers(self.modifiers)
    }
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    strokes: Vec<Stroke>,
    discarded: usize,
    fills: Vec<FillReport>,
    rejected_fills: usize,
    final_view: ViewState,
    final_state: &'static str,
    events_handled: u64,
    avg_latency_ms: f64,
}

struct Args {
    script: PathBuf,
    settings: Option<PathBuf>,
    image: Option<PathBuf>,
    out: PathBuf,
}

fn parse_args() -> Result<Args> {
    let mut script = None;
    let mut settings = None;
    let mut image = None;
    let mut out = PathBuf::from("out.png");

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" => settings = Some(PathBuf::from(args.next().context("--settings needs a path")?)),
            "--image" => image = Some(PathBuf::from(args.next().context("--image needs a path")?)),
            "--out" => out = PathBuf::from(args.next().context("--out needs a path")?),
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            path => {
                if script.replace(PathBuf::from(path)).is_some() {
                    bail!("only one script may be given");
                }
            }
        }
    }

    Ok(Args {
        script: script
            .context("usage: inkboard <script.json> [--settings path] [--image in.png] [--out out.png]")?,
        settings,
        image,
        out,
    })
}

fn load_settings(path: Option<&Path>) -> Result<CanvasSettings> {
    match path {
        Some(p) => CanvasSettings::load(p)
            .with_context(|| format!("failed to load settings from {}", p.display())),
        None => Ok(default_settings_path()
            .map(|p| CanvasSettings::load_or_default(&p))
            .unwrap_or_default()),
    }
}

fn run_script(script: &Script, canvas: &mut DrawingCanvas, summary: &mut Summary) {
    for step in &script.steps {
        match step {
            Step::Start { pointer, start_at_edge } => canvas.draw_start(&pointer.to_event(), *start_at_edge),
            Step::Move { pointer } => canvas.draw_move(&pointer.to_event()),
            Step::End { pointer } => canvas.draw_end(&pointer.to_end_event()),
            Step::Wheel { x, y, dy, lines, modifiers } => {
                let delta = if *lines {
                    ScrollDelta::Lines { x: 0.0, y: *dy }
                } else {
                    ScrollDelta::Pixels { x: 0.0, y: *dy }
                };
                canvas.wheel(&WheelEvent {
                    position: ClientPoint::new(*x, *y),
                    delta,
                    modifiers: *modifiers,
                });
            }
            Step::Tool { tool } => canvas.context_mut().set_tool(*tool),
            Step::Disable { disabled } => canvas.context_mut().set_disabled(*disabled),
            Step::ResetView => canvas.reset_view(),
        }

        for event in canvas.drain_events() {
            match event {
                CanvasEvent::StrokeCommitted(stroke) => summary.strokes.push(stroke),
                CanvasEvent::StrokeDiscarded { .. } => summary.discarded += 1,
                CanvasEvent::Filled(report) => summary.fills.push(report),
                CanvasEvent::FillRejected { .. } => summary.rejected_fills += 1,
                CanvasEvent::RedrawRequested => {}
            }
        }
    }
}

fn main() -> Result<()> {
    logging::init();
    let args = parse_args()?;

    let content = std::fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read script {}", args.script.display()))?;
    let script: Script = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse script {}", args.script.display()))?;
    let settings = load_settings(args.settings.as_deref())?;

    let buffer = match &args.image {
        Some(path) => PixelBuffer::open(path)
            .with_context(|| format!("failed to open image {}", path.display()))?,
        None => PixelBuffer::new(script.width, script.height, script.background),
    };

    let mut canvas = DrawingCanvas::from_settings(&settings, buffer, DirectBrush::new());
    let mut summary = Summary::default();
    run_script(&script, &mut canvas, &mut summary);

    summary.final_view = canvas.context().coords.view();
    summary.final_state = canvas.state().name();
    summary.events_handled = canvas.latency().total_events();
    summary.avg_latency_ms = canvas.latency().average_latency();
    canvas.latency().log_summary_if_slow();

    canvas
        .context()
        .buffer
        .save(&args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    info!(out = %args.out.display(), strokes = summary.strokes.len(), "replay finished");

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
