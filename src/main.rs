use anyhow::Context;
use clap::{ArgAction, Parser};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use paintinput::config::Config;
use paintinput::gesture::{
    DeviceInfo, GestureSink, ManipulationDelta, PaintInput, Stroke,
};
use paintinput::scene::{FlatScene, ScenePicker};
use paintinput::trace;
use paintinput::util::Point;

#[derive(Parser, Debug)]
#[command(name = "paintinput")]
#[command(version, about = "Multi-device painting gesture disambiguation engine")]
struct Cli {
    /// Trace file to replay (JSON lines of timestamped raw events)
    #[arg(long, short = 't', value_name = "FILE")]
    trace: PathBuf,

    /// Replay with original timing instead of as fast as possible
    #[arg(long, action = ArgAction::SetTrue)]
    realtime: bool,

    /// Disable finger painting (fingers navigate, they never draw)
    #[arg(long, action = ArgAction::SetTrue)]
    no_finger_painting: bool,

    /// Map paint events onto a flat WxH scene and print the texels hit
    #[arg(long, value_name = "WxH")]
    scene: Option<String>,
}

/// Prints every semantic event, optionally resolving paint positions to
/// texels through the scene picker.
struct PrintSink {
    scene: Option<FlatScene>,
}

impl PrintSink {
    fn paint_at(&self, position: Point) {
        if let Some(scene) = &self.scene
            && let Some(pick) = scene.pick(position)
        {
            println!("  paint item={} texel=({}, {})", pick.item, pick.texel.0, pick.texel.1);
        }
    }
}

impl GestureSink for PrintSink {
    fn stroke_started(&mut self, stroke: &Stroke) {
        println!("stroke-started device={}", stroke.device());
    }

    fn stroke_point_added(&mut self, stroke: &Stroke) {
        if let Some(point) = stroke.last_point() {
            println!(
                "stroke-point-added device={} point=({:.1}, {:.1})",
                stroke.device(),
                point.x,
                point.y
            );
            self.paint_at(point);
        }
    }

    fn stroke_completed(&mut self, stroke: Stroke) {
        println!(
            "stroke-completed device={} points={}",
            stroke.device(),
            stroke.points().len()
        );
    }

    fn stroke_canceled(&mut self, stroke: Stroke) {
        println!(
            "stroke-canceled device={} points={}",
            stroke.device(),
            stroke.points().len()
        );
    }

    fn dot_placed(&mut self, device: DeviceInfo, position: Point) {
        println!(
            "dot-placed device={} position=({:.1}, {:.1})",
            device, position.x, position.y
        );
        self.paint_at(position);
    }

    fn multi_finger_tap(&mut self, fingers: usize) {
        println!("multi-finger-tap fingers={fingers}");
    }

    fn hold_started(&mut self, position: Point) {
        println!("hold-started position=({:.1}, {:.1})", position.x, position.y);
    }

    fn hold_ended(&mut self) {
        println!("hold-ended");
    }

    fn manipulation_started(&mut self, _delta: &ManipulationDelta) {
        println!("manipulation-started");
    }

    fn manipulation_updated(&mut self, _delta: &ManipulationDelta) {
        println!("manipulation-updated");
    }

    fn manipulation_ended(&mut self) {
        println!("manipulation-ended");
    }
}

fn parse_scene(size: &str) -> anyhow::Result<FlatScene> {
    let (width, height) = size
        .split_once('x')
        .with_context(|| format!("invalid scene size '{size}', expected WxH"))?;
    let width: u32 = width
        .parse()
        .with_context(|| format!("invalid scene width in '{size}'"))?;
    let height: u32 = height
        .parse()
        .with_context(|| format!("invalid scene height in '{size}'"))?;
    Ok(FlatScene::new(width, height))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = Config::load()?;
    if cli.no_finger_painting {
        config.gesture.finger_painting = false;
    }

    let scene = cli.scene.as_deref().map(parse_scene).transpose()?;

    let file = File::open(&cli.trace)
        .with_context(|| format!("Failed to open trace file: {}", cli.trace.display()))?;
    let entries = trace::read_trace(BufReader::new(file))
        .with_context(|| format!("Failed to parse trace file: {}", cli.trace.display()))?;
    log::info!("Replaying {} raw events", entries.len());

    let mut engine = PaintInput::new(&config.gesture, PrintSink { scene });
    trace::replay(&entries, &mut engine, cli.realtime)
        .context("Replay aborted: trace delivered out-of-order device events")?;

    Ok(())
}
