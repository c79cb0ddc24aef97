use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use game_input::InputQueue;
use glam::UVec2;
use isoscape::script::{self, ScriptStep};
use isoscape::{AppMode, Frame, FrameClock, FrameContext, Game, Settings};
use tracing::info;

#[derive(Parser)]
#[command(name = "isoscape")]
#[command(about = "Headless isometric tile and orbit camera driver")]
struct Cli {
    /// Scene to run. Defaults to the mode in the settings file.
    #[arg(short, long)]
    mode: Option<AppMode>,
    /// Total frames to run. Idle frames pad a short script; a long one is cut off.
    #[arg(short, long)]
    frames: Option<u64>,
    #[arg(short, long)]
    settings: Option<PathBuf>,
    /// Input script. Defaults to a built-in demo for the chosen mode.
    #[arg(long)]
    script: Option<PathBuf>,
    #[arg(long, default_value_t = 1280, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,
    #[arg(long, default_value_t = 720, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,
}

fn main() -> Result<()> {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .try_init()
        .ok();

    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let mode = cli.mode.unwrap_or(settings.mode);

    let steps = match &cli.script {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {:?}", path))?;
            script::parse(&source).with_context(|| format!("Invalid script {:?}", path))?
        }
        None => script::parse(match mode {
            AppMode::Tiles => script::TILES_DEMO,
            AppMode::Orbit => script::ORBIT_DEMO,
        })?,
    };

    let mut runner = Runner {
        game: Game::new(&settings, mode, UVec2::new(cli.width, cli.height)),
        queue: InputQueue::new(settings.input.queue_capacity),
        clock: FrameClock::new(Some(Duration::from_millis(5))),
        limit: cli.frames,
    };

    for step in steps {
        if runner.done() {
            break;
        }
        match step {
            ScriptStep::Event(event) => {
                runner.queue.push(event);
            }
            ScriptStep::Cursor(x, y) => {
                runner.queue.push_cursor(x, y);
            }
            ScriptStep::Frames(count) => {
                for _ in 0..count {
                    if runner.done() {
                        break;
                    }
                    runner.step();
                }
            }
        }
    }
    if let Some(limit) = runner.limit {
        while runner.game.frame_index() < limit {
            runner.step();
        }
    }

    info!(
        mode = runner.game.mode().label(),
        frames = runner.game.frame_index(),
        dropped_events = runner.queue.dropped(),
        "Run complete"
    );
    Ok(())
}

struct Runner {
    game: Game,
    queue: InputQueue,
    clock: FrameClock,
    limit: Option<u64>,
}

impl Runner {
    fn done(&self) -> bool {
        self.limit.is_some_and(|limit| self.game.frame_index() >= limit)
    }

    fn step(&mut self) {
        self.clock.pace();
        let ctx = FrameContext {
            delta_time: self.clock.tick(),
        };
        let index = self.game.frame_index() + 1;
        match self.game.update_and_render(&ctx, &mut self.queue) {
            Frame::Tiles(frame) => info!(
                frame = index,
                hovered = ?frame.hovered,
                center = ?frame.center_tile,
                zoom = frame.zoom,
                tiles = frame.instances.len(),
                vertices = frame.vertices().len(),
                instance_bytes = std::mem::size_of_val(frame.raw_instances().as_slice()),
                "Tiles"
            ),
            Frame::Orbit(frame) => info!(
                frame = index,
                eye = ?frame.eye,
                hero = ?frame.draw.model.w_axis.truncate(),
                "Orbit"
            ),
        }
    }
}
