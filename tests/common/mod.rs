#![allow(dead_code)]

use game_input::{ButtonAction, InputEvent, InputQueue, KeyCode, MouseButton};
use glam::UVec2;
use isoscape::script::{self, ScriptStep};
use isoscape::{AppMode, Frame, FrameContext, Game, OrbitFrame, Scene, Settings, TileFrame, TileScene};

pub const WIDTH: u32 = 1280;
pub const HEIGHT: u32 = 720;

/// Drives a [`Game`] the way the platform layer does: events go through the
/// queue and are only seen by the scene on the next frame.
pub struct TestScene {
    game: Game,
    queue: InputQueue,
    delta_time: f32,
}

impl TestScene {
    pub fn new(mode: AppMode) -> Self {
        Self::with_settings(Settings::default(), mode)
    }

    pub fn with_settings(settings: Settings, mode: AppMode) -> Self {
        settings.validate().expect("test settings must be valid");
        Self {
            game: Game::new(&settings, mode, UVec2::new(WIDTH, HEIGHT)),
            queue: InputQueue::new(settings.input.queue_capacity),
            delta_time: 1.0 / 60.0,
        }
    }

    pub fn set_delta_time(&mut self, delta_time: f32) {
        self.delta_time = delta_time;
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn tile_scene(&self) -> &TileScene {
        match self.game.scene() {
            Scene::Tiles(scene) => scene,
            Scene::Orbit(_) => panic!("not a tile scene"),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        assert!(self.queue.push(event), "input queue full");
    }

    pub fn move_cursor(&mut self, x: f32, y: f32) {
        assert!(self.queue.push_cursor(x, y), "input queue full");
    }

    pub fn press(&mut self, key: KeyCode) {
        self.push(InputEvent::key(key, ButtonAction::Press));
    }

    pub fn release(&mut self, key: KeyCode) {
        self.push(InputEvent::key(key, ButtonAction::Release));
    }

    pub fn button(&mut self, button: MouseButton, action: ButtonAction) {
        self.push(InputEvent::button(button, action));
    }

    pub fn scroll(&mut self, dy: f32) {
        self.push(InputEvent::scroll(dy));
    }

    pub fn frame(&mut self) -> Frame {
        let ctx = FrameContext {
            delta_time: self.delta_time,
        };
        self.game.update_and_render(&ctx, &mut self.queue)
    }

    pub fn tiles(&mut self) -> TileFrame {
        match self.frame() {
            Frame::Tiles(frame) => frame,
            Frame::Orbit(_) => panic!("expected a tile frame"),
        }
    }

    pub fn orbit(&mut self) -> OrbitFrame {
        match self.frame() {
            Frame::Orbit(frame) => frame,
            Frame::Tiles(_) => panic!("expected an orbit frame"),
        }
    }

    /// Runs a script and returns the last frame produced.
    pub fn run_script(&mut self, source: &str) -> Option<Frame> {
        let mut last = None;
        for step in script::parse(source).expect("valid script") {
            match step {
                ScriptStep::Event(event) => self.push(event),
                ScriptStep::Cursor(x, y) => self.move_cursor(x, y),
                ScriptStep::Frames(count) => {
                    for _ in 0..count {
                        last = Some(self.frame());
                    }
                }
            }
        }
        last
    }
}

/// One line per instance, in draw order.
pub fn describe_tiles(frame: &TileFrame) -> String {
    frame
        .instances
        .iter()
        .map(|instance| {
            format!(
                "tile ({}, {}) at ({:.1}, {:.1}) size {}x{} flags {}",
                instance.tile.x,
                instance.tile.y,
                instance.position.x,
                instance.position.y,
                instance.size.x,
                instance.size.y,
                u32::from(instance.flags),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
