use game_input::{InputBindings, InputQueue, InputState};
use glam::UVec2;
use tracing::{info, trace};

use crate::scenes::{OrbitFrame, OrbitScene, TileFrame, TileScene};
use crate::settings::{AppMode, Settings};

/// Per-frame values supplied by the platform layer.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Seconds since the previous frame.
    pub delta_time: f32,
}

pub enum Scene {
    Tiles(TileScene),
    Orbit(OrbitScene),
}

#[derive(Debug, Clone)]
pub enum Frame {
    Tiles(TileFrame),
    Orbit(OrbitFrame),
}

/// Owns all mutable frame state. Mutated only through [`Game::update_and_render`].
pub struct Game {
    scene: Scene,
    input: InputState,
    bindings: InputBindings,
    frame_index: u64,
}

impl Game {
    pub fn new(settings: &Settings, mode: AppMode, framebuffer: UVec2) -> Self {
        let size = framebuffer.as_vec2();
        let scene = match mode {
            AppMode::Tiles => Scene::Tiles(TileScene::new(settings, size)),
            AppMode::Orbit => Scene::Orbit(OrbitScene::new(settings, size)),
        };
        info!(mode = mode.label(), width = framebuffer.x, height = framebuffer.y, "Game initialized");

        Self {
            scene,
            input: InputState::default(),
            bindings: InputBindings::from_settings(&settings.key_bindings),
            frame_index: 0,
        }
    }

    pub fn mode(&self) -> AppMode {
        match self.scene {
            Scene::Tiles(_) => AppMode::Tiles,
            Scene::Orbit(_) => AppMode::Orbit,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Drains queued input oldest-first, then advances the active scene by one frame.
    pub fn update_and_render(&mut self, ctx: &FrameContext, queue: &mut InputQueue) -> Frame {
        assert!(
            ctx.delta_time.is_finite() && ctx.delta_time >= 0.0,
            "invalid frame delta {}",
            ctx.delta_time
        );

        for event in queue.drain() {
            trace!(kind = event.kind(), "Processing input event");
            self.input.apply(&event);
            match &mut self.scene {
                Scene::Tiles(scene) => scene.handle_event(&event, &self.input, &self.bindings),
                Scene::Orbit(scene) => scene.handle_event(&event, &self.input, ctx.delta_time),
            }
        }

        self.frame_index += 1;
        match &mut self.scene {
            Scene::Tiles(scene) => Frame::Tiles(scene.update(&self.input)),
            Scene::Orbit(scene) => {
                Frame::Orbit(scene.update(&self.input, &self.bindings, ctx.delta_time))
            }
        }
    }
}
