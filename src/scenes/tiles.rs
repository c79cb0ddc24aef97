use game_input::{ButtonAction, GameAction, InputBindings, InputEvent, InputState, MouseButton};
use glam::{IVec2, Vec2};
use rendering::scene::{TileLayer, Tilemap, screen_to_ndc, screen_to_tile_index};
use rendering::{Camera, CameraUniform, TileInstance, TileInstanceRaw, Vertex};
use tracing::debug;

use crate::settings::{CameraSettings, Settings};

/// Output of one tile-scene frame.
#[derive(Debug, Clone)]
pub struct TileFrame {
    pub instances: Vec<TileInstance>,
    pub hovered: Option<IVec2>,
    /// Tile under the framebuffer center.
    pub center_tile: Option<IVec2>,
    pub camera: CameraUniform,
    pub zoom: f32,
    /// Cursor in normalized device coordinates while it is inside the window.
    pub cursor_ndc: Option<Vec2>,
}

impl TileFrame {
    /// Two triangles per tile, in instance order.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.instances.iter().flat_map(TileInstance::vertices).collect()
    }

    /// Instances in their GPU upload layout.
    pub fn raw_instances(&self) -> Vec<TileInstanceRaw> {
        self.instances.iter().map(TileInstance::to_raw).collect()
    }
}

pub struct TileScene {
    tilemap: Tilemap,
    base_tile_size: Vec2,
    camera: Camera,
    settings: CameraSettings,
    texture_region: (Vec2, Vec2),
    hovered: Option<IVec2>,
}

impl TileScene {
    pub fn new(settings: &Settings, framebuffer: Vec2) -> Self {
        let tilemap = settings.build_tilemap();
        let mut scene = Self {
            base_tile_size: tilemap.tile_size(),
            tilemap,
            camera: Camera::new(framebuffer.x, framebuffer.y, 1.0),
            settings: settings.camera,
            texture_region: settings.tile_texture_region(),
            hovered: None,
        };
        // Start at 1:1 unless the configured zoom range excludes it.
        scene.set_zoom(1.0);
        scene
    }

    pub fn tilemap(&self) -> &Tilemap {
        &self.tilemap
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn hovered(&self) -> Option<IVec2> {
        self.hovered
    }

    /// Screen position of `tile` under the current pan and zoom.
    pub fn tile_screen_position(&self, tile: Vec2) -> Vec2 {
        rendering::scene::tile_to_screen(
            tile,
            &self.tilemap,
            self.camera.position,
            self.camera.framebuffer(),
        )
    }

    pub fn tile_at(&self, screen: Vec2) -> Option<IVec2> {
        screen_to_tile_index(
            screen,
            &self.tilemap,
            self.camera.position,
            self.camera.framebuffer(),
        )
    }

    /// `input` must already reflect `event`.
    pub fn handle_event(&mut self, event: &InputEvent, input: &InputState, bindings: &InputBindings) {
        match *event {
            InputEvent::CursorMoved { dx, dy, .. } => {
                if input.is_button_pressed(MouseButton::Right) {
                    self.camera.pan(Vec2::new(dx, dy));
                }
            }
            InputEvent::Key {
                key,
                action: ButtonAction::Press | ButtonAction::Repeat,
                ..
            } => {
                let speed = self.settings.pan_speed;
                let delta = match bindings.action_for(key, input.modifiers()) {
                    Some(GameAction::PanUp) => Vec2::new(0.0, -speed),
                    Some(GameAction::PanDown) => Vec2::new(0.0, speed),
                    Some(GameAction::PanLeft) => Vec2::new(-speed, 0.0),
                    Some(GameAction::PanRight) => Vec2::new(speed, 0.0),
                    _ => return,
                };
                self.camera.pan(delta);
            }
            InputEvent::Scroll { dy, .. } => {
                self.set_zoom(self.camera.zoom + dy * self.settings.zoom_speed);
            }
            InputEvent::Resized { width, height } => {
                debug!(width, height, "Framebuffer resized");
                self.camera.resize(width as f32, height as f32);
            }
            _ => {}
        }
    }

    /// Rebuilds the tilemap at the new zoom. The pan offset is rescaled from the
    /// previous zoom so the tile under the viewport center stays put.
    pub fn set_zoom(&mut self, zoom: f32) {
        assert!(zoom.is_finite(), "non-finite zoom {zoom}");
        let zoom = zoom.clamp(self.settings.min_zoom, self.settings.max_zoom);
        if zoom == self.camera.zoom {
            return;
        }

        self.camera.zoom_to(zoom);
        self.tilemap = self.tilemap.scaled(self.base_tile_size, zoom);
        debug!(
            zoom,
            tile_width = self.tilemap.tile_width,
            tile_height = self.tilemap.tile_height,
            "Zoom changed"
        );
    }

    pub fn update(&mut self, input: &InputState) -> TileFrame {
        let cursor = input
            .cursor_inside()
            .then(|| Vec2::from(input.cursor()));
        let hovered = cursor.and_then(|c| self.tile_at(c));

        if hovered != self.hovered {
            debug!(
                tile_x = hovered.map(|t| t.x),
                tile_y = hovered.map(|t| t.y),
                "Hovered tile changed"
            );
            self.hovered = hovered;
        }

        let layer = TileLayer {
            tilemap: &self.tilemap,
            camera: &self.camera,
            texture_region: self.texture_region,
            hovered,
            hover_lift: self.settings.hover_lift,
        };

        let mut camera = CameraUniform::new();
        camera.update_view_proj(&self.camera);

        TileFrame {
            instances: layer.build_instances(),
            hovered,
            center_tile: self.tile_at(self.camera.framebuffer() * 0.5),
            camera,
            zoom: self.camera.zoom,
            cursor_ndc: cursor.map(|c| screen_to_ndc(c, self.camera.framebuffer())),
        }
    }
}
