use game_input::{GameAction, InputBindings, InputEvent, InputState, MouseButton};
use glam::{Mat4, Vec2, Vec3, Vec4};
use rendering::{CUBE_VERTICES, MeshVertex, OrbitCamera, OrbitUniform, Perspective};
use tracing::debug;

use crate::settings::{OrbitSettings, Settings};

/// A mesh to draw with its full transform chain.
#[derive(Debug, Clone, Copy)]
pub struct MeshDraw {
    pub vertices: &'static [MeshVertex],
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub color: Vec4,
}

#[derive(Debug, Clone, Copy)]
pub struct OrbitFrame {
    pub draw: MeshDraw,
    pub uniform: OrbitUniform,
    pub eye: Vec3,
    /// Unit vector from the camera target towards the eye.
    pub direction: Vec3,
}

pub struct OrbitScene {
    camera: OrbitCamera,
    hero_position: Vec3,
    perspective: Perspective,
    settings: OrbitSettings,
}

impl OrbitScene {
    pub fn new(settings: &Settings, framebuffer: Vec2) -> Self {
        let o = &settings.orbit;
        Self {
            camera: OrbitCamera::new(Vec3::ZERO, o.initial_radius),
            hero_position: Vec3::ZERO,
            perspective: Perspective::new(o.fov_y_degrees, framebuffer, o.near, o.far),
            settings: *o,
        }
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn hero_position(&self) -> Vec3 {
        self.hero_position
    }

    fn zoom_sign(&self) -> f32 {
        if self.settings.invert_zoom { 1.0 } else { -1.0 }
    }

    pub fn handle_event(&mut self, event: &InputEvent, input: &InputState, delta_time: f32) {
        match *event {
            InputEvent::CursorMoved { dx, dy, .. } => {
                // Right-drag is reserved for steering the hero and takes precedence.
                if input.is_button_pressed(MouseButton::Left)
                    && !input.is_button_pressed(MouseButton::Right)
                {
                    let rotation = Vec2::new(dx, dy) * self.settings.drag_rotate_speed * delta_time;
                    self.camera.rotate_left(rotation.x);
                    self.camera.rotate_up(rotation.y);
                }
            }
            InputEvent::Scroll { dy, .. } => {
                self.camera.zoom(dy, self.settings.zoom_speed, self.zoom_sign());
                debug!(radius = self.camera.radius(), "Orbit radius changed");
            }
            InputEvent::Resized { width, height } => {
                debug!(width, height, "Framebuffer resized");
                self.perspective
                    .resize(Vec2::new(width as f32, height as f32));
            }
            _ => {}
        }
    }

    pub fn update(&mut self, input: &InputState, bindings: &InputBindings, delta_time: f32) -> OrbitFrame {
        let s = &self.settings;

        if bindings.is_action_pressed(GameAction::OrbitLeft, input) {
            self.camera.rotate_left(s.key_rotate_speed);
        }
        if bindings.is_action_pressed(GameAction::OrbitUp, input) {
            self.camera.rotate_up(s.key_rotate_speed);
        }
        if bindings.is_action_pressed(GameAction::HeroLeft, input) {
            self.hero_position.x -= s.hero_speed * delta_time;
        }
        if bindings.is_action_pressed(GameAction::HeroRight, input) {
            self.hero_position.x += s.hero_speed * delta_time;
        }

        // The camera is anchored to the hero.
        self.camera.target = self.hero_position;

        let draw = MeshDraw {
            vertices: &CUBE_VERTICES,
            model: Mat4::from_translation(self.hero_position),
            view: self.camera.view_matrix(),
            projection: self.perspective.matrix(),
            color: Vec4::ONE,
        };

        OrbitFrame {
            draw,
            uniform: OrbitUniform::new(&self.camera, &self.perspective),
            eye: self.camera.eye(),
            direction: self.camera.direction(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_input::{ButtonAction, KeyCode};

    const DT: f32 = 1.0 / 60.0;

    fn scene() -> (OrbitScene, InputState, InputBindings) {
        let settings = Settings::default();
        (
            OrbitScene::new(&settings, Vec2::new(1280.0, 720.0)),
            InputState::default(),
            InputBindings::from_settings(&settings.key_bindings),
        )
    }

    #[test]
    fn test_held_key_rotates_every_frame() {
        let (mut scene, mut input, bindings) = scene();
        input.apply(&InputEvent::key(KeyCode::KeyW, ButtonAction::Press));
        for _ in 0..5 {
            scene.update(&input, &bindings, DT);
        }
        assert!((scene.camera().azimuth() - 0.5).abs() < 1e-5);

        input.apply(&InputEvent::key(KeyCode::KeyW, ButtonAction::Release));
        input.apply(&InputEvent::key(KeyCode::KeyS, ButtonAction::Press));
        for _ in 0..100 {
            scene.update(&input, &bindings, DT);
        }
        assert!(scene.camera().polar() < std::f32::consts::FRAC_PI_2);
        assert!((scene.camera().azimuth() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_modifier_binding_from_key_event() {
        let mut settings = Settings::default();
        settings.key_bindings.orbit_left = crate::settings::KeyBinding::single("Shift+KeyW");
        let mut scene = OrbitScene::new(&settings, Vec2::new(1280.0, 720.0));
        let bindings = InputBindings::from_settings(&settings.key_bindings);
        let mut input = InputState::default();

        input.apply(&InputEvent::key(KeyCode::KeyW, ButtonAction::Press));
        scene.update(&input, &bindings, DT);
        assert_eq!(scene.camera().azimuth(), 0.0);

        input.apply(&InputEvent::Key {
            key: KeyCode::KeyW,
            action: ButtonAction::Repeat,
            modifiers: game_input::Modifiers { shift: true, ..Default::default() },
        });
        scene.update(&input, &bindings, DT);
        scene.update(&input, &bindings, DT);
        assert!((scene.camera().azimuth() - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_camera_follows_hero() {
        let (mut scene, mut input, bindings) = scene();
        input.apply(&InputEvent::key(KeyCode::KeyD, ButtonAction::Press));
        let frame = scene.update(&input, &bindings, 0.5);
        assert_eq!(scene.hero_position(), Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(scene.camera().target, scene.hero_position());
        assert!(((frame.eye - scene.hero_position()).length() - 3.0).abs() < 1e-5);
        assert_eq!(frame.draw.model.w_axis.truncate(), Vec3::new(0.5, 0.0, 0.0));

        input.apply(&InputEvent::key(KeyCode::KeyD, ButtonAction::Release));
        input.apply(&InputEvent::key(KeyCode::KeyQ, ButtonAction::Press));
        scene.update(&input, &bindings, 1.0);
        assert_eq!(scene.hero_position(), Vec3::new(-0.5, 0.0, 0.0));
    }

    #[test]
    fn test_left_drag_rotates() {
        let (mut scene, mut input, _) = scene();
        let drag = InputEvent::CursorMoved { x: 0.0, y: 0.0, dx: 60.0, dy: -30.0 };

        scene.handle_event(&drag, &input, DT);
        assert_eq!(scene.camera().azimuth(), 0.0);

        input.apply(&InputEvent::button(MouseButton::Left, ButtonAction::Press));
        scene.handle_event(&drag, &input, DT);
        assert!((scene.camera().azimuth() - 0.1).abs() < 1e-5);
        assert!((scene.camera().polar() + 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_scroll_up_moves_closer() {
        let (mut scene, input, _) = scene();
        scene.handle_event(&InputEvent::scroll(1.0), &input, DT);
        assert_eq!(scene.camera().radius(), 2.5);
        for _ in 0..20 {
            scene.handle_event(&InputEvent::scroll(1.0), &input, DT);
        }
        assert_eq!(scene.camera().radius(), 0.0);
    }

    #[test]
    fn test_frame_matrices_are_finite() {
        let (mut scene, input, bindings) = scene();
        scene.handle_event(&InputEvent::Resized { width: 0, height: 0 }, &input, DT);
        let frame = scene.update(&input, &bindings, DT);
        assert!(frame.draw.view.is_finite());
        assert!(frame.draw.projection.is_finite());
        assert!((frame.direction.length() - 1.0).abs() < 1e-5);
        assert_eq!(frame.draw.vertices.len(), 36);
    }
}
