pub use game_types::{
    AppMode, CameraSettings, InputSettings, KeyBinding, KeyBindings, OrbitSettings,
    ProjectionRatioSetting, SpriteSheetSettings, TilemapSettings,
};

use anyhow::ensure;
use glam::{UVec2, Vec2};
use rendering::scene::{ProjectionRatio, SpriteSheet, Tilemap};
use tracing::warn;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub mode: AppMode,
    pub tilemap: TilemapSettings,
    pub camera: CameraSettings,
    pub orbit: OrbitSettings,
    pub input: InputSettings,
    pub key_bindings: KeyBindings,
}

impl Settings {
    /// Rejects values the math core would assert on.
    pub fn validate(&self) -> anyhow::Result<()> {
        let t = &self.tilemap;
        ensure!(
            t.tile_width.is_finite() && t.tile_width > 0.0,
            "tilemap.tile_width must be positive, got {}",
            t.tile_width
        );
        ensure!(
            t.tile_height.is_finite() && t.tile_height > 0.0,
            "tilemap.tile_height must be positive, got {}",
            t.tile_height
        );
        if let ProjectionRatioSetting::Fixed(r) = t.projection_ratio {
            ensure!(r.is_finite() && r > 0.0, "tilemap.projection_ratio must be positive, got {r}");
        }

        let c = &self.camera;
        ensure!(
            c.min_zoom.is_finite() && c.max_zoom.is_finite() && c.min_zoom > 0.0,
            "camera zoom range must be finite and positive"
        );
        ensure!(
            c.min_zoom <= c.max_zoom,
            "camera.min_zoom ({}) exceeds camera.max_zoom ({})",
            c.min_zoom,
            c.max_zoom
        );
        ensure!(
            [c.pan_speed, c.zoom_speed, c.hover_lift].iter().all(|v| v.is_finite()),
            "camera speeds must be finite"
        );

        let o = &self.orbit;
        ensure!(
            [
                o.initial_radius,
                o.key_rotate_speed,
                o.drag_rotate_speed,
                o.zoom_speed,
                o.hero_speed,
                o.fov_y_degrees,
                o.near,
                o.far,
            ]
            .iter()
            .all(|v| v.is_finite()),
            "orbit settings must be finite"
        );
        ensure!(
            o.near > 0.0 && o.near < o.far,
            "orbit near/far planes must satisfy 0 < near < far"
        );
        ensure!(
            o.fov_y_degrees > 0.0 && o.fov_y_degrees < 180.0,
            "orbit.fov_y_degrees must be within (0, 180)"
        );

        ensure!(self.input.queue_capacity > 0, "input.queue_capacity must be non-zero");
        Ok(())
    }

    pub fn build_tilemap(&self) -> Tilemap {
        let t = &self.tilemap;
        let ratio = match t.projection_ratio {
            ProjectionRatioSetting::Fixed(r) => ProjectionRatio::Fixed(r),
            ProjectionRatioSetting::Isometric => ProjectionRatio::Isometric,
        };
        Tilemap::new(t.rows, t.columns, t.tile_width, t.tile_height).with_projection_ratio(ratio)
    }

    pub fn sprite_sheet(&self) -> SpriteSheet {
        let s = &self.tilemap.sprite_sheet;
        SpriteSheet::new(
            UVec2::new(s.texture_width, s.texture_height),
            UVec2::new(s.cell_width, s.cell_height),
        )
    }

    /// Texture coordinates used for every tile. Falls back to the whole
    /// texture when the configured sprite does not exist.
    pub fn tile_texture_region(&self) -> (Vec2, Vec2) {
        let index = self.tilemap.sprite_sheet.sprite_index;
        self.sprite_sheet().region(index).unwrap_or_else(|| {
            warn!(index, "Sprite index outside the sprite sheet, using whole texture");
            (Vec2::ZERO, Vec2::ONE)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        let tilemap = settings.build_tilemap();
        assert_eq!((tilemap.rows, tilemap.columns), (10, 10));
        assert_eq!(settings.tile_texture_region(), (Vec2::ZERO, Vec2::ONE));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.tilemap.tile_width = 0.0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.camera.min_zoom = 5.0;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("min_zoom"));

        let mut settings = Settings::default();
        settings.orbit.near = f32::NAN;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.input.queue_capacity = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.tilemap.projection_ratio = ProjectionRatioSetting::Fixed(-1.0);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_sprite_uses_whole_texture() {
        let mut settings = Settings::default();
        settings.tilemap.sprite_sheet.sprite_index = 3;
        assert_eq!(settings.tile_texture_region(), (Vec2::ZERO, Vec2::ONE));
    }
}
