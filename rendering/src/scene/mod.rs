use crate::{Camera, TileInstance};
use glam::{IVec2, Vec2};

pub mod constants;
pub mod sprite_sheet;
pub mod tilemap;
pub mod utils;

pub use constants::*;
pub use sprite_sheet::SpriteSheet;
pub use tilemap::{ProjectionRatio, Tilemap};
pub use utils::{
    get_isometric_coordinate, screen_to_ndc, screen_to_tile, screen_to_tile_index, tile_to_screen,
};

/// Everything needed to turn a tilemap into draw instances for one frame.
pub struct TileLayer<'a> {
    pub tilemap: &'a Tilemap,
    pub camera: &'a Camera,
    pub texture_region: (Vec2, Vec2),
    pub hovered: Option<IVec2>,
    pub hover_lift: f32,
}

impl TileLayer<'_> {
    /// One instance per tile in row-major order. The hovered tile is raised by
    /// `hover_lift` scaled with the camera zoom.
    pub fn build_instances(&self) -> Vec<TileInstance> {
        let framebuffer = self.camera.framebuffer();
        let size = self.tilemap.tile_size();
        let (tex_min, tex_max) = self.texture_region;

        let mut instances = Vec::with_capacity(self.tilemap.tile_count());
        for tile in self.tilemap.tiles() {
            let position =
                tile_to_screen(tile.as_vec2(), self.tilemap, self.camera.position, framebuffer);
            let mut instance =
                TileInstance::new(tile, position, size).with_texture_region(tex_min, tex_max);
            if self.hovered == Some(tile) {
                instance = instance.hovered(self.hover_lift * self.camera.zoom);
            }
            instances.push(instance);
        }
        instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InstanceFlag;

    #[test]
    fn test_simple_map() {
        let tilemap = Tilemap::new(2, 2, 256.0, 192.0);
        let camera = Camera::new(1280.0, 720.0, 1.0);
        let layer = TileLayer {
            tilemap: &tilemap,
            camera: &camera,
            texture_region: (Vec2::ZERO, Vec2::ONE),
            hovered: Some(IVec2::new(1, 1)),
            hover_lift: 20.0,
        };

        let tile_positions = [(512., 232.), (640., 296.), (384., 296.), (512., 340.)];
        let instances = layer.build_instances();
        assert_eq!(instances.len(), 4);

        for (i, instance) in instances.iter().enumerate() {
            let expected = Vec2::new(tile_positions[i].0, tile_positions[i].1);
            assert!(
                (instance.position - expected).length() < 1e-3,
                "Tile {} at {} expected {}",
                instance.tile,
                instance.position,
                expected
            );
            assert_eq!(instance.size, Vec2::new(256.0, 192.0));
        }

        assert_eq!(instances[3].flags, InstanceFlag::Hover);
        assert!(instances[..3].iter().all(|i| i.flags == InstanceFlag::None));
    }

    #[test]
    fn test_empty_map_has_no_instances() {
        let tilemap = Tilemap::new(10, 0, 256.0, 192.0);
        let camera = Camera::new(1280.0, 720.0, 1.0);
        let layer = TileLayer {
            tilemap: &tilemap,
            camera: &camera,
            texture_region: (Vec2::ZERO, Vec2::ONE),
            hovered: None,
            hover_lift: 20.0,
        };
        assert!(layer.build_instances().is_empty());
    }
}
