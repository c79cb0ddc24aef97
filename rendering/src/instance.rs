use crate::vertex::{Vertex, make_quad};
use glam::{IVec2, Vec2};
use num_enum::IntoPrimitive;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u32)]
pub enum InstanceFlag {
    #[default]
    None = 0,
    Hover = 1,
}

/// One tile to draw: destination rectangle in pixels plus texture region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileInstance {
    pub tile: IVec2,
    pub position: Vec2,
    pub size: Vec2,
    pub tex_min: Vec2,
    pub tex_max: Vec2,
    pub flags: InstanceFlag,
}

impl TileInstance {
    pub fn new(tile: IVec2, position: Vec2, size: Vec2) -> Self {
        Self {
            tile,
            position,
            size,
            tex_min: Vec2::ZERO,
            tex_max: Vec2::ONE,
            flags: InstanceFlag::None,
        }
    }

    pub fn with_texture_region(mut self, tex_min: Vec2, tex_max: Vec2) -> Self {
        self.tex_min = tex_min;
        self.tex_max = tex_max;
        self
    }

    /// Raises the tile by `lift` pixels and marks it hovered.
    pub fn hovered(mut self, lift: f32) -> Self {
        self.position.y -= lift;
        self.flags = InstanceFlag::Hover;
        self
    }

    pub fn vertices(&self) -> [Vertex; 6] {
        make_quad(self.position, self.size, self.tex_min, self.tex_max)
    }

    pub fn to_raw(&self) -> TileInstanceRaw {
        TileInstanceRaw {
            position: self.position.into(),
            size: self.size.into(),
            tex_min: self.tex_min.into(),
            tex_max: self.tex_max.into(),
            flags: self.flags.into(),
            _padding: 0,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TileInstanceRaw {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub tex_min: [f32; 2],
    pub tex_max: [f32; 2],
    pub flags: u32,
    pub _padding: u32,
}
