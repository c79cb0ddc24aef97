use glam::{UVec2, Vec2};

/// Uniform grid of sprites packed into one texture, read left to right, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheet {
    pub texture_size: UVec2,
    pub cell_size: UVec2,
}

impl SpriteSheet {
    pub fn new(texture_size: UVec2, cell_size: UVec2) -> Self {
        Self {
            texture_size,
            cell_size,
        }
    }

    pub fn columns(&self) -> u32 {
        if self.cell_size.x == 0 {
            return 0;
        }
        self.texture_size.x / self.cell_size.x
    }

    pub fn rows(&self) -> u32 {
        if self.cell_size.y == 0 {
            return 0;
        }
        self.texture_size.y / self.cell_size.y
    }

    pub fn sprite_count(&self) -> u32 {
        self.columns() * self.rows()
    }

    /// Normalized texture coordinates `(min, max)` of sprite `index`.
    pub fn region(&self, index: u32) -> Option<(Vec2, Vec2)> {
        if index >= self.sprite_count() {
            return None;
        }
        let cell = UVec2::new(index % self.columns(), index / self.columns());
        let texture = self.texture_size.as_vec2();
        let min = (cell * self.cell_size).as_vec2() / texture;
        let max = ((cell + UVec2::ONE) * self.cell_size).as_vec2() / texture;
        Some((min, max))
    }
}
