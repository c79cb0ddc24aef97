use glam::{IVec2, Mat2, Vec2};

use super::constants::{
    DEFAULT_PROJECTION_RATIO, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH, DEFAULT_TILEMAP_COLUMNS,
    DEFAULT_TILEMAP_ROWS,
};

/// Vertical squash applied to the tile basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionRatio {
    Fixed(f32),
    /// Derived from the tile aspect so every tile projects to a 2:1 diamond.
    Isometric,
}

impl Default for ProjectionRatio {
    fn default() -> Self {
        ProjectionRatio::Fixed(DEFAULT_PROJECTION_RATIO)
    }
}

impl ProjectionRatio {
    pub fn resolve(self, tile_width: f32, tile_height: f32) -> f32 {
        match self {
            ProjectionRatio::Fixed(r) => r,
            ProjectionRatio::Isometric => tile_width / (2.0 * tile_height),
        }
    }
}

/// Grid of `columns` x `rows` tiles. Tile coordinates are `(column, row)`.
///
/// A value type: zooming rebuilds it from the base tile size rather than
/// mutating the existing one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilemap {
    pub rows: u32,
    pub columns: u32,
    pub tile_width: f32,
    pub tile_height: f32,
    pub projection_ratio: ProjectionRatio,
}

impl Default for Tilemap {
    fn default() -> Self {
        Self::new(
            DEFAULT_TILEMAP_ROWS,
            DEFAULT_TILEMAP_COLUMNS,
            DEFAULT_TILE_WIDTH,
            DEFAULT_TILE_HEIGHT,
        )
    }
}

impl Tilemap {
    pub fn new(rows: u32, columns: u32, tile_width: f32, tile_height: f32) -> Self {
        let tilemap = Self {
            rows,
            columns,
            tile_width,
            tile_height,
            projection_ratio: ProjectionRatio::default(),
        };
        tilemap.assert_valid();
        tilemap
    }

    pub fn with_projection_ratio(mut self, projection_ratio: ProjectionRatio) -> Self {
        self.projection_ratio = projection_ratio;
        self.assert_valid();
        self
    }

    /// Rebuilds the tilemap with tiles `base_size * zoom` large.
    pub fn scaled(&self, base_size: Vec2, zoom: f32) -> Self {
        assert!(
            zoom.is_finite() && zoom > 0.0,
            "tilemap zoom must be finite and positive, got {zoom}"
        );
        let size = base_size * zoom;
        Self::new(self.rows, self.columns, size.x, size.y)
            .with_projection_ratio(self.projection_ratio)
    }

    fn assert_valid(&self) {
        assert!(
            self.tile_width.is_finite() && self.tile_width > 0.0,
            "tile width must be finite and positive, got {}",
            self.tile_width
        );
        assert!(
            self.tile_height.is_finite() && self.tile_height > 0.0,
            "tile height must be finite and positive, got {}",
            self.tile_height
        );
        let ratio = self.ratio();
        assert!(
            ratio.is_finite() && ratio > 0.0,
            "projection ratio must be finite and positive, got {ratio}"
        );
    }

    pub fn ratio(&self) -> f32 {
        self.projection_ratio
            .resolve(self.tile_width, self.tile_height)
    }

    pub fn tile_size(&self) -> Vec2 {
        Vec2::new(self.tile_width, self.tile_height)
    }

    /// Change-of-basis matrix whose columns are the screen images of the
    /// tile-space unit vectors.
    pub fn basis(&self) -> Mat2 {
        let half_w = self.tile_width * 0.5;
        let half_h = self.tile_height * 0.5;
        let r = self.ratio();

        Mat2::from_cols(Vec2::new(half_w, r * half_h), Vec2::new(-half_w, r * half_h))
    }

    /// Offset that re-anchors tile (0, 0) to its top-left corner and centers the
    /// map inside the framebuffer. Does not divide by `rows`, so empty maps are fine.
    pub fn centering(&self, framebuffer: Vec2) -> Vec2 {
        let map_center_y = self.tile_height * self.rows as f32 * self.ratio() * 0.5;
        Vec2::new(
            framebuffer.x * 0.5 - self.tile_width * 0.5,
            framebuffer.y * 0.5 - map_center_y,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    pub fn tile_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    pub fn contains(&self, tile: IVec2) -> bool {
        tile.x >= 0 && tile.y >= 0 && (tile.x as u32) < self.columns && (tile.y as u32) < self.rows
    }

    /// All tiles in row-major order, the order they are drawn in.
    pub fn tiles(&self) -> impl Iterator<Item = IVec2> + use<> {
        let columns = self.columns as i32;
        (0..self.rows as i32).flat_map(move |row| (0..columns).map(move |col| IVec2::new(col, row)))
    }
}
