use super::constants::TILE_INDEX_EPSILON;
use super::tilemap::Tilemap;
use glam::{IVec2, Vec2};

/// Screen-space offset of a tile relative to tile (0, 0), before centering.
pub fn get_isometric_coordinate(tile: Vec2, tilemap: &Tilemap) -> Vec2 {
    tilemap.basis() * tile
}

/// Top-left screen position of `tile` for the given pan offset and framebuffer size.
pub fn tile_to_screen(tile: Vec2, tilemap: &Tilemap, camera_offset: Vec2, framebuffer: Vec2) -> Vec2 {
    debug_assert!(tile.is_finite() && camera_offset.is_finite() && framebuffer.is_finite());
    get_isometric_coordinate(tile, tilemap) + tilemap.centering(framebuffer) + camera_offset
}

/// Exact inverse of [`tile_to_screen`]: returns fractional tile coordinates.
pub fn screen_to_tile(screen: Vec2, tilemap: &Tilemap, camera_offset: Vec2, framebuffer: Vec2) -> Vec2 {
    debug_assert!(screen.is_finite() && camera_offset.is_finite() && framebuffer.is_finite());
    let local = screen - camera_offset - tilemap.centering(framebuffer);
    tilemap.basis().inverse() * local
}

/// Tile under a screen point, or `None` when it falls outside the map.
pub fn screen_to_tile_index(
    screen: Vec2,
    tilemap: &Tilemap,
    camera_offset: Vec2,
    framebuffer: Vec2,
) -> Option<IVec2> {
    let t = screen_to_tile(screen, tilemap, camera_offset, framebuffer);
    let tile = IVec2::new(snap_floor(t.x) as i32, snap_floor(t.y) as i32);
    tilemap.contains(tile).then_some(tile)
}

// Values within float noise of an integer belong to that tile, not the one before it.
fn snap_floor(v: f32) -> f32 {
    let rounded = v.round();
    if (v - rounded).abs() < TILE_INDEX_EPSILON {
        rounded
    } else {
        v.floor()
    }
}

/// Pixel coordinates (origin top-left, y down) to normalized device coordinates.
pub fn screen_to_ndc(screen: Vec2, framebuffer: Vec2) -> Vec2 {
    Vec2::new(
        2.0 * (screen.x / framebuffer.x) - 1.0,
        -(2.0 * (screen.y / framebuffer.y) - 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::tilemap::ProjectionRatio;

    const FRAMEBUFFER: Vec2 = Vec2::new(1280.0, 720.0);

    fn reference_tilemap() -> Tilemap {
        Tilemap::new(10, 10, 256.0, 192.0)
    }

    #[test]
    fn test_round_trip_every_tile() {
        let offsets = [Vec2::ZERO, Vec2::new(-137.0, 42.5), Vec2::new(900.0, -3000.0)];
        let tilemaps = [
            reference_tilemap(),
            Tilemap::new(7, 13, 64.0, 32.0),
            Tilemap::new(5, 3, 100.0, 80.0).with_projection_ratio(ProjectionRatio::Isometric),
        ];

        for tilemap in &tilemaps {
            for offset in offsets {
                for tile in tilemap.tiles() {
                    let screen = tile_to_screen(tile.as_vec2(), tilemap, offset, FRAMEBUFFER);
                    let back = screen_to_tile(screen, tilemap, offset, FRAMEBUFFER);
                    assert!(
                        (back - tile.as_vec2()).abs().max_element() < 1e-3,
                        "tile {tile} came back as {back} (offset {offset})"
                    );
                    assert_eq!(
                        screen_to_tile_index(screen, tilemap, offset, FRAMEBUFFER),
                        Some(tile),
                        "tile {tile} with offset {offset}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_reference_corners() {
        let tilemap = reference_tilemap();
        let first = tile_to_screen(Vec2::ZERO, &tilemap, Vec2::ZERO, FRAMEBUFFER);
        let last = tile_to_screen(Vec2::splat(9.0), &tilemap, Vec2::ZERO, FRAMEBUFFER);

        assert!((first - Vec2::new(512.0, -280.0)).length() < 1e-3);
        assert!((last - Vec2::new(512.0, 872.0)).length() < 1e-3);
        assert_ne!(first, last);

        // Midpoint without framebuffer centering is the projected centroid
        // minus the tile re-anchor and the vertical map centering.
        let midpoint = (first + last) * 0.5 - FRAMEBUFFER * 0.5;
        let centroid = tilemap.basis() * Vec2::splat(4.5);
        let expected = centroid - Vec2::new(128.0, 640.0);
        assert!(
            (midpoint - expected).length() < 1e-3,
            "midpoint {midpoint} expected {expected}"
        );
    }

    #[test]
    fn test_tile_interior_hits() {
        let tilemap = reference_tilemap();
        let offset = Vec2::new(25.0, -40.0);

        for probe in [Vec2::new(3.5, 5.5), Vec2::new(3.05, 5.95), Vec2::new(3.95, 5.02)] {
            let screen = tile_to_screen(probe, &tilemap, offset, FRAMEBUFFER);
            assert_eq!(
                screen_to_tile_index(screen, &tilemap, offset, FRAMEBUFFER),
                Some(IVec2::new(3, 5)),
                "probe {probe}"
            );
        }
    }

    #[test]
    fn test_outside_map_is_none() {
        let tilemap = reference_tilemap();
        let before = tile_to_screen(Vec2::new(-0.5, 2.5), &tilemap, Vec2::ZERO, FRAMEBUFFER);
        let after = tile_to_screen(Vec2::new(2.5, 10.5), &tilemap, Vec2::ZERO, FRAMEBUFFER);
        assert_eq!(screen_to_tile_index(before, &tilemap, Vec2::ZERO, FRAMEBUFFER), None);
        assert_eq!(screen_to_tile_index(after, &tilemap, Vec2::ZERO, FRAMEBUFFER), None);
    }

    #[test]
    fn test_screen_to_ndc() {
        let fb = Vec2::new(800.0, 600.0);
        assert_eq!(screen_to_ndc(Vec2::ZERO, fb), Vec2::new(-1.0, 1.0));
        assert_eq!(screen_to_ndc(fb, fb), Vec2::new(1.0, -1.0));
        assert_eq!(screen_to_ndc(fb * 0.5, fb), Vec2::ZERO);
    }
}
